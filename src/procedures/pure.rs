//! Procedures to identify pure literals.
use std::collections::BTreeSet;

use crate::structures::literal::Literal;

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an interator over clauses returns a pair of vectors of the symbols of pure literals relative to those clauses.
///
/// The first vector contains the symbols which occur only in negative literals, and the second vector contains the symbols which occur only in positive literals.
/// Both vectors are in alphabetical order.
///
/// ```rust
/// # use iengine::procedures::pure::pure_literals;
/// # use iengine::structures::clause::Clause;
/// let clauses = [
///     Clause::new(["a".parse().unwrap(), "~b".parse().unwrap()]),
///     Clause::new(["~a".parse().unwrap(), "c".parse().unwrap()]),
/// ];
///
/// let (pure_false, pure_true) = pure_literals(clauses.iter().map(|clause| clause.literals()));
/// assert_eq!(pure_false, vec!["b"]);
/// assert_eq!(pure_true, vec!["c"]);
/// ```
pub fn pure_literals<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l Literal>>,
) -> (Vec<&'l str>, Vec<&'l str>) {
    let mut the_true: BTreeSet<&str> = BTreeSet::new();
    let mut the_false: BTreeSet<&str> = BTreeSet::new();

    clauses.for_each(|literals| {
        for literal in literals {
            match literal.polarity() {
                true => the_true.insert(literal.name()),
                false => the_false.insert(literal.name()),
            };
        }
    });

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}
