//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The representation of a clause is as a vector of literals, without duplicates, in order of first occurrence.
//!
//! ```rust
//! # use iengine::structures::clause::Clause;
//! # use iengine::structures::literal::Literal;
//! let a: Literal = "a".parse().unwrap();
//! let b: Literal = "~b".parse().unwrap();
//!
//! let clause = Clause::new([a.clone(), b.clone(), a.clone()]);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.to_string(), "a || ~b");
//!
//! // Setting b to true falsifies ~b, and leaves the unit clause a.
//! let reduced = clause.assign(&b.negate()).unwrap();
//! assert_eq!(reduced.unit(), Some(&a));
//!
//! // Setting a to true satisfies the clause.
//! assert!(clause.assign(&a).is_none());
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause, where the 'unit' is the literal).
//! - A clause containing a literal and its complement is a tautology, and is always true.

use std::collections::BTreeSet;

use crate::{
    structures::{literal::Literal, model::Model},
    types::err::{self},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause of the given literals, with any duplicate literal skipped.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut clause = Clause::default();
        for literal in literals {
            clause.push(literal);
        }
        clause
    }

    /// Adds the literal to the clause, unless the literal is already present.
    pub fn push(&mut self, literal: Literal) {
        if !self.literals.iter().any(|l| *l == literal) {
            self.literals.push(literal);
        }
    }

    /// An iterator over all literals in the clause, in order of first occurrence.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The empty clause has no literal and is falsified.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literal of a unit clause, if the clause has exactly one literal.
    pub fn unit(&self) -> Option<&Literal> {
        match self.literals.as_slice() {
            [literal] => Some(literal),
            _ => None,
        }
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Whether the clause contains some literal and its complement.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.literals.iter().any(|other| literal.complements(other)))
    }

    /// The names of all symbols in the clause.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(|literal| literal.name())
    }

    /// The value of the clause on a model, which must value every symbol of the clause.
    pub fn evaluate(&self, model: &Model) -> Result<bool, err::ModelError> {
        let mut value = false;
        for literal in &self.literals {
            value |= literal.evaluate(model)?;
        }
        Ok(value)
    }

    /// The clause which remains after the given literal is set true:
    /// - None, if the clause contains the literal and so is satisfied.
    /// - Otherwise, the clause without the complement of the literal (which may be empty).
    pub fn assign(&self, literal: &Literal) -> Option<Clause> {
        if self.contains(literal) {
            return None;
        }
        Some(Clause {
            literals: self
                .literals
                .iter()
                .filter(|l| !l.complements(literal))
                .cloned()
                .collect(),
        })
    }
}

/// Removes tautological clauses and duplicate clauses, keeping the first occurrence of each canonical string.
pub fn filter_clauses(clauses: impl IntoIterator<Item = Clause>) -> Vec<Clause> {
    let mut seen = BTreeSet::<String>::default();
    clauses
        .into_iter()
        .filter(|clause| !clause.is_tautology())
        .filter(|clause| seen.insert(clause.to_string()))
        .collect()
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literals.is_empty() {
            true => write!(f, "False"),
            false => {
                let literals = self
                    .literals
                    .iter()
                    .map(|literal| literal.to_string())
                    .collect::<Vec<_>>();
                write!(f, "{}", literals.join(" || "))
            }
        }
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }
}
