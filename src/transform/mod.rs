/*!
Rewriting sentences to equivalent formulas in conjunctive normal form.

The rewrite is a fixed pipeline of stages, each a pure function from a sentence to a new sentence:

1. [Biconditionals](eliminate_biconditionals) are eliminated: `A<=>B` becomes `(A=>B)&(B=>A)`.
2. [Implications](eliminate_implications) are eliminated: `A=>B` becomes `~A||B`.
3. [Negations are pushed](push_negations) inward, by [removing double negations](remove_double_negations) and [applying De Morgan's laws](apply_de_morgan) until neither changes the sentence.
4. The [negation of an atom](collapse_negated_atoms) is collapsed into a negated literal (or the opposite constant).
5. Disjunction is [distributed](distribute) over conjunction until no conjunction is found under a disjunction.
6. The sentence is [flattened](flatten) to clauses, splitting first at conjunctions and then at disjunctions.

Stages 3 and 5 iterate to a fixpoint.
Each rewrite of stage 3 strictly reduces the number of negations sitting over a connective, and each rewrite of stage 5 strictly reduces the number of conjunctions sitting under a disjunction, and so both iterations terminate.

```rust
# use iengine::builder::parse::{parse_sentence, SymbolTable};
let sentence = parse_sentence("a<=>b", &mut SymbolTable::default()).unwrap();
let clauses = sentence
    .to_cnf_clauses()
    .iter()
    .map(|clause| clause.to_string())
    .collect::<Vec<_>>();

assert_eq!(clauses, vec!["~a || b", "~b || a"]);
```

Constants are absorbed when flattening: a clause containing `True` is dropped, and `False` is dropped from a clause.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        sentence::{Atom, Connective, Sentence},
    },
};

impl Sentence {
    /// An ordered sequence of clauses whose conjunction is equivalent to the sentence.
    pub fn to_cnf_clauses(&self) -> Vec<Clause> {
        let sentence = eliminate_biconditionals(self);
        let sentence = eliminate_implications(&sentence);
        let sentence = push_negations(&sentence);
        let sentence = collapse_negated_atoms(&sentence);
        let sentence = distribute(&sentence);
        log::trace!(target: targets::TRANSFORM, "{self} is equivalent to {sentence}");
        debug_assert!(is_clausal(&sentence), "{sentence} is not clausal");

        flatten(&sentence)
    }
}

/// Stage 1, applied bottom-up.
pub fn eliminate_biconditionals(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),

        Sentence::Negation(operand) => Sentence::negation(eliminate_biconditionals(operand)),

        Sentence::Binary {
            connective: Connective::Biconditional,
            lhs,
            rhs,
        } => {
            let lhs = eliminate_biconditionals(lhs);
            let rhs = eliminate_biconditionals(rhs);
            Sentence::binary(
                Connective::Conjunction,
                Sentence::binary(Connective::Implication, lhs.clone(), rhs.clone()),
                Sentence::binary(Connective::Implication, rhs, lhs),
            )
        }

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(
            *connective,
            eliminate_biconditionals(lhs),
            eliminate_biconditionals(rhs),
        ),
    }
}

/// Stage 2, applied bottom-up.
pub fn eliminate_implications(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),

        Sentence::Negation(operand) => Sentence::negation(eliminate_implications(operand)),

        Sentence::Binary {
            connective: Connective::Implication,
            lhs,
            rhs,
        } => Sentence::binary(
            Connective::Disjunction,
            Sentence::negation(eliminate_implications(lhs)),
            eliminate_implications(rhs),
        ),

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(
            *connective,
            eliminate_implications(lhs),
            eliminate_implications(rhs),
        ),
    }
}

/// A single pass of `~~A` to `A`.
pub fn remove_double_negations(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),

        Sentence::Negation(operand) => match operand.as_ref() {
            Sentence::Negation(inner) => remove_double_negations(inner),
            _ => Sentence::negation(remove_double_negations(operand)),
        },

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(
            *connective,
            remove_double_negations(lhs),
            remove_double_negations(rhs),
        ),
    }
}

/// A single pass of `~(A&B)` to `~A||~B` and `~(A||B)` to `~A&~B`.
pub fn apply_de_morgan(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),

        Sentence::Negation(operand) => match operand.as_ref() {
            Sentence::Binary {
                connective: connective @ (Connective::Conjunction | Connective::Disjunction),
                lhs,
                rhs,
            } => {
                let dual = match connective {
                    Connective::Conjunction => Connective::Disjunction,
                    _ => Connective::Conjunction,
                };
                Sentence::binary(
                    dual,
                    apply_de_morgan(&Sentence::negation(lhs.as_ref().clone())),
                    apply_de_morgan(&Sentence::negation(rhs.as_ref().clone())),
                )
            }

            _ => Sentence::negation(apply_de_morgan(operand)),
        },

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(*connective, apply_de_morgan(lhs), apply_de_morgan(rhs)),
    }
}

/// Stage 3, iterated until the sentence no longer changes.
///
/// Either rule may expose an instance of the other, e.g. `~(~~a&b)`.
pub fn push_negations(sentence: &Sentence) -> Sentence {
    let mut current = sentence.clone();
    loop {
        let next = apply_de_morgan(&remove_double_negations(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Stage 4.
pub fn collapse_negated_atoms(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),

        Sentence::Negation(operand) => match operand.as_ref() {
            Sentence::Atomic(Atom::Literal(literal)) => Sentence::literal(literal.negate()),
            Sentence::Atomic(Atom::Constant(value)) => Sentence::constant(!value),
            _ => Sentence::negation(collapse_negated_atoms(operand)),
        },

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(
            *connective,
            collapse_negated_atoms(lhs),
            collapse_negated_atoms(rhs),
        ),
    }
}

/// Whether some conjunction appears (at any depth) under a disjunction.
pub fn has_conjunction_under_disjunction(sentence: &Sentence) -> bool {
    fn check(sentence: &Sentence, under_disjunction: bool) -> bool {
        match sentence {
            Sentence::Atomic(_) => false,
            Sentence::Negation(operand) => check(operand, under_disjunction),
            Sentence::Binary {
                connective,
                lhs,
                rhs,
            } => match connective {
                Connective::Conjunction if under_disjunction => true,
                Connective::Disjunction => check(lhs, true) || check(rhs, true),
                _ => check(lhs, under_disjunction) || check(rhs, under_disjunction),
            },
        }
    }
    check(sentence, false)
}

/// A single bottom-up pass of `A||(B&C)` to `(A||B)&(A||C)`, and of `(B&C)||A` to `(B||A)&(C||A)`.
pub fn distribute_once(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Binary {
            connective: Connective::Disjunction,
            lhs,
            rhs,
        } => {
            let lhs = distribute_once(lhs);
            let rhs = distribute_once(rhs);

            match (lhs, rhs) {
                (
                    Sentence::Binary {
                        connective: Connective::Conjunction,
                        lhs: b,
                        rhs: c,
                    },
                    a,
                ) => Sentence::binary(
                    Connective::Conjunction,
                    Sentence::binary(Connective::Disjunction, *b, a.clone()),
                    Sentence::binary(Connective::Disjunction, *c, a),
                ),

                (
                    a,
                    Sentence::Binary {
                        connective: Connective::Conjunction,
                        lhs: b,
                        rhs: c,
                    },
                ) => Sentence::binary(
                    Connective::Conjunction,
                    Sentence::binary(Connective::Disjunction, a.clone(), *b),
                    Sentence::binary(Connective::Disjunction, a, *c),
                ),

                (lhs, rhs) => Sentence::binary(Connective::Disjunction, lhs, rhs),
            }
        }

        Sentence::Binary {
            connective,
            lhs,
            rhs,
        } => Sentence::binary(*connective, distribute_once(lhs), distribute_once(rhs)),

        Sentence::Negation(operand) => Sentence::negation(distribute_once(operand)),

        Sentence::Atomic(_) => sentence.clone(),
    }
}

/// Stage 5, iterated until no conjunction remains under a disjunction.
pub fn distribute(sentence: &Sentence) -> Sentence {
    let mut current = sentence.clone();
    while has_conjunction_under_disjunction(&current) {
        current = distribute_once(&current);
    }
    current
}

/// Whether the sentence is a conjunction of disjunctions of atoms.
///
/// Holds of the output of stage 5, as stages 1 and 2 remove every biconditional and implication, stages 3 and 4 remove every negation, and stage 5 lifts every conjunction above every disjunction.
pub fn is_clausal(sentence: &Sentence) -> bool {
    fn is_disjunction_of_atoms(sentence: &Sentence) -> bool {
        match sentence {
            Sentence::Atomic(_) => true,
            Sentence::Binary {
                connective: Connective::Disjunction,
                lhs,
                rhs,
            } => is_disjunction_of_atoms(lhs) && is_disjunction_of_atoms(rhs),
            _ => false,
        }
    }

    match sentence {
        Sentence::Binary {
            connective: Connective::Conjunction,
            lhs,
            rhs,
        } => is_clausal(lhs) && is_clausal(rhs),
        _ => is_disjunction_of_atoms(sentence),
    }
}

/// Stage 6.
///
/// The sentence is expected to be output of stage 5, and so [clausal](is_clausal).
/// Any disjunct which is not an atom is logged and skipped.
pub fn flatten(sentence: &Sentence) -> Vec<Clause> {
    let mut conjuncts = Vec::default();
    split_at(sentence, Connective::Conjunction, &mut conjuncts);

    let mut clauses = Vec::with_capacity(conjuncts.len());

    'conjunct_loop: for conjunct in conjuncts {
        let mut disjuncts = Vec::default();
        split_at(conjunct, Connective::Disjunction, &mut disjuncts);

        let mut clause = Clause::default();
        for disjunct in disjuncts {
            match disjunct {
                Sentence::Atomic(Atom::Literal(literal)) => clause.push(literal.clone()),

                Sentence::Atomic(Atom::Constant(true)) => continue 'conjunct_loop,

                Sentence::Atomic(Atom::Constant(false)) => {}

                _ => log::error!(target: targets::TRANSFORM, "Skipped {disjunct}, as it is not an atom"),
            }
        }
        clauses.push(clause);
    }

    clauses
}

/// Collects, left to right, the maximal subsentences of the sentence which are not joined by the connective.
fn split_at<'s>(sentence: &'s Sentence, connective: Connective, parts: &mut Vec<&'s Sentence>) {
    match sentence {
        Sentence::Binary {
            connective: c,
            lhs,
            rhs,
        } if *c == connective => {
            split_at(lhs, connective, parts);
            split_at(rhs, connective, parts);
        }
        _ => parts.push(sentence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse::{parse_sentence, SymbolTable};

    fn parse(string: &str) -> Sentence {
        parse_sentence(string, &mut SymbolTable::default()).unwrap()
    }

    fn clause_strings(string: &str) -> Vec<String> {
        parse(string)
            .to_cnf_clauses()
            .iter()
            .map(|clause| clause.to_string())
            .collect()
    }

    #[test]
    fn implication() {
        assert_eq!(clause_strings("a=>b"), vec!["~a || b"]);
        assert_eq!(clause_strings("(a&b)=>c"), vec!["~a || ~b || c"]);
    }

    #[test]
    fn negation_fixpoint() {
        let pushed = push_negations(&parse("~(~~a&b)"));
        assert_eq!(collapse_negated_atoms(&pushed).to_string(), "(~a || ~b)");

        let pushed = push_negations(&parse("~(a||~(b&c))"));
        assert_eq!(collapse_negated_atoms(&pushed).to_string(), "(~a & (b & c))");
    }

    #[test]
    fn distribution_either_side() {
        assert_eq!(clause_strings("a||(b&c)"), vec!["a || b", "a || c"]);
        assert_eq!(clause_strings("(b&c)||a"), vec!["b || a", "c || a"]);
        assert_eq!(
            clause_strings("(a&b)||(c&d)"),
            vec!["a || c", "a || d", "b || c", "b || d"]
        );
        assert!(!has_conjunction_under_disjunction(&distribute(&parse(
            "a||(b&(c||(d&e)))"
        ))));
    }

    #[test]
    fn constants() {
        assert!(clause_strings("True").is_empty());
        assert_eq!(clause_strings("False"), vec!["False"]);
        assert_eq!(clause_strings("a||False"), vec!["a"]);
        assert!(clause_strings("a||~False").is_empty());
    }

    #[test]
    fn pipeline_output_is_clausal() {
        for string in [
            "a<=>(b=>~c)",
            "~((a||b)&~(c<=>d))",
            "(a&b)||(c&(d||~(e&f)))",
            "~~~(a=>(b&~c))||False",
        ] {
            let sentence = eliminate_biconditionals(&parse(string));
            let sentence = eliminate_implications(&sentence);
            let sentence = collapse_negated_atoms(&push_negations(&sentence));
            assert!(is_clausal(&distribute(&sentence)), "{string}");
        }

        assert!(!is_clausal(&parse("~(a||b)")));
        assert!(!is_clausal(&parse("a||(b&c)")));
        assert!(is_clausal(&parse("(a||b)&c")));
    }

    #[test]
    fn duplicate_literals_merge() {
        assert_eq!(clause_strings("a||a"), vec!["a"]);
    }
}
