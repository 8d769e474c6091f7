//! Sentences of propositional logic, as a closed sum type.
//!
//! A sentence is one of:
//! - An atomic sentence: a [literal](crate::structures::literal) or one of the constants `True`/`False`.
//! - The negation of a sentence.
//! - A binary sentence: two sentences joined by a [Connective].
//!
//! Sentences are immutable once built.
//! Rewrites (see [transform](crate::transform)) build new trees rather than mutate shared ones.
//!
//! The canonical string of a sentence brackets every compound sentence, and so may be parsed back to a sentence with identical evaluation on every model.
//!
//! ```rust
//! # use iengine::builder::parse::parse_sentence;
//! # use iengine::structures::model::Model;
//! # use std::collections::BTreeMap;
//! let mut symbols = BTreeMap::default();
//! let sentence = parse_sentence("a=>~(b||c)", &mut symbols).unwrap();
//!
//! assert_eq!(sentence.to_string(), "(a => ~((b || c)))");
//!
//! let model = Model::from_values([("a".into(), true), ("b".into(), false), ("c".into(), false)]);
//! assert_eq!(sentence.evaluate(&model), Ok(true));
//! ```

use std::collections::BTreeSet;

use crate::{
    structures::{
        literal::{Literal, NEGATION},
        model::Model,
    },
    types::err::{self},
};

/// The binary connectives of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connective {
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
}

impl Connective {
    /// The token of the connective in the input language.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Conjunction => "&",
            Self::Disjunction => "||",
            Self::Implication => "=>",
            Self::Biconditional => "<=>",
        }
    }

    /// The truth function of the connective.
    pub fn apply(&self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::Conjunction => lhs && rhs,
            Self::Disjunction => lhs || rhs,
            Self::Implication => !lhs || rhs,
            Self::Biconditional => (!lhs || rhs) && (!rhs || lhs),
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The content of an atomic sentence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Atom {
    Literal(Literal),
    Constant(bool),
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Constant(true) => write!(f, "True"),
            Self::Constant(false) => write!(f, "False"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentence {
    Atomic(Atom),

    Negation(Box<Sentence>),

    Binary {
        connective: Connective,
        lhs: Box<Sentence>,
        rhs: Box<Sentence>,
    },
}

impl Sentence {
    pub fn literal(literal: Literal) -> Self {
        Sentence::Atomic(Atom::Literal(literal))
    }

    pub fn constant(value: bool) -> Self {
        Sentence::Atomic(Atom::Constant(value))
    }

    pub fn negation(operand: Sentence) -> Self {
        Sentence::Negation(Box::new(operand))
    }

    pub fn binary(connective: Connective, lhs: Sentence, rhs: Sentence) -> Self {
        Sentence::Binary {
            connective,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// The literal of an atomic sentence, if the sentence is an atomic literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Sentence::Atomic(Atom::Literal(literal)) => Some(literal),
            _ => None,
        }
    }

    /// The value of the sentence on the model.
    ///
    /// Both sides of a binary sentence are evaluated, so an unassigned symbol anywhere in the sentence is an error.
    pub fn evaluate(&self, model: &Model) -> Result<bool, err::ModelError> {
        match self {
            Sentence::Atomic(Atom::Literal(literal)) => literal.evaluate(model),

            Sentence::Atomic(Atom::Constant(value)) => Ok(*value),

            Sentence::Negation(operand) => Ok(!operand.evaluate(model)?),

            Sentence::Binary {
                connective,
                lhs,
                rhs,
            } => {
                let lhs = lhs.evaluate(model)?;
                let rhs = rhs.evaluate(model)?;
                Ok(connective.apply(lhs, rhs))
            }
        }
    }

    /// The names of all symbols in the sentence, in alphabetical order.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::default();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<String>) {
        match self {
            Sentence::Atomic(Atom::Literal(literal)) => {
                symbols.insert(literal.name().to_owned());
            }
            Sentence::Atomic(Atom::Constant(_)) => {}
            Sentence::Negation(operand) => operand.collect_symbols(symbols),
            Sentence::Binary { lhs, rhs, .. } => {
                lhs.collect_symbols(symbols);
                rhs.collect_symbols(symbols);
            }
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentence::Atomic(atom) => write!(f, "{atom}"),
            Sentence::Negation(operand) => write!(f, "{NEGATION}({operand})"),
            Sentence::Binary {
                connective,
                lhs,
                rhs,
            } => write!(f, "({lhs} {connective} {rhs})"),
        }
    }
}
