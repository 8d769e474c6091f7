//! Literals are propositional symbols paired with a polarity.
//!
//! A symbol is a single letter, optionally followed by a single digit, e.g. `a`, `B`, `p2`.
//! The string form of a literal prepends `~` if and only if the literal is negated.
//!
//! ```rust
//! # use iengine::structures::literal::Literal;
//! let literal: Literal = "~p2".parse().unwrap();
//!
//! assert!(literal.negated());
//! assert_eq!(literal.name(), "p2");
//! assert_eq!(literal.to_string(), "~p2");
//!
//! assert!(literal.complements(&literal.negate()));
//! assert!("p22".parse::<Literal>().is_err());
//! ```
//!
//! Literals are ordered by name and then polarity, with the positive literal (strictly) less than its negation.

use crate::{
    structures::model::Model,
    types::err::{self},
};

/// The character used for negation, both of literals and of sentences.
pub const NEGATION: char = '~';

/// Whether the string is a propositional symbol: one letter optionally followed by one digit.
pub fn is_symbol(string: &str) -> bool {
    let mut chars = string.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), None, None) => letter.is_alphabetic(),
        (Some(letter), Some(digit), None) => letter.is_alphabetic() && digit.is_ascii_digit(),
        _ => false,
    }
}

/// A symbol paired with a polarity.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The symbol of the literal.
    name: String,

    /// Whether the literal is the negation of the symbol.
    negated: bool,
}

impl Literal {
    /// A literal on the given symbol, or an error if the name is not a symbol.
    pub fn new(name: &str, negated: bool) -> Result<Self, err::ParseError> {
        match is_symbol(name) {
            true => Ok(Literal {
                name: name.to_owned(),
                negated,
            }),
            false => Err(err::ParseError::Symbol(name.to_owned())),
        }
    }

    /// The positive literal on the given symbol.
    pub fn positive(name: &str) -> Result<Self, err::ParseError> {
        Self::new(name, false)
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }

    /// The positive literal on the same symbol.
    pub fn unsigned(&self) -> Self {
        Literal {
            name: self.name.clone(),
            negated: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The value the literal requires of its symbol to be true.
    pub fn polarity(&self) -> bool {
        !self.negated
    }

    /// Two literals are complementary iff they share a symbol and differ in polarity.
    pub fn complements(&self, other: &Literal) -> bool {
        self.name == other.name && self.negated != other.negated
    }

    /// The value of the literal on the model.
    pub fn evaluate(&self, model: &Model) -> Result<bool, err::ModelError> {
        match model.assigned(&self.name) {
            Some(value) => Ok(value != self.negated),
            None => Err(err::ModelError::Unassigned(self.name.clone())),
        }
    }
}

// Traits

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.name == other.name {
            self.negated.cmp(&other.negated)
        } else {
            self.name.cmp(&other.name)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.negated == other.negated
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.negated.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "{NEGATION}{}", self.name),
            false => write!(f, "{}", self.name),
        }
    }
}

impl std::str::FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.strip_prefix(NEGATION) {
            Some(name) => Literal::new(name, true),
            None => Literal::new(string, false),
        }
    }
}
