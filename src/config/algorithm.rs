use std::str::FromStr;

use crate::types::err::{self};

/// The inference procedures, each of which decides whether a knowledge base entails a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Algorithm {
    /// Truth table checking, on the generic knowledge base.
    TT = 0,

    /// Forward chaining, on the Horn view of the knowledge base.
    FC,

    /// Backward chaining, on the Horn view of the knowledge base.
    BC,

    /// DPLL, on the CNF view of the knowledge base.
    DPLL,
}

impl Algorithm {
    /// The minimum Algorithm type.
    pub const MIN: Algorithm = Algorithm::TT;

    /// The maximum Algorithm type.
    pub const MAX: Algorithm = Algorithm::DPLL;

    /// Every algorithm, in order.
    pub const ALL: [Algorithm; 4] = [Algorithm::TT, Algorithm::FC, Algorithm::BC, Algorithm::DPLL];

    /// The names of every algorithm, in order.
    pub fn names() -> Vec<&'static str> {
        Algorithm::ALL.iter().map(|algorithm| algorithm.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TT => "TT",
            Self::FC => "FC",
            Self::BC => "BC",
            Self::DPLL => "DPLL",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = err::SelectionError;

    /// Names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TT" => Ok(Self::TT),
            "FC" => Ok(Self::FC),
            "BC" => Ok(Self::BC),
            "DPLL" => Ok(Self::DPLL),

            _unknown_string => Err(err::SelectionError::Unknown {
                name: s.to_owned(),
                valid: Algorithm::names(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("dpll".parse::<Algorithm>(), Ok(Algorithm::DPLL));
        assert_eq!("Tt".parse::<Algorithm>(), Ok(Algorithm::TT));
    }

    #[test]
    fn unknown_names_list_the_valid() {
        let e = "WalkSAT".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            e,
            err::SelectionError::Unknown {
                name: "WalkSAT".to_owned(),
                valid: vec!["TT", "FC", "BC", "DPLL"],
            }
        );
        assert_eq!(
            err::ErrorKind::from(e).to_string(),
            "Algorithm with name WalkSAT not found, valid algorithms are: TT, FC, BC, DPLL"
        );
    }
}
