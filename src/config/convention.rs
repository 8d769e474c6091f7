use std::str::FromStr;

use crate::types::err::{self};

/// How DPLL, which decides satisfiability, is used to answer a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Convention {
    /// The query is entailed just in case the knowledge base together with the negation of the query is unsatisfiable.
    Refutation = 0,

    /// The query is found just in case the knowledge base together with the query is satisfiable.
    ///
    /// This is a test of consistency, rather than entailment.
    Consistency,
}

impl Convention {
    /// The minimum Convention type.
    pub const MIN: Convention = Convention::Refutation;

    /// The maximum Convention type.
    pub const MAX: Convention = Convention::Consistency;

    pub const ALL: [Convention; 2] = [Convention::Refutation, Convention::Consistency];

    pub fn names() -> Vec<&'static str> {
        Convention::ALL.iter().map(|convention| convention.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Refutation => "refutation",
            Self::Consistency => "consistency",
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Convention {
    type Err = err::SelectionError;

    /// Names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "refutation" => Ok(Self::Refutation),

            "consistency" => Ok(Self::Consistency),

            _unknown_string => Err(err::SelectionError::UnknownConvention {
                name: s.to_owned(),
                valid: Convention::names(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!("Consistency".parse::<Convention>(), Ok(Convention::Consistency));
        assert_eq!(Convention::Refutation.to_string(), "refutation");
    }

    #[test]
    fn unknown_names_list_the_valid() {
        let e = "abduction".parse::<Convention>().unwrap_err();
        assert_eq!(
            err::ErrorKind::from(e).to_string(),
            "Convention with name abduction not found, valid conventions are: refutation, consistency"
        );
    }
}
