//! Error types used in the library.
//!
//! - Grammar errors abort the parse of a sentence.
//! - Horn errors abort the derivation of a Horn view, and carry the offending sentence.
//! - Selection errors are raised when an algorithm or convention name is not recognised.
//! - Model errors are raised when a sentence is evaluated on a model which has no value for some symbol.
//!
//! Nothing is retried, and no partial result is returned alongside an error.
//!
//! For the most part, names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Horn(HornError),
    Selection(SelectionError),
    Model(ModelError),
    Read(ReadError),
}

/// Errors during parsing of a sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some sentence was required.
    Empty,

    /// A token in symbol position which is not a letter optionally followed by a digit.
    Symbol(String),

    /// An opening bracket at the given index of the substring without a matching closing bracket.
    UnmatchedBracket(usize),

    /// A non-atomic substring without any binary operator.
    NoOperator(String),

    /// An operator without some operand on one of its sides.
    MissingOperand(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when deriving a Horn view of a knowledge base, or a Horn query.
///
/// Each variant holds the (canonical string of the) sentence at fault.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HornError {
    /// A fact which is a negated literal.
    NegatedFact(String),

    /// A fact which is a constant, rather than a literal.
    ConstantFact(String),

    /// A compound sentence which is not a chain of conjunctions ending in an implication.
    NotImplication(String),

    /// An implication whose right side is not a positive literal.
    NonAtomicHead(String),

    /// An implication whose left side is not a conjunction of positive literals.
    NonPositiveBody(String),

    /// A query which is not a single positive literal.
    Query(String),
}

impl From<HornError> for ErrorKind {
    fn from(e: HornError) -> Self {
        ErrorKind::Horn(e)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionError {
    /// No algorithm is known by the name, the valid names are listed.
    Unknown {
        name: String,
        valid: Vec<&'static str>,
    },

    /// No convention is known by the name, the valid names are listed.
    UnknownConvention {
        name: String,
        valid: Vec<&'static str>,
    },
}

impl From<SelectionError> for ErrorKind {
    fn from(e: SelectionError) -> Self {
        ErrorKind::Selection(e)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModelError {
    /// The symbol has no value on the model.
    Unassigned(String),
}

impl From<ModelError> for ErrorKind {
    fn from(e: ModelError) -> Self {
        ErrorKind::Model(e)
    }
}

/// Errors when reading a TELL/ASK document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReadError {
    /// The document at the path could not be opened.
    Open(String),

    /// Some unspecific problem reading a specific line.
    Line(usize),

    /// The first line is not `TELL`.
    MissingTell,

    /// The third line is not `ASK`.
    MissingAsk,

    /// There is no line following `ASK`.
    MissingQuery,
}

impl From<ReadError> for ErrorKind {
    fn from(e: ReadError) -> Self {
        ErrorKind::Read(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(ParseError::Empty) => write!(f, "Expected a sentence, found nothing"),
            Self::Parse(ParseError::Symbol(token)) => {
                write!(f, "{token} is not a valid propositional symbol")
            }
            Self::Parse(ParseError::UnmatchedBracket(index)) => {
                write!(f, "No closing bracket for the opening bracket at {index}")
            }
            Self::Parse(ParseError::NoOperator(string)) => {
                write!(f, "Could not find an operator in {string}")
            }
            Self::Parse(ParseError::MissingOperand(string)) => {
                write!(f, "Missing operand in {string}")
            }

            Self::Horn(HornError::NegatedFact(s)) => write!(f, "Fact {s} must be a positive literal"),
            Self::Horn(HornError::ConstantFact(s)) => write!(f, "Fact {s} must be a symbol, not a constant"),
            Self::Horn(HornError::NotImplication(s)) => write!(f, "Rule {s} is not an implication"),
            Self::Horn(HornError::NonAtomicHead(s)) => {
                write!(f, "Rule {s} must conclude a single positive literal")
            }
            Self::Horn(HornError::NonPositiveBody(s)) => {
                write!(f, "Rule {s} must have a conjunction of positive literals as premise")
            }
            Self::Horn(HornError::Query(s)) => {
                write!(f, "Query {s} must be a single positive literal")
            }

            Self::Selection(SelectionError::Unknown { name, valid }) => write!(
                f,
                "Algorithm with name {name} not found, valid algorithms are: {}",
                valid.join(", ")
            ),
            Self::Selection(SelectionError::UnknownConvention { name, valid }) => write!(
                f,
                "Convention with name {name} not found, valid conventions are: {}",
                valid.join(", ")
            ),

            Self::Model(ModelError::Unassigned(name)) => {
                write!(f, "Symbol {name} has no value on the model")
            }

            Self::Read(ReadError::Open(path)) => write!(f, "Could not open {path}"),
            Self::Read(ReadError::Line(line)) => write!(f, "Failed to read line {line}"),
            Self::Read(ReadError::MissingTell) => write!(f, "First line must be \"TELL\""),
            Self::Read(ReadError::MissingAsk) => write!(f, "Third line must be \"ASK\""),
            Self::Read(ReadError::MissingQuery) => write!(f, "No query follows \"ASK\""),
        }
    }
}

impl std::error::Error for ErrorKind {}
