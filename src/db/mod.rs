//! Knowledge bases and queries.
//!
//! - A [generic](generic) knowledge base is the output of parsing, and is used directly by truth table checking.
//! - A [Horn](horn) knowledge base is a validated view of a generic knowledge base, used by forward and backward chaining.
//! - A [CNF](cnf) knowledge base is a derived view of a generic knowledge base, used by DPLL.
//!
//! Views are built on demand from a generic knowledge base, and are read-only inputs to the procedures.

pub mod cnf;
pub mod generic;
pub mod horn;
