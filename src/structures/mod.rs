//! Key structures, such as literals, sentences, and clauses.
//!
//! # Other structures without an implementation.
//!
//! ## Knowledge bases
//!
//! A knowledge base is a list of sentences, interpreted as the conjunction of those sentences.
//! The views of a knowledge base used by the inference procedures are kept in the [database module](crate::db).
//!
//! ## Formulas in conjunctive normal form
//!
//! A formula in CNF is a list of [clauses](clause), interpreted as the conjunction of those clauses.
//! Any sentence may be rewritten to an equivalent CNF formula through the [transform](crate::transform) pipeline.

pub mod clause;
pub mod literal;
pub mod model;
pub mod sentence;
