//! Tools for building a context from text.
//!
//! - [parse] reads a single sentence.
//! - [tell_ask] reads a TELL/ASK document into a [context](crate::context::Context).

pub mod parse;
pub mod tell_ask;
