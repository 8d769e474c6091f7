//! The CNF view of a knowledge base.
//!
//! Each sentence of a generic knowledge base is [transformed](crate::transform) to clauses, and the clauses of all sentences are then filtered of tautologies and duplicates.
//!
//! ```rust
//! # use iengine::db::{cnf::CnfKnowledgeBase, generic::KnowledgeBase};
//! let kb = KnowledgeBase::from_string("a||b; ~a||b; b||a; a||~a; ~b").unwrap();
//! let cnf = CnfKnowledgeBase::from_generic(&kb);
//!
//! let clauses = cnf.clauses().iter().map(|c| c.to_string()).collect::<Vec<_>>();
//! assert_eq!(clauses, vec!["a || b", "~a || b", "b || a", "~b"]);
//! ```
//!
//! Note, duplicates are identified by canonical string, and so `a || b` and `b || a` are distinct clauses.

use std::collections::BTreeSet;

use crate::{
    db::generic::KnowledgeBase,
    misc::log::targets::{self},
    structures::clause::{filter_clauses, Clause},
};

#[derive(Clone, Debug, Default)]
pub struct CnfKnowledgeBase {
    clauses: Vec<Clause>,
    symbols: BTreeSet<String>,
}

impl CnfKnowledgeBase {
    pub fn from_generic(kb: &KnowledgeBase) -> Self {
        let mut cnf = Self::from_clauses(
            kb.sentences()
                .iter()
                .flat_map(|sentence| sentence.to_cnf_clauses()),
        );

        log::debug!(target: targets::TRANSFORM, "{} clauses from {} sentences", cnf.clauses.len(), kb.sentences().len());

        // Symbols of vanished clauses are kept.
        cnf.symbols.extend(kb.symbol_names().map(|name| name.to_owned()));
        cnf
    }

    /// A CNF knowledge base of the given clauses, which are filtered, with symbols drawn from the clauses.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let clauses = filter_clauses(clauses);
        let symbols = clauses
            .iter()
            .flat_map(|clause| clause.symbols())
            .map(|name| name.to_owned())
            .collect();
        CnfKnowledgeBase { clauses, symbols }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The symbol names of the knowledge base, in alphabetical order.
    ///
    /// As constants and tautologies vanish in the transformation, some symbol may not occur in any clause.
    pub fn symbols(&self) -> &BTreeSet<String> {
        &self.symbols
    }

    /// The clauses of the knowledge base, extended by the given clauses.
    /// The result is filtered, so no clause is duplicated.
    pub fn extended_clauses(&self, extra: impl IntoIterator<Item = Clause>) -> Vec<Clause> {
        filter_clauses(self.clauses.iter().cloned().chain(extra))
    }
}

impl std::fmt::Display for CnfKnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}
