//! The generic knowledge base, and queries.
//!
//! A generic knowledge base is the direct output of parsing: an ordered list of sentences, together with a table holding one canonical literal for each symbol read.
//!
//! ```rust
//! # use iengine::db::generic::{KnowledgeBase, Query};
//! let kb = KnowledgeBase::from_string("p2=> p3; p3 => p1; a; b; p2;").unwrap();
//!
//! assert_eq!(kb.sentences().len(), 5);
//! assert_eq!(kb.symbol_names().collect::<Vec<_>>(), vec!["a", "b", "p1", "p2", "p3"]);
//!
//! let query = Query::from_string("p1").unwrap();
//! assert!(kb.covers(&query));
//! assert!(!kb.covers(&Query::from_string("d").unwrap()));
//! ```

use std::collections::BTreeSet;

use crate::{
    builder::parse::{parse_sentence, strip_whitespace, SymbolTable},
    structures::{literal::Literal, sentence::Sentence},
    types::err::{self},
};

/// The separator of sentences in a knowledge base.
pub const SENTENCE_SEPARATOR: char = ';';

#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
    symbols: SymbolTable,
}

impl KnowledgeBase {
    /// A knowledge base of the `;` separated sentences of the string.
    pub fn from_string(string: &str) -> Result<Self, err::ParseError> {
        let mut kb = KnowledgeBase::default();
        kb.tell(string)?;
        Ok(kb)
    }

    /// Adds the `;` separated sentences of the string to the knowledge base, and returns a count of sentences added.
    ///
    /// Whitespace is removed and empty sentences are skipped.
    /// On an error no sentence of the string is added, though symbols read before the error remain registered.
    pub fn tell(&mut self, string: &str) -> Result<usize, err::ParseError> {
        let stripped = strip_whitespace(string);
        let mut fresh = Vec::default();

        for part in stripped.split(SENTENCE_SEPARATOR) {
            if part.is_empty() {
                continue;
            }
            fresh.push(parse_sentence(part, &mut self.symbols)?);
        }

        let count = fresh.len();
        self.sentences.append(&mut fresh);
        Ok(count)
    }

    /// The sentences of the knowledge base, in order of addition.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// An iterator over the names of the symbols, in alphabetical order.
    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(|name| name.as_str())
    }

    pub fn contains_symbol(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Whether every symbol of the query is a symbol of the knowledge base.
    pub fn covers(&self, query: &Query) -> bool {
        query
            .sentence()
            .symbols()
            .iter()
            .all(|name| self.contains_symbol(name))
    }

    /// The literals of atomic sentences, in order of addition.
    /// These may be negative.
    pub fn fact_literals(&self) -> impl Iterator<Item = &Literal> {
        self.sentences.iter().filter_map(|sentence| sentence.as_literal())
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbols:")?;
        for symbol in self.symbols.values() {
            writeln!(f, "{symbol}")?;
        }
        writeln!(f, "Sentences:")?;
        for sentence in &self.sentences {
            writeln!(f, "{sentence}")?;
        }
        Ok(())
    }
}

/// A sentence asked of a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    sentence: Sentence,
}

impl Query {
    pub fn new(sentence: Sentence) -> Self {
        Query { sentence }
    }

    /// A query of the sentence in the string, with whitespace removed.
    ///
    /// The symbols of the query are kept apart from those of any knowledge base, see [KnowledgeBase::covers].
    pub fn from_string(string: &str) -> Result<Self, err::ParseError> {
        let mut symbols = SymbolTable::default();
        let sentence = parse_sentence(&strip_whitespace(string), &mut symbols)?;
        Ok(Query { sentence })
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn symbols(&self) -> BTreeSet<String> {
        self.sentence.symbols()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sentence)
    }
}
