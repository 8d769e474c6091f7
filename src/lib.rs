//! A library for deciding whether a knowledge base of propositional sentences entails a query.
//!
//! iengine reads sentences of a small propositional language, and answers queries through one of four classical procedures:
//! - [Truth table checking](crate::procedures::truth_table), by enumeration of models.
//! - [Forward chaining](crate::procedures::forward) and [backward chaining](crate::procedures::backward), over knowledge bases of Horn clauses.
//! - [DPLL](crate::procedures::dpll), by search for a model of a formula in conjunctive normal form.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [context].
//!
//! A context is built from a [configuration](crate::config), which selects a procedure.
//! Sentences are added to a context through [tell](crate::context::Context::tell), a query is set through [ask](crate::context::Context::ask), or both through a [TELL/ASK document](crate::builder::tell_ask).
//!
//! Internally, the sentences told are kept in a [generic knowledge base](crate::db::generic), and on a solve the [view](crate::db) required by the selected procedure is derived.
//! In particular, DPLL requires each sentence to be [transformed](crate::transform) to clauses.
//!
//! Useful starting points may be:
//! - The [parser](crate::builder::parse), for the language of sentences.
//! - The [structures], for the representation of literals, sentences, clauses, and models.
//! - The [procedures], for the inference procedures.
//!
//! # The language
//!
//! | Token | Meaning |
//! |---|---|
//! | `a`, `p1`, ... | A symbol, one letter optionally followed by one digit |
//! | `True`, `False` | Constants |
//! | `~` | Negation |
//! | `&` | Conjunction |
//! | `\|\|` | Disjunction |
//! | `=>` | Implication |
//! | `<=>` | Biconditional |
//! | `(`, `)` | Brackets |
//!
//! There is no precedence between binary connectives, and chains of connectives nest to the right.
//!
//! # Examples
//!
//! + Entailment by truth table checking.
//!
//! ```rust
//! # use iengine::config::{Algorithm, Config};
//! # use iengine::context::Context;
//! # use iengine::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.tell("a||b;").is_ok());
//! assert!(the_context.ask("a").is_ok());
//!
//! let report = the_context.solve().unwrap();
//! assert_eq!(report.to_string(), "YES: 2");
//!
//! match report {
//!     Report::TruthTable(table) => assert!(!table.entails()),
//!     _ => panic!("Expected a truth table"),
//! }
//! ```
//!
//! + Entailment by refutation with DPLL.
//!
//! ```rust
//! # use iengine::config::{Algorithm, Config};
//! # use iengine::context::Context;
//! let mut config = Config::default();
//! config.algorithm.value = Algorithm::DPLL;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.tell("a <=> b; b || c; ~c").is_ok());
//! assert!(the_context.ask("a").is_ok());
//! assert!(the_context.solve().unwrap().found());
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transform;
pub mod types;
