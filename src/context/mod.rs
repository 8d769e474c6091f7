/*!
The context, to which sentences are told and within which queries are asked and solved.

A context holds a [configuration](crate::config), a generic [knowledge base](crate::db::generic) and (at most) one query.
On a solve, the view of the knowledge base required by the configured algorithm is derived, and the algorithm is run.

# Example
```rust
# use iengine::config::{Algorithm, Config};
# use iengine::context::Context;
let mut config = Config::default();
config.algorithm.value = Algorithm::BC;

let mut the_context = Context::from_config(config);
assert!(the_context.tell("a; a => b;").is_ok());
assert!(the_context.ask("b").is_ok());

let report = the_context.solve().unwrap();
assert!(report.found());
assert_eq!(report.to_string(), "YES: a, b");
```

# Unknown symbols

If some symbol of the query is not a symbol of the knowledge base, the knowledge base cannot entail the query.
In this case the algorithm is not run, and a report that the query was not found is returned (with the knowledge base still validated, for the chaining algorithms).
*/

use std::collections::BTreeSet;

use crate::{
    config::{Algorithm, Config},
    db::{
        cnf::CnfKnowledgeBase,
        generic::{KnowledgeBase, Query},
        horn::{HornKnowledgeBase, HornQuery},
    },
    misc::log::targets::{self},
    procedures::{
        backward::backward_chain,
        dpll::{dpll_query, Outcome},
        forward::forward_chain,
        truth_table::truth_table,
    },
    reports::{ChainingReport, DpllReport, Report, TruthTableReport},
    types::err::{self},
};

#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    kb: KnowledgeBase,

    query: Option<Query>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            kb: KnowledgeBase::default(),
            query: None,
        }
    }

    /// Adds the `;` separated sentences of the string to the knowledge base, and returns a count of sentences added.
    pub fn tell(&mut self, string: &str) -> Result<usize, err::ErrorKind> {
        let count = self.kb.tell(string)?;
        log::debug!(target: targets::CONTEXT, "Told {count} sentences");
        Ok(count)
    }

    /// Sets the query of the context, replacing any previous query.
    pub fn ask(&mut self, string: &str) -> Result<(), err::ErrorKind> {
        let query = Query::from_string(string)?;
        log::debug!(target: targets::CONTEXT, "Asked {query}");
        self.query = Some(query);
        Ok(())
    }

    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Solves the query with the configured algorithm.
    ///
    /// Without a query, the knowledge base is asked `True`.
    pub fn solve(&self) -> Result<Report, err::ErrorKind> {
        let query = match &self.query {
            Some(query) => query.clone(),
            None => Query::from_string("True")?,
        };

        let algorithm = self.config.algorithm.value;
        let covered = self.kb.covers(&query);
        log::info!(target: targets::CONTEXT, "Solving {query} with {algorithm}");

        if !covered {
            log::info!(target: targets::CONTEXT, "Some symbol of {query} is unknown to the knowledge base");
        }

        let report = match algorithm {
            Algorithm::TT => match covered {
                true => Report::TruthTable(truth_table(&self.kb, &query)?),
                false => Report::TruthTable(TruthTableReport::new(
                    self.kb.symbol_names().map(|s| s.to_owned()).collect(),
                    Vec::default(),
                    0,
                )),
            },

            Algorithm::FC | Algorithm::BC => {
                let horn = HornKnowledgeBase::from_generic(&self.kb)?;
                let horn_query = HornQuery::try_from(&query)?;

                match (covered, algorithm) {
                    (false, _) => Report::Chaining(ChainingReport::new(false, BTreeSet::default())),
                    (true, Algorithm::FC) => Report::Chaining(forward_chain(
                        &horn,
                        &horn_query,
                        self.config.agenda_in_entailed.value,
                    )),
                    (true, _) => Report::Chaining(backward_chain(&horn, &horn_query)),
                }
            }

            Algorithm::DPLL => {
                let cnf = CnfKnowledgeBase::from_generic(&self.kb);
                let convention = self.config.convention.value;

                match covered {
                    true => Report::Dpll(dpll_query(&cnf, &query, convention)),
                    false => Report::Dpll(DpllReport::new(
                        false,
                        convention,
                        Outcome {
                            satisfiable: false,
                            residual: Vec::default(),
                            model: None,
                        },
                    )),
                }
            }
        };

        log::info!(target: targets::CONTEXT, "{report}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(algorithm: Algorithm, kb: &str, query: &str) -> Result<Report, err::ErrorKind> {
        let mut config = Config::default();
        config.algorithm.value = algorithm;
        let mut the_context = Context::from_config(config);
        the_context.tell(kb)?;
        the_context.ask(query)?;
        the_context.solve()
    }

    #[test]
    fn unknown_query_symbols() {
        for algorithm in Algorithm::ALL {
            let report = solve(algorithm, "a; a=>b", "c").unwrap();
            assert!(!report.found(), "{algorithm}");
        }
    }

    #[test]
    fn horn_errors_surface() {
        assert!(matches!(
            solve(Algorithm::FC, "a||b", "a"),
            Err(err::ErrorKind::Horn(err::HornError::NotImplication(_)))
        ));
        assert!(matches!(
            solve(Algorithm::BC, "a", "~a"),
            Err(err::ErrorKind::Horn(err::HornError::Query(_)))
        ));
        assert!(solve(Algorithm::TT, "a||b", "a").is_ok());
    }

    #[test]
    fn tells_accumulate() {
        let mut config = Config::default();
        config.algorithm.value = Algorithm::FC;
        let mut the_context = Context::from_config(config);
        assert_eq!(the_context.tell("a; a=>b"), Ok(2));
        assert_eq!(the_context.tell("b=>c"), Ok(1));
        the_context.ask("c").unwrap();
        assert!(the_context.solve().unwrap().found());
    }

    #[test]
    fn missing_query_is_true() {
        let the_context = Context::default();
        let report = the_context.solve().unwrap();
        assert!(report.found());
    }
}
