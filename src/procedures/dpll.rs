/*!
The DPLL procedure, for deciding the satisfiability of a collection of clauses.

# Overview

Each branch of the search holds its own copy of the clauses (simplified by the assignments made on the branch) together with a model recording those assignments.

On each branch:
1. Unit clauses are propagated, until no unit clause remains or some clause is empty.
2. Symbols which occur with only one polarity are assigned that polarity, until no such symbol remains or some clause is empty.
3. If no clause remains, the clauses are satisfiable (and the search ends).
   If some clause is empty, the branch fails.
4. Otherwise, the alphabetically first symbol of the remaining clauses is chosen, and two branches are made: one with the symbol true, and one with the symbol false.

Branches are kept on an explicit stack, with the true branch taken before the false branch.
As branches share nothing, the order of search is the same as for a recursive implementation.

# Entailment

DPLL decides satisfiability, and so a query is answered through a [Convention].
Under refutation, a query is entailed just in case the clauses of the knowledge base together with the clauses of the negated query are unsatisfiable.

```rust
# use iengine::config::Convention;
# use iengine::db::{cnf::CnfKnowledgeBase, generic::{KnowledgeBase, Query}};
# use iengine::procedures::dpll::dpll_query;
let kb = KnowledgeBase::from_string("a=>b; b=>c; a").unwrap();
let cnf = CnfKnowledgeBase::from_generic(&kb);
let query = Query::from_string("c").unwrap();

let report = dpll_query(&cnf, &query, Convention::Refutation);
assert!(report.found);
assert!(!report.satisfiable);
```
*/

use std::collections::BTreeSet;

use crate::{
    config::Convention,
    db::{cnf::CnfKnowledgeBase, generic::Query},
    misc::log::targets::{self},
    procedures::pure::pure_literals,
    reports::DpllReport,
    structures::{clause::Clause, literal::Literal, model::Model, sentence::Sentence},
};

/// A branch of the search.
#[derive(Clone, Debug)]
struct Branch {
    clauses: Vec<Clause>,
    model: Model,
}

impl Branch {
    /// Sets the literal true, recording the assignment and simplifying the clauses.
    fn assign(&mut self, literal: &Literal) {
        self.model.set(literal.name(), literal.polarity());
        self.clauses = self
            .clauses
            .iter()
            .filter_map(|clause| clause.assign(literal))
            .collect();
    }

    fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// Propagates unit clauses, in order, until no unit clause remains or some clause is empty.
    fn propagate_units(&mut self) {
        while !self.has_empty_clause() {
            let Some(unit) = self.clauses.iter().find_map(|clause| clause.unit()).cloned() else {
                break;
            };
            log::trace!(target: targets::DPLL, "Unit {unit}");
            self.assign(&unit);
        }
    }

    /// Assigns pure literals, until no pure literal remains or some clause is empty.
    fn assign_pure(&mut self) {
        while !self.has_empty_clause() {
            let (pure_false, pure_true) = pure_literals(self.clauses.iter().map(|clause| clause.literals()));
            let pure_symbols = pure_false.into_iter().chain(pure_true).collect::<BTreeSet<_>>();

            if pure_symbols.is_empty() {
                break;
            }

            // Each occurrence of a pure symbol is the pure literal.
            let mut pure: Vec<Literal> = Vec::default();
            for literal in self.clauses.iter().flat_map(|clause| clause.literals()) {
                if pure_symbols.contains(literal.name()) && !pure.contains(literal) {
                    pure.push(literal.clone());
                }
            }

            for literal in pure {
                log::trace!(target: targets::DPLL, "Pure {literal}");
                self.assign(&literal);
            }
        }
    }

    fn simplify(&mut self) {
        self.propagate_units();
        self.assign_pure();
    }

    /// The positive literal of the alphabetically first symbol of the clauses, if any.
    fn choice(&self) -> Option<Literal> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .min()
            .map(|literal| literal.unsigned())
    }
}

/// The outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub satisfiable: bool,

    /// The clauses remaining after the root simplification.
    pub residual: Vec<Clause>,

    /// The model of the satisfying branch, if any.
    pub model: Option<Model>,
}

/// Searches for a model of the clauses, where the model is over the given symbols together with the symbols of the clauses.
pub fn search<'s>(clauses: Vec<Clause>, symbols: impl IntoIterator<Item = &'s str>) -> Outcome {
    let mut universe = symbols.into_iter().map(|s| s.to_owned()).collect::<BTreeSet<_>>();
    for clause in &clauses {
        universe.extend(clause.symbols().map(|s| s.to_owned()));
    }

    let mut root = Branch {
        clauses,
        model: Model::unassigned(universe),
    };
    root.simplify();
    let residual = root.clauses.clone();

    log::debug!(target: targets::DPLL, "{} clauses after root simplification", residual.len());

    let mut stack = vec![root];
    let mut branch_count: usize = 0;

    while let Some(branch) = stack.pop() {
        branch_count += 1;

        if branch.clauses.is_empty() {
            log::info!(target: targets::DPLL, "Satisfiable after {branch_count} branches");
            return Outcome {
                satisfiable: true,
                residual,
                model: Some(branch.model),
            };
        }

        if branch.has_empty_clause() {
            continue;
        }

        let Some(choice) = branch.choice() else {
            continue;
        };
        log::trace!(target: targets::DPLL, "Branching on {choice}");

        let mut on_false = branch.clone();
        on_false.assign(&choice.negate());
        on_false.simplify();

        let mut on_true = branch;
        on_true.assign(&choice);
        on_true.simplify();

        stack.push(on_false);
        stack.push(on_true);
    }

    log::info!(target: targets::DPLL, "Unsatisfiable after {branch_count} branches");
    Outcome {
        satisfiable: false,
        residual,
        model: None,
    }
}

/// Whether the clauses are satisfiable.
///
/// ```rust
/// # use iengine::procedures::dpll::satisfiable;
/// # use iengine::structures::clause::Clause;
/// let clauses = vec![
///     Clause::new(["A".parse().unwrap(), "B".parse().unwrap()]),
///     Clause::new(["~A".parse().unwrap(), "B".parse().unwrap()]),
///     Clause::new(["~B".parse().unwrap()]),
/// ];
/// assert!(!satisfiable(clauses));
/// ```
pub fn satisfiable(clauses: Vec<Clause>) -> bool {
    search(clauses, []).satisfiable
}

/// The clauses whose satisfiability answers the query under the convention.
pub fn query_clauses(kb: &CnfKnowledgeBase, query: &Query, convention: Convention) -> Vec<Clause> {
    let query_clauses = match convention {
        Convention::Refutation => Sentence::negation(query.sentence().clone()).to_cnf_clauses(),
        Convention::Consistency => query.sentence().to_cnf_clauses(),
    };
    kb.extended_clauses(query_clauses)
}

/// Answers the query on the knowledge base under the convention.
pub fn dpll_query(kb: &CnfKnowledgeBase, query: &Query, convention: Convention) -> DpllReport {
    let clauses = query_clauses(kb, query, convention);
    log::debug!(target: targets::DPLL, "Searching {} clauses under {convention}", clauses.len());

    let outcome = search(clauses, kb.symbols().iter().map(|s| s.as_str()));

    let found = match convention {
        Convention::Refutation => !outcome.satisfiable,
        Convention::Consistency => outcome.satisfiable,
    };

    DpllReport::new(found, convention, outcome)
}
