/*!
Truth table checking.

# Overview

The symbols of the knowledge base are partitioned into those which are 'known', as the symbol of an atomic sentence (a fact) of the knowledge base, and those which are 'unknown'.
Known symbols are fixed to the polarity of their first fact, and every assignment to the unknown symbols is enumerated.

A model is valid if every sentence of the knowledge base and the query are true on the model, and the query is found if some model is valid.

Fixing known symbols is sound, as any model which gives a known symbol the other value falsifies a fact of the knowledge base.
Still, the search is exponential in the count of unknown symbols, without further pruning.

# Enumeration

Assignments are enumerated in the order of counting in binary on the unknown symbols, with the (alphabetically) first unknown symbol as the most significant bit and a set bit as true.
So, with unknown symbols `a` and `b` the assignments are: both false, `b` true, `a` true, and both true.

```rust
# use iengine::db::generic::{KnowledgeBase, Query};
# use iengine::procedures::truth_table::truth_table;
let kb = KnowledgeBase::from_string("a||b").unwrap();
let query = Query::from_string("a").unwrap();

let report = truth_table(&kb, &query).unwrap();
assert!(report.found);
assert_eq!(report.models.len(), 2);
assert_eq!(report.kb_model_count, 3);
assert!(!report.entails());
```
*/

use std::collections::BTreeMap;

use crate::{
    db::generic::{KnowledgeBase, Query},
    misc::log::targets::{self},
    reports::TruthTableReport,
    structures::model::Model,
    types::err::{self},
};

/// Checks the query against every model of the knowledge base on which the facts of the knowledge base hold.
///
/// Symbols of the query which are not symbols of the knowledge base are enumerated as unknown symbols.
pub fn truth_table(kb: &KnowledgeBase, query: &Query) -> Result<TruthTableReport, err::ModelError> {
    let mut known: BTreeMap<&str, bool> = BTreeMap::default();
    for fact in kb.fact_literals() {
        known.entry(fact.name()).or_insert(fact.polarity());
    }

    let query_symbols = query.symbols();
    let mut universe = kb.symbol_names().collect::<Vec<_>>();
    for symbol in &query_symbols {
        if !kb.contains_symbol(symbol) {
            universe.push(symbol.as_str());
        }
    }
    universe.sort_unstable();

    let unknown = universe
        .iter()
        .copied()
        .filter(|symbol| !known.contains_key(symbol))
        .collect::<Vec<_>>();

    log::info!(target: targets::TRUTH_TABLE, "{} known and {} unknown symbols", known.len(), unknown.len());

    let mut base = Model::unassigned(universe.iter().copied());
    for (symbol, value) in &known {
        base.set(symbol, *value);
    }

    let mut models = Vec::default();
    let mut kb_model_count = 0;

    let mut bits = vec![false; unknown.len()];
    'enumeration_loop: loop {
        let mut model = base.clone();
        for (symbol, value) in unknown.iter().zip(&bits) {
            model.set(symbol, *value);
        }

        if holds_on(kb, &model)? {
            kb_model_count += 1;

            if query.sentence().evaluate(&model)? {
                log::trace!(target: targets::TRUTH_TABLE, "Valid model: {model}");
                models.push(model);
            }
        }

        // Binary increment, with the last bit least significant.
        for bit in bits.iter_mut().rev() {
            *bit = !*bit;
            if *bit {
                continue 'enumeration_loop;
            }
        }
        break;
    }

    log::info!(target: targets::TRUTH_TABLE, "{} valid of {kb_model_count} knowledge base models", models.len());

    Ok(TruthTableReport::new(
        universe.into_iter().map(|symbol| symbol.to_owned()).collect(),
        models,
        kb_model_count,
    ))
}

/// Whether every sentence of the knowledge base is true on the model.
pub fn holds_on(kb: &KnowledgeBase, model: &Model) -> Result<bool, err::ModelError> {
    for sentence in kb.sentences() {
        if !sentence.evaluate(model)? {
            return Ok(false);
        }
    }
    Ok(true)
}
