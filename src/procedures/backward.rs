/*!
Backward chaining, from the query towards the facts of a Horn knowledge base.

To prove a goal:
- If the goal is a fact, or already proven, the goal is proven.
- Otherwise, each rule with the goal as head is tried in order, and the goal is proven by the first rule whose body literals are all (recursively) proven.

Every literal proven on the way is recorded as entailed, and a proven literal is never expanded twice.
The goals currently being expanded are kept apart from proven literals, and a goal is not expanded while a proof of the same goal is in progress, so cyclic rules such as `a=>b; b=>a` fail rather than loop.

```rust
# use iengine::db::{generic::{KnowledgeBase, Query}, horn::{HornKnowledgeBase, HornQuery}};
# use iengine::procedures::backward::backward_chain;
let kb = KnowledgeBase::from_string("a; a=>b;").unwrap();
let horn = HornKnowledgeBase::from_generic(&kb).unwrap();
let query = HornQuery::try_from(&Query::from_string("b").unwrap()).unwrap();

let report = backward_chain(&horn, &query);
assert!(report.found);
assert_eq!(report.to_string(), "YES: a, b");
```
*/

use std::collections::BTreeSet;

use crate::{
    db::horn::{HornKnowledgeBase, HornQuery},
    misc::log::targets::{self},
    reports::ChainingReport,
    structures::literal::Literal,
};

pub fn backward_chain(kb: &HornKnowledgeBase, query: &HornQuery) -> ChainingReport {
    let mut entailed = BTreeSet::default();
    let mut in_progress = BTreeSet::default();

    let found = prove(kb, query.literal(), &mut entailed, &mut in_progress);

    log::info!(target: targets::BACKWARD, "{} with {} entailed", query.literal(), entailed.len());
    ChainingReport::new(found, entailed)
}

fn prove(
    kb: &HornKnowledgeBase,
    goal: &Literal,
    entailed: &mut BTreeSet<Literal>,
    in_progress: &mut BTreeSet<Literal>,
) -> bool {
    if entailed.contains(goal) {
        return true;
    }

    if kb.is_fact(goal) {
        entailed.insert(goal.clone());
        return true;
    }

    if !in_progress.insert(goal.clone()) {
        log::trace!(target: targets::BACKWARD, "Cycle at {goal}");
        return false;
    }

    let mut proven = false;
    for rule in kb.rules().iter().filter(|rule| rule.head() == goal) {
        log::trace!(target: targets::BACKWARD, "Trying {rule}");
        if rule
            .body()
            .iter()
            .all(|literal| prove(kb, literal, entailed, in_progress))
        {
            proven = true;
            break;
        }
    }

    in_progress.remove(goal);
    if proven {
        entailed.insert(goal.clone());
    }
    proven
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::generic::{KnowledgeBase, Query};

    fn chain(kb: &str, query: &str) -> ChainingReport {
        let horn = HornKnowledgeBase::from_generic(&KnowledgeBase::from_string(kb).unwrap()).unwrap();
        let query = HornQuery::try_from(&Query::from_string(query).unwrap()).unwrap();
        backward_chain(&horn, &query)
    }

    #[test]
    fn proof_records_sub_proofs() {
        let report = chain(
            "p2=> p3; p3 => p1; c => e; b&e => f; f&g => h; p1=>d; p1&p3 => c; a; b; p2;",
            "d",
        );
        assert!(report.found);
        assert_eq!(report.to_string(), "YES: d, p1, p2, p3");
    }

    #[test]
    fn cycles_fail() {
        assert!(!chain("a=>b; b=>a", "a").found);
        assert!(chain("a=>b; b=>a; c=>a; c", "b").found);
    }

    #[test]
    fn rules_tried_in_order() {
        let report = chain("x=>q; a&b=>q; a; b", "q");
        assert!(report.found);
        assert_eq!(report.to_string(), "YES: a, b, q");
    }

    #[test]
    fn partial_proofs_are_kept() {
        let report = chain("a&x=>q; a", "q");
        assert!(!report.found);
        assert_eq!(report.to_string(), "NO: a");
    }
}
