/*!
Forward chaining, from the facts of a Horn knowledge base towards the query.

An agenda of literals known to be entailed is seeded with the facts, in order, and each rule keeps a count of the (distinct) literals of its body which have not yet been taken from the agenda.
On taking a literal from the agenda, the count of each rule whose body contains the literal is decremented, and the head of any rule whose count reaches zero is added to the agenda.

The query is found when it is taken from the agenda.

```rust
# use iengine::db::{generic::{KnowledgeBase, Query}, horn::{HornKnowledgeBase, HornQuery}};
# use iengine::procedures::forward::forward_chain;
let kb = KnowledgeBase::from_string("a&b=>c; a; b;").unwrap();
let horn = HornKnowledgeBase::from_generic(&kb).unwrap();
let query = HornQuery::try_from(&Query::from_string("c").unwrap()).unwrap();

let report = forward_chain(&horn, &query, true);
assert!(report.found);
assert_eq!(report.to_string(), "YES: a, b, c");
```
*/

use std::collections::{BTreeSet, VecDeque};

use crate::{
    db::horn::{HornKnowledgeBase, HornQuery},
    misc::log::targets::{self},
    reports::ChainingReport,
    structures::literal::Literal,
};

/// Chains forward from the facts of the knowledge base until the query is found or the agenda is exhausted.
///
/// If `agenda_in_entailed` is set, literals remaining on the agenda when the query is found are included in the entailed literals of the report.
pub fn forward_chain(
    kb: &HornKnowledgeBase,
    query: &HornQuery,
    agenda_in_entailed: bool,
) -> ChainingReport {
    let goal = query.literal();

    let bodies = kb
        .rules()
        .iter()
        .map(|rule| rule.body().iter().collect::<BTreeSet<&Literal>>())
        .collect::<Vec<_>>();
    let mut counts = bodies.iter().map(|body| body.len()).collect::<Vec<_>>();

    let mut agenda = kb.facts().iter().cloned().collect::<VecDeque<_>>();
    let mut entailed = BTreeSet::default();

    while let Some(p) = agenda.pop_front() {
        if entailed.contains(&p) {
            continue;
        }
        log::trace!(target: targets::FORWARD, "Entailed {p}");
        entailed.insert(p.clone());

        if p == *goal {
            if agenda_in_entailed {
                entailed.extend(agenda);
            }
            return ChainingReport::new(true, entailed);
        }

        for (index, rule) in kb.rules().iter().enumerate() {
            if !bodies[index].contains(&p) {
                continue;
            }
            counts[index] -= 1;
            if counts[index] == 0 {
                log::trace!(target: targets::FORWARD, "Fired {rule}");
                agenda.push_back(rule.head().clone());
            }
        }
    }

    log::info!(target: targets::FORWARD, "Agenda exhausted without {goal}");
    ChainingReport::new(false, entailed)
}
