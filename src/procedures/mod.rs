/*!
The inference procedures.

Each procedure takes a (view of a) knowledge base and a query, runs to completion on the calling thread, and returns a [report](crate::reports).

- [truth_table] enumerates models of the generic knowledge base.
- [forward] and [backward] chain over the Horn view of the knowledge base.
- [dpll] searches for a model of the CNF view of the knowledge base, with [pure] literal elimination used between branches.

No procedure caps its search, and so pathological inputs may take exponential time.
*/

pub mod backward;
pub mod dpll;
pub mod forward;
pub mod pure;
pub mod truth_table;
