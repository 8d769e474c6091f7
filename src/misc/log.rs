/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when following a derivation, or a search, step by step.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder::parse)
    pub const PARSER: &str = "parser";

    /// Logs related to the [CNF pipeline](crate::transform)
    pub const TRANSFORM: &str = "transform";

    /// Logs related to deriving a [Horn view](crate::db::horn)
    pub const HORN: &str = "horn";

    /// Logs related to [truth table checking](crate::procedures::truth_table)
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [forward chaining](crate::procedures::forward)
    pub const FORWARD: &str = "forward";

    /// Logs related to [backward chaining](crate::procedures::backward)
    pub const BACKWARD: &str = "backward";

    /// Logs related to [DPLL](crate::procedures::dpll)
    pub const DPLL: &str = "dpll";

    /// Logs related to a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
