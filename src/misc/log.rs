/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so output may be narrowed by target, e.g. `RUST_LOG=reduction=info`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [reduction](crate::procedures::reduction) of the clause database
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [restarts](crate::procedures::restart)
    pub const RESTART: &str = "restart";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [simplification episodes](crate::procedures::simplify)
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to [variable replacement](crate::simplification::replacement)
    pub const REPLACEMENT: &str = "replacement";

    /// Logs related to [subsumption](crate::simplification::subsumption)
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to XOR constraints
    pub const XOR: &str = "xor";

    /// Logs related to [gaussian elimination](crate::simplification::gaussian)
    pub const GAUSSIAN: &str = "gaussian";

    /// Logs of periodic [snapshots](crate::reports::Snapshot) of a solve
    pub const PROGRESS: &str = "progress";
}
