/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption] which notes the bounds of the value and the latest [state](crate::context::ContextState) of a context at which the value may be changed.

Some structures keep a copy of the parts of the configuration relevant to them, taken when the structure is created.

Tuning constants (decay factors, restart schedules, reduction intervals, …) are all options, and the defaults are only a reasonable starting point.

```rust
# use marten_sat::config::{Config, RestartPolicy};
# use marten_sat::context::ContextState;
let mut config = Config::default();
assert!(config.restarts.policy.set(RestartPolicy::Static, &ContextState::Configuration).is_ok());
assert!(config.clause_db.reduction_fraction.set(2.0, &ContextState::Configuration).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod minimization;
pub use minimization::MinimizationCriteria;

mod restarts;
pub use restarts::{RestartConfig, RestartPolicy, StaticSchedule};

mod simplification;
pub use simplification::SimplificationConfig;

pub mod vsids;
use vsids::VSIDS;

use crate::context::ContextState;

/// Representation used for the activity of atoms and clauses.
pub type Activity = f64;

/// Literal block distance, a.k.a 'glue'.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of LBD, and roughly a decade's worth of insight into the metric.
pub type LBD = u32;

/// The probability of assigning positive polarity to an atom when freely choosing a value.
pub type PolarityLean = f64;

/// The probability of choosing an atom at random rather than by activity.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Configuration of restarts.
    pub restarts: RestartConfig,

    /// Configuration of simplification.
    pub simplification: SimplificationConfig,

    /// How to minimize a clause derived by resolution.
    pub minimization: ConfigOption<MinimizationCriteria>,

    /// The maximum depth of a chain of reasons examined when minimizing a clause.
    pub minimization_depth: ConfigOption<usize>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,

    /// Default to the last value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom, when phase saving does not apply.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of making a random decision.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The time limit for a solve, if any.
    pub time_limit: ConfigOption<Option<std::time::Duration>>,

    /// Verify the trail and watch invariants at each restart and after each learnt clause.
    ///
    /// Expensive, and intended for tests.
    pub invariant_checks: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context is (roughly) configured to provide quick, deterministic, results on a library of tests.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),
            restarts: RestartConfig::default(),
            simplification: SimplificationConfig::default(),

            minimization: ConfigOption {
                name: "minimization",
                min: MinimizationCriteria::MIN,
                max: MinimizationCriteria::MAX,
                max_state: ContextState::Solving,
                value: MinimizationCriteria::Recursive,
            },

            minimization_depth: ConfigOption {
                name: "minimization_depth",
                min: 0,
                max: 4_096,
                max_state: ContextState::Solving,
                value: 32,
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                max_state: ContextState::Solving,
                value: VSIDS::MiniSAT,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Solving,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Solving,
                value: 0.0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(std::time::Duration::MAX),
                max_state: ContextState::Solving,
                value: None,
            },

            invariant_checks: ConfigOption {
                name: "invariant_checks",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: false,
            },
        }
    }
}
