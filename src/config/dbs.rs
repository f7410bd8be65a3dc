//! Configuration of databases.

use crate::context::ContextState;

use super::{Activity, ConfigOption, LBD};

/// Configuration for the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The initial activity bump for an atom, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay of the activity of an atom each conflict.
    ///
    /// Rather than decaying each atom, the bump is increased by a factor of 1 / (1 - decay).
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                max_state: ContextState::Configuration,
                value: 50.0 * 1e-3,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The initial activity bump for a learnt clause, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay of the activity of a learnt clause each conflict.
    pub decay: ConfigOption<Activity>,

    /// Any learnt clause with lbd within the bound (lbd ≤ bound) is kept when reducing the clause database.
    pub lbd_bound: ConfigOption<LBD>,

    /// The count of conflicts before the first reduction of the clause database.
    pub reduction_interval: ConfigOption<usize>,

    /// The increase to the count of conflicts between reductions after each reduction.
    pub reduction_increment: ConfigOption<usize>,

    /// The fraction of learnt clauses considered for removal at each reduction.
    pub reduction_fraction: ConfigOption<f64>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 0.5,
                max_state: ContextState::Configuration,
                value: 1e-3,
            },

            lbd_bound: ConfigOption {
                name: "lbd_bound",
                min: 0,
                max: LBD::MAX,
                max_state: ContextState::Solving,
                value: 2,
            },

            reduction_interval: ConfigOption {
                name: "reduction_interval",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 2_000,
            },

            reduction_increment: ConfigOption {
                name: "reduction_increment",
                min: 0,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 300,
            },

            reduction_fraction: ConfigOption {
                name: "reduction_fraction",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Solving,
                value: 0.5,
            },
        }
    }
}
