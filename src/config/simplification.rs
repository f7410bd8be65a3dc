//! Configuration of simplification episodes, and of the collaborators run during an episode.

use crate::context::ContextState;

use super::ConfigOption;

/// Configuration of simplification.
#[derive(Clone, Debug)]
pub struct SimplificationConfig {
    /// Permit simplification episodes.
    pub enabled: ConfigOption<bool>,

    /// The count of restarts between episodes.
    pub interval: ConfigOption<usize>,

    /// Replace equivalent atoms with a representative.
    pub replacement: ConfigOption<bool>,

    /// Remove subsumed clauses, and strengthen clauses by self-subsuming resolution.
    pub subsumption: ConfigOption<bool>,

    /// The count of subset checks permitted during an episode of subsumption.
    pub subsumption_budget: ConfigOption<usize>,

    /// Remove duplicate XOR constraints, and shorten XOR constraints which contain another.
    pub xor_subsumption: ConfigOption<bool>,

    /// Reason over XOR constraints by gaussian elimination.
    pub gaussian: ConfigOption<bool>,

    /// XOR constraints over more than `xor_cut + 1` atoms are cut into chains of shorter constraints.
    pub xor_cut: ConfigOption<usize>,
}

impl Default for SimplificationConfig {
    fn default() -> Self {
        SimplificationConfig {
            enabled: ConfigOption {
                name: "simplify",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            interval: ConfigOption {
                name: "simplify_interval",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Solving,
                value: 8,
            },

            replacement: ConfigOption {
                name: "replacement",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            subsumption: ConfigOption {
                name: "subsumption",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            subsumption_budget: ConfigOption {
                name: "subsumption_budget",
                min: 0,
                max: usize::MAX,
                max_state: ContextState::Solving,
                value: 2_000_000,
            },

            xor_subsumption: ConfigOption {
                name: "xor_subsumption",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            gaussian: ConfigOption {
                name: "gaussian",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            xor_cut: ConfigOption {
                name: "xor_cut",
                min: 2,
                max: 12,
                max_state: ContextState::Configuration,
                value: 4,
            },
        }
    }
}
