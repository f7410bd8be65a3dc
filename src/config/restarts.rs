/*!
Configuration of restarts.

Two policies are supported:
- [Static](RestartPolicy::Static) restarts happen after a count of conflicts given by a schedule, either the [Luby sequence](crate::generic::luby) scaled by a unit, or a geometric sequence.
- [Dynamic](RestartPolicy::Dynamic) restarts happen when the average literal block distance of recently learnt clauses exceeds some margin of the average over all learnt clauses, following [Glucose](https://doi.org/10.1007/978-3-642-33558-7_11).

The restart policy also fixes the order on learnt clauses used when [reducing](crate::procedures::reduction) the clause database.
*/

use std::str::FromStr;

use crate::context::ContextState;

use super::ConfigOption;

/// Supported restart policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Restart on a schedule of conflicts, and reduce by activity.
    Static,

    /// Restart on the quality of learnt clauses, and reduce by literal block distance and then activity.
    Dynamic,
}

impl RestartPolicy {
    /// The minimum restart policy.
    pub const MIN: RestartPolicy = RestartPolicy::Static;

    /// The maximum restart policy.
    pub const MAX: RestartPolicy = RestartPolicy::Dynamic;
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for RestartPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            _unknown_string => Err(()),
        }
    }
}

/// Supported schedules for static restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaticSchedule {
    /// The luby sequence, scaled by [luby_u](RestartConfig::luby_u).
    Luby,

    /// A geometric sequence, from [geometric_start](RestartConfig::geometric_start) by [geometric_factor](RestartConfig::geometric_factor).
    Geometric,
}

impl StaticSchedule {
    /// The minimum schedule.
    pub const MIN: StaticSchedule = StaticSchedule::Luby;

    /// The maximum schedule.
    pub const MAX: StaticSchedule = StaticSchedule::Geometric;
}

impl std::fmt::Display for StaticSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Luby => write!(f, "luby"),
            Self::Geometric => write!(f, "geometric"),
        }
    }
}

impl FromStr for StaticSchedule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "luby" => Ok(Self::Luby),
            "geometric" => Ok(Self::Geometric),
            _unknown_string => Err(()),
        }
    }
}

/// Configuration of restarts.
#[derive(Clone, Debug)]
pub struct RestartConfig {
    /// Permit restarts.
    pub enabled: ConfigOption<bool>,

    /// The policy used to schedule restarts.
    pub policy: ConfigOption<RestartPolicy>,

    /// The schedule used by static restarts.
    pub schedule: ConfigOption<StaticSchedule>,

    /// The count of conflicts to multiply an element of the luby sequence by.
    pub luby_u: ConfigOption<u32>,

    /// The count of conflicts before the first geometric restart.
    pub geometric_start: ConfigOption<f64>,

    /// The factor by which the count of conflicts between geometric restarts grows.
    pub geometric_factor: ConfigOption<f64>,

    /// The count of recent learnt clauses averaged by dynamic restarts.
    pub lbd_window: ConfigOption<usize>,

    /// A dynamic restart happens when the recent average exceeds the margin times the average of all learnt clauses.
    pub lbd_margin: ConfigOption<f64>,

    /// Block dynamic restarts when the trail is much longer than usual.
    pub blocking: ConfigOption<bool>,

    /// The count of recent trail lengths averaged when blocking.
    pub blocking_window: ConfigOption<usize>,

    /// A restart is blocked when the trail exceeds the margin times the average trail length.
    pub blocking_margin: ConfigOption<f64>,

    /// The count of restarts in a solve after which the solve ends with a resource limit, if any.
    pub max_restarts: ConfigOption<Option<usize>>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        RestartConfig {
            enabled: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            policy: ConfigOption {
                name: "restart_policy",
                min: RestartPolicy::MIN,
                max: RestartPolicy::MAX,
                max_state: ContextState::Solving,
                value: RestartPolicy::Dynamic,
            },

            schedule: ConfigOption {
                name: "static_schedule",
                min: StaticSchedule::MIN,
                max: StaticSchedule::MAX,
                max_state: ContextState::Solving,
                value: StaticSchedule::Luby,
            },

            luby_u: ConfigOption {
                name: "luby_u",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Solving,
                value: 100,
            },

            geometric_start: ConfigOption {
                name: "geometric_start",
                min: 1.0,
                max: f64::MAX,
                max_state: ContextState::Solving,
                value: 100.0,
            },

            geometric_factor: ConfigOption {
                name: "geometric_factor",
                min: 1.0,
                max: f64::MAX,
                max_state: ContextState::Solving,
                value: 1.5,
            },

            lbd_window: ConfigOption {
                name: "lbd_window",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 50,
            },

            lbd_margin: ConfigOption {
                name: "lbd_margin",
                min: 0.0,
                max: f64::MAX,
                max_state: ContextState::Solving,
                value: 1.25,
            },

            blocking: ConfigOption {
                name: "restart_blocking",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: true,
            },

            blocking_window: ConfigOption {
                name: "blocking_window",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 5_000,
            },

            blocking_margin: ConfigOption {
                name: "blocking_margin",
                min: 1.0,
                max: f64::MAX,
                max_state: ContextState::Solving,
                value: 1.4,
            },

            max_restarts: ConfigOption {
                name: "max_restarts",
                min: None,
                max: Some(usize::MAX),
                max_state: ContextState::Solving,
                value: None,
            },
        }
    }
}
