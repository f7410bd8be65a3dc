//! Variant ways to minimize a clause derived by resolution.

use std::str::FromStr;

/// Supported minimization criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinimizationCriteria {
    /// No minimization.
    None,

    /// Remove any literal implied by other literals of the clause, through chains of reasons up to a bounded depth.
    Recursive,
}

impl MinimizationCriteria {
    /// The minimum criteria.
    pub const MIN: MinimizationCriteria = MinimizationCriteria::None;

    /// The maximum criteria.
    pub const MAX: MinimizationCriteria = MinimizationCriteria::Recursive;
}

impl std::fmt::Display for MinimizationCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

impl FromStr for MinimizationCriteria {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "recursive" => Ok(Self::Recursive),
            _unknown_string => Err(()),
        }
    }
}
