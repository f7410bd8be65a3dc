//! The reason an atom has a value.

use crate::db::ClauseKey;

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssignmentSource {
    /// A free decision.
    Decision,

    /// An assumption, made as a decision before any free decision.
    Assumption,

    /// A consequence of boolean constraint propagation with the given clause.
    BCP(ClauseKey),

    /// A fact at level zero, with no reason recorded.
    Unit,
}

impl AssignmentSource {
    /// The key of the clause which is the reason for the assignment, if one exists.
    pub fn reason(&self) -> Option<ClauseKey> {
        match self {
            Self::BCP(key) => Some(*key),
            _ => None,
        }
    }
}
