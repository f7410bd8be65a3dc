/*!
Keys to clauses in the [clause database](crate::db::clause).

A key is an index into one of two stores of clauses:
- [Original](ClauseKey::Original) keys index clauses from a formula, including the encodings of XOR constraints.
- [Addition](ClauseKey::Addition) keys index clauses learnt during a solve.

Learnt clauses may be removed during a solve, and the slot of a removed clause may be reused.
So, addition keys carry a token which is incremented each time a slot is reused, and a key with an outdated token does not access the clause in the slot.

All keys are reissued when the clause database is rebuilt after [simplification](crate::procedures::simplify).
*/

use crate::types::err::ClauseDBError;

/// An index into a store of clauses.
pub type FormulaIndex = u32;

/// The token of an addition key.
pub type FormulaToken = u16;

/// A key to a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKey {
    /// A key to an original clause.
    Original(FormulaIndex),

    /// A key to an addition clause, with a token.
    Addition(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// The index of the key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(index) | Self::Addition(index, _) => *index as usize,
        }
    }

    /// A key to the same slot with an incremented token.
    pub fn retoken(&self) -> Result<Self, ClauseDBError> {
        match self {
            Self::Original(_) => Err(ClauseDBError::InvalidKeyToken),
            Self::Addition(index, token) => match token.checked_add(1) {
                Some(fresh_token) => Ok(Self::Addition(*index, fresh_token)),
                None => Err(ClauseDBError::StorageExhausted),
            },
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(index) => write!(f, "O_{index}"),
            Self::Addition(index, token) => write!(f, "A_{index}_{token}"),
        }
    }
}
