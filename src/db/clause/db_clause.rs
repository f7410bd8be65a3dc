/*!
A clause together with some metadata, as stored in the [clause database](crate::db::clause).

The literals at positions 0 and 1 of a stored clause are the watched literals of the clause.
When a clause asserts some literal, the literal is moved to position 0, and so a clause is the reason for an assignment only if it is the reason for the assignment to the atom of its first literal.
*/

use std::ops::Deref;

use crate::{
    config::{Activity, LBD},
    db::ClauseKey,
    structures::{
        clause::{CClause, ClauseSource},
        literal::CLiteral,
    },
};

/// A stored clause.
#[derive(Clone, Debug)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
    source: ClauseSource,
    lbd: LBD,
    activity: Activity,
}

impl DBClause {
    /// A stored clause, from its parts.
    pub fn from(key: ClauseKey, clause: CClause, source: ClauseSource, lbd: LBD) -> Self {
        DBClause {
            key,
            clause,
            source,
            lbd,
            activity: 0.0,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The source of the clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The literal block distance of the clause when learnt, or when last lowered.
    pub fn lbd(&self) -> LBD {
        self.lbd
    }

    /// Lowers the literal block distance of the clause, if `lbd` is lower.
    pub fn lower_lbd(&mut self, lbd: LBD) {
        self.lbd = std::cmp::min(self.lbd, lbd);
    }

    /// The activity of the clause.
    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub(super) fn set_activity(&mut self, activity: Activity) {
        self.activity = activity
    }

    /// Swaps the literals at positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.clause.swap(a, b)
    }

    /// The clause, consuming the stored clause.
    pub fn into_clause(self) -> CClause {
        self.clause
    }
}

impl Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::structures::clause::Clause;
        write!(f, "{}: {}", self.key, self.clause.as_dimacs(false))
    }
}
