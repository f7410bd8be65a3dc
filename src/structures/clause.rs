/*!
Clauses, disjunctions of literals.

The canonical representation of a clause is a vector of [CLiteral]s, and methods are given through the [Clause] trait, implemented for slices of literals.

Clauses stored in the [clause database](crate::db::clause) always contain at least two literals.
Unit clauses are stored as assignments on the [trail](crate::db::trail), and the empty clause is never stored, as it is noted by the state of a context.
*/

use std::collections::HashSet;

use crate::{
    config::LBD,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The canonical clause.
pub type CClause = Vec<CLiteral>;

/// Methods expected of a clause.
pub trait Clause {
    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The literals of the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The atoms of the clause, in order of occurrence.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in DIMACS form, optionally terminated with a zero.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The literal block distance of the clause, given some method to obtain the decision level of an atom.
    ///
    /// Atoms without a level are ignored.
    fn lbd(&self, level_of: impl Fn(Atom) -> Option<u32>) -> LBD;
}

impl Clause for [CLiteral] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{} ", literal.as_int()));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn lbd(&self, level_of: impl Fn(Atom) -> Option<u32>) -> LBD {
        let levels = self
            .iter()
            .filter_map(|literal| level_of(literal.atom()))
            .collect::<HashSet<_>>();
        LBD::try_from(levels.len()).unwrap_or(LBD::MAX)
    }
}

/// The source of a stored clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause from the CNF encoding of an XOR constraint.
    Xor,

    /// A clause derived via resolution during analysis.
    Resolution,
}

impl ClauseSource {
    /// Whether a clause from the source may be removed when reducing the clause database.
    pub fn is_learnt(&self) -> bool {
        matches!(self, ClauseSource::Resolution)
    }
}

/// The result of normalising a clause.
#[derive(Debug, PartialEq, Eq)]
pub enum Normalised {
    /// The clause, with duplicate literals removed and literals sorted.
    Clause(CClause),

    /// The clause contained some literal and its negation.
    Tautology,
}

/// Sorts `clause`, removes duplicate literals, and checks for tautology.
pub fn normalise(mut clause: CClause) -> Normalised {
    clause.sort_unstable();
    clause.dedup();
    for pair in clause.windows(2) {
        if pair[0].atom() == pair[1].atom() {
            return Normalised::Tautology;
        }
    }
    Normalised::Clause(clause)
}

impl From<CLiteral> for CClause {
    fn from(literal: CLiteral) -> Self {
        vec![literal]
    }
}
