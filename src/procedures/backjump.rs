//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! # Methods
//!
//! # [backjump](GenericContext::backjump) --- Backjump to a target level
//!
//! Performs a backjump to some level.
//!
//! Passing a target level equal to or greater than the current level is safe --- nothing will happen.
//! So, in particular, a backjump is idempotent.
//!
//! # [non_chronological_backjump_level](GenericContext::non_chronological_backjump_level) --- The backjump level of a(n unsatisfiable) clause
//!
//! The backjump level of a clause is the highest level for which the clause is satisfiable on the corresponding valuation.
//! With respect to implementation, this is the second highest decision level from the literals of the clause, or 0 (zero) if the clause has a single literal.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }

    /// The second highest level of some literal in `clause`, or 0 if the clause has fewer than two literals.
    ///
    /// # Soundness
    /// Every literal of the clause should be assigned.
    pub fn non_chronological_backjump_level(&self, clause: &[CLiteral]) -> LevelIndex {
        let mut top = 0;
        let mut second = 0;
        for literal in clause {
            let level = self.atom_db.level_of(literal.atom()).unwrap_or(0);
            if level > top {
                second = top;
                top = level;
            } else if level > second {
                second = level;
            }
        }
        match clause.len() {
            0 | 1 => 0,
            _ => second,
        }
    }
}
