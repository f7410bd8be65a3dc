/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause.

In other words, conflict analysis applies resolution to the clause which is unsatisfiable on the current valuation and the reasons for the assignments which falsify the clause, until a clause is derived which contains exactly one literal assigned at the current level: the first unique implication point.

Resolution is made on atoms in reverse order of assignment, by a walk backwards along the trail.
Each atom is examined at most once, noted by a mark in the [AnalysisBuffer], and all marks are cleared before analysis returns.

Literals assigned at level zero are omitted from the derived clause, as each is the negation of a fact.

After resolution the clause is [minimized](crate::procedures::minimization), the activity of atoms used is bumped (following the [VSIDS](crate::config::vsids::VSIDS) variant), and the clause is ordered so the asserted literal is at index 0 and a literal from the backjump level is at index 1.

For the method, see: [conflict_analysis](GenericContext::conflict_analysis).

# Example

```rust,ignore
let analysis = self.conflict_analysis(key)?;
self.backjump(analysis.backjump_level);
```
*/

use crate::{
    config::{vsids::VSIDS, LBD},
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self, AnalysisError, ErrorKind},
};

/// The mark of an atom during analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unmarked,

    /// A literal of the atom is in the derived clause, or is pending resolution.
    Seen,

    /// A literal of the atom is implied by literals of the derived clause.
    Removable,

    /// A literal of the atom could not be shown to be implied by literals of the derived clause.
    Failed,
}

/// Marks for each atom, and a record of atoms marked so marks may be cleared quickly.
#[derive(Default)]
pub struct AnalysisBuffer {
    marks: Vec<Mark>,
    touched: Vec<Atom>,
}

impl AnalysisBuffer {
    /// Extends the buffer to cover `atom_count` atoms.
    pub fn ensure_atoms(&mut self, atom_count: usize) {
        if self.marks.len() < atom_count {
            self.marks.resize(atom_count, Mark::Unmarked);
        }
    }

    /// The mark of `atom`.
    pub fn mark_of(&self, atom: Atom) -> Mark {
        self.marks[atom as usize]
    }

    /// Marks `atom`.
    pub fn mark(&mut self, atom: Atom, mark: Mark) {
        let index = atom as usize;
        if self.marks[index] == Mark::Unmarked {
            self.touched.push(atom);
        }
        self.marks[index] = mark;
    }

    /// Clears every mark.
    pub fn clear(&mut self) {
        for atom in self.touched.drain(..) {
            self.marks[atom as usize] = Mark::Unmarked;
        }
    }
}

/// The result of conflict analysis.
#[derive(Debug)]
pub struct AnalysisResult {
    /// The derived clause, with the asserted literal at index 0.
    pub clause: CClause,

    /// The literal block distance of the clause, at the point of the conflict.
    pub lbd: LBD,

    /// The level at which the clause asserts its literal.
    pub backjump_level: LevelIndex,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Derives an asserting clause from the clause with key `conflict`, unsatisfiable on the current valuation.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, conflict: ClauseKey) -> Result<AnalysisResult, ErrorKind> {
        let level = self.trail.level();
        if level == 0 {
            return Err(err::ErrorKind::from(AnalysisError::NoDecision));
        }

        self.analysis_buffer.ensure_atoms(self.atom_db.count());
        let bump_resolved = self.config.vsids_variant.value == VSIDS::MiniSAT;

        let mut others: CClause = Vec::default();
        let mut pending: usize = 0;
        let mut key = conflict;
        let mut resolved: Option<Atom> = None;
        let mut index = self.trail.literals.len();

        let asserted = loop {
            self.note_premise_use(&key)?;

            let premise = self.clause_db.get(&key)?;
            for literal in premise.literals() {
                let atom = literal.atom();
                if Some(atom) == resolved {
                    continue;
                }

                let atom_level = match self.atom_db.level_of(atom) {
                    Some(0) | None => continue,
                    Some(atom_level) => atom_level,
                };

                if self.analysis_buffer.mark_of(atom) != Mark::Unmarked {
                    continue;
                }
                self.analysis_buffer.mark(atom, Mark::Seen);

                if bump_resolved {
                    self.atom_db.bump_activity(atom);
                }

                match atom_level == level {
                    true => pending += 1,
                    false => others.push(*literal),
                }
            }

            let next = loop {
                index = match index.checked_sub(1) {
                    Some(index) => index,
                    None => return Err(err::ErrorKind::from(AnalysisError::NoAssertion)),
                };
                let literal = self.trail.literals[index];
                if self.analysis_buffer.mark_of(literal.atom()) == Mark::Seen {
                    break literal;
                }
            };

            // Atoms at the conflict level are resolved away, and so are no longer in the clause.
            self.analysis_buffer.mark(next.atom(), Mark::Unmarked);
            resolved = Some(next.atom());
            pending = pending.saturating_sub(1);

            if pending == 0 {
                break -next;
            }

            key = match self.atom_db.reason_of(next.atom()) {
                Some(reason) => reason,
                None => return Err(err::ErrorKind::from(AnalysisError::MissingReason)),
            };
        };

        self.minimize(&mut others)?;
        self.analysis_buffer.clear();

        let mut clause = Vec::with_capacity(others.len() + 1);
        clause.push(asserted);
        clause.extend(others);

        if !bump_resolved {
            let atoms = clause.atoms().collect::<Vec<_>>();
            self.atom_db.bump_relative(atoms.into_iter());
        }

        let mut backjump_level = 0;
        let mut backjump_index = 0;
        for (position, literal) in clause.iter().enumerate().skip(1) {
            let literal_level = self.atom_db.level_of(literal.atom()).unwrap_or(0);
            if literal_level > backjump_level || backjump_index == 0 {
                backjump_level = literal_level;
                backjump_index = position;
            }
        }
        if backjump_index > 0 {
            clause.swap(1, backjump_index);
        }

        let lbd = clause.lbd(|atom| self.atom_db.level_of(atom));

        log::trace!(target: targets::ANALYSIS, "Derived {} asserting {asserted} at level {backjump_level}", clause.as_dimacs(true));

        Ok(AnalysisResult {
            clause,
            lbd,
            backjump_level,
        })
    }

    /// Bumps the activity of an addition clause used during analysis, and lowers the literal block distance of the clause if possible.
    fn note_premise_use(&mut self, key: &ClauseKey) -> Result<(), ErrorKind> {
        if !matches!(key, ClauseKey::Addition(_, _)) {
            return Ok(());
        }
        self.clause_db.bump_activity(key);

        let premise = self.clause_db.get_mut(key)?;
        if premise.lbd() > 2 {
            let lbd = premise[..].lbd(|atom| self.atom_db.level_of(atom));
            premise.lower_lbd(lbd);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_clears() {
        let mut buffer = AnalysisBuffer::default();
        buffer.ensure_atoms(4);
        buffer.mark(1, Mark::Seen);
        buffer.mark(3, Mark::Failed);
        buffer.mark(1, Mark::Removable);
        assert_eq!(buffer.mark_of(1), Mark::Removable);

        buffer.clear();
        assert!((0..4).all(|atom| buffer.mark_of(atom) == Mark::Unmarked));
    }
}
