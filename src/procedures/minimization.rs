/*!
Minimization of a clause derived by conflict analysis.

A literal of a derived clause is redundant if the literal is implied by other literals of the clause, through the reasons of assignments.
Redundant literals are removed, following [Towards Understanding and Harnessing the Potential of Clause Learning](https://doi.org/10.1613/jair.1410) and the recursive method of MiniSAT.

The examination of reasons is bounded by [minimization_depth](crate::config::Config::minimization_depth), and a literal whose examination exceeds the bound is kept.

Results are memoised with [marks](crate::procedures::analysis::Mark):
- Seen, for atoms of the clause.
- Removable, for atoms shown to be implied by the clause.
- Failed, for atoms not shown to be implied by the clause.

And, a literal at a level which is not the level of some literal in the clause is never implied by the clause, which is checked cheaply by an 'abstraction' of levels to a bitmask.
*/

use crate::{
    config::MinimizationCriteria,
    context::GenericContext,
    db::LevelIndex,
    procedures::analysis::Mark,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::ErrorKind,
};

/// The abstraction of a level to a bit.
fn abstract_level(level: LevelIndex) -> u64 {
    1 << (level & 63)
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes redundant literals from `clause`, whose atoms are marked as seen.
    pub fn minimize(&mut self, clause: &mut CClause) -> Result<(), ErrorKind> {
        if self.config.minimization.value == MinimizationCriteria::None {
            return Ok(());
        }
        let depth = self.config.minimization_depth.value;

        let abstract_levels = clause
            .atoms()
            .filter_map(|atom| self.atom_db.level_of(atom))
            .fold(0, |levels, level| levels | abstract_level(level));

        let candidates = std::mem::take(clause);
        for literal in candidates {
            let atom = literal.atom();
            if self.atom_db.reason_of(atom).is_some()
                && self.implied_by_clause(atom, abstract_levels, depth)?
            {
                continue;
            }
            clause.push(literal);
        }

        Ok(())
    }

    /// Whether the assignment to `atom` is implied by the atoms marked as seen.
    fn implied_by_clause(
        &mut self,
        atom: Atom,
        abstract_levels: u64,
        depth: usize,
    ) -> Result<bool, ErrorKind> {
        let Some(key) = self.atom_db.reason_of(atom) else {
            return Ok(false);
        };
        if depth == 0 {
            return Ok(false);
        }

        let premise = self.clause_db.get(&key)?.to_vec();

        for literal in premise {
            let other = literal.atom();
            if other == atom {
                continue;
            }

            let level = self.atom_db.level_of(other).unwrap_or(0);
            if level == 0 {
                continue;
            }

            match self.analysis_buffer.mark_of(other) {
                Mark::Seen | Mark::Removable => continue,

                Mark::Failed => return Ok(false),

                Mark::Unmarked => {
                    let implied = self.atom_db.reason_of(other).is_some()
                        && abstract_levels & abstract_level(level) != 0
                        && self.implied_by_clause(other, abstract_levels, depth - 1)?;

                    match implied {
                        true => self.analysis_buffer.mark(other, Mark::Removable),
                        false => {
                            self.analysis_buffer.mark(other, Mark::Failed);
                            return Ok(false);
                        }
                    }
                }
            }
        }

        Ok(true)
    }
}
