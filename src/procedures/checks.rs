/*!
Checks of invariants, used when [invariant_checks](crate::config::Config::invariant_checks) is set and by tests.

- Trail causality: each literal of the reason for an assignment, other than the assigned literal, is false, was assigned earlier on the trail, and at a level no higher than the assignment.
- Watches: each stored clause is watched on the literals at index 0 and 1 of the clause.
  And, when every assignment has been propagated, a clause which is not satisfied and has at least two literals which are not false has some watched literal which is not false.

A failed check is an error, and should be treated as fatal.
*/

use crate::{
    context::GenericContext,
    structures::{consequence::AssignmentSource, literal::Literal},
    types::err::{ErrorKind, InvariantError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Checks each assignment on the trail is caused by assignments made earlier on the trail.
    pub fn check_trail_causality(&self) -> Result<(), ErrorKind> {
        let mut position = vec![None; self.atom_db.count()];
        for (index, literal) in self.trail.literals.iter().enumerate() {
            position[literal.atom() as usize] = Some(index);
        }

        for (index, literal) in self.trail.literals.iter().enumerate() {
            let atom = literal.atom();
            let AssignmentSource::BCP(key) = self.atom_db.source_of(atom) else {
                continue;
            };
            let level = self.atom_db.level_of(atom);

            let reason = self.clause_db.get(&key)?;
            if !reason.contains(literal) {
                return Err(ErrorKind::from(InvariantError::TrailCausality(atom)));
            }

            for other in reason.iter().filter(|other| *other != literal) {
                let caused = self.atom_db.value_of_literal(*other) == Some(false)
                    && self.atom_db.level_of(other.atom()) <= level
                    && position[other.atom() as usize].is_some_and(|other_index| other_index < index);
                if !caused {
                    return Err(ErrorKind::from(InvariantError::TrailCausality(atom)));
                }
            }
        }

        Ok(())
    }

    /// Checks each stored clause is watched, and the watch invariant holds of each clause if every assignment has been propagated.
    pub fn check_watches(&self) -> Result<(), ErrorKind> {
        for clause in self.clause_db.all_clauses() {
            let key = clause.key();

            let watched = match clause.len() {
                2 => {
                    self.watches.binary(clause[0]).iter().any(|watch| watch.key == key)
                        && self.watches.binary(clause[1]).iter().any(|watch| watch.key == key)
                }
                _ => {
                    self.watches.long(clause[0]).iter().any(|watch| watch.key == key)
                        && self.watches.long(clause[1]).iter().any(|watch| watch.key == key)
                }
            };
            if !watched {
                return Err(ErrorKind::from(InvariantError::MissingWatch(key)));
            }

            if self.trail.has_queued() {
                continue;
            }

            let satisfied = clause
                .iter()
                .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true));
            let open = clause
                .iter()
                .filter(|literal| self.atom_db.value_of_literal(**literal) != Some(false))
                .count();

            if !satisfied
                && open >= 2
                && self.atom_db.value_of_literal(clause[0]) == Some(false)
                && self.atom_db.value_of_literal(clause[1]) == Some(false)
            {
                return Err(ErrorKind::from(InvariantError::Watch(key)));
            }
        }

        Ok(())
    }
}
