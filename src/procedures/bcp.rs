/*!
A context method to aid boolean constraint propagation

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the literal with the opposite polarity and updating the watches of the clause, if possible, assigning the consequence of the asserting clause, or identifying the clause conflicts with the current valuation.

[propagate](GenericContext::propagate) applies bcp to each assignment on the trail from the queue head, until either every assignment has been propagated or a conflict is found.

# Heuristics

Propagation happens in two steps, distinguished by clauses length:
- First, with respect to binary clauses.
- Second, with respect to long clauses.

This sequence is motivated by various considerations.
For example, binary clauses always have an lbd of at most 2, binary clauses do not require accessing the clause database and updating watches, etc.

For long clauses, a watch is skipped if the blocker of the watch is true, without access to the clause.

# Example

bcp is a mutating method, and a typical application will match against the result of the mutation.
For example, a conflict may lead to conflict analysis and no conflict may lead to a decision being made.

```rust,ignore
match self.propagate() {
    Err(BCPError::Conflict(key)) => {
        let analysis = self.conflict_analysis(key)?;
        ...
    }
    ...
    Ok(()) => {
        match self.make_decision()? {
            ...
        }
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::watches::LongWatch,
    misc::log::targets::{self},
    structures::{consequence::AssignmentSource, literal::CLiteral},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Records the assignment of `literal` at the current level.
    ///
    /// # Soundness
    /// The atom of the literal should be unassigned.
    pub fn assign(&mut self, literal: CLiteral, source: AssignmentSource) {
        self.atom_db.set_value(literal, self.trail.level(), source);
        self.trail.store_assignment(literal);
    }

    /// Propagates every assignment from the queue head.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(&literal) = self.trail.literals.get(self.trail.q_head) {
            self.trail.q_head += 1;
            self.counters.total_propagations += 1;
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// The literals at index 0 and 1 of a long clause are the watched literals of the clause.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = -literal;

        // Binary clause block.
        {
            let binary_count = self.watches.binary(false_literal).len();
            for index in 0..binary_count {
                let watch = self.watches.binary(false_literal)[index];

                match self.atom_db.value_of_literal(watch.literal) {
                    None => self.assign(watch.literal, AssignmentSource::BCP(watch.key)),

                    Some(false) => {
                        log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                        return Err(err::BCPError::Conflict(watch.key));
                    }

                    Some(true) => {}
                }
            }
        }

        // Long clause block.
        let mut list = self.watches.take_long(false_literal);
        let mut kept = 0;
        let mut index = 0;

        let result = 'long_loop: loop {
            let Some(&watch) = list.get(index) else {
                break 'long_loop Ok(());
            };
            index += 1;

            if self.atom_db.value_of_literal(watch.blocker) == Some(true) {
                list[kept] = watch;
                kept += 1;
                continue 'long_loop;
            }

            let db_clause = match self.clause_db.get_mut(&watch.key) {
                Ok(clause) => clause,
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch on missing clause {}", watch.key);
                    break 'long_loop Err(err::BCPError::CorruptWatch);
                }
            };

            if db_clause[0] == false_literal {
                db_clause.swap(0, 1);
            }
            let first = db_clause[0];

            if first != watch.blocker && self.atom_db.value_of_literal(first) == Some(true) {
                list[kept] = LongWatch {
                    key: watch.key,
                    blocker: first,
                };
                kept += 1;
                continue 'long_loop;
            }

            for candidate in 2..db_clause.len() {
                if self.atom_db.value_of_literal(db_clause[candidate]) != Some(false) {
                    db_clause.swap(1, candidate);
                    let fresh_watch = LongWatch {
                        key: watch.key,
                        blocker: first,
                    };
                    self.watches.push_long(db_clause[1], fresh_watch);
                    continue 'long_loop;
                }
            }

            list[kept] = LongWatch {
                key: watch.key,
                blocker: first,
            };
            kept += 1;

            match self.atom_db.value_of_literal(first) {
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                    break 'long_loop Err(err::BCPError::Conflict(watch.key));
                }

                _ => {
                    self.atom_db.set_value(first, self.trail.level(), AssignmentSource::BCP(watch.key));
                    self.trail.store_assignment(first);
                }
            }
        };

        // Watches after the point of a conflict are kept as is.
        while index < list.len() {
            list[kept] = list[index];
            kept += 1;
            index += 1;
        }
        list.truncate(kept);
        self.watches.restore_long(false_literal, list);

        result
    }
}
