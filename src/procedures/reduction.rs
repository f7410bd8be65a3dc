/*!
Reduction of the clause database.

After a count of conflicts, some learnt clauses are removed.
The count grows after each reduction, by [reduction_increment](crate::config::dbs::ClauseDBConfig::reduction_increment).

Learnt clauses are ordered worst first, by the order of the active [restart policy](crate::config::RestartPolicy):
- Static: by activity, ascending.
- Dynamic: by literal block distance, descending, and then by activity, ascending.

And, the worst [fraction](crate::config::dbs::ClauseDBConfig::reduction_fraction) of learnt clauses are removed, with the exception of:
- Binary clauses.
- Clauses with a literal block distance within the [bound](crate::config::dbs::ClauseDBConfig::lbd_bound).
- Locked clauses, which are the reason for some assignment.

A clause is locked exactly when the literal at index 0 of the clause was assigned with the clause as a reason, as propagation always asserts the literal at index 0 of a long clause.
*/

use std::cmp::Ordering;

use crate::{
    config::{Activity, RestartPolicy, LBD},
    context::GenericContext,
    db::{clause::DBClause, ClauseKey},
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{ClauseDBError, ErrorKind},
};

/// The order on learnt clauses used by `policy`, from worst to best.
pub fn quality_order(policy: RestartPolicy, a: &DBClause, b: &DBClause) -> Ordering {
    let activity_order = |x: Activity, y: Activity| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match policy {
        RestartPolicy::Static => activity_order(a.activity(), b.activity()),

        RestartPolicy::Dynamic => b
            .lbd()
            .cmp(&a.lbd())
            .then_with(|| activity_order(a.activity(), b.activity())),
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Whether `clause` is the reason for some assignment.
    pub fn is_locked(&self, clause: &DBClause) -> bool {
        self.atom_db.reason_of(clause[0].atom()) == Some(clause.key())
    }

    /// Whether a reduction is due.
    pub fn reduction_due(&self) -> bool {
        self.counters.total_conflicts >= self.counters.next_reduction
    }

    /// Removes the worst learnt clauses.
    ///
    /// For documentation, see [procedures::reduction](crate::procedures::reduction).
    pub fn reduce(&mut self) -> Result<(), ErrorKind> {
        let policy = self.config.restarts.policy.value;
        let lbd_bound: LBD = self.config.clause_db.lbd_bound.value;

        let mut candidates = self
            .clause_db
            .addition_clauses()
            .filter(|clause| clause.len() > 2 && clause.lbd() > lbd_bound && !self.is_locked(clause))
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| quality_order(policy, a, b));

        let limit = (self.clause_db.addition_count() as f64 * self.config.clause_db.reduction_fraction.value) as usize;
        let removals: Vec<ClauseKey> = candidates.iter().take(limit).map(|clause| clause.key()).collect();

        for key in &removals {
            let clause = self.clause_db.get(key)?;
            if self.is_locked(clause) {
                return Err(ErrorKind::from(ClauseDBError::LockedClause));
            }
            self.clause_db.remove_addition(*key, &mut self.watches)?;
        }

        self.counters.reductions += 1;
        let interval = self.config.clause_db.reduction_interval.value
            + self.config.clause_db.reduction_increment.value * self.counters.reductions;
        self.counters.next_reduction = self.counters.total_conflicts + interval;

        log::info!(target: targets::REDUCTION, "Reduction {} removed {} clauses, next at {}", self.counters.reductions, removals.len(), self.counters.next_reduction);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        context::Context,
        structures::{clause::ClauseSource, consequence::AssignmentSource, literal::CLiteral},
    };

    fn clause(lbd: LBD) -> DBClause {
        let literals = (0..4).map(|atom| CLiteral::new(atom, true)).collect();
        DBClause::from(ClauseKey::Addition(0, 0), literals, ClauseSource::Resolution, lbd)
    }

    #[test]
    fn dynamic_order_puts_high_lbd_first() {
        let high = clause(7);
        let low = clause(3);
        assert_eq!(quality_order(RestartPolicy::Dynamic, &high, &low), Ordering::Less);
        assert_eq!(quality_order(RestartPolicy::Dynamic, &low, &high), Ordering::Greater);
        assert_eq!(quality_order(RestartPolicy::Static, &low, &high), Ordering::Equal);
    }

    #[test]
    fn locked_clauses_survive() {
        let mut config = Config::default();
        config.clause_db.lbd_bound.value = 0;
        config.clause_db.reduction_fraction.value = 1.0;
        let mut the_context = Context::from_config(config);

        let [a, b, c, d] = *the_context.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };

        the_context.trail.push_level();
        the_context.assign(-b, AssignmentSource::Decision);
        the_context.trail.push_level();
        the_context.assign(-c, AssignmentSource::Decision);

        let locked = the_context
            .clause_db
            .store(vec![a, b, c], ClauseSource::Resolution, 2, &mut the_context.watches)
            .expect("store");
        the_context.assign(a, AssignmentSource::BCP(locked));

        let free = the_context
            .clause_db
            .store(vec![d, b, c], ClauseSource::Resolution, 2, &mut the_context.watches)
            .expect("store");

        let locked_clause = the_context.clause_db.get(&locked).expect("locked");
        assert!(the_context.is_locked(locked_clause));

        assert!(the_context.reduce().is_ok());
        assert_eq!(the_context.counters.reductions, 1);
        assert!(the_context.clause_db.get(&locked).is_ok());
        assert_eq!(the_context.clause_db.get(&free).err(), Some(ClauseDBError::Missing));
        assert_eq!(the_context.atom_db.reason_of(a.atom()), Some(locked));
    }
}
