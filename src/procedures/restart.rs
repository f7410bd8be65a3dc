/*!
Restarts, and the schedules which determine when a restart is due.

A restart backjumps to level zero, keeping every clause (learnt or otherwise), the activity of each atom, and saved phases.

# Schedules

The [policy](crate::config::RestartPolicy) of a context fixes the schedule:

- Static restarts are due when the count of conflicts since the last restart reaches a limit.
  The limit follows either the luby sequence scaled by [luby_u](crate::config::RestartConfig::luby_u), or a geometric sequence.

- Dynamic restarts follow [Glucose](https://doi.org/10.1007/978-3-642-33558-7_11).
  A restart is due when the average literal block distance of the most recent learnt clauses exceeds a margin of the average over all learnt clauses.
  And, as a long trail suggests the search is close to a model, when the trail at a conflict is much longer than the recent average the recent learnt clauses are forgotten, blocking any restart until the window fills again.

# Example

```rust,ignore
if self.restart_scheduler.restart_due(self.counters.fresh_conflicts, &self.config.restarts) {
    self.restart();
}
```
*/

use crate::{
    config::{RestartConfig, RestartPolicy, StaticSchedule, LBD},
    context::GenericContext,
    generic::{
        luby::Luby,
        moving_average::{CumulativeMovingAverage, MovingAverage, WindowedMovingAverage},
    },
    misc::log::targets::{self},
};

/// The state of restart schedules.
pub struct RestartScheduler {
    /// The position in the luby sequence.
    luby: Luby,

    /// The current limit of the geometric schedule.
    geometric_limit: f64,

    /// The literal block distance of recently learnt clauses.
    lbd_recent: WindowedMovingAverage,

    /// The literal block distance of all learnt clauses.
    lbd_all: CumulativeMovingAverage,

    /// The length of the trail at recent conflicts.
    trail_recent: WindowedMovingAverage,

    /// A count of blocked restarts.
    pub blocked: usize,
}

impl RestartScheduler {
    /// A scheduler at the start of each schedule.
    pub fn new(config: &RestartConfig) -> Self {
        RestartScheduler {
            luby: Luby::default(),
            geometric_limit: config.geometric_start.value,
            lbd_recent: WindowedMovingAverage::new(config.lbd_window.value),
            lbd_all: CumulativeMovingAverage::default(),
            trail_recent: WindowedMovingAverage::new(config.blocking_window.value),
            blocked: 0,
        }
    }

    /// Notes a conflict, from which a clause with the given literal block distance was learnt when the trail had the given length.
    pub fn note_conflict(&mut self, lbd: LBD, trail_length: usize, config: &RestartConfig) {
        if config.policy.value == RestartPolicy::Dynamic && config.blocking.value {
            let trail_length = trail_length as u64;
            if self.trail_recent.is_full()
                && self.lbd_recent.is_full()
                && trail_length as f64 > config.blocking_margin.value * self.trail_recent.value()
            {
                log::trace!(target: targets::RESTART, "Restart blocked at trail length {trail_length}");
                self.blocked += 1;
                self.lbd_recent.clear();
            }
            self.trail_recent.add_term(trail_length);
        }

        self.lbd_recent.add_term(lbd as u64);
        self.lbd_all.add_term(lbd as u64);
    }

    /// The count of conflicts since the last restart at which a static restart is due.
    pub fn static_limit(&self, config: &RestartConfig) -> usize {
        match config.schedule.value {
            StaticSchedule::Luby => config.luby_u.value as usize * self.luby.current() as usize,
            StaticSchedule::Geometric => self.geometric_limit as usize,
        }
    }

    /// Whether a restart is due, given the count of conflicts since the last restart.
    pub fn restart_due(&self, fresh_conflicts: usize, config: &RestartConfig) -> bool {
        if !config.enabled.value {
            return false;
        }
        match config.policy.value {
            RestartPolicy::Static => fresh_conflicts >= self.static_limit(config),

            RestartPolicy::Dynamic => {
                self.lbd_recent.is_full()
                    && self.lbd_recent.value() > config.lbd_margin.value * self.lbd_all.value()
            }
        }
    }

    /// Notes a restart, advancing the static schedules and forgetting recent learnt clauses.
    pub fn note_restart(&mut self, config: &RestartConfig) {
        match config.schedule.value {
            StaticSchedule::Luby => {
                self.luby.next();
            }
            StaticSchedule::Geometric => self.geometric_limit *= config.geometric_factor.value,
        }
        self.lbd_recent.clear();
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes all decisions, and the consequences of those decisions, keeping every clause.
    ///
    /// For documentation, see [procedures::restart](crate::procedures::restart).
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.restarts += 1;
        self.counters.solve_restarts += 1;
        self.counters.fresh_conflicts = 0;
        self.restart_scheduler.note_restart(&self.config.restarts);

        log::info!(target: targets::PROGRESS, "{}", self.snapshot());
    }

    /// Removes all decisions, and the consequences of those decisions, without noting a restart.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
    }

    /// Sets the restart policy, which also fixes the order used to reduce the clause database.
    pub fn set_restart_policy(&mut self, policy: RestartPolicy) -> Result<(), crate::types::err::ErrorKind> {
        self.config.restarts.policy.set(policy, &self.state)
    }

    /// Sets the count of restarts permitted during a solve.
    pub fn set_max_restarts(&mut self, restarts: usize) -> Result<(), crate::types::err::ErrorKind> {
        self.config.restarts.max_restarts.set(Some(restarts), &self.state)
    }
}
