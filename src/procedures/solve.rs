//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve_given](GenericContext::solve_given) is a loop of propagation, analysis of conflicts, and decisions.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> satisfiable, if every atom has a value
//!   |       +---------------+
//!   |               ⌃
//!   |               | if there is no conflict
//!   |               |
//!   ⌄       +-----------+
//! --+------>| propagate |
//!   ⌃       +-----------+
//!   |               |
//!   |               | if there is a conflict      +-----> unsatisfiable, at level zero
//!   |               ⌄                             |
//!   |       +-------------------+                 |
//!   +-------| conflict_analysis |-----------------+
//!           +-------------------+
//!            backjump, learn, maybe reduce, maybe restart
//! ```
//!
//! And, at the top of each iteration:
//! - The conflict budget of the call, the time limit, and the terminate callback are checked, and a solve ends with [ResourceLimit](crate::reports::Report::ResourceLimit) if any is exhausted.
//!   Every part of the context is kept, and so a later call resumes the search with all learnt clauses.
//! - At the first iteration of a call, and every [interval](crate::config::SimplificationConfig::interval) restarts, a [simplification episode](crate::procedures::simplify) is run at level zero.
//!
//! # Assumptions
//!
//! Assumptions are made as the first decisions of a solve, see [decision](crate::procedures::decision).
//! A false assumption ends the solve as unsatisfiable, though the formula itself is not noted as unsatisfiable and the next call is free to use other assumptions.
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//!
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve_given(vec![p, -q], None), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumption(), Some(-q));
//!
//! assert_eq!(the_context.solve_given(vec![p], None), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(q.atom()), Some(true));
//! ```
//!
//! # Literature
//!
//! The core solve procedure follows the presentation of conflict-driven clause learning in the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2), chapters 3 and 4.

use crate::{
    context::{ContextState, GenericContext},
    procedures::{decision::DecisionOk, simplify::EpisodeOk},
    reports::Report,
    structures::{consequence::AssignmentSource, clause::ClauseSource, literal::CLiteral},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context, without assumptions or a conflict budget.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default(), None)
    }

    /// Determines the satisfiability of the formula in the context, given `assumptions`, within at most `conflict_budget` conflicts.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve_given(
        &mut self,
        assumptions: Vec<CLiteral>,
        conflict_budget: Option<usize>,
    ) -> Result<Report, ErrorKind> {
        if self.state == ContextState::Unsatisfiable {
            return Ok(Report::Unsatisfiable);
        }

        match self.state {
            ContextState::ResourceLimit if assumptions == self.assumptions => {}
            _ => self.backjump(0),
        }
        self.assumptions = assumptions;
        self.failed_assumption = None;

        self.state = ContextState::Solving;
        self.counters.solve_conflicts = 0;
        self.counters.solve_restarts = 0;

        let total_time = std::time::Instant::now();
        let mut episode_due = self.config.simplification.enabled.value;

        let report = 'solve_loop: loop {
            self.counters.total_iterations += 1;

            self.counters.time = total_time.elapsed();
            if conflict_budget.is_some_and(|budget| self.counters.solve_conflicts >= budget)
                || self.config.time_limit.value.is_some_and(|limit| self.counters.time > limit)
                || self.check_callback_terminate()
            {
                break 'solve_loop Report::ResourceLimit;
            }

            if episode_due {
                episode_due = false;
                self.backjump(0);
                if self.simplify()? == EpisodeOk::Unsatisfiable {
                    break 'solve_loop Report::Unsatisfiable;
                }
            }

            let conflict = match self.propagate() {
                Ok(()) => None,
                Err(err::BCPError::Conflict(key)) => Some(key),
                Err(e) => return Err(ErrorKind::from(e)),
            };

            let Some(key) = conflict else {
                match self.make_decision()? {
                    DecisionOk::Made => continue 'solve_loop,

                    DecisionOk::AssumptionFailed(literal) => {
                        log::info!("Assumption {literal} failed");
                        self.failed_assumption = Some(literal);
                        break 'solve_loop Report::Unsatisfiable;
                    }

                    DecisionOk::Exhausted => break 'solve_loop Report::Satisfiable,
                }
            };

            self.counters.total_conflicts += 1;
            self.counters.fresh_conflicts += 1;
            self.counters.solve_conflicts += 1;

            if self.trail.level() == 0 {
                break 'solve_loop Report::Unsatisfiable;
            }

            let trail_length = self.trail.literals.len();
            let analysis = self.conflict_analysis(key)?;
            self.backjump(analysis.backjump_level);

            self.restart_scheduler
                .note_conflict(analysis.lbd, trail_length, &self.config.restarts);

            match analysis.clause.len() {
                1 => self.assign(analysis.clause[0], AssignmentSource::Unit),

                _ => {
                    let asserted = analysis.clause[0];
                    let key = self.clause_db.store(
                        analysis.clause,
                        ClauseSource::Resolution,
                        analysis.lbd,
                        &mut self.watches,
                    )?;
                    if self.config.invariant_checks.value {
                        self.check_watches()?;
                    }
                    self.assign(asserted, AssignmentSource::BCP(key));
                }
            }

            if self.config.invariant_checks.value {
                self.check_trail_causality()?;
            }

            self.atom_db.exponent_activity();
            self.clause_db.decay_activity();

            if self.reduction_due() {
                self.reduce()?;
            }

            if self.restart_scheduler.restart_due(self.counters.fresh_conflicts, &self.config.restarts) {
                if self
                    .config
                    .restarts
                    .max_restarts
                    .value
                    .is_some_and(|max| self.counters.solve_restarts >= max)
                {
                    break 'solve_loop Report::ResourceLimit;
                }

                self.restart();
                if self.config.invariant_checks.value {
                    self.check_trail_causality()?;
                    self.check_watches()?;
                }

                if self.config.simplification.enabled.value
                    && self.counters.restarts >= self.counters.next_episode
                {
                    self.counters.next_episode = self.counters.restarts + self.config.simplification.interval.value;
                    episode_due = true;
                }
            }
        };

        self.counters.time = total_time.elapsed();
        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable if self.failed_assumption.is_some() => ContextState::AssumptionsUnsatisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::ResourceLimit | Report::Unknown => ContextState::ResourceLimit,
        };
        log::info!("Solve ended: {report} after {} conflicts", self.counters.solve_conflicts);

        Ok(report)
    }
}
