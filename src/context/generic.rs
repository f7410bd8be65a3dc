use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, xor::XorDB},
    procedures::{analysis::AnalysisBuffer, restart::RestartScheduler},
    reports::Report,
    simplification::Simplifiers,
    structures::literal::CLiteral,
};

use super::{callbacks::CallbackTerminate, ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used to temporarily take the source of randomness when making a decision, so the source may be used alongside borrows of the databases.
///
/// # Example
///
/// ```rust
/// # use marten_sat::context::GenericContext;
/// # use marten_sat::generic::minimal_pcg::MinimalPCG32;
/// # use marten_sat::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::<MinimalPCG32>::from_config_and_rng(
///     Config::default(),
///     MinimalPCG32::from_seed(7_u64.to_le_bytes()),
/// );
/// assert_eq!(context.atom_db.count(), 0);
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// Watch lists for each literal.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The XOR constraints of the formula, each also encoded in the clause database.
    pub xor_db: XorDB,

    /// The trail.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Marks used during conflict analysis.
    pub(crate) analysis_buffer: AnalysisBuffer,

    /// The state of restart schedules.
    pub(crate) restart_scheduler: RestartScheduler,

    /// Simplification collaborators, and the record of atoms replaced.
    pub(crate) simplifiers: Simplifiers,

    /// The assumptions of the current (or last) solve.
    pub(crate) assumptions: Vec<CLiteral>,

    /// The assumption found false during the last solve, if any.
    pub(crate) failed_assumption: Option<CLiteral>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        let counters = Counters {
            next_reduction: config.clause_db.reduction_interval.value,
            next_episode: config.simplification.interval.value,
            ..Counters::default()
        };

        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            analysis_buffer: AnalysisBuffer::default(),
            restart_scheduler: RestartScheduler::new(&config.restarts),
            simplifiers: Simplifiers::default(),

            config,

            counters,
            watches: Watches::default(),
            xor_db: XorDB::default(),
            trail: Trail::default(),

            rng,
            state: ContextState::Configuration,

            assumptions: Vec::default(),
            failed_assumption: None,
            callback_terminate: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The assumption found to be false during the last solve, if the last solve was unsatisfiable given the assumptions.
    pub fn failed_assumption(&self) -> Option<CLiteral> {
        self.failed_assumption
    }
}
