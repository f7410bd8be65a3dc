use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: usize,

    /// A count of conflicts seen during the current (or last) solve.
    pub solve_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all assignments propagated.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of every restart.
    pub restarts: usize,

    /// A count of restarts during the current (or last) solve.
    pub solve_restarts: usize,

    /// A count of reductions of the clause database.
    pub reductions: usize,

    /// A count of simplification episodes.
    pub episodes: usize,

    /// The total conflict count at which the next reduction happens.
    pub next_reduction: usize,

    /// The restart count at which the next simplification episode happens.
    pub next_episode: usize,

    /// The time taken during the current (or last) solve.
    pub time: Duration,
}
