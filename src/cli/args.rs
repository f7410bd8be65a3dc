use std::{path::PathBuf, time::Duration};

use clap::Parser;
use marten_sat::{
    config::{Config, RestartPolicy, StaticSchedule},
    context::ContextState,
    types::err::ErrorKind,
};

/// Determines whether a formula is satisfiable or unsatisfiable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse, optionally xz compressed
    pub formula_file: PathBuf,

    /// The policy used to schedule restarts
    #[arg(long, value_enum)]
    pub restart_policy: Option<RestartPolicy>,

    /// The schedule used by static restarts
    #[arg(long, value_enum)]
    pub static_schedule: Option<StaticSchedule>,

    /// End the solve after this many restarts
    #[arg(long)]
    pub max_restarts: Option<usize>,

    /// End the solve after this many conflicts
    #[arg(long)]
    pub conflict_budget: Option<usize>,

    /// Time limit for the solve, in seconds
    #[arg(long, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time_limit: Option<Duration>,

    /// Disable simplification episodes
    #[arg(long, default_value_t = false)]
    pub no_simplify: bool,

    /// Disable replacement of equivalent atoms
    #[arg(long, default_value_t = false)]
    pub no_replacement: bool,

    /// Disable subsumption of clauses
    #[arg(long, default_value_t = false)]
    pub no_subsumption: bool,

    /// Disable subsumption of XOR constraints
    #[arg(long, default_value_t = false)]
    pub no_xor_subsumption: bool,

    /// Disable gaussian elimination over XOR constraints
    #[arg(long, default_value_t = false)]
    pub no_gaussian: bool,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Write facts, equivalences and learnt clauses to the given file on completion
    #[arg(long)]
    pub dump_learnts: Option<PathBuf>,

    /// The largest learnt clause to write when dumping learnt clauses
    #[arg(long, default_value_t = usize::MAX)]
    pub dump_max_size: usize,
}

impl Args {
    /// A configuration, with options set from the arguments.
    pub fn config(&self) -> Result<Config, ErrorKind> {
        let mut config = Config::default();
        let state = ContextState::Configuration;

        if let Some(policy) = self.restart_policy {
            config.restarts.policy.set(policy, &state)?;
        }
        if let Some(schedule) = self.static_schedule {
            config.restarts.schedule.set(schedule, &state)?;
        }
        if let Some(restarts) = self.max_restarts {
            config.restarts.max_restarts.set(Some(restarts), &state)?;
        }
        if let Some(limit) = self.time_limit {
            config.time_limit.set(Some(limit), &state)?;
        }

        let simplification = &mut config.simplification;
        simplification.enabled.set(!self.no_simplify, &state)?;
        simplification.replacement.set(!self.no_replacement, &state)?;
        simplification.subsumption.set(!self.no_subsumption, &state)?;
        simplification.xor_subsumption.set(!self.no_xor_subsumption, &state)?;
        simplification.gaussian.set(!self.no_gaussian, &state)?;

        Ok(config)
    }
}
