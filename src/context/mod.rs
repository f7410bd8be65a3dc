/*!
The context, to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].
The generic context is generic over the source of randomness, and [Context] fixes the source to [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32), so that [from_config](Context::from_config) does not require a source of randomness alongside a configuration.

All mutable state of a solve (databases, trail, heuristics, schedules, counters) is owned by a context, and so any number of independent contexts may exist.

# Example
```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());

let p = ctx.fresh_or_max_atom();
let q = ctx.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(ctx.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);
assert!(ctx.add_clause(not_p).is_ok());

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.value_of(p), Some(false));
assert_eq!(ctx.value_of(q), Some(true));
```
*/

pub mod callbacks;

mod counters;
pub use counters::Counters;

mod generic;
pub use generic::GenericContext;

mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is satisfiable, and the valuation is a model.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The formula is unsatisfiable given the assumptions of the last solve.
    AssumptionsUnsatisfiable,

    /// The last solve ended before satisfiability was determined.
    ResourceLimit,
}

impl ContextState {
    /// The phase of a state: configuration, input, or solving (and after).
    pub fn phase(&self) -> u8 {
        match self {
            Self::Configuration => 0,
            Self::Input => 1,
            _ => 2,
        }
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::AssumptionsUnsatisfiable => write!(f, "Unsatisfiable given assumptions"),
            Self::ResourceLimit => write!(f, "Resource limit"),
        }
    }
}
