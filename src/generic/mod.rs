//! Generic structures, not specific to the solver.

pub mod index_heap;
pub mod luby;
pub mod minimal_pcg;
pub mod moving_average;
