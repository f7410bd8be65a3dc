//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod checks;
pub mod decision;
pub mod minimization;
pub mod reduction;
pub mod restart;
pub mod simplify;
pub mod solve;
