//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, extended with XOR constraints.
//!
//! marten_sat is a conflict-driven clause-learning solver.
//! Alongside the core search, periodic simplification episodes replace equivalent atoms, remove subsumed clauses and reason over XOR constraints by gaussian elimination.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause), and likewise for [XOR constraints](crate::context::GenericContext::add_xor).
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships between, a handful of [databases](crate::db):
//! - A formula is stored in a clause database, with XOR constraints alongside in an XOR database.
//! - A valuation, with the level and reason of each assignment, is stored in an atom database.
//! - Assignments are stored in order on a trail.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [simplification episode](crate::procedures::simplify), and the [collaborators](crate::simplification) run during an episode.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms.
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let mut config = Config::default();
//! config.simplification.enabled.value = false;
//! let mut the_context = Context::from_config(config);
//!
//! let atoms = (0..4).map(|_| the_context.fresh_or_max_atom()).collect::<Vec<_>>();
//! let mut count = 0;
//!
//! while the_context.solve() == Ok(Report::Satisfiable) {
//!     count += 1;
//!
//!     let blocking_clause = atoms
//!         .iter()
//!         .filter_map(|atom| the_context.value_of(*atom).map(|value| CLiteral::new(*atom, !value)))
//!         .collect::<Vec<_>>();
//!
//!     assert!(the_context.add_clause(blocking_clause).is_ok());
//! }
//!
//! assert_eq!(count, 2_usize.pow(4));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! Logging is compiled out of release builds.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Progress snapshots at each restart can be found with `RUST_LOG=progress=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod simplification;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
