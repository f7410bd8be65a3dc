/*!
Databases for holding information relevant to a solve.

- [The atom database](crate::db::atom) holds the current valuation, the level and reason of each assignment, and the activity of each atom.
- [The clause database](crate::db::clause) holds original and learnt clauses, accessed through [keys](ClauseKey).
- [Watch lists](crate::db::watches) map each literal to the clauses watching the literal.
- [The trail](crate::db::trail) holds assignments in the order they were made, and marks where each decision level begins.
- [The XOR database](crate::db::xor) holds XOR constraints, whose CNF encodings are in the clause database.

Each database is owned by a [context](crate::context), and interaction between databases happens through methods on a context.
*/

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;
pub mod xor;

/// A decision level, zero being the level at which no decision has been made.
pub type LevelIndex = u32;
