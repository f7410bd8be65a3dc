/*!
Tools for building a context.

# Basic methods

The library has three basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.
- [add_xor](crate::context::GenericContext::add_xor), to add an XOR constraint.

And, a formula in DIMACS form may be read with [read_dimacs](crate::context::GenericContext::read_dimacs).

Clauses and XOR constraints may be added before any solve, or between solves.
In either case, the context returns to level zero and:
- Literals are mapped to the representatives of any atoms [replaced](crate::simplification::replacement) during an earlier episode.
- Duplicate literals are removed, and tautologies are skipped.
- Literals false at level zero are removed, and a clause with a literal true at level zero is skipped.
- A clause of a single literal is assigned at level zero, rather than stored.

XOR constraints over more than [xor_cut](crate::config::SimplificationConfig::xor_cut) + 1 atoms are cut into a chain of shorter constraints, and the CNF encoding of each constraint of the chain is added to the clause database.

# Examples

A clause built using basic methods.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

A build with an XOR constraint.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::builder::ClauseOk;
# use marten_sat::structures::literal::Literal;
#
let mut the_context = Context::from_config(Config::default());
let literals = the_context.fresh_or_max_literals(3);

assert_eq!(the_context.add_xor(literals.clone()), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(vec![-literals[0], -literals[1]]), Ok(ClauseOk::Added));
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

let parity = literals
    .iter()
    .filter(|literal| the_context.value_of(literal.atom()) == Some(true))
    .count();
assert_eq!(parity % 2, 1);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    config::LBD,
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{normalise, CClause, ClauseSource, Normalised},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
        xor::XorClause,
    },
    types::err::{BuildError, ErrorKind},
};

/// Ok results when adding a clause (or XOR constraint) to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context, either as a clause or as a fact.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause was satisfied at level zero (and so was not added to the context).
    Satisfied,

    /// The formula of the context is unsatisfiable, given the clause.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let previous_value = self.rng.gen_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;

        let atom_count = self.atom_db.count();
        self.watches.ensure_atoms(atom_count);
        self.analysis_buffer.ensure_atoms(atom_count);

        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        self.fresh_atom().unwrap_or(ATOM_MAX)
    }

    /// Returns a fresh literal with polarity true, or the maximum atom with polarity true.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns `count` literals, each with either a fresh atom or the maximum atom and polarity true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count).map(|_| self.fresh_or_max_literal()).collect()
    }

    /// Ensures `atom` is part of the context, by introducing as many atoms as required for atoms to form a contiguous block from zero to `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        while self.atom_db.count() <= atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Returns the context to level zero, to take a clause or XOR constraint over `literals`.
    ///
    /// Returns false if the formula of the context is known to be unsatisfiable.
    fn prepare_for_input(&mut self, literals: &[CLiteral]) -> Result<bool, ErrorKind> {
        if let Some(atom) = literals.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom(atom)?;
        }

        if self.state == ContextState::Unsatisfiable {
            return Ok(false);
        }

        self.backjump(0);
        self.state = ContextState::Input;
        Ok(true)
    }

    /// Adds a clause to the context.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        let clause: CClause = clause.into();
        if !self.prepare_for_input(&clause)? {
            return Ok(ClauseOk::Unsatisfiable);
        }

        let mapped = clause
            .iter()
            .map(|literal| self.simplifiers.replacement.map_literal(*literal))
            .collect();

        let literals = match normalise(mapped) {
            Normalised::Tautology => return Ok(ClauseOk::Tautology),
            Normalised::Clause(literals) => literals,
        };

        let mut unvalued = Vec::with_capacity(literals.len());
        for literal in literals {
            match self.atom_db.value_of_literal(literal) {
                Some(true) => return Ok(ClauseOk::Satisfied),
                Some(false) => {}
                None => unvalued.push(literal),
            }
        }

        match unvalued.as_slice() {
            [] => {
                log::info!("Unsatisfiable clause added");
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Unsatisfiable)
            }

            [literal] => {
                self.assign(*literal, AssignmentSource::Unit);
                Ok(ClauseOk::Added)
            }

            _ => {
                let lbd = LBD::try_from(unvalued.len()).unwrap_or(LBD::MAX);
                self.clause_db
                    .store(unvalued, ClauseSource::Original, lbd, &mut self.watches)?;
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Adds an XOR constraint to the context, requiring the exclusive-or of `literals` to be true.
    pub fn add_xor(&mut self, literals: Vec<CLiteral>) -> Result<ClauseOk, ErrorKind> {
        if !self.prepare_for_input(&literals)? {
            return Ok(ClauseOk::Unsatisfiable);
        }

        let replacement = &self.simplifiers.replacement;
        let mut xor = XorClause::from_literals(&literals).substitute(|atom| replacement.representative(atom));

        let valued = xor
            .atoms()
            .iter()
            .filter_map(|atom| self.atom_db.value_of(*atom).map(|value| (*atom, value)))
            .collect::<Vec<_>>();
        for (atom, value) in valued {
            xor.assign(atom, value);
        }

        match xor.atoms() {
            [] if xor.parity() => {
                log::info!(target: targets::XOR, "Unsatisfiable XOR constraint added");
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Unsatisfiable)
            }

            [] => Ok(ClauseOk::Satisfied),

            [atom] => {
                let literal = CLiteral::new(*atom, xor.parity());
                self.assign(literal, AssignmentSource::Unit);
                Ok(ClauseOk::Added)
            }

            _ => {
                self.store_xor(xor)?;
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Stores an XOR constraint over at least two atoms, none of which has a value, cutting the constraint if required.
    pub(crate) fn store_xor(&mut self, xor: XorClause) -> Result<(), ErrorKind> {
        let cut = self.config.simplification.xor_cut.value;
        let chain = xor.cut(cut, || self.fresh_atom().map_err(|_| BuildError::XorCut))?;

        for link in chain {
            for clause in link.cnf_encoding() {
                let lbd = LBD::try_from(clause.len()).unwrap_or(LBD::MAX);
                self.clause_db
                    .store(clause, ClauseSource::Xor, lbd, &mut self.watches)?;
            }
            log::trace!(target: targets::XOR, "Stored {link}");
            self.xor_db.store(link);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context};

    #[test]
    fn clause_outcomes() {
        let mut the_context = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        assert_eq!(the_context.add_clause(vec![p, -p, q]), Ok(ClauseOk::Tautology));
        assert_eq!(the_context.atom_db.count(), 2);

        assert_eq!(the_context.add_clause(p), Ok(ClauseOk::Added));
        assert_eq!(the_context.add_clause(vec![p, q]), Ok(ClauseOk::Satisfied));
        assert_eq!(the_context.add_clause(vec![-p, q, q]), Ok(ClauseOk::Added));
        assert_eq!(the_context.atom_db.value_of(1), Some(true));

        assert_eq!(the_context.add_clause(vec![-p, -q]), Ok(ClauseOk::Unsatisfiable));
        assert_eq!(the_context.state, ContextState::Unsatisfiable);
        assert_eq!(the_context.add_clause(vec![q]), Ok(ClauseOk::Unsatisfiable));
    }

    #[test]
    fn long_xor_is_cut() {
        let mut the_context = Context::from_config(Config::default());
        let literals = the_context.fresh_or_max_literals(9);

        assert_eq!(the_context.add_xor(literals), Ok(ClauseOk::Added));
        assert!(the_context.atom_db.count() > 9);
        assert!(the_context.xor_db.count() > 1);
        assert!(the_context.xor_db.xors().iter().all(|xor| xor.size() <= 5));
    }

    #[test]
    fn xor_with_facts() {
        let mut the_context = Context::from_config(Config::default());
        let literals = the_context.fresh_or_max_literals(2);

        assert_eq!(the_context.add_clause(literals[0]), Ok(ClauseOk::Added));
        assert_eq!(the_context.add_xor(literals.clone()), Ok(ClauseOk::Added));
        assert_eq!(the_context.atom_db.value_of(1), Some(false));

        assert_eq!(the_context.add_xor(vec![-literals[1]]), Ok(ClauseOk::Satisfied));
        assert_eq!(
            the_context.add_xor(vec![literals[0], -literals[1]]),
            Ok(ClauseOk::Unsatisfiable)
        );
    }
}
