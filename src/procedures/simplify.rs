/*!
Simplification episodes.

An episode takes place at level zero, between stretches of search, and hands the formula of a context to each enabled [collaborator](crate::simplification) in turn.

# Overview

1. The context backjumps to level zero and propagates.
   A conflict here proves the formula unsatisfiable.
2. The reason of each assignment at level zero is forgotten, so clauses may be removed from the clause database without leaving any reason dangling.
3. Every clause of the clause database, other than those encoding XOR constraints, and every XOR constraint is moved to a working [Formula](crate::simplification::Formula), along with the facts at level zero.
4. Each enabled collaborator simplifies the formula, in order:
   replacement, subsumption, XOR subsumption, and gaussian elimination.
   Unit facts returned by a collaborator are applied to the formula before the next collaborator runs.
5. The formula is validated, as no clause or XOR constraint may contain an atom some collaborator noted as eliminated.
6. The clause database and watch lists are rebuilt from the formula, and fresh CNF encodings of the XOR constraints are stored.
7. New facts are assigned at level zero, and propagated from the start of the trail.

A collaborator which violates the contract of [Simplifier](crate::simplification::Simplifier) is an error, and fatal, even if the collaborator also claimed the formula is unsatisfiable.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    simplification::{Formula, FormulaClause, COLLABORATOR_COUNT},
    structures::{clause::ClauseSource, consequence::AssignmentSource, literal::Literal},
    types::err::{self, ErrorKind, SimplificationError},
};

/// Ok results of an episode.
#[derive(Debug, PartialEq, Eq)]
pub enum EpisodeOk {
    /// The formula was simplified, and the search may continue.
    Continue,

    /// The formula was found to be unsatisfiable.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Whether the collaborator at `index` is enabled.
    fn collaborator_enabled(&self, index: usize) -> bool {
        let config = &self.config.simplification;
        match index {
            0 => config.replacement.value,
            1 => config.subsumption.value,
            2 => config.xor_subsumption.value,
            3 => config.gaussian.value,
            _ => false,
        }
    }

    /// Runs a simplification episode.
    ///
    /// For documentation, see [procedures::simplify](crate::procedures::simplify).
    pub fn simplify(&mut self) -> Result<EpisodeOk, ErrorKind> {
        self.backjump(0);
        self.counters.episodes += 1;

        match self.propagate() {
            Ok(()) => {}
            Err(err::BCPError::Conflict(_)) => return Ok(EpisodeOk::Unsatisfiable),
            Err(e) => return Err(ErrorKind::from(e)),
        }

        for literal in self.trail.literals.iter() {
            self.atom_db.forget_reason(literal.atom());
        }

        let facts = self.trail.level_zero().to_vec();
        let mut formula = Formula::new(self.atom_db.count(), &facts);

        for clause in self.clause_db.take_all() {
            let (source, lbd, activity) = (clause.source(), clause.lbd(), clause.activity());
            if source == ClauseSource::Xor {
                continue;
            }
            formula.push_clause(FormulaClause {
                literals: clause.into_clause(),
                source,
                lbd,
                activity,
            });
        }
        formula.xors = self.xor_db.take_all();
        self.watches.clear();

        let clause_count = formula.clauses.len();
        let xor_count = formula.xors.len();

        self.simplifiers
            .set_subsumption_budget(self.config.simplification.subsumption_budget.value);

        // Clauses stored before a fact was derived may contain the atom of the fact.
        let mut unsatisfiable = !formula.apply_units(&[]);

        for index in 0..COLLABORATOR_COUNT {
            if unsatisfiable {
                break;
            }
            if !self.collaborator_enabled(index) {
                continue;
            }
            let Some(collaborator) = self.simplifiers.collaborator(index) else {
                continue;
            };
            let name = collaborator.name();

            let start = std::time::Instant::now();
            let outcome = collaborator.simplify(&mut formula)?;
            let elapsed = start.elapsed();

            for atom in &outcome.eliminated_atoms {
                self.atom_db.eliminate(*atom);
            }

            let stats = &mut self.simplifiers.stats[index];
            stats.calls += 1;
            stats.eliminated_clauses += outcome.eliminated_clauses;
            stats.replaced_atoms += outcome.eliminated_atoms.len();
            stats.units += outcome.units.len();
            stats.time += elapsed;

            if let Some(unit) = outcome.units.iter().find(|unit| self.atom_db.is_eliminated(unit.atom())) {
                return Err(ErrorKind::from(SimplificationError::EliminatedAtomAsFact(name, unit.atom())));
            }
            if let Some(atom) = formula.find_atom(|atom| self.atom_db.is_eliminated(atom)) {
                return Err(ErrorKind::from(SimplificationError::EliminatedAtomInFormula(name, atom)));
            }

            log::info!(
                target: targets::SIMPLIFICATION,
                "{name}: {} units, {} clauses eliminated, {} atoms eliminated",
                outcome.units.len(),
                outcome.eliminated_clauses,
                outcome.eliminated_atoms.len()
            );

            unsatisfiable = outcome.unsatisfiable || !formula.apply_units(&outcome.units);
        }

        if unsatisfiable {
            log::info!(target: targets::SIMPLIFICATION, "Episode found the formula unsatisfiable");
            return Ok(EpisodeOk::Unsatisfiable);
        }

        for clause in std::mem::take(&mut formula.clauses) {
            let key = self
                .clause_db
                .store(clause.literals, clause.source, clause.lbd, &mut self.watches)?;
            if let ClauseKey::Addition(_, _) = key {
                self.clause_db.set_activity(&key, clause.activity)?;
            }
        }

        for xor in std::mem::take(&mut formula.xors) {
            self.store_xor(xor)?;
        }

        for fact in &formula.facts[facts.len()..] {
            match self.atom_db.value_of_literal(*fact) {
                None => self.assign(*fact, AssignmentSource::Unit),
                Some(true) => {}
                Some(false) => return Ok(EpisodeOk::Unsatisfiable),
            }
        }

        log::info!(
            target: targets::SIMPLIFICATION,
            "Episode {}: clauses {clause_count} -> {}, xors {xor_count} -> {}, facts {} -> {}",
            self.counters.episodes,
            self.clause_db.original_count() + self.clause_db.addition_count(),
            self.xor_db.count(),
            facts.len(),
            formula.facts.len()
        );

        self.trail.q_head = 0;
        match self.propagate() {
            Ok(()) => Ok(EpisodeOk::Continue),
            Err(err::BCPError::Conflict(_)) => Ok(EpisodeOk::Unsatisfiable),
            Err(e) => Err(ErrorKind::from(e)),
        }
    }
}
