/*!
Reports for the context.

- [Report], a high-level report on a solve.
- [Snapshot], a summary of the databases of a context, logged at each restart.
- Accessors for learnt clauses, facts, simplification statistics and the valuation, none of which mutate the context.

Atoms replaced during simplification have no value of their own, and so [value_of](crate::context::GenericContext::value_of) derives the value of a replaced atom from the value of its representative.
*/

use std::io::Write;

use crate::{
    config::RestartPolicy,
    context::{ContextState, GenericContext},
    procedures::reduction::quality_order,
    simplification::SimplifierStats,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable, perhaps given some assumptions.
    Unsatisfiable,

    /// Some resource was exhausted before satisfiability was determined.
    ResourceLimit,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable | ContextState::AssumptionsUnsatisfiable => {
                Self::Unsatisfiable
            }
            ContextState::ResourceLimit => Self::ResourceLimit,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::ResourceLimit => write!(f, "ResourceLimit"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A summary of the databases of a context.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    pub restart_policy: RestartPolicy,
    pub conflicts: usize,
    pub restarts: usize,
    pub decisions: usize,

    /// Atoms on the activity heap.
    pub heap_size: usize,

    /// Original clauses over more than two literals, including the encodings of XOR constraints.
    pub clauses: usize,

    /// Binary clauses, original or learnt.
    pub binary_clauses: usize,

    /// Learnt clauses over more than two literals.
    pub learnts: usize,

    pub clause_literals: usize,
    pub learnt_literals: usize,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let policy = match self.restart_policy {
            RestartPolicy::Static => "st",
            RestartPolicy::Dynamic => "dy",
        };
        write!(
            f,
            "c {policy:>3}{:>6}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}",
            self.restarts,
            self.conflicts,
            self.heap_size,
            self.clauses,
            self.binary_clauses,
            self.learnts,
            self.clause_literals,
            self.learnt_literals
        )
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The current learnt clauses, best first by the order of the active restart policy if `sorted`.
    pub fn learnt_clauses(&self, sorted: bool) -> Vec<CClause> {
        let mut learnts = self.clause_db.addition_clauses().collect::<Vec<_>>();
        if sorted {
            let policy = self.config.restarts.policy.value;
            learnts.sort_by(|a, b| quality_order(policy, b, a));
        }
        learnts.into_iter().map(|clause| clause.to_vec()).collect()
    }

    /// The facts at level zero, in order of assignment.
    pub fn level_zero_facts(&self) -> Vec<CLiteral> {
        self.trail.level_zero().to_vec()
    }

    /// Statistics for each simplification collaborator, in order of application.
    pub fn simplification_stats(&self) -> &[SimplifierStats] {
        &self.simplifiers.stats
    }

    /// A count of atoms replaced by an equivalent atom.
    pub fn replaced_atom_count(&self) -> usize {
        self.simplifiers.replacement.replaced_count()
    }

    /// A count of clauses (and XOR constraints) eliminated during simplification.
    pub fn eliminated_clause_count(&self) -> usize {
        self.simplifiers
            .stats
            .iter()
            .map(|stats| stats.eliminated_clauses)
            .sum()
    }

    /// A snapshot of the context.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            restart_policy: self.config.restarts.policy.value,
            conflicts: self.counters.total_conflicts,
            restarts: self.counters.restarts,
            decisions: self.counters.total_decisions,
            heap_size: self.atom_db.heap_count(),
            clauses: 0,
            binary_clauses: 0,
            learnts: 0,
            clause_literals: 0,
            learnt_literals: 0,
        };

        for clause in self.clause_db.all_clauses() {
            match (clause.len(), clause.source().is_learnt()) {
                (2, _) => snapshot.binary_clauses += 1,
                (_, true) => snapshot.learnts += 1,
                (_, false) => snapshot.clauses += 1,
            }
            match clause.source().is_learnt() {
                true => snapshot.learnt_literals += clause.len(),
                false => snapshot.clause_literals += clause.len(),
            }
        }

        snapshot
    }

    /// Writes facts, equivalences and learnt clauses in DIMACS form.
    ///
    /// - Facts at level zero.
    /// - Each equivalence noted by replacement, as two binary clauses.
    /// - Learnt clauses over at most `max_size` literals, best first.
    ///
    /// If `max_size` is one, only facts are written.
    pub fn dump_learnts(&self, writer: &mut impl Write, max_size: usize) -> std::io::Result<()> {
        writeln!(writer, "c \nc ---------\nc unitaries\nc ---------")?;
        for fact in self.trail.level_zero() {
            writeln!(writer, "{fact} 0")?;
        }
        writeln!(writer, "c conflicts {}", self.counters.total_conflicts)?;

        if max_size == 1 {
            return Ok(());
        }

        writeln!(writer, "c \nc ------------\nc equivalences\nc ------------")?;
        for atom in self.simplifiers.replacement.replaced_atoms() {
            let (representative, flip) = self.simplifiers.replacement.representative(*atom);
            let equivalent = CLiteral::new(representative, !flip);
            let literal = CLiteral::new(*atom, true);
            writeln!(writer, "{}", [-equivalent, literal].as_dimacs(true))?;
            writeln!(writer, "{}", [equivalent, -literal].as_dimacs(true))?;
        }

        writeln!(writer, "c \nc -------\nc learnts\nc -------")?;
        for clause in self.learnt_clauses(true) {
            if clause.len() <= max_size {
                writeln!(writer, "{}", clause.as_dimacs(true))?;
            }
        }

        Ok(())
    }

    /// The value of `atom`, if any.
    ///
    /// The value of a replaced atom is derived from the value of its representative.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        if atom as usize >= self.atom_db.count() {
            return None;
        }
        match self.atom_db.is_eliminated(atom) {
            true => {
                let (representative, flip) = self.simplifiers.replacement.representative(atom);
                self.atom_db.value_of(representative).map(|value| value ^ flip)
            }
            false => self.atom_db.value_of(atom),
        }
    }

    /// The value of each atom, indexed by atoms.
    pub fn model(&self) -> Vec<Option<bool>> {
        (0..self.atom_db.count())
            .map(|index| self.value_of(index as Atom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context};

    #[test]
    fn dump_sections() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();
        let q = the_context.fresh_or_max_literal();
        assert!(the_context.add_clause(p).is_ok());
        assert!(the_context.add_clause(vec![-p, q]).is_ok());
        assert!(the_context.solve().is_ok());

        let mut facts_only = Vec::default();
        assert!(the_context.dump_learnts(&mut facts_only, 1).is_ok());
        let facts_only = String::from_utf8(facts_only).expect("utf8");
        assert!(facts_only.contains("\n1 0\n"));
        assert!(facts_only.contains("\n2 0\n"));
        assert!(facts_only.ends_with("c conflicts 0\n"));

        let mut full = Vec::default();
        assert!(the_context.dump_learnts(&mut full, 10).is_ok());
        let full = String::from_utf8(full).expect("utf8");
        assert!(full.contains("c learnts"));
    }

    #[test]
    fn snapshot_counts() {
        let mut the_context = Context::from_config(Config::default());
        let literals = the_context.fresh_or_max_literals(4);
        assert!(the_context.add_clause(vec![literals[0], literals[1]]).is_ok());
        assert!(the_context
            .add_clause(vec![literals[1], literals[2], -literals[3]])
            .is_ok());

        let snapshot = the_context.snapshot();
        assert_eq!(snapshot.binary_clauses, 1);
        assert_eq!(snapshot.clauses, 1);
        assert_eq!(snapshot.learnts, 0);
        assert_eq!(snapshot.clause_literals, 5);
        assert!(format!("{snapshot}").starts_with("c  dy"));
    }

    #[test]
    fn report_from_state() {
        assert_eq!(Report::from(ContextState::AssumptionsUnsatisfiable), Report::Unsatisfiable);
        assert_eq!(Report::from(ContextState::ResourceLimit), Report::ResourceLimit);
        assert_eq!(Report::from(ContextState::Input), Report::Unknown);
    }
}
