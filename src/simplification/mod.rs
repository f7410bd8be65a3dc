/*!
Simplification collaborators, run during [episodes](crate::procedures::simplify) at level zero.

Each collaborator implements the [Simplifier] trait, and is given mutable access to a working [Formula]: the clauses of the context (original and learnt, without the encodings of XOR constraints), the XOR constraints, and the facts at level zero.

A collaborator may remove or rewrite clauses and XOR constraints, and returns an [Outcome] noting:
- Unit facts derived.
- Whether the formula was found to be unsatisfiable.
- A count of clauses eliminated.
- Atoms removed from the formula, which must not appear in any clause, XOR constraint, or fact after the collaborator returns.

Collaborators:
- [Replacement](replacement::Replacement), of equivalent atoms by a representative.
- [Subsumption](subsumption::Subsumption), of clauses by clauses.
- [XorSubsumption](xor_subsumption::XorSubsumption), of XOR constraints by XOR constraints.
- [Gaussian](gaussian::Gaussian) elimination, over XOR constraints.

Collaborators are independent of a context, and so may be tested on a formula directly.

```rust
# use marten_sat::simplification::{Formula, FormulaClause, Simplifier, subsumption::Subsumption};
# use marten_sat::structures::{clause::ClauseSource, literal::{CLiteral, Literal}};
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);
let r = CLiteral::new(2, true);

let mut formula = Formula::new(3, &[]);
formula.push_clause(FormulaClause::original(vec![p, q]));
formula.push_clause(FormulaClause::original(vec![p, q, r]));

let outcome = Subsumption::default().simplify(&mut formula).expect("simplify");
assert_eq!(outcome.eliminated_clauses, 1);
assert_eq!(formula.clauses.len(), 1);
```
*/

pub mod gaussian;
pub mod replacement;
pub mod subsumption;
pub mod xor_subsumption;

use std::time::Duration;

use crate::{
    config::{Activity, LBD},
    structures::{
        atom::Atom,
        clause::{CClause, ClauseSource},
        literal::{CLiteral, Literal},
        xor::XorClause,
    },
    types::err::ErrorKind,
};

use gaussian::Gaussian;
use replacement::Replacement;
use subsumption::Subsumption;
use xor_subsumption::XorSubsumption;

/// A clause of a working formula, with the details required to restore the clause to the clause database.
#[derive(Clone, Debug, PartialEq)]
pub struct FormulaClause {
    /// The literals of the clause, sorted.
    pub literals: CClause,

    /// The source of the clause.
    pub source: ClauseSource,

    /// The literal block distance of the clause.
    pub lbd: LBD,

    /// The activity of the clause.
    pub activity: Activity,
}

impl FormulaClause {
    /// An original clause.
    pub fn original(mut literals: CClause) -> Self {
        literals.sort_unstable();
        let lbd = LBD::try_from(literals.len()).unwrap_or(LBD::MAX);
        FormulaClause {
            literals,
            source: ClauseSource::Original,
            lbd,
            activity: 0.0,
        }
    }
}

/// A working formula.
pub struct Formula {
    /// Clauses, each of at least two literals and without any literal whose atom is a fact.
    pub clauses: Vec<FormulaClause>,

    /// XOR constraints, each over at least two atoms, none of which is a fact.
    pub xors: Vec<XorClause>,

    /// Facts, in order of derivation.
    pub facts: Vec<CLiteral>,

    values: Vec<Option<bool>>,
}

impl Formula {
    /// An empty formula over `atom_count` atoms, with the given facts.
    pub fn new(atom_count: usize, facts: &[CLiteral]) -> Self {
        let mut values = vec![None; atom_count];
        for fact in facts {
            values[fact.atom() as usize] = Some(fact.polarity());
        }
        Formula {
            clauses: Vec::default(),
            xors: Vec::default(),
            facts: facts.to_vec(),
            values,
        }
    }

    /// A count of atoms in the language of the formula.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// The value of `atom`, if a fact.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied().flatten()
    }

    /// Adds a clause, with literals sorted.
    pub fn push_clause(&mut self, mut clause: FormulaClause) {
        clause.literals.sort_unstable();
        self.clauses.push(clause);
    }

    /// Adds `units` as facts, and simplifies each clause and XOR constraint by the facts, repeating until no further fact follows.
    ///
    /// Returns false if some fact conflicts with another, or some clause or XOR constraint is falsified.
    pub fn apply_units(&mut self, units: &[CLiteral]) -> bool {
        let mut queue = units.to_vec();

        loop {
            for unit in queue.drain(..) {
                match self.values[unit.atom() as usize] {
                    Some(value) if value != unit.polarity() => return false,
                    Some(_) => {}
                    None => {
                        self.values[unit.atom() as usize] = Some(unit.polarity());
                        self.facts.push(unit);
                    }
                }
            }

            let values = &self.values;
            let value_of_literal =
                |literal: &CLiteral| values[literal.atom() as usize].map(|v| v == literal.polarity());
            let mut falsified = false;

            self.clauses.retain_mut(|clause| {
                if clause.literals.iter().any(|literal| value_of_literal(literal) == Some(true)) {
                    return false;
                }
                clause.literals.retain(|literal| value_of_literal(literal).is_none());
                match clause.literals.len() {
                    0 => {
                        falsified = true;
                        false
                    }
                    1 => {
                        queue.push(clause.literals[0]);
                        false
                    }
                    _ => true,
                }
            });

            self.xors.retain_mut(|xor| {
                let valued = xor
                    .atoms()
                    .iter()
                    .filter_map(|atom| values[*atom as usize].map(|value| (*atom, value)))
                    .collect::<Vec<_>>();
                for (atom, value) in valued {
                    xor.assign(atom, value);
                }
                match xor.size() {
                    0 => {
                        falsified |= xor.parity();
                        false
                    }
                    1 => {
                        queue.push(CLiteral::new(xor.atoms()[0], xor.parity()));
                        false
                    }
                    _ => true,
                }
            });

            if falsified {
                return false;
            }
            if queue.is_empty() {
                return true;
            }
        }
    }

    /// Some atom of a clause or XOR constraint for which `test` holds, if one exists.
    pub fn find_atom(&self, test: impl Fn(Atom) -> bool) -> Option<Atom> {
        let clause_atoms = self.clauses.iter().flat_map(|clause| clause.literals.iter().map(|literal| literal.atom()));
        let xor_atoms = self.xors.iter().flat_map(|xor| xor.atoms().iter().copied());
        clause_atoms.chain(xor_atoms).find(|atom| test(*atom))
    }
}

/// The outcome of simplification by some collaborator.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Unit facts derived.
    pub units: Vec<CLiteral>,

    /// Whether the formula was found to be unsatisfiable.
    pub unsatisfiable: bool,

    /// A count of clauses (or XOR constraints) eliminated.
    pub eliminated_clauses: usize,

    /// Atoms removed from the formula.
    pub eliminated_atoms: Vec<Atom>,
}

/// Methods required of a simplification collaborator.
pub trait Simplifier {
    /// The name of the collaborator.
    fn name(&self) -> &'static str;

    /// Simplifies `formula`.
    fn simplify(&mut self, formula: &mut Formula) -> Result<Outcome, ErrorKind>;
}

/// Statistics of a collaborator, across all episodes.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct SimplifierStats {
    /// The name of the collaborator.
    pub name: &'static str,

    /// A count of calls.
    pub calls: usize,

    /// A count of clauses (or XOR constraints) eliminated.
    pub eliminated_clauses: usize,

    /// A count of atoms replaced.
    pub replaced_atoms: usize,

    /// A count of unit facts derived.
    pub units: usize,

    /// Total time spent.
    pub time: Duration,
}

/// The number of collaborators.
pub const COLLABORATOR_COUNT: usize = 4;

/// The collaborators of a context, in order of application, with statistics.
pub struct Simplifiers {
    /// Replacement of equivalent atoms, also consulted when clauses are added and when atoms are valued.
    pub replacement: Replacement,

    subsumption: Subsumption,

    xor_subsumption: XorSubsumption,

    gaussian: Gaussian,

    /// Statistics for each collaborator, in order of application.
    pub stats: [SimplifierStats; COLLABORATOR_COUNT],
}

impl Default for Simplifiers {
    fn default() -> Self {
        let replacement = Replacement::default();
        let subsumption = Subsumption::default();
        let xor_subsumption = XorSubsumption::default();
        let gaussian = Gaussian::default();

        let stats = [
            replacement.name(),
            subsumption.name(),
            xor_subsumption.name(),
            gaussian.name(),
        ]
        .map(|name| SimplifierStats {
            name,
            ..SimplifierStats::default()
        });

        Simplifiers {
            replacement,
            subsumption,
            xor_subsumption,
            gaussian,
            stats,
        }
    }
}

impl Simplifiers {
    /// The collaborator at `index`, in order of application.
    pub fn collaborator(&mut self, index: usize) -> Option<&mut dyn Simplifier> {
        match index {
            0 => Some(&mut self.replacement),
            1 => Some(&mut self.subsumption),
            2 => Some(&mut self.xor_subsumption),
            3 => Some(&mut self.gaussian),
            _ => None,
        }
    }

    /// Sets the count of subset checks permitted to subsumption during an episode.
    pub fn set_subsumption_budget(&mut self, budget: usize) {
        self.subsumption.budget = budget;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_int(int).expect("literal")
    }

    #[test]
    fn units_cascade() {
        let mut formula = Formula::new(4, &[]);
        formula.push_clause(FormulaClause::original(vec![lit(-1), lit(2)]));
        formula.push_clause(FormulaClause::original(vec![lit(-2), lit(3), lit(4)]));
        formula.xors.push(XorClause::from_literals(&[lit(3), lit(4)]));

        assert!(formula.apply_units(&[lit(1), lit(-3)]));
        assert!(formula.clauses.is_empty());
        assert!(formula.xors.is_empty());
        assert_eq!(formula.value_of(1), Some(true));
        assert_eq!(formula.value_of(3), Some(true));
    }

    #[test]
    fn units_falsify() {
        let mut formula = Formula::new(2, &[lit(1)]);
        formula.push_clause(FormulaClause::original(vec![lit(-1), lit(-2)]));
        formula.xors.push(XorClause::from_literals(&[lit(1), lit(-2)]));

        assert!(!formula.apply_units(&[]));
    }
}
