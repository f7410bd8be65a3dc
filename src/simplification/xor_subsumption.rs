/*!
Subsumption of XOR constraints.

- Duplicate constraints are removed, and a pair of constraints over the same atoms with differing parity proves the formula unsatisfiable.
- A constraint *X₂* whose atoms contain the atoms of a constraint *X₁* is replaced by *X₁* ⊕ *X₂*, which is shorter and, together with *X₁*, equivalent.

A sum over a single atom is a unit fact, and a sum over no atoms is either trivial or a contradiction, depending on parity.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        xor::XorClause,
    },
    types::err::ErrorKind,
};

use super::{Formula, Outcome, Simplifier};

/// Subsumption of XOR constraints.
#[derive(Default)]
pub struct XorSubsumption {}

impl Simplifier for XorSubsumption {
    fn name(&self) -> &'static str {
        "xor_subsumption"
    }

    fn simplify(&mut self, formula: &mut Formula) -> Result<Outcome, ErrorKind> {
        let mut outcome = Outcome::default();

        let xors = &mut formula.xors;
        xors.sort_unstable_by(|a, b| a.size().cmp(&b.size()).then_with(|| a.atoms().cmp(b.atoms())));

        let before = xors.len();
        let mut kept: Vec<XorClause> = Vec::with_capacity(xors.len());
        for xor in xors.drain(..) {
            match kept.last() {
                Some(last) if *last == xor => {}
                Some(last) if last.atoms() == xor.atoms() => {
                    log::info!(target: targets::XOR, "Contradictory constraints {last} and {xor}");
                    outcome.unsatisfiable = true;
                    return Ok(outcome);
                }
                _ => kept.push(xor),
            }
        }
        outcome.eliminated_clauses += before - kept.len();

        let mut shortened = 0;
        for small_index in 0..kept.len() {
            if kept[small_index].size() == 0 {
                continue;
            }

            for large_index in (small_index + 1)..kept.len() {
                let small = &kept[small_index];
                let large = &kept[large_index];
                if large.size() <= small.size() || !small.atoms_subset_of(large) {
                    continue;
                }

                let sum = small.sum(large);
                shortened += 1;
                match sum.atoms() {
                    [] if sum.parity() => {
                        outcome.unsatisfiable = true;
                        return Ok(outcome);
                    }

                    [atom] => outcome.units.push(CLiteral::new(*atom, sum.parity())),

                    _ => {}
                }
                kept[large_index] = sum;
            }
        }

        let mut remaining = Vec::with_capacity(kept.len());
        for xor in kept {
            match xor.size() {
                0 | 1 => outcome.eliminated_clauses += 1,
                _ => remaining.push(xor),
            }
        }
        *xors = remaining;

        log::info!(
            target: targets::XOR,
            "Removed {} constraints and shortened {shortened}",
            outcome.eliminated_clauses
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates() {
        let mut formula = Formula::new(3, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], true));
        formula.xors.push(XorClause::from_atoms(vec![2, 1, 0], true));

        let outcome = XorSubsumption::default().simplify(&mut formula).expect("simplify");
        assert!(!outcome.unsatisfiable);
        assert_eq!(outcome.eliminated_clauses, 1);
        assert_eq!(formula.xors.len(), 1);
    }

    #[test]
    fn contradictory_duplicates() {
        let mut formula = Formula::new(3, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], true));
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], false));

        let outcome = XorSubsumption::default().simplify(&mut formula).expect("simplify");
        assert!(outcome.unsatisfiable);
    }

    #[test]
    fn containment() {
        let mut formula = Formula::new(5, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2, 3, 4], false));
        formula.xors.push(XorClause::from_atoms(vec![0, 1], true));
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], false));

        let outcome = XorSubsumption::default().simplify(&mut formula).expect("simplify");
        assert!(!outcome.unsatisfiable);

        // x0 ⊕ x1 = 1 with x0 ⊕ x1 ⊕ x2 = 0 gives x2 = 1, and so the long constraint shortens to x3 ⊕ x4 = 0.
        assert_eq!(outcome.units, vec![CLiteral::new(2, true)]);
        assert!(formula.xors.contains(&XorClause::from_atoms(vec![0, 1], true)));
        assert!(formula.xors.contains(&XorClause::from_atoms(vec![3, 4], false)));
        assert_eq!(formula.xors.len(), 2);
    }
}
