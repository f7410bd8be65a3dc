/*!
Replacement of equivalent atoms.

Equivalences between atoms are found from:
- Pairs of binary clauses (*a* ∨ *b*) and (¬*a* ∨ ¬*b*), which together require *a* ≠ *b*.
- XOR constraints over two atoms.

Each equivalence is noted in a union-find structure, where each atom points to a parent together with a flip: the atom has the value of its parent, negated if the flip is set.
An atom which is its own parent is a representative, and every other atom is replaced by its representative in each clause and XOR constraint of the formula.

The structure persists across episodes, so:
- Clauses added after an episode are [mapped](Replacement::map_literal) to representatives.
- The value of a replaced atom is derived from the value of its [representative](Replacement::representative).

Atoms with a value are never replaced, as facts are applied to a formula before any collaborator runs.
A contradictory equivalence, requiring *a* = ¬*a*, proves the formula unsatisfiable.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{normalise, Normalised},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{Formula, Outcome, Simplifier};

/// Union-find over atoms, with parity.
#[derive(Default)]
pub struct Replacement {
    parents: Vec<(Atom, bool)>,
    replaced: Vec<Atom>,
}

impl Replacement {
    fn ensure_atoms(&mut self, atom_count: usize) {
        while self.parents.len() < atom_count {
            let atom = self.parents.len() as Atom;
            self.parents.push((atom, false));
        }
    }

    /// The representative of `atom`, with the flip from the atom to the representative.
    pub fn representative(&self, atom: Atom) -> (Atom, bool) {
        let mut current = atom;
        let mut flip = false;
        while let Some(&(parent, parent_flip)) = self.parents.get(current as usize) {
            if parent == current {
                break;
            }
            flip ^= parent_flip;
            current = parent;
        }
        (current, flip)
    }

    fn find(&mut self, atom: Atom) -> (Atom, bool) {
        let (root, flip) = self.representative(atom);

        // Compress the path, recomputing the flip of each atom relative to the root.
        let mut current = atom;
        let mut current_flip = flip;
        while current != root {
            let (parent, parent_flip) = self.parents[current as usize];
            self.parents[current as usize] = (root, current_flip);
            current_flip ^= parent_flip;
            current = parent;
        }

        (root, flip)
    }

    /// Notes `a` ⊕ `b` = `parity`, returning the atom replaced, if any.
    ///
    /// Errs if the equivalence contradicts those already noted.
    fn union(&mut self, a: Atom, b: Atom, parity: bool) -> Result<Option<Atom>, ()> {
        let (root_a, flip_a) = self.find(a);
        let (root_b, flip_b) = self.find(b);

        if root_a == root_b {
            return match flip_a ^ flip_b == parity {
                true => Ok(None),
                false => Err(()),
            };
        }

        let (root, child) = match root_a < root_b {
            true => (root_a, root_b),
            false => (root_b, root_a),
        };
        self.parents[child as usize] = (root, flip_a ^ flip_b ^ parity);
        self.replaced.push(child);
        Ok(Some(child))
    }

    /// `literal`, with the atom of the literal replaced by its representative.
    pub fn map_literal(&self, literal: CLiteral) -> CLiteral {
        let (root, flip) = self.representative(literal.atom());
        CLiteral::new(root, literal.polarity() ^ flip)
    }

    /// Every replaced atom, in order of replacement.
    pub fn replaced_atoms(&self) -> &[Atom] {
        &self.replaced
    }

    /// A count of replaced atoms.
    pub fn replaced_count(&self) -> usize {
        self.replaced.len()
    }
}

impl Simplifier for Replacement {
    fn name(&self) -> &'static str {
        "replacement"
    }

    fn simplify(&mut self, formula: &mut Formula) -> Result<Outcome, ErrorKind> {
        self.ensure_atoms(formula.atom_count());
        let mut outcome = Outcome::default();

        let binaries = formula
            .clauses
            .iter()
            .filter(|clause| clause.literals.len() == 2)
            .map(|clause| (clause.literals[0], clause.literals[1]))
            .collect::<HashSet<_>>();

        let mut equivalences = Vec::default();
        for &(a, b) in &binaries {
            let (x, y) = match -a < -b {
                true => (-a, -b),
                false => (-b, -a),
            };
            if a < x && binaries.contains(&(x, y)) {
                // a ≠ b, and so the atoms differ exactly when the polarities agree.
                equivalences.push((a.atom(), b.atom(), a.polarity() == b.polarity()));
            }
        }
        for xor in &formula.xors {
            if let [a, b] = xor.atoms() {
                equivalences.push((*a, *b, xor.parity()));
            }
        }

        for (a, b, parity) in equivalences {
            match self.union(a, b, parity) {
                Ok(Some(child)) => outcome.eliminated_atoms.push(child),
                Ok(None) => {}
                Err(()) => {
                    log::info!(target: targets::REPLACEMENT, "Contradictory equivalence of {a} and {b}");
                    outcome.unsatisfiable = true;
                    return Ok(outcome);
                }
            }
        }

        if outcome.eliminated_atoms.is_empty() {
            return Ok(outcome);
        }

        let mut kept = Vec::with_capacity(formula.clauses.len());
        for mut clause in std::mem::take(&mut formula.clauses) {
            let mapped = clause.literals.iter().map(|literal| self.map_literal(*literal)).collect();
            match normalise(mapped) {
                Normalised::Tautology => outcome.eliminated_clauses += 1,

                Normalised::Clause(literals) if literals.len() == 1 => {
                    outcome.units.push(literals[0]);
                    outcome.eliminated_clauses += 1;
                }

                Normalised::Clause(literals) => {
                    clause.literals = literals;
                    kept.push(clause);
                }
            }
        }
        formula.clauses = kept;

        let mut xors = Vec::with_capacity(formula.xors.len());
        for xor in std::mem::take(&mut formula.xors) {
            let mapped = xor.substitute(|atom| self.representative(atom));
            match mapped.size() {
                0 if mapped.parity() => {
                    outcome.unsatisfiable = true;
                    return Ok(outcome);
                }
                0 => outcome.eliminated_clauses += 1,
                1 => {
                    outcome.units.push(CLiteral::new(mapped.atoms()[0], mapped.parity()));
                    outcome.eliminated_clauses += 1;
                }
                _ => xors.push(mapped),
            }
        }
        formula.xors = xors;

        log::info!(target: targets::REPLACEMENT, "Replaced {} atoms", outcome.eliminated_atoms.len());
        Ok(outcome)
    }
}
