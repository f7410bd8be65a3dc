/*!
XOR constraints.

An XOR constraint over atoms *a₁, …, aₙ* with parity *p* requires *a₁ ⊕ … ⊕ aₙ = p*.

Constraints are kept in a normal form: atoms sorted, with any atom occurring an even number of times removed (as *a ⊕ a = 0*).
Negated literals are absorbed into the parity, as *¬a = a ⊕ 1*.

In addition to the constraint itself, a CNF [encoding](XorClause::cnf_encoding) is given, for use by propagation.
The encoding of an XOR over *n* atoms has 2ⁿ⁻¹ clauses, and so long constraints are [cut](XorClause::cut) into a chain of short constraints by introducing fresh atoms.
*/

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// An XOR constraint, in normal form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XorClause {
    atoms: Vec<Atom>,
    parity: bool,
}

impl XorClause {
    /// An XOR constraint requiring the exclusive-or of `literals` to be true.
    pub fn from_literals(literals: &[CLiteral]) -> Self {
        let mut parity = true;
        let mut atoms = Vec::with_capacity(literals.len());
        for literal in literals {
            if !literal.polarity() {
                parity = !parity;
            }
            atoms.push(literal.atom());
        }
        Self::from_atoms(atoms, parity)
    }

    /// An XOR constraint requiring the exclusive-or of `atoms` to be `parity`.
    pub fn from_atoms(mut atoms: Vec<Atom>, parity: bool) -> Self {
        atoms.sort_unstable();

        let mut normal: Vec<Atom> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            if normal.last() == Some(&atom) {
                normal.pop();
            } else {
                normal.push(atom);
            }
        }

        XorClause {
            atoms: normal,
            parity,
        }
    }

    /// The atoms of the constraint, sorted.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The required parity.
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// The number of atoms in the constraint.
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    /// True if the constraint holds of a valuation which assigns every atom of the constraint, false otherwise.
    /// None, if some atom is unassigned.
    pub fn evaluate(&self, value_of: impl Fn(Atom) -> Option<bool>) -> Option<bool> {
        let mut sum = false;
        for atom in &self.atoms {
            sum ^= value_of(*atom)?;
        }
        Some(sum == self.parity)
    }

    /// Fixes the value of `atom`, if present, removing the atom and adjusting parity.
    /// Returns true if the atom was present.
    pub fn assign(&mut self, atom: Atom, value: bool) -> bool {
        match self.atoms.binary_search(&atom) {
            Ok(position) => {
                self.atoms.remove(position);
                self.parity ^= value;
                true
            }
            Err(_) => false,
        }
    }

    /// Replaces each atom with some other atom, flipping parity as required, and returns the normal form of the result.
    pub fn substitute(&self, mut f: impl FnMut(Atom) -> (Atom, bool)) -> Self {
        let mut parity = self.parity;
        let mut atoms = Vec::with_capacity(self.atoms.len());
        for atom in &self.atoms {
            let (replacement, flip) = f(*atom);
            parity ^= flip;
            atoms.push(replacement);
        }
        Self::from_atoms(atoms, parity)
    }

    /// The sum of two constraints over GF(2).
    pub fn sum(&self, other: &XorClause) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend_from_slice(&other.atoms);
        Self::from_atoms(atoms, self.parity ^ other.parity)
    }

    /// True if every atom of `self` is an atom of `other`.
    pub fn atoms_subset_of(&self, other: &XorClause) -> bool {
        let mut others = other.atoms.iter();
        'atom_loop: for atom in &self.atoms {
            for other_atom in others.by_ref() {
                if other_atom == atom {
                    continue 'atom_loop;
                }
                if other_atom > atom {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Cuts the constraint into a chain of constraints over at most `cut + 1` atoms, using `fresh` to obtain fresh atoms.
    ///
    /// The constraints returned are jointly equivalent to the original constraint, modulo the fresh atoms.
    pub fn cut<E>(
        self,
        cut: usize,
        mut fresh: impl FnMut() -> Result<Atom, E>,
    ) -> Result<Vec<XorClause>, E> {
        let cut = std::cmp::max(cut, 2);
        if self.atoms.len() <= cut + 1 {
            return Ok(vec![self]);
        }

        let mut chain = Vec::default();
        let mut remaining = self.atoms.as_slice();
        let mut carry: Option<Atom> = None;

        loop {
            let room = match carry {
                None => cut,
                Some(_) => cut - 1,
            };

            if remaining.len() <= room + 1 {
                let mut atoms = remaining.to_vec();
                atoms.extend(carry);
                chain.push(XorClause::from_atoms(atoms, self.parity));
                break;
            }

            let (head, tail) = remaining.split_at(room);
            let link = fresh()?;
            let mut atoms = head.to_vec();
            atoms.extend(carry);
            atoms.push(link);
            // The link takes the parity of the head, and so the head, with the link, is even.
            chain.push(XorClause::from_atoms(atoms, false));

            carry = Some(link);
            remaining = tail;
        }

        Ok(chain)
    }

    /// The CNF encoding of the constraint, as clauses which exclude each assignment of the wrong parity.
    pub fn cnf_encoding(&self) -> Vec<CClause> {
        let size = self.atoms.len();
        let mut clauses = Vec::with_capacity(1 << size.saturating_sub(1));

        for mask in 0..(1_u64 << size) {
            // A clause excludes the assignment which falsifies each literal.
            // The literal of the atom at index i is negative when bit i is set, and so the excluded assignment sets the atom true.
            let falsified_parity = mask.count_ones() % 2 == 1;
            if falsified_parity == self.parity {
                continue;
            }
            let clause = self
                .atoms
                .iter()
                .enumerate()
                .map(|(index, atom)| CLiteral::new(*atom, mask & (1 << index) == 0))
                .collect();
            clauses.push(clause);
        }

        clauses
    }
}

impl std::fmt::Display for XorClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x")?;
        for (index, atom) in self.atoms.iter().enumerate() {
            let literal = CLiteral::new(*atom, !(index == 0 && !self.parity));
            write!(f, "{} ", literal.as_int())?;
        }
        write!(f, "0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satisfies(clause: &CClause, values: &[bool]) -> bool {
        clause
            .iter()
            .any(|literal| values[literal.atom() as usize] == literal.polarity())
    }

    #[test]
    fn normal_form() {
        let xor = XorClause::from_literals(&[
            CLiteral::new(3, true),
            CLiteral::new(1, false),
            CLiteral::new(3, true),
        ]);
        assert_eq!(xor.atoms(), &[1]);
        assert!(!xor.parity());
    }

    #[test]
    fn encoding_matches_parity() {
        let xor = XorClause::from_atoms(vec![0, 1, 2], true);
        let encoding = xor.cnf_encoding();
        assert_eq!(encoding.len(), 4);

        for bits in 0..8_u32 {
            let values = [bits & 1 == 1, bits & 2 == 2, bits & 4 == 4];
            let odd = bits.count_ones() % 2 == 1;
            let cnf = encoding.iter().all(|clause| satisfies(clause, &values));
            assert_eq!(cnf, odd);
        }
    }

    #[test]
    fn cut_preserves_parity() {
        let xor = XorClause::from_atoms((0..9).collect(), true);
        let mut next = 9;
        let chain = xor
            .clone()
            .cut(4, || -> Result<Atom, ()> {
                next += 1;
                Ok(next - 1)
            })
            .expect("cut");

        assert!(chain.iter().all(|link| link.size() <= 5));

        // The sum of the chain cancels each link atom, leaving the original constraint.
        let total = chain
            .iter()
            .skip(1)
            .fold(chain[0].clone(), |sum, link| sum.sum(link));
        assert_eq!(total, xor);
    }

    #[test]
    fn subset_and_sum() {
        let small = XorClause::from_atoms(vec![1, 4], true);
        let large = XorClause::from_atoms(vec![1, 2, 4, 7], false);
        assert!(small.atoms_subset_of(&large));
        assert!(!large.atoms_subset_of(&small));

        let sum = small.sum(&large);
        assert_eq!(sum.atoms(), &[2, 7]);
        assert!(sum.parity());
    }

    #[test]
    fn evaluation() {
        let xor = XorClause::from_atoms(vec![0, 1], false);
        assert_eq!(xor.evaluate(|_| Some(true)), Some(true));
        assert_eq!(xor.evaluate(|atom| Some(atom == 0)), Some(false));
        assert_eq!(xor.evaluate(|_| None), None);
    }
}
