/*!
Literals, an atom paired with a polarity.

The canonical literal [CLiteral] packs an atom and a polarity into a single `u32`, with the polarity in the lowest bit.
As a consequence:
- The [index](Literal::index) of a literal is the packed integer, and so per-literal structures (e.g. watch lists) may be indexed directly by literals.
- Negation flips the lowest bit, and so is involutive.
- The two literals of an atom are adjacent, and sorting a clause groups literals by atom.

```rust
# use marten_sat::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(3, true);
assert_eq!(-(-p), p);
assert_eq!(p.atom(), (-p).atom());
assert_eq!(p.index() ^ 1, (-p).index());
assert_eq!(p.as_int(), 4);
```
*/

use crate::structures::atom::{Atom, ATOM_MAX};

/// Methods expected of a literal.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Clone {
    /// A literal of the given atom and polarity.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// A dense index for the literal, distinct from the index of the negation of the literal.
    fn index(&self) -> usize;

    /// The literal in the external (DIMACS) representation.
    fn as_int(&self) -> isize;
}

/// The canonical literal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CLiteral(u32);

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral((atom << 1) | polarity as u32)
    }

    fn negate(&self) -> Self {
        CLiteral(self.0 ^ 1)
    }

    fn atom(&self) -> Atom {
        self.0 >> 1
    }

    fn polarity(&self) -> bool {
        self.0 & 1 == 1
    }

    fn index(&self) -> usize {
        self.0 as usize
    }

    fn as_int(&self) -> isize {
        let external = (self.atom() as isize) + 1;
        match self.polarity() {
            true => external,
            false => -external,
        }
    }
}

impl CLiteral {
    /// The literal written as `int` in the external (DIMACS) representation.
    ///
    /// None if `int` is zero, or if the atom of `int` exceeds [ATOM_MAX].
    pub fn from_int(int: isize) -> Option<Self> {
        let atom = int.unsigned_abs().checked_sub(1)?;
        let atom = Atom::try_from(atom).ok().filter(|atom| *atom <= ATOM_MAX)?;
        Some(CLiteral::new(atom, int.is_positive()))
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing() {
        let literal = CLiteral::new(7, false);
        assert_eq!(literal.atom(), 7);
        assert!(!literal.polarity());
        assert!((-literal).polarity());
        assert_eq!(literal.index(), 14);
        assert_eq!((-literal).index(), 15);
    }

    #[test]
    fn external_form() {
        assert_eq!(CLiteral::new(0, true).as_int(), 1);
        assert_eq!(CLiteral::new(0, false).as_int(), -1);
        assert_eq!(CLiteral::from_int(-5), Some(CLiteral::new(4, false)));
        assert_eq!(CLiteral::from_int(0), None);

        let max = ATOM_MAX as isize + 1;
        assert_eq!(CLiteral::from_int(-max), Some(CLiteral::new(ATOM_MAX, false)));
        assert_eq!(CLiteral::from_int(max + 1), None);
        assert_eq!(CLiteral::from_int(2_147_483_649), None);
        assert_eq!(CLiteral::from_int(-4_294_967_297), None);
        assert_eq!(format!("{}", CLiteral::new(9, false)), "-10");
    }

    #[test]
    fn order_groups_atoms() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
        ];
        literals.sort();
        assert_eq!(literals[1].atom(), 2);
        assert_eq!(literals[2].atom(), 2);
    }
}
