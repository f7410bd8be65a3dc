/*!
Atoms, a.k.a. variables.

Atoms are dense unsigned integers, beginning at zero.
So, an atom is also an index into any structure which stores per-atom information, such as a valuation or the activity heap.

In the external (DIMACS) representation of a formula atom *a* is written as *a + 1*, as zero is reserved as a delimiter.
*/

/// An atom, represented as an index.
pub type Atom = u32;

/// The largest atom which may be created.
///
/// As literals pack an atom alongside a polarity into a `u32`, one bit of an atom is reserved.
pub const ATOM_MAX: Atom = (u32::MAX >> 1) - 1;
