/*!
Abstract elements of a solve, and their canonical representations.

- [Atoms](atom) are the things which take a value.
- [Literals](literal) pair an atom with a polarity.
- [Clauses](clause) are disjunctions of literals.
- [XOR constraints](xor) require an odd or even number of a collection of atoms to be true.
- A [consequence] records why an atom has the value it has.
*/

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
pub mod xor;
