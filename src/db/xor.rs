//! The XOR database, a store of XOR constraints.
//!
//! Each stored constraint is short, as long constraints are cut when added, and the CNF encoding of each stored constraint is held in the [clause database](crate::db::clause).

use crate::structures::xor::XorClause;

/// The XOR database.
#[derive(Default)]
pub struct XorDB {
    xors: Vec<XorClause>,
}

impl XorDB {
    /// Stores an XOR constraint.
    pub fn store(&mut self, xor: XorClause) {
        self.xors.push(xor);
    }

    /// The stored constraints.
    pub fn xors(&self) -> &[XorClause] {
        &self.xors
    }

    /// A count of stored constraints.
    pub fn count(&self) -> usize {
        self.xors.len()
    }

    /// Takes all stored constraints, leaving the database empty.
    pub fn take_all(&mut self) -> Vec<XorClause> {
        std::mem::take(&mut self.xors)
    }
}
