/*!
Watch lists, for each literal.

The watch list of a literal *l* contains each clause in which *l* is a watched literal.
So, when *l* becomes false (i.e. when *-l* is assigned) each clause in the watch list of *l* is examined, as the clause may now be unit or falsified.

Binary clauses and long clauses are distinguished:
- A [binary watch](BinaryWatch) records the other literal of the clause, and so propagation through a binary clause requires no access to the clause database.
- A [long watch](LongWatch) records the key of the clause, together with a 'blocker': some literal of the clause which, if true, means the clause is satisfied and need not be examined.

For long clauses the watched literals are the literals at positions 0 and 1 of the clause.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// A watch on a binary clause.
#[derive(Clone, Copy, Debug)]
pub struct BinaryWatch {
    /// The other literal of the clause.
    pub literal: CLiteral,

    /// The key of the clause.
    pub key: ClauseKey,
}

/// A watch on a long clause.
#[derive(Clone, Copy, Debug)]
pub struct LongWatch {
    /// The key of the clause.
    pub key: ClauseKey,

    /// Some literal of the clause, other than the watched literal.
    pub blocker: CLiteral,
}

/// Watch lists, indexed by the [index](Literal::index) of a literal.
#[derive(Default)]
pub struct Watches {
    binary: Vec<Vec<BinaryWatch>>,
    long: Vec<Vec<LongWatch>>,
}

impl Watches {
    /// Extends the watch lists to cover each literal of `atom_count` atoms.
    pub fn ensure_atoms(&mut self, atom_count: usize) {
        let required = 2 * atom_count;
        if self.binary.len() < required {
            self.binary.resize_with(required, Vec::default);
            self.long.resize_with(required, Vec::default);
        }
    }

    /// Watches a binary clause.
    pub fn watch_binary(&mut self, a: CLiteral, b: CLiteral, key: ClauseKey) {
        self.binary[a.index()].push(BinaryWatch { literal: b, key });
        self.binary[b.index()].push(BinaryWatch { literal: a, key });
    }

    /// Watches a long clause on `a` and `b`, with each the blocker of the other.
    pub fn watch_long(&mut self, a: CLiteral, b: CLiteral, key: ClauseKey) {
        self.long[a.index()].push(LongWatch { key, blocker: b });
        self.long[b.index()].push(LongWatch { key, blocker: a });
    }

    /// Removes any watch of `literal` on the clause with `key`.
    pub fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.binary[literal.index()].retain(|watch| watch.key != key);
        self.long[literal.index()].retain(|watch| watch.key != key);
    }

    /// The binary watches of `literal`.
    pub fn binary(&self, literal: CLiteral) -> &[BinaryWatch] {
        &self.binary[literal.index()]
    }

    /// The long watches of `literal`.
    pub fn long(&self, literal: CLiteral) -> &[LongWatch] {
        &self.long[literal.index()]
    }

    /// Takes the long watches of `literal`, leaving an empty list until the watches are [restored](Watches::restore_long).
    pub fn take_long(&mut self, literal: CLiteral) -> Vec<LongWatch> {
        std::mem::take(&mut self.long[literal.index()])
    }

    /// Restores the long watches of `literal`, keeping any watches added since the list was taken.
    pub fn restore_long(&mut self, literal: CLiteral, mut list: Vec<LongWatch>) {
        let added = std::mem::take(&mut self.long[literal.index()]);
        list.extend(added);
        self.long[literal.index()] = list;
    }

    /// Adds a long watch to the list of `literal`.
    pub fn push_long(&mut self, literal: CLiteral, watch: LongWatch) {
        self.long[literal.index()].push(watch);
    }

    /// Removes every watch, keeping the lists.
    pub fn clear(&mut self) {
        self.binary.iter_mut().for_each(|list| list.clear());
        self.long.iter_mut().for_each(|list| list.clear());
    }

    /// A count of literals with watch lists.
    pub fn literal_count(&self) -> usize {
        self.binary.len()
    }
}
