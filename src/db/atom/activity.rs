use crate::{config::Activity, structures::atom::Atom};

use super::AtomDB;

impl AtomDB {
    /// Bumps the activity of each atom in `atoms`.
    pub fn bump_relative(&mut self, atoms: impl Iterator<Item = Atom>) {
        for atom in atoms {
            self.bump_activity(atom);
        }
    }

    /// Bumps the activity of `atom`, rescaling all activities if the activity would exceed the maximum bump.
    pub fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;
        let bumped = self.activity_heap.value_at(index) + self.bump;
        self.activity_heap.revalue(index, bumped);

        if bumped > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Decays the activity of every atom, by increasing the bump.
    pub fn exponent_activity(&mut self) {
        let decay = self.config.decay.value;
        self.bump *= 1.0 / (1.0 - decay);

        if self.bump > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Scales every activity, and the bump, by the inverse of the maximum bump.
    ///
    /// As scaling preserves order, the heap remains a heap.
    pub fn rescore_activity(&mut self) {
        let factor: Activity = 1.0 / self.config.bump.max;
        log::trace!("Rescoring atom activity by {factor}");
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.bump *= factor;
    }

    /// The activity of `atom`.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, db::atom::AtomDB};

    #[test]
    fn bump_orders_heap() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..4 {
            assert!(atom_db.fresh_atom(false).is_ok());
        }

        atom_db.bump_activity(2);
        atom_db.exponent_activity();
        atom_db.bump_activity(1);
        atom_db.bump_activity(1);

        assert_eq!(atom_db.heap_pop_most_active(), Some(1));
        assert_eq!(atom_db.heap_pop_most_active(), Some(2));
    }

    #[test]
    fn rescore_keeps_order() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..3 {
            assert!(atom_db.fresh_atom(false).is_ok());
        }
        atom_db.bump_activity(0);
        atom_db.bump_activity(0);
        atom_db.bump_activity(2);

        atom_db.rescore_activity();

        assert!(atom_db.activity_of(0) > atom_db.activity_of(2));
        assert!(atom_db.activity_of(2) > atom_db.activity_of(1));
        assert_eq!(atom_db.heap_pop_most_active(), Some(0));
    }
}
