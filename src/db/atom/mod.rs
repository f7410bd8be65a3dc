/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current valuation, and the previous value of each atom (for phase saving).
- The decision level and the [source](AssignmentSource) of each assignment.
- The activity of each atom, on an [IndexHeap], so an active atom without a value may be found quickly.
- A note of which atoms have been eliminated by simplification, and so are never chosen for a decision.

An atom is *unassigned* exactly when it has no level.
The activity heap contains (at least) every unassigned atom which has not been eliminated, as atoms are removed from the heap lazily when chosen for a decision.
*/

mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    db::LevelIndex,
    generic::index_heap::IndexHeap,
    structures::{
        atom::{Atom, ATOM_MAX},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// The atom database.
pub struct AtomDB {
    /// The current valuation.
    valuation: Vec<Option<bool>>,

    /// The last value of each atom.
    previous_valuation: Vec<bool>,

    /// The level of each assignment.
    levels: Vec<Option<LevelIndex>>,

    /// The source of each assignment.
    sources: Vec<AssignmentSource>,

    /// Atoms removed from the formula by simplification.
    eliminated: Vec<bool>,

    /// Activity of each atom, with unassigned atoms active.
    activity_heap: IndexHeap<Activity>,

    /// The activity with which the next atom bumped will be bumped.
    bump: Activity,

    config: AtomDBConfig,
}

impl AtomDB {
    /// A new atom database, configured from `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            levels: Vec::default(),
            sources: Vec::default(),
            eliminated: Vec::default(),
            activity_heap: IndexHeap::default(),
            bump: config.atom_db.bump.value,
            config: config.atom_db.clone(),
        }
    }

    /// A fresh atom, with the given value as its previous value.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, ErrorKind> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(ErrorKind::AtomsExhausted),
        };

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.sources.push(AssignmentSource::Unit);
        self.eliminated.push(false);

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, indexed by atoms.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The value of `atom`, if assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of `literal`, if the atom of the literal is assigned.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was assigned, if assigned.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The source of the assignment to `atom`.
    ///
    /// Only meaningful if the atom is assigned.
    pub fn source_of(&self, atom: Atom) -> AssignmentSource {
        self.sources[atom as usize]
    }

    /// The reason for the assignment to `atom`, if assigned by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<crate::db::ClauseKey> {
        match self.levels[atom as usize] {
            Some(_) => self.sources[atom as usize].reason(),
            None => None,
        }
    }

    /// The previous value of `atom`.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// Assigns the atom of `literal` the polarity of `literal`.
    ///
    /// # Soundness
    /// The atom should be unassigned.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, source: AssignmentSource) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = Some(level);
        self.sources[atom] = source;
    }

    /// Replaces the source of an assignment at level zero with [Unit](AssignmentSource::Unit), so the reason for the assignment may be removed.
    pub fn forget_reason(&mut self, atom: Atom) {
        if self.levels[atom as usize] == Some(0) {
            self.sources[atom as usize] = AssignmentSource::Unit;
        }
    }

    /// Clears the value of `atom`, noting the value as the previous value and returning the atom to the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index] {
            self.previous_valuation[index] = value;
        }
        self.valuation[index] = None;
        self.levels[index] = None;
        if !self.eliminated[index] {
            self.activity_heap.activate(index);
        }
    }

    /// Pops the most active atom from the heap, which may or may not be unassigned.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// A count of atoms on the activity heap.
    pub fn heap_count(&self) -> usize {
        self.activity_heap.active_count()
    }

    /// Notes `atom` has been eliminated from the formula, and so should not be chosen for a decision.
    pub fn eliminate(&mut self, atom: Atom) {
        self.eliminated[atom as usize] = true;
        self.activity_heap.remove(atom as usize);
    }

    /// True if `atom` has been eliminated, false otherwise.
    pub fn is_eliminated(&self, atom: Atom) -> bool {
        self.eliminated[atom as usize]
    }

    /// A count of eliminated atoms.
    pub fn eliminated_count(&self) -> usize {
        self.eliminated.iter().filter(|e| **e).count()
    }

    /// The atoms which are neither assigned nor eliminated.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.valuation
            .iter()
            .enumerate()
            .filter(|(index, value)| value.is_none() && !self.eliminated[*index])
            .map(|(index, _)| index as Atom)
    }

    /// The valuation as a string of DIMACS literals, skipping unassigned atoms.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom as Atom, v).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
