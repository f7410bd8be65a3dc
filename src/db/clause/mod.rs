/*!
A database of clause related things.

Clauses are stored in one of two arenas, indexed by [keys](ClauseKey):
- Original clauses, from a formula or from the encoding of an XOR constraint.
- Addition clauses, learnt during a solve.

Watch lists and the reasons of assignments refer to clauses by key, and the database owns each clause.
Removing an addition clause empties the slot of the clause, and the slot may be reused with a fresh [token](ClauseKey::retoken).
Stale keys are detected on access, as the key stored with the clause in the slot differs.

Unit clauses are not stored, as these are assignments at level zero on the [trail](crate::db::trail).
*/

mod db_clause;
pub use db_clause::DBClause;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config, LBD},
    db::{watches::Watches, ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::clause::{CClause, ClauseSource},
    types::err::{ClauseDBError, ErrorKind},
};

/// The clause database.
pub struct ClauseDB {
    /// Original clauses.
    original: Vec<Option<DBClause>>,

    /// Addition clauses.
    addition: Vec<Option<DBClause>>,

    /// Keys to empty addition slots.
    empty_keys: Vec<ClauseKey>,

    /// A count of live addition clauses.
    addition_count: usize,

    /// The activity with which the next addition clause bumped will be bumped.
    bump: Activity,

    config: ClauseDBConfig,
}

impl ClauseDB {
    /// A new clause database, configured from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            addition_count: 0,
            bump: config.clause_db.bump.value,
            config: config.clause_db.clone(),
        }
    }

    /// Stores `clause` and watches the literals at positions 0 and 1 of the clause.
    ///
    /// The clause should contain at least two literals, and should not contain duplicate literals.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        lbd: LBD,
        watches: &mut Watches,
    ) -> Result<ClauseKey, ErrorKind> {
        if clause.len() < 2 {
            return Err(ErrorKind::from(ClauseDBError::ShortClause));
        }

        let key = match source {
            ClauseSource::Original | ClauseSource::Xor => {
                ClauseKey::Original(self.fresh_index(self.original.len())?)
            }

            ClauseSource::Resolution => {
                let reused = self.empty_keys.pop().and_then(|key| key.retoken().ok());
                match reused {
                    Some(key) => key,
                    None => ClauseKey::Addition(self.fresh_index(self.addition.len())?, 0),
                }
            }
        };

        match clause.len() {
            2 => watches.watch_binary(clause[0], clause[1], key),
            _ => watches.watch_long(clause[0], clause[1], key),
        }

        let mut db_clause = DBClause::from(key, clause, source, lbd);
        log::trace!(target: targets::CLAUSE_DB, "Stored {db_clause}");

        match key {
            ClauseKey::Original(_) => self.original.push(Some(db_clause)),

            ClauseKey::Addition(index, _) => {
                db_clause.set_activity(self.bump);
                self.addition_count += 1;
                match self.addition.get_mut(index as usize) {
                    Some(slot) => *slot = Some(db_clause),
                    None => self.addition.push(Some(db_clause)),
                }
            }
        }

        Ok(key)
    }

    fn fresh_index(&self, length: usize) -> Result<FormulaIndex, ClauseDBError> {
        FormulaIndex::try_from(length).map_err(|_| ClauseDBError::StorageExhausted)
    }

    /// The clause with `key`, if stored.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get(*index as usize),
        };

        match slot {
            None => Err(ClauseDBError::InvalidKeyIndex),
            Some(None) => Err(ClauseDBError::Missing),
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            Some(Some(_)) => Err(ClauseDBError::InvalidKeyToken),
        }
    }

    /// The clause with `key`, mutably, if stored.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get_mut(*index as usize),
        };

        match slot {
            None => Err(ClauseDBError::InvalidKeyIndex),
            Some(None) => Err(ClauseDBError::Missing),
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            Some(Some(_)) => Err(ClauseDBError::InvalidKeyToken),
        }
    }

    /// Removes the addition clause with `key`, and any watch on the clause.
    pub fn remove_addition(
        &mut self,
        key: ClauseKey,
        watches: &mut Watches,
    ) -> Result<DBClause, ClauseDBError> {
        let ClauseKey::Addition(index, _) = key else {
            return Err(ClauseDBError::InvalidKeyToken);
        };

        let slot = self
            .addition
            .get_mut(index as usize)
            .ok_or(ClauseDBError::InvalidKeyIndex)?;

        match slot {
            Some(clause) if clause.key() == key => {}
            Some(_) => return Err(ClauseDBError::InvalidKeyToken),
            None => return Err(ClauseDBError::Missing),
        }

        let Some(clause) = slot.take() else {
            return Err(ClauseDBError::Missing);
        };

        watches.unwatch(clause[0], key);
        watches.unwatch(clause[1], key);

        self.empty_keys.push(key);
        self.addition_count -= 1;
        log::trace!(target: targets::CLAUSE_DB, "Removed {clause}");

        Ok(clause)
    }

    /// Takes every stored clause, leaving the database empty.
    ///
    /// Any key issued before the call is invalid after the call.
    /// Watches are not updated.
    pub fn take_all(&mut self) -> Vec<DBClause> {
        let original = std::mem::take(&mut self.original);
        let addition = std::mem::take(&mut self.addition);
        self.empty_keys.clear();
        self.addition_count = 0;

        original.into_iter().chain(addition).flatten().collect()
    }

    /// Promotes the addition clause with `key` to an original clause, returning the fresh key.
    pub fn promote(&mut self, key: ClauseKey, watches: &mut Watches) -> Result<ClauseKey, ErrorKind> {
        let clause = self.remove_addition(key, watches)?;
        let lbd = clause.lbd();
        self.store(clause.into_clause(), ClauseSource::Original, lbd, watches)
    }

    /// Every stored clause.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original.iter().chain(self.addition.iter()).flatten()
    }

    /// Every original clause.
    pub fn original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original.iter().flatten()
    }

    /// Every addition clause.
    pub fn addition_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.addition.iter().flatten()
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// Bumps the activity of the addition clause with `key`.
    /// Original clauses have no activity.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        if !matches!(key, ClauseKey::Addition(_, _)) {
            return;
        }
        let bump = self.bump;
        let max = self.config.bump.max;
        if let Ok(clause) = self.get_mut(key) {
            let bumped = clause.activity() + bump;
            clause.set_activity(bumped);
            if bumped > max {
                self.rescore_activity();
            }
        }
    }

    /// Sets the activity of the addition clause with `key`, e.g. when a clause is restored after simplification.
    pub fn set_activity(&mut self, key: &ClauseKey, activity: Activity) -> Result<(), ClauseDBError> {
        self.get_mut(key)?.set_activity(activity);
        Ok(())
    }

    /// Decays the activity of every addition clause, by increasing the bump.
    pub fn decay_activity(&mut self) {
        self.bump *= 1.0 / (1.0 - self.config.decay.value);
        if self.bump > self.config.bump.max {
            self.rescore_activity();
        }
    }

    fn rescore_activity(&mut self) {
        let factor = 1.0 / self.config.bump.max;
        log::trace!(target: targets::CLAUSE_DB, "Rescoring clause activity by {factor}");
        for clause in self.addition.iter_mut().flatten() {
            let scaled = clause.activity() * factor;
            clause.set_activity(scaled);
        }
        self.bump *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    fn setup() -> (ClauseDB, Watches) {
        let mut watches = Watches::default();
        watches.ensure_atoms(4);
        (ClauseDB::new(&Config::default()), watches)
    }

    fn lits(atoms: &[u32]) -> CClause {
        atoms.iter().map(|a| CLiteral::new(*a, true)).collect()
    }

    #[test]
    fn store_and_watch() {
        let (mut clause_db, mut watches) = setup();

        let binary = clause_db
            .store(lits(&[0, 1]), ClauseSource::Original, 2, &mut watches)
            .expect("store");
        let long = clause_db
            .store(lits(&[1, 2, 3]), ClauseSource::Resolution, 2, &mut watches)
            .expect("store");

        assert_eq!(watches.binary(CLiteral::new(0, true)).len(), 1);
        assert_eq!(watches.long(CLiteral::new(2, true)).len(), 1);
        assert!(watches.long(CLiteral::new(3, true)).is_empty());

        assert_eq!(clause_db.get(&binary).map(|c| c.len()), Ok(2));
        assert_eq!(clause_db.get(&long).map(|c| c.len()), Ok(3));
        assert!(clause_db
            .store(lits(&[3]), ClauseSource::Original, 1, &mut watches)
            .is_err());
    }

    #[test]
    fn stale_keys() {
        let (mut clause_db, mut watches) = setup();

        let first = clause_db
            .store(lits(&[0, 1, 2]), ClauseSource::Resolution, 3, &mut watches)
            .expect("store");
        assert!(clause_db.remove_addition(first, &mut watches).is_ok());
        assert!(watches.long(CLiteral::new(0, true)).is_empty());
        assert_eq!(clause_db.get(&first).err(), Some(ClauseDBError::Missing));

        let second = clause_db
            .store(lits(&[1, 2, 3]), ClauseSource::Resolution, 3, &mut watches)
            .expect("store");
        assert_eq!(first.index(), second.index());
        assert_ne!(first, second);
        assert_eq!(
            clause_db.get(&first).err(),
            Some(ClauseDBError::InvalidKeyToken)
        );
        assert_eq!(clause_db.addition_count(), 1);
    }
}
