/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Assumptions

Before any free decision, each assumption of a solve is made as a decision, one level for each assumption.
- If an assumption is already true, an empty level is made, so the level of an assumption is fixed by its position.
- If an assumption is already false, the formula is unsatisfiable given the assumptions, and the assumption is returned.

# Heuristics

## Activity

Atoms are selected by activity, and the [atom database](crate::db::atom) stores atoms without a value on a max value activity heap in order to support quick access to the most active atom without a value.
Though, as storing *only* atoms without a value takes considerably more effort than *at least* those atoms without a value, it may take some work to find the relevant atom.

```rust,ignore
while let Some(atom) = self.atom_db.heap_pop_most_active() {
    if self.atom_db.value_of(atom).is_none() {
        return Some(atom);
    }
}
```

## Phase saving

If phase saving is enabled if a chosen atom was previously valued *v* the atom is again valued *v*.

Note: For efficiency an atom always has a 'previous' value, initialised randomly via [Config::polarity_lean](crate::config::Config::polarity_lean).

## Randomness

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom without a value is chosen at random, rather than by activity.
*/

use rand::seq::IteratorRandom;

use crate::{
    context::GenericContext,
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some choice was made, possibly of an assumption, possibly of an empty level.
    Made,

    /// Some assumption was false, and so no choice could be made.
    AssumptionFailed(CLiteral),

    /// Every atom was assigned a value, and so no choice could be made.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Makes the next assumption, if some assumption has not been made, and otherwise chooses some atom without a value and assigns the atom some value.
    ///
    /// For documentation, see [procedures::decision](crate::procedures::decision).
    pub fn make_decision(&mut self) -> Result<DecisionOk, ErrorKind> {
        if let Some(&assumption) = self.assumptions.get(self.trail.level() as usize) {
            // Assumptions are kept as given, and so are mapped to representatives when made.
            let representative = self.simplifiers.replacement.map_literal(assumption);
            return match self.atom_db.value_of_literal(representative) {
                Some(true) => {
                    self.trail.push_level();
                    Ok(DecisionOk::Made)
                }

                Some(false) => Ok(DecisionOk::AssumptionFailed(assumption)),

                None => {
                    self.trail.push_level();
                    self.assign(representative, AssignmentSource::Assumption);
                    Ok(DecisionOk::Made)
                }
            };
        }

        let Some(chosen_atom) = self.choose_atom() else {
            return Ok(DecisionOk::Exhausted);
        };

        let value = match self.config.phase_saving.value {
            true => self.atom_db.previous_value_of(chosen_atom),
            false => self.rng.gen_bool(self.config.polarity_lean.value),
        };

        self.counters.total_decisions += 1;
        self.trail.push_level();
        self.assign(CLiteral::new(chosen_atom, value), AssignmentSource::Decision);

        Ok(DecisionOk::Made)
    }

    /// An atom without a value, if one exists.
    fn choose_atom(&mut self) -> Option<Atom> {
        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 {
            let mut rng = std::mem::take(&mut self.rng);
            let random_choice = match rng.gen_bool(bias) {
                true => self.atom_db.unvalued_atoms().choose(&mut rng),
                false => None,
            };
            self.rng = rng;

            if random_choice.is_some() {
                return random_choice;
            }
        }

        while let Some(atom) = self.atom_db.heap_pop_most_active() {
            if self.atom_db.value_of(atom).is_none() && !self.atom_db.is_eliminated(atom) {
                return Some(atom);
            }
        }

        None
    }
}
