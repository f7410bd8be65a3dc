/*!
The trail, assignments in the order they were made.

Alongside the assignments the trail notes the index at which each decision level begins, and the head of the propagation queue.
Assignments from the queue head onwards have not been propagated.

The trail grows by appending, and shrinks only by removing all assignments above some level.
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// The trail struct.
#[derive(Default)]
pub struct Trail {
    /// Assigned literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index in `literals` at which level `i + 1` begins.
    pub level_indicies: Vec<usize>,

    /// The index of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Begins a new level, returning the index of the level.
    pub fn push_level(&mut self) -> LevelIndex {
        self.level_indicies.push(self.literals.len());
        self.level()
    }

    /// True if some decision (or assumption) has been made, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// The assignments made at level zero.
    pub fn level_zero(&self) -> &[CLiteral] {
        match self.level_indicies.first() {
            Some(&level_start) => &self.literals[..level_start],
            None => &self.literals,
        }
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// True if some assignment has not been propagated.
    pub fn has_queued(&self) -> bool {
        self.q_head < self.literals.len()
    }

    /// Removes all levels above `level`, returning the assignments removed, in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any assignment.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indicies is zero-indexed, while levels begin at one.
        // So, the assignments of level i + 1 begin at level_indicies[i], and all assignments above level i are cleared by splitting there.
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                let cleared = self.literals.split_off(level_start);
                self.q_head = std::cmp::min(self.q_head, self.literals.len());
                cleared
            }
            None => Vec::default(),
        }
    }
}
