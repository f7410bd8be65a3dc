/*!
Moving averages, used by the dynamic restart policy to compare the quality of recently learnt clauses against the quality of all learnt clauses.

- A [WindowedMovingAverage] averages the most recent terms, up to the size of a window.
- A [CumulativeMovingAverage] averages every term seen.
*/

use std::collections::VecDeque;

/// Methods common to moving averages.
pub trait MovingAverage {
    /// Adds a term to the average.
    fn add_term(&mut self, term: u64);

    /// The current average, or zero if no term has been added.
    fn value(&self) -> f64;

    /// Forgets all terms.
    fn clear(&mut self);
}

/// An average of the most recent terms.
pub struct WindowedMovingAverage {
    window_size: usize,
    windowed_sum: u64,
    values_in_window: VecDeque<u64>,
}

impl WindowedMovingAverage {
    /// A windowed average, over at most `window_size` terms.
    pub fn new(window_size: usize) -> Self {
        let window_size = std::cmp::max(window_size, 1);
        WindowedMovingAverage {
            window_size,
            windowed_sum: 0,
            values_in_window: VecDeque::with_capacity(window_size),
        }
    }

    /// True if the window contains as many terms as the window size, false otherwise.
    pub fn is_full(&self) -> bool {
        self.values_in_window.len() == self.window_size
    }
}

impl MovingAverage for WindowedMovingAverage {
    fn add_term(&mut self, term: u64) {
        if self.is_full() {
            if let Some(oldest) = self.values_in_window.pop_front() {
                self.windowed_sum -= oldest;
            }
        }
        self.windowed_sum += term;
        self.values_in_window.push_back(term);
    }

    fn value(&self) -> f64 {
        match self.values_in_window.len() {
            0 => 0.0,
            count => self.windowed_sum as f64 / count as f64,
        }
    }

    fn clear(&mut self) {
        self.values_in_window.clear();
        self.windowed_sum = 0;
    }
}

/// An average of every term.
#[derive(Default)]
pub struct CumulativeMovingAverage {
    sum: u64,
    count: u64,
}

impl MovingAverage for CumulativeMovingAverage {
    fn add_term(&mut self, term: u64) {
        self.sum += term;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        match self.count {
            0 => 0.0,
            count => self.sum as f64 / count as f64,
        }
    }

    fn clear(&mut self) {
        self.sum = 0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_constant() {
        let mut average = WindowedMovingAverage::new(5);
        for _ in 0..100 {
            average.add_term(7);
            assert_eq!(average.value(), 7.0);
        }
    }

    #[test]
    fn windowed_forgets() {
        let mut average = WindowedMovingAverage::new(3);
        for term in [10, 10, 10, 1, 1, 1] {
            average.add_term(term);
        }
        assert!(average.is_full());
        assert_eq!(average.value(), 1.0);

        average.clear();
        assert!(!average.is_full());
        assert_eq!(average.value(), 0.0);
    }

    #[test]
    fn cumulative() {
        let mut average = CumulativeMovingAverage::default();
        assert_eq!(average.value(), 0.0);
        for term in 1..=4 {
            average.add_term(term);
        }
        assert_eq!(average.value(), 2.5);
    }
}
