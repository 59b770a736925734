//! Rolling window of heading observations

use crate::mean::circular_mean_of;
use std::collections::VecDeque;

/// Upper bound on storage reserved up front; larger windows grow on demand
const PREALLOCATED_HEADINGS: usize = 64;

/// Fixed-capacity buffer of the most recent headings
///
/// Once full, each new heading evicts the oldest one. The mean is computed
/// on demand from the current contents.
///
/// # Example
/// ```
/// use heading_mean::HeadingWindow;
///
/// let mut window = HeadingWindow::new(3);
/// for heading in [0.1, 0.2, 0.3, 0.4] {
///     window.push(heading);
/// }
///
/// assert_eq!(window.len(), 3);
/// assert!((window.mean() - 0.3).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct HeadingWindow {
    capacity: usize,
    headings: VecDeque<f64>,
}

impl HeadingWindow {
    /// Create an empty window; capacity is at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            headings: VecDeque::with_capacity(capacity.min(PREALLOCATED_HEADINGS)),
        }
    }

    /// Record a heading in radians
    ///
    /// Non-finite values are dropped and `false` is returned.
    pub fn push(&mut self, heading: f64) -> bool {
        if !heading.is_finite() {
            return false;
        }

        if self.headings.len() == self.capacity {
            self.headings.pop_front();
        }
        self.headings.push_back(heading);
        true
    }

    /// Circular mean of the stored headings, NaN when empty or cancelled out
    pub fn mean(&self) -> f64 {
        circular_mean_of(self.headings.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.headings.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored headings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.headings.iter().copied()
    }

    /// Drop every stored heading
    pub fn clear(&mut self) {
        self.headings.clear();
    }
}

impl Default for HeadingWindow {
    fn default() -> Self {
        Self::new(10) // Matches the default plugin size
    }
}
