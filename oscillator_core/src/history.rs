//! Fixed-capacity sliding window of position samples for the trailing plot.

/// Ring buffer of the most recent positions, read oldest-first
///
/// Always holds exactly as many samples as it was created with: construction and [`clear`](Self::clear)
/// fill it with zeros and every [`push`](Self::push) evicts the oldest one.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    samples: Vec<f64>,
    head: usize, // index of the oldest sample, next write slot
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: vec![0.0; capacity],
            head: 0,
        }
    }

    /// Append the newest sample, discarding the oldest
    pub fn push(&mut self, sample: f64) {
        if self.samples.is_empty() {
            return;
        }
        self.samples[self.head] = sample;
        self.head = (self.head + 1) % self.samples.len();
    }

    /// Zero every sample
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
        self.head = 0;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, counted from the oldest
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.samples.len() {
            return None;
        }
        Some(self.samples[(self.head + index) % self.samples.len()])
    }

    pub fn oldest(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn latest(&self) -> Option<f64> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Contiguous halves in oldest-to-newest order
    pub fn as_slices(&self) -> (&[f64], &[f64]) {
        let (newer, older) = self.samples.split_at(self.head);
        (older, newer)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer).copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_prefilled_with_zeros() {
        let history = HistoryBuffer::new(5);
        assert_eq!(history.len(), 5);
        assert_eq!(history.to_vec(), vec![0.0; 5]);
    }

    #[test]
    fn test_history_push_evicts_oldest() {
        let mut history = HistoryBuffer::new(3);
        history.push(1.0);
        history.push(2.0);
        assert_eq!(history.to_vec(), vec![0.0, 1.0, 2.0]);

        history.push(3.0);
        history.push(4.0);
        assert_eq!(history.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(history.oldest(), Some(2.0));
        assert_eq!(history.latest(), Some(4.0));
    }

    #[test]
    fn test_history_get_is_oldest_first() {
        let mut history = HistoryBuffer::new(3);
        for sample in [1.0, 2.0, 3.0, 4.0] {
            history.push(sample);
        }
        assert_eq!(history.get(0), Some(2.0));
        assert_eq!(history.get(2), Some(4.0));
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn test_history_clear() {
        let mut history = HistoryBuffer::new(4);
        for sample in [5.0, 6.0, 7.0] {
            history.push(sample);
        }
        history.clear();
        assert_eq!(history.to_vec(), vec![0.0; 4]);

        history.push(9.0);
        assert_eq!(history.latest(), Some(9.0));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_history_as_slices_wraps() {
        let mut history = HistoryBuffer::new(4);
        for sample in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            history.push(sample);
        }
        let (older, newer) = history.as_slices();
        assert_eq!(older, &[3.0, 4.0]);
        assert_eq!(newer, &[5.0, 6.0]);
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = HistoryBuffer::new(0);
        history.push(1.0);
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
