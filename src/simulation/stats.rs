// src/simulation/stats.rs

//! Per-step aggregate metrics, the bounded snapshot history and the
//! extinction/stability classifier.

use crate::core::Grid;
use crate::core::constants::stats_constants::{
    EXTINCTION_THRESHOLD, POPULATION_WINDOW, STABILITY_MIN_SAMPLES, STABILITY_STD_DEV, SUPERPOSITION_HIGH,
    SUPERPOSITION_LOW,
};
use std::fmt;

/// Run state reported with every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// Actively stepping.
    Running,
    /// Halted with a non-terminal population.
    #[default]
    Paused,
    /// Population has settled (terminal).
    Stable,
    /// Population has vanished (terminal).
    Extinct,
}

impl RunStatus {
    /// Stable and Extinct end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Stable | RunStatus::Extinct)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::Running => "Running",
            RunStatus::Paused => "Paused",
            RunStatus::Stable => "Stable",
            RunStatus::Extinct => "Extinct",
        };
        f.write_str(s)
    }
}

/// Aggregates of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridMetrics {
    /// Σ `|β|²`.
    pub expected_population: f64,
    /// Cells with alive-probability strictly inside `(0.05, 0.95)`.
    pub superpositions: usize,
    /// `superpositions / cell count`.
    pub coherence: f64,
}

/// Computes [`GridMetrics`] for `grid`.
pub fn measure(grid: &Grid) -> GridMetrics {
    let mut expected_population = 0.0;
    let mut superpositions = 0;
    for cell in grid.cells() {
        let p = cell.alive_probability();
        expected_population += p;
        if p > SUPERPOSITION_LOW && p < SUPERPOSITION_HIGH {
            superpositions += 1;
        }
    }
    let coherence = if grid.is_empty() { 0.0 } else { superpositions as f64 / grid.len() as f64 };
    GridMetrics { expected_population, superpositions, coherence }
}

/// Immutable statistics of one completed step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Steps since the last re-initialization.
    pub generation: u64,
    /// Σ `|β|²` over the grid.
    pub expected_population: f64,
    /// Number of superposed cells.
    pub superpositions: usize,
    /// Fraction of superposed cells.
    pub coherence: f64,
    /// Run state after classification.
    pub status: RunStatus,
}

impl Snapshot {
    /// Generation 0, zero metrics, `Paused`.
    pub fn initial() -> Self {
        Self::default()
    }

    pub(crate) fn with_metrics(generation: u64, metrics: GridMetrics, status: RunStatus) -> Self {
        Self {
            generation,
            expected_population: metrics.expected_population,
            superpositions: metrics.superpositions,
            coherence: metrics.coherence,
            status,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Generation: {}", self.generation)?;
        writeln!(f, "- Population: {:.2}", self.expected_population)?;
        writeln!(f, "- Superpositions: {}", self.superpositions)?;
        writeln!(f, "- Coherence: {:.1}%", self.coherence * 100.0)?;
        write!(f, "- Status: {}", self.status)
    }
}

/// Fixed-capacity ring buffer; pushing past capacity overwrites the oldest entry.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    /// Next write position once full.
    cursor: usize,
}

impl<T> RingBuffer<T> {
    /// Empty buffer holding at most `capacity` entries.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self { slots: Vec::with_capacity(capacity), capacity, cursor: 0 }
    }

    /// Appends `value`, dropping the oldest entry when full.
    pub fn push(&mut self, value: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
        } else {
            self.slots[self.cursor] = value;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = 0;
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        // Before the first wrap the cursor sits at len, leaving `older` empty.
        let (newer, older) = self.slots.split_at(self.cursor.min(self.slots.len()));
        older.iter().chain(newer.iter())
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&T> {
        if self.slots.is_empty() {
            return None;
        }
        let n = self.slots.len();
        self.slots.get((self.cursor + n - 1) % n)
    }
}

/// Verdict of the classifier for one population value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Population below the extinction threshold.
    Extinct,
    /// Trailing window has settled.
    Stable,
    /// Neither.
    Active,
}

/// Trailing window of expected populations feeding the classifier.
#[derive(Debug, Clone)]
pub struct PopulationWindow {
    values: RingBuffer<f64>,
}

impl Default for PopulationWindow {
    fn default() -> Self {
        Self { values: RingBuffer::new(POPULATION_WINDOW) }
    }
}

impl PopulationWindow {
    /// Empty window of the standard capacity (20).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `population` and classifies it against the updated window.
    ///
    /// Extinct below 0.01. Otherwise stable once at least 15 values are held
    /// and their population standard deviation is below 0.1. The threshold is
    /// on raw population, independent of grid size.
    pub fn record(&mut self, population: f64) -> Classification {
        self.values.push(population);
        if population < EXTINCTION_THRESHOLD {
            Classification::Extinct
        } else if self.values.len() >= STABILITY_MIN_SAMPLES && self.std_dev() < STABILITY_STD_DEV {
            Classification::Stable
        } else {
            Classification::Active
        }
    }

    /// Population standard deviation of the held values (0 when empty).
    pub fn std_dev(&self) -> f64 {
        let n = self.values.len();
        if n == 0 {
            return 0.0;
        }
        let mean = self.values.iter().sum::<f64>() / n as f64;
        let var = self.values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        var.sqrt()
    }

    /// Number of held values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no value is held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use num_complex::Complex;

    #[test]
    fn ring_buffer_drops_oldest() {
        let mut buf = RingBuffer::new(3);
        for v in 1..=5 {
            buf.push(v);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buf.last(), Some(&5));
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.last(), None);
        buf.push(9);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn ring_buffer_before_wrap_keeps_order() {
        let mut buf = RingBuffer::new(4);
        buf.push('a');
        buf.push('b');
        assert_eq!(buf.iter().collect::<String>(), "ab");
        assert_eq!(buf.last(), Some(&'b'));
    }

    #[test]
    fn metrics_count_strict_superpositions() {
        let mut grid = Grid::empty(2);
        grid.set(0, 0, Cell::ALIVE).unwrap();
        grid.set(0, 1, Cell::new(Complex::new(0.6, 0.0), Complex::new(0.8, 0.0))).unwrap();
        let m = measure(&grid);
        assert!((m.expected_population - 1.64).abs() < 1e-12);
        assert_eq!(m.superpositions, 1);
        assert!((m.coherence - 0.25).abs() < 1e-12);
    }

    #[test]
    fn extinct_below_threshold() {
        let mut window = PopulationWindow::new();
        assert_eq!(window.record(0.0), Classification::Extinct);
        assert_eq!(window.record(0.009), Classification::Extinct);
        assert_eq!(window.record(0.5), Classification::Active);
    }

    #[test]
    fn stable_needs_fifteen_flat_samples() {
        let mut window = PopulationWindow::new();
        for _ in 0..14 {
            assert_eq!(window.record(10.0), Classification::Active);
        }
        assert_eq!(window.record(10.0), Classification::Stable);
    }

    #[test]
    fn noisy_population_stays_active() {
        let mut window = PopulationWindow::new();
        for k in 0..40 {
            let pop = if k % 2 == 0 { 10.0 } else { 11.0 };
            assert_eq!(window.record(pop), Classification::Active);
        }
        assert_eq!(window.len(), POPULATION_WINDOW);
    }

    #[test]
    fn snapshot_display_lists_fields() {
        let s = Snapshot { generation: 3, expected_population: 1.234, superpositions: 2, coherence: 0.5, status: RunStatus::Stable };
        let text = s.to_string();
        assert!(text.contains("Generation: 3"));
        assert!(text.contains("Population: 1.23"));
        assert!(text.contains("Coherence: 50.0%"));
        assert!(text.ends_with("Status: Stable"));
    }
}
