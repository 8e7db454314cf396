// src/core/pattern.rs

use super::error::LifeError;
use std::fmt;

/// A fixed rectangular 0/1 shape supplied by a pattern library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    /// Row-major liveness flags.
    bits: Vec<bool>,
}

impl Pattern {
    /// Builds a pattern from rows of `0`/`1` values.
    ///
    /// Rejects empty input, ragged rows and values other than 0 and 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LifeError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(LifeError::InvalidPattern { message: "pattern has no cells".to_string() });
        }
        let mut bits = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LifeError::InvalidPattern {
                    message: format!("row {} has {} columns, expected {}", i, row.len(), cols),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                match v {
                    0 => bits.push(false),
                    1 => bits.push(true),
                    other => {
                        return Err(LifeError::InvalidPattern {
                            message: format!("value {} at ({}, {}) is not 0 or 1", other, i, j),
                        });
                    }
                }
            }
        }
        Ok(Self { rows: rows.len(), cols, bits })
    }

    /// Row extent.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column extent.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` is a live cell of the shape. Outside the shape is dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.bits[row * self.cols + col]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Top-left anchor `(row, col)` that centers the shape on a `size`×`size`
    /// grid. Negative when the shape is larger than the grid.
    pub fn centered_origin(&self, size: usize) -> (isize, isize) {
        let half = size as f64 / 2.0;
        let start_row = (half - self.rows as f64 / 2.0).floor() as isize;
        let start_col = (half - self.cols as f64 / 2.0).floor() as isize;
        (start_row, start_col)
    }

    /// Grid coordinates covered by the shape when centered on a `size` grid,
    /// paired with liveness. Cells falling outside the grid are dropped.
    pub fn placements(&self, size: usize) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let (start_row, start_col) = self.centered_origin(size);
        let n = size as isize;
        (0..self.rows).flat_map(move |i| {
            (0..self.cols).filter_map(move |j| {
                let (r, c) = (start_row + i as isize, start_col + j as isize);
                (r >= 0 && r < n && c >= 0 && c < n).then(|| (r as usize, c as usize, self.is_alive(i, j)))
            })
        })
    }

    /// Period-4 glider.
    pub fn glider() -> Self {
        Self::fixed(3, 3, &[0, 1, 0, 0, 0, 1, 1, 1, 1])
    }

    /// Period-2 oscillator.
    pub fn blinker() -> Self {
        Self::fixed(1, 3, &[1, 1, 1])
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::fixed(2, 2, &[1, 1, 1, 1])
    }

    fn fixed(rows: usize, cols: usize, bits: &[u8]) -> Self {
        Self { rows, cols, bits: bits.iter().map(|&b| b == 1).collect() }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}", if self.is_alive(i, j) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
