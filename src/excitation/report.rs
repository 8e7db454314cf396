// src/excitation/report.rs

use std::fmt;

/// One point of the excitation series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcitationSample {
    /// Time.
    pub t: f64,
    /// `|ψ0|`
    pub psi0: f64,
    /// `|ψ1|`
    pub psi1: f64,
}

/// Immutable result of one excitation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcitationReport {
    samples: Vec<ExcitationSample>,
    fidelity: f64,
    error_rate: f64,
}

impl ExcitationReport {
    /// Derives the metrics from the final sample. `samples` must be non-empty
    /// and ordered by time.
    pub(crate) fn from_samples(samples: Vec<ExcitationSample>) -> Self {
        let fidelity = samples.last().map(|s| s.psi1).unwrap_or(0.0);
        Self { samples, fidelity, error_rate: 1.0 - fidelity }
    }

    /// The full series, ordered by time.
    pub fn samples(&self) -> &[ExcitationSample] {
        &self.samples
    }

    /// `|ψ1|` of the final sample.
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// `1 - fidelity`.
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Time covered by the series.
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.t - first.t,
            _ => 0.0,
        }
    }

    /// Prefix of the series a playback at `progress` (0 to 1) has revealed:
    /// every sample with `t <= t_start + progress·duration`.
    pub fn visible(&self, progress: f64) -> &[ExcitationSample] {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        if progress >= 1.0 {
            return &self.samples;
        }
        let Some(first) = self.samples.first() else {
            return &self.samples;
        };
        let cutoff = first.t + progress * self.duration();
        let end = self.samples.partition_point(|s| s.t <= cutoff);
        &self.samples[..end]
    }
}

/// Running record of completed excitation runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessMetrics {
    /// Completed runs.
    pub cycle: u64,
    /// Fidelity of the latest run.
    pub fidelity: f64,
    /// Estimated error rate of the latest run.
    pub error_rate: f64,
}

impl ProcessMetrics {
    /// Folds in a completed run.
    pub fn record(&mut self, report: &ExcitationReport) {
        self.cycle += 1;
        self.fidelity = report.fidelity();
        self.error_rate = report.error_rate();
    }

    /// Discards all recorded runs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ProcessMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle {}: fidelity {:.2}%, error rate {:.2}%",
            self.cycle,
            self.fidelity * 100.0,
            self.error_rate * 100.0
        )
    }
}
