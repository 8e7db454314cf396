// src/transduction/process.rs

use super::packet::{QuantumPacket, access_key, morse_to_binary};
use crate::core::LifeError;
use crate::excitation::{ExcitationReport, ProcessMetrics, run_excitation};
use std::fmt;

/// Stage of the transduction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessStatus {
    /// Ready for a message.
    #[default]
    Idle,
    /// Excitation run done; characters not yet encoded.
    Ionizing,
    /// Packet built; Morse, binary and key not yet derived.
    Transducing,
    /// Outputs derived; waiting for an external responder.
    AwaitingAi,
    /// Finished until reset.
    Complete,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessStatus::Idle => "IDLE",
            ProcessStatus::Ionizing => "IONIZING",
            ProcessStatus::Transducing => "TRANSDUCING",
            ProcessStatus::AwaitingAi => "AWAITING_AI",
            ProcessStatus::Complete => "COMPLETE",
        };
        f.write_str(s)
    }
}

/// Drives one message at a time through excitation, ionization and
/// transduction.
///
/// Each stage method checks the current status and fails with
/// [`LifeError::InvalidOperation`] when called out of order. Process metrics
/// accumulate across runs and survive [`Transducer::reset`].
#[derive(Debug, Clone, Default)]
pub struct Transducer {
    status: ProcessStatus,
    metrics: ProcessMetrics,
    message: String,
    timestamp_ms: u64,
    report: Option<ExcitationReport>,
    packet: Option<QuantumPacket>,
    morse: String,
    binary: String,
    key: Option<String>,
}

impl Transducer {
    /// Idle pipeline with no recorded runs.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn metrics(&self) -> &ProcessMetrics {
        &self.metrics
    }

    /// Excitation series of the current run.
    pub fn report(&self) -> Option<&ExcitationReport> {
        self.report.as_ref()
    }

    pub fn packet(&self) -> Option<&QuantumPacket> {
        self.packet.as_ref()
    }

    /// Morse string; empty before transduction.
    pub fn morse(&self) -> &str {
        &self.morse
    }

    /// Binary stream; empty before transduction.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn access_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Accepts `message` and runs the excitation integrator. Only valid when
    /// idle and for a non-empty message.
    pub fn start(&mut self, message: &str, timestamp_ms: u64) -> Result<&ExcitationReport, LifeError> {
        self.expect(ProcessStatus::Idle)?;
        if message.is_empty() {
            return Err(LifeError::InvalidOperation { message: "nothing to transduce: empty message".to_string() });
        }
        log::info!("pumping quantum dot core");
        self.status = ProcessStatus::Ionizing;
        self.message = message.to_string();
        self.timestamp_ms = timestamp_ms;

        let report = run_excitation();
        self.metrics.record(&report);
        Ok(self.report.insert(report))
    }

    /// Encodes the accepted message into a packet.
    pub fn ionize(&mut self) -> Result<&QuantumPacket, LifeError> {
        self.expect(ProcessStatus::Ionizing)?;
        let packet = QuantumPacket::ionize(&self.message, self.timestamp_ms);
        self.status = ProcessStatus::Transducing;
        Ok(self.packet.insert(packet))
    }

    /// Derives the Morse string, binary stream and access key, then waits for
    /// the external responder. Returns the key.
    pub fn transduce(&mut self) -> Result<&str, LifeError> {
        self.expect(ProcessStatus::Transducing)?;
        let Some(packet) = self.packet.as_ref() else {
            return Err(LifeError::InvalidOperation { message: "no packet to transduce".to_string() });
        };
        self.morse = packet.morse();
        self.binary = morse_to_binary(&self.morse);
        let key = access_key(packet, &self.binary);
        log::info!("access key generated: {}", key);
        self.status = ProcessStatus::AwaitingAi;
        Ok(self.key.insert(key).as_str())
    }

    /// Marks the external response as received.
    pub fn complete(&mut self) -> Result<(), LifeError> {
        self.expect(ProcessStatus::AwaitingAi)?;
        self.status = ProcessStatus::Complete;
        Ok(())
    }

    /// Back to idle, discarding the current run. Metrics are kept.
    pub fn reset(&mut self) {
        *self = Self { metrics: self.metrics, ..Self::default() };
    }

    fn expect(&self, expected: ProcessStatus) -> Result<(), LifeError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(LifeError::InvalidOperation {
                message: format!("pipeline is {}, expected {}", self.status, expected),
            })
        }
    }
}
