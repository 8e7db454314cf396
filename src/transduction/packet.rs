// src/transduction/packet.rs

use super::codebook::{self, Isotope};
use std::fmt;

/// A message character after ionization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedChar {
    /// Position in the message, counted in characters.
    pub index: usize,
    pub symbol: char,
    pub morse: String,
    pub quantum_state: String,
    pub isotope: Isotope,
    /// Phase in radians.
    pub phase: f64,
}

/// The ionized form of one message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantumPacket {
    /// `BiMO-<timestamp>`.
    pub id: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    pub original_message: String,
    /// Encoded characters in message order.
    pub characters: Vec<EncodedChar>,
    /// Characters with no codebook entry, with their positions.
    pub skipped: Vec<(usize, char)>,
}

impl QuantumPacket {
    /// Encodes every character of `message` through the codebook. Characters
    /// without an entry are logged and skipped.
    pub fn ionize(message: &str, timestamp_ms: u64) -> Self {
        let mut characters = Vec::new();
        let mut skipped = Vec::new();
        for (index, symbol) in message.chars().enumerate() {
            match codebook::lookup(symbol) {
                Some(entry) => {
                    if entry.isotope != Isotope::Vacuum {
                        log::info!("[{}]->{}", symbol, entry.isotope);
                    }
                    characters.push(EncodedChar {
                        index,
                        symbol,
                        morse: entry.morse.to_string(),
                        quantum_state: entry.quantum.to_string(),
                        isotope: entry.isotope,
                        phase: entry.phase,
                    });
                }
                None => {
                    log::warn!("[{}]->Unknown symbol. Skip.", symbol);
                    skipped.push((index, symbol));
                }
            }
        }
        let packet = Self {
            id: format!("BiMO-{}", timestamp_ms),
            timestamp_ms,
            original_message: message.to_string(),
            characters,
            skipped,
        };
        log::info!("quantum packet generated: {}", packet.id);
        packet
    }

    /// Morse codes of the encoded characters joined by single spaces.
    pub fn morse(&self) -> String {
        self.characters.iter().map(|c| c.morse.as_str()).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for QuantumPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} encoded, {} skipped)", self.id, self.characters.len(), self.skipped.len())
    }
}

/// Binary stream for a Morse string: `.` → `1`, `-` → `111`, space → `000`,
/// anything else → `0`. An empty input yields `"0"`.
pub fn morse_to_binary(morse: &str) -> String {
    let binary: String = morse
        .chars()
        .map(|c| match c {
            '.' => "1",
            '-' => "111",
            ' ' => "000",
            _ => "0",
        })
        .collect();
    if binary.is_empty() { "0".to_string() } else { binary }
}

/// `BIMO-KEY-<last 4 timestamp digits>-<encoded count>-<binary[5..15]>`, with
/// the binary slice clipped to what is available.
pub fn access_key(packet: &QuantumPacket, binary: &str) -> String {
    let stamp = packet.timestamp_ms.to_string();
    let stamp = &stamp[stamp.len().saturating_sub(4)..];
    let bits: String = binary.chars().skip(5).take(10).collect();
    format!("BIMO-KEY-{}-{}-{}", stamp, packet.characters.len(), bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ionize_encodes_and_skips() {
        let packet = QuantumPacket::ionize("SOS 1?", 1_700_000_012_345);
        assert_eq!(packet.id, "BiMO-1700000012345");
        assert_eq!(packet.characters.len(), 5);
        assert_eq!(packet.skipped, vec![(5, '?')]);
        assert_eq!(packet.characters[3].isotope, Isotope::Vacuum);
        assert_eq!(packet.characters[4].index, 4);
        assert_eq!(packet.morse(), "... --- ... / .----");
        assert_eq!(packet.to_string(), "BiMO-1700000012345 (5 encoded, 1 skipped)");
    }

    #[test]
    fn morse_maps_to_binary() {
        assert_eq!(morse_to_binary(".-"), "1111");
        assert_eq!(morse_to_binary(". -"), "1000111");
        assert_eq!(morse_to_binary("/"), "0");
        assert_eq!(morse_to_binary(""), "0");
    }

    #[test]
    fn access_key_layout() {
        let packet = QuantumPacket::ionize("SOS", 1_700_000_012_345);
        let binary = morse_to_binary(&packet.morse());
        assert_eq!(binary, "111000111111111000111");
        assert_eq!(access_key(&packet, &binary), "BIMO-KEY-2345-3-0111111111");

        let short = QuantumPacket::ionize("E", 42);
        assert_eq!(access_key(&short, &morse_to_binary(&short.morse())), "BIMO-KEY-42-1-");
    }
}
