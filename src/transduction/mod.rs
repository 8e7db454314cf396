// src/transduction/mod.rs

//! Message transduction around the excitation integrator.
//!
//! A message is accepted by a [`Transducer`], which first runs the two-level
//! excitation integrator and records its fidelity, then ionizes the message
//! character by character through a fixed codebook, and finally derives a
//! Morse string, a binary stream and an access key from the resulting packet.
//! The last stage hands off to an external responder that this crate does not
//! provide; [`Transducer::complete`] records its answer.

pub mod codebook;
pub mod packet;
pub mod process;

pub use codebook::{Isotope, Symbol, lookup};
pub use packet::{EncodedChar, QuantumPacket, access_key, morse_to_binary};
pub use process::{ProcessStatus, Transducer};
