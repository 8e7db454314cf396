// tests/transduction_tests.rs

use qlife::transduction::{Isotope, lookup, morse_to_binary};
use qlife::{LifeError, ProcessStatus, QuantumPacket, Transducer, run_excitation};

#[test]
fn test_full_pipeline() -> Result<(), LifeError> {
    let mut transducer = Transducer::new();
    let fidelity = transducer.start("CQ 73", 1_718_000_004_242)?.fidelity();
    assert_eq!(fidelity, run_excitation().fidelity());
    assert_eq!(transducer.metrics().fidelity, fidelity);

    let packet = transducer.ionize()?;
    assert_eq!(packet.characters.len(), 5);
    assert!(packet.skipped.is_empty());
    assert_eq!(packet.characters[2].isotope, Isotope::Vacuum);

    let key = transducer.transduce()?.to_string();
    assert_eq!(transducer.morse(), "-.-. --.- / --... ...--");
    assert_eq!(transducer.binary(), morse_to_binary("-.-. --.- / --... ...--"));
    assert!(key.starts_with("BIMO-KEY-4242-5-"));
    assert_eq!(key.len(), "BIMO-KEY-4242-5-".len() + 10);

    transducer.complete()?;
    assert_eq!(transducer.status(), ProcessStatus::Complete);
    assert!(transducer.start("again", 0).is_err());
    Ok(())
}

#[test]
fn test_unknown_symbols_are_skipped() {
    let packet = QuantumPacket::ionize("Hi!", 0);
    // Lookups are case-sensitive: only 'H' has an entry.
    assert_eq!(packet.characters.len(), 1);
    assert_eq!(packet.skipped, vec![(1, 'i'), (2, '!')]);
    assert!(lookup('i').is_none());
}

#[test]
fn test_message_without_known_symbols_still_transduces() -> Result<(), LifeError> {
    let mut transducer = Transducer::new();
    transducer.start("???", 99)?;
    assert!(transducer.ionize()?.characters.is_empty());
    let key = transducer.transduce()?.to_string();
    assert_eq!(transducer.morse(), "");
    assert_eq!(transducer.binary(), "0");
    assert_eq!(key, "BIMO-KEY-99-0-");
    Ok(())
}
