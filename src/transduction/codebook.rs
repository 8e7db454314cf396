// src/transduction/codebook.rs

//! Symbol table mapping message characters to Morse code, a basis-state
//! label, a carrier isotope and a phase.

use std::f64::consts::PI;
use std::fmt;

/// Carrier assigned to an encoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Isotope {
    U235,
    U238,
    Pu239,
    Pu238,
    Th232,
    Sr90,
    Co60,
    Cm244,
    Po210,
    Am241,
    Cf252,
    Tc99m,
    /// Word gap; carries nothing.
    Vacuum,
}

impl Isotope {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Isotope::U235 => "Uranium-235",
            Isotope::U238 => "Uranium-238",
            Isotope::Pu239 => "Plutonium-239",
            Isotope::Pu238 => "Plutonium-238",
            Isotope::Th232 => "Thorium-232",
            Isotope::Sr90 => "Strontium-90",
            Isotope::Co60 => "Cobalt-60",
            Isotope::Cm244 => "Curium-244",
            Isotope::Po210 => "Polonium-210",
            Isotope::Am241 => "Americium-241",
            Isotope::Cf252 => "Californium-252",
            Isotope::Tc99m => "Technetium-99m",
            Isotope::Vacuum => "Vacuum State",
        }
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One codebook entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    /// Dots and dashes; `/` for the word gap.
    pub morse: &'static str,
    /// Basis-state label such as `|0⟩|1⟩`.
    pub quantum: &'static str,
    pub isotope: Isotope,
    /// Phase in radians.
    pub phase: f64,
}

const fn sym(morse: &'static str, quantum: &'static str, isotope: Isotope, phase: f64) -> Symbol {
    Symbol { morse, quantum, isotope, phase }
}

use Isotope::*;

static CODEBOOK: [(char, Symbol); 37] = [
    ('A', sym(".-", "|0⟩|1⟩", Sr90, 0.0)),
    ('B', sym("-...", "|1⟩|0⟩|0⟩|0⟩", Co60, PI / 4.0)),
    ('C', sym("-.-.", "|1⟩|0⟩|1⟩|0⟩", Pu238, PI / 2.0)),
    ('D', sym("-..", "|1⟩|0⟩|0⟩", U235, PI / 3.0)),
    ('E', sym(".", "|0⟩", Tc99m, 0.0)),
    ('F', sym("..-.", "|0⟩|0⟩|1⟩|0⟩", Am241, PI / 6.0)),
    ('G', sym("--.", "|1⟩|1⟩|0⟩", Cm244, PI / 5.0)),
    ('H', sym("....", "|0⟩|0⟩|0⟩|0⟩", Po210, 0.0)),
    ('I', sym("..", "|0⟩|0⟩", Sr90, PI / 8.0)),
    ('J', sym(".---", "|0⟩|1⟩|1⟩|1⟩", U238, PI / 7.0)),
    ('K', sym("-.-", "|1⟩|0⟩|1⟩", Pu239, PI / 4.0)),
    ('L', sym(".-..", "|0⟩|1⟩|0⟩|0⟩", Th232, PI / 3.0)),
    ('M', sym("--", "|1⟩|1⟩", Cf252, PI / 2.0)),
    ('N', sym("-.", "|1⟩|0⟩", Co60, PI / 6.0)),
    ('O', sym("---", "|1⟩|1⟩|1⟩", U235, 2.0 * PI / 3.0)),
    ('P', sym(".--.", "|0⟩|1⟩|1⟩|0⟩", Am241, PI / 5.0)),
    ('Q', sym("--.-", "|1⟩|1⟩|0⟩|1⟩", Pu238, 3.0 * PI / 4.0)),
    ('R', sym(".-.", "|0⟩|1⟩|0⟩", Sr90, PI / 4.0)),
    ('S', sym("...", "|0⟩|0⟩|0⟩", Tc99m, 0.0)),
    ('T', sym("-", "|1⟩", Co60, PI)),
    ('U', sym("..-", "|0⟩|0⟩|1⟩", U238, PI / 3.0)),
    ('V', sym("...-", "|0⟩|0⟩|0⟩|1⟩", Cm244, PI / 7.0)),
    ('W', sym(".--", "|0⟩|1⟩|1⟩", Pu239, 2.0 * PI / 3.0)),
    ('X', sym("-..-", "|1⟩|0⟩|0⟩|1⟩", Po210, 3.0 * PI / 5.0)),
    ('Y', sym("-.--", "|1⟩|0⟩|1⟩|1⟩", Cf252, 4.0 * PI / 5.0)),
    ('Z', sym("--..", "|1⟩|1⟩|0⟩|0⟩", Th232, PI / 2.0)),
    ('0', sym("-----", "|00000⟩", U235, 0.0)),
    ('1', sym(".----", "|00001⟩", Pu239, PI / 5.0)),
    ('2', sym("..---", "|00011⟩", Th232, 2.0 * PI / 5.0)),
    ('3', sym("...--", "|00111⟩", U238, 3.0 * PI / 5.0)),
    ('4', sym("....-", "|01111⟩", Am241, 4.0 * PI / 5.0)),
    ('5', sym(".....", "|11111⟩", Sr90, PI)),
    ('6', sym("-....", "|11110⟩", Co60, 6.0 * PI / 5.0)),
    ('7', sym("--...", "|11100⟩", Cm244, 7.0 * PI / 5.0)),
    ('8', sym("---..", "|11000⟩", Po210, 8.0 * PI / 5.0)),
    ('9', sym("----.", "|10000⟩", Cf252, 9.0 * PI / 5.0)),
    (' ', sym("/", "⊗", Vacuum, 0.0)),
];

/// Entry for `c`. Only upper-case letters, digits and the space are encoded;
/// lookups are case-sensitive.
pub fn lookup(c: char) -> Option<&'static Symbol> {
    CODEBOOK.iter().find(|(key, _)| *key == c).map(|(_, symbol)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_digits_and_space_are_encoded() {
        assert_eq!(lookup('S').map(|s| s.morse), Some("..."));
        assert_eq!(lookup('T').map(|s| s.isotope), Some(Isotope::Co60));
        assert_eq!(lookup('9').map(|s| s.quantum), Some("|10000⟩"));
        assert_eq!(lookup(' ').map(|s| s.isotope), Some(Isotope::Vacuum));
        assert!((lookup('Q').map(|s| s.phase).unwrap_or(0.0) - 3.0 * PI / 4.0).abs() < 1e-15);
    }

    #[test]
    fn unknown_symbols_have_no_entry() {
        assert!(lookup('s').is_none());
        assert!(lookup('?').is_none());
        assert!(lookup('é').is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, (a, _)) in CODEBOOK.iter().enumerate() {
            assert!(CODEBOOK[i + 1..].iter().all(|(b, _)| a != b), "duplicate key {:?}", a);
        }
    }
}
