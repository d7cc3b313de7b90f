use std::fmt;
use std::str::FromStr;

/// A playable pitch, stored as a MIDI note number.
///
/// Parses and prints scientific pitch notation (`C4`, `F#2`, `Bb3`) so note
/// identifiers read the same in part definitions, logs and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId {
    midi: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteParseError {
    #[error("empty note name")]
    Empty,
    #[error("unknown pitch letter '{0}'")]
    BadLetter(char),
    #[error("missing or invalid octave in '{0}'")]
    BadOctave(String),
    #[error("note '{0}' is outside the MIDI range")]
    OutOfRange(String),
}

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl NoteId {
    pub const fn from_midi(midi: u8) -> Option<Self> {
        if midi <= 127 {
            Some(Self { midi })
        } else {
            None
        }
    }

    /// Like [`NoteId::from_midi`] but clamps to the top of the MIDI range.
    pub const fn saturating(midi: u8) -> Self {
        Self {
            midi: if midi > 127 { 127 } else { midi },
        }
    }

    #[inline]
    pub fn midi(self) -> u8 {
        self.midi
    }

    /// Octave in scientific pitch notation (middle C is C4).
    #[inline]
    pub fn octave(self) -> i32 {
        self.midi as i32 / 12 - 1
    }

    #[inline]
    pub fn pitch_class(self) -> u8 {
        self.midi % 12
    }

    /// True for pitch classes that sit on black piano keys.
    #[inline]
    pub fn is_accidental(self) -> bool {
        matches!(self.pitch_class(), 1 | 3 | 6 | 8 | 10)
    }

    #[inline]
    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.midi as f32)
    }

    /// Shift by `semitones`, returning `None` when the result leaves the MIDI range.
    pub fn transpose(self, semitones: i32) -> Option<Self> {
        let m = self.midi as i32 + semitones;
        if (0..=127).contains(&m) {
            Some(Self { midi: m as u8 })
        } else {
            None
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            SHARP_NAMES[self.pitch_class() as usize],
            self.octave()
        )
    }
}

impl FromStr for NoteId {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;
        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            other => return Err(NoteParseError::BadLetter(other)),
        };
        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let octave: i32 = octave_str
            .parse()
            .map_err(|_| NoteParseError::BadOctave(s.to_string()))?;
        let midi = (octave + 1) * 12 + base + accidental;
        if !(0..=127).contains(&midi) {
            return Err(NoteParseError::OutOfRange(s.to_string()));
        }
        Ok(Self { midi: midi as u8 })
    }
}

#[inline]
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
