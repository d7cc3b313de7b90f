use instrument_stage::core::{midi_to_hz, NoteId, NoteParseError};

#[test]
fn parses_scientific_pitch_names() {
    assert_eq!("C4".parse::<NoteId>().map(NoteId::midi), Ok(60));
    assert_eq!("A4".parse::<NoteId>().map(NoteId::midi), Ok(69));
    assert_eq!("D#4".parse::<NoteId>().map(NoteId::midi), Ok(63));
    assert_eq!("Bb3".parse::<NoteId>().map(NoteId::midi), Ok(58));
    assert_eq!("A0".parse::<NoteId>().map(NoteId::midi), Ok(21));
    assert_eq!("C8".parse::<NoteId>().map(NoteId::midi), Ok(108));
}

#[test]
fn displays_with_sharps() {
    let n: NoteId = "Db4".parse().unwrap();
    assert_eq!(n.to_string(), "C#4");
    assert_eq!(NoteId::from_midi(40).unwrap().to_string(), "E2");
    assert!(n.is_accidental());
    assert!(!NoteId::from_midi(60).unwrap().is_accidental());
}

#[test]
fn rejects_malformed_names() {
    assert_eq!("".parse::<NoteId>(), Err(NoteParseError::Empty));
    assert_eq!("H4".parse::<NoteId>(), Err(NoteParseError::BadLetter('H')));
    assert!(matches!("C".parse::<NoteId>(), Err(NoteParseError::BadOctave(_))));
    assert!(matches!("G9#".parse::<NoteId>(), Err(NoteParseError::BadOctave(_))));
    assert!(matches!("Cb-1".parse::<NoteId>(), Err(NoteParseError::OutOfRange(_))));
    assert!(matches!("A9".parse::<NoteId>(), Err(NoteParseError::OutOfRange(_))));
}

#[test]
fn frequency_follows_equal_temperament() {
    assert!((midi_to_hz(69.0) - 440.0).abs() < 1e-3);
    let c4 = NoteId::from_midi(60).unwrap().frequency_hz();
    assert!((c4 - 261.63).abs() < 0.01);
    let a5 = NoteId::from_midi(81).unwrap().frequency_hz();
    assert!((a5 - 880.0).abs() < 1e-2);
}

#[test]
fn transpose_stays_in_range() {
    let c4 = NoteId::from_midi(60).unwrap();
    assert_eq!(c4.transpose(12).map(NoteId::midi), Some(72));
    assert_eq!(c4.transpose(-60).map(NoteId::midi), Some(0));
    assert_eq!(c4.transpose(-61), None);
    assert_eq!(c4.transpose(68), None);
    assert_eq!(NoteId::from_midi(128), None);
    assert_eq!(NoteId::saturating(200).midi(), 127);
}
