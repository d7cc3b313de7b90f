//! Scene registry: the ordered instrument entities and their parts.
//!
//! Everything here is static content built once at startup. Parts carry
//! their geometry as axis-aligned boxes in the owning entity's local space,
//! which is what both the renderer and the hit tester consume.

use super::notes::NoteId;
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentCategory {
    Piano,
    Guitar,
    Sax,
}

impl InstrumentCategory {
    pub const ALL: [InstrumentCategory; 3] = [Self::Piano, Self::Guitar, Self::Sax];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Piano => "piano",
            Self::Guitar => "guitar",
            Self::Sax => "sax",
        }
    }
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartKind {
    WhiteKey,
    BlackKey,
    String,
    SaxKey,
    Structure,
}

/// Axis-aligned box in an entity's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlayablePart {
    pub label: String,
    pub kind: PartKind,
    /// `None` marks decoration; such parts never sound.
    pub note: Option<NoteId>,
    pub bounds: Aabb,
    pub color: [f32; 3],
    /// Base self-illumination (screens, LEDs).
    pub emissive: f32,
}

impl PlayablePart {
    fn structure(label: &str, center: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self {
            label: label.to_string(),
            kind: PartKind::Structure,
            note: None,
            bounds: Aabb::from_center_size(center, size),
            color,
            emissive: 0.0,
        }
    }

    fn playable(kind: PartKind, note: NoteId, center: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self {
            label: note.to_string(),
            kind,
            note: Some(note),
            bounds: Aabb::from_center_size(center, size),
            color,
            emissive: 0.0,
        }
    }

    fn glowing(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    #[inline]
    pub fn is_playable(&self) -> bool {
        self.note.is_some()
    }
}

/// Index of a part inside the registry: `(entity, part)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartRef {
    pub entity: usize,
    pub part: usize,
}

impl PartRef {
    pub const fn new(entity: usize, part: usize) -> Self {
        Self { entity, part }
    }
}

#[derive(Clone, Debug)]
pub struct InstrumentEntity {
    pub id: usize,
    pub name: &'static str,
    pub category: InstrumentCategory,
    pub parts: Vec<PlayablePart>,
    bounds: Aabb,
}

impl InstrumentEntity {
    pub fn new(
        id: usize,
        name: &'static str,
        category: InstrumentCategory,
        parts: Vec<PlayablePart>,
    ) -> Self {
        let bounds = parts
            .iter()
            .map(|p| p.bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Aabb {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            });
        Self {
            id,
            name,
            category,
            parts,
            bounds,
        }
    }

    /// Union of all part boxes, used as a coarse hit-test early-out.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn part_with_note(&self, note: NoteId) -> Option<usize> {
        self.parts.iter().position(|p| p.note == Some(note))
    }

    pub fn playable_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_playable()).count()
    }
}

pub struct SceneRegistry {
    entities: Vec<InstrumentEntity>,
}

impl SceneRegistry {
    pub fn new(entities: Vec<InstrumentEntity>) -> Self {
        Self { entities }
    }

    /// The three-instrument stage: piano, guitar, sax in carousel order.
    pub fn stage_default() -> Self {
        Self::new(vec![build_piano(0), build_guitar(1), build_sax(2)])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&InstrumentEntity> {
        self.entities.get(index)
    }

    pub fn part(&self, r: PartRef) -> Option<&PlayablePart> {
        self.entities.get(r.entity).and_then(|e| e.parts.get(r.part))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentEntity> {
        self.entities.iter()
    }

    pub fn total_parts(&self) -> usize {
        self.entities.iter().map(|e| e.parts.len()).sum()
    }
}

// ---------------- Static instrument definitions ----------------

const PIANO_BLACK: [f32; 3] = [0.02, 0.02, 0.025];
const IVORY: [f32; 3] = [1.0, 1.0, 0.94];
const EBONY: [f32; 3] = [0.07, 0.07, 0.07];
const RED_FELT: [f32; 3] = [0.53, 0.0, 0.0];
const GOLD: [f32; 3] = [1.0, 0.8, 0.27];
const PANEL_GREY: [f32; 3] = [0.13, 0.13, 0.13];
const SCREEN_BLUE: [f32; 3] = [0.0, 0.67, 1.0];
const LED_GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const SPRUCE: [f32; 3] = [0.78, 0.52, 0.25];
const ROSEWOOD: [f32; 3] = [0.25, 0.12, 0.06];
const SOUNDHOLE: [f32; 3] = [0.04, 0.03, 0.02];
const STRING_STEEL: [f32; 3] = [0.85, 0.85, 0.9];
const STAND_GREY: [f32; 3] = [0.2, 0.2, 0.22];
const BRASS: [f32; 3] = [0.88, 0.66, 0.22];
const PEARL: [f32; 3] = [0.95, 0.92, 0.85];

pub const PIANO_LOWEST_MIDI: u8 = 21; // A0
pub const PIANO_WHITE_KEYS: usize = 52;
const KEY_WIDTH: f32 = 0.11;

/// MIDI numbers of the 52 white keys of an 88-key keyboard, A0..C8.
pub fn piano_white_key_midis() -> Vec<u8> {
    (PIANO_LOWEST_MIDI..=127)
        .filter(|m| !matches!(m % 12, 1 | 3 | 6 | 8 | 10))
        .take(PIANO_WHITE_KEYS)
        .collect()
}

fn build_piano(id: usize) -> InstrumentEntity {
    let mut parts = vec![
        PlayablePart::structure(
            "case",
            Vec3::new(0.0, 3.5, -0.6),
            Vec3::new(6.2, 1.4, 5.6),
            PIANO_BLACK,
        ),
        PlayablePart::structure(
            "lid",
            Vec3::new(0.0, 4.25, -0.6),
            Vec3::new(6.2, 0.1, 5.6),
            PIANO_BLACK,
        ),
        PlayablePart::structure(
            "keybed",
            Vec3::new(0.0, 2.975, 2.95),
            Vec3::new(6.4, 0.55, 1.5),
            PIANO_BLACK,
        ),
        PlayablePart::structure(
            "felt",
            Vec3::new(0.0, 3.26, 2.3),
            Vec3::new(5.9, 0.03, 0.15),
            RED_FELT,
        ),
        PlayablePart::structure(
            "control panel",
            Vec3::new(0.0, 3.85, 2.15),
            Vec3::new(5.8, 0.3, 0.3),
            PANEL_GREY,
        ),
        PlayablePart::structure(
            "screen",
            Vec3::new(0.0, 3.88, 2.31),
            Vec3::new(1.5, 0.18, 0.03),
            SCREEN_BLUE,
        )
        .glowing(0.8),
        PlayablePart::structure(
            "power led",
            Vec3::new(-2.2, 3.88, 2.31),
            Vec3::new(0.08, 0.06, 0.03),
            LED_GREEN,
        )
        .glowing(1.5),
    ];

    for (x, z) in [(-2.6, 1.6), (2.6, 1.6), (0.0, -2.8)] {
        parts.push(PlayablePart::structure(
            "leg",
            Vec3::new(x, 1.4, z),
            Vec3::new(0.35, 2.8, 0.35),
            PIANO_BLACK,
        ));
    }
    parts.push(PlayablePart::structure(
        "pedal box",
        Vec3::new(0.0, 0.25, 2.0),
        Vec3::new(1.0, 0.5, 0.8),
        PIANO_BLACK,
    ));
    parts.push(PlayablePart::structure(
        "pedal rod",
        Vec3::new(0.0, 1.6, 2.0),
        Vec3::new(0.12, 2.2, 0.12),
        GOLD,
    ));
    for i in 0..3 {
        parts.push(PlayablePart::structure(
            "pedal",
            Vec3::new(-0.3 + i as f32 * 0.3, 0.2, 2.55),
            Vec3::new(0.15, 0.08, 0.5),
            GOLD,
        ));
    }

    let whites = piano_white_key_midis();
    let start_x = -(PIANO_WHITE_KEYS as f32 * KEY_WIDTH) / 2.0;
    for (i, &midi) in whites.iter().enumerate() {
        parts.push(PlayablePart::playable(
            PartKind::WhiteKey,
            NoteId::saturating(midi),
            Vec3::new(start_x + (i as f32 + 0.5) * KEY_WIDTH, 3.4, 3.0),
            Vec3::new(KEY_WIDTH * 0.95, 0.3, 1.2),
            IVORY,
        ));
    }
    // A black key sits on the boundary wherever two neighbouring whites are a whole tone apart.
    for (i, pair) in whites.windows(2).enumerate() {
        if pair[1] - pair[0] == 2 {
            parts.push(PlayablePart::playable(
                PartKind::BlackKey,
                NoteId::saturating(pair[0] + 1),
                Vec3::new(start_x + (i as f32 + 1.0) * KEY_WIDTH, 3.6, 2.75),
                Vec3::new(KEY_WIDTH * 0.6, 0.25, 0.8),
                EBONY,
            ));
        }
    }

    InstrumentEntity::new(id, "Roland Digital Grand", InstrumentCategory::Piano, parts)
}

/// Open-string tuning, low to high.
pub const GUITAR_TUNING: [u8; 6] = [40, 45, 50, 55, 59, 64]; // E2 A2 D3 G3 B3 E4

fn build_guitar(id: usize) -> InstrumentEntity {
    let mut parts = vec![
        PlayablePart::structure(
            "stand",
            Vec3::new(0.0, 0.3, -0.3),
            Vec3::new(1.2, 0.6, 0.8),
            STAND_GREY,
        ),
        PlayablePart::structure(
            "lower bout",
            Vec3::new(0.0, 1.7, 0.0),
            Vec3::new(2.4, 2.2, 0.5),
            SPRUCE,
        ),
        PlayablePart::structure(
            "upper bout",
            Vec3::new(0.0, 3.25, 0.0),
            Vec3::new(1.9, 1.2, 0.5),
            SPRUCE,
        ),
        PlayablePart::structure(
            "soundhole",
            Vec3::new(0.0, 2.65, 0.26),
            Vec3::new(0.6, 0.6, 0.02),
            SOUNDHOLE,
        ),
        PlayablePart::structure(
            "bridge",
            Vec3::new(0.0, 1.25, 0.27),
            Vec3::new(0.9, 0.12, 0.06),
            ROSEWOOD,
        ),
        PlayablePart::structure(
            "neck",
            Vec3::new(0.0, 5.0, 0.05),
            Vec3::new(0.36, 2.5, 0.2),
            ROSEWOOD,
        ),
        PlayablePart::structure(
            "headstock",
            Vec3::new(0.0, 6.6, 0.05),
            Vec3::new(0.5, 0.7, 0.12),
            ROSEWOOD,
        ),
    ];
    for (k, &midi) in GUITAR_TUNING.iter().enumerate() {
        parts.push(PlayablePart::playable(
            PartKind::String,
            NoteId::saturating(midi),
            Vec3::new((k as f32 - 2.5) * 0.055, 3.775, 0.32),
            Vec3::new(0.05, 5.05, 0.04),
            STRING_STEEL,
        ));
    }
    InstrumentEntity::new(id, "Acoustic Guitar", InstrumentCategory::Guitar, parts)
}

/// Pearl keys from the top of the body down: C5 down to C4.
pub const SAX_KEYS: [u8; 8] = [72, 71, 69, 67, 65, 64, 62, 60];

fn build_sax(id: usize) -> InstrumentEntity {
    let mut parts = vec![
        PlayablePart::structure(
            "stand",
            Vec3::new(0.3, 0.35, 0.0),
            Vec3::new(1.0, 0.7, 0.8),
            STAND_GREY,
        ),
        PlayablePart::structure(
            "body",
            Vec3::new(0.0, 2.9, 0.0),
            Vec3::new(0.42, 3.4, 0.42),
            BRASS,
        ),
        PlayablePart::structure(
            "bow",
            Vec3::new(0.35, 1.0, 0.0),
            Vec3::new(1.0, 0.4, 0.42),
            BRASS,
        ),
        PlayablePart::structure(
            "bell",
            Vec3::new(0.75, 1.9, 0.0),
            Vec3::new(0.7, 1.5, 0.7),
            BRASS,
        ),
        PlayablePart::structure(
            "bell rim",
            Vec3::new(0.75, 2.7, 0.0),
            Vec3::new(0.9, 0.12, 0.9),
            BRASS,
        ),
        PlayablePart::structure(
            "neck",
            Vec3::new(-0.15, 4.85, 0.0),
            Vec3::new(0.22, 0.5, 0.22),
            BRASS,
        ),
        PlayablePart::structure(
            "crook",
            Vec3::new(-0.45, 5.05, 0.0),
            Vec3::new(0.5, 0.14, 0.14),
            BRASS,
        ),
        PlayablePart::structure(
            "mouthpiece",
            Vec3::new(-0.8, 5.05, 0.0),
            Vec3::new(0.25, 0.12, 0.12),
            EBONY,
        ),
        PlayablePart::structure(
            "octave key",
            Vec3::new(0.24, 4.55, 0.1),
            Vec3::new(0.06, 0.12, 0.12),
            BRASS,
        ),
    ];
    for (i, &midi) in SAX_KEYS.iter().enumerate() {
        parts.push(PlayablePart::playable(
            PartKind::SaxKey,
            NoteId::saturating(midi),
            Vec3::new(0.0, 4.3 - i as f32 * 0.32, 0.24),
            Vec3::new(0.24, 0.14, 0.08),
            PEARL,
        ));
    }
    InstrumentEntity::new(id, "Alto Saxophone", InstrumentCategory::Sax, parts)
}
