//! Audio trigger: instrument category -> synthesizer patch -> bounded note.
//!
//! The synthesis engine itself sits behind [`SynthBackend`]. Every failure
//! below this layer is logged and swallowed; playing a note never fails from
//! the caller's point of view.

use super::notes::NoteId;
use super::scene::InstrumentCategory;
use crate::constants::VELOCITY_JITTER;
use fnv::FnvHashMap;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

/// Preset synthesis configuration for one instrument category.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthPatch {
    pub waveform: Waveform,
    /// Second oscillator mixed in an octave up (0 disables it).
    pub overtone_gain: f32,
    pub attack_sec: f64,
    /// Sustain length before the release starts.
    pub note_duration_sec: f64,
    pub release_sec: f64,
    pub velocity: f32,
    /// Lowpass cutoff; `None` leaves the tone unfiltered.
    pub lowpass_hz: Option<f32>,
    pub vibrato_hz: f32,
    pub vibrato_cents: f32,
    pub reverb_send: f32,
}

impl SynthPatch {
    pub fn for_category(category: InstrumentCategory) -> Self {
        match category {
            // "2n" at 120 bpm with a one second release, like the sampled grand
            InstrumentCategory::Piano => Self {
                waveform: Waveform::Triangle,
                overtone_gain: 0.25,
                attack_sec: 0.005,
                note_duration_sec: 1.0,
                release_sec: 1.0,
                velocity: 0.8,
                lowpass_hz: Some(4200.0),
                vibrato_hz: 0.0,
                vibrato_cents: 0.0,
                reverb_send: 0.4,
            },
            InstrumentCategory::Guitar => Self {
                waveform: Waveform::Saw,
                overtone_gain: 0.0,
                attack_sec: 0.003,
                note_duration_sec: 0.8,
                release_sec: 0.6,
                velocity: 0.6,
                lowpass_hz: Some(2200.0),
                vibrato_hz: 0.0,
                vibrato_cents: 0.0,
                reverb_send: 0.3,
            },
            InstrumentCategory::Sax => Self {
                waveform: Waveform::Square,
                overtone_gain: 0.15,
                attack_sec: 0.04,
                note_duration_sec: 0.6,
                release_sec: 0.2,
                velocity: 0.5,
                lowpass_hz: Some(1800.0),
                vibrato_hz: 5.5,
                vibrato_cents: 12.0,
                reverb_send: 0.35,
            },
        }
    }

    /// Total audible length, sustain plus release tail.
    #[inline]
    pub fn total_sec(&self) -> f64 {
        self.note_duration_sec + self.release_sec
    }
}

/// The synthesis collaborator: something that can start sounding and play a
/// note of bounded length. Overlapping notes follow the backend's polyphony.
pub trait SynthBackend {
    /// One-time user-gesture gated start of the audio output.
    fn unlock(&mut self) -> anyhow::Result<()>;

    fn trigger(
        &mut self,
        patch: &SynthPatch,
        note: NoteId,
        velocity: f32,
        duration_sec: f64,
    ) -> anyhow::Result<()>;
}

pub struct AudioTrigger<B: SynthBackend> {
    backend: B,
    patches: FnvHashMap<InstrumentCategory, SynthPatch>,
    unlocked: bool,
    rng: StdRng,
    jitter: f32,
}

impl<B: SynthBackend> AudioTrigger<B> {
    /// Trigger with one preset patch per category.
    pub fn new(backend: B, seed: u64) -> Self {
        let patches = InstrumentCategory::ALL
            .iter()
            .map(|&c| (c, SynthPatch::for_category(c)))
            .collect();
        Self::with_patches(backend, patches, seed)
    }

    pub fn with_patches(
        backend: B,
        patches: FnvHashMap<InstrumentCategory, SynthPatch>,
        seed: u64,
    ) -> Self {
        Self {
            backend,
            patches,
            unlocked: false,
            rng: StdRng::seed_from_u64(seed),
            jitter: VELOCITY_JITTER,
        }
    }

    pub fn set_velocity_jitter(&mut self, jitter: f32) {
        self.jitter = jitter.clamp(0.0, 1.0);
    }

    /// Idempotent: only the first successful unlock reaches the backend.
    pub fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        match self.backend.unlock() {
            Ok(()) => {
                self.unlocked = true;
                log::info!("[audio] unlocked");
            }
            Err(e) => log::warn!("[audio] unlock failed: {:?}", e),
        }
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn patch(&self, category: InstrumentCategory) -> Option<&SynthPatch> {
        self.patches.get(&category)
    }

    /// Play `note` on the synth bound to `category`. Returns whether a note
    /// was handed to the backend; errors are logged, never propagated.
    pub fn play(&mut self, category: InstrumentCategory, note: NoteId) -> bool {
        if !self.unlocked {
            log::warn!("[audio] {} {} dropped: audio locked", category, note);
            return false;
        }
        let Some(patch) = self.patches.get(&category) else {
            log::warn!("[audio] no synth configured for {}", category);
            return false;
        };
        let velocity = if self.jitter > 0.0 {
            (patch.velocity + self.rng.gen_range(-self.jitter..=self.jitter)).clamp(0.05, 1.0)
        } else {
            patch.velocity
        };
        match self
            .backend
            .trigger(patch, note, velocity, patch.note_duration_sec)
        {
            Ok(()) => {
                log::debug!("[audio] {} {} vel={:.2}", category, note, velocity);
                true
            }
            Err(e) => {
                log::warn!("[audio] {} {} failed: {:?}", category, note, e);
                false
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
