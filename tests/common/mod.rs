#![allow(dead_code)]

use glam::Vec2;
use instrument_stage::core::{
    NoteId, PartRef, SceneRegistry, Stage, StageParams, SynthBackend, SynthPatch, Waveform,
};

/// One note handed to the synth.
#[derive(Clone, Debug, PartialEq)]
pub struct Played {
    pub waveform: Waveform,
    pub note: NoteId,
    pub velocity: f32,
    pub duration_sec: f64,
}

/// Records unlocks and triggers; can be told to fail either.
#[derive(Default)]
pub struct RecordingSynth {
    pub unlock_calls: usize,
    pub played: Vec<Played>,
    pub fail_unlock: bool,
    pub fail_trigger: bool,
}

impl SynthBackend for RecordingSynth {
    fn unlock(&mut self) -> anyhow::Result<()> {
        self.unlock_calls += 1;
        if self.fail_unlock {
            anyhow::bail!("gesture rejected");
        }
        Ok(())
    }

    fn trigger(
        &mut self,
        patch: &SynthPatch,
        note: NoteId,
        velocity: f32,
        duration_sec: f64,
    ) -> anyhow::Result<()> {
        if self.fail_trigger {
            anyhow::bail!("node creation failed");
        }
        self.played.push(Played {
            waveform: patch.waveform,
            note,
            velocity,
            duration_sec,
        });
        Ok(())
    }
}

pub fn stage() -> Stage<RecordingSynth> {
    Stage::new(
        SceneRegistry::stage_default(),
        RecordingSynth::default(),
        StageParams::default(),
    )
}

/// Where the centre of `part` lands on screen right now.
pub fn ndc_of(stage: &Stage<RecordingSynth>, part: PartRef, now_sec: f64) -> Vec2 {
    let xf = stage.current_transforms(now_sec)[part.entity];
    let local = stage.registry().part(part).expect("part exists").bounds.center();
    let world = xf.matrix().transform_point3(local);
    stage.camera().view_proj().project_point3(world).truncate()
}

pub fn note(name: &str) -> NoteId {
    name.parse().expect("valid note name")
}

/// The piano part sounding `name`.
pub fn piano_key(stage: &Stage<RecordingSynth>, name: &str) -> PartRef {
    let piano = stage.registry().get(0).expect("piano");
    PartRef::new(0, piano.part_with_note(note(name)).expect("key exists"))
}
