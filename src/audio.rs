//! WebAudio synthesis behind [`SynthBackend`].
//!
//! One shared context feeds a master gain and a convolution reverb bus.
//! Every `trigger` builds a short-lived oscillator graph that stops itself.

use crate::constants::{
    MASTER_GAIN, NOTE_START_LEAD_SEC, NOTE_STOP_PAD_SEC, REVERB_DECAY_SEC, REVERB_WET,
};
use crate::core::{NoteId, SynthBackend, SynthPatch, Waveform};
use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(what: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{} failed: {:?}", what, e)
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| js_err(label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// Stereo noise with an exponential tail, filled deterministically.
fn impulse_response(audio_ctx: &web::AudioContext, seconds: f32) -> anyhow::Result<web::AudioBuffer> {
    let sr = audio_ctx.sample_rate();
    let len = ((sr * seconds) as u32).max(1);
    let ir = audio_ctx
        .create_buffer(2, len, sr)
        .map_err(|e| js_err("create_buffer", e))?;
    // xorshift32, one stream per channel
    let mut seeds: [u32; 2] = [0x1234_ABCD, 0x7890_FEDC];
    let dt = 1.0 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf = vec![0.0_f32; len as usize];
        for (i, sample) in buf.iter_mut().enumerate() {
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let n = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            // -60 dB at `seconds`
            *sample = n * (-6.9 * t / seconds).exp();
        }
        ir.copy_to_channel(&mut buf, ch as i32)
            .map_err(|e| js_err("copy_to_channel", e))?;
    }
    Ok(ir)
}

pub struct WebAudioSynth {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
    reverb_in: web::GainNode,
}

impl WebAudioSynth {
    /// Build the context and the shared buses. The context starts suspended
    /// until [`SynthBackend::unlock`] runs from a user gesture.
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| js_err("AudioContext", e))?;
        let master_gain = create_gain(&audio_ctx, MASTER_GAIN, "master gain")?;
        master_gain
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| js_err("connect master", e))?;

        let reverb_in = create_gain(&audio_ctx, 1.0, "reverb in")?;
        let reverb = web::ConvolverNode::new(&audio_ctx).map_err(|e| js_err("ConvolverNode", e))?;
        reverb.set_normalize(true);
        reverb.set_buffer(Some(&impulse_response(&audio_ctx, REVERB_DECAY_SEC)?));
        let reverb_wet = create_gain(&audio_ctx, REVERB_WET, "reverb wet")?;
        _ = reverb_in.connect_with_audio_node(&reverb);
        _ = reverb.connect_with_audio_node(&reverb_wet);
        _ = reverb_wet.connect_with_audio_node(&master_gain);

        Ok(Self {
            audio_ctx,
            master_gain,
            reverb_in,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.audio_ctx
    }
}

impl SynthBackend for WebAudioSynth {
    fn unlock(&mut self) -> anyhow::Result<()> {
        if self.audio_ctx.state() == web::AudioContextState::Running {
            return Ok(());
        }
        let promise: js_sys::Promise = self.audio_ctx.resume().map_err(|e| js_err("resume", e))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn trigger(
        &mut self,
        patch: &SynthPatch,
        note: NoteId,
        velocity: f32,
        duration_sec: f64,
    ) -> anyhow::Result<()> {
        let ctx = &self.audio_ctx;
        let t0 = ctx.current_time() + NOTE_START_LEAD_SEC;
        let release_at = t0 + duration_sec;
        let stop_at = release_at + patch.release_sec + NOTE_STOP_PAD_SEC;
        let freq = note.frequency_hz();

        let env = create_gain(ctx, 0.0, "envelope")?;
        let gain = env.gain();
        _ = gain.set_value_at_time(0.0, t0);
        _ = gain.linear_ramp_to_value_at_time(velocity, t0 + patch.attack_sec);
        _ = gain.set_value_at_time(velocity, release_at);
        _ = gain.linear_ramp_to_value_at_time(0.0, release_at + patch.release_sec);

        // Everything upstream of the envelope joins here.
        let tone_out: web::AudioNode = match patch.lowpass_hz {
            Some(hz) => {
                let lp = web::BiquadFilterNode::new(ctx).map_err(|e| js_err("BiquadFilterNode", e))?;
                lp.set_type(web::BiquadFilterType::Lowpass);
                lp.frequency().set_value(hz);
                lp.connect_with_audio_node(&env)
                    .map_err(|e| js_err("connect lowpass", e))?;
                lp.into()
            }
            None => env.clone().into(),
        };

        let mut sources = Vec::with_capacity(3);
        let osc = web::OscillatorNode::new(ctx).map_err(|e| js_err("OscillatorNode", e))?;
        osc.set_type(oscillator_type(patch.waveform));
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&tone_out)
            .map_err(|e| js_err("connect osc", e))?;

        if patch.overtone_gain > 0.0 {
            let over = web::OscillatorNode::new(ctx).map_err(|e| js_err("OscillatorNode", e))?;
            over.set_type(web::OscillatorType::Sine);
            over.frequency().set_value(freq * 2.0);
            let over_gain = create_gain(ctx, patch.overtone_gain, "overtone")?;
            _ = over.connect_with_audio_node(&over_gain);
            _ = over_gain.connect_with_audio_node(&tone_out);
            sources.push(over);
        }

        if patch.vibrato_hz > 0.0 && patch.vibrato_cents > 0.0 {
            let lfo = web::OscillatorNode::new(ctx).map_err(|e| js_err("OscillatorNode", e))?;
            lfo.set_type(web::OscillatorType::Sine);
            lfo.frequency().set_value(patch.vibrato_hz);
            let depth = create_gain(ctx, patch.vibrato_cents, "vibrato depth")?;
            _ = lfo.connect_with_audio_node(&depth);
            _ = depth.connect_with_audio_param(&osc.detune());
            sources.push(lfo);
        }
        sources.push(osc);

        env.connect_with_audio_node(&self.master_gain)
            .map_err(|e| js_err("connect envelope", e))?;
        if patch.reverb_send > 0.0 {
            let send = create_gain(ctx, patch.reverb_send, "reverb send")?;
            _ = env.connect_with_audio_node(&send);
            _ = send.connect_with_audio_node(&self.reverb_in);
        }

        for src in &sources {
            src.start_with_when(t0).map_err(|e| js_err("start", e))?;
            src.stop_with_when(stop_at).map_err(|e| js_err("stop", e))?;
        }
        Ok(())
    }
}
