// Synthesised audio cues (Web Audio oscillators, no asset files).
use std::cell::RefCell;

use web_sys::{AudioContext, OscillatorType};

use crate::error::{js_message, Error, Result};
use crate::model::Cue;

thread_local! {
    static CTX: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

struct Note {
    freq: f32,
    at: f64,
    len: f64,
}

fn notes(cue: Cue) -> &'static [Note] {
    match cue {
        Cue::Touch => &[
            Note { freq: 660.0, at: 0.0, len: 0.07 },
            Note { freq: 880.0, at: 0.07, len: 0.09 },
        ],
        Cue::Chosen => &[
            Note { freq: 523.0, at: 0.0, len: 0.12 },
            Note { freq: 659.0, at: 0.12, len: 0.12 },
            Note { freq: 784.0, at: 0.24, len: 0.35 },
        ],
    }
}

/// Plays `cue`, logging instead of failing.
pub fn play(cue: Cue) {
    if let Err(e) = try_play(cue) {
        log::debug!("cue {:?} not played: {}", cue, e);
    }
}

fn try_play(cue: Cue) -> Result<()> {
    CTX.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new().map_err(audio_err)?);
        }
        let Some(ctx) = slot.as_ref() else {
            return Ok(());
        };
        // Browsers start contexts suspended until a user gesture.
        ctx.resume().map_err(audio_err)?;
        let now = ctx.current_time();
        for n in notes(cue) {
            schedule(ctx, n, now)?;
        }
        Ok(())
    })
}

fn schedule(ctx: &AudioContext, n: &Note, now: f64) -> Result<()> {
    let osc = ctx.create_oscillator().map_err(audio_err)?;
    let gain = ctx.create_gain().map_err(audio_err)?;
    let start = now + n.at;
    osc.set_type(OscillatorType::Sine);
    osc.frequency().set_value(n.freq);
    gain.gain().set_value_at_time(0.0001, start).map_err(audio_err)?;
    gain.gain()
        .linear_ramp_to_value_at_time(0.2, start + 0.01)
        .map_err(audio_err)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.0001, start + n.len)
        .map_err(audio_err)?;
    osc.connect_with_audio_node(&gain).map_err(audio_err)?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(audio_err)?;
    osc.start_with_when(start).map_err(audio_err)?;
    osc.stop_with_when(start + n.len + 0.01).map_err(audio_err)?;
    Ok(())
}

fn audio_err(v: wasm_bindgen::JsValue) -> Error {
    Error::Audio(js_message(&v))
}
