//! Audio cues using the Web Audio API
//!
//! Every cue is a single procedurally generated tone - no external files.
//! Cues are fire-and-forget; a missing AudioContext just means silence.

use crate::sim::GameEvent;

/// Oscillator shape, mirrors the Web Audio oscillator types we use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// A single enveloped tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub waveform: Waveform,
    /// Seconds
    pub duration: f64,
}

/// Peak gain of a tone at full volume
pub const TONE_GAIN: f32 = 0.1;
/// Gain the envelope decays to by the end of the tone
pub const TONE_FLOOR: f32 = 0.01;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Run starts - short hop blip
    Start,
    /// Carrot eaten
    Collect,
    /// Hit a rock
    GameOver,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        match self {
            SoundEffect::Start => Tone {
                frequency: 400.0,
                waveform: Waveform::Square,
                duration: 0.1,
            },
            SoundEffect::Collect => Tone {
                frequency: 800.0,
                waveform: Waveform::Sine,
                duration: 0.1,
            },
            SoundEffect::GameOver => Tone {
                frequency: 150.0,
                waveform: Waveform::Sawtooth,
                duration: 0.5,
            },
        }
    }

    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> SoundEffect {
        match event {
            GameEvent::RunStarted => SoundEffect::Start,
            GameEvent::Collected { .. } => SoundEffect::Collect,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, TONE_FLOOR, TONE_GAIN, Waveform};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 0.8 }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Set effective volume (0.0 - 1.0), see `Settings::effective_volume`
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let tone = effect.tone();
            let Some((osc, gain)) = create_osc(ctx, tone.frequency, oscillator_type(tone.waveform))
            else {
                return;
            };
            let t = ctx.current_time();
            let peak = TONE_GAIN * self.volume;

            gain.gain().set_value_at_time(peak, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(TONE_FLOOR.min(peak), t + tone.duration)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + tone.duration).ok();
        }
    }

    fn oscillator_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
        }
    }

    /// Create an oscillator routed through a gain node to the speakers
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_cues() {
        assert_eq!(SoundEffect::for_event(&GameEvent::RunStarted), SoundEffect::Start);
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Collected { score: 10 }),
            SoundEffect::Collect
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::GameOver { score: 10 }),
            SoundEffect::GameOver
        );
    }

    #[test]
    fn test_game_over_is_the_long_low_cue() {
        let cue = SoundEffect::GameOver.tone();
        assert_eq!(cue.waveform, Waveform::Sawtooth);
        assert!(cue.duration > SoundEffect::Collect.tone().duration);
        assert!(cue.frequency < SoundEffect::Start.tone().frequency);
    }
}
