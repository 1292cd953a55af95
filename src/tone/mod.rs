//! Tone playback — frequencies for swaras and the players that sound them.

pub mod envelope;
pub mod oscillator;
pub mod player;
pub mod render;

pub use envelope::ToneEnvelope;
pub use oscillator::Waveform;
pub use player::{PlayedSequence, SilentPlayer, SpeakerPlayer, WavPlayer};
pub use render::ToneRenderer;

use tracing::warn;

use crate::config::Config;
use crate::theory::{Key, Swara};

/// Something that can sound a sequence of pitches.
///
/// Fire-and-forget: implementations report failures through logging, and
/// callers never wait for playback to finish.
pub trait TonePlayer {
    fn play_sequence(&mut self, frequencies: &[f64], note_seconds: f64);
}

impl<P: TonePlayer + ?Sized> TonePlayer for Box<P> {
    fn play_sequence(&mut self, frequencies: &[f64], note_seconds: f64) {
        (**self).play_sequence(frequencies, note_seconds);
    }
}

/// Frequency of a swara under `key`. S' lands an octave above S.
pub fn frequency(reference_hz: f64, key: Key, swara: Swara) -> f64 {
    let semitones = f64::from(key.semitone()) + f64::from(swara.offset());
    reference_hz * 2.0f64.powf(semitones / 12.0)
}

/// Frequencies for a token sequence, in order.
pub fn frequencies(reference_hz: f64, key: Key, swaras: &[Swara]) -> Vec<f64> {
    swaras
        .iter()
        .map(|&s| frequency(reference_hz, key, s))
        .collect()
}

/// The speaker if one can be opened, otherwise a silent stand-in.
pub fn default_player(config: &Config) -> Box<dyn TonePlayer> {
    match SpeakerPlayer::open(config) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("audio unavailable, playback disabled: {e}");
            Box::new(SilentPlayer::new())
        }
    }
}
