//! Tone players — speaker output, WAV files, and a silent recorder.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::audio::{AudioEngine, AudioError};
use crate::config::Config;

use super::render::ToneRenderer;
use super::TonePlayer;

/// Sample rate used when rendering without an output device.
pub const OFFLINE_SAMPLE_RATE: u32 = 44_100;

/// Plays sequences on the default output device.
pub struct SpeakerPlayer {
    engine: AudioEngine,
    renderer: ToneRenderer,
}

impl SpeakerPlayer {
    pub fn open(config: &Config) -> Result<Self, AudioError> {
        let mut engine = AudioEngine::new()?;
        engine.set_volume(config.volume)?;
        let renderer = ToneRenderer::new(engine.sample_rate(), engine.channels(), config.waveform);
        Ok(Self { engine, renderer })
    }
}

impl TonePlayer for SpeakerPlayer {
    /// Replaces whatever is still sounding with the new sequence.
    fn play_sequence(&mut self, frequencies: &[f64], note_seconds: f64) {
        let samples = self.renderer.render_sequence(frequencies, note_seconds);
        let result = self
            .engine
            .flush()
            .and_then(|()| self.engine.enqueue(samples));
        if let Err(e) = result {
            warn!("playback failed: {e}");
        }
    }
}

/// Write interleaved samples as a 16-bit PCM WAV file.
pub fn write_wav(
    path: &Path,
    samples: &[f32],
    sample_rate: u32,
    channels: u16,
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample((s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()
}

/// Renders every requested sequence into a WAV file, overwriting it each time.
pub struct WavPlayer {
    path: PathBuf,
    renderer: ToneRenderer,
    volume: f32,
}

impl WavPlayer {
    pub fn new(path: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            path: path.into(),
            renderer: ToneRenderer::new(OFFLINE_SAMPLE_RATE, 1, config.waveform),
            volume: config.volume,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render and write, reporting failures to the caller.
    pub fn write_sequence(&self, frequencies: &[f64], note_seconds: f64) -> Result<(), hound::Error> {
        let mut samples = self.renderer.render_sequence(frequencies, note_seconds);
        for s in samples.iter_mut() {
            *s *= self.volume;
        }
        write_wav(
            &self.path,
            &samples,
            self.renderer.sample_rate(),
            self.renderer.channels(),
        )
    }
}

impl TonePlayer for WavPlayer {
    fn play_sequence(&mut self, frequencies: &[f64], note_seconds: f64) {
        match self.write_sequence(frequencies, note_seconds) {
            Ok(()) => info!(path = %self.path.display(), notes = frequencies.len(), "wrote wav"),
            Err(e) => warn!(path = %self.path.display(), "wav export failed: {e}"),
        }
    }
}

/// One recorded `play_sequence` request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSequence {
    pub frequencies: Vec<f64>,
    pub note_seconds: f64,
}

/// Produces no sound; remembers what it was asked to play.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    pub played: Vec<PlayedSequence>,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&PlayedSequence> {
        self.played.last()
    }
}

impl TonePlayer for SilentPlayer {
    fn play_sequence(&mut self, frequencies: &[f64], note_seconds: f64) {
        info!(notes = frequencies.len(), note_seconds, "silent playback");
        self.played.push(PlayedSequence {
            frequencies: frequencies.to_vec(),
            note_seconds,
        });
    }
}
