//! Offline rendering of tone sequences into interleaved sample buffers.

use super::envelope::ToneEnvelope;
use super::oscillator::Waveform;

/// Renders frequency sequences as back-to-back enveloped notes.
#[derive(Debug, Clone)]
pub struct ToneRenderer {
    sample_rate: u32,
    channels: u16,
    waveform: Waveform,
    envelope: ToneEnvelope,
}

impl ToneRenderer {
    pub fn new(sample_rate: u32, channels: u16, waveform: Waveform) -> Self {
        Self {
            sample_rate,
            channels: channels.max(1),
            waveform,
            envelope: ToneEnvelope::default(),
        }
    }

    pub fn with_envelope(mut self, envelope: ToneEnvelope) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Frames occupied by one note of `seconds`.
    pub fn frames_per_note(&self, seconds: f64) -> usize {
        (seconds.max(0.0) * self.sample_rate as f64).round() as usize
    }

    /// Render one note, appending interleaved samples to `out`.
    pub fn render_note_into(&self, frequency: f64, seconds: f64, out: &mut Vec<f32>) {
        let frames = self.frames_per_note(seconds);
        let sr = self.sample_rate as f64;
        let channels = self.channels as usize;
        out.reserve(frames * channels);

        let mut phase = 0.0f64;
        let step = frequency / sr;
        for frame in 0..frames {
            let t = frame as f64 / sr;
            let value = (self.waveform.sample(phase) * self.envelope.amplitude(t, seconds)) as f32;
            out.extend(std::iter::repeat(value).take(channels));
            phase = (phase + step).fract();
        }
    }

    /// Render a whole sequence, one note per frequency, each `seconds` long.
    pub fn render_sequence(&self, frequencies: &[f64], seconds: f64) -> Vec<f32> {
        let mut out = Vec::new();
        for &f in frequencies {
            self.render_note_into(f, seconds, &mut out);
        }
        out
    }
}
