//! Waveform shapes for rendered tones.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Available waveform shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
    Saw,
}

impl Waveform {
    /// Sample value at `phase` in `[0.0, 1.0)`; output lies in `[-1.0, 1.0]`.
    pub fn sample(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * phase - 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_quarter_peaks() {
        assert!((Waveform::Sine.sample(0.25) - 1.0).abs() < 1e-10);
        assert!(Waveform::Sine.sample(0.0).abs() < 1e-10);
    }

    #[test]
    fn triangle_shape() {
        assert!(Waveform::Triangle.sample(0.0).abs() < 1e-10);
        assert!((Waveform::Triangle.sample(0.25) - 1.0).abs() < 1e-10);
        assert!((Waveform::Triangle.sample(0.75) + 1.0).abs() < 1e-10);
    }

    #[test]
    fn square_and_saw() {
        assert_eq!(Waveform::Square.sample(0.1), 1.0);
        assert_eq!(Waveform::Square.sample(0.6), -1.0);
        assert!((Waveform::Saw.sample(0.5)).abs() < 1e-10);
    }

    #[test]
    fn all_waveforms_bounded() {
        for wf in [
            Waveform::Sine,
            Waveform::Triangle,
            Waveform::Square,
            Waveform::Saw,
        ] {
            for i in 0..1000 {
                let v = wf.sample(i as f64 / 1000.0);
                assert!((-1.0..=1.0).contains(&v), "{wf:?} out of bounds: {v}");
            }
        }
    }

    #[test]
    fn serde_lowercase_names() {
        let wf: Waveform = serde_yaml::from_str("saw").unwrap();
        assert_eq!(wf, Waveform::Saw);
        assert_eq!(serde_yaml::to_string(&Waveform::Sine).unwrap().trim(), "sine");
    }
}
