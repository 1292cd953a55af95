//! Exponential attack/decay envelope for short swara tones.

/// Gain contour of one note: an exponential rise from `floor` to `peak`
/// over `attack` seconds, then an exponential fall back to `floor` that
/// completes `tail` seconds before the note ends. Silent afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEnvelope {
    pub attack: f64,
    pub tail: f64,
    pub peak: f64,
    pub floor: f64,
}

impl Default for ToneEnvelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            tail: 0.02,
            peak: 0.2,
            floor: 0.0001,
        }
    }
}

impl ToneEnvelope {
    /// Gain at time `t` into a note lasting `duration` seconds.
    pub fn amplitude(&self, t: f64, duration: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        let decay_end = (duration - self.tail).max(self.attack);
        if t < self.attack {
            let x = t / self.attack;
            self.floor * (self.peak / self.floor).powf(x)
        } else if t < decay_end {
            let x = (t - self.attack) / (decay_end - self.attack);
            self.peak * (self.floor / self.peak).powf(x)
        } else {
            0.0
        }
    }
}
