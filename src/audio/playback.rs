//! Audio-thread side of the engine: drains commands and feeds the device.

use std::collections::VecDeque;

use ringbuf::traits::Consumer;
use ringbuf::HeapCons;

/// Output samples are hard-clamped to `[-CEILING, CEILING]`.
const CEILING: f32 = 0.95;

/// Messages from the main thread to the audio thread.
#[derive(Debug)]
pub enum PlaybackCommand {
    /// Queue interleaved samples after whatever is already queued.
    Enqueue(Vec<f32>),
    /// Master volume, clamped to `0.0..=1.0` when applied.
    SetVolume(f32),
    /// Drop everything queued.
    Flush,
}

/// State owned by the cpal callback.
pub struct Playback {
    commands: HeapCons<PlaybackCommand>,
    queue: VecDeque<f32>,
    volume: f32,
}

impl Playback {
    pub fn new(commands: HeapCons<PlaybackCommand>) -> Self {
        Self {
            commands,
            queue: VecDeque::new(),
            volume: 1.0,
        }
    }

    /// Fill one device buffer. Underruns are padded with silence.
    pub fn fill(&mut self, output: &mut [f32]) {
        while let Some(cmd) = self.commands.try_pop() {
            match cmd {
                PlaybackCommand::Enqueue(samples) => self.queue.extend(samples),
                PlaybackCommand::SetVolume(v) => self.volume = v.clamp(0.0, 1.0),
                PlaybackCommand::Flush => self.queue.clear(),
            }
        }

        for out in output.iter_mut() {
            let sample = self.queue.pop_front().unwrap_or(0.0) * self.volume;
            *out = sample.clamp(-CEILING, CEILING);
        }
    }

    /// Samples still waiting to be played.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringbuf::{
        traits::{Producer, Split},
        HeapRb,
    };

    fn setup() -> (ringbuf::HeapProd<PlaybackCommand>, Playback) {
        let (prod, cons) = HeapRb::<PlaybackCommand>::new(16).split();
        (prod, Playback::new(cons))
    }

    #[test]
    fn silence_when_idle() {
        let (_prod, mut pb) = setup();
        let mut out = vec![1.0f32; 16];
        pb.fill(&mut out);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn plays_queued_samples_across_buffers() {
        let (mut prod, mut pb) = setup();
        prod.try_push(PlaybackCommand::Enqueue(vec![0.1, 0.2, 0.3]))
            .unwrap();
        prod.try_push(PlaybackCommand::Enqueue(vec![0.4])).unwrap();

        let mut first = vec![0.0f32; 2];
        pb.fill(&mut first);
        assert_eq!(first, vec![0.1, 0.2]);
        assert_eq!(pb.pending(), 2);

        let mut second = vec![9.0f32; 4];
        pb.fill(&mut second);
        assert_eq!(second, vec![0.3, 0.4, 0.0, 0.0]);
    }

    #[test]
    fn volume_scales_output() {
        let (mut prod, mut pb) = setup();
        prod.try_push(PlaybackCommand::SetVolume(0.5)).unwrap();
        prod.try_push(PlaybackCommand::Enqueue(vec![0.4, -0.8]))
            .unwrap();
        let mut out = vec![0.0f32; 2];
        pb.fill(&mut out);
        assert!((out[0] - 0.2).abs() < 1e-6);
        assert!((out[1] + 0.4).abs() < 1e-6);
    }

    #[test]
    fn flush_discards_queue() {
        let (mut prod, mut pb) = setup();
        prod.try_push(PlaybackCommand::Enqueue(vec![0.5; 32]))
            .unwrap();
        prod.try_push(PlaybackCommand::Flush).unwrap();
        prod.try_push(PlaybackCommand::Enqueue(vec![0.25])).unwrap();
        let mut out = vec![0.0f32; 2];
        pb.fill(&mut out);
        assert_eq!(out, vec![0.25, 0.0]);
    }

    #[test]
    fn output_is_clamped() {
        let (mut prod, mut pb) = setup();
        prod.try_push(PlaybackCommand::Enqueue(vec![2.0, -2.0]))
            .unwrap();
        let mut out = vec![0.0f32; 2];
        pb.fill(&mut out);
        assert_eq!(out, vec![CEILING, -CEILING]);
    }
}
