//! Audio engine — cpal output stream fed through a lock-free command queue.
//!
//! The engine owns the stream; the main thread pushes [`PlaybackCommand`]s
//! into a ring buffer which the audio callback drains on every buffer.

pub mod playback;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    traits::{Producer, Split},
    HeapRb,
};
use thiserror::Error;
use tracing::{error, info};

pub use playback::{Playback, PlaybackCommand};

/// Capacity of the command queue.
const COMMAND_CAPACITY: usize = 256;

/// Audio engine errors.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device found")]
    NoOutputDevice,
    #[error("device config error: {0}")]
    DeviceConfig(String),
    #[error("stream build error: {0}")]
    StreamBuild(String),
    #[error("stream play error: {0}")]
    StreamPlay(String),
    #[error("audio command queue is full")]
    QueueFull,
}

/// Owns the output stream and the producer half of the command queue.
pub struct AudioEngine {
    // Dropping the stream stops output.
    _stream: cpal::Stream,
    commands: ringbuf::HeapProd<PlaybackCommand>,
    sample_rate: u32,
    channels: u16,
}

impl AudioEngine {
    /// Open the default output device with its default configuration.
    pub fn new() -> Result<Self, AudioError> {
        let device = cpal::default_host()
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceConfig(e.to_string()))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        let (commands, consumer) = HeapRb::<PlaybackCommand>::new(COMMAND_CAPACITY).split();
        let mut playback = Playback::new(consumer);

        let stream_config = cpal::StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };
        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| playback.fill(data),
                |err: cpal::StreamError| error!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;
        stream
            .play()
            .map_err(|e| AudioError::StreamPlay(e.to_string()))?;

        info!(sample_rate, channels, "audio output opened");
        Ok(Self {
            _stream: stream,
            commands,
            sample_rate,
            channels,
        })
    }

    fn send(&mut self, cmd: PlaybackCommand) -> Result<(), AudioError> {
        self.commands
            .try_push(cmd)
            .map_err(|_| AudioError::QueueFull)
    }

    /// Queue interleaved samples for playback.
    pub fn enqueue(&mut self, samples: Vec<f32>) -> Result<(), AudioError> {
        self.send(PlaybackCommand::Enqueue(samples))
    }

    pub fn set_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        self.send(PlaybackCommand::SetVolume(volume))
    }

    /// Cut off anything still queued.
    pub fn flush(&mut self) -> Result<(), AudioError> {
        self.send(PlaybackCommand::Flush)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires audio device — run manually with `cargo test -- --ignored`
    fn opens_default_device() {
        let mut engine = AudioEngine::new().expect("no audio device");
        assert!(engine.sample_rate() > 0);
        assert!(engine.channels() > 0);
        assert!(engine.set_volume(0.5).is_ok());
        assert!(engine.enqueue(vec![0.0; 256]).is_ok());
        assert!(engine.flush().is_ok());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AudioError::NoOutputDevice.to_string(),
            "no audio output device found"
        );
        assert_eq!(
            AudioError::QueueFull.to_string(),
            "audio command queue is full"
        );
        assert_eq!(
            AudioError::StreamBuild("x".into()).to_string(),
            "stream build error: x"
        );
    }
}
