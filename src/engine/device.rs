use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use crate::{
    engine::{backend::AudioBackend, error::EngineError},
    synth::{
        message::SynthMessage,
        poly::{BusSettings, VoicePool},
    },
    MAX_BLOCK_SIZE,
};

/// Capacity of the control queue from the UI thread to the audio callback.
const VOICE_QUEUE_SIZE: usize = 256;

/// Live output on the host's default device.
///
/// Voices travel to the callback through a lock-free ring buffer; the
/// callback owns the voice pool and writes the mono master to every channel.
pub struct CpalBackend {
    stream: cpal::Stream,
    tx: Producer<SynthMessage>,
    sample_rate: f32,
    channels: usize,
}

impl CpalBackend {
    pub fn open(settings: BusSettings) -> Result<Self, EngineError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(EngineError::NoDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        log::info!(
            "Starting audio engine on {} ({} ch@{} Hz)",
            device.name().unwrap_or_else(|_| "unknown device".to_string()),
            channels,
            sample_rate
        );

        let (tx, rx) = RingBuffer::<SynthMessage>::new(VOICE_QUEUE_SIZE);
        let mut pool = VoicePool::new(sample_rate, settings, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    pool.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| log::error!("Audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self {
            stream,
            tx,
            sample_rate,
            channels,
        })
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}

impl AudioBackend for CpalBackend {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn submit(&mut self, msg: SynthMessage) -> Result<(), EngineError> {
        self.tx.push(msg).map_err(|_| EngineError::QueueFull)
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.stream.play()?;
        Ok(())
    }
}
