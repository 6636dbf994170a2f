#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::compressor::{Compressor, CompressorParams},
    synth::{
        message::{MessageReceiver, SynthMessage},
        voice::Voice,
    },
    MAX_BLOCK_SIZE,
};

/*
Voice Pool and Master Bus
=========================

Every trigger produces a brand-new, self-contained voice graph. The pool
owns a fixed set of slots so the audio thread never allocates a Vec:

  UI thread ──Play(graph)──→ [ring buffer] ──→ VoicePool
                                                │
                       ┌────────────────────────┘
                       ▼
   voice 0 ─┐
   voice 1 ─┼──→ (+) ──→ × master_gain ──→ compressor ──→ output
   voice N ─┘

When every slot is busy the oldest voice is dropped to make room, so rapid
playing always hears the newest hit.

Rendering happens in 64-sample control blocks. Vibrato and other block-rate
modulation update once per control block regardless of how large a buffer
the device asks for.
*/

pub const CONTROL_BLOCK: usize = 64;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusSettings {
    pub master_gain: f32,
    pub max_voices: usize,
    pub compressor: CompressorParams,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            master_gain: 0.72,
            max_voices: 64,
            compressor: CompressorParams::default(),
        }
    }
}

pub struct VoicePool<R: MessageReceiver> {
    voices: Vec<Voice>,
    rx: R,
    master_gain: f32,
    compressor: Compressor,
    temp_buffer: Vec<f32>,
    frame_counter: u64,
}

impl<R: MessageReceiver> VoicePool<R> {
    pub fn new(sample_rate: f32, settings: BusSettings, rx: R) -> Self {
        let voices = (0..settings.max_voices.max(1))
            .map(|_| Voice::new(sample_rate))
            .collect();

        Self {
            voices,
            rx,
            master_gain: settings.master_gain,
            compressor: Compressor::new(settings.compressor, sample_rate),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process control messages
        while let Some(msg) = self.rx.pop() {
            match msg {
                SynthMessage::Play(graph) => {
                    let age = self.frame_counter;
                    self.allocate_voice().start(graph, age);
                }
                SynthMessage::Silence => {
                    for voice in &mut self.voices {
                        voice.free();
                    }
                }
            }
        }

        for block in out.chunks_mut(CONTROL_BLOCK) {
            self.render_control_block(block);
        }
    }

    fn render_control_block(&mut self, out: &mut [f32]) {
        out.fill(0.0);
        let frames = &mut self.temp_buffer[..out.len()];
        for voice in self.voices.iter_mut().filter(|v| v.is_active()) {
            voice.render(frames);
            for (o, v) in out.iter_mut().zip(frames.iter()) {
                *o += v;
            }
        }

        for sample in out.iter_mut() {
            *sample *= self.master_gain;
        }
        self.compressor.process(out);

        self.frame_counter += out.len() as u64;
    }

    fn allocate_voice(&mut self) -> &mut Voice {
        // First pass: free slot; otherwise steal the oldest voice
        let idx = self
            .voices
            .iter()
            .position(|v| v.is_free())
            .or_else(|| {
                self.voices
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, v)| v.age())
                    .map(|(idx, _)| idx)
            })
            .unwrap_or(0);

        &mut self.voices[idx]
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn capacity(&self) -> usize {
        self.voices.len()
    }

    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    /// Current compressor gain reduction in dB.
    pub fn reduction_db(&self) -> f32 {
        self.compressor.reduction_db()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame_counter
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::graph::{
        envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode,
    };

    const SAMPLE_RATE: f32 = 8_000.0;

    fn blip(freq: f32) -> Box<dyn GraphNode> {
        Box::new(
            OscNode::sine()
                .with_frequency(freq)
                .amplify(EnvNode::ramp(0.01, 0.005, 0.05))
                .gate(0.0, 0.06),
        )
    }

    #[test]
    fn plays_and_retires_voices() {
        let mut queue = VecDeque::new();
        queue.push_back(SynthMessage::Play(blip(440.0)));
        queue.push_back(SynthMessage::Play(blip(660.0)));
        let mut pool = VoicePool::new(SAMPLE_RATE, BusSettings::default(), queue);

        let mut out = vec![0.0; 128];
        pool.render_block(&mut out);
        assert_eq!(pool.active_voices(), 2);
        assert!(out.iter().any(|&s| s.abs() > 1e-4));

        let mut tail = vec![0.0; 1024];
        pool.render_block(&mut tail);
        assert_eq!(pool.active_voices(), 0);
    }

    #[test]
    fn steals_oldest_when_full() {
        let settings = BusSettings {
            max_voices: 2,
            ..BusSettings::default()
        };
        let mut pool = VoicePool::new(SAMPLE_RATE, settings, VecDeque::new());
        let mut out = vec![0.0; 64];

        for freq in [220.0, 330.0, 440.0] {
            pool.rx.push_back(SynthMessage::Play(blip(freq)));
            pool.render_block(&mut out);
        }

        assert_eq!(pool.active_voices(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn silence_frees_everything() {
        let mut pool = VoicePool::new(SAMPLE_RATE, BusSettings::default(), VecDeque::new());
        pool.rx.push_back(SynthMessage::Play(blip(440.0)));
        let mut out = vec![0.0; 64];
        pool.render_block(&mut out);
        assert_eq!(pool.active_voices(), 1);

        pool.rx.push_back(SynthMessage::Silence);
        pool.render_block(&mut out);
        assert_eq!(pool.active_voices(), 0);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn master_gain_scales_output() {
        let loud = BusSettings {
            master_gain: 1.0,
            ..BusSettings::default()
        };
        let quiet = BusSettings {
            master_gain: 0.5,
            ..BusSettings::default()
        };

        let mut a = VoicePool::new(SAMPLE_RATE, loud, VecDeque::new());
        let mut b = VoicePool::new(SAMPLE_RATE, quiet, VecDeque::new());
        a.rx.push_back(SynthMessage::Play(blip(440.0)));
        b.rx.push_back(SynthMessage::Play(blip(440.0)));

        let mut out_a = vec![0.0; 64];
        let mut out_b = vec![0.0; 64];
        a.render_block(&mut out_a);
        b.render_block(&mut out_b);

        // Both below the compressor knee, so the gain ratio survives
        let peak_a = out_a.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let peak_b = out_b.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak_b > 0.0);
        assert!((peak_a / peak_b - 2.0).abs() < 0.05, "ratio {}", peak_a / peak_b);
    }
}
