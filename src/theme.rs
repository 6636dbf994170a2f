//! Fixed table of visual/audio themes cycled by the mode pad.

use crate::{
    dsp::{filter::FilterType, oscillator::OscillatorWaveform},
    fx::color::Rgba,
};

/// Sound design parameters a theme hands to the pad voice builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeAudioProfile {
    /// MIDI note of scale degree 0 in the lowest octave.
    pub root: i32,
    /// Semitone offsets from the root, one per pad column of the scale.
    pub scale: &'static [i32],
    pub waveforms: &'static [OscillatorWaveform],
    pub filter: FilterType,
    pub filter_base: f32,
    pub q: f32,
    /// Seconds after the trigger at which the amplitude ramp lands on the floor.
    pub release: f32,
    pub lfo_rate: f32,
    /// Vibrato depth in Hz.
    pub vibrato: f32,
    pub noise: f32,
    /// Frequency ratios of the secondary oscillator.
    pub harmonic: &'static [f32],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Gradient stops, top to bottom.
    pub background: [&'static str; 2],
    pub grid_line: Rgba,
    pub accent: &'static str,
    pub palette: &'static [&'static str],
    pub audio: ThemeAudioProfile,
}

impl Theme {
    /// Palette entry for `index`, wrapping around.
    pub fn palette_at(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }
}

use FilterType::*;
use OscillatorWaveform::{Sawtooth, Sine, Square, Triangle};

pub static THEMES: [Theme; 5] = [
    Theme {
        name: "Nocturne Glass",
        background: ["#1b2e6c", "#05060f"],
        grid_line: Rgba::new(164, 197, 255, 0.2),
        accent: "#8ff4ff",
        palette: &[
            "#8ff4ff", "#78b7ff", "#9d98ff", "#8effd6", "#f9ff8f", "#ffb8f7", "#9fdcff", "#ffcf99",
        ],
        audio: ThemeAudioProfile {
            root: 46,
            scale: &[0, 3, 5, 7, 10],
            waveforms: &[Triangle, Sine, Sawtooth],
            filter: BandPass,
            filter_base: 620.0,
            q: 5.8,
            release: 0.23,
            lfo_rate: 4.2,
            vibrato: 5.0,
            noise: 0.028,
            harmonic: &[1.0, 1.25, 1.5, 2.0, 0.75],
        },
    },
    Theme {
        name: "Solar Bloom",
        background: ["#7f230d", "#160904"],
        grid_line: Rgba::new(255, 203, 143, 0.2),
        accent: "#ffe06f",
        palette: &[
            "#ffe06f", "#ff9e57", "#ff6d6d", "#ffaf90", "#f7f6d0", "#ffb38f", "#ffd784", "#f8966e",
        ],
        audio: ThemeAudioProfile {
            root: 50,
            scale: &[0, 2, 4, 7, 9],
            waveforms: &[Sawtooth, Triangle, Square],
            filter: LowPass,
            filter_base: 940.0,
            q: 3.8,
            release: 0.18,
            lfo_rate: 6.8,
            vibrato: 3.8,
            noise: 0.034,
            harmonic: &[1.0, 1.33, 1.5, 2.0, 2.5],
        },
    },
    Theme {
        name: "Aqua Drift",
        background: ["#0f4d63", "#031117"],
        grid_line: Rgba::new(142, 245, 255, 0.18),
        accent: "#8fffe6",
        palette: &[
            "#8fffe6", "#6de9ff", "#4ec5ff", "#8ecbff", "#b0f7ff", "#6dd7c6", "#9be8ff", "#76b7ff",
        ],
        audio: ThemeAudioProfile {
            root: 43,
            scale: &[0, 2, 5, 7, 10],
            waveforms: &[Sine, Triangle, Sine],
            filter: HighPass,
            filter_base: 260.0,
            q: 2.4,
            release: 0.27,
            lfo_rate: 2.7,
            vibrato: 7.2,
            noise: 0.02,
            harmonic: &[1.0, 1.125, 1.5, 1.875, 2.0],
        },
    },
    Theme {
        name: "Cyber Mint",
        background: ["#235d2f", "#060b08"],
        grid_line: Rgba::new(165, 255, 188, 0.2),
        accent: "#b6ffa9",
        palette: &[
            "#b6ffa9", "#6fffcb", "#8debc4", "#d3ff94", "#9cffb2", "#6fd2a6", "#e2ffb8", "#8ffff0",
        ],
        audio: ThemeAudioProfile {
            root: 52,
            scale: &[0, 3, 5, 8, 10],
            waveforms: &[Square, Triangle, Sawtooth],
            filter: Notch,
            filter_base: 740.0,
            q: 9.0,
            release: 0.2,
            lfo_rate: 5.2,
            vibrato: 4.6,
            noise: 0.03,
            harmonic: &[1.0, 1.5, 2.0, 2.25, 0.5],
        },
    },
    Theme {
        name: "Velvet Pulse",
        background: ["#4d1743", "#09040d"],
        grid_line: Rgba::new(255, 163, 240, 0.2),
        accent: "#ff9af4",
        palette: &[
            "#ff9af4", "#ffc4f6", "#f2a0ff", "#ff87bc", "#ffb2de", "#ffd5fb", "#ffa6d8", "#d8a8ff",
        ],
        audio: ThemeAudioProfile {
            root: 47,
            scale: &[0, 1, 5, 7, 8],
            waveforms: &[Triangle, Square, Sine],
            filter: Peaking,
            filter_base: 680.0,
            q: 6.2,
            release: 0.25,
            lfo_rate: 3.6,
            vibrato: 6.0,
            noise: 0.025,
            harmonic: &[1.0, 1.2, 1.6, 2.4, 0.8],
        },
    },
];

pub fn theme_count() -> usize {
    THEMES.len()
}

/// Theme at `index`, wrapping around; never fails.
pub fn theme_at(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}
