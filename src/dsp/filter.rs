use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
| type              | passes          | rejects      | output tap            |
| ----------------- | --------------- | ------------ | --------------------- |
| low-pass          | below cutoff    | above cutoff | v2                    |
| high-pass         | above cutoff    | below cutoff | x - k·v1 - v2         |
| band-pass         | around cutoff   | outside      | k·v1 (0 dB at center) |
| notch / band-stop | outside         | around       | x - k·v1              |
| peaking (bell)    | everything      | nothing      | x + k·(A² - 1)·v1     |

k = 1 / Q. Themes never give the bell a gain, so it runs at 0 dB (A = 1)
where the correction term vanishes and the output is the input. The
integrators still run so the state matches every other response.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    Notch,
    Peaking,
}

pub struct FilterOutputs {
    pub lowpass: f32,
    pub bandpass: f32,
    pub highpass: f32,
    pub notch: f32,
}

pub const MIN_Q: f32 = 0.05;
pub const MAX_Q: f32 = 40.0;

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub q: f32,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz: 1000.0,
            q: std::f32::consts::FRAC_1_SQRT_2,
            filter_type,
        }
    }

    pub fn with_cutoff(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            cutoff_hz,
            ..Self::new(filter_type)
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::with_cutoff(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::with_cutoff(FilterType::HighPass, cutoff_hz)
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::with_cutoff(FilterType::BandPass, cutoff_hz)
    }

    pub fn notch(cutoff_hz: f32) -> Self {
        Self::with_cutoff(FilterType::Notch, cutoff_hz)
    }

    pub fn peaking(cutoff_hz: f32) -> Self {
        Self::with_cutoff(FilterType::Peaking, cutoff_hz)
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        // Keep the prewarped cutoff safely below Nyquist
        let cutoff = self.cutoff_hz.clamp(1.0, ctx.sample_rate * 0.49);
        (PI * cutoff / ctx.sample_rate).tan()
    }

    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> FilterOutputs {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        FilterOutputs {
            lowpass: v2,
            bandpass: v1,
            highpass: sample - k * v1 - v2,
            notch: sample - k * v1,
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = 1.0 / self.q.clamp(MIN_Q, MAX_Q);

        for sample in buffer.iter_mut() {
            let input = *sample;
            let outputs = self.next_sample(input, k, g);
            *sample = match self.filter_type {
                FilterType::LowPass => outputs.lowpass,
                FilterType::HighPass => outputs.highpass,
                FilterType::BandPass => k * outputs.bandpass,
                FilterType::Notch => outputs.notch,
                FilterType::Peaking => input,
            }
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_q(&mut self, q: f32) {
        self.q = q;
    }
}
