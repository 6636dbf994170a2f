use crate::{
    dsp::filter::{FilterType, SVFilter, MAX_Q, MIN_Q},
    graph::node::{GraphNode, Modulatable, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

A filter removes or emphasizes frequencies. Every pad voice pushes its two
oscillators through one resonant filter whose type comes from the theme, so
the filter is most of what gives each theme its color.

Filter Types:
-------------

Lowpass:  passes below the cutoff. Warm, rounded (Solar Bloom).
Highpass: passes above the cutoff. Thin, airy (Aqua Drift).
Bandpass: passes a band around the cutoff. Focused, vocal (Nocturne Glass).
Notch:    removes a band around the cutoff. Hollow, phasey (Cyber Mint).
Peaking:  a bell at 0 dB gain, which leaves the signal flat (Velvet Pulse).

Parameters:
-----------

Cutoff (Hz): where the filter acts. Pads offset it by index so higher pads
             sound brighter.
Q:           sharpness of the response around the cutoff. Higher Q narrows
             band/notch filters and adds a resonant peak to low/high-pass.

Example usage:
  let focused = OscNode::triangle().through(FilterNode::bandpass(620.0).with_q(5.8));
*/

#[derive(Clone, Copy, Debug)]
pub enum FilterParam {
    Cutoff,
    Q,
}

pub struct FilterNode {
    filter: SVFilter,
    base_cutoff: f32,
    base_q: f32,
}

impl FilterNode {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        let filter = SVFilter::with_cutoff(filter_type, cutoff_hz);
        let base_q = filter.q;

        FilterNode {
            filter,
            base_cutoff: cutoff_hz,
            base_q,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::HighPass, cutoff_hz)
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::BandPass, cutoff_hz)
    }

    pub fn notch(cutoff_hz: f32) -> Self {
        Self::new(FilterType::Notch, cutoff_hz)
    }

    pub fn peaking(cutoff_hz: f32) -> Self {
        Self::new(FilterType::Peaking, cutoff_hz)
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.base_q = q;
        self.filter.set_q(q);
        self
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }

    pub fn cutoff(&self) -> f32 {
        self.base_cutoff
    }

    pub fn q(&self) -> f32 {
        self.base_q
    }
}

impl Modulatable for FilterNode {
    type Param = FilterParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            FilterParam::Cutoff => self.base_cutoff,
            FilterParam::Q => self.base_q,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        let final_value = base + modulation;
        match param {
            FilterParam::Cutoff => {
                self.base_cutoff = base;
                self.filter.set_cutoff(final_value.clamp(20.0, 20_000.0));
            }
            FilterParam::Q => {
                self.base_q = base;
                self.filter.set_q(final_value.clamp(MIN_Q, MAX_Q));
            }
        }
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.filter.reset();
    }

    fn is_active(&self) -> bool {
        false
    }
}
