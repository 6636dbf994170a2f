//! Mode-switch chime - a rising four-note arpeggio.
//!
//! Plays when the mode pad advances the theme. The arpeggio is a G major
//! figure (G4, B4, D5, G5) nudged up 4% per theme index, so each theme
//! announces itself a little higher than the last.
//!
//! # How It Works
//!
//! 1. Four notes start 45ms apart
//! 2. Waveforms alternate triangle / sine
//! 3. Each note swells to 0.11 in 15ms and fades to the floor by 230ms
//! 4. Each note is cut 230ms after its own start

use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode,
};

pub const CHIME_NOTES: [f32; 4] = [392.0, 493.88, 587.33, 783.99];
pub const CHIME_STAGGER: f32 = 0.045;
pub const CHIME_LENGTH: f32 = 0.23;
const CHIME_PEAK: f32 = 0.11;
const CHIME_ATTACK: f32 = 0.015;

/// Pitch multiplier for the chime announcing theme `theme_index`.
pub fn chime_transpose(theme_index: usize) -> f32 {
    1.0 + theme_index as f32 * 0.04
}

fn chime_note(step: usize, frequency: f32) -> impl GraphNode {
    let osc = if step % 2 == 0 {
        OscNode::triangle()
    } else {
        OscNode::sine()
    };
    let start = step as f32 * CHIME_STAGGER;

    osc.with_frequency(frequency)
        .amplify(EnvNode::ramp(CHIME_PEAK, CHIME_ATTACK, CHIME_LENGTH))
        .gate(start, start + CHIME_LENGTH)
}

/// Create the chime announcing a switch to theme `theme_index`, the theme
/// that becomes current once the switch completes.
pub fn mode_switch_chime(theme_index: usize) -> Box<dyn GraphNode> {
    let transpose = chime_transpose(theme_index);

    CHIME_NOTES
        .iter()
        .enumerate()
        .map(|(step, &note)| Box::new(chime_note(step, note * transpose)) as Box<dyn GraphNode>)
        .reduce(|chord, note| Box::new(chord.sum(note)) as Box<dyn GraphNode>)
        .unwrap_or_else(|| Box::new(OscNode::sine().gate(0.0, 0.0)))
}
