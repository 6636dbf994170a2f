//! Pre-built voices for the pad grid.
//!
//! Each voice is a ready-to-play, self-stopping node graph: build it, hand
//! it to the voice pool, forget about it.
//!
//! # Example
//!
//! ```ignore
//! use padlight::{theme::theme_at, voices};
//!
//! let theme = theme_at(0);
//! let pad = voices::pad_voice(4, &theme.audio, 42);
//! let chime = voices::mode_switch_chime(1);
//! let hz = voices::pad_frequency(&theme.audio, 4);
//! ```

mod chime;
mod noise;
mod pad;

pub use chime::{chime_transpose, mode_switch_chime, CHIME_LENGTH, CHIME_NOTES, CHIME_STAGGER};
pub use noise::{noise_burst, NOISE_SECONDS};
pub use pad::{filter_q, has_noise_layer, pad_frequency, pad_voice, PadShape, STOP_TAIL};
