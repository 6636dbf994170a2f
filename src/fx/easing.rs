//! Easing curves mapping linear progress (0..1) to animated progress.

/*
Easing
======

Shapes grow fast and settle slowly. Both curves start at 0 and end at 1:

  ease_out_cubic   1 - (1 - p)^3
                   Decelerates smoothly, never overshoots.

  ease_out_back    1 + c3 (p - 1)^3 + c1 (p - 1)^2,  c1 = 1.70158, c3 = c1 + 1
                   Overshoots past 1 near the end and springs back, used by
                   the polygon so it "pops" into place.
*/

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;

#[inline]
pub fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

#[inline]
pub fn ease_out_back(p: f32) -> f32 {
    let t = p - 1.0;
    1.0 + BACK_C3 * t.powi(3) + BACK_C1 * t.powi(2)
}
