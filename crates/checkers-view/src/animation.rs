//! Snap-back animation.

use crate::PixelPos;

/// Moves `current` halfway toward `target`, landing exactly on it once
/// within two pixels on an axis.
///
/// Called once per frame, this eases a released piece into its square.
pub fn snap_step(current: PixelPos, target: PixelPos) -> PixelPos {
    let step = |from: i32, to: i32| {
        let next = from - (from - to).div_euclid(2);
        if (next - to).abs() < 2 {
            to
        } else {
            next
        }
    };
    PixelPos::new(step(current.x, target.x), step(current.y, target.y))
}
