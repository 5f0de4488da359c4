use tilewalk_core::{Point, Walkable};

use crate::mode::{self, MovementMode};

/// Append the walkable neighbors of `p` under `mode` into `buf`.
///
/// A diagonal step is only offered when both orthogonal tiles flanking it
/// are in bounds and walkable, so routes never cut a blocked corner.
pub fn walkable_neighbors<W: Walkable + ?Sized>(
    map: &W,
    p: Point,
    mode: MovementMode,
    buf: &mut Vec<Point>,
) {
    for &d in mode::offsets(mode) {
        let n = p + d;
        if !map.is_walkable(n) {
            continue;
        }
        if d.x != 0 && d.y != 0 {
            let side_a = p.shift(d.x, 0);
            let side_b = p.shift(0, d.y);
            if !map.is_walkable(side_a) || !map.is_walkable(side_b) {
                continue;
            }
        }
        buf.push(n);
    }
}
