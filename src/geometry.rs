use std::f64::consts::TAU;

/// Centre of ring slot `k` out of `n_circles`, evenly spaced at `distance`
/// pixels around (cx,cy), rounded to the nearest pixel. Slot 0 is to the
/// right; slots advance clockwise on screen because y grows downward.
pub fn ring_position(k: usize, n_circles: usize, distance: i32, cx: i32, cy: i32) -> (i32, i32) {
    let angle = TAU * k as f64 / n_circles as f64;
    let d = distance as f64;
    let x = cx + (d * angle.cos()).round() as i32;
    let y = cy + (d * angle.sin()).round() as i32;
    (x, y)
}

/// All slots in order, paired with their index.
pub fn ring_positions(
    n_circles: usize,
    distance: i32,
    cx: i32,
    cy: i32,
) -> impl Iterator<Item = (usize, (i32, i32))> {
    (0..n_circles).map(move |k| (k, ring_position(k, n_circles, distance, cx, cy)))
}
