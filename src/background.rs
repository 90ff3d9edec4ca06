use glam::Vec2;

/// Screen positions of the two copies of a looping background `width`
/// pixels wide, scrolled left by `scroll_x`.
///
/// The first copy starts at `-(scroll_x mod width)` and the second sits
/// right after it, so together they always cover `[0, width)` on screen.
/// Euclidean modulo keeps the loop seamless for negative scroll values.
pub fn parallax_positions(scroll_x: f32, width: f32) -> [Vec2; 2] {
    if width <= 0.0 {
        return [Vec2::ZERO, Vec2::ZERO];
    }
    let first = -scroll_x.rem_euclid(width);
    [Vec2::new(first, 0.0), Vec2::new(first + width, 0.0)]
}
