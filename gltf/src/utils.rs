//! Small helpers shared by the builders

/// Compute the axis-aligned bounding box of a point set.
///
/// Returns `(min, max)` in component order x, y, z. The caller guarantees
/// at least one point.
pub fn compute_bounds(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for position in positions {
        for i in 0..3 {
            min[i] = min[i].min(position[i]);
            max[i] = max[i].max(position[i]);
        }
    }

    (min, max)
}
