use glam::Vec3;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Normalised position of `value` inside a window that opens at `start` and
/// spans `span`, clamped to [0, 1].
#[inline]
pub fn ramp(value: f32, start: f32, span: f32) -> f32 {
    clamp01((value - start) / span)
}

// ---------------- Selection helpers ----------------
/// Index and absolute distance of the entry in `xs` nearest to `x`.
///
/// Linear scan with a strict `<` comparison so ties keep the lowest index.
/// Returns `None` for an empty slice.
#[inline]
pub fn nearest_index(xs: &[f32], x: f32) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, vx) in xs.iter().enumerate() {
        let dx = (x - *vx).abs();
        match best {
            Some((_, bd)) if dx >= bd => {}
            _ => best = Some((i, dx)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_clamps_both_ends() {
        assert_eq!(ramp(0.0, 0.15, 0.7), 0.0);
        assert_eq!(ramp(1.0, 0.15, 0.7), 1.0);
        assert!((ramp(0.5, 0.15, 0.7) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn nearest_index_prefers_lowest_on_tie() {
        assert_eq!(nearest_index(&[-1.0, 1.0], 0.0).map(|b| b.0), Some(0));
        assert_eq!(nearest_index(&[], 0.0), None);
    }
}
