use nalgebra::{UnitQuaternion, Vector3};

use super::constants::NORMALIZE_EPSILON;

/// World up direction (+Y)
#[inline]
pub fn world_up() -> Vector3<f64> {
    Vector3::y()
}

#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between two values, with the factor clamped to [0, 1]
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * clamp01(factor)
}

/// Where `value` sits between `start` and `end`, clamped to [0, 1].
/// An empty range yields 0.
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    let span = end - start;
    if span.abs() < f64::EPSILON {
        0.0
    } else {
        clamp01((value - start) / span)
    }
}

/// Vector interpolation with the factor clamped to [0, 1]
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start.lerp(end, clamp01(factor))
}

/// Unit vector along `v`, or zero when `v` is too short to carry a direction.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(NORMALIZE_EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

/// Removes the component of `v` along `normal`.
pub fn project_on_plane(v: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    let norm_sq = normal.norm_squared();
    if norm_sq < NORMALIZE_EPSILON * NORMALIZE_EPSILON {
        return *v;
    }
    v - normal * (v.dot(normal) / norm_sq)
}

/// Rotation whose local +Z points along `forward` and whose local +Y leans
/// toward `up`.
///
/// Returns `None` for a zero `forward`. When `forward` is parallel to `up`
/// the shortest arc from +Z is used instead.
pub fn look_rotation(forward: &Vector3<f64>, up: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
    let forward = forward.try_normalize(NORMALIZE_EPSILON)?;
    if forward.cross(up).norm_squared() < NORMALIZE_EPSILON * NORMALIZE_EPSILON {
        return UnitQuaternion::rotation_between(&Vector3::z(), &forward);
    }
    Some(UnitQuaternion::face_towards(&forward, up))
}

/// Spherical interpolation with the factor clamped to [0, 1].
///
/// Rotations within `f64::EPSILON` of each other, where nalgebra cannot
/// pick a slerp path, return `from`.
pub fn slerp_clamped(
    from: &UnitQuaternion<f64>,
    to: &UnitQuaternion<f64>,
    factor: f64,
) -> UnitQuaternion<f64> {
    let t = clamp01(factor);
    if t >= 1.0 {
        return *to;
    }
    from.try_slerp(to, t, f64::EPSILON).unwrap_or(*from)
}
