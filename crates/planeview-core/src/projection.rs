//! Projection matrices for the two windows and the half-height relationship
//! that keeps the plane at matching apparent size between them.

use glam::{Mat4, Vec2, Vec3};

use crate::consts::{FAR_PLANE, NEAR_PLANE};

/// Which projection a window applies. Stored per window at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }
}

/// Half-height of the orthographic view volume that shows the plane at the
/// same apparent size as a perspective projection with the given vertical
/// field of view, for a plane at `eye_distance` in front of the eye.
///
/// Derived from the perspective frustum: the visible height at distance `d`
/// is `2 * tan(fov/2) * d`, so the matching orthographic half-height is half
/// of that.
pub fn ortho_half_height(fov_degrees: f32, eye_distance: f32) -> f32 {
    (fov_degrees.to_radians() / 2.0).tan() * eye_distance
}

/// Build the projection matrix for one window. The orthographic volume is
/// sized from the current field of view and eye distance so both windows show
/// the plane at identical scale; the horizontal extent follows the window
/// aspect ratio in both modes.
pub fn projection_matrix(
    mode: ProjectionMode,
    fov_degrees: f32,
    eye_distance: f32,
    aspect: f32,
) -> Mat4 {
    match mode {
        ProjectionMode::Perspective => {
            Mat4::perspective_rh(fov_degrees.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
        }
        ProjectionMode::Orthographic => {
            let half_h = ortho_half_height(fov_degrees, eye_distance);
            let half_w = half_h * aspect;
            Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, NEAR_PLANE, FAR_PLANE)
        }
    }
}

/// Model rotation shared by both windows: tilt around X applied after the
/// turn around Y, with the eye fixed at the origin looking down -Z.
pub fn model_matrix(rotate_x_degrees: f32, rotate_y_degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(rotate_x_degrees.to_radians())
        * Mat4::from_rotation_y(rotate_y_degrees.to_radians())
}

/// Project a world-space point to pixel coordinates (origin top-left, y down).
/// Returns `None` for points culled by the near/far planes or behind the eye.
pub fn project_point(mvp: Mat4, viewport: Vec2, point: Vec3) -> Option<Vec2> {
    let clip = mvp * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(clip_to_pixel(ndc.truncate(), viewport))
}

/// Project a world-space line segment, clipping it against the near plane.
/// The axis segments start at the origin, which lies in front of the near
/// plane, so dropping culled endpoints outright would lose them entirely.
/// Returns `None` when the whole segment is in front of the near plane.
pub fn project_segment(mvp: Mat4, viewport: Vec2, a: Vec3, b: Vec3) -> Option<(Vec2, Vec2)> {
    let mut ca = mvp * a.extend(1.0);
    let mut cb = mvp * b.extend(1.0);

    // The near plane is ndc z = 0, i.e. clip z = 0 on the visible side.
    if ca.z < 0.0 && cb.z < 0.0 {
        return None;
    }
    if ca.z < 0.0 {
        let t = ca.z / (ca.z - cb.z);
        ca += (cb - ca) * t;
    } else if cb.z < 0.0 {
        let t = cb.z / (cb.z - ca.z);
        cb += (ca - cb) * t;
    }
    if ca.w <= f32::EPSILON || cb.w <= f32::EPSILON {
        return None;
    }

    Some((
        clip_to_pixel(ca.truncate().truncate() / ca.w, viewport),
        clip_to_pixel(cb.truncate().truncate() / cb.w, viewport),
    ))
}

fn clip_to_pixel(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (0.5 - ndc.y * 0.5) * viewport.y,
    )
}
