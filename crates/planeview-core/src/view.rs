//! Shared view state. One instance is read by both windows each frame and
//! mutated only by the input handlers; every mutation clamps at the call
//! site so no invalid range can escape.

use crate::consts::{
    DEFAULT_EYE_DISTANCE, DEFAULT_FOV_DEGREES, DEFAULT_ZOOM, DRAG_SENSITIVITY, EYE_DISTANCE_STEP,
    FOV_STEP_DEGREES, MAX_EYE_DISTANCE, MAX_FOV_DEGREES, MAX_TILT_DEGREES, MAX_ZOOM,
    MIN_EYE_DISTANCE, MIN_FOV_DEGREES, MIN_ZOOM, ZOOM_STEP,
};
use crate::projection;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Tilt around the X axis, in degrees, clamped to ±[`MAX_TILT_DEGREES`].
    pub rotate_x: f32,
    /// Turn around the Y axis, in degrees, unbounded.
    pub rotate_y: f32,
    /// Legacy zoom level: tracks the +/- keys but is shown nowhere and read
    /// by nothing in the renderer. The field of view alone drives projection.
    pub zoom: f32,
    /// Vertical field of view of the perspective window, in degrees.
    pub fov_degrees: f32,
    /// Distance from the eye to the plane, in world units.
    pub eye_distance: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            zoom: DEFAULT_ZOOM,
            fov_degrees: DEFAULT_FOV_DEGREES,
            eye_distance: DEFAULT_EYE_DISTANCE,
        }
    }
}

impl ViewState {
    /// `+`/`=` keys: narrow the field of view to strengthen the perspective
    /// effect. Zoom tracks the keypress for parity with the original controls.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        self.fov_degrees = (self.fov_degrees - FOV_STEP_DEGREES).max(MIN_FOV_DEGREES);
    }

    /// `-` key: widen the field of view.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        self.fov_degrees = (self.fov_degrees + FOV_STEP_DEGREES).min(MAX_FOV_DEGREES);
    }

    /// `W` key: move the eye toward the plane.
    pub fn move_closer(&mut self) {
        self.eye_distance = (self.eye_distance - EYE_DISTANCE_STEP).max(MIN_EYE_DISTANCE);
    }

    /// `S` key: move the eye away from the plane.
    pub fn move_farther(&mut self) {
        self.eye_distance = (self.eye_distance + EYE_DISTANCE_STEP).min(MAX_EYE_DISTANCE);
    }

    /// Apply a mouse-drag delta in pixels. The X tilt is clamped so the plane
    /// never flips over; the Y turn wraps freely.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.rotate_y += dx * DRAG_SENSITIVITY;
        self.rotate_x =
            (self.rotate_x + dy * DRAG_SENSITIVITY).clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
    }

    /// Orthographic half-height matching the current field of view and eye
    /// distance. Shown in the orthographic window's HUD and used to build its
    /// projection.
    pub fn ortho_half_height(&self) -> f32 {
        projection::ortho_half_height(self.fov_degrees, self.eye_distance)
    }
}
