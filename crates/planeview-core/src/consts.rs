/// Side length of the reference plane, in world units.
pub const GRID_SIZE: f32 = 8.0;

/// Number of checkerboard cells along each edge of the plane.
pub const GRID_CELLS: usize = 8;

/// Default vertical field of view for the perspective window, in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 60.0;

/// Field-of-view clamp range, in degrees.
pub const MIN_FOV_DEGREES: f32 = 20.0;
pub const MAX_FOV_DEGREES: f32 = 120.0;

/// Field-of-view change per zoom keypress, in degrees.
pub const FOV_STEP_DEGREES: f32 = 2.0;

/// Default eye-to-plane distance, in world units.
pub const DEFAULT_EYE_DISTANCE: f32 = 5.0;

/// Eye-to-plane distance clamp range, in world units.
pub const MIN_EYE_DISTANCE: f32 = 0.5;
pub const MAX_EYE_DISTANCE: f32 = 20.0;

/// Eye-distance change per W/S keypress, in world units.
pub const EYE_DISTANCE_STEP: f32 = 0.5;

/// Default zoom level. Zoom tracks the +/- keys alongside the field of view
/// but is a display-only legacy value; nothing in the renderer reads it.
pub const DEFAULT_ZOOM: f32 = 5.0;

/// Zoom clamp range.
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 20.0;

/// Zoom change per keypress.
pub const ZOOM_STEP: f32 = 0.5;

/// Maximum tilt around the X axis, in degrees. Keeps the plane from flipping.
pub const MAX_TILT_DEGREES: f32 = 80.0;

/// Rotation applied per pixel of mouse drag, in degrees.
pub const DRAG_SENSITIVITY: f32 = 0.5;

/// Near and far clipping plane distances shared by both projections.
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Length of each coordinate-axis segment, in world units.
pub const AXIS_LENGTH: f32 = 2.0;

/// Distance from the origin at which axis labels are anchored.
pub const AXIS_LABEL_OFFSET: f32 = 2.2;
