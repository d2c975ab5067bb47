//! Scene geometry shared by both windows: coordinate axes, the checkerboard
//! plane, and a tessellated mesh for the textured plane. Everything is
//! generated in world space; the gui projects and paints it.

use glam::{Vec2, Vec3};

use crate::consts::{AXIS_LABEL_OFFSET, AXIS_LENGTH, GRID_CELLS, GRID_SIZE};

/// One coordinate-axis segment from the origin, with its label anchor.
pub struct Axis {
    pub tip: Vec3,
    pub label_anchor: Vec3,
    pub label: &'static str,
    pub color: [u8; 3],
}

/// The three axes: +X red, +Y green, -Z blue.
pub fn axes() -> [Axis; 3] {
    [
        Axis {
            tip: Vec3::new(AXIS_LENGTH, 0.0, 0.0),
            label_anchor: Vec3::new(AXIS_LABEL_OFFSET, 0.0, 0.0),
            label: "X",
            color: [255, 0, 0],
        },
        Axis {
            tip: Vec3::new(0.0, AXIS_LENGTH, 0.0),
            label_anchor: Vec3::new(0.0, AXIS_LABEL_OFFSET, 0.0),
            label: "Y",
            color: [0, 255, 0],
        },
        Axis {
            tip: Vec3::new(0.0, 0.0, -AXIS_LENGTH),
            label_anchor: Vec3::new(0.0, 0.0, -AXIS_LABEL_OFFSET),
            label: "Z",
            color: [0, 0, 255],
        },
    ]
}

/// Split an axis segment at the plane depth `z = -eye_distance`. Returns the
/// piece behind the plane (occluded, painted before it) and the piece in
/// front (painted after). The eye sits at the model-space origin, so the
/// plane's depth ordering against the axes survives rotation: only the -Z
/// axis can cross the plane, once the eye moves closer than the axis length.
pub fn split_axis_at_plane(
    axis: &Axis,
    eye_distance: f32,
) -> (Option<(Vec3, Vec3)>, Option<(Vec3, Vec3)>) {
    let plane_z = -eye_distance;
    if axis.tip.z >= plane_z {
        (None, Some((Vec3::ZERO, axis.tip)))
    } else {
        let split = axis.tip * (plane_z / axis.tip.z);
        (Some((split, axis.tip)), Some((Vec3::ZERO, split)))
    }
}

/// Corners of the plane at `z = -eye_distance`, counter-clockwise starting
/// from the bottom-left. Used for the red border outline in both draw modes.
pub fn plane_corners(eye_distance: f32) -> [Vec3; 4] {
    let half = GRID_SIZE / 2.0;
    let z = -eye_distance;
    [
        Vec3::new(-half, -half, z),
        Vec3::new(half, -half, z),
        Vec3::new(half, half, z),
        Vec3::new(-half, half, z),
    ]
}

/// One checkerboard cell, corners counter-clockwise from its bottom-left.
pub struct Cell {
    pub corners: [Vec3; 4],
    pub light: bool,
}

/// The 8x8 checkerboard at `z = -eye_distance`, alternating light/dark by
/// `(col + row) % 2`.
pub fn checkerboard(eye_distance: f32) -> Vec<Cell> {
    let half = GRID_SIZE / 2.0;
    let cell_size = GRID_SIZE / GRID_CELLS as f32;
    let z = -eye_distance;

    let mut cells = Vec::with_capacity(GRID_CELLS * GRID_CELLS);
    for col in 0..GRID_CELLS {
        for row in 0..GRID_CELLS {
            let x1 = -half + col as f32 * cell_size;
            let x2 = x1 + cell_size;
            let y1 = -half + row as f32 * cell_size;
            let y2 = y1 + cell_size;
            cells.push(Cell {
                corners: [
                    Vec3::new(x1, y1, z),
                    Vec3::new(x2, y1, z),
                    Vec3::new(x2, y2, z),
                    Vec3::new(x1, y2, z),
                ],
                light: (col + row) % 2 == 0,
            });
        }
    }
    cells
}

pub struct PlaneVertex {
    pub position: Vec3,
    /// Texture coordinate, (0,0) at the plane's bottom-left corner and (1,1)
    /// at its top-right, matching the loader's vertically flipped pixel rows.
    pub uv: Vec2,
}

pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

/// The textured plane tessellated into the same 8x8 grid as the checkerboard.
/// Subdividing keeps the painter's per-triangle affine texturing close to
/// perspective-correct under rotation.
pub fn textured_grid(eye_distance: f32) -> PlaneMesh {
    let half = GRID_SIZE / 2.0;
    let cell_size = GRID_SIZE / GRID_CELLS as f32;
    let z = -eye_distance;
    let verts_per_side = GRID_CELLS + 1;

    let mut vertices = Vec::with_capacity(verts_per_side * verts_per_side);
    for row in 0..verts_per_side {
        for col in 0..verts_per_side {
            let x = -half + col as f32 * cell_size;
            let y = -half + row as f32 * cell_size;
            vertices.push(PlaneVertex {
                position: Vec3::new(x, y, z),
                uv: Vec2::new(
                    col as f32 / GRID_CELLS as f32,
                    row as f32 / GRID_CELLS as f32,
                ),
            });
        }
    }

    let mut indices = Vec::with_capacity(GRID_CELLS * GRID_CELLS * 6);
    for row in 0..GRID_CELLS {
        for col in 0..GRID_CELLS {
            let bl = (row * verts_per_side + col) as u32;
            let br = bl + 1;
            let tl = bl + verts_per_side as u32;
            let tr = tl + 1;
            indices.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
        }
    }

    PlaneMesh { vertices, indices }
}
