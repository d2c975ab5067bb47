use glam::Vec3;

use planeview_core::scene::{axes, checkerboard, plane_corners, split_axis_at_plane, textured_grid};

#[test]
fn test_plane_corners_counter_clockwise() {
    let corners = plane_corners(5.0);
    assert_eq!(corners[0], Vec3::new(-4.0, -4.0, -5.0));
    assert_eq!(corners[1], Vec3::new(4.0, -4.0, -5.0));
    assert_eq!(corners[2], Vec3::new(4.0, 4.0, -5.0));
    assert_eq!(corners[3], Vec3::new(-4.0, 4.0, -5.0));
}

#[test]
fn test_checkerboard_layout() {
    let cells = checkerboard(5.0);
    assert_eq!(cells.len(), 64);

    for cell in &cells {
        for corner in &cell.corners {
            assert_eq!(corner.z, -5.0);
        }
    }

    // Column-major: the first column walks up from the bottom-left cell.
    assert!(cells[0].light);
    assert!(!cells[1].light);
    assert!(!cells[8].light);
    assert!(cells[9].light);

    // Bottom-left cell spans one world unit from the plane corner.
    assert_eq!(cells[0].corners[0], Vec3::new(-4.0, -4.0, -5.0));
    assert_eq!(cells[0].corners[2], Vec3::new(-3.0, -3.0, -5.0));
}

#[test]
fn test_checkerboard_tracks_eye_distance() {
    let cells = checkerboard(1.5);
    assert_eq!(cells[0].corners[0].z, -1.5);
}

#[test]
fn test_textured_grid_topology() {
    let mesh = textured_grid(5.0);
    assert_eq!(mesh.vertices.len(), 81);
    assert_eq!(mesh.indices.len(), 384);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));

    let first = &mesh.vertices[0];
    assert_eq!(first.position, Vec3::new(-4.0, -4.0, -5.0));
    assert_eq!(first.uv.x, 0.0);
    assert_eq!(first.uv.y, 0.0);

    let last = mesh.vertices.last().unwrap();
    assert_eq!(last.position, Vec3::new(4.0, 4.0, -5.0));
    assert_eq!(last.uv.x, 1.0);
    assert_eq!(last.uv.y, 1.0);
}

#[test]
fn test_z_axis_splits_when_plane_is_closer_than_tip() {
    let [x_axis, y_axis, z_axis] = axes();

    // Plane farther than the axis tip: the whole -Z axis sits in front.
    let (behind, in_front) = split_axis_at_plane(&z_axis, 5.0);
    assert!(behind.is_none());
    assert_eq!(in_front, Some((Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0))));

    // Plane at 1.5: the piece from z = -1.5 to the tip is occluded by it.
    let (behind, in_front) = split_axis_at_plane(&z_axis, 1.5);
    assert_eq!(
        behind,
        Some((Vec3::new(0.0, 0.0, -1.5), Vec3::new(0.0, 0.0, -2.0)))
    );
    assert_eq!(in_front, Some((Vec3::ZERO, Vec3::new(0.0, 0.0, -1.5))));

    // Plane exactly at the tip: nothing left behind it.
    let (behind, _) = split_axis_at_plane(&z_axis, 2.0);
    assert!(behind.is_none());

    // X and Y axes lie at z = 0 and never cross the plane.
    for axis in [&x_axis, &y_axis] {
        let (behind, in_front) = split_axis_at_plane(axis, 0.5);
        assert!(behind.is_none());
        assert_eq!(in_front, Some((Vec3::ZERO, axis.tip)));
    }
}

#[test]
fn test_axes() {
    let axes = axes();
    assert_eq!(axes[0].tip, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(axes[0].label, "X");
    assert_eq!(axes[0].color, [255, 0, 0]);
    assert_eq!(axes[1].tip, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(axes[1].color, [0, 255, 0]);
    // Z points into the screen.
    assert_eq!(axes[2].tip, Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(axes[2].label_anchor, Vec3::new(0.0, 0.0, -2.2));
    assert_eq!(axes[2].color, [0, 0, 255]);
}
