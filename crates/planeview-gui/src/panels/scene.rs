//! The scene panel fills each window: plane (texture or checkerboard), red
//! border, coordinate axes, then the HUD on top. Painted back to front; axis
//! pieces behind the plane (the -Z axis crosses it once the eye gets closer
//! than the axis length) go down before the plane so it occludes them.

use glam::Mat4;

use planeview_core::projection::{
    model_matrix, project_point, project_segment, projection_matrix, ProjectionMode,
};
use planeview_core::scene;
use planeview_core::view::ViewState;

use crate::app::{LoadedTexture, TextureSlot};
use crate::input;
use crate::panels::hud;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(26);
const LIGHT_CELL: egui::Color32 = egui::Color32::WHITE;
const DARK_CELL: egui::Color32 = egui::Color32::from_gray(51);
const BORDER: egui::Color32 = egui::Color32::RED;
const BORDER_WIDTH: f32 = 3.0;
const AXIS_WIDTH: f32 = 2.0;

pub fn show(ctx: &egui::Context, mode: ProjectionMode, view: &mut ViewState, texture: &TextureSlot) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BACKGROUND))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            if rect.height() <= 0.0 {
                return;
            }

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_drag(ctx, &response, view);

            let painter = ui.painter_at(rect);
            paint_scene(&painter, rect, mode, view, texture);
            hud::show(&painter, rect, mode, view, texture);
        });
}

/// Left-mouse drag rotates the shared view. egui resolves press, release,
/// and the originating window; the per-frame delta resets on release.
fn handle_drag(ctx: &egui::Context, response: &egui::Response, view: &mut ViewState) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            view.apply_drag(delta.x, delta.y);
            input::repaint_both(ctx);
        }
    }
}

fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    mode: ProjectionMode,
    view: &ViewState,
    texture: &TextureSlot,
) {
    let viewport = glam::Vec2::new(rect.width(), rect.height());
    let aspect = rect.width() / rect.height();
    let mvp = projection_matrix(mode, view.fov_degrees, view.eye_distance, aspect)
        * model_matrix(view.rotate_x, view.rotate_y);
    let to_screen = |p: glam::Vec2| rect.min + egui::vec2(p.x, p.y);

    paint_axes(painter, mvp, viewport, view, AxisLayer::BehindPlane, &to_screen);
    match texture.active_texture() {
        Some(loaded) => paint_textured_plane(painter, mvp, viewport, view, loaded, &to_screen),
        None => paint_checkerboard(painter, mvp, viewport, view, &to_screen),
    }
    paint_border(painter, mvp, viewport, view, &to_screen);
    paint_axes(painter, mvp, viewport, view, AxisLayer::InFront, &to_screen);
}

fn paint_checkerboard(
    painter: &egui::Painter,
    mvp: Mat4,
    viewport: glam::Vec2,
    view: &ViewState,
    to_screen: &impl Fn(glam::Vec2) -> egui::Pos2,
) {
    for cell in scene::checkerboard(view.eye_distance) {
        let mut points = Vec::with_capacity(4);
        for corner in cell.corners {
            match project_point(mvp, viewport, corner) {
                Some(p) => points.push(to_screen(p)),
                // Skip cells clipped by the near plane.
                None => break,
            }
        }
        if points.len() == 4 {
            let fill = if cell.light { LIGHT_CELL } else { DARK_CELL };
            painter.add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
        }
    }
}

fn paint_textured_plane(
    painter: &egui::Painter,
    mvp: Mat4,
    viewport: glam::Vec2,
    view: &ViewState,
    loaded: &LoadedTexture,
    to_screen: &impl Fn(glam::Vec2) -> egui::Pos2,
) {
    let grid = scene::textured_grid(view.eye_distance);
    let projected: Vec<_> = grid
        .vertices
        .iter()
        .map(|v| project_point(mvp, viewport, v.position))
        .collect();

    let mut mesh = egui::Mesh::with_texture(loaded.handle.id());
    for (vertex, screen) in grid.vertices.iter().zip(projected.iter()) {
        // Clipped vertices keep a placeholder position; no surviving triangle
        // references them.
        let pos = match screen {
            Some(p) => to_screen(*p),
            None => painter.clip_rect().min,
        };
        mesh.vertices.push(egui::epaint::Vertex {
            pos,
            uv: egui::pos2(vertex.uv.x, vertex.uv.y),
            color: egui::Color32::WHITE,
        });
    }
    for triangle in grid.indices.chunks_exact(3) {
        if triangle.iter().all(|&i| projected[i as usize].is_some()) {
            mesh.indices.extend_from_slice(triangle);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
}

fn paint_border(
    painter: &egui::Painter,
    mvp: Mat4,
    viewport: glam::Vec2,
    view: &ViewState,
    to_screen: &impl Fn(glam::Vec2) -> egui::Pos2,
) {
    // Each edge is clipped against the near plane independently, so the
    // outline stays partially visible when a corner crosses it.
    let corners = scene::plane_corners(view.eye_distance);
    let stroke = egui::Stroke::new(BORDER_WIDTH, BORDER);
    for i in 0..corners.len() {
        let next = corners[(i + 1) % corners.len()];
        if let Some((a, b)) = project_segment(mvp, viewport, corners[i], next) {
            painter.line_segment([to_screen(a), to_screen(b)], stroke);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AxisLayer {
    /// Axis pieces the plane occludes; painted underneath it.
    BehindPlane,
    InFront,
}

fn paint_axes(
    painter: &egui::Painter,
    mvp: Mat4,
    viewport: glam::Vec2,
    view: &ViewState,
    layer: AxisLayer,
    to_screen: &impl Fn(glam::Vec2) -> egui::Pos2,
) {
    for axis in scene::axes() {
        let color = egui::Color32::from_rgb(axis.color[0], axis.color[1], axis.color[2]);

        let (behind, in_front) = scene::split_axis_at_plane(&axis, view.eye_distance);
        let piece = match layer {
            AxisLayer::BehindPlane => behind,
            AxisLayer::InFront => in_front,
        };
        if let Some((start, end)) = piece {
            if let Some((a, b)) = project_segment(mvp, viewport, start, end) {
                painter.line_segment(
                    [to_screen(a), to_screen(b)],
                    egui::Stroke::new(AXIS_WIDTH, color),
                );
            }
        }

        let label_behind = axis.label_anchor.z < -view.eye_distance;
        if label_behind == (layer == AxisLayer::BehindPlane) {
            if let Some(anchor) = project_point(mvp, viewport, axis.label_anchor) {
                painter.text(
                    to_screen(anchor),
                    egui::Align2::CENTER_CENTER,
                    axis.label,
                    egui::FontId::proportional(12.0),
                    color,
                );
            }
        }
    }
}
