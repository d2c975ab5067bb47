//! Screen-space status text drawn over the scene: mode, plane distance,
//! texture state, the mode-specific projection figure, and the help line.

use planeview_core::projection::ProjectionMode;
use planeview_core::view::ViewState;

use crate::app::TextureSlot;

const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;
const HELP_TEXT: &str =
    "+/-: Zoom | W/S: Plane Distance | Left mouse: Rotate | T: Toggle Texture | ESC: Exit";

pub fn show(
    painter: &egui::Painter,
    rect: egui::Rect,
    mode: ProjectionMode,
    view: &ViewState,
    texture: &TextureSlot,
) {
    let texture_line = match texture.active_texture() {
        Some(loaded) => format!("Texture: {}", loaded.name),
        None => "Texture: None (using checkerboard)".to_string(),
    };
    let projection_line = match mode {
        ProjectionMode::Perspective => format!("Field of View: {:.1}\u{b0}", view.fov_degrees),
        ProjectionMode::Orthographic => format!("Ortho Size: {:.1}", view.ortho_half_height()),
    };
    let lines = [
        format!("Mode: {}", mode.label()),
        format!("Distance to plane: {:.1}", view.eye_distance),
        texture_line,
        projection_line,
    ];

    let font = egui::FontId::proportional(12.0);
    for (i, line) in lines.iter().enumerate() {
        painter.text(
            rect.left_top() + egui::vec2(MARGIN, MARGIN + i as f32 * LINE_HEIGHT),
            egui::Align2::LEFT_TOP,
            line,
            font.clone(),
            egui::Color32::WHITE,
        );
    }

    painter.text(
        rect.left_bottom() + egui::vec2(MARGIN, -MARGIN),
        egui::Align2::LEFT_BOTTOM,
        HELP_TEXT,
        font,
        egui::Color32::WHITE,
    );
}
