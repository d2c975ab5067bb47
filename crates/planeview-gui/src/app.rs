use std::path::{Path, PathBuf};

use planeview_core::projection::ProjectionMode;
use planeview_core::texture::PlaneTexture;
use planeview_core::view::ViewState;
use tracing::{info, warn};

use crate::convert::texture_to_color_image;
use crate::input;
use crate::panels;

/// Screen position of the perspective window's top-left corner.
const WINDOW_ORIGIN: egui::Pos2 = egui::pos2(50.0, 100.0);
/// Horizontal gap between the two windows.
const WINDOW_GAP: f32 = 20.0;

pub fn ortho_viewport_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("orthographic")
}

/// An uploaded plane texture. The `TextureHandle` owns the backend texture
/// and frees it when dropped or replaced.
pub struct LoadedTexture {
    pub handle: egui::TextureHandle,
    pub name: String,
}

/// The process-wide texture slot: at most one texture, loaded once at
/// startup, toggled on and off by the T key.
#[derive(Default)]
pub struct TextureSlot {
    pub loaded: Option<LoadedTexture>,
    pub active: bool,
}

impl TextureSlot {
    /// Try to load and upload the given image; on failure log the error and
    /// leave the slot empty so both windows fall back to the checkerboard.
    pub fn load(ctx: &egui::Context, path: &Path) -> Self {
        match PlaneTexture::load(path) {
            Ok(texture) => {
                let name = texture.file_name();
                let handle = ctx.load_texture(
                    "plane",
                    texture_to_color_image(&texture),
                    egui::TextureOptions::LINEAR,
                );
                Self {
                    loaded: Some(LoadedTexture { handle, name }),
                    active: true,
                }
            }
            Err(err) => {
                warn!("failed to load texture {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Flip the active flag; a no-op with a diagnostic when nothing is loaded.
    pub fn toggle(&mut self) {
        if self.loaded.is_some() {
            self.active = !self.active;
            info!("texture {}", if self.active { "on" } else { "off" });
        } else {
            warn!("no texture loaded; nothing to toggle");
        }
    }

    pub fn active_texture(&self) -> Option<&LoadedTexture> {
        if self.active {
            self.loaded.as_ref()
        } else {
            None
        }
    }
}

pub struct PlaneViewApp {
    /// One view state shared by both windows.
    pub view: ViewState,
    pub texture: TextureSlot,
    /// Window size computed from the monitor on the first frame.
    window_size: egui::Vec2,
    windows_placed: bool,
}

impl PlaneViewApp {
    pub fn new(ctx: &egui::Context, image: Option<PathBuf>) -> Self {
        let texture = match image {
            Some(path) => TextureSlot::load(ctx, &path),
            None => {
                info!("no image given; using checkerboard");
                TextureSlot::default()
            }
        };

        Self {
            view: ViewState::default(),
            texture,
            window_size: egui::vec2(640.0, 480.0),
            windows_placed: false,
        }
    }

    /// Size both windows to roughly a third of the screen width and half its
    /// height and place them side by side. Runs once, as soon as the backend
    /// reports the monitor size.
    fn place_windows(&mut self, ctx: &egui::Context) {
        if self.windows_placed {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            self.window_size = egui::vec2((monitor.x / 3.0).floor(), (monitor.y / 2.0).floor());
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(self.window_size));
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(WINDOW_ORIGIN));
            self.windows_placed = true;
        }
    }
}

impl eframe::App for PlaneViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.place_windows(ctx);

        input::handle_keys(ctx, &mut self.view, &mut self.texture);
        panels::scene::show(ctx, ProjectionMode::Perspective, &mut self.view, &self.texture);

        let ortho_pos = WINDOW_ORIGIN + egui::vec2(self.window_size.x + WINDOW_GAP, 0.0);
        let view = &mut self.view;
        let texture = &mut self.texture;
        ctx.show_viewport_immediate(
            ortho_viewport_id(),
            egui::ViewportBuilder::default()
                .with_title("Orthographic Projection")
                .with_inner_size(self.window_size)
                .with_position(ortho_pos),
            |ctx, _class| {
                input::handle_keys(ctx, view, texture);
                panels::scene::show(ctx, ProjectionMode::Orthographic, view, texture);

                // Closing either window terminates the process.
                if ctx.input(|i| i.viewport().close_requested()) {
                    ctx.send_viewport_cmd_to(
                        egui::ViewportId::ROOT,
                        egui::ViewportCommand::Close,
                    );
                }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_without_texture_is_a_noop() {
        let mut slot = TextureSlot::default();
        slot.toggle();
        assert!(!slot.active);
        assert!(slot.active_texture().is_none());
    }

    #[test]
    fn toggle_flips_loaded_texture() {
        let ctx = egui::Context::default();
        let handle = ctx.load_texture(
            "plane",
            egui::ColorImage::from_rgba_unmultiplied([2, 2], &[128; 16]),
            egui::TextureOptions::LINEAR,
        );
        let mut slot = TextureSlot {
            loaded: Some(LoadedTexture {
                handle,
                name: "test.png".into(),
            }),
            active: true,
        };

        slot.toggle();
        assert!(!slot.active);
        assert!(slot.active_texture().is_none());
        slot.toggle();
        assert!(slot.active);
        assert_eq!(slot.active_texture().unwrap().name, "test.png");
    }
}
