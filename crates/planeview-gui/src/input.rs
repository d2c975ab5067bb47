//! Keyboard handling. Called once per frame for each window with that
//! window's own input; all mutations go through the shared state, so a
//! keypress in either window updates both.

use planeview_core::view::ViewState;

use crate::app::{ortho_viewport_id, TextureSlot};

struct KeyPresses {
    escape: bool,
    zoom_in: bool,
    zoom_out: bool,
    closer: bool,
    farther: bool,
    toggle_texture: bool,
}

pub fn handle_keys(ctx: &egui::Context, view: &mut ViewState, texture: &mut TextureSlot) {
    let keys = ctx.input(|i| KeyPresses {
        escape: i.key_pressed(egui::Key::Escape),
        zoom_in: i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
        zoom_out: i.key_pressed(egui::Key::Minus),
        closer: i.key_pressed(egui::Key::W),
        farther: i.key_pressed(egui::Key::S),
        toggle_texture: i.key_pressed(egui::Key::T),
    });

    if keys.escape {
        ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
        return;
    }

    let mut changed = false;
    if keys.zoom_in {
        view.zoom_in();
        changed = true;
    }
    if keys.zoom_out {
        view.zoom_out();
        changed = true;
    }
    if keys.closer {
        view.move_closer();
        changed = true;
    }
    if keys.farther {
        view.move_farther();
        changed = true;
    }
    if keys.toggle_texture {
        texture.toggle();
        changed = true;
    }

    if changed {
        repaint_both(ctx);
    }
}

/// Both windows render from the shared state, so any change must repaint
/// both. Requests coalesce; posting twice before a frame is harmless.
pub fn repaint_both(ctx: &egui::Context) {
    ctx.request_repaint_of(egui::ViewportId::ROOT);
    ctx.request_repaint_of(ortho_viewport_id());
}
