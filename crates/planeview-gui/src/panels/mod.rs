pub mod hud;
pub mod scene;
