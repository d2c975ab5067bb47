pub mod consts;
pub mod error;
pub mod projection;
pub mod scene;
pub mod texture;
pub mod view;
