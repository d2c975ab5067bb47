//! Plane texture loading: decode, pad to power-of-two dimensions, convert to
//! RGBA, and flip vertically so image row 0 lands at texture coordinate v=1
//! (the renderer's bottom-left-origin convention).

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tracing::info;

use crate::error::{PlaneViewError, Result};

/// A decoded, upload-ready plane texture. Pixels are RGBA8 with power-of-two
/// dimensions and vertically flipped row order.
pub struct PlaneTexture {
    pub pixels: image::RgbaImage,
    pub source: PathBuf,
}

impl PlaneTexture {
    /// Load and prepare an image file. Any failure (missing file, decode
    /// error, zero-sized image) is returned for the caller to downgrade to
    /// checkerboard rendering; it is never fatal.
    pub fn load(path: &Path) -> Result<PlaneTexture> {
        let mut img = image::open(path)?;

        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(PlaneViewError::InvalidDimensions { width, height });
        }

        if !width.is_power_of_two() || !height.is_power_of_two() {
            let new_width = width.next_power_of_two();
            let new_height = height.next_power_of_two();
            img = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
            info!(
                "resized texture from {width}x{height} to {new_width}x{new_height} \
                 (power of two)"
            );
        }

        let pixels = image::imageops::flip_vertical(&img.to_rgba8());
        info!("loaded texture: {}", path.display());

        Ok(PlaneTexture {
            pixels,
            source: path.to_path_buf(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// File name for the HUD's texture status line.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
