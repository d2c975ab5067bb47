use planeview_core::texture::PlaneTexture;

/// Convert a prepared plane texture to an egui image for upload.
pub fn texture_to_color_image(texture: &PlaneTexture) -> egui::ColorImage {
    let size = [texture.width() as usize, texture.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, texture.pixels.as_raw())
}
