use image::{Rgba, RgbaImage};

use planeview_core::texture::PlaneTexture;

#[test]
fn test_non_power_of_two_is_resized() {
    // 100x60: top half red, bottom half blue.
    let mut img = RgbaImage::new(100, 60);
    for (_, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if y < 30 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        };
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("npot.png");
    img.save(&path).unwrap();

    let texture = PlaneTexture::load(&path).unwrap();
    assert_eq!(texture.width(), 128);
    assert_eq!(texture.height(), 64);

    // Vertically flipped: the source's blue bottom half comes first.
    let top = texture.pixels.get_pixel(64, 1);
    assert!(top[2] > top[0], "expected blue at flipped row 0, got {top:?}");
    let bottom = texture.pixels.get_pixel(64, 62);
    assert!(bottom[0] > bottom[2], "expected red at flipped bottom, got {bottom:?}");
}

#[test]
fn test_power_of_two_is_flipped_unresized() {
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
    img.put_pixel(0, 0, Rgba([200, 100, 50, 255]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pot.png");
    img.save(&path).unwrap();

    let texture = PlaneTexture::load(&path).unwrap();
    assert_eq!(texture.width(), 4);
    assert_eq!(texture.height(), 4);
    // No resampling on this path, so the marker pixel moves exactly from the
    // top row to the bottom row.
    assert_eq!(*texture.pixels.get_pixel(0, 3), Rgba([200, 100, 50, 255]));
    assert_eq!(*texture.pixels.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PlaneTexture::load(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_undecodable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();
    assert!(PlaneTexture::load(&path).is_err());
}

#[test]
fn test_file_name_for_hud() {
    let mut img = RgbaImage::new(8, 8);
    img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mars.png");
    img.save(&path).unwrap();

    let texture = PlaneTexture::load(&path).unwrap();
    assert_eq!(texture.file_name(), "mars.png");
}
