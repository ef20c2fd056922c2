use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use spotcode::Error;
use spotcode::imaging::*;

// Helper function to create a gradient test image
fn create_test_image(width: u32, height: u32, seed: u8) -> DynamicImage {
    let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            seed.wrapping_add((x + y) as u8),
            255,
        ])
    });
    DynamicImage::ImageRgba8(img)
}

fn create_solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(color)))
}

fn assert_hex_color(color: &str) {
    let digits = color.strip_prefix('#').expect("color starts with #");
    assert_eq!(digits.len(), 6, "unexpected color {}", color);
    assert!(digits.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_to_hex() {
    assert_eq!(to_hex(255, 0, 16), "#FF0010");
    assert_eq!(to_hex(0, 0, 0), "#000000");
}

#[test]
fn test_dominant_color_format() {
    for img in [
        create_test_image(64, 64, 0),
        create_test_image(3, 1, 200),
        create_solid_image(1, 1, [10, 20, 30, 255]),
        create_solid_image(16, 16, [255, 255, 255, 255]),
        create_solid_image(16, 16, [0, 0, 0, 0]),
    ] {
        assert_hex_color(&dominant_color(&img).unwrap());
    }
}

#[test]
fn test_dominant_color_prefers_majority() {
    // three quarters red, one quarter blue
    let img: RgbaImage = ImageBuffer::from_fn(40, 40, |x, _| {
        if x < 30 {
            Rgba([220, 20, 20, 255])
        } else {
            Rgba([20, 20, 220, 255])
        }
    });

    let color = dominant_color(&DynamicImage::ImageRgba8(img)).unwrap();
    let r = u8::from_str_radix(&color[1..3], 16).unwrap();
    let b = u8::from_str_radix(&color[5..7], 16).unwrap();
    assert!(r > b, "expected a red dominant color, got {}", color);
}

#[test]
fn test_dominant_color_empty_image() {
    let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
    assert!(matches!(dominant_color(&img), Err(Error::EmptyImage)));
}

#[test]
fn test_stitch_dimensions_and_pixels() {
    let cover = create_test_image(640, 640, 7);
    let code = create_test_image(640, 160, 99);

    let result = stitch(&cover, &code);

    assert_eq!(result.dimensions(), (640, 800));

    let cover_px = cover.to_rgba8();
    let code_px = code.to_rgba8();
    for (x, y, pixel) in result.enumerate_pixels() {
        if y < 640 {
            assert_eq!(pixel, cover_px.get_pixel(x, y));
        } else {
            assert_eq!(pixel, code_px.get_pixel(x, y - 640));
        }
    }
}

#[test]
fn test_stitch_narrower_code_leaves_transparent_gap() {
    let cover = create_solid_image(10, 10, [1, 2, 3, 255]);
    let code = create_solid_image(4, 5, [9, 8, 7, 255]);

    let result = stitch(&cover, &code);

    assert_eq!(result.dimensions(), (10, 15));
    assert_eq!(result.get_pixel(3, 12), &Rgba([9, 8, 7, 255]));
    assert_eq!(result.get_pixel(4, 12), &Rgba([0, 0, 0, 0]));
    assert_eq!(result.get_pixel(9, 14), &Rgba([0, 0, 0, 0]));
}

#[test]
fn test_stitch_wider_code_is_clipped() {
    let cover = create_solid_image(4, 4, [1, 2, 3, 255]);
    let code = create_solid_image(8, 2, [9, 8, 7, 255]);

    let result = stitch(&cover, &code);

    assert_eq!(result.dimensions(), (4, 6));
    assert_eq!(result.get_pixel(3, 5), &Rgba([9, 8, 7, 255]));
}

#[test]
fn test_encode_png_decodes_back() {
    let img = create_test_image(12, 9, 3).to_rgba8();

    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = decode(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, img);
}

#[test]
fn test_decode_garbage() {
    assert!(matches!(decode(b"not an image"), Err(Error::Image(_))));
}

#[tokio::test]
async fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let basename = dir.path().join("artwork");
    let img = create_test_image(5, 5, 0).to_rgba8();

    let path = save_png(&img, basename.to_str().unwrap()).await.unwrap();

    assert_eq!(path, dir.path().join("artwork.png"));
    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written, img);
}

#[tokio::test]
async fn test_save_png_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let basename = dir.path().join("missing").join("artwork");
    let img = create_test_image(5, 5, 0).to_rgba8();

    let result = save_png(&img, basename.to_str().unwrap()).await;
    assert!(matches!(result, Err(Error::Io(_))));

    // the CLI step logs and carries on
    let persisted = spotcode::cli::persist(&img, basename.to_str().unwrap()).await;
    assert!(persisted.is_none());
}

#[test]
fn test_dominant_color_single_color_is_exact() {
    let img = create_solid_image(8, 8, [10, 20, 30, 255]);
    assert_eq!(dominant_color(&img).unwrap(), "#0A141E");

    // transparent pixels do not count as a second color
    let mut mixed = create_solid_image(8, 8, [200, 100, 50, 255]).to_rgba8();
    mixed.put_pixel(0, 0, Rgba([0, 0, 255, 0]));
    assert_eq!(
        dominant_color(&DynamicImage::ImageRgba8(mixed)).unwrap(),
        "#C86432"
    );
}
