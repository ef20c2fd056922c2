//! Pixel work on downloaded artwork.
//!
//! Dominant color extraction over a cover, vertical stitching of cover and
//! code, and PNG output. Everything here is synchronous and free of I/O except
//! [`save_png`].

use std::{io::Cursor, path::PathBuf};

use color_thief::ColorFormat;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops};

use crate::{Error, Res, utils};

// Every pixel is sampled.
const QUALITY: u8 = 1;
const MAX_COLORS: u8 = 5;

/// Returns the most representative color of `img` as `#RRGGBB`.
///
/// Transparent and near-white pixels are ignored, like the quantizer itself
/// does. When the remaining pixels all share one color, that color is
/// returned. Otherwise they go through MMCQ quantization and the palette entry
/// closest to the most pixels wins. A bitmap with no remaining pixels falls
/// back to the mean of every pixel.
///
/// # Errors
///
/// [`Error::EmptyImage`] for a bitmap without pixels.
pub fn dominant_color(img: &DynamicImage) -> Res<String> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyImage);
    }

    let rgba = img.to_rgba8();
    let eligible: Vec<[u8; 3]> = rgba
        .pixels()
        .filter(|p| is_eligible(p))
        .map(|p| [p[0], p[1], p[2]])
        .collect();

    let [r, g, b] = match eligible.first() {
        None => mean_color(rgba.pixels().map(|p| [p[0], p[1], p[2]])),
        Some(first) if eligible.iter().all(|c| c == first) => *first,
        Some(_) => quantize(&eligible).unwrap_or_else(|| mean_color(eligible.iter().copied())),
    };
    Ok(to_hex(r, g, b))
}

fn is_eligible(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    a >= 125 && !(r > 250 && g > 250 && b > 250)
}

// Quantizes `pixels` and returns the palette entry most pixels are closest to.
fn quantize(pixels: &[[u8; 3]]) -> Option<[u8; 3]> {
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let palette: Vec<[u8; 3]> =
        color_thief::get_palette(&raw, ColorFormat::Rgb, QUALITY, MAX_COLORS)
            .ok()?
            .iter()
            .map(|c| [c.r, c.g, c.b])
            .collect();

    let mut population = vec![0usize; palette.len()];
    for pixel in pixels {
        let nearest = palette
            .iter()
            .enumerate()
            .min_by_key(|(_, color)| distance(pixel, color))
            .map(|(i, _)| i)?;
        population[nearest] += 1;
    }

    population
        .iter()
        .enumerate()
        .max_by_key(|&(i, count)| (*count, std::cmp::Reverse(i)))
        .map(|(i, _)| palette[i])
}

fn distance(a: &[u8; 3], b: &[u8; 3]) -> u32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (i32::from(*x) - i32::from(*y)).pow(2) as u32)
        .sum()
}

fn mean_color(pixels: impl Iterator<Item = [u8; 3]>) -> [u8; 3] {
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for pixel in pixels {
        for (acc, channel) in sum.iter_mut().zip(pixel) {
            *acc += u64::from(channel);
        }
        count += 1;
    }

    sum.map(|total| (total / count.max(1)) as u8)
}

pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Stacks `code` below `cover` on a canvas as wide as the cover.
///
/// Pixels are copied verbatim. A narrower code leaves the rest of its rows
/// transparent, a wider one is clipped at the cover's right edge.
pub fn stitch(cover: &DynamicImage, code: &DynamicImage) -> RgbaImage {
    let mut canvas = RgbaImage::new(cover.width(), cover.height() + code.height());
    imageops::replace(&mut canvas, &cover.to_rgba8(), 0, 0);
    imageops::replace(&mut canvas, &code.to_rgba8(), 0, i64::from(cover.height()));
    canvas
}

pub fn decode(bytes: &[u8]) -> Res<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

pub fn encode_png(img: &RgbaImage) -> Res<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Writes `img` as `<basename>.png` and returns the written path.
///
/// # Errors
///
/// Encoding failures surface as [`Error::Image`], file creation failures as
/// [`Error::Io`]. Nothing is written when encoding fails.
pub async fn save_png(img: &RgbaImage, basename: &str) -> Res<PathBuf> {
    let path = utils::output_path(basename);
    let bytes = encode_png(img)?;
    async_fs::write(&path, bytes).await?;
    Ok(path)
}
