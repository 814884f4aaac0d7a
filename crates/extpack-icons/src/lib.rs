//! Extension icon pipeline.
//!
//! Turns one logo bitmap into the icon set a browser extension ships:
//! a near-white background is keyed out as transparency, transparent
//! margins are cropped away, and the result is downscaled to the
//! standard icon sizes with a Lanczos filter.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Pixels with all three channels strictly above this are background.
///
/// Generated logos rarely have a pure-white backdrop, so the key is a
/// threshold rather than an exact match.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Browser icon sizes, in pixels.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Icon pipeline failures.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source bitmap could not be read or decoded.
    #[error("cannot decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An output icon could not be encoded or written.
    #[error("cannot write '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Rewrite near-white pixels to fully transparent white.
///
/// A pixel is keyed out when R, G and B are each strictly above
/// `threshold`; everything else is left untouched.
pub fn key_out_background(img: &mut RgbaImage, threshold: u8) {
    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > threshold && g > threshold && b > threshold {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }
}

/// Smallest `(x, y, width, height)` rectangle containing every pixel
/// with nonzero alpha, or `None` for a fully transparent image.
pub fn opaque_bounding_box(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut seen = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] > 0 {
            seen = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    seen.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Renders the full icon set for one source bitmap.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    threshold: u8,
    sizes: Vec<u32>,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl IconRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Key out the background, crop to the opaque bounding box, then write
    /// the primary `icon.png` plus one `icon-{size}.png` per size into
    /// `out_dir`. Returns the written paths in that order.
    pub fn render(&self, source: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
        let decoded = image::open(source).map_err(|e| IconError::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut img = decoded.to_rgba8();

        key_out_background(&mut img, self.threshold);

        match opaque_bounding_box(&img) {
            Some((x, y, w, h)) => {
                info!(x, y, w, h, "cropped to opaque bounding box");
                img = imageops::crop_imm(&img, x, y, w, h).to_image();
            }
            None => {
                warn!(source = %source.display(), "image is fully transparent, skipping crop");
            }
        }

        let mut written = Vec::with_capacity(1 + self.sizes.len());

        let primary = out_dir.join("icon.png");
        save_png(&img, &primary)?;
        written.push(primary);

        for &size in &self.sizes {
            let resized = imageops::resize(&img, size, size, FilterType::Lanczos3);
            let path = out_dir.join(format!("icon-{size}.png"));
            save_png(&resized, &path)?;
            written.push(path);
        }

        Ok(written)
    }
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    img.save(path).map_err(|e| IconError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(icon = %path.display(), "saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_out_only_near_white_pixels() {
        let mut img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([250, 250, 250, 255])
            } else {
                Rgba([10, 10, 10, 255])
            }
        });
        key_out_background(&mut img, 240);

        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([10, 10, 10, 255]));
    }

    #[test]
    fn threshold_is_strict() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([240, 240, 240, 255]));
        key_out_background(&mut img, 240);
        // 240 is not strictly above 240.
        assert_eq!(*img.get_pixel(0, 0), Rgba([240, 240, 240, 255]));
    }

    #[test]
    fn bounding_box_trims_transparent_margins() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        img.put_pixel(3, 4, Rgba([1, 2, 3, 255]));
        img.put_pixel(6, 7, Rgba([4, 5, 6, 128]));

        assert_eq!(opaque_bounding_box(&img), Some((3, 4, 4, 4)));
    }

    #[test]
    fn bounding_box_of_fully_transparent_image_is_none() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        assert_eq!(opaque_bounding_box(&img), None);
    }

    #[test]
    fn renders_primary_and_downscaled_icons() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("logo.png");

        // Dark square logo centered on a near-white backdrop.
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            if (16..48).contains(&x) && (16..48).contains(&y) {
                Rgba([20, 20, 20, 255])
            } else {
                Rgba([250, 250, 250, 255])
            }
        });
        img.save(&source).unwrap();

        let written = IconRenderer::new().render(&source, tmp.path()).unwrap();
        assert_eq!(written.len(), 1 + ICON_SIZES.len());

        // Primary icon is cropped to the opaque 32x32 square.
        let primary = image::open(&written[0]).unwrap().to_rgba8();
        assert_eq!(primary.dimensions(), (32, 32));

        for (path, size) in written[1..].iter().zip(ICON_SIZES) {
            let icon = image::open(path).unwrap().to_rgba8();
            assert_eq!(icon.dimensions(), (size, size));
            assert!(path.file_name().unwrap().to_str().unwrap().contains(&size.to_string()));
        }
    }
}
