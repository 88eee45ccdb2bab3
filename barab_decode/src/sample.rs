//! Reduction of images to scanlines.

use std::path::Path;

use barab_core::Scanline;
use image::{DynamicImage, ImageError, RgbImage};
use thiserror::Error;

/// Sum of the three channels under which a pixel is a bar, that is a mean under 128.
const DARK_SUM: u32 = 3 * 128;

/// Extensions [load_scanline] accepts.
pub const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("unsupported image format {0:?}, expected one of png, jpg, jpeg")]
    UnsupportedFormat(String),
    #[error("row {row} is outside of an image {height} pixels high")]
    RowOutOfBounds { row: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] ImageError),
}

fn sample_rgb(image: &RgbImage, row: u32) -> Result<Scanline, SampleError> {
    if row >= image.height() {
        return Err(SampleError::RowOutOfBounds {
            row,
            height: image.height(),
        });
    }
    let scanline = (0..image.width())
        .map(|x| {
            let [r, g, b] = image.get_pixel(x, row).0;
            (r as u32 + g as u32 + b as u32) < DARK_SUM
        })
        .collect();
    Ok(scanline)
}

/// Sample row `row` of `image`, a pixel being a bar if the mean of its channels is under 128.
pub fn sample_row(image: &DynamicImage, row: u32) -> Result<Scanline, SampleError> {
    sample_rgb(&image.to_rgb8(), row)
}

/// Sample the row in the middle of `image`.
pub fn sample_middle(image: &DynamicImage) -> Result<Scanline, SampleError> {
    let image = image.to_rgb8();
    sample_rgb(&image, image.height() / 2)
}

/// Open the image at `path` and sample its middle row.
pub fn load_scanline<P: AsRef<Path>>(path: P) -> Result<Scanline, SampleError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !EXTENSIONS.contains(&extension.as_str()) {
        return Err(SampleError::UnsupportedFormat(extension));
    }
    let image = image::open(path)?;
    sample_middle(&image)
}

#[cfg(test)]
mod test {
    use super::*;
    use image::Rgb;

    fn striped(width: u32, height: u32) -> DynamicImage {
        let image = RgbImage::from_fn(width, height, |x, _| {
            if x % 4 < 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn test_sample_middle() {
        let scanline = sample_middle(&striped(8, 5)).unwrap();
        let samples: Vec<_> = (0..scanline.len()).filter_map(|i| scanline.get(i)).collect();
        assert_eq!(samples, vec![true, true, false, false, true, true, false, false]);
    }

    #[test]
    fn test_mean_threshold() {
        // Means of 127 and 128.
        let image = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([127, 127, 127])
            } else {
                Rgb([128, 128, 128])
            }
        });
        let scanline = sample_row(&DynamicImage::ImageRgb8(image), 0).unwrap();
        assert_eq!(scanline.get(0), Some(true));
        assert_eq!(scanline.get(1), Some(false));
    }

    #[test]
    fn test_row_out_of_bounds() {
        let err = sample_row(&striped(4, 2), 2).unwrap_err();
        assert!(matches!(
            err,
            SampleError::RowOutOfBounds { row: 2, height: 2 }
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        for path in ["barcode.gif", "barcode"] {
            let err = load_scanline(path).unwrap_err();
            assert!(matches!(err, SampleError::UnsupportedFormat(_)), "{}", path);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_scanline("/nonexistent/barcode.png").unwrap_err();
        assert!(matches!(err, SampleError::Image(_)));
    }
}
