//! Page-image preprocessing to improve OCR quality.

use image::{imageops, DynamicImage, GrayImage, Luma};

/// Histogram fraction ignored at each end when stretching contrast.
const CONTRAST_CUTOFF: f32 = 0.05;

/// Prepares a rendered page for OCR: grayscale, contrast stretch with a 5%
/// histogram cutoff, then sharpening.
pub fn prepare_for_ocr(img: &DynamicImage) -> GrayImage {
    let gray = img.to_luma8();
    let stretched = stretch_contrast(&gray, CONTRAST_CUTOFF);
    imageops::unsharpen(&stretched, 1.0, 2)
}

/// Linear contrast stretch. The darkest and brightest `cutoff` fractions of
/// pixels are clipped and the remaining range remapped to 0..=255. Returns
/// the input unchanged when the image is flat (no usable range).
fn stretch_contrast(img: &GrayImage, cutoff: f32) -> GrayImage {
    let total = u64::from(img.width()) * u64::from(img.height());
    if total == 0 {
        return img.clone();
    }

    let mut histogram = [0u64; 256];
    for pixel in img.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let clip = (total as f64 * f64::from(cutoff)) as u64;

    let mut lo = 0usize;
    let mut acc = 0u64;
    while lo < 255 {
        acc += histogram[lo];
        if acc > clip {
            break;
        }
        lo += 1;
    }

    let mut hi = 255usize;
    acc = 0;
    while hi > 0 {
        acc += histogram[hi];
        if acc > clip {
            break;
        }
        hi -= 1;
    }

    if hi <= lo {
        return img.clone();
    }

    let range = (hi - lo) as f32;
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let value = f32::from(img.get_pixel(x, y).0[0]);
        let scaled = ((value - lo as f32) / range * 255.0).clamp(0.0, 255.0);
        Luma([scaled.round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn test_flat_image_unchanged() {
        let img = solid(4, 4, 128);
        assert_eq!(stretch_contrast(&img, 0.05), img);
    }

    #[test]
    fn test_two_tone_image_stretches_to_full_range() {
        let mut img = solid(2, 2, 100);
        img.put_pixel(0, 0, Luma([50]));
        img.put_pixel(1, 1, Luma([150]));

        let stretched = stretch_contrast(&img, 0.0);
        let values: Vec<u8> = stretched.pixels().map(|p| p.0[0]).collect();
        assert!(values.contains(&0));
        assert!(values.contains(&255));
    }

    #[test]
    fn test_prepare_for_ocr_preserves_dimensions() {
        let img = DynamicImage::ImageLuma8(solid(32, 16, 200));
        let processed = prepare_for_ocr(&img);
        assert_eq!(processed.dimensions(), (32, 16));
    }

    #[test]
    fn test_stretch_preserves_ordering() {
        let mut img = solid(3, 1, 80);
        img.put_pixel(1, 0, Luma([120]));
        img.put_pixel(2, 0, Luma([200]));

        let stretched = stretch_contrast(&img, 0.0);
        let v: Vec<u8> = stretched.pixels().map(|p| p.0[0]).collect();
        assert!(v[0] < v[1] && v[1] < v[2]);
    }
}
