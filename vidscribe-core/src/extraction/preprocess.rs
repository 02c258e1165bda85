//! Frame preprocessing for OCR.
//!
//! A deterministic, side-effect-free transform: RGB frame in, binary image
//! out. Grayscale conversion, global thresholding with an Otsu-selected
//! threshold so the binarization adapts to each frame's brightness and
//! contrast, then a 3x3 median filter to knock out the isolated pixels the
//! thresholding leaves behind without blurring character strokes.

use crate::error::{CoreError, CoreResult};
use crate::external::decoder::Frame;
use image::GrayImage;

/// Binarized derivative of a [`Frame`], used only as OCR input.
#[derive(Debug, Clone)]
pub struct PreprocessedFrame {
    /// Index of the source frame, for traceability
    pub index: u64,
    /// Binary image: every pixel is 0 or 255
    pub image: GrayImage,
}

/// Normalizes a raw frame into a binary image suitable for text recognition.
///
/// Fails fast with `InvalidFrame` on zero-size or truncated frames; there are
/// no other error conditions.
pub fn preprocess(frame: &Frame) -> CoreResult<PreprocessedFrame> {
    if frame.width == 0 || frame.height == 0 {
        return Err(CoreError::InvalidFrame(format!(
            "frame {} has zero size ({}x{})",
            frame.index, frame.width, frame.height
        )));
    }

    let expected_len = frame.width as usize * frame.height as usize * 3;
    if frame.data.len() != expected_len {
        return Err(CoreError::InvalidFrame(format!(
            "frame {} has {} bytes of pixel data, expected {}",
            frame.index,
            frame.data.len(),
            expected_len
        )));
    }

    let gray = to_grayscale(&frame.data);
    let threshold = otsu_threshold(&histogram(&gray), gray.len() as u64);
    let binary: Vec<u8> = gray
        .iter()
        .map(|&p| if p > threshold { 255 } else { 0 })
        .collect();
    let filtered = median_filter_3x3(&binary, frame.width as usize, frame.height as usize);

    let image = GrayImage::from_raw(frame.width, frame.height, filtered).ok_or_else(|| {
        CoreError::InvalidFrame(format!(
            "frame {} produced an inconsistent grayscale buffer",
            frame.index
        ))
    })?;

    Ok(PreprocessedFrame {
        index: frame.index,
        image,
    })
}

/// RGB24 to single-channel grayscale with integer BT.601 weights.
fn to_grayscale(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            ((r * 299 + g * 587 + b * 114) / 1000) as u8
        })
        .collect()
}

fn histogram(gray: &[u8]) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for &p in gray {
        hist[p as usize] += 1;
    }
    hist
}

/// Otsu's method: picks the threshold maximizing between-class variance of
/// the grayscale histogram.
fn otsu_threshold(hist: &[u64; 256], total: u64) -> u8 {
    let weighted_sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let total = total as f64;
    let mut background_sum = 0.0;
    let mut background_weight = 0.0;
    let mut best_variance = 0.0;
    let mut best_threshold = 0u8;

    for (level, &count) in hist.iter().enumerate() {
        background_weight += count as f64;
        if background_weight == 0.0 {
            continue;
        }
        let foreground_weight = total - background_weight;
        if foreground_weight == 0.0 {
            break;
        }

        background_sum += level as f64 * count as f64;
        let background_mean = background_sum / background_weight;
        let foreground_mean = (weighted_sum - background_sum) / foreground_weight;
        let diff = background_mean - foreground_mean;
        let variance = background_weight * foreground_weight * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            best_threshold = level as u8;
        }
    }

    best_threshold
}

/// 3x3 median filter with edge replication. On a binary image this is a
/// majority vote over the neighborhood, which removes isolated pixels while
/// keeping stroke edges intact.
fn median_filter_3x3(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![0u8; pixels.len()];
    for y in 0..height {
        for x in 0..width {
            let mut window = [0u8; 9];
            let mut n = 0;
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let sy = (y as i64 + dy).clamp(0, height as i64 - 1) as usize;
                    let sx = (x as i64 + dx).clamp(0, width as i64 - 1) as usize;
                    window[n] = pixels[sy * width + sx];
                    n += 1;
                }
            }
            window.sort_unstable();
            out[y * width + x] = window[4];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_from_gray(width: u32, height: u32, gray: &[u8], index: u64) -> Frame {
        let data = gray.iter().flat_map(|&g| [g, g, g]).collect();
        Frame {
            index,
            width,
            height,
            data,
        }
    }

    #[test]
    fn test_rejects_zero_size_frame() {
        let frame = Frame {
            index: 7,
            width: 0,
            height: 0,
            data: Vec::new(),
        };
        assert!(matches!(
            preprocess(&frame),
            Err(CoreError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_rejects_truncated_frame() {
        let frame = Frame {
            index: 7,
            width: 4,
            height: 4,
            data: vec![0; 10],
        };
        assert!(matches!(
            preprocess(&frame),
            Err(CoreError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_preprocess_is_deterministic() {
        let gray: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let frame = frame_from_gray(8, 8, &gray, 3);

        let first = preprocess(&frame).expect("first pass");
        let second = preprocess(&frame).expect("second pass");
        assert_eq!(first.image.as_raw(), second.image.as_raw());
        assert_eq!(first.index, 3);
    }

    #[test]
    fn test_output_is_binary() {
        let gray: Vec<u8> = (0..=255u32).map(|i| i as u8).take(256).collect();
        let frame = frame_from_gray(16, 16, &gray, 0);
        let pre = preprocess(&frame).expect("preprocess");
        assert!(pre.image.as_raw().iter().all(|&p| p == 0 || p == 255));
    }

    #[test]
    fn test_otsu_separates_bimodal_histogram() {
        // Half dark (around 40), half bright (around 200): the threshold must
        // land between the modes.
        let mut hist = [0u64; 256];
        hist[40] = 500;
        hist[200] = 500;
        let t = otsu_threshold(&hist, 1000);
        assert!((40..200).contains(&t), "threshold {t} outside modes");
    }

    #[test]
    fn test_median_removes_isolated_pixel() {
        // A lone white pixel in a black field disappears.
        let mut pixels = vec![0u8; 25];
        pixels[12] = 255;
        let filtered = median_filter_3x3(&pixels, 5, 5);
        assert!(filtered.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_median_keeps_solid_region() {
        // A 3x3 white block in a 5x5 field keeps its center.
        let mut pixels = vec![0u8; 25];
        for y in 1..4 {
            for x in 1..4 {
                pixels[y * 5 + x] = 255;
            }
        }
        let filtered = median_filter_3x3(&pixels, 5, 5);
        assert_eq!(filtered[2 * 5 + 2], 255);
    }
}
