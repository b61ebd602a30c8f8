//! Cross-checks the integral-image path against a direct sliding-window
//! computation on realistic inputs, including strided buffers.

use niblack_core::image::ImageView;
use niblack_core::threshold::{binarize, niblack_threshold};

/// Direct sliding-window Niblack, no integral images.
fn niblack_brute_force(img: &ImageView, window_size: usize, k: f32) -> Vec<f32> {
    let half = (window_size / 2) as i64;
    let mut out = vec![0f32; img.width * img.height];
    for y in 0..img.height {
        for x in 0..img.width {
            let mut sum = 0.0f64;
            let mut sq_sum = 0.0f64;
            let mut count = 0u32;
            for dy in -half..=half {
                let sy = y as i64 + dy;
                if sy < 0 || sy >= img.height as i64 {
                    continue;
                }
                for dx in -half..=half {
                    let sx = x as i64 + dx;
                    if sx < 0 || sx >= img.width as i64 {
                        continue;
                    }
                    let v = f64::from(img.get_pixel(sx as usize, sy as usize));
                    sum += v;
                    sq_sum += v * v;
                    count += 1;
                }
            }
            let mean = sum / f64::from(count);
            let variance = (sq_sum / f64::from(count) - mean * mean).max(0.0);
            out[y * img.width + x] = (mean + f64::from(k) * variance.sqrt()) as f32;
        }
    }
    out
}

/// Diagonal gradient with a dark block, enough structure to exercise both
/// smooth and high-contrast windows.
fn synthetic_document(width: usize, height: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..width * height)
        .map(|i| (150 + ((i % width) + (i / width)) % 80) as u8)
        .collect();
    for y in height / 4..height / 2 {
        for x in width / 4..width / 2 {
            data[y * width + x] = 30;
        }
    }
    data
}

#[test]
fn test_full_frame_agreement_window_15() {
    let width = 64;
    let height = 48;
    let data = synthetic_document(width, height);
    let img = ImageView::from_packed(&data, width, height).unwrap();

    let map = niblack_threshold(&img, 15, -0.2);
    let expected = niblack_brute_force(&img, 15, -0.2);

    assert_eq!(map.len(), width * height);
    for (i, (&g, &e)) in map.iter().zip(expected.iter()).enumerate() {
        assert!(
            (g - e).abs() <= 1e-3,
            "Mismatch at pixel {}: got {}, expected {}",
            i,
            g,
            e
        );
    }
}

#[test]
fn test_strided_buffer_matches_packed() {
    // Same pixels, once packed and once with 5 bytes of row padding filled
    // with a poison value. Padding must never leak into the statistics.
    let width = 20;
    let height = 16;
    let packed = synthetic_document(width, height);

    let stride = width + 5;
    let mut padded = vec![0xAAu8; stride * height];
    for y in 0..height {
        padded[y * stride..y * stride + width]
            .copy_from_slice(&packed[y * width..(y + 1) * width]);
    }

    let img_packed = ImageView::from_packed(&packed, width, height).unwrap();
    let img_padded = ImageView::new(&padded, width, height, stride).unwrap();

    let map_packed = niblack_threshold(&img_packed, 7, -0.2);
    let map_padded = niblack_threshold(&img_padded, 7, -0.2);
    assert_eq!(map_packed, map_padded);
}

#[test]
fn test_binarize_end_to_end() {
    let width = 64;
    let height = 48;
    let data = synthetic_document(width, height);
    let img = ImageView::from_packed(&data, width, height).unwrap();

    let map = niblack_threshold(&img, 15, -0.2);
    let mut binary = vec![0u8; width * height];
    binarize(&img, &map, &mut binary);

    // The dark block interior must be below its local threshold, the
    // gradient background above it.
    assert_eq!(binary[(height / 3) * width + width / 3], 0);
    assert_eq!(binary[2 * width + (width - 3)], 255);
    assert!(binary.iter().all(|&b| b == 0 || b == 255));
}

#[test]
fn test_empty_image_yields_empty_map() {
    let img = ImageView::from_packed(&[], 0, 0).unwrap();
    assert!(niblack_threshold(&img, 15, -0.2).is_empty());
}
