use image::{imageops, RgbaImage};

/// Alpha-composite `overlay` over `background`. Both must have the same size.
pub fn over(background: &RgbaImage, overlay: &RgbaImage) -> RgbaImage {
    debug_assert_eq!(background.dimensions(), overlay.dimensions());

    let mut out = background.clone();
    imageops::overlay(&mut out, overlay, 0, 0);
    out
}

#[cfg(test)]
pub(crate) fn assert_close(actual: &image::Rgba<u8>, expected: [u8; 4]) {
    let close = actual
        .0
        .iter()
        .zip(expected)
        .all(|(&a, e)| (a as i16 - e as i16).abs() <= 1);
    assert!(close, "{:?} is not within 1 of {:?}", actual, expected);
}
