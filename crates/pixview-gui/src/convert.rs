use std::borrow::Cow;

use image::imageops::{self, FilterType};

/// Convert decoded RGBA pixels to an egui ColorImage.
pub fn rgba_to_color_image(pixels: &image::RgbaImage) -> egui::ColorImage {
    let (w, h) = pixels.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], pixels.as_raw())
}

/// Shrink `pixels` so neither side exceeds `max_side`, keeping the aspect
/// ratio. Images that already fit are borrowed unchanged.
///
/// Only the texture is reduced; the preview still lays out from the natural
/// size, so the downscaled texture is stretched to the same on-screen rect.
pub fn fit_texture_side(pixels: &image::RgbaImage, max_side: usize) -> Cow<'_, image::RgbaImage> {
    let (w, h) = pixels.dimensions();
    let max_side = max_side.clamp(1, u32::MAX as usize) as u32;
    let longest = w.max(h);
    if longest <= max_side {
        return Cow::Borrowed(pixels);
    }

    let ratio = max_side as f64 / longest as f64;
    let scaled = |side: u32| ((side as f64 * ratio).round() as u32).clamp(1, max_side);
    Cow::Owned(imageops::resize(
        pixels,
        scaled(w),
        scaled(h),
        FilterType::Triangle,
    ))
}
