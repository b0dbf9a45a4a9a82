use crate::render::Color;

/// Background darkness below which text switches from white to black.
pub const CONTRAST_THRESHOLD: f64 = 105.0;

/// Perceived luminance of 8-bit channels (ITU-R BT.601 weights).
#[must_use]
pub fn luminance(red: u8, green: u8, blue: u8) -> f64 {
    f64::from(red) * 0.299 + f64::from(green) * 0.587 + f64::from(blue) * 0.114
}

/// Picks black or white text for a label with the given background.
#[must_use]
pub fn contrast_text_color(background: Color) -> Color {
    let [red, green, blue] = background.to_rgb8();
    if 255.0 - luminance(red, green, blue) < CONTRAST_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Same as [`contrast_text_color`] for a hex string.
///
/// Alpha in `#rrggbbaa` input is ignored. Unparseable input yields white text.
#[must_use]
pub fn ideal_text_color(background: &str) -> Color {
    Color::from_hex(background).map_or(Color::WHITE, contrast_text_color)
}
