//! Text rendering for the console.
//!
//! The terminal runs in raw mode, so every line break is written as `\r\n`.

use morse_core::{Report, StatusColor};

/// Report box on its own lines.
pub fn report_text(report: &Report) -> String {
    format!("\r\n{}\r\n", report.to_string().replace('\n', "\r\n"))
}

/// Status badge naming the colour and its RGB value.
pub fn status_text(color: StatusColor) -> String {
    let (r, g, b) = color.rgb();
    format!("[status: {} #{r:02X}{g:02X}{b:02X}]\r\n", status_name(color))
}

/// Glyph a finished character decoded to.
pub fn glyph_text(glyph: char) -> String {
    format!(" => {glyph}\r\n")
}

fn status_name(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Blue => "blue",
        StatusColor::Green => "green",
        StatusColor::Yellow => "yellow",
        StatusColor::Orange => "orange",
        StatusColor::Red => "red",
    }
}
