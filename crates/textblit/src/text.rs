use crate::clip::Clip;
use crate::surface::TextSurface;

/// Translate an ASCII byte to the screen code the character ROM indexes with.
///
/// Lowercase letters share the uppercase glyphs; anything without a glyph in
/// the uppercase/graphics set becomes `?`.
pub const fn screen_code(ascii: u8) -> u8 {
    match ascii {
        b'@'..=b'_' => ascii - b'@',
        b'a'..=b'z' => ascii - b'a' + 1,
        b' '..=b'?' => ascii,
        _ => b'?',
    }
}

/// Printable approximation of a screen code; reverse-video codes map to
/// their normal counterpart.
pub const fn ascii(code: u8) -> char {
    match code & 0x7f {
        c @ 0..=31 => (c + b'@') as char,
        c @ 32..=63 => c as char,
        _ => '?',
    }
}

/// Fill both planes of the whole surface.
pub fn clear<S: TextSurface>(surface: &mut S, glyph: u8, color: u8) {
    for index in 0..S::WIDTH * S::HEIGHT {
        surface.write_cell(index, glyph, color);
    }
}

/// Write `text` starting at column `x` of row `y`, clipped to the surface.
pub fn draw_text<S: TextSurface>(surface: &mut S, x: isize, y: isize, text: &str, color: u8) {
    let Some(clip) = Clip::new(x, y, text.len(), 1, S::WIDTH, S::HEIGHT) else {
        log::trace!("text at ({}, {}) is off screen", x, y);
        return;
    };

    let row = clip.y.start * S::WIDTH;
    let visible = text.bytes().skip(clip.x.trim).take(clip.x.len);
    for (i, byte) in visible.enumerate() {
        surface.write_cell(row + clip.x.start + i, screen_code(byte), color);
    }
}
