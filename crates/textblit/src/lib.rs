#![no_std]

pub mod c64;
pub mod clip;
pub mod pattern;
pub mod surface;
pub mod text;

pub use clip::Clip;
pub use pattern::fill_checkerboard;
pub use surface::{MappedSurface, SurfaceError, TextBuffer, TextSurface};
pub use text::{clear, draw_text};

/// Copy a `rect_w` x `rect_h` window of `src`, starting at
/// (`src_x`, `src_y`), onto the surface at (`dst_x`, `dst_y`), writing
/// `color` into every cell that receives a glyph.
///
/// The destination is clipped to the surface, and the source window moves by
/// however much was cut from the top-left, so each destination cell still
/// reads the same source cell it would have without clipping. Source reads
/// whose linear index falls outside `src_w * src_h` (or `src`) leave their
/// cell untouched. Nothing here can fail.
pub fn draw_to_screen<S: TextSurface>(
    surface: &mut S,
    src: &[u8],
    src_w: usize,
    src_h: usize,
    src_x: isize,
    src_y: isize,
    dst_x: isize,
    dst_y: isize,
    rect_w: usize,
    rect_h: usize,
    color: u8,
) {
    let Some(clip) = Clip::new(dst_x, dst_y, rect_w, rect_h, S::WIDTH, S::HEIGHT) else {
        log::trace!(
            "blit {}x{} at ({}, {}) clipped away",
            rect_w,
            rect_h,
            dst_x,
            dst_y
        );
        return;
    };
    log::debug!("blit window {:?}", clip);

    let src_len = src_w.checked_mul(src_h).map_or(src.len(), |n| n.min(src.len())) as i128;
    let src_x = src_x as i128 + clip.x.trim as i128;
    let src_y = src_y as i128 + clip.y.trim as i128;

    let mut skipped = 0usize;
    for r in 0..clip.y.len {
        let src_row = (src_y + r as i128).saturating_mul(src_w as i128);
        let dst_row = (clip.y.start + r) * S::WIDTH + clip.x.start;
        for c in 0..clip.x.len {
            let pos = src_row.saturating_add(src_x + c as i128);
            if pos < 0 || pos >= src_len {
                skipped += 1;
                continue;
            }
            surface.write_cell(dst_row + c, src[pos as usize], color);
        }
    }

    if skipped > 0 {
        log::trace!("blit skipped {} of {} cells", skipped, clip.area());
    }
}

/// A blit request: which window of a source goes where on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub src_x: isize,
    pub src_y: isize,
    pub dst_x: isize,
    pub dst_y: isize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn blit<S: TextSurface>(&self, surface: &mut S, src: &[u8], src_w: usize, src_h: usize, color: u8) {
        draw_to_screen(
            surface,
            src,
            src_w,
            src_h,
            self.src_x,
            self.src_y,
            self.dst_x,
            self.dst_y,
            self.width,
            self.height,
            color,
        );
    }

    /// The part of this request that lands on a `surface_w` x `surface_h`
    /// surface, if any.
    pub fn clip(&self, surface_w: usize, surface_h: usize) -> Option<Clip> {
        Clip::new(self.dst_x, self.dst_y, self.width, self.height, surface_w, surface_h)
    }
}
