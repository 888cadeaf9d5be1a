//! Rectangle clipping against a fixed surface.
//!
//! Edges are computed in `i128` so that `start + len - 1` can never wrap,
//! whatever the caller passes in; clamping only happens on the final value.

/// One axis of a clipped rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First in-bounds coordinate on the surface.
    pub start: usize,
    /// Number of in-bounds cells.
    pub len: usize,
    /// Cells cut off before `start`; the source window moves by the same amount.
    pub trim: usize,
}

/// Clamp `[start, start + len)` to `[0, limit)`.
///
/// Returns `None` if nothing of the span is left.
pub fn clamp_span(start: isize, len: usize, limit: usize) -> Option<Span> {
    if len == 0 || limit == 0 {
        return None;
    }
    let first = start as i128;
    let last = first + len as i128 - 1;
    let max = limit as i128 - 1;

    // Both edges past the same side would clamp to a single valid cell.
    if last < 0 || first > max {
        return None;
    }

    let lo = first.clamp(0, max);
    let hi = last.clamp(0, max);
    if lo > hi {
        return None;
    }

    Some(Span {
        start: lo as usize,
        len: (hi - lo + 1) as usize,
        trim: (lo - first) as usize,
    })
}

/// A destination rectangle after clipping to a `width` x `height` surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub x: Span,
    pub y: Span,
}

impl Clip {
    pub fn new(
        dst_x: isize,
        dst_y: isize,
        rect_w: usize,
        rect_h: usize,
        surface_w: usize,
        surface_h: usize,
    ) -> Option<Self> {
        let x = clamp_span(dst_x, rect_w, surface_w)?;
        let y = clamp_span(dst_y, rect_h, surface_h)?;
        Some(Clip { x, y })
    }

    /// Number of surface cells covered by the clipped rectangle.
    pub fn area(&self) -> usize {
        self.x.len * self.y.len
    }
}

#[cfg(test)]
mod tests {
    use super::{Clip, Span, clamp_span};

    #[test]
    fn span_inside() {
        assert_eq!(
            clamp_span(3, 4, 40),
            Some(Span {
                start: 3,
                len: 4,
                trim: 0
            })
        );
    }

    #[test]
    fn span_trimmed_at_start() {
        assert_eq!(
            clamp_span(-1, 3, 4),
            Some(Span {
                start: 0,
                len: 2,
                trim: 1
            })
        );
    }

    #[test]
    fn span_trimmed_at_end() {
        assert_eq!(
            clamp_span(38, 10, 40),
            Some(Span {
                start: 38,
                len: 2,
                trim: 0
            })
        );
    }

    #[test]
    fn span_covering_both_edges() {
        assert_eq!(
            clamp_span(-5, 100, 40),
            Some(Span {
                start: 0,
                len: 40,
                trim: 5
            })
        );
    }

    #[test]
    fn span_outside() {
        assert_eq!(clamp_span(40, 1, 40), None);
        assert_eq!(clamp_span(100, 10, 40), None);
        assert_eq!(clamp_span(-3, 3, 40), None);
        assert_eq!(clamp_span(-10, 1, 40), None);
    }

    #[test]
    fn span_empty() {
        assert_eq!(clamp_span(0, 0, 40), None);
        assert_eq!(clamp_span(5, 3, 0), None);
    }

    #[test]
    fn span_extreme_values() {
        assert_eq!(clamp_span(isize::MAX, usize::MAX, 40), None);
        assert_eq!(
            clamp_span(isize::MIN, usize::MAX, 40),
            Some(Span {
                start: 0,
                len: 40,
                trim: isize::MIN.unsigned_abs()
            })
        );
    }

    #[test]
    fn clip_needs_both_axes() {
        assert!(Clip::new(0, 0, 4, 4, 40, 25).is_some());
        assert!(Clip::new(0, 25, 4, 4, 40, 25).is_none());
        assert!(Clip::new(-4, 0, 4, 4, 40, 25).is_none());

        let clip = Clip::new(36, 22, 10, 10, 40, 25).unwrap();
        assert_eq!(clip.area(), 4 * 3);
    }
}
