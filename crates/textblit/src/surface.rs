use core::marker::PhantomData;

/// A fixed-size text-mode display made of two parallel byte planes.
///
/// Cells are addressed linearly, `row * WIDTH + col`. Callers in this crate
/// only ever pass indices below `WIDTH * HEIGHT`; implementations must still
/// ignore anything larger rather than write past the planes.
pub trait TextSurface {
    const WIDTH: usize;
    const HEIGHT: usize;

    fn write_glyph(&mut self, index: usize, glyph: u8);
    fn write_color(&mut self, index: usize, color: u8);

    fn write_cell(&mut self, index: usize, glyph: u8, color: u8) {
        self.write_glyph(index, glyph);
        self.write_color(index, color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    PlaneLength { expected: usize, found: usize },
}

impl core::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SurfaceError::PlaneLength { expected, found } => write!(
                f,
                "plane holds {} bytes, surface needs {}",
                found, expected
            ),
        }
    }
}

impl core::error::Error for SurfaceError {}

fn check_plane(plane: &[u8], expected: usize) -> Result<(), SurfaceError> {
    if plane.len() != expected {
        return Err(SurfaceError::PlaneLength {
            expected,
            found: plane.len(),
        });
    }
    Ok(())
}

/// An owned in-memory surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer<const W: usize, const H: usize> {
    glyphs: [[u8; W]; H],
    colors: [[u8; W]; H],
}

impl<const W: usize, const H: usize> TextBuffer<W, H> {
    pub const fn new(glyph: u8, color: u8) -> Self {
        TextBuffer {
            glyphs: [[glyph; W]; H],
            colors: [[color; W]; H],
        }
    }

    /// Build a buffer from two row-major planes of exactly `W * H` bytes.
    pub fn from_planes(glyphs: &[u8], colors: &[u8]) -> Result<Self, SurfaceError> {
        check_plane(glyphs, W * H)?;
        check_plane(colors, W * H)?;
        let mut buf = Self::new(0, 0);
        bytemuck::cast_slice_mut::<[u8; W], u8>(&mut buf.glyphs).copy_from_slice(glyphs);
        bytemuck::cast_slice_mut::<[u8; W], u8>(&mut buf.colors).copy_from_slice(colors);
        Ok(buf)
    }

    pub fn glyphs(&self) -> &[u8] {
        bytemuck::cast_slice(&self.glyphs)
    }

    pub fn colors(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn glyph(&self, row: usize, col: usize) -> Option<u8> {
        self.glyphs.get(row)?.get(col).copied()
    }

    pub fn color(&self, row: usize, col: usize) -> Option<u8> {
        self.colors.get(row)?.get(col).copied()
    }

    pub fn glyph_rows(&self) -> impl Iterator<Item = &[u8; W]> {
        self.glyphs.iter()
    }

    pub fn color_rows(&self) -> impl Iterator<Item = &[u8; W]> {
        self.colors.iter()
    }
}

impl<const W: usize, const H: usize> Default for TextBuffer<W, H> {
    fn default() -> Self {
        Self::new(b' ', 0)
    }
}

impl<const W: usize, const H: usize> TextSurface for TextBuffer<W, H> {
    const WIDTH: usize = W;
    const HEIGHT: usize = H;

    fn write_glyph(&mut self, index: usize, glyph: u8) {
        if let Some(cell) = bytemuck::cast_slice_mut::<[u8; W], u8>(&mut self.glyphs).get_mut(index) {
            *cell = glyph;
        }
    }

    fn write_color(&mut self, index: usize, color: u8) {
        if let Some(cell) = bytemuck::cast_slice_mut::<[u8; W], u8>(&mut self.colors).get_mut(index) {
            *cell = color;
        }
    }
}

/// A surface living in memory shared with a display device.
///
/// Every write is a volatile store, so the device sees cells in the order
/// they were drawn and the compiler never elides a store it cannot observe.
pub struct MappedSurface<'a, const W: usize, const H: usize> {
    glyphs: *mut u8,
    colors: *mut u8,
    _planes: PhantomData<&'a mut [u8]>,
}

impl<const W: usize, const H: usize> MappedSurface<'static, W, H> {
    /// # Safety
    ///
    /// Both pointers must be valid for writes of `W * H` bytes for the rest of
    /// the program, and nothing else may write through them while the surface
    /// exists.
    pub const unsafe fn from_raw(glyphs: *mut u8, colors: *mut u8) -> Self {
        MappedSurface {
            glyphs,
            colors,
            _planes: PhantomData,
        }
    }
}

impl<'a, const W: usize, const H: usize> MappedSurface<'a, W, H> {
    pub fn from_slices(glyphs: &'a mut [u8], colors: &'a mut [u8]) -> Result<Self, SurfaceError> {
        check_plane(glyphs, W * H)?;
        check_plane(colors, W * H)?;
        Ok(MappedSurface {
            glyphs: glyphs.as_mut_ptr(),
            colors: colors.as_mut_ptr(),
            _planes: PhantomData,
        })
    }
}

impl<const W: usize, const H: usize> TextSurface for MappedSurface<'_, W, H> {
    const WIDTH: usize = W;
    const HEIGHT: usize = H;

    fn write_glyph(&mut self, index: usize, glyph: u8) {
        if index < W * H {
            // SAFETY: in bounds of a plane the constructor vouched for.
            unsafe { self.glyphs.add(index).write_volatile(glyph) };
        }
    }

    fn write_color(&mut self, index: usize, color: u8) {
        if index < W * H {
            // SAFETY: as above.
            unsafe { self.colors.add(index).write_volatile(color) };
        }
    }
}
