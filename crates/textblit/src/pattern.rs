/// Fill a row-major `width` x `height` grid with alternating cells, starting
/// with `back` in the top-left corner. Cells past the end of `buf` are skipped.
pub fn fill_checkerboard(buf: &mut [u8], back: u8, fore: u8, width: usize, height: usize) {
    for (i, cell) in buf.iter_mut().take(width.saturating_mul(height)).enumerate() {
        let (x, y) = (i % width, i / width);
        *cell = if (x + y) % 2 == 1 { fore } else { back };
    }
}
