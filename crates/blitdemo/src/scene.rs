use std::io::Write;

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use textblit::{c64, text, Rect, TextBuffer, TextSurface};

pub const SRC_W: usize = 80;
pub const SRC_H: usize = 50;

pub type Screen = TextBuffer<{ c64::WIDTH }, { c64::HEIGHT }>;

const TITLE: &str = "textblit demo";

/// The off-screen play field the demo blits from.
pub fn game_field() -> Box<[[u8; SRC_W]; SRC_H]> {
    let mut field = Box::new([[0u8; SRC_W]; SRC_H]);
    textblit::fill_checkerboard(
        bytemuck::cast_slice_mut(&mut field[..]),
        b' ',
        b'#',
        SRC_W,
        SRC_H,
    );
    field
}

/// A request that may hang off any edge of the screen and read from before
/// the start of the field.
pub fn random_rect<R: Rng>(rng: &mut R) -> (Rect, u8) {
    let width = rng.gen_range(1..=20usize);
    let height = rng.gen_range(1..=12usize);
    let rect = Rect {
        src_x: rng.gen_range(-4..SRC_W as isize),
        src_y: rng.gen_range(-4..SRC_H as isize),
        dst_x: rng.gen_range(-(width as isize)..=Screen::WIDTH as isize + 2),
        dst_y: rng.gen_range(-(height as isize)..=Screen::HEIGHT as isize + 2),
        width,
        height,
    };
    let color = rng.gen_range(c64::WHITE..=c64::LIGHT_GREY);
    (rect, color)
}

pub fn render(seed: u64, count: usize) -> Screen {
    let field = game_field();
    let src: &[u8] = bytemuck::cast_slice(&field[..]);

    let mut screen = Screen::default();
    text::clear(&mut screen, text::screen_code(b' '), c64::LIGHT_BLUE);

    let title_x = (Screen::WIDTH - TITLE.len()) / 2;
    text::draw_text(&mut screen, title_x as isize, 0, TITLE, c64::WHITE);

    textblit::draw_to_screen(&mut screen, src, SRC_W, SRC_H, 0, 0, 5, 5, 10, 5, c64::YELLOW);

    info!("seed {}, {} random blits", seed, count);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in 0..count {
        let (rect, color) = random_rect(&mut rng);
        match rect.clip(Screen::WIDTH, Screen::HEIGHT) {
            Some(clip) => debug!("#{}: {:?} color {} covers {} cells", i, rect, color, clip.area()),
            None => debug!("#{}: {:?} is off screen", i, rect),
        }
        rect.blit(&mut screen, src, SRC_W, SRC_H, color);
    }

    screen
}

pub fn write_screen(screen: &Screen, out: &mut impl Write, colors: bool) -> std::io::Result<()> {
    for row in screen.glyph_rows() {
        let line: String = row.iter().map(|&code| text::ascii(code)).collect();
        writeln!(out, "{}", line)?;
    }
    if colors {
        writeln!(out)?;
        for row in screen.color_rows() {
            let line: String = row.iter().map(|&c| format!("{:x}", c & 0xf)).collect();
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(1234, 50), render(1234, 50));
    }

    #[test]
    fn test_fixed_blit() {
        let screen = render(0, 0);
        assert_eq!(screen.glyph(5, 5), Some(b' '));
        assert_eq!(screen.glyph(5, 6), Some(b'#'));
        assert_eq!(screen.color(5, 6), Some(c64::YELLOW));
        assert_eq!(screen.glyph(5, 15), Some(b' '));
        assert_eq!(screen.color(5, 15), Some(c64::LIGHT_BLUE));
        assert_eq!(screen.color(10, 5), Some(c64::LIGHT_BLUE));
    }

    #[test]
    fn test_random_rects_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..1000 {
            let (rect, color) = random_rect(&mut rng);
            assert!((1..=20).contains(&rect.width));
            assert!((1..=12).contains(&rect.height));
            assert!(rect.src_x >= -4 && rect.src_y >= -4);
            assert!(rect.dst_x + rect.width as isize >= 0);
            assert!(rect.dst_x <= Screen::WIDTH as isize + 2);
            assert!(color < 16);
        }
    }

    #[test]
    fn test_write_screen() {
        let screen = render(0, 0);
        let mut out = Vec::new();
        write_screen(&screen, &mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), Screen::HEIGHT * 2 + 1);
        assert_eq!(lines[0].trim(), "TEXTBLIT DEMO");
        assert_eq!(&lines[5][5..15], " # # # # #");
        assert_eq!(&lines[Screen::HEIGHT + 1 + 5][4..7], "e77");
    }
}
