#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Self = Self(0, 0, 0, 255);
    pub const WHITE: Self = Self(255, 255, 255, 255);
    pub const RED: Self = Self(255, 0, 0, 255);
    pub const LIME: Self = Self(0, 255, 0, 255);

    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0, self.1, self.2, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Text size as the pixel height of a glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub size: u32,
}

impl Font {
    pub const fn px(size: u32) -> Self {
        Self { size }
    }

    /// Integer scale applied to the 5x7 glyphs.
    pub fn scale(self) -> u32 {
        (self.size / GLYPH_H).max(1)
    }
}

/// The drawing operations the game needs from a surface.
pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, color: Rgba);
    /// `y` is the text baseline.
    fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Rgba);
    fn measure_text_width(&self, text: &str, font: Font) -> u32;
}

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

/// RGBA8 framebuffer, row-major, as handed out by `pixels`.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self { frame, width, height }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, c: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let Some(px) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let a = c.3 as u16;
        let ia = 255 - a;
        px[0] = ((c.0 as u16 * a + px[0] as u16 * ia) / 255) as u8;
        px[1] = ((c.1 as u16 * a + px[1] as u16 * ia) / 255) as u8;
        px[2] = ((c.2 as u16 * a + px[2] as u16 * ia) / 255) as u8;
        px[3] = 255;
    }

    fn draw_char(&mut self, ch: char, x: i32, y: i32, scale: u32, c: Rgba) {
        let Some(rows) = glyph_5x7(ch) else {
            return;
        };
        let s = scale as i32;
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W as i32 {
                if (row >> (4 - rx)) & 1 == 0 {
                    continue;
                }
                for sy in 0..s {
                    for sx in 0..s {
                        self.blend_pixel(x + rx * s + sx, y + ry as i32 * s + sy, c);
                    }
                }
            }
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, c: Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.0, c.1, c.2, c.3]);
        }
    }

    fn fill_rect(&mut self, r: Rect, c: Rgba) {
        let x2 = (r.x + r.w as i32).min(self.width as i32);
        let y2 = (r.y + r.h as i32).min(self.height as i32);
        for py in r.y.max(0)..y2 {
            for px in r.x.max(0)..x2 {
                self.blend_pixel(px, py, c);
            }
        }
    }

    fn stroke_rect(&mut self, r: Rect, c: Rgba) {
        if r.w == 0 || r.h == 0 {
            return;
        }
        let x2 = r.x + r.w as i32 - 1;
        let y2 = r.y + r.h as i32 - 1;
        for px in r.x..=x2 {
            self.blend_pixel(px, r.y, c);
            if y2 != r.y {
                self.blend_pixel(px, y2, c);
            }
        }
        for py in r.y + 1..y2 {
            self.blend_pixel(r.x, py, c);
            if x2 != r.x {
                self.blend_pixel(x2, py, c);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, c: Rgba) {
        let scale = font.scale();
        let advance = ((GLYPH_W + 1) * scale) as i32;
        let top = y - (GLYPH_H * scale) as i32;
        let mut cx = x;
        for ch in text.chars() {
            self.draw_char(ch, cx, top, scale, c);
            cx += advance;
        }
    }

    fn measure_text_width(&self, text: &str, font: Font) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        // No trailing gap after the last glyph.
        ((GLYPH_W + 1) * n - 1) * font.scale()
    }
}

// 5x7 bitmap font, rows top to bottom, bit 4 is the leftmost column.
// Covers the characters of the score and overlay texts.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        ' ' => [0b00000; 7],
        _ => return None,
    })
}
