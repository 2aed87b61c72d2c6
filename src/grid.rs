use rand::Rng;

/// Smallest block edge a degenerate viewport is clamped to.
pub const MIN_BLOCK_SIZE: u32 = 1;

/// A pixel position. Every live entity sits on a multiple of the block size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board geometry derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub block_size: u32,
    pub cols: u32,
    pub rows: u32,
}

impl Grid {
    /// `divisions` blocks fit along the shorter viewport edge.
    pub fn from_viewport(width: u32, height: u32, divisions: u32) -> Self {
        let raw = width.min(height) / divisions.max(1);
        let block_size = raw.max(MIN_BLOCK_SIZE);
        if raw < MIN_BLOCK_SIZE {
            log::warn!("viewport {width}x{height} too small, clamping block size to {block_size}");
        }
        Self {
            block_size,
            cols: width / block_size,
            rows: height / block_size,
        }
    }

    pub fn block(&self) -> i32 {
        self.block_size as i32
    }

    /// Pixel extent covered by whole blocks.
    pub fn extent(&self) -> (i32, i32) {
        (self.cols as i32 * self.block(), self.rows as i32 * self.block())
    }

    pub fn contains(&self, p: Point) -> bool {
        let (w, h) = self.extent();
        p.x >= 0 && p.y >= 0 && p.x < w && p.y < h
    }

    /// Floors a position onto the lower-left multiple of the block size.
    pub fn snap_down(&self, p: Point) -> Point {
        let b = self.block();
        Point::new(p.x.div_euclid(b) * b, p.y.div_euclid(b) * b)
    }

    /// Rounds a position to the nearest block multiple.
    pub fn snap_nearest(&self, p: Point) -> Point {
        let b = self.block();
        let round = |v: i32| (v + b / 2).div_euclid(b) * b;
        Point::new(round(p.x), round(p.y))
    }

    /// Pixel position of the block at `(col, row)`.
    pub fn cell(&self, col: u32, row: u32) -> Point {
        Point::new(col as i32 * self.block(), row as i32 * self.block())
    }

    /// Where a fresh snake starts: a quarter across, half way down.
    pub fn spawn_point(&self) -> Point {
        self.cell(self.cols / 4, self.rows / 2)
    }

    /// A uniformly chosen cell. An empty grid yields the origin.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        if self.cols == 0 || self.rows == 0 {
            return Point::new(0, 0);
        }
        let col = rng.gen_range(0..self.cols);
        let row = rng.gen_range(0..self.rows);
        self.cell(col, row)
    }
}
