use crate::grid::{Grid, Point};
use crate::input::{Dir, Input};
use rand::Rng;
use std::collections::VecDeque;

pub const SCORE_PER_FOOD: u32 = 10;

/// Unit direction of travel, scaled by the block size on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const STILL: Self = Self { dx: 0, dy: 0 };

    pub fn of(dir: Dir) -> Self {
        match dir {
            Dir::Up => Self { dx: 0, dy: -1 },
            Dir::Down => Self { dx: 0, dy: 1 },
            Dir::Left => Self { dx: -1, dy: 0 },
            Dir::Right => Self { dx: 1, dy: 0 },
        }
    }

    pub fn is_reverse_of(self, other: Self) -> bool {
        self != Self::STILL && self.dx == -other.dx && self.dy == -other.dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Idle,
    Moved,
    Ate,
    Crashed(Crash),
}

pub struct Game {
    pub grid: Grid,
    pub divisions: u32,
    pub head: Point,
    /// Segments ordered from the one nearest the head to the tail.
    pub body: VecDeque<Point>,
    pub velocity: Velocity,
    pub food: Point,
    pub score: u32,
    pub phase: Phase,
    pub focused: bool,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(width: u32, height: u32, divisions: u32, rng: &mut R) -> Self {
        let grid = Grid::from_viewport(width, height, divisions);
        let mut g = Self {
            grid,
            divisions,
            head: grid.spawn_point(),
            body: VecDeque::new(),
            velocity: Velocity::STILL,
            food: Point::new(0, 0),
            score: 0,
            phase: Phase::Playing,
            focused: true,
        };
        g.place_food(rng);
        g
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn place_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.food = self.grid.random_cell(rng);
    }

    /// Advances the simulation by one step. A finished game stays frozen.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.is_over() {
            return Step::Idle;
        }

        let ate = self.head == self.food;
        if ate {
            self.score += SCORE_PER_FOOD;
            self.place_food(rng);
            log::debug!("food eaten, score {}, next food at {:?}", self.score, self.food);
        }

        // The body trails the head; it only lengthens on the tick food was eaten.
        self.body.push_front(self.head);
        if !ate {
            self.body.pop_back();
        }

        let b = self.grid.block();
        let moved = Point::new(
            self.head.x + self.velocity.dx * b,
            self.head.y + self.velocity.dy * b,
        );
        self.head = self.grid.snap_nearest(moved);

        let crash = if !self.grid.contains(self.head) {
            Some(Crash::Wall)
        } else if self.body.contains(&self.head) {
            Some(Crash::Body)
        } else {
            None
        };

        match crash {
            Some(crash) => {
                self.phase = Phase::GameOver;
                Step::Crashed(crash)
            }
            None if ate => Step::Ate,
            None if self.velocity == Velocity::STILL => Step::Idle,
            None => Step::Moved,
        }
    }

    /// Applies one input event. Returns whether anything changed.
    pub fn handle<R: Rng + ?Sized>(&mut self, input: Input, rng: &mut R) -> bool {
        match input {
            Input::Turn(dir) => self.change_dir(dir),
            Input::Restart => {
                if !self.is_over() {
                    return false;
                }
                self.restart(rng);
                true
            }
            Input::FocusLost => std::mem::replace(&mut self.focused, false),
            Input::FocusClaim => !std::mem::replace(&mut self.focused, true),
            Input::Resize { width, height } => {
                self.resize(width, height, rng);
                true
            }
        }
    }

    pub fn change_dir(&mut self, dir: Dir) -> bool {
        let next = Velocity::of(dir);
        if self.is_over() || next.is_reverse_of(self.velocity) {
            return false;
        }
        self.velocity = next;
        true
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.head = self.grid.spawn_point();
        self.body.clear();
        self.velocity = Velocity::STILL;
        self.score = 0;
        self.phase = Phase::Playing;
        self.focused = true;
        self.place_food(rng);
    }

    /// Rebuilds the grid for a new viewport and re-snaps what is still live.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) {
        let grid = Grid::from_viewport(width, height, self.divisions);
        self.grid = grid;

        // A dead snake keeps its final position.
        if !self.is_over() {
            self.head = grid.snap_down(self.head);
            for seg in self.body.iter_mut() {
                *seg = grid.snap_down(*seg);
            }
        }

        self.food = grid.snap_down(self.food);
        if !grid.contains(self.food) {
            self.place_food(rng);
        }

        log::debug!(
            "resized to {width}x{height}: block {} cols {} rows {}",
            grid.block_size,
            grid.cols,
            grid.rows
        );
    }
}
