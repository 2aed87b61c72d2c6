use crate::draw::{Canvas, Font, Rect, Rgba};
use crate::game::Game;
use crate::grid::Point;

const GRID_LINE: Rgba = Rgba::WHITE.with_alpha(51);
const SHADE: Rgba = Rgba::BLACK.with_alpha(191);

pub struct Style {
    /// Faint cell outlines behind the snake.
    pub show_grid: bool,
}

/// Draws one complete frame for the current state.
pub fn render<C: Canvas + ?Sized>(game: &Game, canvas: &mut C, style: &Style) {
    draw_board(game, canvas, style);

    if game.is_over() {
        draw_game_over(game, canvas);
    } else if !game.focused {
        draw_focus_prompt(game, canvas);
    }
}

fn cell_rect(p: Point, block: u32) -> Rect {
    Rect::new(p.x, p.y, block, block)
}

fn draw_board<C: Canvas + ?Sized>(game: &Game, canvas: &mut C, style: &Style) {
    let grid = game.grid;
    let block = grid.block_size;

    canvas.clear(Rgba::BLACK);
    canvas.fill_rect(cell_rect(game.food, block), Rgba::RED);

    if style.show_grid {
        for col in 0..grid.cols {
            for row in 0..grid.rows {
                canvas.stroke_rect(cell_rect(grid.cell(col, row), block), GRID_LINE);
            }
        }
    }

    canvas.fill_rect(cell_rect(game.head, block), Rgba::LIME);
    for &seg in &game.body {
        canvas.fill_rect(cell_rect(seg, block), Rgba::LIME);
    }

    let b = block as i32;
    canvas.fill_text(
        &format!("Score: {}", game.score),
        b,
        b * 3 / 2,
        Font::px(block),
        Rgba::WHITE,
    );
}

fn shade<C: Canvas + ?Sized>(canvas: &mut C) {
    let (w, h) = canvas.size();
    canvas.fill_rect(Rect::new(0, 0, w, h), SHADE);
}

fn centered<C: Canvas + ?Sized>(canvas: &mut C, text: &str, y: i32, font: Font) {
    let (w, _) = canvas.size();
    let x = (w as i32 - canvas.measure_text_width(text, font) as i32) / 2;
    canvas.fill_text(text, x, y, font, Rgba::WHITE);
}

fn draw_game_over<C: Canvas + ?Sized>(game: &Game, canvas: &mut C) {
    shade(canvas);

    let font = Font::px(game.grid.block_size * 2);
    let gap = font.size as i32;
    let mid = canvas.size().1 as i32 / 2;

    centered(canvas, "Game Over!", mid - gap, font);
    centered(canvas, &format!("Final Score: {}", game.score), mid, font);
    centered(canvas, "Press Space to Restart", mid + gap, font);
}

fn draw_focus_prompt<C: Canvas + ?Sized>(game: &Game, canvas: &mut C) {
    shade(canvas);
    let mid = canvas.size().1 as i32 / 2;
    centered(canvas, "Click/Tap to Play", mid, Font::px(game.grid.block_size));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rgba),
        Fill(Rect, Rgba),
        Stroke(Rect, Rgba),
        Text(String, i32, i32, Font),
    }

    struct Recorder {
        size: (u32, u32),
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(w: u32, h: u32) -> Self {
            Self { size: (w, h), calls: Vec::new() }
        }

        fn texts(&self) -> Vec<&Call> {
            self.calls.iter().filter(|c| matches!(c, Call::Text(..))).collect()
        }
    }

    impl Canvas for Recorder {
        fn size(&self) -> (u32, u32) {
            self.size
        }
        fn clear(&mut self, color: Rgba) {
            self.calls.push(Call::Clear(color));
        }
        fn fill_rect(&mut self, rect: Rect, color: Rgba) {
            self.calls.push(Call::Fill(rect, color));
        }
        fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
            self.calls.push(Call::Stroke(rect, color));
        }
        fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, _color: Rgba) {
            self.calls.push(Call::Text(text.to_string(), x, y, font));
        }
        fn measure_text_width(&self, text: &str, _font: Font) -> u32 {
            text.len() as u32 * 10
        }
    }

    fn game() -> Game {
        let mut g = Game::new(400, 400, 40, &mut SmallRng::seed_from_u64(3));
        g.head = Point::new(100, 200);
        g.body = VecDeque::from([Point::new(90, 200), Point::new(80, 200)]);
        g.food = Point::new(300, 300);
        g.score = 20;
        g
    }

    #[test]
    fn playing_frame() {
        let g = game();
        let mut c = Recorder::new(400, 400);
        render(&g, &mut c, &Style { show_grid: false });

        assert_eq!(
            c.calls,
            vec![
                Call::Clear(Rgba::BLACK),
                Call::Fill(Rect::new(300, 300, 10, 10), Rgba::RED),
                Call::Fill(Rect::new(100, 200, 10, 10), Rgba::LIME),
                Call::Fill(Rect::new(90, 200, 10, 10), Rgba::LIME),
                Call::Fill(Rect::new(80, 200, 10, 10), Rgba::LIME),
                Call::Text("Score: 20".into(), 10, 15, Font::px(10)),
            ]
        );
    }

    #[test]
    fn grid_overlay_outlines_every_cell() {
        let g = game();
        let mut c = Recorder::new(400, 400);
        render(&g, &mut c, &Style { show_grid: true });

        let strokes = c.calls.iter().filter(|c| matches!(c, Call::Stroke(..))).count();
        assert_eq!(strokes, 40 * 40);
    }

    #[test]
    fn game_over_overlay_is_centered() {
        let mut g = game();
        g.phase = Phase::GameOver;
        let mut c = Recorder::new(400, 400);
        render(&g, &mut c, &Style { show_grid: false });

        assert!(c.calls.contains(&Call::Fill(Rect::new(0, 0, 400, 400), SHADE)));
        let font = Font::px(20);
        assert_eq!(
            c.texts()[1..],
            [
                &Call::Text("Game Over!".into(), 150, 180, font),
                &Call::Text("Final Score: 20".into(), 125, 200, font),
                &Call::Text("Press Space to Restart".into(), 90, 220, font),
            ]
        );
    }

    #[test]
    fn focus_prompt_only_while_playing() {
        let mut g = game();
        g.focused = false;
        let mut c = Recorder::new(400, 400);
        render(&g, &mut c, &Style { show_grid: false });

        assert_eq!(
            c.calls.last(),
            Some(&Call::Text("Click/Tap to Play".into(), 115, 200, Font::px(10)))
        );

        g.phase = Phase::GameOver;
        let mut c = Recorder::new(400, 400);
        render(&g, &mut c, &Style { show_grid: false });
        assert!(!c.texts().iter().any(|t| matches!(t, Call::Text(s, ..) if s.starts_with("Click"))));
    }
}
