mod config;
mod draw;
mod game;
mod grid;
mod input;
mod render;
mod scheduler;

use anyhow::{Context, Result};
use config::Settings;
use draw::FrameCanvas;
use game::{Game, Step};
use input::{BINDINGS, Input};
use pixels::{Pixels, SurfaceTexture};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use render::Style;
use scheduler::Ticker;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{Event, TouchPhase, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::info!("starting with {settings:?}");

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title(&settings.title)
        .with_inner_size(LogicalSize::new(settings.window_width, settings.window_height))
        .build(&event_loop)
        .context("failed to create window")?;

    let size = window.inner_size();
    let mut frame_size = (size.width.max(1), size.height.max(1));
    let mut pixels = {
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(frame_size.0, frame_size.1, surface_texture)
            .context("failed to create pixel surface")?
    };

    let mut rng = SmallRng::from_entropy();
    let mut game = Game::new(size.width, size.height, settings.grid_divisions, &mut rng);
    let style = Style { show_grid: settings.show_grid };
    let mut ticker = Ticker::new(settings.tick_interval(), Instant::now());

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            let (w, h) = frame_size;
            render::render(&game, &mut FrameCanvas::new(pixels.frame_mut(), w, h), &style);
            if let Err(err) = pixels.render() {
                log::error!("failed to present frame: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Focus and touch are not tracked by the input helper.
        if let Event::WindowEvent { event: win_event, .. } = &event {
            let focus = match win_event {
                WindowEvent::Focused(false) => Some(Input::FocusLost),
                WindowEvent::Focused(true) => Some(Input::FocusClaim),
                WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                    Some(Input::FocusClaim)
                }
                _ => None,
            };
            if let Some(focus) = focus {
                if game.handle(focus, &mut rng) {
                    log::debug!("focus changed: {focus:?}");
                    window.request_redraw();
                }
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() || input.destroyed() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                // Minimised windows report zero; keep the last board until restored.
                if size.width > 0 && size.height > 0 {
                    let resized = pixels
                        .resize_surface(size.width, size.height)
                        .and_then(|()| pixels.resize_buffer(size.width, size.height));
                    if let Err(err) = resized {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    frame_size = (size.width, size.height);
                    game.handle(Input::Resize { width: size.width, height: size.height }, &mut rng);
                }
            }

            for &(key, bound) in BINDINGS {
                if input.key_pressed(key) && game.handle(bound, &mut rng) && bound == Input::Restart {
                    log::info!("restarted");
                }
            }

            // A click only brings the board into focus.
            if input.mouse_pressed(0) {
                window.focus_window();
                game.handle(Input::FocusClaim, &mut rng);
            }

            if ticker.poll(Instant::now()) {
                if let Step::Crashed(crash) = game.tick(&mut rng) {
                    log::info!("game over ({crash:?}), final score {}", game.score);
                }
                window.request_redraw();
            }

            *control_flow = ControlFlow::WaitUntil(ticker.deadline());
        }
    });
}
