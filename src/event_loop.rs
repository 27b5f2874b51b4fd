use anyhow::{Context, Result};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::GameConfig;
use crate::game::Game;
use crate::input::{InputQueue, is_quit_key};
use crate::render::{Canvas, paint};

const TITLE: &str = "Snake";

/// Opens the window and runs the game until the player quits.
pub fn run(config: GameConfig) -> Result<()> {
    let update_interval = config.tick_interval();
    let (width, height) = (config.canvas_width, config.canvas_height);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("could not create window")?;

    let window_size = window.inner_size();
    let surface = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(width, height, surface).context("could not create pixel surface")?;

    let mut game = Game::new(&config);
    let mut inputs = InputQueue::new();
    let mut last_update = Instant::now();

    info!(
        "starting: {}x{} grid, {} unit cells, {} ticks/s, food {:?}, edges {:?}",
        game.grid().width,
        game.grid().height,
        config.cell_size,
        config.ticks_per_second,
        config.food_placement,
        config.edge_policy
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::RedrawRequested(_) => {
                if last_update.elapsed() >= update_interval {
                    let outcome = game.tick(inputs.drain());
                    if outcome.ate_food {
                        debug!(
                            "food eaten, target length {}, food now at {:?}",
                            game.snake().target_length(),
                            game.food().position()
                        );
                    }
                    if let Some(length) = outcome.length_at_death {
                        info!("snake bit itself at length {}, resetting", length);
                    }
                    last_update = Instant::now();
                }

                let mut canvas = Canvas { frame: pixels.frame_mut(), width, height };
                paint(&mut canvas, &game);
                if let Err(err) = pixels.render() {
                    error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if is_quit_key(key) {
                        *control_flow = ControlFlow::Exit;
                    } else {
                        inputs.push_key(key);
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                window.request_redraw();
            }

            Event::LoopDestroyed => {
                let stats = game.stats();
                info!(
                    "quit after {} ticks: {} meals, {} deaths, longest {}",
                    stats.ticks, stats.meals, stats.deaths, stats.longest
                );
                log::logger().flush();
            }
            _ => {}
        }
    })
}
