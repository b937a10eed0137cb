mod draw;
mod food;
mod grid;
mod highscore;
mod particles;
mod score;
mod session;
mod snake;

use anyhow::Result;
use log::info;
use pixels::{Pixels, SurfaceTexture};
use std::time::{Duration, Instant};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use highscore::HighScore;
use session::{Session, TickOutcome};
use snake::Direction;

const HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Clone, Copy)]
enum Screen {
    Home,
    Playing,
    GameOver { new_record: bool },
}

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Snake")
        .with_inner_size(LogicalSize::new(draw::WIDTH, draw::HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(draw::WIDTH, draw::HEIGHT, surface_texture)?
    };

    let mut rng = rand::thread_rng();
    let mut high_score = HighScore::load(HIGH_SCORE_FILE);
    info!("high score loaded: {}", high_score.value());

    let mut session = Session::new(&mut rng);
    let mut screen = Screen::Home;
    let mut last_tick = Instant::now();
    let mut anim: u32 = 0;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            let frame = pixels.frame_mut();
            match screen {
                Screen::Home => draw::draw_home(frame, high_score.value(), anim),
                Screen::Playing => draw::draw_session(frame, &session),
                Screen::GameOver { new_record } => {
                    draw::draw_game_over(frame, &session, high_score.value(), new_record)
                }
            }
            if pixels.render().is_err() {
                *control_flow = ControlFlow::Exit;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape)
                || input.close_requested()
                || input.destroyed()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }

            match screen {
                Screen::Home => {
                    anim = anim.wrapping_add(1);
                    if input.key_pressed(VirtualKeyCode::Return)
                        || input.key_pressed(VirtualKeyCode::Space)
                    {
                        session.restart(&mut rng);
                        last_tick = Instant::now();
                        screen = Screen::Playing;
                        info!("game started");
                    }
                }
                Screen::Playing => {
                    // Key presses only buffer a direction; the tick applies it.
                    if input.key_pressed(VirtualKeyCode::Up) || input.key_pressed(VirtualKeyCode::W)
                    {
                        session.steer(Direction::Up);
                    }
                    if input.key_pressed(VirtualKeyCode::Down)
                        || input.key_pressed(VirtualKeyCode::S)
                    {
                        session.steer(Direction::Down);
                    }
                    if input.key_pressed(VirtualKeyCode::Left)
                        || input.key_pressed(VirtualKeyCode::A)
                    {
                        session.steer(Direction::Left);
                    }
                    if input.key_pressed(VirtualKeyCode::Right)
                        || input.key_pressed(VirtualKeyCode::D)
                    {
                        session.steer(Direction::Right);
                    }

                    let interval = Duration::from_millis(session.tick_interval_ms());
                    if last_tick.elapsed() >= interval {
                        last_tick = Instant::now();
                        if session.tick(&mut rng) == TickOutcome::Died {
                            let final_score = session.score.score();
                            let new_record = high_score.update(final_score);
                            info!(
                                "game over: score {final_score}, level {}, length {}",
                                session.score.level(),
                                session.snake.len()
                            );
                            screen = Screen::GameOver { new_record };
                        }
                    }
                }
                Screen::GameOver { .. } => {
                    if input.key_pressed(VirtualKeyCode::R) {
                        session.restart(&mut rng);
                        last_tick = Instant::now();
                        screen = Screen::Playing;
                    }
                    if input.key_pressed(VirtualKeyCode::M) {
                        // Menu shows whatever is on disk, matching the
                        // best-effort persistence model.
                        high_score = HighScore::load(HIGH_SCORE_FILE);
                        anim = 0;
                        screen = Screen::Home;
                    }
                }
            }

            window.request_redraw();
        }
    })
}
