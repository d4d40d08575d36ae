//! Interactive viewer for the `rvec` vector and outline helpers.
//!
//! A panel turns in the middle of the window, a beam follows the mouse
//! from a fixed anchor, and Space scatters extra spinners around the board.

mod items;

use crate::items::{Beam, Spinner};
use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{FPoint, Rect};
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "Vectors in Rust";
/// Width of the window in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the window in pixels
const WINDOW_HEIGHT: u32 = 600;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Font used for the angle readout, overridden by `RVEC_FONT_PATH`
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Where the beam starts
const ANCHOR: [f32; 2] = [100.0, WINDOW_HEIGHT as f32 - 100.0];
/// Width of the beam in pixels
const BEAM_WIDTH: f32 = 16.0;
/// Size of the center panel, [width, height]
const PANEL_SIZE: [f32; 2] = [240.0, 40.0];
/// Upper bound on spinners so the board stays readable
const MAX_SPINNERS: usize = 64;

struct Scene {
    panel: Spinner,
    beam: Beam,
    spinners: Vec<Spinner>,
}

impl Scene {
    fn new() -> Scene {
        let center = FPoint::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);
        let anchor = FPoint::new(ANCHOR[0], ANCHOR[1]);
        Scene {
            panel: Spinner::new(center, PANEL_SIZE, Some(45.0), Some(Color::CYAN)),
            beam: Beam::new(anchor, anchor, Some(BEAM_WIDTH), None),
            spinners: Vec::new(),
        }
    }

    fn spin(&mut self, dt: f32) {
        self.panel.spin(Some(dt));
        for spinner in self.spinners.iter_mut() {
            spinner.spin(Some(dt));
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>) {
        self.panel.draw(canvas);
        for spinner in &self.spinners {
            spinner.draw(canvas);
        }
        self.beam.draw(canvas);
    }
}

/// Adds a spinner at a random position with a random size and speed.
///
/// Does nothing once the board holds `MAX_SPINNERS`.
///
/// # Arguments
///
/// * `scene` - The scene to add the spinner to
fn spawn_spinner(scene: &mut Scene) {
    if scene.spinners.len() >= MAX_SPINNERS {
        log::debug!("spinner limit of {} reached", MAX_SPINNERS);
        return;
    }
    let x: f32 = rand::random_range(20.0..(WINDOW_WIDTH as f32 - 20.0));
    let y: f32 = rand::random_range(20.0..(WINDOW_HEIGHT as f32 - 20.0));
    let size = [rand::random_range(10.0..60.0), rand::random_range(10.0..60.0)];
    let speed: f64 = rand::random_range(-360.0..360.0);
    let color = Color::RGB(rand::random(), rand::random(), rand::random());
    log::debug!("spinner at ({}, {}) size {:?} speed {}", x, y, size, speed);
    scene.spinners.push(Spinner::new(FPoint::new(x, y), size, Some(speed), Some(color)));
}

/// Loads the readout font, or logs a warning and returns `None`.
///
/// # Arguments
///
/// * `ttf` - The SDL2_ttf context that owns the font
fn load_font<'ttf>(ttf: &'ttf sdl2::ttf::Sdl2TtfContext) -> Option<Font<'ttf, 'static>> {
    let path = std::env::var("RVEC_FONT_PATH").unwrap_or_else(|_| FONT_PATH.to_string());
    match ttf.load_font(&path, 20) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("no angle readout, could not load font {}: {}", path, e);
            None
        }
    }
}

/// Draws the beam's length and direction in the top-left corner.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas for rendering
/// * `font` - Font for rendering text
/// * `beam` - The beam whose vector is reported
fn draw_readout(canvas: &mut Canvas<Window>, font: &Font, beam: &Beam) -> Result<()> {
    let v = beam.vector();
    let text = format!("length {:.1}  angle {:.1}°", v.length(), v.angle_degrees());
    let surface = font
        .render(&text)
        .blended(Color::RGB(255, 255, 255))
        .map_err(anyhow::Error::msg)?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(anyhow::Error::msg)?;
    let query = texture.query();
    let target = Rect::new(10, 10, query.width, query.height);
    canvas
        .copy(&texture, None, Some(target))
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

/// Updates and renders one frame.
///
/// # Arguments
///
/// * `scene` - The panel, beam and spinners to animate
/// * `canvas` - SDL2 canvas for rendering
/// * `font` - Font for the readout, if one was loaded
/// * `dt` - Time delta in seconds since last frame
fn main_loop(scene: &mut Scene, canvas: &mut Canvas<Window>, font: Option<&Font>, dt: f32) -> Result<()> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    scene.spin(dt);
    scene.draw(canvas);
    if let Some(font) = font {
        draw_readout(canvas, font, &scene.beam)?;
    }
    Ok(())
}

/// Entry point for the viewer.
///
/// Initializes SDL2 and the logger, opens the window and runs the frame
/// loop at 60 FPS until Escape or the window is closed.
fn main() -> Result<()> {
    env_logger::init();

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg).context("initializing SDL")?;
    let video_subsystem = sdl_context
        .video()
        .map_err(anyhow::Error::msg)
        .context("initializing video")?;
    let ttf_context = sdl2::ttf::init()
        .map_err(anyhow::Error::msg)
        .context("initializing SDL_ttf")?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .context("creating window")?;
    let font = load_font(&ttf_context);

    let mut canvas = window.into_canvas().build().context("creating canvas")?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut scene = Scene::new();
    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("creating event pump")?;
    log::info!("{} running at {}x{}", TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => spawn_spinner(&mut scene),
                Event::MouseMotion { x, y, .. } => {
                    scene.beam.b = FPoint::new(x as f32, y as f32);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        main_loop(&mut scene, &mut canvas, font.as_ref(), dt)?;

        canvas.present();
        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    log::info!("closed with {} spinners", scene.spinners.len());
    Ok(())
}
