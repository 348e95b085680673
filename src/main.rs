// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imagetrail::{
    config::Config,
    models::{world_to_viewport, ImagePool, ViewBox},
    render::TileRenderer,
    views::TrailEffect,
    TrailError,
};

struct Model {
    // Core components:
    trail: Option<TrailEffect>,
    renderer: TileRenderer,

    // Style
    background: Rgb,

    // FPS
    last_update: Instant,
    fps: f32,

    // Message
    debug_flag: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagetrail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting imagetrail v{}", env!("CARGO_PKG_VERSION"));

    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    // Create window
    let window = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_moved(mouse_moved)
        .resized(resized)
        .key_pressed(key_pressed)
        .build()
        .map_err(|e| TrailError::Window(format!("{:?}", e)));
    if let Err(e) = window {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let image_paths = config.image_paths();
    let renderer = TileRenderer::load(app, &image_paths, config.trail.layer_count);

    // the trail covers the whole window
    let window_size = app.window_rect().wh();
    let region =
        (window_size.x > 0.0 && window_size.y > 0.0).then(|| ViewBox::from_size(window_size));

    let trail = TrailEffect::mount(
        config.trail.clone(),
        ImagePool::new(image_paths),
        region,
        window_size.x,
    );

    let [r, g, b] = config.style.background;

    Model {
        trail,
        renderer,
        background: rgb(r, g, b),
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    if let Some(trail) = model.trail.as_mut() {
        let window_size = app.window_rect().wh();
        trail.on_pointer_move(world_to_viewport(position, window_size));
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if let Some(trail) = model.trail.as_mut() {
        trail.on_resize(size.x, ViewBox::from_size(size));
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    if let Some(trail) = model.trail.as_mut() {
        trail.frame(clock_ms(app));
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    let window_rect = app.window_rect();
    if let Some(trail) = model.trail.as_ref() {
        model.renderer.draw(
            &draw,
            trail.mount_point(),
            window_rect.wh(),
            model.background,
            clock_ms(app),
        );
    }

    if model.debug_flag {
        draw_debug(&draw, model, window_rect);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!("Failed to draw frame: {:?}", e);
    }
}

fn draw_debug(draw: &Draw, model: &Model, window_rect: Rect) {
    let status = match model.trail.as_ref() {
        Some(trail) => {
            let manager = trail.manager();
            let next_retirement = manager
                .queue()
                .next()
                .map_or(String::from("-"), |queued| format!("{:.0}ms", queued.removal_time));
            format!(
                "FPS: {:.1}\n{:?}  pointer: {}\nlive: {}  attached: {}  timers: {}\nnext retirement: {}",
                model.fps,
                trail.state(),
                if trail.input().is_listening() { "on" } else { "off" },
                manager.live_count(),
                trail.mount_point().len(),
                manager.pending_timers(),
                next_retirement
            )
        }
        None => format!("FPS: {:.1}\ntrail not mounted", model.fps),
    };

    draw.text(&status)
        .left_justify()
        .w(340.0)
        .x_y(window_rect.left() + 180.0, window_rect.top() - 50.0)
        .color(RED);
}

fn exit(_app: &App, mut model: Model) {
    if let Some(trail) = model.trail.as_mut() {
        trail.unmount();
    }
}

// milliseconds since the app started
fn clock_ms(app: &App) -> f64 {
    app.duration.since_start.as_secs_f64() * 1000.0
}
