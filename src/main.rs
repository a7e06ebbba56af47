//! Fogseek entry point
//!
//! Thin macroquad frontend: polls the mouse, feeds the session, paints draw
//! commands onto a persistent offscreen canvas and reports progress on the
//! console.

use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use macroquad::prelude as mq;

use fogseek::GameConfig;
use fogseek::render::{Color, DrawCmd};
use fogseek::sim::{GameEvent, GameSession, InputEvent};

/// Configuration is needed before the window opens, so it is loaded once and
/// shared between `window_conf` and `main`
fn app_config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = match GameConfig::load() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("fogseek: {err}");
                std::process::exit(1);
            }
        };
        if let Err(err) = config.validate() {
            eprintln!("fogseek: {err}");
            std::process::exit(1);
        }
        config
    })
}

fn window_conf() -> mq::Conf {
    let config = app_config();
    mq::Conf {
        window_title: "Search for objects".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn to_mq_color(color: Color) -> mq::Color {
    mq::Color::from_rgba(color.r, color.g, color.b, 255)
}

fn paint(cmd: &DrawCmd) {
    match *cmd {
        DrawCmd::Clear => mq::clear_background(mq::BLACK),
        DrawCmd::Circle {
            center,
            radius,
            color,
        } => mq::draw_circle(center.x, center.y, radius, to_mq_color(color)),
        DrawCmd::Rect {
            center,
            size,
            color,
        } => mq::draw_rectangle(
            center.x - size / 2.0,
            center.y - size / 2.0,
            size,
            size,
            to_mq_color(color),
        ),
    }
}

fn report(event: GameEvent) {
    match event {
        GameEvent::Progress { found, total } => println!("{found} from {total}"),
        GameEvent::Won { elapsed_secs } => {
            println!("Yeah, you found all the objects in {elapsed_secs:.2}s!")
        }
        GameEvent::MineTripped => println!("BOOM"),
        GameEvent::Lost => println!("Sorry, you could not find all the objects."),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = app_config().clone();
    let seed = wall_clock_seed();
    let mut session = match GameSession::new(config.clone(), seed, mq::get_time()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("fogseek: {err}");
            std::process::exit(1);
        }
    };

    // The red marker is the cursor
    mq::show_mouse(false);

    // Persistent canvas: commands accumulate across frames, so reveals stay
    // painted until the fog reclaims them
    let canvas = mq::render_target(config.width as u32, config.height as u32);
    canvas.texture.set_filter(mq::FilterMode::Nearest);
    let mut canvas_cam =
        mq::Camera2D::from_display_rect(mq::Rect::new(0.0, 0.0, config.width, config.height));
    canvas_cam.render_target = Some(canvas.clone());

    let mut draw: Vec<DrawCmd> = vec![DrawCmd::Clear];
    let mut events: Vec<GameEvent> = Vec::new();
    let mut last_mouse = mq::mouse_position();
    let frame_budget = 1.0 / f64::from(config.target_fps);

    while session.running() {
        let frame_start = mq::get_time();

        if mq::is_key_pressed(mq::KeyCode::Escape) {
            session.handle_event(InputEvent::Quit, frame_start, &mut draw, &mut events);
        }
        if mq::is_mouse_button_pressed(mq::MouseButton::Left) {
            let (x, y) = mq::mouse_position();
            session.handle_event(
                InputEvent::PointerPress(glam::Vec2::new(x, y)),
                frame_start,
                &mut draw,
                &mut events,
            );
        }
        let mouse = mq::mouse_position();
        if mouse != last_mouse {
            last_mouse = mouse;
            session.handle_event(
                InputEvent::PointerMove(glam::Vec2::new(mouse.0, mouse.1)),
                frame_start,
                &mut draw,
                &mut events,
            );
        }

        for event in events.drain(..) {
            report(event);
        }

        mq::set_camera(&canvas_cam);
        for cmd in draw.drain(..) {
            paint(&cmd);
        }
        mq::set_default_camera();

        mq::clear_background(mq::BLACK);
        mq::draw_texture_ex(
            &canvas.texture,
            0.0,
            0.0,
            mq::WHITE,
            mq::DrawTextureParams {
                dest_size: Some(mq::vec2(config.width, config.height)),
                // Render targets sample upside down without this
                flip_y: true,
                ..Default::default()
            },
        );

        mq::next_frame().await;

        let elapsed = mq::get_time() - frame_start;
        if elapsed < frame_budget {
            std::thread::sleep(Duration::from_secs_f64(frame_budget - elapsed));
        }
    }

    log::info!("session ended");
}
