//! Desktop simulator for the starry-stars rating widget.
//!
//! Places one rating widget across the whole display in an SDL2 window via
//! `embedded-graphics-simulator`, right-to-left by default. Mouse input is
//! forwarded as touch events and every completed rating is logged.
//!
//! # Key bindings
//!
//! | Key    | Action                               |
//! |--------|--------------------------------------|
//! | H      | Toggle half stars                    |
//! | E      | Toggle editing                       |
//! | D      | Cycle layout direction               |
//! | Up     | Add a star                           |
//! | Down   | Remove a star                        |
//! | R      | Reset rating to zero                 |
//! | Escape | Cancel the current touch             |
//! | Q      | Quit                                 |
//!
//! # Environment
//!
//! Settings are read from the environment, after loading a `.env` file if
//! one exists: `STARRY_STAR_COUNT`, `STARRY_HALF_STARS`, `STARRY_EDITABLE`,
//! `STARRY_DIRECTION` (`auto`, `ltr`, `rtl`) and `STARRY_RATING`.

use std::env;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{debug, error, info, warn};

use starry_stars::rating::{
    DEFAULT_STAR_COUNT, LayoutDirection, RatingWidget, ReadingDirection,
};
use starry_stars::ui::styling::COLOR_BACKGROUND;
use starry_stars::ui::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Widget settings, overridable from the environment.
#[derive(Debug, Clone, Copy)]
struct SimulatorSettings {
    star_count: usize,
    half_stars: bool,
    editable: bool,
    direction: LayoutDirection,
    rating: f32,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            half_stars: true,
            editable: true,
            direction: LayoutDirection::RightToLeft,
            rating: 0.0,
        }
    }
}

impl SimulatorSettings {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            star_count: env_override("STARRY_STAR_COUNT", |v| v.parse().ok())
                .unwrap_or(defaults.star_count),
            half_stars: env_override("STARRY_HALF_STARS", parse_bool)
                .unwrap_or(defaults.half_stars),
            editable: env_override("STARRY_EDITABLE", parse_bool).unwrap_or(defaults.editable),
            direction: env_override("STARRY_DIRECTION", parse_direction)
                .unwrap_or(defaults.direction),
            rating: env_override("STARRY_RATING", |v| v.parse().ok()).unwrap_or(defaults.rating),
        }
    }
}

/// Read and parse one environment variable, logging values that don't parse.
fn env_override<T>(key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(key).ok()?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring invalid {}={:?}", key, raw);
    }
    parsed
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_direction(value: &str) -> Option<LayoutDirection> {
    match value.to_ascii_lowercase().as_str() {
        "auto" | "automatic" => Some(LayoutDirection::Automatic),
        "ltr" => Some(LayoutDirection::LeftToRight),
        "rtl" => Some(LayoutDirection::RightToLeft),
        _ => None,
    }
}

/// Next direction in the D-key cycle.
fn next_direction(direction: LayoutDirection) -> LayoutDirection {
    match direction {
        LayoutDirection::Automatic => LayoutDirection::LeftToRight,
        LayoutDirection::LeftToRight => LayoutDirection::RightToLeft,
        LayoutDirection::RightToLeft => LayoutDirection::Automatic,
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn to_touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

/// Apply a settings key to the widget. Returns `false` when the simulator should quit.
fn handle_key(keycode: Keycode, widget: &mut RatingWidget) -> bool {
    if keycode == Keycode::Q {
        return false;
    }

    if keycode == Keycode::Escape {
        if widget.handle_touch(TouchEvent::Cancel) == TouchResult::Handled {
            info!("Touch cancelled, rating back to {}", widget.rating());
        }
    } else if keycode == Keycode::H {
        let allowed = !widget.config().half_stars_allowed;
        widget.set_half_stars_allowed(allowed);
        info!("Half stars {}", if allowed { "on" } else { "off" });
    } else if keycode == Keycode::E {
        let editable = !widget.config().editable;
        widget.set_editable(editable);
        info!("Editing {}", if editable { "on" } else { "off" });
    } else if keycode == Keycode::D {
        let direction = next_direction(widget.config().layout_direction);
        widget.set_layout_direction(direction);
        info!("Layout direction {:?}", direction);
    } else if keycode == Keycode::Up || keycode == Keycode::Down {
        let count = widget.config().star_count;
        let count = if keycode == Keycode::Up {
            count + 1
        } else {
            count.saturating_sub(1)
        };
        match widget.set_star_count(count) {
            Ok(()) => info!("Star count {}", count),
            Err(e) => warn!("{}", e),
        }
    } else if keycode == Keycode::R {
        widget.set_rating(0.0);
        info!("Rating reset");
    }

    true
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded settings from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env: {}", e),
    }

    let settings = SimulatorSettings::from_env();
    info!("Starting starry-stars simulator with {:?}", settings);
    info!("Keys: H=half stars  E=editing  D=direction  Up/Down=stars  R=reset  Esc=cancel  Q=quit");

    let bounds = Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX),
    );

    let built = RatingWidget::builder()
        .with_bounds(bounds)
        .with_star_count(settings.star_count)
        .with_half_stars_allowed(settings.half_stars)
        .with_editable(settings.editable)
        .with_layout_direction(settings.direction)
        .with_environment_direction(ReadingDirection::LeftToRight)
        .with_rating(settings.rating)
        .with_listener(|widget: &RatingWidget, rating: f32| {
            info!("Rating widget {} changed rating to {}", widget.id(), rating);
        })
        .build();

    let mut widget = match built {
        Ok(widget) => widget,
        Err(e) => {
            error!("Invalid widget configuration: {}", e);
            return;
        }
    };

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(bounds.size);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Starry Stars", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(COLOR_BACKGROUND);
    let _ = widget.draw(&mut display);
    widget.mark_clean();
    window.update(&display);

    let mut mouse_down = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            let touch = match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if !handle_key(keycode, &mut widget) {
                        break 'running;
                    }
                    None
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    Some(TouchEvent::Press(to_touch_point(point)))
                }
                SimulatorEvent::MouseMove { point } if mouse_down => {
                    Some(TouchEvent::Drag(to_touch_point(point)))
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    Some(TouchEvent::Release(to_touch_point(point)))
                }
                _ => None,
            };

            if let Some(touch) = touch
                && let TouchResult::RatingChanged(rating) = widget.handle_touch(touch)
            {
                debug!("Touch sequence finished at {}", rating);
            }
        }

        if widget.is_dirty() {
            let _ = display.clear(COLOR_BACKGROUND);
            if let Err(e) = widget.draw(&mut display) {
                error!("Draw error: {:?}", e);
            }
            widget.mark_clean();
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
