//! Headless demo host.
//!
//! Walks the clock through three screens: customisation (resize slider and
//! color buttons), a container that keeps adding clocks, and a pause button
//! followed by surface re-creation. Pass a TTF/OTF path as the first argument
//! to measure numerals with real glyph bounds.

use std::time::Duration;

use anyhow::{Context, Result};
use dialface_engine::logging::{init_logging, LoggingConfig};
use dialface_engine::scene::DrawList;
use dialface_engine::text::{FixedMetrics, FontSystem, GlyphMetrics};
use dialface_engine::time::{FrameClock, SystemClock};
use dialface_ui::prelude::*;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Attributes the demo layout gives its clocks.
const CLOCK_ATTRS: [(&str, &str); 3] = [
    ("text_color", "#000000"),
    ("face_color", "#ffffff"),
    ("shape", "face"),
];

const CIRCLE_NEW_COLOR: Argb = Argb(0xFFFF_E0B2);
const CONTAINER_WIDTH: f32 = 360.0;

type Clock<M> = ClockView<SystemClock, M>;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │       DIALFACE STUDIO  (headless)    │");
    println!("  └──────────────────────────────────────┘");
    println!();

    let mut fonts = FontSystem::new();
    match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {path}"))?;
            let id = fonts.load_font(&bytes).with_context(|| format!("loading font {path}"))?;
            run(fonts.metrics_for(id), Some(id))
        }
        None => run(FixedMetrics::default(), None),
    }
}

fn run<M: GlyphMetrics + Copy>(metrics: M, font: Option<FontId>) -> Result<()> {
    customise_screen(metrics, font).context("customise screen")?;
    container_screen(metrics, font).context("container screen")?;
    pause_screen(metrics, font).context("pause screen")?;
    println!("  [EXIT] closing studio");
    Ok(())
}

fn new_clock<M: GlyphMetrics>(metrics: M, font: Option<FontId>) -> Result<Clock<M>> {
    let config = ClockConfig::from_attrs(CLOCK_ATTRS).context("parsing clock attributes")?;
    Ok(ClockView::with_parts(config, SystemClock, metrics).font(font))
}

/// Runs `refreshes` display refreshes, rendering whenever a frame is due.
/// Returns how many frames were produced.
fn drive<M: GlyphMetrics>(clock: &mut Clock<M>, refreshes: usize) -> Result<usize> {
    let mut frame_clock = FrameClock::new();
    let mut painted = 0;
    for _ in 0..refreshes {
        if let Some(reason) = clock.take_redraw() {
            let frame = clock
                .render()
                .context("clock frame aborted")?
                .context("clock was rendered before it had a size")?;
            let ft = frame_clock.tick();
            log::trace!(
                "frame {} ({reason:?}): {} commands at {} ms, {:.0} fps",
                ft.frame_index,
                frame.len(),
                frame.instant(),
                ft.fps()
            );
            painted += 1;
        }
        std::thread::sleep(FRAME_INTERVAL);
    }
    Ok(painted)
}

// ── screens ───────────────────────────────────────────────────────────────

fn customise_screen<M: GlyphMetrics + Copy>(metrics: M, font: Option<FontId>) -> Result<()> {
    println!("  [1] customise");
    let mut clock = new_clock(metrics, font)?;
    clock.set_size(500.0, 500.0);
    drive(&mut clock, 4)?;

    // Slider progress maps to height in steps of ten pixels, never below one.
    for progress in [50u16, 30, 10, 0, 80] {
        let height = f32::from(progress * 10).max(1.0);
        clock.set_size(500.0, height);
        drive(&mut clock, 2)?;
        println!(
            "      slider {progress:>3} -> {height:>4} px, face {:>5.1} px",
            clock.measurements().face_size
        );
    }

    let black = Argb::BLACK;
    let buttons = [
        ("change circle color", ThemePatch::new().face_color(CIRCLE_NEW_COLOR)),
        ("change numbers color", ThemePatch::new().text_color(Argb::GRAY)),
        ("change shape", ThemePatch::new().shape(ShapeRef::CLOCK_FACE_ALT)),
        ("change hour hand color", ThemePatch::new().hour_hand_color(black)),
        ("change minute hand color", ThemePatch::new().minute_hand_color(black)),
        ("change second hand color", ThemePatch::new().second_hand_color(black)),
    ];
    for (label, patch) in buttons {
        let changed = clock.set_theme(&patch);
        drive(&mut clock, 1)?;
        println!("      {label:<26} {}", if changed { "applied" } else { "unchanged" });
    }
    Ok(())
}

fn container_screen<M: GlyphMetrics + Copy>(metrics: M, font: Option<FontId>) -> Result<()> {
    println!("  [2] container");
    let mut clocks = Vec::new();
    for _ in 0..3 {
        clocks.push(new_clock(metrics, font)?);

        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        let constraints = Constraints::loose(Vec2::new(CONTAINER_WIDTH, f32::INFINITY));
        let mut y = 0.0;
        for clock in &mut clocks {
            let size = clock.measure(constraints);
            clock.paint(&mut painter, Rect::from_origin_size(Vec2::new(0.0, y), size));
            y += size.y;
        }
        println!(
            "      {} clock(s), {} draw commands, column height {y} px",
            clocks.len(),
            list.len()
        );
    }
    Ok(())
}

fn pause_screen<M: GlyphMetrics + Copy>(metrics: M, font: Option<FontId>) -> Result<()> {
    println!("  [3] pause");
    let rect = Rect::new(0.0, 0.0, 500.0, 300.0);
    let mut clock = new_clock(metrics, font)?;
    clock.set_size(rect.size.x, rect.size.y);
    drive(&mut clock, 3)?;

    let click = UiEvent::Click { pos: rect.center() };
    clock.on_event(&click, rect);
    let frozen = clock.current_instant();
    let painted = drive(&mut clock, 10)?;
    println!("      button: {}  ({painted} frame(s) while paused)", button_label(&clock));

    // The surface goes away; only the saved record survives.
    let saved = clock.snapshot().encode();
    drop(clock);

    let snapshot = ClockSnapshot::decode(&saved).context("decoding saved clock state")?;
    let mut clock = new_clock(metrics, font)?;
    clock.restore(&snapshot);
    clock.set_size(rect.size.x, rect.size.y);
    drive(&mut clock, 3)?;
    println!(
        "      re-created: button {}, frozen instant kept: {}",
        button_label(&clock),
        clock.current_instant() == frozen
    );

    clock.on_event(&click, rect);
    let painted = drive(&mut clock, 5)?;
    println!("      button: {}  ({painted} frame(s) after resume)", button_label(&clock));
    Ok(())
}

fn button_label<M: GlyphMetrics>(clock: &Clock<M>) -> &'static str {
    if clock.is_paused() { "resume" } else { "pause" }
}
