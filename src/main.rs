//! Chronometer demo for fit-text.
//!
//! Plays the role of a host toolkit: drives a [`FitLabel`] through the
//! text-changed and size-changed hooks a real widget would fire, using the
//! cosmic-text measurer, and logs the font size the label settles on.

use fit_text::{FitLabel, HostCaps, Spacing};
use fit_text_cosmic::CosmicMeasurer;
use std::time::Duration;

const TICKS: u64 = 10;
const TICK_SECONDS: u64 = 61;

/// Format elapsed seconds as a chronometer would: `MM:SS`.
fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut measurer = CosmicMeasurer::new();

    // Pretend the host is a toolkit version whose glyph cache chokes on the
    // oversized sizes the fit search probes.
    let caps = HostCaps::new().with_software_raster_for_large_glyphs(true);
    let mut label = FitLabel::new(caps).with_padding(Spacing::all(8));
    log::info!("raster mode hint: {:?}", label.raster_mode());

    // Initial allocation, as if the widget just got laid out.
    label.set_bounds(320, 120, &mut measurer);

    for tick in 0..TICKS {
        label.set_text(format_elapsed(tick * TICK_SECONDS), &mut measurer);
        log::info!(
            "tick {:>2}: {:>5} -> {}px",
            tick,
            label.text(),
            label.font_size()
        );
        std::thread::sleep(Duration::from_millis(100));
    }

    // Container resizes: grow, shrink, and a repeat that must be a no-op.
    for (width, height) in [(480, 160), (200, 80), (200, 80), (64, 24)] {
        label.set_bounds(width, height, &mut measurer);
        log::info!(
            "bounds {}x{}: {:>5} -> {}px",
            width,
            height,
            label.text(),
            label.font_size()
        );
    }
}
