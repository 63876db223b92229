//! `cosmic-text` implementation of the fit-text measurement capability.
//!
//! Shapes a single line per measurement under the layout rules the sizer
//! expects: no wrapping (the layout width is effectively unbounded) and
//! start-aligned placement, so the reported box depends only on the text and
//! font size. Glyph rasterization and atlases are out of scope here; this
//! crate only answers "how big is this string at this size".

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use fit_text::{MeasureRequest, MeasuredText, TextMeasurer};

/// Line height as a multiple of the font size, matching common UI defaults.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Concrete measurer backed by `cosmic-text`.
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl CosmicMeasurer {
    /// Create a measurer over the system font database.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Create a measurer over caller-supplied font bytes.
    ///
    /// For embedding hosts that ship their own fonts instead of relying on
    /// whatever the system provides.
    pub fn with_font_data(fonts: impl IntoIterator<Item = Vec<u8>>) -> Self {
        let mut font_system = FontSystem::new();
        for data in fonts {
            font_system.db_mut().load_font_data(data);
        }
        Self { font_system }
    }

    /// Access the underlying `FontSystem` if callers want to customize further.
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText {
        if request.font_size == 0 {
            return MeasuredText::zero();
        }

        let font_px = request.font_size as f32;
        let metrics = Metrics::new(font_px, font_px * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        // Prevent wrapping: a huge layout width keeps everything on one line.
        buffer.set_size(
            &mut self.font_system,
            Some(f32::MAX),
            Some(metrics.line_height),
        );

        let attrs = match request.family {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new().family(Family::SansSerif),
        };

        buffer.set_text(
            &mut self.font_system,
            request.text,
            &attrs,
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        // An empty line may produce no layout run; it still occupies a line
        // box vertically, which is what a label host would draw.
        let mut width = 0.0f32;
        let mut height = metrics.line_height;
        if let Some(run) = buffer.layout_runs().next() {
            width = run.line_w;
            height = run.line_height;
        }

        MeasuredText::new(width.ceil() as u32, height.ceil() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kept independent of any installed fonts: empty text shapes to zero
    // glyphs no matter what the font database holds.

    #[test]
    fn test_empty_text_has_no_width() {
        let mut measurer = CosmicMeasurer::new();
        let measured = measurer.measure(MeasureRequest::new("", 32));

        assert_eq!(measured.width, 0);
    }

    #[test]
    fn test_zero_font_size_measures_zero() {
        let mut measurer = CosmicMeasurer::new();
        let measured = measurer.measure(MeasureRequest::new("12:34", 0));

        assert_eq!(measured, MeasuredText::zero());
    }

    #[test]
    fn test_empty_line_still_occupies_line_height() {
        let mut measurer = CosmicMeasurer::new();
        let measured = measurer.measure(MeasureRequest::new("", 10));

        assert!(measured.height >= 10);
    }
}
