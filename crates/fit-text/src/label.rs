//! Auto-fitting label state.
//!
//! [`FitLabel`] is not a full widget: it is the sizing half that a host
//! toolkit's label or timer widget composes. The host forwards its
//! text-changed and size-changed callbacks to [`FitLabel::set_text`] and
//! [`FitLabel::set_bounds`], draws at [`FitLabel::font_size`], and applies
//! the [`FitLabel::raster_mode`] hint when attaching the widget. No
//! inheritance, no toolkit types.

use crate::caps::{HostCaps, RasterMode};
use crate::measure::TextMeasurer;
use crate::primitives::{Spacing, TextBox};
use crate::sizer::FitSizer;

/// Default size applied before the first refit, in pixels.
const DEFAULT_FONT_SIZE: u32 = 16;

/// A label whose font size always fits its bounds.
#[derive(Debug, Clone)]
pub struct FitLabel {
    text: String,
    /// Outer allocated bounds (width, height), before padding subtraction
    bounds: (u32, u32),
    padding: Spacing,
    font_size: u32,
    sizer: FitSizer,
    raster_mode: RasterMode,
}

impl FitLabel {
    /// Create a label for a host with the given capabilities.
    ///
    /// The render-mode hint is fixed here, once, from `caps`; it never
    /// changes for the lifetime of the label.
    pub fn new(caps: HostCaps) -> Self {
        Self {
            text: String::new(),
            bounds: (0, 0),
            padding: Spacing::zero(),
            font_size: DEFAULT_FONT_SIZE,
            sizer: FitSizer::new(),
            raster_mode: caps.raster_mode(),
        }
    }

    /// Set the internal padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the default sizer (e.g. to raise the minimum font size)
    pub fn with_sizer(mut self, sizer: FitSizer) -> Self {
        self.sizer = sizer;
        self
    }

    /// Host hook: the displayed text changed.
    ///
    /// Always refits, matching the host firing this on every tick of a timer
    /// display even when the rendered width barely moves.
    pub fn set_text(&mut self, text: impl Into<String>, measurer: &mut dyn TextMeasurer) {
        self.text = text.into();
        self.refit(measurer);
    }

    /// Host hook: the widget's allocated bounds changed.
    ///
    /// Refits only when the bounds actually differ from the previous ones.
    pub fn set_bounds(&mut self, width: u32, height: u32, measurer: &mut dyn TextMeasurer) {
        if self.bounds == (width, height) {
            return;
        }
        self.bounds = (width, height);
        self.refit(measurer);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The currently applied font size in pixels
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// The render-mode hint the host should apply for this label
    pub fn raster_mode(&self) -> RasterMode {
        self.raster_mode
    }

    /// The drawing area the current bounds and padding leave for text
    pub fn text_area(&self) -> TextBox {
        TextBox::from_outer(self.bounds.0, self.bounds.1, self.padding)
    }

    fn refit(&mut self, measurer: &mut dyn TextMeasurer) {
        let area = self.text_area();
        let fitted = self.sizer.fit(&self.text, measurer, area, self.font_size);
        if fitted != self.font_size {
            log::debug!(
                "refit {:?} in {}x{}: {}px -> {}px",
                self.text,
                area.width,
                area.height,
                self.font_size,
                fitted
            );
        }
        self.font_size = fitted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{MeasureRequest, MeasuredText};

    /// Linear, monotonic mock with a call counter.
    struct LinearMeasurer {
        calls: u32,
    }

    impl TextMeasurer for LinearMeasurer {
        fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText {
            self.calls += 1;
            if request.text.is_empty() {
                return MeasuredText::zero();
            }
            MeasuredText::new(request.font_size * 3, request.font_size)
        }
    }

    #[test]
    fn test_set_bounds_skips_refit_when_unchanged() {
        let mut measurer = LinearMeasurer { calls: 0 };
        let mut label = FitLabel::new(HostCaps::new());

        label.set_bounds(200, 100, &mut measurer);
        label.set_text("12:34", &mut measurer);
        let fitted = label.font_size();
        let calls = measurer.calls;
        assert!(calls > 0);

        label.set_bounds(200, 100, &mut measurer);
        assert_eq!(measurer.calls, calls);
        assert_eq!(label.font_size(), fitted);
    }

    #[test]
    fn test_set_text_refits() {
        let mut measurer = LinearMeasurer { calls: 0 };
        let mut label = FitLabel::new(HostCaps::new());

        label.set_bounds(200, 100, &mut measurer);
        label.set_text("12:34", &mut measurer);

        assert_eq!(label.font_size(), 65);
    }

    #[test]
    fn test_padding_shrinks_text_area() {
        let mut measurer = LinearMeasurer { calls: 0 };
        let mut label = FitLabel::new(HostCaps::new()).with_padding(Spacing::all(10));

        label.set_bounds(220, 120, &mut measurer);
        assert_eq!(label.text_area(), TextBox::new(200, 100));

        label.set_text("12:34", &mut measurer);
        assert_eq!(label.font_size(), 65);
    }

    #[test]
    fn test_zero_bounds_leave_font_size_untouched() {
        let mut measurer = LinearMeasurer { calls: 0 };
        let mut label = FitLabel::new(HostCaps::new());

        label.set_text("12:34", &mut measurer);

        assert_eq!(label.font_size(), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_raster_mode_fixed_at_construction() {
        let caps = HostCaps::new().with_software_raster_for_large_glyphs(true);
        let label = FitLabel::new(caps);

        assert_eq!(label.raster_mode(), RasterMode::Software);
    }
}
