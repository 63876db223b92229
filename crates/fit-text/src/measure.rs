//! Backend-agnostic text measurement.
//!
//! The sizing algorithm never talks to a text engine directly. It is handed a
//! [`TextMeasurer`] capability and asks it for the bounding box of the text at
//! each candidate font size. Backends like `fit-text-cosmic` implement this
//! trait; tests inject deterministic mocks.

use crate::primitives::TextBox;

/// Request to measure a single line of text at a candidate font size.
#[derive(Debug, Clone)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    /// Candidate font size in whole pixels
    pub font_size: u32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
}

impl<'a> MeasureRequest<'a> {
    pub fn new(text: &'a str, font_size: u32) -> Self {
        Self {
            text,
            font_size,
            family: None,
        }
    }

    /// Set the font family
    pub fn with_family(mut self, family: &'a str) -> Self {
        self.family = Some(family);
        self
    }
}

/// Bounding box of a string rendered at a given font size, in whole pixels.
///
/// Always computed fresh per measurement; the sizer never caches these across
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredText {
    pub width: u32,
    pub height: u32,
}

impl MeasuredText {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// True when the measured text fits the box in both dimensions.
    pub const fn fits_within(&self, area: TextBox) -> bool {
        self.width <= area.width && self.height <= area.height
    }
}

/// Backend-agnostic text measurement capability.
///
/// Implementations must use single-line layout: no wrapping (layout width is
/// effectively unbounded) and start-aligned placement, so the reported box is
/// a function of the text and font size alone.
///
/// The sizer assumes measurement is monotonic non-decreasing in font size;
/// real shaping engines satisfy this.
pub trait TextMeasurer {
    /// Measure `request.text` at `request.font_size`.
    fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within_is_inclusive() {
        let area = TextBox::new(100, 50);
        assert!(MeasuredText::new(100, 50).fits_within(area));
        assert!(MeasuredText::zero().fits_within(area));
        assert!(!MeasuredText::new(101, 50).fits_within(area));
        assert!(!MeasuredText::new(100, 51).fits_within(area));
    }
}
