//! The shrink-to-fit search over integer font sizes.

use crate::measure::{MeasureRequest, MeasuredText, TextMeasurer};
use crate::primitives::TextBox;

/// Iterative shrink search that finds the largest integer font size whose
/// rendered text fits a [`TextBox`].
///
/// The candidate starts at the box height (no legible font exceeds the box
/// height in pixels) and shrinks until the measurement fits. When a
/// measurement overflows, the next candidate is first scaled down by the
/// measured overflow ratio, then decremented by one. The unconditional
/// decrement runs every iteration, including right after a proportional
/// correction; that over-shrink-then-refine order is part of the contract and
/// callers relying on exact output must not "optimize" it away.
///
/// This is a damped shrink rather than a true binary search: it overshoots
/// toward a safe size using the overflow ratio, then fine-tunes in single
/// steps. The candidate strictly decreases each iteration, so the loop
/// terminates; `min_size` and `max_iterations` are defensive floors for
/// degenerate measurers, not part of normal convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitSizer {
    min_size: u32,
    max_iterations: u32,
}

impl Default for FitSizer {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_iterations: 4096,
        }
    }
}

impl FitSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smallest font size the search may return
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the safety cap on measurement iterations
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Find the largest font size at which `text` fits `area`.
    ///
    /// `current` is returned untouched when `area` has a zero dimension
    /// (degenerate or just-created layouts must not clobber the applied
    /// size). Otherwise the returned size either fits the box or sits at the
    /// configured floor.
    pub fn fit(
        &self,
        text: &str,
        measurer: &mut dyn TextMeasurer,
        area: TextBox,
        current: u32,
    ) -> u32 {
        if area.is_degenerate() {
            return current;
        }

        let mut size = area.height;
        let mut prev: Option<MeasuredText> = None;

        for _ in 0..self.max_iterations {
            if let Some(prev) = prev {
                // At most one correction per pass, width checked first. The
                // `> 0` checks are implied by the overflow comparisons but
                // stay explicit so the division can never be by zero.
                if prev.width > area.width && prev.width > 0 {
                    size = scale_down(size, area.width, prev.width);
                } else if prev.height > area.height && prev.height > 0 {
                    size = scale_down(size, area.height, prev.height);
                }
            }
            size = size.saturating_sub(1).max(self.min_size);

            let measured = measurer.measure(MeasureRequest::new(text, size));
            if measured.fits_within(area) || size <= self.min_size {
                return size;
            }
            prev = Some(measured);
        }

        size
    }
}

/// Truncating proportional correction: `size * limit / measured`.
///
/// Widened to u64 so the intermediate product cannot wrap for any pixel-scale
/// inputs.
fn scale_down(size: u32, limit: u32, measured: u32) -> u32 {
    (size as u64 * limit as u64 / measured as u64) as u32
}
