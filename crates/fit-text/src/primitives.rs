//! Integer pixel geometry used by the sizing algorithm.

/// Per-side padding in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding (left + right)
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom)
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// The available drawing area for text, after the host widget's padding has
/// been subtracted from its allocated bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
}

impl TextBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build the drawing area from outer widget bounds minus padding.
    ///
    /// Saturates at zero: padding wider than the bounds produces a degenerate
    /// box, which the sizer treats as a no-op.
    pub const fn from_outer(width: u32, height: u32, padding: Spacing) -> Self {
        Self {
            width: width.saturating_sub(padding.horizontal()),
            height: height.saturating_sub(padding.vertical()),
        }
    }

    /// A box with either dimension at zero cannot hold any text; sizing
    /// against it must leave the current font size untouched.
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outer_subtracts_padding() {
        let area = TextBox::from_outer(220, 120, Spacing::all(10));
        assert_eq!(area, TextBox::new(200, 100));
    }

    #[test]
    fn test_from_outer_saturates_on_oversized_padding() {
        let area = TextBox::from_outer(10, 10, Spacing::symmetric(20, 0));
        assert_eq!(area.width, 0);
        assert!(area.is_degenerate());
        assert_eq!(area.height, 10);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(TextBox::new(0, 100).is_degenerate());
        assert!(TextBox::new(100, 0).is_degenerate());
        assert!(!TextBox::new(1, 1).is_degenerate());
    }
}
