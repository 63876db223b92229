//! Host toolkit capabilities, resolved once at widget construction.

/// How the host should rasterize the label's glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMode {
    /// Whatever the host does by default (usually hardware-accelerated)
    #[default]
    Default,
    /// Software rasterization. Some hosts cap the glyph-cache entry size and
    /// reject the very large font sizes the shrink search probes; rendering
    /// the label in software sidesteps that cache.
    Software,
}

/// Capabilities of the embedding toolkit that affect the label.
///
/// The host resolves these once (typically from a toolkit version probe) and
/// hands them to [`FitLabel::new`](crate::FitLabel::new). The widget never
/// re-branches on host versions at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCaps {
    /// True when the host's glyph cache cannot handle the oversized font
    /// sizes probed during fitting and needs the software raster hint.
    pub software_raster_for_large_glyphs: bool,
}

impl HostCaps {
    pub const fn new() -> Self {
        Self {
            software_raster_for_large_glyphs: false,
        }
    }

    /// Request the software raster hint
    pub const fn with_software_raster_for_large_glyphs(mut self, value: bool) -> Self {
        self.software_raster_for_large_glyphs = value;
        self
    }

    /// The render-mode hint a label built with these capabilities reports.
    pub const fn raster_mode(&self) -> RasterMode {
        if self.software_raster_for_large_glyphs {
            RasterMode::Software
        } else {
            RasterMode::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_mode_resolution() {
        assert_eq!(HostCaps::new().raster_mode(), RasterMode::Default);
        assert_eq!(
            HostCaps::new()
                .with_software_raster_for_large_glyphs(true)
                .raster_mode(),
            RasterMode::Software
        );
    }
}
