//! Measured boxes and the highlight rectangle derived from them.

use thiserror::Error;

/// Rectangle in pixels. Tab boxes are expressed relative to the tab bar container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Re-express a viewport-space box relative to `container`'s origin.
    pub fn relative_to(&self, container: &LayoutBox) -> LayoutBox {
        LayoutBox {
            left: self.left - container.left,
            top: self.top - container.top,
            width: self.width,
            height: self.height,
        }
    }

    /// A box with no area is what an element reports before layout has run
    /// (or while it is `display: none`).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Geometry of the highlight ("dot") behind the active tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGeometry {
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub opacity: f64,
}

impl DotGeometry {
    pub const HIDDEN: DotGeometry = DotGeometry {
        left: 0.0,
        width: 0.0,
        height: 0.0,
        top: 0.0,
        opacity: 0.0,
    };

    pub fn from_box(measured: LayoutBox) -> Self {
        Self {
            left: measured.left,
            width: measured.width,
            height: measured.height,
            top: measured.top,
            opacity: 1.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style for the highlight element. `background` is the resolved
    /// active background for the current tab.
    pub fn style(&self, background: &str) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; opacity: {}; background: {background};",
            self.left, self.top, self.width, self.height, self.opacity
        )
    }
}

impl Default for DotGeometry {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Why a highlight measurement could not be taken. These are soft failures:
/// the highlight keeps its previous geometry until a later pass succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("tab bar container is not mounted yet")]
    ContainerNotMounted,
    #[error("tab {index} is not mounted yet")]
    TabNotMounted { index: usize },
    #[error("layout query failed: {0}")]
    Layout(String),
    #[error("tab {index} has no layout box yet")]
    EmptyBox { index: usize },
}
