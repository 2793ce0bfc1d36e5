//! Uniform fit-within scaling of the fixed design onto a viewport.
//!
//! The board is authored at a single reference size. Each viewport observation
//! gets one scale factor, the smaller of the two axis ratios, so the design is
//! never stretched and never overflows. Content is anchored at the top-left;
//! leftover space falls to the right and/or bottom.

use crate::error::LayoutError;
use crate::layout_constants::{DESIGN_HEIGHT, DESIGN_WIDTH};

/// Reference size the layout was authored for
///
/// Can only be built through [`DesignSize::new`], so every instance has finite,
/// positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSize {
    width: f64,
    height: f64,
}

impl DesignSize {
    /// The 896x512 reference design
    pub const REFERENCE: DesignSize = DesignSize {
        width: DESIGN_WIDTH,
        height: DESIGN_HEIGHT,
    };

    /// Validate a design size. Zero, negative or non-finite dimensions are a
    /// configuration error.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(LayoutError::InvalidDesignWidth(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(LayoutError::InvalidDesignHeight(height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Space available to render into, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Negative, NaN and infinite dimensions become zero
    fn sanitized(self) -> Self {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
        }
    }
}

/// Scale factor and the resulting size of the rendered design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleResult {
    pub scale_factor: f64,
    pub render_width: f64,
    pub render_height: f64,
}

impl ScaleResult {
    /// Whether there is anything to draw
    pub fn is_visible(&self) -> bool {
        self.scale_factor > 0.0
    }
}

/// Fit `design` inside `viewport` with a single uniform scale
///
/// A zero-area viewport yields a zero scale and a 0x0 render box.
pub fn compute_scale(design: DesignSize, viewport: ViewportSize) -> ScaleResult {
    let viewport = viewport.sanitized();
    let scale_x = viewport.width / design.width;
    let scale_y = viewport.height / design.height;
    let scale_factor = scale_x.min(scale_y);

    // The limiting axis can land one ulp past the viewport edge
    ScaleResult {
        scale_factor,
        render_width: (design.width * scale_factor).min(viewport.width),
        render_height: (design.height * scale_factor).min(viewport.height),
    }
}
