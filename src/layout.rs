//! Divider position and drag tracking for the two-pane shell.
//!
//! All geometry is in logical pixels. The terminal front end converts
//! cells with [`CELL_WIDTH_PX`] before calling [`SplitLayout::resize`];
//! pointer positions and container bounds only need to share a unit.

use std::time::Instant;

pub const MIN_PERCENT: f32 = 10.0;
pub const MAX_PERCENT: f32 = 90.0;
pub const DEFAULT_PERCENT: f32 = 50.0;
/// Viewports narrower than this stack the panes vertically.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;
/// Logical pixels per terminal column.
pub const CELL_WIDTH_PX: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side; the divider moves along X.
    Horizontal,
    /// Stacked; the divider moves along Y.
    Vertical,
}

impl Orientation {
    pub fn for_viewport(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Held for exactly as long as a drag is in progress. Move events are only
/// routed to the layout while one exists; dropping it ends tracking.
#[derive(Debug)]
pub struct DragCapture {
    source: PointerSource,
    started: Instant,
}

impl DragCapture {
    fn acquire(source: PointerSource) -> Self {
        log::debug!("drag capture acquired ({:?})", source);
        Self {
            source,
            started: Instant::now(),
        }
    }

    pub fn source(&self) -> PointerSource {
        self.source
    }
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        log::debug!(
            "drag capture released ({:?}, {} ms)",
            self.source,
            self.started.elapsed().as_millis()
        );
    }
}

#[derive(Debug)]
pub struct SplitLayout {
    percent: f32,
    orientation: Orientation,
    breakpoint: f32,
    container: Option<Bounds>,
    capture: Option<DragCapture>,
}

impl SplitLayout {
    pub fn new(viewport_width: f32) -> Self {
        Self::with_breakpoint(viewport_width, DEFAULT_BREAKPOINT)
    }

    pub fn with_breakpoint(viewport_width: f32, breakpoint: f32) -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            orientation: Orientation::for_viewport(viewport_width, breakpoint),
            breakpoint,
            container: None,
            capture: None,
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    pub fn capture(&self) -> Option<&DragCapture> {
        self.capture.as_ref()
    }

    /// Recompute orientation. Applies mid-drag too: the next move uses the
    /// new axis.
    pub fn resize(&mut self, viewport_width: f32) {
        let orientation = Orientation::for_viewport(viewport_width, self.breakpoint);
        if orientation != self.orientation {
            log::debug!("orientation {:?} -> {:?}", self.orientation, orientation);
        }
        self.orientation = orientation;
    }

    /// Record the measured container, or `None` while it is not on screen.
    pub fn set_container(&mut self, bounds: Option<Bounds>) {
        self.container = bounds;
    }

    pub fn begin_drag(&mut self, source: PointerSource) {
        if self.capture.is_none() {
            self.capture = Some(DragCapture::acquire(source));
        }
    }

    pub fn end_drag(&mut self) {
        self.capture = None;
    }

    /// The pointer left the tracked surface.
    pub fn pointer_leave(&mut self) {
        self.end_drag();
    }

    /// Update the split from a pointer position. Returns whether the
    /// percentage was recomputed.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if self.capture.is_none() {
            return false;
        }
        let Some(bounds) = self.container else {
            return false;
        };

        let (offset, extent) = match self.orientation {
            Orientation::Horizontal => (point.x - bounds.x, bounds.width),
            Orientation::Vertical => (point.y - bounds.y, bounds.height),
        };
        if extent <= 0.0 {
            return false;
        }

        self.percent = clamp_percent(offset / extent * 100.0);
        true
    }

    /// Keyboard adjustment of the divider.
    pub fn nudge(&mut self, delta: f32) {
        self.percent = clamp_percent(self.percent + delta);
    }
}

pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return DEFAULT_PERCENT;
    }
    value.clamp(MIN_PERCENT, MAX_PERCENT)
}
