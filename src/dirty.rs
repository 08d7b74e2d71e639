//! Dirty region tracking
//!
//! Every pixel write grows a single bounding box; a flush takes it and leaves
//! the tracker empty again.

/// Inclusive pixel rectangle in physical panel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Leftmost column
    pub x1: u16,
    /// Topmost row
    pub y1: u16,
    /// Rightmost column
    pub x2: u16,
    /// Bottom row
    pub y2: u16,
}

impl Window {
    /// Create a window from inclusive corners
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.x2.saturating_sub(self.x1).saturating_add(1)
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.y2.saturating_sub(self.y1).saturating_add(1)
    }

    /// Smallest window covering both
    pub fn union(self, other: Window) -> Window {
        Window {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }
}

/// Bounding box of everything touched since the last flush
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyRegion {
    width: u16,
    height: u16,
    window: Option<Window>,
}

impl DirtyRegion {
    /// Create an empty tracker for a `width` x `height` panel
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            window: None,
        }
    }

    /// Union the inclusive rectangle into the dirty bounds
    ///
    /// Coordinates are clipped to the panel first; a rectangle that clips down
    /// to nothing (or has `x1 > x2` / `y1 > y2`) leaves the bounds untouched.
    pub fn mark(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if self.width == 0 || self.height == 0 || x1 > x2 || y1 > y2 {
            return;
        }
        let max_x = i32::from(self.width) - 1;
        let max_y = i32::from(self.height) - 1;
        if x2 < 0 || y2 < 0 || x1 > max_x || y1 > max_y {
            return;
        }

        let clipped = Window::new(
            x1.max(0) as u16,
            y1.max(0) as u16,
            x2.min(max_x) as u16,
            y2.min(max_y) as u16,
        );
        self.window = Some(match self.window {
            Some(current) => current.union(clipped),
            None => clipped,
        });
    }

    /// Mark a single pixel
    pub fn mark_pixel(&mut self, x: i32, y: i32) {
        self.mark(x, y, x, y);
    }

    /// Mark the whole panel
    pub fn mark_all(&mut self) {
        self.mark(
            0,
            0,
            i32::from(self.width) - 1,
            i32::from(self.height) - 1,
        );
    }

    /// Current bounds without resetting them
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Whether nothing has been touched since the last take
    pub fn is_empty(&self) -> bool {
        self.window.is_none()
    }

    /// Return the current bounds and reset to empty
    pub fn take(&mut self) -> Option<Window> {
        self.window.take()
    }
}
