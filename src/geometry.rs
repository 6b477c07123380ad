/// Pixel dimensions of an image buffer
///
/// # Fields
/// * `width: u32` - Width in pixels
/// * `height: u32` - Height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Represents an axis-aligned region with inclusive corners
///
/// Both corners belong to the region, so `Rect { xtl: 10, ytl: 10, xbr: 20, ybr: 20 }`
/// covers 11x11 pixels. Construction does not check `xtl <= xbr` and `ytl <= ybr`;
/// operations that consume a `Rect` do.
///
/// # Fields
/// * `xtl: i32` - X-coordinate of the top-left corner
/// * `ytl: i32` - Y-coordinate of the top-left corner
/// * `xbr: i32` - X-coordinate of the bottom-right corner
/// * `ybr: i32` - Y-coordinate of the bottom-right corner
///
/// # Example
/// ```rust
/// use box_annotate::Rect;
///
/// let rect = Rect::new(10, 10, 20, 20);
/// assert_eq!(rect.width(), 11);
/// assert_eq!(rect.height(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub xtl: i32,
    pub ytl: i32,
    pub xbr: i32,
    pub ybr: i32,
}

impl Rect {
    pub fn new(xtl: i32, ytl: i32, xbr: i32, ybr: i32) -> Self {
        Self { xtl, ytl, xbr, ybr }
    }

    /// Rectangle covering every pixel of `size`.
    pub fn full(size: Size) -> Self {
        Self::new(0, 0, size.width as i32 - 1, size.height as i32 - 1)
    }

    /// Inclusive horizontal extent. Zero or negative for an inverted rectangle.
    pub fn width(&self) -> i64 {
        self.xbr as i64 - self.xtl as i64 + 1
    }

    /// Inclusive vertical extent. Zero or negative for an inverted rectangle.
    pub fn height(&self) -> i64 {
        self.ybr as i64 - self.ytl as i64 + 1
    }

    pub fn is_valid(&self) -> bool {
        self.xtl <= self.xbr && self.ytl <= self.ybr
    }

    /// True when both corners lie inside an image of the given size.
    pub fn fits_within(&self, size: Size) -> bool {
        self.xtl >= 0
            && self.ytl >= 0
            && (self.xbr as i64) < size.width as i64
            && (self.ybr as i64) < size.height as i64
    }

    /// Size of the region. Only meaningful for a valid rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width().max(0) as u32, self.height().max(0) as u32)
    }
}
