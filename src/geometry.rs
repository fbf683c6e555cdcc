// geometry.rs - Border Segment Layout
//
// The border is four plain rectangles around the target. LEFT and RIGHT run
// from the top of the border down past the target's bottom edge by the
// bottom width; TOP and BOTTOM span the full inflated width. With equal
// widths on every side the four pieces tile the frame exactly; with unequal
// widths the corners may show small gaps, which is accepted.

use std::str::FromStr;

use crate::constants;
use crate::error::FrameError;

/// The rectangle being framed, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl TargetRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Per-side border thickness in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderWidths {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for BorderWidths {
    fn default() -> Self {
        Self::uniform(constants::border::DEFAULT_WIDTH)
    }
}

impl BorderWidths {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn uniform(width: u32) -> Self {
        Self::new(width, width, width, width)
    }

    /// Parse a `t:r:b:l` specifier
    pub fn parse(spec: &str) -> Result<Self, FrameError> {
        let invalid = || FrameError::InvalidBorderFormat(spec.to_string());

        let fields = spec
            .split(constants::border::SEPARATOR)
            .map(|field| u32::from_str(field).map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match fields.as_slice() {
            &[top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for BorderWidths {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Logical role of one overlay window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSegment {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSegment {
    /// Layout order; index `i` of `layout`'s result is `ALL[i]`
    pub const ALL: [BorderSegment; 4] = [
        BorderSegment::Left,
        BorderSegment::Right,
        BorderSegment::Top,
        BorderSegment::Bottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BorderSegment::Left => "left",
            BorderSegment::Right => "right",
            BorderSegment::Top => "top",
            BorderSegment::Bottom => "bottom",
        }
    }
}

/// Screen rectangle of one segment window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SegmentRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// A zero-thickness segment still gets a window, it just never shows
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// X11 carries window positions as i16 and sizes as u16
    pub fn fits_x11(&self) -> bool {
        i16::try_from(self.x).is_ok()
            && i16::try_from(self.y).is_ok()
            && u16::try_from(self.width).is_ok()
            && u16::try_from(self.height).is_ok()
    }
}

/// Compute the four segment rectangles in `BorderSegment::ALL` order.
pub fn layout(target: TargetRect, widths: BorderWidths) -> [SegmentRect; 4] {
    let left = SegmentRect::new(
        target.x.saturating_sub_unsigned(widths.left),
        target.y.saturating_sub_unsigned(widths.top),
        widths.left,
        target.height.saturating_add(widths.bottom),
    );

    let right = SegmentRect::new(
        target.x.saturating_add_unsigned(target.width),
        left.y,
        widths.right,
        left.height,
    );

    let top = SegmentRect::new(
        left.x,
        left.y,
        target.width.saturating_add(widths.left).saturating_add(widths.right),
        widths.top,
    );

    let bottom = SegmentRect::new(
        left.x,
        target.y.saturating_add_unsigned(target.height),
        top.width,
        widths.bottom,
    );

    [left, right, top, bottom]
}
