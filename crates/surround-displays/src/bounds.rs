use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhysicalBounds {
    pub position: PhysicalPosition,
    pub size: PhysicalSize,
}

impl PhysicalBounds {
    pub fn new(position: PhysicalPosition, size: PhysicalSize) -> Self {
        Self { position, size }
    }

    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            PhysicalPosition::new(left, top),
            PhysicalSize::new(
                right.saturating_sub(left).max(0) as u32,
                bottom.saturating_sub(top).max(0) as u32,
            ),
        )
    }

    pub fn position(&self) -> PhysicalPosition {
        self.position
    }

    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height as i32
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhysicalPosition {
    pub x: i32,
    pub y: i32,
}

impl PhysicalPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ltrb_computes_size() {
        let b = PhysicalBounds::from_ltrb(-1920, 0, 0, 1080);
        assert_eq!(b.position(), PhysicalPosition::new(-1920, 0));
        assert_eq!(b.size(), PhysicalSize::new(1920, 1080));
        assert_eq!(b.right(), 0);
        assert_eq!(b.bottom(), 1080);
    }

    #[test]
    fn from_ltrb_clamps_inverted_rects() {
        let b = PhysicalBounds::from_ltrb(100, 100, 50, 50);
        assert_eq!(b.size(), PhysicalSize::new(0, 0));
    }
}
