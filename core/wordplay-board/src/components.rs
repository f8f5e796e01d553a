use wordplay_protocol::{Point, TileFlags};

/// The word printed on a tile (Source of Truth for what a drop appends)
#[derive(Debug, Clone)]
pub struct TileWord {
    pub word: String,
}

/// Transient drag state of a tile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TileVisual {
    pub flags: TileFlags,
    /// Where a floating tile is pinned, in page coordinates
    pub anchor: Option<Point>,
}

impl TileVisual {
    pub fn is_in_flight(&self) -> bool {
        self.flags.contains(TileFlags::DRAGGING)
    }

    pub fn is_floating(&self) -> bool {
        self.flags.contains(TileFlags::FLOATING)
    }
}
