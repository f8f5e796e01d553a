use wordplay_protocol::TileId;

/// Identifier the platform assigns to one touch point. Only meaningful while
/// that finger stays on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub i32);

/// Which input started the active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Touch(TouchId),
}

/// The single tile currently being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub tile: TileId,
    pub source: DragSource,
}

impl ActiveDrag {
    pub fn is_touch(&self, touch: TouchId) -> bool {
        self.source == DragSource::Touch(touch)
    }

    pub fn touch(&self) -> Option<TouchId> {
        match self.source {
            DragSource::Touch(id) => Some(id),
            DragSource::Pointer => None,
        }
    }
}

/// Where a drag was released, as resolved by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Container,
    Outside,
}
