use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Handle of a draggable word tile, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct TileId(pub u32);

impl TileId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the tile in registration order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
