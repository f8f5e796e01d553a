pub mod components;
pub mod controller;
pub mod drag;
pub mod notification;
pub mod sequence;
pub mod view;

use hecs::{Entity, World};
use components::{TileVisual, TileWord};
use drag::{ActiveDrag, DragSource, DropTarget, TouchId};
use notification::Notification;
use sequence::PlacedSequence;
use wordplay_protocol::{Point, TileFlags, TileId};

pub use controller::GameController;
pub use view::BoardView;

/// All game state for one page: the tiles, the drag in progress, the placed
/// words and the feedback overlay.
pub struct Board {
    world: World,
    // Indexed by TileId
    tiles: Vec<Entity>,
    drag: Option<ActiveDrag>,
    placed: PlacedSequence,
    notification: Notification,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            tiles: Vec::new(),
            drag: None,
            placed: PlacedSequence::new(),
            notification: Notification::default(),
        }
    }

    /// Add a draggable tile carrying `word`
    pub fn add_tile(&mut self, word: String) -> TileId {
        let id = TileId::new(self.tiles.len() as u32);
        let entity = self.world.spawn((id, TileWord { word }, TileVisual::default()));
        self.tiles.push(entity);
        id
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile_word(&self, tile: TileId) -> Option<String> {
        let entity = self.entity(tile)?;
        self.world
            .get::<&TileWord>(entity)
            .map(|t| t.word.clone())
            .ok()
    }

    pub fn tile_visual(&self, tile: TileId) -> Option<TileVisual> {
        let entity = self.entity(tile)?;
        self.world.get::<&TileVisual>(entity).map(|v| *v).ok()
    }

    /// Tiles currently carrying the in-flight marker
    pub fn tiles_in_flight(&self) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self
            .world
            .query::<(&TileId, &TileVisual)>()
            .iter()
            .filter(|(_, (_, visual))| visual.is_in_flight())
            .map(|(_, (id, _))| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.drag
    }

    pub fn placed(&self) -> &PlacedSequence {
        &self.placed
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }

    /// Start dragging `tile`. Refused while another drag is active or when the
    /// tile is unknown.
    pub fn begin_drag(&mut self, tile: TileId, source: DragSource) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(visual) = self.visual_mut(tile) else {
            return false;
        };

        visual.flags.insert(TileFlags::DRAGGING);
        self.drag = Some(ActiveDrag { tile, source });
        true
    }

    /// Append the dragged tile's word if the drop landed on the container.
    /// Returns the appended word.
    pub fn drop_at(&mut self, target: DropTarget) -> Option<String> {
        if target != DropTarget::Container {
            return None;
        }
        let drag = self.drag?;
        let word = self.tile_word(drag.tile)?;

        self.placed.push(word.clone());
        Some(word)
    }

    /// Pin the dragged tile to `point`. Only the touch that started the drag
    /// may move it.
    pub fn float_to(&mut self, touch: TouchId, point: Point) -> Option<TileId> {
        let drag = self.drag.filter(|d| d.is_touch(touch))?;
        let visual = self.visual_mut(drag.tile)?;

        visual.flags.insert(TileFlags::FLOATING);
        visual.anchor = Some(point);
        Some(drag.tile)
    }

    /// Clear the drag and reset the tile's visual state.
    /// Returns the released tile and whether it had been floating.
    pub fn end_drag(&mut self) -> Option<(TileId, bool)> {
        let drag = self.drag.take()?;
        let visual = self.visual_mut(drag.tile)?;

        let was_floating = visual.is_floating();
        *visual = TileVisual::default();
        Some((drag.tile, was_floating))
    }

    fn entity(&self, tile: TileId) -> Option<Entity> {
        self.tiles.get(tile.index()).copied()
    }

    fn visual_mut(&mut self, tile: TileId) -> Option<&mut TileVisual> {
        let entity = self.entity(tile)?;
        self.world.query_one_mut::<&mut TileVisual>(entity).ok()
    }
}
