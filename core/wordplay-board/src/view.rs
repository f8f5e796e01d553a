use wordplay_protocol::{Point, TileId};

/// Rendering side of the game. The platform layer implements this; every
/// call is a projection of state the controller already committed.
pub trait BoardView {
    /// Adds or removes the in-flight marker on a tile.
    fn set_in_flight(&mut self, tile: TileId, in_flight: bool);

    /// Pins a tile to a touch point, or returns it to its layout slot on `None`.
    fn float_tile(&mut self, tile: TileId, at: Option<Point>);

    /// Renders one more placed word at the end of the container.
    fn append_token(&mut self, word: &str);

    fn show_message(&mut self, message: &str);

    fn hide_message(&mut self);
}
