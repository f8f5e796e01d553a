use tracing::{debug, info};
use wordplay_checker::{check, LexiconIndex, Verdict};
use wordplay_protocol::{Point, TileId};

use crate::drag::{DragSource, DropTarget, TouchId};
use crate::view::BoardView;
use crate::Board;

/// Event interface the platform layer drives. Each handler commits the state
/// change on the [`Board`] first and then projects it through the view.
pub struct GameController<V: BoardView> {
    board: Board,
    lexicon: LexiconIndex,
    view: V,
}

impl<V: BoardView> GameController<V> {
    pub fn new(lexicon: LexiconIndex, view: V) -> Self {
        Self {
            board: Board::new(),
            lexicon,
            view,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn placed(&self) -> &[String] {
        self.board.placed().words()
    }

    pub fn active_tile(&self) -> Option<TileId> {
        self.board.active_drag().map(|d| d.tile)
    }

    /// The finger driving the current drag, if it is a touch drag.
    pub fn active_touch(&self) -> Option<TouchId> {
        self.board.active_drag().and_then(|d| d.touch())
    }

    pub fn register_tile(&mut self, word: impl Into<String>) -> TileId {
        let word = word.into();
        let id = self.board.add_tile(word);
        debug!(tile = id.0, "tile registered");
        id
    }

    // --- Pointer (native drag-and-drop) ---

    pub fn on_drag_start(&mut self, tile: TileId) -> bool {
        self.begin(tile, DragSource::Pointer)
    }

    /// Whether the platform's default drag-over handling must be suppressed,
    /// which is what allows a drop on the container.
    pub fn on_drag_over(&self, target: DropTarget) -> bool {
        target == DropTarget::Container
    }

    pub fn on_drop(&mut self, target: DropTarget) -> bool {
        match self.board.active_drag() {
            Some(drag) if drag.source == DragSource::Pointer => self.drop_at(target),
            _ => false,
        }
    }

    pub fn on_drag_end(&mut self) {
        if matches!(self.board.active_drag(), Some(d) if d.source == DragSource::Pointer) {
            self.end();
        }
    }

    // --- Touch ---

    /// Ignored while any other drag is active.
    pub fn on_touch_start(&mut self, tile: TileId, touch: TouchId) -> bool {
        self.begin(tile, DragSource::Touch(touch))
    }

    /// Returns true when the touch belongs to the active drag, in which case
    /// the platform should stop the page from scrolling.
    pub fn on_touch_move(&mut self, touch: TouchId, point: Point) -> bool {
        match self.board.float_to(touch, point) {
            Some(tile) => {
                self.view.float_tile(tile, Some(point));
                true
            }
            None => false,
        }
    }

    /// Drops at the release point and ends the drag. Returns true if a word was placed.
    pub fn on_touch_end(&mut self, touch: TouchId, target: DropTarget) -> bool {
        match self.board.active_drag() {
            Some(drag) if drag.is_touch(touch) => {
                let dropped = self.drop_at(target);
                self.end();
                dropped
            }
            _ => false,
        }
    }

    /// The platform aborted the touch (system gesture, alert, scroll takeover).
    /// Ends the drag without dropping.
    pub fn on_touch_cancel(&mut self, touch: TouchId) -> bool {
        match self.board.active_drag() {
            Some(drag) if drag.is_touch(touch) => {
                debug!(tile = drag.tile.0, "touch cancelled");
                self.end();
                true
            }
            _ => false,
        }
    }

    // --- Check button & overlay ---

    pub fn on_check(&mut self) -> Verdict {
        let verdict = check(self.board.placed().words(), &self.lexicon);
        info!(verdict = verdict.kind(), words = self.board.placed().len(), "sentence checked");

        self.show(verdict.message());
        verdict
    }

    pub fn on_dismiss(&mut self) {
        if self.board.notification_mut().hide() {
            self.view.hide_message();
        }
    }

    pub fn show(&mut self, message: &str) {
        let replaced = self.board.notification_mut().show(message);
        debug!(replaced, "notification shown");
        self.view.show_message(message);
    }

    fn begin(&mut self, tile: TileId, source: DragSource) -> bool {
        if !self.board.begin_drag(tile, source) {
            debug!(tile = tile.0, ?source, "drag start ignored");
            return false;
        }
        self.view.set_in_flight(tile, true);
        true
    }

    fn drop_at(&mut self, target: DropTarget) -> bool {
        match self.board.drop_at(target) {
            Some(word) => {
                debug!(%word, placed = self.board.placed().len(), "word placed");
                self.view.append_token(&word);
                true
            }
            None => {
                debug!(?target, "drop rejected");
                false
            }
        }
    }

    fn end(&mut self) {
        if let Some((tile, was_floating)) = self.board.end_drag() {
            if was_floating {
                self.view.float_tile(tile, None);
            }
            self.view.set_in_flight(tile, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TileVisual;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        InFlight(TileId, bool),
        Float(TileId, Option<Point>),
        Token(String),
        Show(String),
        Hide,
    }

    /// Records every projection so tests can assert on what the page would show.
    #[derive(Default)]
    struct RecordingView {
        calls: Vec<Call>,
        tokens: Vec<String>,
        overlay: Option<String>,
    }

    impl BoardView for RecordingView {
        fn set_in_flight(&mut self, tile: TileId, in_flight: bool) {
            self.calls.push(Call::InFlight(tile, in_flight));
        }

        fn float_tile(&mut self, tile: TileId, at: Option<Point>) {
            self.calls.push(Call::Float(tile, at));
        }

        fn append_token(&mut self, word: &str) {
            self.calls.push(Call::Token(word.to_string()));
            self.tokens.push(word.to_string());
        }

        fn show_message(&mut self, message: &str) {
            self.calls.push(Call::Show(message.to_string()));
            self.overlay = Some(message.to_string());
        }

        fn hide_message(&mut self) {
            self.calls.push(Call::Hide);
            self.overlay = None;
        }
    }

    fn game(words: &[&str]) -> (GameController<RecordingView>, Vec<TileId>) {
        let mut game = GameController::new(LexiconIndex::builtin(), RecordingView::default());
        let ids = words.iter().map(|w| game.register_tile(*w)).collect();
        (game, ids)
    }

    fn pointer_drop(game: &mut GameController<RecordingView>, tile: TileId, target: DropTarget) {
        game.on_drag_start(tile);
        if game.on_drag_over(target) {
            game.on_drop(target);
        }
        game.on_drag_end();
    }

    #[test]
    fn test_drop_outside_leaves_sequence_unchanged() {
        let (mut game, ids) = game(&["A", "big"]);
        pointer_drop(&mut game, ids[0], DropTarget::Container);
        let before = game.placed().len();

        game.on_drag_start(ids[1]);
        assert!(!game.on_drop(DropTarget::Outside));
        game.on_drag_end();

        assert_eq!(game.placed().len(), before);
        assert_eq!(game.active_tile(), None);
        assert!(game.board().tiles_in_flight().is_empty());
    }

    #[test]
    fn test_drop_inside_appends_in_order_with_duplicates() {
        let (mut game, ids) = game(&["A", "dog"]);

        pointer_drop(&mut game, ids[0], DropTarget::Container);
        pointer_drop(&mut game, ids[1], DropTarget::Container);
        pointer_drop(&mut game, ids[1], DropTarget::Container);

        assert_eq!(game.placed(), ["A", "dog", "dog"]);
        assert_eq!(game.view().tokens, vec!["A", "dog", "dog"]);
    }

    #[test]
    fn test_drag_over_only_allows_container() {
        let (game, _) = game(&[]);
        assert!(game.on_drag_over(DropTarget::Container));
        assert!(!game.on_drag_over(DropTarget::Outside));
    }

    #[test]
    fn test_pointer_view_projection() {
        let (mut game, ids) = game(&["cat"]);
        pointer_drop(&mut game, ids[0], DropTarget::Container);

        assert_eq!(
            game.view().calls,
            vec![
                Call::InFlight(ids[0], true),
                Call::Token("cat".to_string()),
                Call::InFlight(ids[0], false),
            ]
        );
    }

    #[test]
    fn test_touch_drag_into_container() {
        let (mut game, ids) = game(&["smiles"]);
        let touch = TouchId(11);

        assert!(game.on_touch_start(ids[0], touch));
        assert!(game.on_touch_move(touch, Point::new(40.0, 80.0)));
        assert!(game.on_touch_end(touch, DropTarget::Container));

        assert_eq!(game.placed(), ["smiles"]);
        assert_eq!(game.active_tile(), None);
        assert_eq!(
            game.view().calls,
            vec![
                Call::InFlight(ids[0], true),
                Call::Float(ids[0], Some(Point::new(40.0, 80.0))),
                Call::Token("smiles".to_string()),
                Call::Float(ids[0], None),
                Call::InFlight(ids[0], false),
            ]
        );
    }

    #[test]
    fn test_touch_released_outside_resets_tile() {
        let (mut game, ids) = game(&["girl"]);
        let touch = TouchId(1);

        game.on_touch_start(ids[0], touch);
        game.on_touch_move(touch, Point::new(1.0, 2.0));
        assert!(!game.on_touch_end(touch, DropTarget::Outside));

        assert!(game.placed().is_empty());
        assert_eq!(game.active_tile(), None);
        assert!(!game.board().tile_visual(ids[0]).unwrap().is_floating());
    }

    #[test]
    fn test_cancelled_touch_frees_the_board() {
        let (mut game, ids) = game(&["A", "dog"]);
        let touch = TouchId(1);

        game.on_touch_start(ids[0], touch);
        game.on_touch_move(touch, Point::new(6.0, 9.0));

        // A cancel from another finger changes nothing
        assert!(!game.on_touch_cancel(TouchId(8)));
        assert_eq!(game.active_tile(), Some(ids[0]));

        assert!(game.on_touch_cancel(touch));
        assert_eq!(game.active_tile(), None);
        assert!(game.placed().is_empty());
        assert_eq!(game.board().tile_visual(ids[0]), Some(TileVisual::default()));

        // Both input modes accept a new drag afterwards
        assert!(game.on_drag_start(ids[1]));
        game.on_drag_end();
        assert!(game.on_touch_start(ids[1], TouchId(2)));
    }

    #[test]
    fn test_active_touch_tracks_the_dragging_finger() {
        let (mut game, ids) = game(&["cat", "boy"]);
        assert_eq!(game.active_touch(), None);

        game.on_touch_start(ids[0], TouchId(5));
        assert_eq!(game.active_touch(), Some(TouchId(5)));

        // Several fingers lifting together: only the dragging one ends the drag
        assert!(!game.on_touch_end(TouchId(3), DropTarget::Container));
        assert!(game.on_touch_end(TouchId(5), DropTarget::Container));
        assert_eq!(game.active_touch(), None);
        assert_eq!(game.placed(), ["cat"]);

        game.on_drag_start(ids[1]);
        assert_eq!(game.active_touch(), None);
    }

    #[test]
    fn test_pointer_start_refused_during_touch_drag() {
        let (mut game, ids) = game(&["The", "girl"]);
        game.on_touch_start(ids[0], TouchId(1));

        assert!(!game.on_drag_start(ids[1]));
        assert_eq!(game.board().tiles_in_flight(), vec![ids[0]]);
    }

    #[test]
    fn test_second_touch_is_ignored_while_one_is_active() {
        let (mut game, ids) = game(&["The", "boy"]);
        let first = TouchId(1);
        let second = TouchId(2);

        assert!(game.on_touch_start(ids[0], first));
        assert!(!game.on_touch_start(ids[1], second));
        assert!(!game.on_touch_move(second, Point::new(3.0, 3.0)));
        assert!(!game.on_touch_end(second, DropTarget::Container));

        // The first drag is untouched by the stray touch
        assert_eq!(game.active_tile(), Some(ids[0]));
        assert!(game.on_touch_end(first, DropTarget::Container));
        assert_eq!(game.placed(), ["The"]);
    }

    #[test]
    fn test_drag_end_does_not_cancel_touch_drag() {
        let (mut game, ids) = game(&["cute"]);
        game.on_touch_start(ids[0], TouchId(4));

        game.on_drag_end();
        assert!(!game.on_drop(DropTarget::Container));

        assert_eq!(game.active_tile(), Some(ids[0]));
    }

    #[test]
    fn test_check_shows_verdict() {
        let (mut game, ids) = game(&["A", "big", "dog", "jumps"]);
        for id in &ids {
            pointer_drop(&mut game, *id, DropTarget::Container);
        }

        let verdict = game.on_check();

        assert!(verdict.is_correct());
        assert_eq!(game.board().notification().message(), Some("Correct sentence! 🎉"));
        assert_eq!(game.view().overlay.as_deref(), Some("Correct sentence! 🎉"));
        // check never mutates what was placed
        assert_eq!(game.placed().len(), 4);
    }

    #[test]
    fn test_check_on_short_sentence() {
        let (mut game, ids) = game(&["A"]);
        pointer_drop(&mut game, ids[0], DropTarget::Container);

        let verdict = game.on_check();
        assert!(matches!(verdict, Verdict::LengthMismatch { found: 1, .. }));
    }

    #[test]
    fn test_two_messages_leave_one_overlay() {
        let (mut game, _) = game(&[]);

        game.show("first");
        game.show("second");

        assert!(game.board().notification().is_visible());
        assert_eq!(game.board().notification().message(), Some("second"));
        assert_eq!(game.view().overlay.as_deref(), Some("second"));
        assert!(!game.view().calls.contains(&Call::Hide));
    }

    #[test]
    fn test_dismiss_hides_overlay_once() {
        let (mut game, _) = game(&[]);
        game.on_check();

        game.on_dismiss();
        game.on_dismiss();

        assert!(!game.board().notification().is_visible());
        assert_eq!(game.view().overlay, None);
        assert_eq!(game.view().calls.iter().filter(|c| **c == Call::Hide).count(), 1);
    }
}
