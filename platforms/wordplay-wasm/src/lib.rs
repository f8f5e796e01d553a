pub mod dom;
pub mod error;
pub mod events;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordplay_board::GameController;
use wordplay_checker::{LexiconIndex, Mismatch, Verdict};
use wordplay_protocol::GameConfig;

use crate::dom::DomView;
use crate::error::DomError;
use crate::events::{Listeners, SharedController};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Routes `tracing` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    let _ = tracing_wasm::try_set_as_global_default();
}

/// The structured verdict sent back to JavaScript
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictReport {
    pub kind: String,
    pub message: String,
    pub words: Vec<String>,
    pub mismatches: Vec<MismatchReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchReport {
    pub position: usize,
    pub word: String,
    pub expected: String,
    pub found: Option<String>,
    pub unknown_word: bool,
}

impl From<&Mismatch> for MismatchReport {
    fn from(m: &Mismatch) -> Self {
        Self {
            position: m.position,
            word: m.word.clone(),
            expected: m.expected.to_string(),
            found: m.found.map(|r| r.to_string()),
            unknown_word: m.is_unknown_word(),
        }
    }
}

impl VerdictReport {
    pub fn new(verdict: &Verdict, words: &[String]) -> Self {
        let mismatches = match verdict {
            Verdict::Incorrect { mismatches } => mismatches.iter().map(MismatchReport::from).collect(),
            _ => Vec::new(),
        };

        Self {
            kind: verdict.kind().to_string(),
            message: verdict.message().to_string(),
            words: words.to_vec(),
            mismatches,
        }
    }
}

fn parse_config(config: JsValue) -> Result<GameConfig, DomError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GameConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| DomError::Config(e.to_string()))
}

/// One running game bound to the current page
#[wasm_bindgen]
pub struct WordplayGame {
    controller: SharedController,
    // Dropping the game unhooks every listener
    _listeners: Listeners,
}

#[wasm_bindgen]
impl WordplayGame {
    /// Binds the page using the built-in word list.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WordplayGame, JsValue> {
        let config = parse_config(config)?;
        Ok(Self::mount(LexiconIndex::builtin(), config)?)
    }

    /// Binds the page using a lexicon archive produced by `lexicon-compiler`
    /// (loaded via fetch() in JS).
    #[wasm_bindgen(js_name = withLexicon)]
    pub fn with_lexicon(data: Vec<u8>, config: JsValue) -> Result<WordplayGame, JsValue> {
        let config = parse_config(config)?;
        let lexicon = LexiconIndex::from_archive(&data).map_err(DomError::from)?;
        Ok(Self::mount(lexicon, config)?)
    }

    /// Runs the same check as the page's button and returns the verdict.
    pub fn check(&self) -> Result<JsValue, JsValue> {
        let mut controller = self.controller.borrow_mut();
        let verdict = controller.on_check();
        let report = VerdictReport::new(&verdict, controller.placed());
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Words placed so far, in order.
    pub fn placed(&self) -> Vec<JsValue> {
        self.controller
            .borrow()
            .placed()
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    pub fn dismiss(&self) {
        self.controller.borrow_mut().on_dismiss();
    }
}

impl WordplayGame {
    fn mount(lexicon: LexiconIndex, config: GameConfig) -> Result<Self, DomError> {
        let document = dom::document()?;

        // 1. Resolve the fixed page elements
        let container = dom::element_by_id(&document, &config.container_id)?;
        let check = dom::query(&document, &config.check_selector)?;
        let close = dom::element_by_id(&document, &config.close_id)?;
        let tiles = dom::query_all(&document, &config.tile_selector)?;

        let view = DomView::new(document.clone(), config.clone())?;
        let controller: SharedController = Rc::new(RefCell::new(GameController::new(lexicon, view)));
        let mut listeners = Listeners::default();

        // 2. Register every tile, then hook its events
        for element in tiles {
            let word = element.text_content().unwrap_or_default();
            let tile = {
                let mut c = controller.borrow_mut();
                let tile = c.register_tile(word.trim());
                c.view_mut().push_tile(element.clone());
                tile
            };
            events::bind_tile(&mut listeners, &controller, &document, &config.container_id, tile, &element)?;
        }

        // 3. Drop target and controls
        events::bind_container(&mut listeners, &controller, container.as_ref(), &config.container_id)?;
        events::bind_controls(&mut listeners, &controller, check.as_ref(), close.as_ref())?;

        tracing::info!(
            tiles = controller.borrow().board().tile_count(),
            listeners = listeners.len(),
            "wordplay mounted"
        );

        Ok(Self {
            controller,
            _listeners: listeners,
        })
    }
}
