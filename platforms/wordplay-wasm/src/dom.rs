use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};
use wordplay_board::BoardView;
use wordplay_protocol::{GameConfig, Point, TileId};

use crate::error::DomError;

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{}", id)))
}

pub fn query(document: &Document, selector: &str) -> Result<Element, DomError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<HtmlElement>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// True when `element` is the container or one of the tokens rendered inside it.
pub fn is_in_container(element: &Element, container_id: &str) -> bool {
    matches!(element.closest(&format!("#{}", container_id)), Ok(Some(_)))
}

/// Projects controller state onto the page.
pub struct DomView {
    document: Document,
    container: Element,
    modal: Element,
    message: Element,
    tiles: Vec<HtmlElement>,
    config: GameConfig,
}

impl DomView {
    pub fn new(document: Document, config: GameConfig) -> Result<Self, DomError> {
        Ok(Self {
            container: element_by_id(&document, &config.container_id)?,
            modal: element_by_id(&document, &config.modal_id)?,
            message: element_by_id(&document, &config.message_id)?,
            tiles: Vec::new(),
            document,
            config,
        })
    }

    /// Tracks the element behind a freshly registered tile. Tiles are
    /// registered in order, so the index matches the TileId.
    pub fn push_tile(&mut self, element: HtmlElement) {
        self.tiles.push(element);
    }

    fn tile(&self, tile: TileId) -> Option<&HtmlElement> {
        self.tiles.get(tile.index())
    }

    fn render_token(&self, word: &str) -> Result<(), DomError> {
        let token = self.document.create_element("span")?.dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Js("span is not an HtmlElement".to_string()))?;

        token.set_text_content(Some(word));
        token.set_class_name(&self.config.token_class);
        token
            .style()
            .set_property("margin-right", &format!("{}px", self.config.token_margin_px))?;

        self.container.append_child(&token)?;
        Ok(())
    }

    fn position_tile(element: &HtmlElement, at: Option<Point>) -> Result<(), DomError> {
        let style = element.style();
        match at {
            Some(point) => {
                style.set_property("position", "absolute")?;
                style.set_property("left", &format!("{}px", point.x))?;
                style.set_property("top", &format!("{}px", point.y))?;
                // Keep the tile from hiding the element under the finger
                style.set_property("pointer-events", "none")?;
            }
            None => {
                for property in ["position", "left", "top", "pointer-events"] {
                    style.remove_property(property)?;
                }
            }
        }
        Ok(())
    }
}

impl BoardView for DomView {
    fn set_in_flight(&mut self, tile: TileId, in_flight: bool) {
        let Some(element) = self.tile(tile) else { return };
        let classes = element.class_list();

        let result = if in_flight {
            classes.add_1(&self.config.dragging_class)
        } else {
            classes.remove_1(&self.config.dragging_class)
        };
        if let Err(e) = result {
            tracing::warn!(tile = tile.0, error = ?e, "could not toggle in-flight class");
        }
    }

    fn float_tile(&mut self, tile: TileId, at: Option<Point>) {
        let Some(element) = self.tile(tile) else { return };
        if let Err(e) = Self::position_tile(element, at) {
            tracing::warn!(tile = tile.0, error = %e, "could not position tile");
        }
    }

    fn append_token(&mut self, word: &str) {
        if let Err(e) = self.render_token(word) {
            tracing::warn!(%word, error = %e, "could not render token");
        }
    }

    fn show_message(&mut self, message: &str) {
        self.message.set_text_content(Some(message));
        if let Err(e) = self.modal.class_list().add_1(&self.config.visible_class) {
            tracing::warn!(error = ?e, "could not show overlay");
        }
    }

    fn hide_message(&mut self) {
        if let Err(e) = self.modal.class_list().remove_1(&self.config.visible_class) {
            tracing::warn!(error = ?e, "could not hide overlay");
        }
    }
}
