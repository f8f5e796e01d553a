use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Element ids, selectors and class names the page is built with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameConfig {
    pub container_id: String,
    pub tile_selector: String,
    pub check_selector: String,
    pub modal_id: String,
    pub message_id: String,
    pub close_id: String,
    pub token_class: String,
    pub dragging_class: String,
    pub visible_class: String,
    /// Right margin of each placed token, in CSS pixels.
    pub token_margin_px: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            container_id: "sentenceContainer".to_string(),
            tile_selector: ".item".to_string(),
            check_selector: ".btn".to_string(),
            modal_id: "alertModal".to_string(),
            message_id: "alertMessage".to_string(),
            close_id: "closeModal".to_string(),
            token_class: "sentence-item".to_string(),
            dragging_class: "dragging".to_string(),
            visible_class: "visible".to_string(),
            token_margin_px: 8,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "containerId": "answer", "tokenMarginPx": 12 }"#).unwrap();

        assert_eq!(config.container_id, "answer");
        assert_eq!(config.token_margin_px, 12);
        assert_eq!(config.tile_selector, ".item");
        assert_eq!(config.visible_class, "visible");
    }
}
