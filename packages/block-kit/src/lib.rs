//! Typed block-kit payloads for chat-platform messages and views.

pub mod models;

pub use models::{
    Accessory, ActionElement, ActionsBlock, Block, ButtonElement, ButtonStyle, ContextBlock,
    HeaderBlock, ImageBlock, ImageElement, SectionBlock, TextObject, View,
};

pub fn divider() -> Block {
    Block::Divider
}

/// Header block with emoji expansion. Empty text is allowed.
pub fn header(text: impl Into<String>) -> Block {
    Block::Header(HeaderBlock {
        text: TextObject::plain(text),
    })
}

/// Section block with markdown text, with `overrides` laid over the base.
pub fn markdown_section(text: impl Into<String>, overrides: SectionOverrides) -> Block {
    let base = SectionBlock {
        block_id: None,
        text: TextObject::mrkdwn(text),
        accessory: None,
    };
    Block::Section(overrides.merge_onto(base))
}

/// The section fields a caller may replace on top of a base section.
///
/// Merging is shallow: a set field replaces the base field wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionOverrides {
    pub block_id: Option<String>,
    pub text: Option<TextObject>,
    pub accessory: Option<Accessory>,
}

impl SectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn text(mut self, text: TextObject) -> Self {
        self.text = Some(text);
        self
    }

    pub fn accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = Some(accessory);
        self
    }

    pub fn merge_onto(self, base: SectionBlock) -> SectionBlock {
        SectionBlock {
            block_id: self.block_id.or(base.block_id),
            text: self.text.unwrap_or(base.text),
            accessory: self.accessory.or(base.accessory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_divider_serializes_to_bare_tag() {
        let value = serde_json::to_value(divider()).unwrap();
        assert_eq!(value, json!({ "type": "divider" }));
    }

    #[test]
    fn test_header_enables_emoji() {
        let value = serde_json::to_value(header("Settings :gear:")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "Settings :gear:", "emoji": true }
            })
        );
    }

    #[test]
    fn test_header_accepts_empty_text() {
        let Block::Header(block) = header("") else {
            panic!("expected header block");
        };
        assert_eq!(block.text.text(), "");
    }

    #[test]
    fn test_markdown_section_without_overrides() {
        let block = markdown_section("*hi*", SectionOverrides::new());
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(
            value,
            json!({ "type": "section", "text": { "type": "mrkdwn", "text": "*hi*" } })
        );
    }

    #[test]
    fn test_markdown_section_adds_accessory_and_block_id() {
        let button = ButtonElement::new("Refresh", "refresh_home_tab");
        let block = markdown_section(
            "Refresh this page",
            SectionOverrides::new()
                .block_id("refresh")
                .accessory(Accessory::Button(button)),
        );

        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["block_id"], "refresh");
        assert_eq!(value["accessory"]["type"], "button");
        assert_eq!(value["accessory"]["action_id"], "refresh_home_tab");
        assert!(value["accessory"].get("value").is_none());
        assert!(value["accessory"].get("style").is_none());
    }

    #[test]
    fn test_override_text_wins_over_base() {
        let block = markdown_section(
            "base",
            SectionOverrides::new().text(TextObject::plain("override")),
        );
        let Block::Section(section) = block else {
            panic!("expected section block");
        };
        assert_eq!(section.text, TextObject::plain("override"));
    }

    #[test]
    fn test_override_accessory_replaces_base_accessory() {
        let base = SectionBlock {
            block_id: Some("listing".to_string()),
            text: TextObject::mrkdwn("Desk"),
            accessory: Some(Accessory::Image(ImageElement {
                image_url: "http://x/img.png".to_string(),
                alt_text: "Desk".to_string(),
            })),
        };

        let replacement = ButtonElement::new("Mark as Sold", "mark_as_sold");
        let merged = SectionOverrides::new()
            .accessory(Accessory::Button(replacement.clone()))
            .merge_onto(base.clone());
        assert_eq!(merged.accessory, Some(Accessory::Button(replacement)));
        assert_eq!(merged.block_id.as_deref(), Some("listing"));
        assert_eq!(merged.text, TextObject::mrkdwn("Desk"));

        let untouched = SectionOverrides::new().merge_onto(base.clone());
        assert_eq!(untouched, base);
    }

    #[test]
    fn test_button_carries_style_value_and_url() {
        let button = ButtonElement::new("Give Permission", "give_permission")
            .style(ButtonStyle::Primary)
            .value("https://example.com/auth")
            .url("https://example.com/auth");

        let value = serde_json::to_value(ActionElement::Button(button)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "button",
                "text": { "type": "plain_text", "text": "Give Permission", "emoji": true },
                "style": "primary",
                "value": "https://example.com/auth",
                "url": "https://example.com/auth",
                "action_id": "give_permission"
            })
        );
    }

    #[test]
    fn test_blocks_deserialize_from_platform_json() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            { "type": "divider" },
            { "type": "context", "elements": [{ "type": "mrkdwn", "text": "*Sold*" }] },
            { "type": "image", "image_url": "http://x/a.png", "alt_text": "a" }
        ]))
        .unwrap();

        let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec!["divider", "context", "image"]);
    }

    #[test]
    fn test_home_view_tag() {
        let view = View::Home {
            blocks: vec![divider()],
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["type"], "home");
        assert_eq!(value["blocks"][0]["type"], "divider");
        assert_eq!(view.blocks().len(), 1);
    }
}
