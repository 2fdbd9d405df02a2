use serde::{Deserialize, Serialize};

/// A single layout block. Serialized with a `type` tag, e.g. `{"type": "divider"}`.
///
/// Blocks never contain other blocks; interactive content lives one level
/// down in `elements` or `accessory`, which keeps every payload a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Divider,
    Header(HeaderBlock),
    Section(SectionBlock),
    Image(ImageBlock),
    Actions(ActionsBlock),
    Context(ContextBlock),
}

impl Block {
    /// The wire `type` tag of this block
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Divider => "divider",
            Block::Header(_) => "header",
            Block::Section(_) => "section",
            Block::Image(_) => "image",
            Block::Actions(_) => "actions",
            Block::Context(_) => "context",
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Block::Divider)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText {
        text: String,
        #[serde(default)]
        emoji: bool,
    },
    Mrkdwn {
        text: String,
    },
}

impl TextObject {
    /// Plain text with `:shortcode:` emoji expansion turned on
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } | TextObject::Mrkdwn { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub text: TextObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Accessory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub image_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionsBlock {
    pub elements: Vec<ActionElement>,
}

impl ActionsBlock {
    pub fn buttons(&self) -> impl Iterator<Item = &ButtonElement> {
        self.elements.iter().map(|element| match element {
            ActionElement::Button(button) => button,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextBlock {
    pub elements: Vec<TextObject>,
}

/// Interactive elements allowed inside an actions block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    Button(ButtonElement),
}

/// Elements allowed in a section's `accessory` slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image(ImageElement),
    Button(ButtonElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonElement {
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub action_id: String,
}

impl ButtonElement {
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            text: TextObject::plain(label),
            style: None,
            value: None,
            url: None,
            action_id: action_id.into(),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Opaque payload echoed back by the platform when the button fires
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn label(&self) -> &str {
        self.text.text()
    }
}

/// Surfaces that wrap a block list, published through `views.publish`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Home { blocks: Vec<Block> },
}

impl View {
    pub fn blocks(&self) -> &[Block] {
        match self {
            View::Home { blocks } => blocks,
        }
    }
}
