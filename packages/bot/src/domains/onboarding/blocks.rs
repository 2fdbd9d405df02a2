//! Prompts that get a member from "shared a photo" to "listed an item".

use block_kit::{
    markdown_section, Accessory, ActionElement, ActionsBlock, Block, ButtonElement, ImageBlock,
    SectionOverrides,
};
use chrono::{DateTime, Utc};

use crate::common::ActionId;

/// Show an uploaded photo with a button that starts a listing from it
pub fn sell_prompt(image_url: &str) -> Vec<Block> {
    vec![
        Block::Image(ImageBlock {
            image_url: image_url.to_string(),
            alt_text: "item for sale".to_string(),
        }),
        Block::Actions(ActionsBlock {
            elements: vec![ActionElement::Button(
                ButtonElement::new("Sell This Item!", ActionId::SellThisItem).value(image_url),
            )],
        }),
    ]
}

/// Ask the member to authorize file access, using the current time for the block id
pub fn permission_request(url: &str, app_name: &str) -> Vec<Block> {
    permission_request_at(url, app_name, Utc::now())
}

/// The block id carries `now` in milliseconds so the platform does not
/// collapse repeated prompts into one.
pub fn permission_request_at(url: &str, app_name: &str, now: DateTime<Utc>) -> Vec<Block> {
    let button = ButtonElement::new("Give Permission", ActionId::GivePermission)
        .value(url)
        .url(url);

    vec![markdown_section(
        format!(
            "To start selling, {} needs permission to access your slack images.",
            app_name
        ),
        SectionOverrides::new()
            .block_id(format!("ask_permission_{}", now.timestamp_millis()))
            .accessory(Accessory::Button(button)),
    )]
}
