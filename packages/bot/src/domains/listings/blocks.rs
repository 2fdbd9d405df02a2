//! Blocks for showing a listing in a channel feed or on its owner's home tab.

use block_kit::{
    divider, markdown_section, Accessory, ActionElement, ActionsBlock, Block, ButtonElement,
    ButtonStyle, ContextBlock, ImageElement, SectionOverrides, TextObject,
};

use crate::common::utils::{date_token, format_price};
use crate::common::ActionId;
use crate::domains::listings::models::{Listing, ListingDoc};

/// Buttons shown to everyone browsing a listing
pub fn buyer_actions(doc: &ListingDoc) -> Block {
    Block::Actions(ActionsBlock {
        elements: vec![
            ActionElement::Button(
                ButtonElement::new("Buy & Message Seller", ActionId::BuyMessageSeller)
                    .style(ButtonStyle::Primary)
                    .value(&doc.id),
            ),
            ActionElement::Button(
                ButtonElement::new(":mag: View Image", ActionId::ViewImage)
                    .value(&doc.data.image),
            ),
        ],
    })
}

/// Buttons shown to the seller. `None` once there is nothing left to do.
pub fn owner_actions(doc: &ListingDoc) -> Option<Block> {
    let listing = &doc.data;
    let candidates = [
        (
            !listing.sold,
            ButtonElement::new("Mark as Sold :tada:", ActionId::MarkAsSold)
                .style(ButtonStyle::Danger)
                .value(&doc.id),
        ),
        (
            !listing.sold && !listing.is_deleted(),
            ButtonElement::new("Remove Listing", ActionId::DeletePost).value(&doc.id),
        ),
    ];

    let elements: Vec<ActionElement> = candidates
        .into_iter()
        .filter(|(show, _)| *show)
        .map(|(_, button)| ActionElement::Button(button))
        .collect();

    if elements.is_empty() {
        None
    } else {
        Some(Block::Actions(ActionsBlock { elements }))
    }
}

/// Render a listing: summary section, sold badge, `appended`, then a divider.
pub fn listing_block(listing: &Listing, appended: Vec<Block>) -> Vec<Block> {
    let summary = format!(
        "{} listed *{}* for ${} on {} \n :star: {}",
        listing.display_name,
        listing.title,
        format_price(listing.price),
        date_token(&listing.date_posted),
        listing.description,
    );

    let mut blocks = Vec::with_capacity(appended.len() + 3);
    blocks.push(markdown_section(
        summary,
        SectionOverrides::new().accessory(Accessory::Image(ImageElement {
            image_url: listing.image.clone(),
            alt_text: listing.title.clone(),
        })),
    ));

    if listing.sold {
        blocks.push(Block::Context(ContextBlock {
            elements: vec![TextObject::mrkdwn("*Sold* :lollipop:")],
        }));
    }

    blocks.extend(appended);
    blocks.push(divider());
    blocks
}

/// A listing as posted to the marketplace channel
pub fn buyer_listing_blocks(doc: &ListingDoc) -> Vec<Block> {
    listing_block(&doc.data, vec![buyer_actions(doc)])
}

/// A listing as its seller sees it
pub fn owner_listing_blocks(doc: &ListingDoc) -> Vec<Block> {
    listing_block(&doc.data, owner_actions(doc).into_iter().collect())
}
