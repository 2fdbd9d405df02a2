//! Layout tests for listing blocks.

mod common;

use block_kit::{Block, ButtonStyle};
use bot_core::domains::listings::{
    buyer_actions, buyer_listing_blocks, listing_block, owner_actions, owner_listing_blocks,
};
use common::{all_listing_states, desk_listing, listing_doc};
use serde_json::json;

fn sold_badges(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .filter(|block| match block {
            Block::Context(context) => context.elements.iter().any(|e| e.text().contains("Sold")),
            _ => false,
        })
        .count()
}

fn buttons(block: &Block) -> Vec<(String, Option<ButtonStyle>)> {
    match block {
        Block::Actions(actions) => actions
            .buttons()
            .map(|b| (b.action_id.clone(), b.style))
            .collect(),
        other => panic!("expected actions block, got {}", other.kind()),
    }
}

#[test]
fn desk_listing_renders_summary_image_and_divider() {
    let blocks = listing_block(&desk_listing(), vec![]);
    let value = serde_json::to_value(&blocks).unwrap();

    let text = value[0]["text"]["text"].as_str().unwrap();
    assert!(text.contains("Amy listed *Desk* for $125,000"));
    assert_eq!(value[0]["text"]["type"], "mrkdwn");
    assert_eq!(value[0]["accessory"]["type"], "image");
    assert_eq!(value[0]["accessory"]["image_url"], "http://x/img.png");
    assert_eq!(value[1], json!({ "type": "divider" }));
    assert_eq!(blocks.len(), 2);
    assert_eq!(sold_badges(&blocks), 0);
}

#[test]
fn every_listing_ends_with_a_divider() {
    for doc in all_listing_states() {
        for blocks in [
            listing_block(&doc.data, vec![]),
            buyer_listing_blocks(&doc),
            owner_listing_blocks(&doc),
        ] {
            assert!(blocks.last().unwrap().is_divider());
        }
    }
}

#[test]
fn sold_badge_appears_only_for_sold_listings() {
    for doc in all_listing_states() {
        let expected = if doc.data.sold { 1 } else { 0 };
        assert_eq!(sold_badges(&listing_block(&doc.data, vec![])), expected);
        assert_eq!(sold_badges(&owner_listing_blocks(&doc)), expected);
    }
}

#[test]
fn owner_actions_for_active_listing() {
    let block = owner_actions(&listing_doc("post-1", false, None)).unwrap();
    assert_eq!(
        buttons(&block),
        vec![
            ("mark_as_sold".to_string(), Some(ButtonStyle::Danger)),
            ("delete_post".to_string(), None),
        ]
    );
}

#[test]
fn owner_actions_for_removed_listing() {
    let block = owner_actions(&listing_doc("post-1", false, Some(1_700_100_000))).unwrap();
    assert_eq!(
        buttons(&block),
        vec![("mark_as_sold".to_string(), Some(ButtonStyle::Danger))]
    );
}

#[test]
fn owner_actions_absent_once_sold() {
    assert!(owner_actions(&listing_doc("post-1", true, None)).is_none());
    assert!(owner_actions(&listing_doc("post-1", true, Some(1_700_100_000))).is_none());
}

#[test]
fn buyer_actions_carry_listing_id_and_image() {
    let value = serde_json::to_value(buyer_actions(&listing_doc("post-9", true, None))).unwrap();
    assert_eq!(value["elements"][0]["text"]["text"], "Buy & Message Seller");
    assert_eq!(value["elements"][0]["value"], "post-9");
    assert_eq!(value["elements"][1]["text"]["text"], ":mag: View Image");
    assert_eq!(value["elements"][1]["value"], "http://x/img.png");
}

#[test]
fn payloads_are_flat_lists() {
    let doc = listing_doc("post-1", false, None);
    let value = serde_json::to_value(buyer_listing_blocks(&doc)).unwrap();

    for block in value.as_array().unwrap() {
        if let Some(elements) = block.get("elements") {
            for element in elements.as_array().unwrap() {
                assert!(element.get("elements").is_none());
                assert!(element.get("blocks").is_none());
            }
        }
    }
}
