use block_kit::{header, markdown_section, SectionOverrides, View};
use tracing::info;

use crate::domains::listings::{owner_listing_blocks, ListingDoc};
use crate::domains::settings::settings_block;
use crate::kernel::{BotDeps, DocumentStoreError};

/// Home tab for `user_id`: the settings panel followed by the member's own listings
pub async fn home_view(
    deps: &BotDeps,
    user_id: &str,
    own_listings: &[ListingDoc],
) -> Result<View, DocumentStoreError> {
    let mut blocks = settings_block(deps, user_id).await?;
    blocks.push(header("Your Listings"));

    if own_listings.is_empty() {
        blocks.push(markdown_section(
            "You have no active listings.",
            SectionOverrides::new(),
        ));
    } else {
        blocks.extend(own_listings.iter().flat_map(owner_listing_blocks));
    }

    info!(
        user_id,
        listings = own_listings.len(),
        blocks = blocks.len(),
        "Built home tab"
    );
    Ok(View::Home { blocks })
}
