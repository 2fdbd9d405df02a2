//! The settings panel at the top of a member's home tab.

use block_kit::{
    divider, header, markdown_section, Accessory, Block, ButtonElement, ButtonStyle,
    SectionOverrides,
};
use tracing::debug;

use crate::common::ActionId;
use crate::domains::settings::models::UserPreferences;
use crate::kernel::{BotDeps, DocumentStoreError};

/// Build the settings panel for `user_id`.
///
/// Performs one preference read. Read failures are returned, never replaced
/// with defaults.
pub async fn settings_block(
    deps: &BotDeps,
    user_id: &str,
) -> Result<Vec<Block>, DocumentStoreError> {
    let prefs =
        UserPreferences::find(deps.store.as_ref(), &deps.config.users_collection, user_id).await?;
    let enabled = prefs.notifications_enabled();
    debug!(user_id, enabled, "Loaded new item notification preference");

    Ok(vec![
        header("Settings :gear:"),
        divider(),
        markdown_section(
            "New item notification",
            SectionOverrides::new().accessory(Accessory::Button(notification_toggle(enabled))),
        ),
        markdown_section(
            "Refresh this page",
            SectionOverrides::new().accessory(Accessory::Button(ButtonElement::new(
                "Refresh",
                ActionId::RefreshHomeTab,
            ))),
        ),
    ])
}

/// The button offers the opposite of the current state
fn notification_toggle(enabled: bool) -> ButtonElement {
    if enabled {
        ButtonElement::new("Disable", ActionId::EnableNewItemNotification).value("disable")
    } else {
        ButtonElement::new("Enable", ActionId::EnableNewItemNotification)
            .style(ButtonStyle::Primary)
            .value("enable")
    }
}
