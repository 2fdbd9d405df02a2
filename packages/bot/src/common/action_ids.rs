//! Action tags attached to interactive elements.
//!
//! The strings are the routing keys the event handler dispatches on, so they
//! must never change.

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    BuyMessageSeller,
    ViewImage,
    MarkAsSold,
    DeletePost,
    SellThisItem,
    GivePermission,
    EnableNewItemNotification,
    RefreshHomeTab,
}

impl ActionId {
    pub const ALL: [ActionId; 8] = [
        ActionId::BuyMessageSeller,
        ActionId::ViewImage,
        ActionId::MarkAsSold,
        ActionId::DeletePost,
        ActionId::SellThisItem,
        ActionId::GivePermission,
        ActionId::EnableNewItemNotification,
        ActionId::RefreshHomeTab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::BuyMessageSeller => "buy_message_seller",
            ActionId::ViewImage => "view_image",
            ActionId::MarkAsSold => "mark_as_sold",
            ActionId::DeletePost => "delete_post",
            ActionId::SellThisItem => "sell_this_item",
            ActionId::GivePermission => "give_permission",
            ActionId::EnableNewItemNotification => "enable_new_item_notification",
            ActionId::RefreshHomeTab => "refresh_home_tab",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionId::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid action id: {}", s))
    }
}

impl From<ActionId> for String {
    fn from(action: ActionId) -> Self {
        action.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_parse_back() {
        for action in ActionId::ALL {
            assert_eq!(action.as_str().parse::<ActionId>().unwrap(), action);
        }
    }

    #[test]
    fn test_serde_matches_display() {
        for action in ActionId::ALL {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, serde_json::Value::String(action.to_string()));
        }
    }

    #[test]
    fn test_unknown_action_id() {
        assert!("buy_now".parse::<ActionId>().is_err());
    }
}
