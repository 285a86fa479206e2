//! Extra message parameters, serialised into `messageParamsJson`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Extra parameters attached to the native flow section.
///
/// The protocol expects these doubly encoded: the converter serialises the
/// whole struct into the `messageParamsJson` string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageParams {
    /// Countdown offer banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited_time_offer: Option<LimitedTimeOffer>,
    /// Overflow sheet configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_sheet: Option<BottomSheet>,
    /// Tap target preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_target_configuration: Option<TapTargetConfiguration>,
    /// Further parameters passed through verbatim.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl MessageParams {
    /// Returns `true` when no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limited_time_offer.is_none()
            && self.bottom_sheet.is_none()
            && self.tap_target_configuration.is_none()
            && self.extra.is_empty()
    }
}

/// Countdown offer banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedTimeOffer {
    /// Banner text.
    pub text: String,
    /// Offer link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Code copied from the banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_code: Option<String>,
    /// Expiry as Unix milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<i64>,
}

/// Overflow sheet used when there are more buttons than fit in the thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomSheet {
    /// Buttons shown in the thread before the sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_thread_buttons_limit: Option<u32>,
    /// Button positions followed by a divider.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub divider_indices: Vec<u32>,
    /// Sheet title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_title: Option<String>,
    /// Label of the button opening the sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_title: Option<String>,
}

/// Link preview attached to one button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapTargetConfiguration {
    /// Preview title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Preview description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical link of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// Displayed domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Index of the button the preview belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_index: Option<u32>,
}
