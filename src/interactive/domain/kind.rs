//! Button kind registry.
//!
//! Every native flow button kind known to this crate is listed once in
//! [`KIND_TABLE`] together with its wire name and the parameter fields its
//! `buttonParamsJson` must carry. Both authoring validators read required
//! fields from this table only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of a native flow button, identified on the wire by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// Quick reply button.
    QuickReply,
    /// Call-to-action opening a URL.
    CtaUrl,
    /// Call-to-action copying a code.
    CtaCopy,
    /// Call-to-action placing a phone call.
    CtaCall,
    /// Call-to-action opening a business catalog.
    CtaCatalog,
    /// Call-to-action setting a reminder.
    CtaReminder,
    /// Call-to-action cancelling a reminder.
    CtaCancelReminder,
    /// Address request.
    AddressMessage,
    /// Location request.
    SendLocation,
    /// In-app web view.
    OpenWebview,
    /// Multi-product message.
    Mpm,
    /// Payment transaction details.
    WaPaymentTransactionDetails,
    /// Automated greeting catalog view.
    AutomatedGreetingMessageViewCatalog,
    /// Flow-token message.
    GalaxyMessage,
    /// Single select list.
    SingleSelect,
    /// Call permission request.
    CallPermissionRequest,
    /// Order review and payment.
    ReviewAndPay,
    /// Payment information.
    PaymentInfo,
}

/// Registry row describing one button kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindEntry {
    /// The kind described by this row.
    pub kind: ButtonKind,
    /// Wire name of the kind.
    pub name: &'static str,
    /// Fields the parsed `buttonParamsJson` must contain.
    pub required_fields: &'static [&'static str],
}

const fn entry(
    kind: ButtonKind,
    name: &'static str,
    required_fields: &'static [&'static str],
) -> KindEntry {
    KindEntry {
        kind,
        name,
        required_fields,
    }
}

/// Static registry mapping every kind to its name and required fields.
///
/// Rows are ordered by [`ButtonKind`] declaration order.
pub static KIND_TABLE: [KindEntry; 18] = [
    entry(ButtonKind::QuickReply, "quick_reply", &["display_text", "id"]),
    entry(ButtonKind::CtaUrl, "cta_url", &["display_text", "url"]),
    entry(ButtonKind::CtaCopy, "cta_copy", &["display_text", "copy_code"]),
    entry(ButtonKind::CtaCall, "cta_call", &["display_text", "phone_number"]),
    entry(ButtonKind::CtaCatalog, "cta_catalog", &["business_phone_number"]),
    entry(ButtonKind::CtaReminder, "cta_reminder", &["display_text"]),
    entry(
        ButtonKind::CtaCancelReminder,
        "cta_cancel_reminder",
        &["display_text"],
    ),
    entry(ButtonKind::AddressMessage, "address_message", &["display_text"]),
    entry(ButtonKind::SendLocation, "send_location", &["display_text"]),
    entry(ButtonKind::OpenWebview, "open_webview", &["title", "link"]),
    entry(ButtonKind::Mpm, "mpm", &["product_id"]),
    entry(
        ButtonKind::WaPaymentTransactionDetails,
        "wa_payment_transaction_details",
        &["transaction_id"],
    ),
    entry(
        ButtonKind::AutomatedGreetingMessageViewCatalog,
        "automated_greeting_message_view_catalog",
        &["business_phone_number", "catalog_product_id"],
    ),
    entry(ButtonKind::GalaxyMessage, "galaxy_message", &["flow_token", "flow_id"]),
    entry(ButtonKind::SingleSelect, "single_select", &["title", "sections"]),
    entry(ButtonKind::CallPermissionRequest, "call_permission_request", &[]),
    entry(ButtonKind::ReviewAndPay, "review_and_pay", &[]),
    entry(ButtonKind::PaymentInfo, "payment_info", &[]),
];

/// Kinds accepted by the simple `send_buttons` entry point besides legacy
/// quick replies.
pub const SEND_BUTTONS_ALLOWED: [ButtonKind; 3] =
    [ButtonKind::CtaUrl, ButtonKind::CtaCopy, ButtonKind::CtaCall];

/// Kinds accepted by the power `send_interactive_message` entry point.
pub const INTERACTIVE_ALLOWED: [ButtonKind; 15] = [
    ButtonKind::QuickReply,
    ButtonKind::CtaUrl,
    ButtonKind::CtaCopy,
    ButtonKind::CtaCall,
    ButtonKind::CtaCatalog,
    ButtonKind::CtaReminder,
    ButtonKind::CtaCancelReminder,
    ButtonKind::AddressMessage,
    ButtonKind::SendLocation,
    ButtonKind::OpenWebview,
    ButtonKind::Mpm,
    ButtonKind::WaPaymentTransactionDetails,
    ButtonKind::AutomatedGreetingMessageViewCatalog,
    ButtonKind::GalaxyMessage,
    ButtonKind::SingleSelect,
];

/// Kinds with a dedicated native flow node; these only render on the
/// first-party client.
pub const NATIVE_FLOW_SPECIALS: [ButtonKind; 6] = [
    ButtonKind::Mpm,
    ButtonKind::CtaCatalog,
    ButtonKind::SendLocation,
    ButtonKind::CallPermissionRequest,
    ButtonKind::WaPaymentTransactionDetails,
    ButtonKind::AutomatedGreetingMessageViewCatalog,
];

impl ButtonKind {
    /// Returns the registry row for this kind.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "KIND_TABLE has one row per variant in declaration order"
    )]
    pub const fn entry(self) -> &'static KindEntry {
        &KIND_TABLE[self as usize]
    }

    /// Returns the wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().name
    }

    /// Returns the fields the parameters of this kind must contain.
    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        self.entry().required_fields
    }

    /// Returns `true` if the simple send accepts this kind.
    #[must_use]
    pub fn is_send_buttons_allowed(self) -> bool {
        SEND_BUTTONS_ALLOWED.contains(&self)
    }

    /// Returns `true` if the power send accepts this kind.
    #[must_use]
    pub fn is_interactive_allowed(self) -> bool {
        INTERACTIVE_ALLOWED.contains(&self)
    }

    /// Returns `true` if this kind has a dedicated native flow node.
    #[must_use]
    pub fn is_native_flow_special(self) -> bool {
        NATIVE_FLOW_SPECIALS.contains(&self)
    }

    /// Returns `true` for payment kinds annotated by flow name only.
    #[must_use]
    pub const fn is_payment(self) -> bool {
        matches!(self, Self::ReviewAndPay | Self::PaymentInfo)
    }

    /// Looks up the required fields for a wire name.
    ///
    /// Unknown names have no required fields.
    #[must_use]
    pub fn required_fields_for(name: &str) -> &'static [&'static str] {
        name.parse::<Self>().map_or(&[], Self::required_fields)
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not match any registered kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button kind: {0}")]
pub struct ParseButtonKindError(pub String);

impl FromStr for ButtonKind {
    type Err = ParseButtonKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_TABLE
            .iter()
            .find(|row| row.name == s)
            .map(|row| row.kind)
            .ok_or_else(|| ParseButtonKindError(s.to_owned()))
    }
}

/// Joins kind names with `", "` for diagnostics.
#[must_use]
pub fn join_kind_names(kinds: &[ButtonKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_rows_follow_declaration_order() {
        for (index, row) in KIND_TABLE.iter().enumerate() {
            assert_eq!(row.kind as usize, index);
        }
    }

    #[test]
    fn every_kind_round_trips_through_its_wire_name() {
        for row in &KIND_TABLE {
            assert_eq!(row.name.parse::<ButtonKind>(), Ok(row.kind));
            assert_eq!(row.kind.as_str(), row.name);
        }
    }

    #[test]
    fn serde_names_match_registry_names() {
        for row in &KIND_TABLE {
            let encoded = serde_json::to_value(row.kind).expect("kind serialises");
            assert_eq!(encoded, serde_json::Value::String(row.name.to_owned()));
        }
    }

    #[rstest]
    #[case("cta_url", &["display_text", "url"])]
    #[case("open_webview", &["title", "link"])]
    #[case("single_select", &["title", "sections"])]
    #[case("not_a_kind", &[])]
    fn required_fields_come_from_the_table(#[case] name: &str, #[case] expected: &[&str]) {
        assert_eq!(ButtonKind::required_fields_for(name), expected);
    }

    #[test]
    fn simple_surface_is_a_subset_of_the_power_surface() {
        assert!(
            SEND_BUTTONS_ALLOWED
                .iter()
                .all(|kind| kind.is_interactive_allowed())
        );
        assert!(!ButtonKind::QuickReply.is_send_buttons_allowed());
    }

    #[test]
    fn payment_kinds_are_not_authorable() {
        assert!(ButtonKind::PaymentInfo.is_payment());
        assert!(!ButtonKind::PaymentInfo.is_interactive_allowed());
    }
}
