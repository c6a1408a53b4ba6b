use crate::Address;

/// Clone-based snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub post_code: String,
    pub house_number: String,
    pub first_name: String,
    pub last_name: String,
    pub selected_address: String,
    /// True while a lookup is in flight; submit controls render disabled.
    pub searching: bool,
    /// The single visible error slot; most recent error wins.
    pub error: Option<String>,
    /// Normalized candidates from the latest successful search.
    pub candidates: Vec<Address>,
    /// Current address-book entries, in insertion order.
    pub book_entries: Vec<Address>,
}
