use crate::{Address, Candidate, FieldKey, SearchId};

/// Failure report from the lookup collaborator, as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupFailure {
    /// Message supplied by the collaborator; surfaced verbatim when present,
    /// otherwise the core falls back to a generic error.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one form field. Marking a candidate in the results list
    /// is a write to `FieldKey::SelectedAddress` and triggers nothing else.
    FieldChanged { field: FieldKey, value: String },
    /// User submitted the address-search form.
    SearchSubmitted,
    /// The lookup collaborator finished the search identified by `search_id`.
    LookupCompleted {
        search_id: SearchId,
        result: Result<Vec<Candidate>, LookupFailure>,
    },
    /// User submitted the person-info form for the selected candidate.
    PersonSubmitted,
    /// User removed a stored entry from the address book.
    EntryRemoved { id: String },
    /// Presentation layer swapped the whole book contents.
    BookReplaced(Vec<Address>),
    /// User clicked "clear all fields".
    ClearClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
