use crate::view_model::AppViewModel;
use crate::{Address, AddressBook, FormFields};

pub type SearchId = u64;

/// Marker for the one search allowed in flight at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingSearch {
    pub(crate) search_id: SearchId,
    /// House number as submitted. Candidates are normalized against it when
    /// the response arrives, even if the field has been edited since.
    pub(crate) house_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) fields: FormFields,
    /// Normalized candidates from the latest successful search.
    pub(crate) results: Vec<Address>,
    /// The single visible error slot; the most recent error wins.
    pub(crate) error: Option<String>,
    pub(crate) pending: Option<PendingSearch>,
    pub(crate) next_search_id: SearchId,
    pub(crate) book: AddressBook,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the stored address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// True while a lookup is in flight; submit controls are inert.
    pub fn searching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            post_code: self.fields.post_code.clone(),
            house_number: self.fields.house_number.clone(),
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            selected_address: self.fields.selected_address.clone(),
            searching: self.pending.is_some(),
            error: self.error.clone(),
            candidates: self.results.clone(),
            book_entries: self.book.select_all().to_vec(),
        }
    }

    /// Allocates the next search id and records the pending search.
    pub(crate) fn begin_search(&mut self, house_number: String) -> SearchId {
        self.next_search_id += 1;
        let search_id = self.next_search_id;
        self.pending = Some(PendingSearch {
            search_id,
            house_number,
        });
        search_id
    }
}
