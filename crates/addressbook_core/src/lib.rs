//! Addressbook core: pure state machine for the search-select-submit workflow.
mod address;
mod book;
mod effect;
mod fields;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use address::{Address, Candidate};
pub use book::AddressBook;
pub use effect::Effect;
pub use fields::{FieldKey, FormFields};
pub use msg::{LookupFailure, Msg};
pub use state::{AppState, SearchId};
pub use update::update;
pub use validate::{validate_identifier, validate_search_terms, Field, ValidationError};
pub use view_model::AppViewModel;
