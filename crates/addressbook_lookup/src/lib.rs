//! Lookup collaborator boundary: wire types, async client, and the handle
//! that runs searches off the UI thread.
mod client;
mod handle;
mod query;
mod types;

pub use client::{AddressLookup, HttpAddressLookup, LookupSettings};
pub use handle::{LookupEvent, LookupHandle};
pub use query::{validate_query, FieldInput};
pub use types::{AddressRecord, LookupEnvelope, LookupError, LookupFailureKind};
