/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the lookup collaborator for candidates matching the two terms.
    /// The `search_id` comes back with the completion message and is used to
    /// discard stale responses.
    StartLookup {
        search_id: crate::SearchId,
        postcode: String,
        house_number: String,
    },
}
