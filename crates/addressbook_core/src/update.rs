use crate::validate::validate_search_terms;
use crate::{AppState, Effect, Msg};

/// Fallback when the collaborator fails without a usable message.
const LOOKUP_FALLBACK_ERROR: &str = "Failed to fetch addresses. Please try again.";
const NAMES_MANDATORY: &str = "First name and last name fields mandatory!";
const NO_SELECTION: &str =
    "No address selected, try to select an address or find one if you haven't";
const SELECTION_NOT_FOUND: &str = "Selected address not found";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldChanged { field, value } => {
            state.fields.set(field, value);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            // Submit controls are inert while a lookup is in flight; the
            // machine refuses overlapping searches.
            if state.pending.is_some() {
                return (state, Vec::new());
            }
            state.results.clear();
            state.error = None;
            match validate_search_terms(&state.fields.post_code, &state.fields.house_number) {
                Ok(_) => {
                    let postcode = state.fields.post_code.clone();
                    let house_number = state.fields.house_number.clone();
                    let search_id = state.begin_search(house_number.clone());
                    vec![Effect::StartLookup {
                        search_id,
                        postcode,
                        house_number,
                    }]
                }
                Err(err) => {
                    state.error = Some(err.to_string());
                    Vec::new()
                }
            }
        }
        Msg::LookupCompleted { search_id, result } => {
            if let Some(pending) = state.pending.take() {
                if pending.search_id != search_id {
                    // Stale completion from a superseded search; keep waiting
                    // for the one actually in flight.
                    state.pending = Some(pending);
                    return (state, Vec::new());
                }
                match result {
                    Ok(candidates) if !candidates.is_empty() => {
                        state.results = candidates
                            .iter()
                            .map(|candidate| candidate.normalize(&pending.house_number))
                            .collect();
                    }
                    Ok(_) => {
                        // A success envelope with no candidates violates the
                        // contract; treat it like a failure without a message.
                        state.error = Some(LOOKUP_FALLBACK_ERROR.to_string());
                    }
                    Err(failure) => {
                        state.error = Some(
                            failure
                                .message
                                .unwrap_or_else(|| LOOKUP_FALLBACK_ERROR.to_string()),
                        );
                    }
                }
            }
            // With nothing pending (the form was cleared) the completion is
            // discarded outright.
            Vec::new()
        }
        Msg::PersonSubmitted => {
            state.error = None;
            if state.fields.first_name.is_empty() || state.fields.last_name.is_empty() {
                state.error = Some(NAMES_MANDATORY.to_string());
                return (state, Vec::new());
            }
            if state.fields.selected_address.is_empty() || state.results.is_empty() {
                state.error = Some(NO_SELECTION.to_string());
                return (state, Vec::new());
            }
            let found = state
                .results
                .iter()
                .find(|address| address.id == state.fields.selected_address)
                .cloned();
            let Some(address) = found else {
                state.error = Some(SELECTION_NOT_FOUND.to_string());
                return (state, Vec::new());
            };
            let entry = address.with_person(&state.fields.first_name, &state.fields.last_name);
            state.book.add(entry);
            state.fields.clear();
            state.results.clear();
            Vec::new()
        }
        Msg::EntryRemoved { id } => {
            state.book.remove(&id);
            Vec::new()
        }
        Msg::BookReplaced(entries) => {
            state.book.replace_all(entries);
            Vec::new()
        }
        Msg::ClearClicked => {
            // Dropping the pending marker makes any in-flight response stale,
            // so it is discarded when it eventually lands. The book is never
            // touched by a clear.
            state.fields.clear();
            state.results.clear();
            state.error = None;
            state.pending = None;
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
