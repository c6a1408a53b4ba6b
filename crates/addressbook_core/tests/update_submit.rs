use addressbook_core::{update, AppState, Candidate, Effect, FieldKey, Msg};

fn set_field(state: AppState, field: FieldKey, value: &str) -> AppState {
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            field,
            value: value.to_string(),
        },
    );
    state
}

fn candidate(id: &str, street: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        street: street.to_string(),
        postcode: "1234".to_string(),
        city: "Amsterdam".to_string(),
        house_number: None,
    }
}

/// Runs a full successful search so the state shows candidates.
fn run_search(state: AppState, candidates: Vec<Candidate>) -> AppState {
    let state = set_field(state, FieldKey::PostCode, "1234");
    let state = set_field(state, FieldKey::HouseNumber, "123");
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let search_id = match effects.first() {
        Some(Effect::StartLookup { search_id, .. }) => *search_id,
        None => panic!("expected a StartLookup effect"),
    };
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            search_id,
            result: Ok(candidates),
        },
    );
    state
}

#[test]
fn empty_names_are_rejected_first() {
    let state = run_search(AppState::new(), vec![candidate("addr-1", "Herengracht")]);
    let state = set_field(state, FieldKey::SelectedAddress, "addr-1");

    let (state, effects) = update(state, Msg::PersonSubmitted);
    assert!(effects.is_empty());
    assert_eq!(
        state.view().error.as_deref(),
        Some("First name and last name fields mandatory!")
    );
    assert!(state.book().is_empty());
    // The selection and results survive the failed submit.
    assert_eq!(state.view().selected_address, "addr-1");
    assert_eq!(state.view().candidates.len(), 1);
}

#[test]
fn missing_selection_is_rejected_second() {
    let state = run_search(AppState::new(), vec![candidate("addr-1", "Herengracht")]);
    let state = set_field(state, FieldKey::FirstName, "Anna");
    let state = set_field(state, FieldKey::LastName, "Jansen");

    let (state, _) = update(state, Msg::PersonSubmitted);
    assert_eq!(
        state.view().error.as_deref(),
        Some("No address selected, try to select an address or find one if you haven't")
    );
    assert!(state.book().is_empty());
}

#[test]
fn unknown_selection_id_is_rejected_third() {
    let state = run_search(AppState::new(), vec![candidate("addr-1", "Herengracht")]);
    let state = set_field(state, FieldKey::FirstName, "Anna");
    let state = set_field(state, FieldKey::LastName, "Jansen");
    let state = set_field(state, FieldKey::SelectedAddress, "not-a-result");

    let (state, _) = update(state, Msg::PersonSubmitted);
    assert_eq!(state.view().error.as_deref(), Some("Selected address not found"));
    assert!(state.book().is_empty());
    // No state mutation on the failure path.
    assert_eq!(state.view().candidates.len(), 1);
    assert_eq!(state.view().first_name, "Anna");
}

#[test]
fn successful_submit_stores_the_entry_and_resets_the_forms() {
    let state = run_search(AppState::new(), vec![
        candidate("addr-1", "Herengracht"),
        candidate("addr-2", "Keizersgracht"),
    ]);
    let state = set_field(state, FieldKey::SelectedAddress, "addr-2");
    let state = set_field(state, FieldKey::FirstName, "Anna");
    let state = set_field(state, FieldKey::LastName, "Jansen");

    let (state, effects) = update(state, Msg::PersonSubmitted);
    assert!(effects.is_empty());

    let entries = state.book().select_all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].street, "Keizersgracht");
    assert_eq!(entries[0].house_number, "123");
    assert_eq!(entries[0].first_name, "Anna");
    assert_eq!(entries[0].last_name, "Jansen");

    let view = state.view();
    assert!(view.error.is_none());
    assert!(view.candidates.is_empty());
    // All five field slots reset atomically.
    assert_eq!(view.post_code, "");
    assert_eq!(view.house_number, "");
    assert_eq!(view.first_name, "");
    assert_eq!(view.last_name, "");
    assert_eq!(view.selected_address, "");
}

#[test]
fn resubmitting_the_same_address_and_person_stores_one_entry() {
    let submit_once = |state: AppState| {
        let state = run_search(state, vec![candidate("addr-1", "Herengracht")]);
        let state = set_field(state, FieldKey::SelectedAddress, "addr-1");
        let state = set_field(state, FieldKey::FirstName, "Anna");
        let state = set_field(state, FieldKey::LastName, "Jansen");
        let (state, _) = update(state, Msg::PersonSubmitted);
        state
    };
    let state = submit_once(AppState::new());
    assert_eq!(state.book().len(), 1);

    // The second pass starts from the stored book; same tuple, no new entry.
    let state = submit_once(state);
    assert_eq!(state.book().len(), 1);
}

#[test]
fn clear_resets_forms_and_results_but_not_the_book() {
    let state = run_search(AppState::new(), vec![candidate("addr-1", "Herengracht")]);
    let state = set_field(state, FieldKey::SelectedAddress, "addr-1");
    let state = set_field(state, FieldKey::FirstName, "Anna");
    let state = set_field(state, FieldKey::LastName, "Jansen");
    let (state, _) = update(state, Msg::PersonSubmitted);
    assert_eq!(state.book().len(), 1);

    // Partially refill, then clear.
    let state = set_field(state, FieldKey::FirstName, "Bram");
    let state = run_search(state, vec![candidate("addr-3", "Prinsengracht")]);
    let (state, effects) = update(state, Msg::ClearClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.post_code, "");
    assert_eq!(view.selected_address, "");
    assert!(view.candidates.is_empty());
    assert!(view.error.is_none());
    assert_eq!(state.book().len(), 1);
}

#[test]
fn entry_removed_and_book_replaced_pass_through_to_the_store() {
    let state = run_search(AppState::new(), vec![candidate("addr-1", "Herengracht")]);
    let state = set_field(state, FieldKey::SelectedAddress, "addr-1");
    let state = set_field(state, FieldKey::FirstName, "Anna");
    let state = set_field(state, FieldKey::LastName, "Jansen");
    let (state, _) = update(state, Msg::PersonSubmitted);

    let stored = state.book().select_all().to_vec();
    let (state, _) = update(
        state,
        Msg::EntryRemoved {
            id: stored[0].id.clone(),
        },
    );
    assert!(state.book().is_empty());

    let (state, _) = update(state, Msg::BookReplaced(stored.clone()));
    assert_eq!(state.book().select_all(), stored.as_slice());
}
