use super::*;
use eexplo_content::ContactField;

fn state_with(name: &str, email: &str, message: &str) -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set(FormField::Name, name.into());
    state.set(FormField::Email, email.into());
    state.set(FormField::Message, message.into());
    state
}

/// Drive the submit flow against a recording endpoint.
fn submit(
    state: &mut ContactFormState,
    calls: &mut Vec<ContactSubmission>,
    succeed: bool,
) -> Result<(), SubmitBlocked> {
    let record = state.begin_submit()?;
    calls.push(record);
    state.finish_submit(succeed);
    Ok(())
}

#[test]
fn fields_start_empty_and_idle() {
    let state = ContactFormState::default();
    for field in [FormField::Name, FormField::Email, FormField::Phone, FormField::Destination, FormField::Message] {
        assert_eq!(state.value(field), "");
    }
    assert!(!state.submitting);
}

#[test]
fn empty_name_blocks_submit_without_calling_endpoint() {
    let mut state = state_with("", "anyone@example.com", "Hi there");
    let mut calls = Vec::new();
    let result = submit(&mut state, &mut calls, true);
    assert_eq!(result, Err(SubmitBlocked::Invalid(ContactError::MissingField(ContactField::Name))));
    assert!(calls.is_empty());
    assert!(!state.submitting);
    assert_eq!(state.value(FormField::Email), "anyone@example.com");
}

#[test]
fn valid_submit_sends_once_with_optional_fields_and_clears_on_success() {
    let mut state = state_with("Jane", "jane@example.com", "Hello");
    state.set(FormField::Phone, "555-0100".into());
    let mut calls = Vec::new();

    submit(&mut state, &mut calls, true).unwrap();

    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            destination: String::new(),
            message: "Hello".into(),
        }
    );
    assert_eq!(state, ContactFormState::default());
}

#[test]
fn failed_submit_keeps_fields_for_retry() {
    let mut state = state_with("Jane", "jane@example.com", "Hello");
    state.set(FormField::Destination, "Bali".into());
    let mut calls = Vec::new();

    submit(&mut state, &mut calls, false).unwrap();

    assert_eq!(calls.len(), 1);
    assert!(!state.submitting);
    assert_eq!(state.value(FormField::Name), "Jane");
    assert_eq!(state.value(FormField::Destination), "Bali");
}

#[test]
fn begin_submit_sets_flag_and_blocks_second_submit() {
    let mut state = state_with("Jane", "jane@example.com", "Hello");
    assert!(state.begin_submit().is_ok());
    assert!(state.submitting);
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
    state.finish_submit(true);
    assert!(!state.submitting);
}
