use super::*;

fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "Jane".into(),
        email: "jane@example.com".into(),
        phone: String::new(),
        destination: String::new(),
        message: "Hello".into(),
    }
}

#[test]
fn complete_submission_validates() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn missing_name_is_reported_first() {
    let sub = ContactSubmission { name: String::new(), email: String::new(), ..filled() };
    assert_eq!(sub.validate(), Err(ContactError::MissingField(ContactField::Name)));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let sub = ContactSubmission { message: "   \n".into(), ..filled() };
    assert_eq!(sub.validate(), Err(ContactError::MissingField(ContactField::Message)));
}

#[test]
fn optional_fields_do_not_affect_validation() {
    let sub = ContactSubmission { phone: "+30 210 000".into(), destination: "Crete".into(), ..filled() };
    assert!(sub.validate().is_ok());
    assert_eq!(sub.phone_opt(), Some("+30 210 000"));
    assert_eq!(sub.destination_opt(), Some("Crete"));
    assert_eq!(filled().phone_opt(), None);
}

#[test]
fn optional_fields_default_when_absent_from_json() {
    let sub: ContactSubmission =
        serde_json::from_str(r#"{"name":"A","email":"a@b.c","message":"m"}"#).unwrap();
    assert_eq!(sub.phone, "");
    assert_eq!(sub.destination, "");
}

#[test]
fn error_message_names_the_field() {
    let err = ContactError::MissingField(ContactField::Email);
    assert_eq!(err.to_string(), "missing required field: email");
}
