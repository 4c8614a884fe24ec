use recipe_finder::validator::Registration;
use recipe_finder::{evaluate, FieldName, RegistrationForm, SubmitOutcome};

fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_value(FieldName::Username, username);
    form.set_value(FieldName::Email, email);
    form.set_value(FieldName::Password, password);
    form.set_value(FieldName::ConfirmPassword, confirm);
    form
}

#[test]
fn test_empty_values_give_required_messages() {
    let cases = [
        (FieldName::Username, "enter username"),
        (FieldName::Email, "enter email"),
        (FieldName::Password, "enter password"),
    ];
    for (field, expected) in cases {
        let evaluation = evaluate(field, "", "");
        assert!(!evaluation.valid, "{} should be invalid", field);
        assert_eq!(evaluation.message, expected);
    }

    // Confirmation is only required to match the password
    let evaluation = evaluate(FieldName::ConfirmPassword, "", "secret1");
    assert!(!evaluation.valid);
    assert_eq!(evaluation.message, "mismatch");
}

#[test]
fn test_short_usernames_block_submit() {
    for username in ["a", "ab", "  ab  "] {
        let mut form = form(username, "a@b.c", "123456", "123456");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(vec![FieldName::Username])
        );
        assert_eq!(form.error(FieldName::Username), Some("min 3 chars"));
    }

    let mut form = form("abc", "a@b.c", "123456", "123456");
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
}

#[test]
fn test_email_formats() {
    assert!(evaluate(FieldName::Email, "a@b.c", "").valid);
    for bad in ["a@b", "ab.c"] {
        let evaluation = evaluate(FieldName::Email, bad, "");
        assert!(!evaluation.valid, "{:?} should be rejected", bad);
        assert_eq!(evaluation.message, "invalid format");
    }
    assert_eq!(evaluate(FieldName::Email, "", "").message, "enter email");
}

#[test]
fn test_password_length_boundary() {
    assert_eq!(evaluate(FieldName::Password, "12345", "").message, "min 6 chars");
    assert!(evaluate(FieldName::Password, "123456", "").valid);
}

#[test]
fn test_changing_password_reflags_confirmation() {
    let mut form = form("alice", "alice@example.com", "secret1", "secret1");
    assert!(form.blur(FieldName::ConfirmPassword));
    assert_eq!(form.error(FieldName::ConfirmPassword), None);

    form.set_value(FieldName::Password, "secret2");
    assert!(!form.blur(FieldName::Password));
    assert_eq!(form.error(FieldName::ConfirmPassword), Some("mismatch"));
    assert!(form.is_marked_invalid(FieldName::ConfirmPassword));

    // Byte-for-byte: a trailing space is a mismatch
    form.set_value(FieldName::ConfirmPassword, "secret2 ");
    assert!(!form.validate());
    assert_eq!(form.error(FieldName::ConfirmPassword), Some("mismatch"));
}

#[test]
fn test_blur_on_one_field_flags_others() {
    let mut form = form("alice", "", "", "");
    assert!(!form.blur(FieldName::Username));

    assert_eq!(form.error(FieldName::Username), None);
    assert_eq!(form.error(FieldName::Email), Some("enter email"));
    assert_eq!(form.error(FieldName::Password), Some("enter password"));
}

#[test]
fn test_valid_submit_clears_everything() {
    let mut form = form("alice", "alice@example.com", "secret1", "secret1");
    // leave a stale error around first
    form.set_value(FieldName::Email, "alice");
    form.validate();
    assert!(form.error(FieldName::Email).is_some());

    form.set_value(FieldName::Email, "alice@example.com");
    let outcome = form.submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Accepted(Registration {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        })
    );
    assert!(form.is_clear());
    for field in FieldName::ALL {
        assert_eq!(form.value(field), "");
        assert_eq!(form.error(field), None);
        assert!(!form.is_marked_invalid(field));
    }
}

#[test]
fn test_rejected_submit_keeps_values_and_errors() {
    let mut form = form("al", "not-an-email", "123", "321");

    match form.submit() {
        SubmitOutcome::Rejected(fields) => assert_eq!(fields, FieldName::ALL.to_vec()),
        SubmitOutcome::Accepted(_) => panic!("Expected rejection"),
    }
    assert_eq!(form.value(FieldName::Username), "al");
    assert_eq!(form.error(FieldName::Email), Some("invalid format"));
    assert_eq!(form.error(FieldName::Password), Some("min 6 chars"));
}
