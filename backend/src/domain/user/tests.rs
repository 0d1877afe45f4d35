//! Tests for user value types.

use super::*;
use chrono::TimeZone;
use rstest::rstest;

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().expect("valid timestamp")
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_text(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_serialises_as_string() {
    let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    let value = serde_json::to_value(id).expect("serialise id");
    assert_eq!(value, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
}

#[rstest]
#[case("   ", UserValidationError::EmptyUsername)]
#[case(&"x".repeat(USERNAME_MAX + 1), UserValidationError::UsernameTooLong { max: USERNAME_MAX })]
fn username_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  ada ").expect("valid username");
    assert_eq!(username.as_ref(), "ada");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("ada.example.com", UserValidationError::InvalidEmail)]
#[case("@example.com", UserValidationError::InvalidEmail)]
#[case("ada@", UserValidationError::InvalidEmail)]
#[case("ada@ex@ample.com", UserValidationError::InvalidEmail)]
fn email_rejects_malformed_addresses(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_rejects_overlong_addresses() {
    let raw = format!("{}@example.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        Email::new(raw),
        Err(UserValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
fn register_sets_both_timestamps() {
    let user = User::register(
        Username::new("ada").expect("username"),
        Email::new("ada@example.com").expect("email"),
        at(10),
    );
    assert_eq!(user.created_at(), at(10));
    assert_eq!(user.updated_at(), at(10));
}

#[rstest]
fn update_profile_bumps_updated_at() {
    let mut user = User::register(
        Username::new("ada").expect("username"),
        Email::new("ada@example.com").expect("email"),
        at(10),
    );
    user.update_profile(Some(Username::new("lovelace").expect("username")), None, at(20));

    assert_eq!(user.username().as_ref(), "lovelace");
    assert_eq!(user.email().as_ref(), "ada@example.com");
    assert_eq!(user.updated_at(), at(20));
}

#[rstest]
fn empty_update_leaves_user_untouched() {
    let mut user = User::register(
        Username::new("ada").expect("username"),
        Email::new("ada@example.com").expect("email"),
        at(10),
    );
    let before = user.clone();
    user.update_profile(None, None, at(20));
    assert_eq!(user, before);
}
