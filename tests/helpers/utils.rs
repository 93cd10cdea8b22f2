use chrono::NaiveDate;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use memora_sdk::{Reminder, ID};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: usize,
    iat: usize,
    user_id: String,
    reminders_policy: Option<TestPolicy>,
}

#[derive(Serialize)]
struct TestPolicy {
    allow: Option<Vec<String>>,
    reject: Option<Vec<String>>,
}

/// Signs a token for the given user, allowed to perform the given
/// reminder permissions. Permission `"*"` allows everything and `None`
/// allows nothing.
pub fn make_token(jwt_secret: &str, user_id: &ID, allow: Option<Vec<&str>>) -> String {
    let claims = Claims {
        exp: 5609418990073,
        iat: 19,
        user_id: user_id.to_string(),
        reminders_policy: allow.map(|permissions| TestPolicy {
            allow: Some(permissions.iter().map(|p| p.to_string()).collect()),
            reject: None,
        }),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Expected to encode token")
}

pub fn date(date: &str) -> NaiveDate {
    // https://docs.rs/chrono/0.4.19/chrono/format/strftime/index.html
    // 2001-07-08
    NaiveDate::parse_from_str(date, "%F").expect("Expected a date on the form 2001-07-08")
}

pub fn assert_reminder_labels(reminders: &[Reminder], expected: &[&str]) {
    let labels = reminders
        .iter()
        .map(|r| r.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, expected);
}
