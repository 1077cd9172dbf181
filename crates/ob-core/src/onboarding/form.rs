//! Step form values and their field-level validation rules.
//!
//! 表单字段校验：校验失败时不修改任何状态。

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::progress::{FavoriteSong, PaymentData, ProfileData};
use super::step::OnboardingStep;
use crate::store::StateAction;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static EXPIRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})$").expect("valid expiry pattern"));
static CVV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("valid cvv pattern"));

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 150;
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field key, e.g. `email` or `songs[0].artist`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field errors collected from one validation pass. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed: {} field error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

/// Facts a validation rule may depend on besides the form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Builds the context from a UTC timestamp in milliseconds.
    pub fn from_millis(now_ms: i64) -> Self {
        let now = chrono::DateTime::from_timestamp_millis(now_ms).unwrap_or_default();
        Self::new(now.date_naive())
    }
}

/// Form of a data-collecting step.
pub trait StepForm {
    /// Step this form records.
    const STEP: OnboardingStep;

    fn validate(&self, ctx: &ValidationContext) -> ValidationErrors;

    /// Sanitizes the values and wraps them into the action that records the
    /// step as done. Only meaningful after `validate` returned no errors.
    fn into_submit_action(self) -> StateAction;
}

/// Accepts a JSON string, number or null for a text field.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(text)) => Ok(text),
        Some(serde_json::Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_age(raw: &str) -> Result<u32, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Age is required");
    }
    let age: u32 = trimmed.parse().map_err(|_| "Age must be a whole number")?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err("Age must be between 1 and 150");
    }
    Ok(age)
}

// ===== Profile =====

/// Values submitted on the profile step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

impl StepForm for ProfileForm {
    const STEP: OnboardingStep = OnboardingStep::Profile;

    fn validate(&self, _ctx: &ValidationContext) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }

        if let Err(message) = parse_age(&self.age) {
            errors.push("age", message);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push("email", "Enter a valid email address");
        }

        errors
    }

    fn into_submit_action(self) -> StateAction {
        StateAction::SubmitProfile(ProfileData {
            name: self.name.trim().to_string(),
            age: parse_age(&self.age).ok(),
            email: self.email.trim().to_string(),
            profile_pic: non_blank(self.profile_pic),
        })
    }
}

/// Partial profile update written while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub age: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}

impl ProfilePatch {
    /// Applies the present fields. An age that does not parse is stored as
    /// absent rather than rejected; drafts are never validated.
    pub fn apply_to(&self, data: &mut ProfileData) {
        if let Some(name) = &self.name {
            data.name = name.clone();
        }
        if let Some(age) = &self.age {
            data.age = age.trim().parse().ok();
        }
        if let Some(email) = &self.email {
            data.email = email.clone();
        }
        if let Some(profile_pic) = &self.profile_pic {
            data.profile_pic = non_blank(Some(profile_pic.clone()));
        }
    }
}

// ===== Favorite songs =====

/// One row of the favorite-songs list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongEntry {
    pub id: Option<String>,
    pub song_name: String,
    pub artist: String,
}

impl SongEntry {
    pub fn new(song_name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: None,
            song_name: song_name.into(),
            artist: artist.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.song_name.trim().is_empty() && self.artist.trim().is_empty()
    }

    /// Stable id for rows the UI did not assign one to.
    fn resolve_id(&self, position: usize) -> String {
        match non_blank(self.id.clone()) {
            Some(id) => id,
            None => {
                let seed = format!(
                    "{}:{}:{}",
                    position,
                    self.song_name.trim(),
                    self.artist.trim()
                );
                Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string()
            }
        }
    }

    fn into_song(self, position: usize) -> FavoriteSong {
        FavoriteSong {
            id: self.resolve_id(position),
            song_name: self.song_name.trim().to_string(),
            artist: self.artist.trim().to_string(),
        }
    }
}

/// Values submitted on the favorite-songs step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteSongsForm {
    pub songs: Vec<SongEntry>,
}

impl FavoriteSongsForm {
    pub fn new(songs: Vec<SongEntry>) -> Self {
        Self { songs }
    }

    /// Converts the rows into stored songs without validating them.
    pub fn into_draft(self) -> Vec<FavoriteSong> {
        self.songs
            .into_iter()
            .enumerate()
            .map(|(position, entry)| FavoriteSong {
                id: entry.resolve_id(position),
                song_name: entry.song_name,
                artist: entry.artist,
            })
            .collect()
    }
}

impl StepForm for FavoriteSongsForm {
    const STEP: OnboardingStep = OnboardingStep::FavoriteSongs;

    fn validate(&self, _ctx: &ValidationContext) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let mut kept = 0usize;

        // Rows keep their original index so errors line up with the UI list.
        for (index, entry) in self.songs.iter().enumerate() {
            if entry.is_blank() {
                continue;
            }
            kept += 1;
            if entry.song_name.trim().is_empty() {
                errors.push(format!("songs[{index}].songName"), "Song name is required");
            }
            if entry.artist.trim().is_empty() {
                errors.push(format!("songs[{index}].artist"), "Artist is required");
            }
        }

        if kept == 0 {
            errors.push("songs", "Add at least one song");
        }

        errors
    }

    fn into_submit_action(self) -> StateAction {
        let songs = self
            .songs
            .into_iter()
            .filter(|entry| !entry.is_blank())
            .enumerate()
            .map(|(position, entry)| entry.into_song(position))
            .collect();
        StateAction::SubmitFavoriteSongs(songs)
    }
}

// ===== Payment =====

/// Values submitted on the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfoForm {
    #[serde(deserialize_with = "lenient_string")]
    pub card_number: String,
    pub expiry: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cvv: String,
}

impl PaymentInfoForm {
    /// Card number with the usual grouping separators removed.
    fn card_digits(&self) -> String {
        self.card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }

    pub fn into_draft(self) -> PaymentData {
        PaymentData {
            card_number: self.card_number,
            expiry: self.expiry,
            cvv: self.cvv,
        }
    }

    fn validate_expiry(&self, today: NaiveDate) -> Result<(), &'static str> {
        let expiry = self.expiry.trim();
        if expiry.is_empty() {
            return Err("Expiry date is required");
        }
        let captures = EXPIRY_PATTERN
            .captures(expiry)
            .ok_or("Expiry must be in MM/YY format")?;
        let month: u32 = captures[1]
            .parse()
            .map_err(|_| "Expiry must be in MM/YY format")?;
        let year: i32 = captures[2]
            .parse()
            .map_err(|_| "Expiry must be in MM/YY format")?;
        if !(1..=12).contains(&month) {
            return Err("Expiry month must be between 01 and 12");
        }
        // Cards are valid through the last day of the expiry month.
        if (2000 + year, month) < (today.year(), today.month()) {
            return Err("Card has expired");
        }
        Ok(())
    }
}

impl StepForm for PaymentInfoForm {
    const STEP: OnboardingStep = OnboardingStep::PaymentInfo;

    fn validate(&self, ctx: &ValidationContext) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let digits = self.card_digits();
        if digits.is_empty() {
            errors.push("cardNumber", "Card number is required");
        } else if digits.len() != CARD_NUMBER_DIGITS || !digits.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("cardNumber", "Card number must be 16 digits");
        }

        if let Err(message) = self.validate_expiry(ctx.today) {
            errors.push("expiry", message);
        }

        let cvv = self.cvv.trim();
        if cvv.is_empty() {
            errors.push("cvv", "CVV is required");
        } else if !CVV_PATTERN.is_match(cvv) {
            errors.push("cvv", "CVV must be 3 or 4 digits");
        }

        errors
    }

    fn into_submit_action(self) -> StateAction {
        StateAction::SubmitPaymentInfo(PaymentData {
            card_number: self.card_digits(),
            expiry: self.expiry.trim().to_string(),
            cvv: self.cvv.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn valid_profile() -> ProfileForm {
        ProfileForm {
            name: "Ada Lovelace".to_string(),
            age: "36".to_string(),
            email: "ada@example.com".to_string(),
            profile_pic: None,
        }
    }

    fn valid_payment() -> PaymentInfoForm {
        PaymentInfoForm {
            card_number: "4111 1111 1111 1111".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_valid_profile_has_no_errors() {
        assert!(valid_profile().validate(&ctx()).is_empty());
    }

    #[test]
    fn test_profile_requires_name_age_and_email() {
        let errors = ProfileForm::default().validate(&ctx());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("name").unwrap().message, "Name is required");
        assert_eq!(errors.for_field("age").unwrap().message, "Age is required");
        assert_eq!(errors.for_field("email").unwrap().message, "Email is required");
    }

    #[test]
    fn test_profile_age_bounds() {
        for (age, ok) in [("0", false), ("1", true), ("150", true), ("151", false), ("abc", false), ("-3", false)] {
            let form = ProfileForm {
                age: age.to_string(),
                ..valid_profile()
            };
            assert_eq!(form.validate(&ctx()).is_empty(), ok, "age {age}");
        }
    }

    #[test]
    fn test_profile_rejects_malformed_email() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let form = ProfileForm {
                email: email.to_string(),
                ..valid_profile()
            };
            let errors = form.validate(&ctx());
            assert!(errors.for_field("email").is_some(), "email {email}");
        }
    }

    #[test]
    fn test_profile_submit_action_is_sanitized() {
        let form = ProfileForm {
            name: "  Ada  ".to_string(),
            age: " 36 ".to_string(),
            email: " ada@example.com ".to_string(),
            profile_pic: Some("   ".to_string()),
        };
        assert_eq!(
            form.into_submit_action(),
            StateAction::SubmitProfile(ProfileData {
                name: "Ada".to_string(),
                age: Some(36),
                email: "ada@example.com".to_string(),
                profile_pic: None,
            })
        );
    }

    #[test]
    fn test_profile_form_accepts_numeric_age() {
        let form: ProfileForm = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "age": 36,
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(form.age, "36");
        assert_eq!(form.profile_pic, None);
    }

    #[test]
    fn test_profile_patch_only_touches_present_fields() {
        let mut data = ProfileData {
            name: "Ada".to_string(),
            age: Some(36),
            email: "ada@example.com".to_string(),
            profile_pic: None,
        };
        ProfilePatch {
            email: Some("ada@lovelace.dev".to_string()),
            age: Some("3x".to_string()),
            ..Default::default()
        }
        .apply_to(&mut data);

        assert_eq!(data.name, "Ada");
        assert_eq!(data.email, "ada@lovelace.dev");
        assert_eq!(data.age, None);
    }

    #[test]
    fn test_songs_empty_artist_is_reported_on_that_entry() {
        let form = FavoriteSongsForm::new(vec![SongEntry::new("So What", "")]);
        let errors = form.validate(&ctx());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field("songs[0].artist").unwrap().message,
            "Artist is required"
        );
    }

    #[test]
    fn test_songs_blank_rows_are_ignored_but_one_song_is_required() {
        let form = FavoriteSongsForm::new(vec![SongEntry::new("", " "), SongEntry::default()]);
        let errors = form.validate(&ctx());
        assert_eq!(errors.len(), 1);
        assert!(errors.for_field("songs").is_some());

        let form = FavoriteSongsForm::new(vec![
            SongEntry::default(),
            SongEntry::new("So What", "Miles Davis"),
        ]);
        assert!(form.validate(&ctx()).is_empty());
    }

    #[test]
    fn test_songs_error_keys_use_original_row_index() {
        let form = FavoriteSongsForm::new(vec![
            SongEntry::default(),
            SongEntry::new("", "Nina Simone"),
        ]);
        let errors = form.validate(&ctx());
        assert!(errors.for_field("songs[1].songName").is_some());
    }

    #[test]
    fn test_songs_submit_discards_blank_rows_and_keeps_ids() {
        let mut with_id = SongEntry::new("So What", "Miles Davis");
        with_id.id = Some("song-1".to_string());
        let form = FavoriteSongsForm::new(vec![
            with_id,
            SongEntry::default(),
            SongEntry::new(" Feeling Good ", " Nina Simone "),
        ]);

        let StateAction::SubmitFavoriteSongs(songs) = form.into_submit_action() else {
            panic!("expected SubmitFavoriteSongs");
        };
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, "song-1");
        assert_eq!(songs[1].song_name, "Feeling Good");
        assert_eq!(songs[1].artist, "Nina Simone");
        assert!(!songs[1].id.is_empty());
    }

    #[test]
    fn test_songs_generated_ids_are_stable() {
        let form = FavoriteSongsForm::new(vec![SongEntry::new("So What", "Miles Davis")]);
        assert_eq!(
            form.clone().into_submit_action(),
            form.into_submit_action()
        );
    }

    #[test]
    fn test_valid_payment_has_no_errors() {
        assert!(valid_payment().validate(&ctx()).is_empty());
    }

    #[test]
    fn test_payment_card_number_must_have_16_digits() {
        for card in ["4111 1111 1111 111", "4111-1111-1111-11112", "4111 1111 1111 111a"] {
            let form = PaymentInfoForm {
                card_number: card.to_string(),
                ..valid_payment()
            };
            assert!(form.validate(&ctx()).for_field("cardNumber").is_some(), "card {card}");
        }
    }

    #[test]
    fn test_payment_expiry_rules() {
        let cases = [
            ("10/26", None),
            ("09/26", Some("Card has expired")),
            ("13/30", Some("Expiry month must be between 01 and 12")),
            ("00/30", Some("Expiry month must be between 01 and 12")),
            ("1/30", Some("Expiry must be in MM/YY format")),
            ("١٢/٣٠", Some("Expiry must be in MM/YY format")),
            ("", Some("Expiry date is required")),
        ];
        for (expiry, expected) in cases {
            let form = PaymentInfoForm {
                expiry: expiry.to_string(),
                ..valid_payment()
            };
            let errors = form.validate(&ctx());
            assert_eq!(
                errors.for_field("expiry").map(|e| e.message.as_str()),
                expected,
                "expiry {expiry}"
            );
        }
    }

    #[test]
    fn test_payment_cvv_rules() {
        let cases = [
            ("123", true),
            ("1234", true),
            ("12", false),
            ("12345", false),
            ("12a", false),
            // Arabic-Indic and fullwidth digits
            ("١٢٣", false),
            ("１２３", false),
        ];
        for (cvv, ok) in cases {
            let form = PaymentInfoForm {
                cvv: cvv.to_string(),
                ..valid_payment()
            };
            assert_eq!(form.validate(&ctx()).for_field("cvv").is_none(), ok, "cvv {cvv}");
        }
    }

    #[test]
    fn test_payment_submit_strips_card_separators() {
        let StateAction::SubmitPaymentInfo(data) = valid_payment().into_submit_action() else {
            panic!("expected SubmitPaymentInfo");
        };
        assert_eq!(data.card_number, "4111111111111111");
        assert_eq!(data.expiry, "12/27");
    }

    #[test]
    fn test_context_from_millis() {
        // 2026-10-16T00:00:00Z
        let ctx = ValidationContext::from_millis(1_792_108_800_000);
        assert_eq!(ctx.today, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn test_validation_errors_serialize_as_list() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!([{ "field": "name", "message": "Name is required" }])
        );
    }
}
