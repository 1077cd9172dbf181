//! Onboarding progress record.
//!
//! Persisted under the `onboardingDataState` key. The JSON layout keeps each
//! step's fields next to its `isDone` flag and stores the overall completion
//! flag as the top-level `isDone`.

use serde::{Deserialize, Serialize};

use super::step::{OnboardingStep, ONBOARDING_STEPS};

/// Collected data of one step plus its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(default)]
    pub is_done: bool,
}

impl<T> StepProgress<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            is_done: false,
        }
    }

    pub fn done(data: T) -> Self {
        Self {
            data,
            is_done: true,
        }
    }
}

/// Profile step payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub name: String,
    pub age: Option<u32>,
    pub email: String,
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteSong {
    pub id: String,
    pub song_name: String,
    pub artist: String,
}

/// Favorite-songs step payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteSongs {
    pub songs: Vec<FavoriteSong>,
}

/// Payment step payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentData {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

/// Per-user onboarding progress.
///
/// 入门引导进度。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingProgress {
    #[serde(rename = "isDone")]
    is_onboarding_complete: bool,
    pub profile: StepProgress<ProfileData>,
    pub favorite_songs: StepProgress<FavoriteSongs>,
    pub payment_info: StepProgress<PaymentData>,
}

impl OnboardingProgress {
    pub fn is_onboarding_complete(&self) -> bool {
        self.is_onboarding_complete
    }

    /// Completion flag of a step. The terminal step counts as done once the
    /// user confirmed completion.
    pub fn is_step_done(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::Profile => self.profile.is_done,
            OnboardingStep::FavoriteSongs => self.favorite_songs.is_done,
            OnboardingStep::PaymentInfo => self.payment_info.is_done,
            OnboardingStep::Success => self.is_onboarding_complete,
        }
    }

    /// Whether all data-collecting steps are done.
    pub fn all_steps_done(&self) -> bool {
        self.profile.is_done && self.favorite_songs.is_done && self.payment_info.is_done
    }

    /// Where the user should be right now: the first data step that is not
    /// done, or `Success` when every data step is done.
    pub fn first_incomplete_step(&self) -> OnboardingStep {
        ONBOARDING_STEPS
            .iter()
            .map(|entry| entry.step)
            .filter(|step| step.collects_data())
            .find(|step| !self.is_step_done(*step))
            .unwrap_or(OnboardingStep::Success)
    }

    pub fn first_incomplete_step_path(&self) -> &'static str {
        self.first_incomplete_step().path()
    }

    /// Sets the overall completion flag.
    ///
    /// Setting it to `true` only takes effect when every data step is done.
    /// Returns whether the flag now holds the requested value.
    pub fn set_onboarding_complete(&mut self, complete: bool) -> bool {
        if complete && !self.all_steps_done() {
            return false;
        }
        self.is_onboarding_complete = complete;
        true
    }

    /// Drops a completion flag that is not backed by three done steps.
    pub fn normalized(mut self) -> Self {
        if self.is_onboarding_complete && !self.all_steps_done() {
            self.is_onboarding_complete = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn progress_with(profile: bool, songs: bool, payment: bool) -> OnboardingProgress {
        let mut progress = OnboardingProgress::default();
        progress.profile.is_done = profile;
        progress.favorite_songs.is_done = songs;
        progress.payment_info.is_done = payment;
        progress
    }

    #[test]
    fn test_fresh_progress_starts_at_profile() {
        let progress = OnboardingProgress::default();
        assert_eq!(progress.first_incomplete_step_path(), "profile");
        assert!(!progress.is_onboarding_complete());
    }

    #[test]
    fn test_first_incomplete_step_for_every_flag_combination() {
        for bits in 0u8..8 {
            let (profile, songs, payment) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let progress = progress_with(profile, songs, payment);
            let expected = if !profile {
                "profile"
            } else if !songs {
                "favorite-songs"
            } else if !payment {
                "payment-info"
            } else {
                "success"
            };
            assert_eq!(
                progress.first_incomplete_step_path(),
                expected,
                "flags: profile={profile} songs={songs} payment={payment}"
            );
            assert_eq!(
                progress.first_incomplete_step_path() == "success",
                profile && songs && payment
            );
        }
    }

    #[test]
    fn test_earlier_gap_wins_over_later_done_steps() {
        let progress = progress_with(false, true, true);
        assert_eq!(progress.first_incomplete_step(), OnboardingStep::Profile);
    }

    #[test]
    fn test_set_onboarding_complete_requires_all_steps() {
        let mut progress = progress_with(true, true, false);
        assert!(!progress.set_onboarding_complete(true));
        assert!(!progress.is_onboarding_complete());

        progress.payment_info.is_done = true;
        assert!(progress.set_onboarding_complete(true));
        assert!(progress.is_onboarding_complete());
    }

    #[test]
    fn test_set_onboarding_complete_false_always_applies() {
        let mut progress = progress_with(true, true, true);
        progress.set_onboarding_complete(true);
        assert!(progress.set_onboarding_complete(false));
        assert!(!progress.is_onboarding_complete());
    }

    #[test]
    fn test_normalized_clears_unbacked_completion() {
        let progress: OnboardingProgress = serde_json::from_value(json!({
            "isDone": true,
            "profile": { "isDone": true },
            "favoriteSongs": { "songs": [], "isDone": false },
            "paymentInfo": { "isDone": true }
        }))
        .unwrap();
        assert!(progress.is_onboarding_complete());
        assert!(!progress.normalized().is_onboarding_complete());
    }

    #[test]
    fn test_persisted_layout() {
        let mut progress = progress_with(true, false, false);
        progress.profile.data = ProfileData {
            name: "Ada".to_string(),
            age: Some(36),
            email: "ada@example.com".to_string(),
            profile_pic: None,
        };
        progress.favorite_songs.data.songs.push(FavoriteSong {
            id: "1".to_string(),
            song_name: "Blue in Green".to_string(),
            artist: "Miles Davis".to_string(),
        });

        let value = serde_json::to_value(&progress).unwrap();
        assert_eq!(
            value,
            json!({
                "isDone": false,
                "profile": {
                    "name": "Ada",
                    "age": 36,
                    "email": "ada@example.com",
                    "profilePic": null,
                    "isDone": true
                },
                "favoriteSongs": {
                    "songs": [{ "id": "1", "songName": "Blue in Green", "artist": "Miles Davis" }],
                    "isDone": false
                },
                "paymentInfo": {
                    "cardNumber": "",
                    "expiry": "",
                    "cvv": "",
                    "isDone": false
                }
            })
        );
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let progress: OnboardingProgress =
            serde_json::from_value(json!({ "paymentInfo": {} })).unwrap();
        assert_eq!(progress, OnboardingProgress::default());
    }
}
