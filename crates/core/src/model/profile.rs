use serde::{Deserialize, Serialize};

/// The single user profile record. Updates replace the whole record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    name: String,
    email: String,
    phone: String,
    year: String,
    college: String,
    country: String,
}

/// Editable form of a profile, as collected by the settings screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub college: String,
    pub country: String,
}

impl UserProfileDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the draft into a profile. Every field is trimmed.
    #[must_use]
    pub fn validate(self) -> UserProfile {
        UserProfile {
            name: normalize(self.name),
            email: normalize(self.email),
            phone: normalize(self.phone),
            year: normalize(self.year),
            college: normalize(self.college),
            country: normalize(self.country),
        }
    }
}

impl From<&UserProfile> for UserProfileDraft {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            year: profile.year.clone(),
            college: profile.college.clone(),
            country: profile.country.clone(),
        }
    }
}

impl UserProfile {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn college(&self) -> &str {
        &self.college
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// True when no field has been filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn normalize(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}
