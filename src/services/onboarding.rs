use crate::models::profile::UserProfile;

pub const MINIMUM_AGE: u32 = 13;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("You must be at least 13 years old to use Calm Mind")]
    TooYoung,

    #[error("Parent/Guardian consent is required for minors")]
    GuardianConsentRequired,

    #[error("Trusted contact number must be different from your contact number. Please enter another number.")]
    TrustedContactMatchesPhone,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a submitted profile in the order the sign-up form asks for it:
/// contact details, then the age gate, then the minor/adult specific fields.
pub fn validate_profile(profile: &UserProfile) -> Result<(), OnboardingError> {
    for (field, value) in [
        ("Name", &profile.name),
        ("Email", &profile.email),
        ("Phone", &profile.phone),
    ] {
        if is_blank(value) {
            return Err(OnboardingError::Missing(field));
        }
    }

    if profile.age < MINIMUM_AGE {
        return Err(OnboardingError::TooYoung);
    }

    if profile.is_minor() {
        let guardian = [
            ("Parent/Guardian name", &profile.guardian_name),
            ("Parent/Guardian phone", &profile.guardian_phone),
        ];
        for (field, value) in guardian {
            if value.as_deref().map_or(true, is_blank) {
                return Err(OnboardingError::Missing(field));
            }
        }
        if !profile.guardian_consent {
            return Err(OnboardingError::GuardianConsentRequired);
        }
    } else if let Some(contact) = profile.trusted_contact.as_deref() {
        if !is_blank(contact) && contact.trim() == profile.phone.trim() {
            return Err(OnboardingError::TrustedContactMatchesPhone);
        }
    }

    Ok(())
}
