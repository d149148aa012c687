use serde::{Deserialize, Serialize};

/// Onboarding profile stored under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    /// Free text such as "She/Her"; only used when addressing the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    #[serde(default)]
    pub guardian_consent: bool,
}

impl UserProfile {
    pub fn is_minor(&self) -> bool {
        self.age < 18
    }
}

/// Life stage used to pick age-specific stress factors and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeStage {
    Adolescent,
    YoungAdult,
    EarlyAdult,
    MatureAdult,
}

impl LifeStage {
    /// Ages outside the mapped ranges fall back to early adulthood.
    pub fn from_age(age: u32) -> Self {
        match age {
            12..=18 => LifeStage::Adolescent,
            19..=25 => LifeStage::YoungAdult,
            26..=35 => LifeStage::EarlyAdult,
            36..=50 => LifeStage::MatureAdult,
            _ => LifeStage::EarlyAdult,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub from: String,
    pub to: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            from: "#00A8D6".into(),
            to: "#7AD68A".into(),
        }
    }
}
