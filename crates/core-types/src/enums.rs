use serde::{Deserialize, Serialize};

/// The kind of animal a farm raises, taken from the owner's profile.
///
/// The profile stores this as a free-form lowercase string, so any value we
/// do not recognize maps to `Other` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Poultry,
    Pig,
    #[serde(other)]
    Other,
}

impl AnimalType {
    /// Returns the vaccination interval for this animal type, in days.
    ///
    /// Poultry sheds are revaccinated monthly; everything else quarterly.
    pub fn vaccination_interval_days(self) -> i64 {
        match self {
            AnimalType::Poultry => 30,
            _ => 90,
        }
    }
}
