//! Shared identifier alias and brewing tag enums.

use std::fmt;

/// Stable per-record identifier.
pub type RecordId = uuid::Uuid;

/// Brewing method tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrewMethod {
    /// Pour over.
    PourOver,
    /// Aeropress.
    Aeropress,
    /// French press.
    FrenchPress,
    /// Espresso.
    Espresso,
    /// Siphon.
    Siphon,
    /// Cold brew.
    ColdBrew,
    /// Moka pot.
    MokaPot,
    /// Turkish.
    Turkish,
    /// Catch-all picker entry.
    Other,
    /// Free-text method entered by the user.
    Custom(String),
}

impl BrewMethod {
    /// Picker set shown by the UI, excluding custom entries.
    pub const ALL: [BrewMethod; 9] = [
        BrewMethod::PourOver,
        BrewMethod::Aeropress,
        BrewMethod::FrenchPress,
        BrewMethod::Espresso,
        BrewMethod::Siphon,
        BrewMethod::ColdBrew,
        BrewMethod::MokaPot,
        BrewMethod::Turkish,
        BrewMethod::Other,
    ];

    /// Display label, also the stored text form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PourOver => "Pour Over",
            Self::Aeropress => "Aeropress",
            Self::FrenchPress => "French Press",
            Self::Espresso => "Espresso",
            Self::Siphon => "Siphon",
            Self::ColdBrew => "Cold Brew",
            Self::MokaPot => "Moka Pot",
            Self::Turkish => "Turkish",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Maps stored text back to a tag; unknown text becomes [`BrewMethod::Custom`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Pour Over" => Self::PourOver,
            "Aeropress" => Self::Aeropress,
            "French Press" => Self::FrenchPress,
            "Espresso" => Self::Espresso,
            "Siphon" => Self::Siphon,
            "Cold Brew" => Self::ColdBrew,
            "Moka Pot" => Self::MokaPot,
            "Turkish" => Self::Turkish,
            "Other" => Self::Other,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roast level tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoastLevel {
    /// Light roast.
    Light,
    /// Medium-light roast.
    MediumLight,
    /// Medium roast.
    Medium,
    /// Medium-dark roast.
    MediumDark,
    /// Dark roast.
    Dark,
    /// Roast level not known.
    Unknown,
    /// Free-text roast level entered by the user.
    Custom(String),
}

impl RoastLevel {
    /// Picker set shown by the UI, excluding custom entries.
    pub const ALL: [RoastLevel; 6] = [
        RoastLevel::Light,
        RoastLevel::MediumLight,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
        RoastLevel::Unknown,
    ];

    /// Display label, also the stored text form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "Light",
            Self::MediumLight => "Medium-Light",
            Self::Medium => "Medium",
            Self::MediumDark => "Medium-Dark",
            Self::Dark => "Dark",
            Self::Unknown => "Unknown",
            Self::Custom(label) => label,
        }
    }

    /// Maps stored text back to a tag; unknown text becomes [`RoastLevel::Custom`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Light" => Self::Light,
            "Medium-Light" => Self::MediumLight,
            "Medium" => Self::Medium,
            "Medium-Dark" => Self::MediumDark,
            "Dark" => Self::Dark,
            "Unknown" => Self::Unknown,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water temperature unit. Closed set, no custom escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Both units, in picker order.
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    /// Display label, also the stored text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        }
    }

    /// Maps stored text back to a unit; unknown text yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Celsius" => Some(Self::Celsius),
            "Fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water temperature with its unit. The value and unit always travel
/// together; a record either has the whole pair or neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    /// Numeric temperature value.
    pub value: f64,
    /// Unit the value is expressed in.
    pub unit: TemperatureUnit,
}
