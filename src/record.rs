//! Brew session records, drafts, and validation.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    timefmt::{self, FormatError},
    types::{BrewMethod, RecordId, RoastLevel, Temperature, TemperatureUnit},
};

/// Grinder name applied when the user has not configured one.
pub const DEFAULT_GRINDER: &str = "Fellow Ode";

/// One logged brewing session.
///
/// Constructed through [`BrewDraft::validate`], which is the only path
/// that enforces the field constraints. The `id` is assigned when the
/// draft is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewRecord {
    /// Stable record identifier.
    pub id: RecordId,
    /// When the brew happened. Defaults to draft creation time, editable.
    pub timestamp: DateTime<Utc>,
    /// Coffee display name, never empty.
    pub coffee_name: String,
    /// Grams of coffee used, always positive.
    pub dose: f64,
    /// Free-text grinder setting, may be empty.
    pub grind_setting: String,
    /// Grams or ml of water, never negative.
    pub water_amount: f64,
    /// Brewing method tag.
    pub method: BrewMethod,
    /// Roast level tag.
    pub roast_level: RoastLevel,
    /// Water temperature together with its unit.
    pub water_temperature: Option<Temperature>,
    /// Elapsed brew time in seconds.
    pub brew_time: Option<f64>,
    /// Tasting notes.
    pub notes: Option<String>,
    /// Star rating, 1 through 5.
    pub rating: Option<u8>,
    /// Grinder used for this brew.
    pub grinder_type: String,
}

impl BrewRecord {
    /// Water-to-coffee ratio for display. Never persisted.
    pub fn brew_ratio(&self) -> f64 {
        self.water_amount / self.dose
    }
}

/// Rejection reasons produced by [`BrewDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Coffee name was empty.
    EmptyCoffeeName,
    /// Dose did not parse to a positive number.
    InvalidDose(String),
    /// Water amount did not parse to a non-negative number.
    InvalidWaterAmount(String),
    /// Water temperature did not parse to a number.
    InvalidTemperature(String),
    /// Brew time was not valid `MM:SS`.
    InvalidBrewTime(FormatError),
    /// Rating outside 1..=5.
    RatingOutOfRange(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoffeeName => write!(f, "coffee name must not be empty"),
            Self::InvalidDose(raw) => write!(f, "dose must be a positive number, got {raw:?}"),
            Self::InvalidWaterAmount(raw) => {
                write!(f, "water amount must be a non-negative number, got {raw:?}")
            }
            Self::InvalidTemperature(raw) => {
                write!(f, "water temperature must be a number, got {raw:?}")
            }
            Self::InvalidBrewTime(err) => write!(f, "brew time {err}"),
            Self::RatingOutOfRange(rating) => {
                write!(f, "rating must be between 1 and 5, got {rating}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw form input for one brew, prior to validation.
///
/// Numeric fields are kept as the strings the form produced; empty
/// strings mean the optional field was left blank. The id and timestamp
/// are concrete so validation itself stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewDraft {
    /// Record identifier; fresh for new entries, carried over when editing.
    pub id: RecordId,
    /// Brew timestamp.
    pub timestamp: DateTime<Utc>,
    /// Coffee display name.
    pub coffee_name: String,
    /// Dose in grams, as typed.
    pub dose: String,
    /// Free-text grinder setting.
    pub grind_setting: String,
    /// Water amount, as typed.
    pub water_amount: String,
    /// Selected brewing method.
    pub method: BrewMethod,
    /// Selected roast level.
    pub roast_level: RoastLevel,
    /// Water temperature, as typed; empty means absent.
    pub water_temperature: String,
    /// Unit paired with the temperature when one is entered.
    pub temperature_unit: TemperatureUnit,
    /// Brew time as `MM:SS`; empty means absent.
    pub brew_time: String,
    /// Tasting notes; empty means absent.
    pub notes: String,
    /// Star rating, if picked.
    pub rating: Option<u8>,
    /// Grinder used.
    pub grinder_type: String,
}

impl BrewDraft {
    /// Starts an empty draft with a fresh id and the current time.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            coffee_name: String::new(),
            dose: String::new(),
            grind_setting: String::new(),
            water_amount: String::new(),
            method: BrewMethod::PourOver,
            roast_level: RoastLevel::Medium,
            water_temperature: String::new(),
            temperature_unit: TemperatureUnit::Celsius,
            brew_time: String::new(),
            notes: String::new(),
            rating: None,
            grinder_type: DEFAULT_GRINDER.to_string(),
        }
    }

    /// Prefills a draft from an existing record for the edit flow,
    /// rendering numeric fields back to form strings.
    pub fn from_record(record: &BrewRecord) -> Self {
        Self {
            id: record.id,
            timestamp: record.timestamp,
            coffee_name: record.coffee_name.clone(),
            dose: format!("{:.1}", record.dose),
            grind_setting: record.grind_setting.clone(),
            water_amount: format!("{:.1}", record.water_amount),
            method: record.method.clone(),
            roast_level: record.roast_level.clone(),
            water_temperature: record
                .water_temperature
                .map(|t| format!("{:.1}", t.value))
                .unwrap_or_default(),
            temperature_unit: record
                .water_temperature
                .map(|t| t.unit)
                .unwrap_or(TemperatureUnit::Celsius),
            brew_time: record
                .brew_time
                .map(timefmt::format_mm_ss)
                .unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
            rating: record.rating,
            grinder_type: record.grinder_type.clone(),
        }
    }

    /// Validates the raw input and produces the record.
    ///
    /// Deterministic with no side effects: the same draft always yields
    /// the same outcome, and parsed values land in the record unchanged.
    pub fn validate(self) -> Result<BrewRecord, ValidationError> {
        if self.coffee_name.is_empty() {
            return Err(ValidationError::EmptyCoffeeName);
        }

        let dose: f64 = self
            .dose
            .parse()
            .map_err(|_| ValidationError::InvalidDose(self.dose.clone()))?;
        if !(dose.is_finite() && dose > 0.0) {
            return Err(ValidationError::InvalidDose(self.dose));
        }

        let water_amount: f64 = self
            .water_amount
            .parse()
            .map_err(|_| ValidationError::InvalidWaterAmount(self.water_amount.clone()))?;
        if !(water_amount.is_finite() && water_amount >= 0.0) {
            return Err(ValidationError::InvalidWaterAmount(self.water_amount));
        }

        let water_temperature = if self.water_temperature.is_empty() {
            None
        } else {
            let value: f64 = self
                .water_temperature
                .parse()
                .map_err(|_| ValidationError::InvalidTemperature(self.water_temperature.clone()))?;
            Some(Temperature {
                value,
                unit: self.temperature_unit,
            })
        };

        let brew_time = if self.brew_time.is_empty() {
            None
        } else {
            let seconds =
                timefmt::parse_mm_ss(&self.brew_time).map_err(ValidationError::InvalidBrewTime)?;
            Some(f64::from(seconds))
        };

        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(ValidationError::RatingOutOfRange(rating));
            }
        }

        Ok(BrewRecord {
            id: self.id,
            timestamp: self.timestamp,
            coffee_name: self.coffee_name,
            dose,
            grind_setting: self.grind_setting,
            water_amount,
            method: self.method,
            roast_level: self.roast_level,
            water_temperature,
            brew_time,
            notes: if self.notes.is_empty() {
                None
            } else {
                Some(self.notes)
            },
            rating: self.rating,
            grinder_type: self.grinder_type,
        })
    }
}

impl Default for BrewDraft {
    fn default() -> Self {
        Self::new()
    }
}
