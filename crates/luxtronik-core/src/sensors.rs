//! Controller value addressing.
//!
//! Values are addressed as `group.ID`, where the group is one of the three
//! controller tables and the ID is the raw controller field name.

use crate::config::keys;
use crate::error::ValidationError;

pub const DETECT_COOLING: &str = "calculations.ID_WEB_FreigabKuehl";
pub const STATUS: &str = "calculations.ID_WEB_WP_BZ_akt";

pub const HEATING_TEMPERATURE_CORRECTION: &str = "parameters.ID_Einst_WK_akt";
pub const HEATING_HEATER: &str = "parameters.ID_Ba_Hz_akt";

pub const DOMESTIC_WATER_CURRENT_TEMPERATURE: &str = "calculations.ID_WEB_Temperatur_TBW";
pub const DOMESTIC_WATER_TARGET_TEMPERATURE: &str = "parameters.ID_Einst_BWS_akt";
pub const DOMESTIC_WATER_HEATER: &str = "parameters.ID_Ba_Bw_akt";

/// Well-known keys used by the entity platforms.
pub const WELL_KNOWN: [&str; 7] = [
    DETECT_COOLING,
    STATUS,
    HEATING_TEMPERATURE_CORRECTION,
    HEATING_HEATER,
    DOMESTIC_WATER_CURRENT_TEMPERATURE,
    DOMESTIC_WATER_TARGET_TEMPERATURE,
    DOMESTIC_WATER_HEATER,
];

/// Controller table a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorGroup {
    /// Writable settings.
    Parameters,
    /// Read-only measurements.
    Calculations,
    Visibilities,
}

impl SensorGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorGroup::Parameters => keys::PARAMETERS,
            SensorGroup::Calculations => keys::CALCULATIONS,
            SensorGroup::Visibilities => keys::VISIBILITIES,
        }
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, SensorGroup::Parameters)
    }
}

impl std::str::FromStr for SensorGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            keys::PARAMETERS => Ok(SensorGroup::Parameters),
            keys::CALCULATIONS => Ok(SensorGroup::Calculations),
            keys::VISIBILITIES => Ok(SensorGroup::Visibilities),
            _ => Err(ValidationError::InvalidSensorKey(s.to_string())),
        }
    }
}

/// Parsed `group.ID` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorKey {
    pub group: SensorGroup,
    pub id: String,
}

impl SensorKey {
    pub fn parse(key: &str) -> Result<Self, ValidationError> {
        let (group, id) = key
            .split_once('.')
            .ok_or_else(|| ValidationError::InvalidSensorKey(key.to_string()))?;
        let group = group
            .parse::<SensorGroup>()
            .map_err(|_| ValidationError::InvalidSensorKey(key.to_string()))?;
        if id.is_empty() {
            return Err(ValidationError::InvalidSensorKey(key.to_string()));
        }
        Ok(Self {
            group,
            id: id.to_string(),
        })
    }
}

impl std::fmt::Display for SensorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.group.as_str(), self.id)
    }
}
