//! Unit classes and their display decoration.
//!
//! Every controller value is tagged with a unit class. The class selects the
//! icon, the platform device class and the unit of measurement shown for the
//! sensor.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ValidationError;

pub const TEMP_CELSIUS: &str = "°C";
pub const TEMP_KELVIN: &str = "K";
pub const TIME_SECONDS: &str = "s";
pub const TIME_HOURS: &str = "h";
pub const PRESSURE_BAR: &str = "bar";
pub const PERCENTAGE: &str = "%";
pub const ENERGY_KILO_WATT_HOUR: &str = "kWh";
pub const ELECTRIC_POTENTIAL_VOLT: &str = "V";
pub const FLOW_LITERS_PER_HOUR: &str = "l/h";

/// Device class assigned when a unit class has none.
pub const DEFAULT_DEVICE_CLASS: Option<DeviceClass> = None;

/// Platform device classification of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Temperature,
    Pressure,
    Timestamp,
    Energy,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Temperature => "temperature",
            DeviceClass::Pressure => "pressure",
            DeviceClass::Timestamp => "timestamp",
            DeviceClass::Energy => "energy",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic category of a controller value. Serializes as its
/// [`key`](UnitClass::key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitClass {
    Celsius,
    Seconds,
    Pulses,
    IpAddress,
    Timestamp,
    ErrorCode,
    Kelvin,
    Bar,
    Percent,
    Rpm,
    Energy,
    Voltage,
    Hours,
    Flow,
    Level,
    Count,
    Version,
}

impl UnitClass {
    pub const ALL: [UnitClass; 17] = [
        UnitClass::Celsius,
        UnitClass::Seconds,
        UnitClass::Pulses,
        UnitClass::IpAddress,
        UnitClass::Timestamp,
        UnitClass::ErrorCode,
        UnitClass::Kelvin,
        UnitClass::Bar,
        UnitClass::Percent,
        UnitClass::Rpm,
        UnitClass::Energy,
        UnitClass::Voltage,
        UnitClass::Hours,
        UnitClass::Flow,
        UnitClass::Level,
        UnitClass::Count,
        UnitClass::Version,
    ];

    /// Key used in sensor definitions.
    pub fn key(&self) -> &'static str {
        match self {
            UnitClass::Celsius => "celsius",
            UnitClass::Seconds => "seconds",
            UnitClass::Pulses => "pulses",
            UnitClass::IpAddress => "ipaddress",
            UnitClass::Timestamp => "timestamp",
            UnitClass::ErrorCode => "errorcode",
            UnitClass::Kelvin => "kelvin",
            UnitClass::Bar => "bar",
            UnitClass::Percent => "percent",
            UnitClass::Rpm => "rpm",
            UnitClass::Energy => "energy",
            UnitClass::Voltage => "voltage",
            UnitClass::Hours => "hours",
            UnitClass::Flow => "flow",
            UnitClass::Level => "level",
            UnitClass::Count => "count",
            UnitClass::Version => "version",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UnitClass::Celsius | UnitClass::Kelvin => "mdi:thermometer",
            UnitClass::Seconds => "mdi:timer-sand",
            UnitClass::Pulses => "mdi:pulse",
            UnitClass::IpAddress => "mdi:ip-network-outline",
            UnitClass::Timestamp => "mdi:calendar-range",
            UnitClass::ErrorCode => "mdi:alert-circle-outline",
            UnitClass::Bar => "mdi:arrow-collapse-all",
            UnitClass::Percent => "mdi:percent",
            UnitClass::Rpm => "mdi:rotate-right",
            UnitClass::Energy => "mdi:lightning-bolt-circle",
            UnitClass::Voltage => "mdi:flash-outline",
            UnitClass::Hours => "mdi:clock-outline",
            UnitClass::Flow => "mdi:chart-bell-curve",
            UnitClass::Level => "mdi:format-list-numbered",
            UnitClass::Count => "mdi:counter",
            UnitClass::Version => "mdi:information-outline",
        }
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        match self {
            UnitClass::Celsius | UnitClass::Kelvin => Some(DeviceClass::Temperature),
            UnitClass::Bar => Some(DeviceClass::Pressure),
            UnitClass::Seconds | UnitClass::Hours | UnitClass::Timestamp => {
                Some(DeviceClass::Timestamp)
            }
            UnitClass::Energy => Some(DeviceClass::Energy),
            _ => DEFAULT_DEVICE_CLASS,
        }
    }

    /// Unit of measurement, if the class has one.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            UnitClass::Celsius => Some(TEMP_CELSIUS),
            UnitClass::Seconds => Some(TIME_SECONDS),
            UnitClass::Kelvin => Some(TEMP_KELVIN),
            UnitClass::Bar => Some(PRESSURE_BAR),
            UnitClass::Percent => Some(PERCENTAGE),
            UnitClass::Energy => Some(ENERGY_KILO_WATT_HOUR),
            UnitClass::Voltage => Some(ELECTRIC_POTENTIAL_VOLT),
            UnitClass::Hours => Some(TIME_HOURS),
            UnitClass::Flow => Some(FLOW_LITERS_PER_HOUR),
            _ => None,
        }
    }

    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            icon: Some(self.icon()),
            device_class: self.device_class(),
            unit: self.unit(),
        }
    }
}

impl std::fmt::Display for UnitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

static KEY_INDEX: Lazy<HashMap<&'static str, UnitClass>> =
    Lazy::new(|| UnitClass::ALL.iter().map(|u| (u.key(), *u)).collect());

impl std::str::FromStr for UnitClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KEY_INDEX
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ValidationError::UnknownUnitClass(s.to_string()))
    }
}

/// Display decoration for a sensor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UnitInfo {
    pub icon: Option<&'static str>,
    pub device_class: Option<DeviceClass>,
    pub unit: Option<&'static str>,
}

/// Decoration for a unit-class key. Unknown keys get no decoration.
pub fn unit_info(key: &str) -> UnitInfo {
    match key.parse::<UnitClass>() {
        Ok(class) => class.info(),
        Err(err) => {
            tracing::warn!(key, "{}", err);
            UnitInfo::default()
        }
    }
}
