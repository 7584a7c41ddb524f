//! Controller operating status.
//!
//! The controller reports its current operation either as a numeric code
//! (`0..=7`) or as the matching text label. Codes and labels outside the
//! known table map to [`LuxStatus::Unknown`] rather than failing, since new
//! firmware revisions add states without notice.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Label reported for unmapped status codes.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Current operating status of the heat pump.
///
/// Serializes as its [`label`](LuxStatus::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuxStatus {
    #[serde(rename = "heating")]
    Heating,
    #[serde(rename = "hot water")]
    DomesticWater,
    #[serde(rename = "swimming pool/solar")]
    SwimmingPoolSolar,
    /// Power supply blocked by the utility company.
    #[serde(rename = "evu")]
    Evu,
    #[serde(rename = "defrost")]
    Defrost,
    #[serde(rename = "no request")]
    NoRequest,
    #[serde(rename = "heating external source")]
    HeatingExternalSource,
    #[serde(rename = "cooling")]
    Cooling,
    #[serde(rename = "unknown")]
    Unknown,
}

impl LuxStatus {
    /// All known statuses in code order.
    pub const ALL: [LuxStatus; 8] = [
        LuxStatus::Heating,
        LuxStatus::DomesticWater,
        LuxStatus::SwimmingPoolSolar,
        LuxStatus::Evu,
        LuxStatus::Defrost,
        LuxStatus::NoRequest,
        LuxStatus::HeatingExternalSource,
        LuxStatus::Cooling,
    ];

    /// Map a controller status code.
    pub fn from_code(code: i64) -> Self {
        let status = usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(LuxStatus::Unknown);
        if status == LuxStatus::Unknown {
            tracing::warn!(code, "Unmapped controller status code");
        }
        status
    }

    /// Map a status label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match LABEL_INDEX.get(label.trim().to_lowercase().as_str()) {
            Some(status) => *status,
            None => {
                tracing::warn!(label, "Unmapped controller status label");
                LuxStatus::Unknown
            }
        }
    }

    /// Controller code, `None` for [`LuxStatus::Unknown`].
    pub fn code(&self) -> Option<i64> {
        Self::ALL.iter().position(|s| s == self).map(|i| i as i64)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LuxStatus::Heating => "heating",
            LuxStatus::DomesticWater => "hot water",
            LuxStatus::SwimmingPoolSolar => "swimming pool/solar",
            LuxStatus::Evu => "evu",
            LuxStatus::Defrost => "defrost",
            LuxStatus::NoRequest => "no request",
            LuxStatus::HeatingExternalSource => "heating external source",
            LuxStatus::Cooling => "cooling",
            LuxStatus::Unknown => UNKNOWN_LABEL,
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            LuxStatus::Heating => Some("mdi:radiator"),
            LuxStatus::DomesticWater => Some("mdi:waves"),
            LuxStatus::Evu => Some("mdi:power-plug-off"),
            LuxStatus::Defrost => Some("mdi:car-defrost-rear"),
            LuxStatus::NoRequest => Some("mdi:radiator-disabled"),
            LuxStatus::Cooling => Some("mdi:air-conditioner"),
            LuxStatus::SwimmingPoolSolar
            | LuxStatus::HeatingExternalSource
            | LuxStatus::Unknown => None,
        }
    }

    /// Code, label, icon and activity in one record.
    pub fn info(&self) -> StatusInfo {
        StatusInfo {
            code: self.code(),
            label: *self,
            icon: self.icon(),
            active: self.is_on(),
        }
    }

    /// Whether the heat pump is actively running in this status.
    pub fn is_on(&self) -> bool {
        matches!(
            self,
            LuxStatus::Heating
                | LuxStatus::DomesticWater
                | LuxStatus::SwimmingPoolSolar
                | LuxStatus::Defrost
                | LuxStatus::HeatingExternalSource
                | LuxStatus::Cooling
        )
    }
}

impl std::fmt::Display for LuxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display record of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub code: Option<i64>,
    pub label: LuxStatus,
    pub icon: Option<&'static str>,
    pub active: bool,
}

static LABEL_INDEX: Lazy<HashMap<&'static str, LuxStatus>> =
    Lazy::new(|| LuxStatus::ALL.iter().map(|s| (s.label(), *s)).collect());

/// Labels of the statuses in which the heat pump counts as on.
pub static STATES_ON: Lazy<Vec<&'static str>> = Lazy::new(|| {
    LuxStatus::ALL
        .iter()
        .filter(|s| s.is_on())
        .map(LuxStatus::label)
        .collect()
});

/// Display label and icon for a status code.
pub fn status_display(code: i64) -> (&'static str, Option<&'static str>) {
    let status = LuxStatus::from_code(code);
    (status.label(), status.icon())
}

/// Whether `label` names one of the active statuses. Labels are matched
/// like [`LuxStatus::from_label`] matches them.
pub fn is_active_label(label: &str) -> bool {
    let label = label.trim().to_lowercase();
    STATES_ON.iter().any(|l| *l == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for (i, status) in LuxStatus::ALL.iter().enumerate() {
            assert_eq!(LuxStatus::from_code(i as i64), *status);
            assert_eq!(status.code(), Some(i as i64));
            assert_eq!(LuxStatus::from_label(status.label()), *status);
        }
        assert_eq!(LuxStatus::Unknown.code(), None);
    }

    #[test]
    fn test_active_set() {
        assert_eq!(STATES_ON.len(), 6);
        for label in [
            "heating",
            "hot water",
            "swimming pool/solar",
            "defrost",
            "heating external source",
            "cooling",
        ] {
            assert!(is_active_label(label), "{} should be active", label);
        }
        assert!(!is_active_label("evu"));
        assert!(!is_active_label("no request"));
        assert!(!is_active_label(UNKNOWN_LABEL));
    }

    #[test]
    fn test_active_label_normalized() {
        assert!(is_active_label("Hot Water"));
        assert!(is_active_label(" DEFROST "));
        assert!(!is_active_label("EVU"));
        for label in ["Hot Water", "  cooling", "No Request", "bogus"] {
            assert_eq!(is_active_label(label), LuxStatus::from_label(label).is_on());
        }
    }

    #[test]
    fn test_serializes_as_label() {
        for status in LuxStatus::ALL.into_iter().chain([LuxStatus::Unknown]) {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::from(status.label())
            );
        }
        assert_eq!(
            serde_json::to_value(LuxStatus::Evu.info()).unwrap(),
            serde_json::json!({
                "code": 3,
                "label": "evu",
                "icon": "mdi:power-plug-off",
                "active": false,
            })
        );
    }

    #[test]
    fn test_display_lookup() {
        assert_eq!(status_display(0), ("heating", Some("mdi:radiator")));
        assert_eq!(status_display(2), ("swimming pool/solar", None));
        assert_eq!(status_display(3), ("evu", Some("mdi:power-plug-off")));
        assert_eq!(status_display(7), ("cooling", Some("mdi:air-conditioner")));
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(status_display(8), (UNKNOWN_LABEL, None));
        assert_eq!(status_display(-1), (UNKNOWN_LABEL, None));
        assert_eq!(LuxStatus::from_label("sleeping"), LuxStatus::Unknown);
        assert!(!LuxStatus::Unknown.is_on());
        assert_eq!(LuxStatus::from_label("  Hot Water "), LuxStatus::DomesticWater);
    }
}
