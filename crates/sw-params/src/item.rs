//! Display records bound into compare panels.

use serde::{Deserialize, Serialize};

/// One drive parameter row.
///
/// Every field is display text. The drive publishes no typed schema, so
/// values and limits are kept exactly as authored and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterItem {
    /// Register index, e.g. `Ft-1.01`.
    pub ft_number: String,
    pub name: String,
    #[serde(default = "zero")]
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "zero")]
    pub default: String,
    #[serde(default = "zero")]
    pub min: String,
    #[serde(default = "zero")]
    pub max: String,
}

fn zero() -> String {
    "0".to_string()
}

impl ParameterItem {
    pub fn new(ft_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ft_number: ft_number.into(),
            name: name.into(),
            value: zero(),
            unit: String::new(),
            default: zero(),
            min: zero(),
            max: zero(),
        }
    }

    /// Monitor and fault rows carry no default/min/max.
    pub fn is_read_only(&self) -> bool {
        self.default.is_empty() && self.min.is_empty() && self.max.is_empty()
    }
}

/// One telemetry row of the status pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub unit: String,
}

impl StatusEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// Placeholder shown for nodes that have no status set.
    pub fn placeholder(node_name: &str) -> Self {
        Self::new(format!("{node_name} Status"), "OK", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let item: ParameterItem =
            serde_yaml::from_str("{ ft_number: \"Ft-9.00\", name: \"Pos Cmd Source\" }").unwrap();
        assert_eq!(item, ParameterItem::new("Ft-9.00", "Pos Cmd Source"));
        assert!(!item.is_read_only());
    }

    #[test]
    fn monitor_rows_are_read_only() {
        let item: ParameterItem = serde_yaml::from_str(
            "{ ft_number: \"MON-0.07\", name: \"DC Bus Voltage\", value: \"310\", unit: \"V\", default: \"\", min: \"\", max: \"\" }",
        )
        .unwrap();
        assert_eq!(item.value, "310");
        assert!(item.is_read_only());
    }

    #[test]
    fn placeholder_status() {
        let entry = StatusEntry::placeholder("Tuningless");
        assert_eq!(entry.label, "Tuningless Status");
        assert_eq!(entry.value, "OK");
        assert_eq!(entry.unit, "");
    }
}
