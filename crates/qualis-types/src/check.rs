use serde::{Deserialize, Serialize};

use crate::Error;

/// Validation rule applied to a column.
///
/// Each variant carries exactly the parameters its type tag needs, so a
/// `NotNull` check has no `min`/`max` to read. Tags the producer emits
/// that are not modelled here land in `Other` with their column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckDefinition", into = "RawCheckDefinition")]
pub enum CheckDefinition {
    NotNull {
        column: String,
    },
    Range {
        column: String,
        min: f64,
        max: f64,
    },
    Length {
        column: String,
        max_length: f64,
    },
    Other {
        check_type: String,
        column: String,
    },
}

impl CheckDefinition {
    pub const NOT_NULL: &'static str = "not_null";
    pub const RANGE: &'static str = "range";
    pub const LENGTH: &'static str = "length";

    /// Type tag as it appears on the wire
    pub fn type_tag(&self) -> &str {
        match self {
            CheckDefinition::NotNull { .. } => Self::NOT_NULL,
            CheckDefinition::Range { .. } => Self::RANGE,
            CheckDefinition::Length { .. } => Self::LENGTH,
            CheckDefinition::Other { check_type, .. } => check_type,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            CheckDefinition::NotNull { column }
            | CheckDefinition::Range { column, .. }
            | CheckDefinition::Length { column, .. }
            | CheckDefinition::Other { column, .. } => column,
        }
    }
}

/// Flat wire shape: `{ "type", "column", "min"?, "max"?, "max_length"? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCheckDefinition {
    #[serde(rename = "type")]
    check_type: String,
    column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_length: Option<f64>,
}

fn require(value: Option<f64>, check_type: &str, parameter: &'static str) -> Result<f64, Error> {
    value.ok_or_else(|| Error::MissingCheckParameter {
        check_type: check_type.to_string(),
        parameter,
    })
}

impl TryFrom<RawCheckDefinition> for CheckDefinition {
    type Error = Error;

    fn try_from(raw: RawCheckDefinition) -> Result<Self, Self::Error> {
        let RawCheckDefinition {
            check_type,
            column,
            min,
            max,
            max_length,
        } = raw;

        match check_type.as_str() {
            Self::NOT_NULL => Ok(CheckDefinition::NotNull { column }),
            Self::RANGE => Ok(CheckDefinition::Range {
                min: require(min, &check_type, "min")?,
                max: require(max, &check_type, "max")?,
                column,
            }),
            Self::LENGTH => Ok(CheckDefinition::Length {
                max_length: require(max_length, &check_type, "max_length")?,
                column,
            }),
            _ => Ok(CheckDefinition::Other { check_type, column }),
        }
    }
}

impl From<CheckDefinition> for RawCheckDefinition {
    fn from(check: CheckDefinition) -> Self {
        let mut raw = RawCheckDefinition {
            check_type: check.type_tag().to_string(),
            column: check.column().to_string(),
            min: None,
            max: None,
            max_length: None,
        };
        match check {
            CheckDefinition::Range { min, max, .. } => {
                raw.min = Some(min);
                raw.max = Some(max);
            }
            CheckDefinition::Length { max_length, .. } => raw.max_length = Some(max_length),
            CheckDefinition::NotNull { .. } | CheckDefinition::Other { .. } => {}
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_check_carries_bounds() {
        let check: CheckDefinition =
            serde_json::from_value(json!({"type": "range", "column": "age", "min": 0, "max": 120}))
                .unwrap();

        assert_eq!(
            check,
            CheckDefinition::Range {
                column: "age".to_string(),
                min: 0.0,
                max: 120.0,
            }
        );
    }

    #[test]
    fn test_not_null_ignores_stray_parameters() {
        let check: CheckDefinition =
            serde_json::from_value(json!({"type": "not_null", "column": "email", "min": 3}))
                .unwrap();

        assert_eq!(
            check,
            CheckDefinition::NotNull {
                column: "email".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let check: CheckDefinition =
            serde_json::from_value(json!({"type": "custom_rule", "column": "sku"})).unwrap();

        assert_eq!(check.type_tag(), "custom_rule");
        assert_eq!(check.column(), "sku");
    }

    #[test]
    fn test_range_without_max_is_rejected() {
        let err = serde_json::from_value::<CheckDefinition>(
            json!({"type": "range", "column": "age", "min": 0}),
        )
        .unwrap_err();

        assert!(err.to_string().contains("'max'"));
    }

    #[test]
    fn test_length_without_max_length_is_rejected() {
        let result = serde_json::from_value::<CheckDefinition>(
            json!({"type": "length", "column": "name"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_back_to_flat_shape() {
        let check = CheckDefinition::Length {
            column: "name".to_string(),
            max_length: 64.0,
        };

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(
            value,
            json!({"type": "length", "column": "name", "max_length": 64.0})
        );
    }
}
