// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Decoding of the add form into a [`NewCandyDrop`].

use serde::Deserialize;

use crate::error::ValidationError;
use crate::write::NewCandyDrop;

/// Raw add-form fields, exactly as submitted.
///
/// Every field is optional here so that a missing field becomes a
/// [`ValidationError`] instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandyDropForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub material_cost: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sourness: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl CandyDropForm {
    /// Turn the raw fields into a typed record.
    ///
    /// Checks presence, integer syntax and ranges. Whether the references
    /// exist is decided by [`crate::CatalogDb::create_candy_drop`].
    pub fn validate(&self) -> Result<NewCandyDrop, ValidationError> {
        let name = required("name", &self.name)?.to_owned();
        let new = NewCandyDrop {
            name,
            weight: integer("weight", &self.weight)?,
            material_cost: integer("material_cost", &self.material_cost)?,
            color_id: integer("color", &self.color)?,
            sourness_id: integer("sourness", &self.sourness)?,
            strength_id: integer("strength", &self.strength)?,
            type_id: integer("type", &self.kind)?,
        };
        new.check()?;
        Ok(new)
    }
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn integer(field: &'static str, value: &Option<String>) -> Result<i64, ValidationError> {
    let raw = required(field, value)?.trim();
    raw.parse().map_err(|_| ValidationError::Malformed {
        field,
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn filled() -> CandyDropForm {
        CandyDropForm {
            name: Some("Fireball".into()),
            weight: Some("8".into()),
            material_cost: Some(" 50 ".into()),
            color: Some("1".into()),
            sourness: Some("2".into()),
            strength: Some("3".into()),
            kind: Some("4".into()),
        }
    }

    #[test]
    fn test_validate_filled_form() {
        let new = filled().validate().unwrap();
        assert_eq!(
            new,
            NewCandyDrop {
                name: "Fireball".into(),
                weight: 8,
                material_cost: 50,
                color_id: 1,
                sourness_id: 2,
                strength_id: 3,
                type_id: 4,
            }
        );
    }

    #[rstest]
    #[case::no_name(CandyDropForm { name: None, ..filled() }, ValidationError::MissingField("name"))]
    #[case::blank_weight(
        CandyDropForm { weight: Some(" ".into()), ..filled() },
        ValidationError::MissingField("weight")
    )]
    #[case::no_type(CandyDropForm { kind: None, ..filled() }, ValidationError::MissingField("type"))]
    #[case::float_weight(
        CandyDropForm { weight: Some("8.5".into()), ..filled() },
        ValidationError::Malformed { field: "weight", value: "8.5".into() }
    )]
    #[case::word_cost(
        CandyDropForm { material_cost: Some("cheap".into()), ..filled() },
        ValidationError::Malformed { field: "material_cost", value: "cheap".into() }
    )]
    #[case::bad_color(
        CandyDropForm { color: Some("red".into()), ..filled() },
        ValidationError::Malformed { field: "color", value: "red".into() }
    )]
    #[case::negative_weight(
        CandyDropForm { weight: Some("-3".into()), ..filled() },
        ValidationError::OutOfRange { field: "weight", value: -3 }
    )]
    fn test_validate_rejects(#[case] form: CandyDropForm, #[case] expected: ValidationError) {
        assert_eq!(form.validate(), Err(expected));
    }

    #[test]
    fn test_empty_form_reports_name_first() {
        assert_eq!(
            CandyDropForm::default().validate(),
            Err(ValidationError::MissingField("name"))
        );
    }
}
