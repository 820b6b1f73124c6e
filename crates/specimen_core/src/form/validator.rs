//! Submission parsing and validation.
//!
//! # Responsibility
//! - Parse text-form numeric fields into decimals.
//! - Enforce per-field domain constraints before a record reaches the store.
//!
//! # Invariants
//! - Fields are checked in form order; the first violation is reported.
//! - Validation is pure: same input, same outcome, no side effects.
//! - Coordinates are accepted as submitted.

use crate::model::record::{Material, NewRecord};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive lower bound for concrete strength in MPa.
pub const MIN_CONCRETE_STRENGTH_MPA: f64 = 15.0;
/// Inclusive upper bound for concrete strength in MPa.
pub const MAX_CONCRETE_STRENGTH_MPA: f64 = 100.0;
/// Inclusive lower bound for maximum load in kN.
pub const MIN_MAX_LOAD_KN: f64 = 0.0;

const DEFAULT_CONCRETE_STRENGTH_MPA: f64 = 30.0;
const DEFAULT_MAX_LOAD_KN: f64 = 500.0;
const DEFAULT_LATITUDE: f64 = 48.85;
const DEFAULT_LONGITUDE: f64 = 2.35;

pub type FormResult<T> = Result<T, FormError>;

/// Form fields, named by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionField {
    ProjectName,
    Material,
    ConcreteStrengthMpa,
    MaxLoadKn,
    Latitude,
    Longitude,
}

impl SubmissionField {
    /// Wire name reported in rejection notices.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectName => "projectName",
            Self::Material => "material",
            Self::ConcreteStrengthMpa => "concreteStrengthMPa",
            Self::MaxLoadKn => "maxLoadKN",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl Display for SubmissionField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only error kind produced by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    InvalidInput(SubmissionField),
}

impl FormError {
    /// Field that failed validation.
    pub fn field(&self) -> SubmissionField {
        match self {
            Self::InvalidInput(field) => *field,
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(field) => write!(f, "invalid value for {field}"),
        }
    }
}

impl Error for FormError {}

/// Raw values as delivered by the external form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    pub project_name: String,
    pub material: String,
    #[serde(rename = "concreteStrengthMPa")]
    pub concrete_strength_mpa: f64,
    #[serde(rename = "maxLoadKN")]
    pub max_load_kn: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl RawSubmission {
    /// Initial form values with the given project placeholder.
    pub fn default_form(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            material: Material::ReinforcedConcrete.label().to_string(),
            concrete_strength_mpa: DEFAULT_CONCRETE_STRENGTH_MPA,
            max_load_kn: DEFAULT_MAX_LOAD_KN,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }

    /// Builds a submission from text-only form fields.
    ///
    /// # Errors
    /// - `InvalidInput(field)` for the first numeric field that is not a decimal.
    pub fn from_text(
        project_name: &str,
        material: &str,
        concrete_strength_mpa: &str,
        max_load_kn: &str,
        latitude: &str,
        longitude: &str,
    ) -> FormResult<Self> {
        Ok(Self {
            project_name: project_name.to_string(),
            material: material.to_string(),
            concrete_strength_mpa: parse_decimal(
                SubmissionField::ConcreteStrengthMpa,
                concrete_strength_mpa,
            )?,
            max_load_kn: parse_decimal(SubmissionField::MaxLoadKn, max_load_kn)?,
            latitude: parse_decimal(SubmissionField::Latitude, latitude)?,
            longitude: parse_decimal(SubmissionField::Longitude, longitude)?,
        })
    }
}

/// Parses one decimal form value, ignoring surrounding whitespace.
pub fn parse_decimal(field: SubmissionField, raw: &str) -> FormResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidInput(field))
}

/// Validates raw form values into a record awaiting an id.
///
/// # Errors
/// - `InvalidInput(projectName)` when the name is blank after trimming.
/// - `InvalidInput(material)` when the label is outside the material set.
/// - `InvalidInput(concreteStrengthMPa)` outside `[15, 100]` or non-finite.
/// - `InvalidInput(maxLoadKN)` when negative or non-finite.
pub fn validate_submission(raw: &RawSubmission) -> FormResult<NewRecord> {
    let project_name = raw.project_name.trim();
    if project_name.is_empty() {
        return Err(FormError::InvalidInput(SubmissionField::ProjectName));
    }

    let material = Material::from_label(raw.material.trim())
        .ok_or(FormError::InvalidInput(SubmissionField::Material))?;

    let strength = raw.concrete_strength_mpa;
    if !strength.is_finite()
        || !(MIN_CONCRETE_STRENGTH_MPA..=MAX_CONCRETE_STRENGTH_MPA).contains(&strength)
    {
        return Err(FormError::InvalidInput(
            SubmissionField::ConcreteStrengthMpa,
        ));
    }

    let load = raw.max_load_kn;
    if !load.is_finite() || load < MIN_MAX_LOAD_KN {
        return Err(FormError::InvalidInput(SubmissionField::MaxLoadKn));
    }

    Ok(NewRecord {
        project_name: project_name.to_string(),
        material,
        concrete_strength_mpa: strength,
        max_load_kn: load,
        latitude: raw.latitude,
        longitude: raw.longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        parse_decimal, validate_submission, FormError, RawSubmission, SubmissionField,
    };
    use crate::model::record::Material;

    fn valid() -> RawSubmission {
        RawSubmission {
            project_name: "Pont-Nord-01".to_string(),
            material: "Reinforced Concrete".to_string(),
            concrete_strength_mpa: 35.0,
            max_load_kn: 600.0,
            latitude: 48.85,
            longitude: 2.35,
        }
    }

    #[test]
    fn accepts_valid_submission_unchanged() {
        let record = validate_submission(&valid()).expect("valid submission");
        assert_eq!(record.project_name, "Pont-Nord-01");
        assert_eq!(record.material, Material::ReinforcedConcrete);
        assert_eq!(record.concrete_strength_mpa, 35.0);
        assert_eq!(record.max_load_kn, 600.0);
        assert_eq!(record.latitude, 48.85);
        assert_eq!(record.longitude, 2.35);
    }

    #[test]
    fn project_name_is_trimmed_but_inner_spacing_kept() {
        let mut raw = valid();
        raw.project_name = "  Pont   Nord\t01 ".to_string();
        let record = validate_submission(&raw).expect("name with spaces is valid");
        assert_eq!(record.project_name, "Pont   Nord\t01");
    }

    #[test]
    fn blank_project_name_is_rejected() {
        let mut raw = valid();
        raw.project_name = " \t ".to_string();
        assert_eq!(
            validate_submission(&raw),
            Err(FormError::InvalidInput(SubmissionField::ProjectName))
        );
    }

    #[test]
    fn unknown_material_is_rejected() {
        let mut raw = valid();
        raw.material = "Aluminium".to_string();
        assert_eq!(
            validate_submission(&raw),
            Err(FormError::InvalidInput(SubmissionField::Material))
        );
    }

    #[test]
    fn material_label_outer_whitespace_is_ignored() {
        let mut raw = valid();
        raw.material = " Masonry ".to_string();
        let record = validate_submission(&raw).expect("padded label should match");
        assert_eq!(record.material, Material::Masonry);
    }

    #[test]
    fn strength_bounds_are_inclusive() {
        for (value, accepted) in [(14.99, false), (15.0, true), (100.0, true), (100.01, false)] {
            let mut raw = valid();
            raw.concrete_strength_mpa = value;
            let result = validate_submission(&raw);
            if accepted {
                assert!(result.is_ok(), "{value} should be accepted");
            } else {
                assert_eq!(
                    result,
                    Err(FormError::InvalidInput(SubmissionField::ConcreteStrengthMpa)),
                    "{value} should be rejected"
                );
            }
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut raw = valid();
        raw.concrete_strength_mpa = f64::NAN;
        assert_eq!(
            validate_submission(&raw).unwrap_err().field(),
            SubmissionField::ConcreteStrengthMpa
        );

        let mut raw = valid();
        raw.max_load_kn = f64::INFINITY;
        assert_eq!(
            validate_submission(&raw).unwrap_err().field(),
            SubmissionField::MaxLoadKn
        );
    }

    #[test]
    fn negative_load_is_rejected_and_zero_accepted() {
        let mut raw = valid();
        raw.max_load_kn = -0.5;
        assert_eq!(
            validate_submission(&raw),
            Err(FormError::InvalidInput(SubmissionField::MaxLoadKn))
        );

        raw.max_load_kn = 0.0;
        assert!(validate_submission(&raw).is_ok());
    }

    #[test]
    fn first_violation_in_form_order_wins() {
        let mut raw = valid();
        raw.project_name = String::new();
        raw.concrete_strength_mpa = 500.0;
        assert_eq!(
            validate_submission(&raw).unwrap_err().field(),
            SubmissionField::ProjectName
        );
    }

    #[test]
    fn text_fields_parse_with_surrounding_whitespace() {
        let raw = RawSubmission::from_text(
            "Pont-Nord-01",
            "Masonry",
            " 35 ",
            "600.5",
            "-12.5",
            "130",
        )
        .expect("numeric text should parse");
        assert_eq!(raw.concrete_strength_mpa, 35.0);
        assert_eq!(raw.max_load_kn, 600.5);
        assert_eq!(raw.latitude, -12.5);
        assert_eq!(raw.longitude, 130.0);
    }

    #[test]
    fn unparsable_text_names_the_field() {
        let err = RawSubmission::from_text("p", "Masonry", "35", "lots", "0", "0")
            .expect_err("non-numeric load must fail");
        assert_eq!(err, FormError::InvalidInput(SubmissionField::MaxLoadKn));
        assert_eq!(
            parse_decimal(SubmissionField::Latitude, ""),
            Err(FormError::InvalidInput(SubmissionField::Latitude))
        );
    }

    #[test]
    fn error_message_names_the_wire_field() {
        let err = FormError::InvalidInput(SubmissionField::ConcreteStrengthMpa);
        assert_eq!(err.to_string(), "invalid value for concreteStrengthMPa");
    }
}
