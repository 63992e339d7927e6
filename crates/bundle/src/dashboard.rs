//! Dashboard patient payload.
//!
//! The dashboard variant consumes one flat JSON object describing a single
//! patient: demographics, contact details, allergies, conditions, medications,
//! vital-sign samples, treatment history, appointments, and a timeline. The
//! payload is consumed wholesale; there are no partial-load semantics, so a
//! missing field is a malformed payload rather than a degraded one.

use crate::{parse_with_path, BundleResult};
use serde::Deserialize;
use std::path::Path;

/// A complete dashboard patient record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub emergency_contact: String,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub current_medications: Vec<Medication>,
    pub vital_signs: Vec<VitalSign>,
    pub treatments: Vec<Treatment>,
    pub appointments: Vec<Appointment>,
    pub timeline: Vec<TimelineEvent>,
}

/// One prescribed medication.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// One dated vital-sign sample.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalSign {
    pub date: String,
    pub heart_rate: u32,
    /// Combined reading as recorded, e.g. `"120/80"`.
    pub blood_pressure: String,
    pub temperature: f64,
    pub respiratory_rate: u32,
    pub oxygen_saturation: u32,
}

/// One treatment-history item.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Treatment {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
    pub notes: String,
}

/// One scheduled appointment.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub date: String,
    pub time: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

/// One timeline event.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub highlight: bool,
}

impl Patient {
    /// The most recent vital-sign sample, if any were recorded.
    ///
    /// Samples arrive oldest-first, so this is the last element.
    pub fn latest_vitals(&self) -> Option<&VitalSign> {
        self.vital_signs.last()
    }
}

impl VitalSign {
    /// Split the recorded blood pressure into (systolic, diastolic).
    ///
    /// Returns `None` when the reading is not two integers separated by `/`;
    /// callers fall back to showing the raw string.
    pub fn blood_pressure_split(&self) -> Option<(u32, u32)> {
        let (systolic, diastolic) = self.blood_pressure.split_once('/')?;
        Some((
            systolic.trim().parse().ok()?,
            diastolic.trim().parse().ok()?,
        ))
    }
}

/// Dashboard payload operations.
///
/// Zero-sized namespace for parsing the dashboard patient payload.
pub struct Dashboard;

impl Dashboard {
    /// Parse a dashboard patient payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BundleError::Parse`] with a path to the failing field
    /// when the JSON is invalid or missing required fields.
    pub fn parse(json_text: &str) -> BundleResult<Patient> {
        parse_with_path(json_text)
    }

    /// Read and parse a dashboard patient payload from a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BundleError::Io`] if the file cannot be read,
    /// otherwise the same errors as [`Dashboard::parse`].
    pub fn load(path: &Path) -> BundleResult<Patient> {
        let text = std::fs::read_to_string(path)?;
        Dashboard::parse(&text)
    }
}
