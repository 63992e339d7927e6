//! Terminal renderer for the dashboard payload.
//!
//! Prints the patient info panel and one tab at a time, mirroring the
//! dashboard's tabbed layout: vital signs, timeline, treatment history,
//! appointments.

use std::io::Write;

use roster_bundle::Patient;

/// Print the patient info panel: identity, contacts, allergies, conditions,
/// and current medications.
pub fn render_overview<W: Write>(out: &mut W, patient: &Patient) -> std::io::Result<()> {
    writeln!(out, "{}", patient.name)?;
    writeln!(
        out,
        "ID: {} | {} years | {} | Blood Type: {}",
        patient.id, patient.age, patient.gender, patient.blood_type
    )?;
    writeln!(out, "Phone: {}  Email: {}", patient.phone, patient.email)?;
    writeln!(out, "Address: {}", patient.address)?;
    writeln!(out, "Emergency contact: {}", patient.emergency_contact)?;

    writeln!(out, "Allergies: {}", join_or_none(&patient.allergies))?;
    writeln!(
        out,
        "Chronic conditions: {}",
        join_or_none(&patient.chronic_conditions)
    )?;

    writeln!(out, "Current medications:")?;
    if patient.current_medications.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for med in &patient.current_medications {
        writeln!(out, "  {} - {}, {}", med.name, med.dosage, med.frequency)?;
    }
    Ok(())
}

/// Print the vital-signs tab: a summary of the latest sample followed by the
/// full sample history with blood pressure split into systolic/diastolic
/// where the reading allows it.
pub fn render_vitals<W: Write>(out: &mut W, patient: &Patient) -> std::io::Result<()> {
    writeln!(out, "Vital Signs")?;

    let Some(latest) = patient.latest_vitals() else {
        writeln!(out, "  No vital signs recorded")?;
        return Ok(());
    };

    writeln!(
        out,
        "Latest ({}): {} bpm | {} mmHg | {}°F | {} breaths/min | {}% SpO2",
        latest.date,
        latest.heart_rate,
        latest.blood_pressure,
        latest.temperature,
        latest.respiratory_rate,
        latest.oxygen_saturation
    )?;

    writeln!(out, "{:<12} {:>6} {:>10} {:>10} {:>6} {:>6}", "DATE", "HR", "SYS", "DIA", "TEMP", "SPO2")?;
    for sample in &patient.vital_signs {
        let (systolic, diastolic) = match sample.blood_pressure_split() {
            Some((s, d)) => (s.to_string(), d.to_string()),
            None => (sample.blood_pressure.clone(), "-".to_string()),
        };
        writeln!(
            out,
            "{:<12} {:>6} {:>10} {:>10} {:>6} {:>6}",
            sample.date,
            sample.heart_rate,
            systolic,
            diastolic,
            sample.temperature,
            sample.oxygen_saturation
        )?;
    }
    Ok(())
}

/// Print the timeline tab, highlighted events marked with an asterisk.
pub fn render_timeline<W: Write>(out: &mut W, patient: &Patient) -> std::io::Result<()> {
    writeln!(out, "Timeline")?;
    if patient.timeline.is_empty() {
        writeln!(out, "  No timeline events")?;
    }
    for event in &patient.timeline {
        let marker = if event.highlight { "*" } else { " " };
        writeln!(
            out,
            "{marker} {} - {}: {}",
            event.year, event.title, event.description
        )?;
    }
    Ok(())
}

/// Print the treatment-history tab.
pub fn render_treatments<W: Write>(out: &mut W, patient: &Patient) -> std::io::Result<()> {
    writeln!(out, "Treatment History")?;
    if patient.treatments.is_empty() {
        writeln!(out, "  No treatments recorded")?;
    }
    for treatment in &patient.treatments {
        writeln!(
            out,
            "{} - {} ({}): {}",
            treatment.date, treatment.kind, treatment.provider, treatment.notes
        )?;
    }
    Ok(())
}

/// Print the appointments tab.
pub fn render_appointments<W: Write>(out: &mut W, patient: &Patient) -> std::io::Result<()> {
    writeln!(out, "Appointments")?;
    if patient.appointments.is_empty() {
        writeln!(out, "  No upcoming appointments")?;
    }
    for appt in &patient.appointments {
        writeln!(
            out,
            "{} {} - {} with {} at {}",
            appt.date, appt.time, appt.kind, appt.provider, appt.location
        )?;
    }
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
