//! `roster` - patient record list and dashboard, on the terminal.
//!
//! This binary is the rendering collaborator for `roster-core`: it loads a
//! payload, drives a session, and presents the result through [`TextView`].
//! Load failures are recovered here and rendered as a message in place of the
//! table; they never abort the process.

mod dashboard;
mod view;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use roster_bundle::{Bundle, BundleError, Dashboard};
use roster_core::constants::{DEFAULT_PAGE_SIZE, DEFAULT_VIEWER_BASE_URL};
use roster_core::{CoreConfig, RosterSession, RosterView};
use roster_types::PageSize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use view::TextView;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Patient roster: record list and dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records in a bundle, filtered and paginated
    List {
        /// Path to the record bundle JSON
        bundle: PathBuf,
        /// Free-text search over family and given names (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Family name to select, as shown by `options` (exact match)
        #[arg(long)]
        family: Option<String>,
        /// Page to show (1-indexed)
        #[arg(long)]
        page: Option<usize>,
        /// Records per page (overrides ROSTER_PAGE_SIZE)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Print the filter options derived from a bundle
    Options {
        /// Path to the record bundle JSON
        bundle: PathBuf,
    },
    /// Resolve a record to its external viewer URL
    Select {
        /// Path to the record bundle JSON
        bundle: PathBuf,
        /// Record identifier, as shown in the list's ID column
        id: String,
    },
    /// Render a dashboard patient payload
    Dashboard {
        /// Path to the dashboard patient JSON
        patient: PathBuf,
        /// Which tab to render after the info panel
        #[arg(long, value_enum, default_value = "vitals")]
        tab: Tab,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Tab {
    Vitals,
    Timeline,
    Treatments,
    Appointments,
}

/// Resolve configuration once at startup.
///
/// `ROSTER_PAGE_SIZE` and `ROSTER_VIEWER_URL` come from the environment (or a
/// `.env` file); a `--page-size` flag wins over the environment.
fn config_from_env(page_size_override: Option<usize>) -> anyhow::Result<CoreConfig> {
    let page_size = match page_size_override {
        Some(value) => value,
        None => match std::env::var("ROSTER_PAGE_SIZE") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_PAGE_SIZE,
        },
    };

    let viewer_base_url =
        std::env::var("ROSTER_VIEWER_URL").unwrap_or_else(|_| DEFAULT_VIEWER_BASE_URL.into());

    Ok(CoreConfig::new(PageSize::new(page_size)?, viewer_base_url)?)
}

/// Load a bundle, rendering any failure as a message through the view.
///
/// Returns `None` after rendering: an unreadable, malformed, or empty bundle
/// is a terminal presentation state, not a process failure.
fn load_or_render<W: std::io::Write>(
    path: &Path,
    view: &mut TextView<W>,
) -> Option<Vec<roster_bundle::RecordEntry>> {
    match Bundle::load(path) {
        Ok(entries) => Some(entries),
        Err(err @ BundleError::EmptyBundle) => {
            view.render_message(&err.to_string());
            None
        }
        Err(err) => {
            view.render_message(&format!("Error loading data: {err}"));
            None
        }
    }
}

fn run_list(
    bundle: &Path,
    search: Option<String>,
    family: Option<String>,
    page: Option<usize>,
    config: &CoreConfig,
) {
    let mut view = TextView::new(std::io::stdout());

    let Some(entries) = load_or_render(bundle, &mut view) else {
        return;
    };

    let mut session = RosterSession::new(entries, config.page_size());
    if let Some(term) = search {
        session.set_search_term(term);
    }
    if let Some(family) = family {
        session.set_selected_family(family);
    }
    if let Some(page) = page {
        session.select_page(page);
    }

    session.present(&mut view);
}

fn run_options(bundle: &Path) {
    let mut view = TextView::new(std::io::stdout());

    let Some(entries) = load_or_render(bundle, &mut view) else {
        return;
    };

    let session = RosterSession::new(entries, CoreConfig::default_config().page_size());
    let options = session.filter_options();
    if options.is_empty() {
        println!("(no filter options)");
        return;
    }
    for option in options {
        println!("{option}");
    }
}

fn run_select(bundle: &Path, id: &str, config: &CoreConfig) {
    let mut view = TextView::new(std::io::stdout());

    let Some(entries) = load_or_render(bundle, &mut view) else {
        return;
    };

    let session = RosterSession::new(entries, config.page_size());
    match session.record(id) {
        Some(entry) => {
            let name = entry.display_name();
            tracing::info!(
                "Selected patient: {}, {} (ID: {})",
                name.family,
                name.given,
                entry.id
            );
            println!("{}", config.viewer_url_for(&entry.id));
        }
        None => {
            view.render_message(&format!("No record with id {id}"));
        }
    }
}

fn run_dashboard(patient_path: &Path, tab: Tab) -> anyhow::Result<()> {
    let patient = match Dashboard::load(patient_path) {
        Ok(patient) => patient,
        Err(err) => {
            // Same recovery as the list: message in place of the dashboard.
            println!("Failed to load patient data: {err}");
            return Ok(());
        }
    };

    let mut out = std::io::stdout();
    dashboard::render_overview(&mut out, &patient)?;
    println!();
    match tab {
        Tab::Vitals => dashboard::render_vitals(&mut out, &patient)?,
        Tab::Timeline => dashboard::render_timeline(&mut out, &patient)?,
        Tab::Treatments => dashboard::render_treatments(&mut out, &patient)?,
        Tab::Appointments => dashboard::render_appointments(&mut out, &patient)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            bundle,
            search,
            family,
            page,
            page_size,
        } => {
            let config = config_from_env(page_size)?;
            run_list(&bundle, search, family, page, &config);
        }
        Commands::Options { bundle } => {
            run_options(&bundle);
        }
        Commands::Select { bundle, id } => {
            let config = config_from_env(None)?;
            run_select(&bundle, &id, &config);
        }
        Commands::Dashboard { patient, tab } => {
            run_dashboard(&patient, tab)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_flag_overrides_environment() {
        let config = config_from_env(Some(7)).expect("valid override");
        assert_eq!(config.page_size().get(), 7);
    }

    #[test]
    fn zero_page_size_override_is_rejected() {
        assert!(config_from_env(Some(0)).is_err());
    }

    #[test]
    fn load_failures_render_a_message_instead_of_a_table() {
        let dir = tempfile::tempdir().expect("create temp dir");

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, r#"{ "entry": [] }"#).expect("write fixture");
        let mut view = TextView::new(Vec::new());
        assert!(load_or_render(&empty, &mut view).is_none());
        let output = String::from_utf8(view.into_inner()).expect("utf8 output");
        assert_eq!(output, "No patient data available\n");

        let malformed = dir.path().join("malformed.json");
        std::fs::write(&malformed, "{ not json").expect("write fixture");
        let mut view = TextView::new(Vec::new());
        assert!(load_or_render(&malformed, &mut view).is_none());
        let output = String::from_utf8(view.into_inner()).expect("utf8 output");
        assert!(output.starts_with("Error loading data:"));
    }

    #[test]
    fn loads_a_valid_bundle() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bundle.json");
        std::fs::write(
            &path,
            r#"{ "entry": [ { "fullUrl": "x/1", "resource": { "name": [] } } ] }"#,
        )
        .expect("write fixture");

        let mut view = TextView::new(Vec::new());
        let entries = load_or_render(&path, &mut view).expect("bundle loads");
        assert_eq!(entries.len(), 1);
    }
}
