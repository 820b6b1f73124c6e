//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose session, submission and view functions to Dart via FRB.
//! - Flatten core types into plain strings and numbers for the UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every session opened here is isolated from every other session.
//! - A submit response is only produced after views were re-projected.

use log::warn;
use once_cell::sync::Lazy;
use specimen_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_session_key,
    ping as ping_inner, project_placeholder, trend_lines, PlotView, RawSubmission, Reaction,
    SessionRegistry, SessionViews, SubmissionOutcome, ALL_MATERIALS, EMPTY_PLOT_MESSAGE,
    PLOT_TITLE, TABLE_COLUMNS, X_AXIS_LABEL, Y_AXIS_LABEL,
};

static SESSIONS: Lazy<SessionRegistry> = Lazy::new(SessionRegistry::new);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initial values for a freshly opened entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub project_name: String,
    pub material: String,
    /// Material labels in dropdown order.
    pub materials: Vec<String>,
    pub concrete_strength_mpa: f64,
    pub max_load_kn: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    pub ok: bool,
    /// Confirmation or rejection notice for the UI.
    pub message: String,
    pub record_id: Option<u64>,
    /// Wire name of the rejected field.
    pub invalid_field: Option<String>,
    /// Project name to put back into the form after success.
    pub next_project_name: Option<String>,
    /// Views refreshed in the same call as the submission.
    pub views: SessionViewsResponse,
}

/// One scatter point.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPlotPoint {
    pub effective_strength: f64,
    pub max_load_kn: f64,
    pub material: String,
}

/// One fitted line segment for a material series.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryTrendLine {
    pub material: String,
    pub start_strength: f64,
    pub start_load: f64,
    pub end_strength: f64,
    pub end_load: f64,
}

/// Status, table and chart content for one session version.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionViewsResponse {
    pub ok: bool,
    /// Error detail when `ok == false`; empty otherwise.
    pub message: String,
    pub version: u64,
    pub status: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub plot_title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub plot_points: Vec<EntryPlotPoint>,
    /// Placeholder text shown instead of the chart when set.
    pub plot_message: Option<String>,
    pub trend_lines: Vec<EntryTrendLine>,
}

impl SessionViewsResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            version: 0,
            status: String::new(),
            columns: table_columns(),
            rows: Vec::new(),
            plot_title: PLOT_TITLE.to_string(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            plot_points: Vec::new(),
            plot_message: None,
            trend_lines: Vec::new(),
        }
    }
}

impl From<SessionViews> for SessionViewsResponse {
    fn from(views: SessionViews) -> Self {
        let lines = trend_lines(views.plot.points())
            .into_iter()
            .map(|line| EntryTrendLine {
                material: line.material.label().to_string(),
                start_strength: line.min_strength,
                start_load: line.load_at(line.min_strength),
                end_strength: line.max_strength,
                end_load: line.load_at(line.max_strength),
            })
            .collect();
        let plot_message = match &views.plot {
            PlotView::Empty => Some(EMPTY_PLOT_MESSAGE.to_string()),
            PlotView::Points { .. } => None,
        };

        Self {
            ok: true,
            message: String::new(),
            version: views.source_version,
            status: views.status,
            columns: table_columns(),
            rows: views.rows.iter().map(|row| row.cells().to_vec()).collect(),
            plot_title: PLOT_TITLE.to_string(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            plot_points: views
                .plot
                .points()
                .iter()
                .map(|point| EntryPlotPoint {
                    effective_strength: point.effective_strength,
                    max_load_kn: point.max_load_kn,
                    material: point.material.label().to_string(),
                })
                .collect(),
            plot_message,
            trend_lines: lines,
        }
    }
}

/// Returns initial form values with a fresh project placeholder.
#[flutter_rust_bridge::frb(sync)]
pub fn form_defaults() -> FormDefaults {
    let raw = RawSubmission::default_form(project_placeholder());
    FormDefaults {
        project_name: raw.project_name,
        material: raw.material,
        materials: ALL_MATERIALS
            .iter()
            .map(|material| material.label().to_string())
            .collect(),
        concrete_strength_mpa: raw.concrete_strength_mpa,
        max_load_kn: raw.max_load_kn,
        latitude: raw.latitude,
        longitude: raw.longitude,
    }
}

/// Starts an isolated session and returns its key.
#[flutter_rust_bridge::frb(sync)]
pub fn session_open() -> String {
    SESSIONS.open().to_string()
}

/// Ends a session. Returns `false` when the key is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn session_close(session_key: String) -> bool {
    match parse_session_key(session_key.as_str()) {
        Ok(key) => SESSIONS.close(key),
        Err(err) => {
            warn!("event=session_close module=ffi status=error error={err}");
            false
        }
    }
}

/// Validates and stores one sample, then returns refreshed views.
///
/// # FFI contract
/// - Never panics.
/// - `ok == false` with `invalid_field` set for rejected input.
/// - `ok == false` without `invalid_field` for unknown sessions.
#[flutter_rust_bridge::frb(sync)]
pub fn session_submit(
    session_key: String,
    project_name: String,
    material: String,
    concrete_strength_mpa: f64,
    max_load_kn: f64,
    latitude: f64,
    longitude: f64,
) -> SubmitResponse {
    let raw = RawSubmission {
        project_name,
        material,
        concrete_strength_mpa,
        max_load_kn,
        latitude,
        longitude,
    };

    let reaction = parse_session_key(session_key.as_str())
        .and_then(|key| SESSIONS.with_session(key, |session| session.react(&raw)));

    match reaction {
        Ok(Reaction { outcome, views }) => to_submit_response(outcome, views),
        Err(err) => {
            let message = format!("session_submit failed: {err}");
            SubmitResponse {
                ok: false,
                message: message.clone(),
                record_id: None,
                invalid_field: None,
                next_project_name: None,
                views: SessionViewsResponse::failure(message),
            }
        }
    }
}

/// Pulls current views, e.g. on initial load.
#[flutter_rust_bridge::frb(sync)]
pub fn session_views(session_key: String) -> SessionViewsResponse {
    match parse_session_key(session_key.as_str())
        .and_then(|key| SESSIONS.with_session(key, |session| session.views()))
    {
        Ok(views) => views.into(),
        Err(err) => SessionViewsResponse::failure(format!("session_views failed: {err}")),
    }
}

fn to_submit_response(outcome: SubmissionOutcome, views: SessionViews) -> SubmitResponse {
    let message = outcome.message();
    match outcome {
        SubmissionOutcome::Accepted {
            record,
            next_project_placeholder,
            ..
        } => SubmitResponse {
            ok: true,
            message,
            record_id: Some(record.id),
            invalid_field: None,
            next_project_name: Some(next_project_placeholder),
            views: views.into(),
        },
        SubmissionOutcome::Rejected(err) => SubmitResponse {
            ok: false,
            message,
            record_id: None,
            invalid_field: Some(err.field().as_str().to_string()),
            next_project_name: None,
            views: views.into(),
        },
    }
}

fn table_columns() -> Vec<String> {
    TABLE_COLUMNS.iter().map(|label| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, form_defaults, init_logging, ping, session_close, session_open,
        session_submit, session_views,
    };

    fn submit(
        key: &str,
        name: &str,
        material: &str,
        strength: f64,
        load: f64,
    ) -> super::SubmitResponse {
        session_submit(
            key.to_string(),
            name.to_string(),
            material.to_string(),
            strength,
            load,
            48.85,
            2.35,
        )
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/specimen-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn form_defaults_offer_all_materials_and_placeholder() {
        let defaults = form_defaults();
        assert!(defaults.project_name.starts_with("P-"));
        assert_eq!(defaults.material, "Reinforced Concrete");
        assert_eq!(defaults.materials.len(), 5);
        assert_eq!(defaults.concrete_strength_mpa, 30.0);
        assert_eq!(defaults.max_load_kn, 500.0);
    }

    #[test]
    fn new_session_views_show_empty_placeholder() {
        let key = session_open();
        let views = session_views(key.clone());
        assert!(views.ok, "{}", views.message);
        assert!(views.rows.is_empty());
        assert!(views.plot_points.is_empty());
        assert!(views.plot_message.is_some());
        assert!(views.status.ends_with("| Entry count: 0"));
        assert_eq!(views.columns[0], "ID");
        assert_eq!(views.plot_title, "Material Strength vs. Load");
        assert_eq!(views.x_axis_label, "Strength (MPa)");
        assert_eq!(views.y_axis_label, "Load (kN)");
        assert!(session_close(key));
    }

    #[test]
    fn accepted_submit_returns_refreshed_views() {
        let key = session_open();
        let response = submit(&key, "Pont-Nord-01", "Reinforced Concrete", 35.0, 600.0);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.record_id, Some(1));
        assert_eq!(response.message, "Saved sample for project 'Pont-Nord-01'.");
        assert!(response
            .next_project_name
            .as_deref()
            .unwrap_or("")
            .starts_with("P-"));
        assert_eq!(response.views.version, 1);
        assert_eq!(response.views.rows.len(), 1);
        assert_eq!(response.views.rows[0][1], "Pont-Nord-01");
        assert_eq!(response.views.plot_points.len(), 1);
        assert_eq!(response.views.plot_message, None);
        assert!(session_close(key));
    }

    #[test]
    fn rejected_submit_names_field_and_keeps_views() {
        let key = session_open();
        let response = submit(&key, "Pont-Nord-01", "Reinforced Concrete", 200.0, 600.0);
        assert!(!response.ok);
        assert_eq!(response.invalid_field.as_deref(), Some("concreteStrengthMPa"));
        assert_eq!(response.views.version, 0);
        assert!(response.views.rows.is_empty());
        assert!(session_close(key));
    }

    #[test]
    fn trend_lines_follow_concrete_series() {
        let key = session_open();
        submit(&key, "a", "Reinforced Concrete", 20.0, 100.0);
        let response = submit(&key, "b", "Reinforced Concrete", 40.0, 300.0);
        let lines = &response.views.trend_lines;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].material, "Reinforced Concrete");
        assert!((lines[0].start_load - 100.0).abs() < 1e-9);
        assert!((lines[0].end_load - 300.0).abs() < 1e-9);
        assert!(session_close(key));
    }

    #[test]
    fn unknown_or_closed_sessions_fail_without_panicking() {
        let response = submit("not-a-key", "a", "Masonry", 20.0, 1.0);
        assert!(!response.ok);
        assert!(response.message.contains("invalid session key"));

        let key = session_open();
        assert!(session_close(key.clone()));
        let views = session_views(key.clone());
        assert!(!views.ok);
        assert!(views.message.contains("session not found"));
        assert!(!session_close(key));
    }
}
