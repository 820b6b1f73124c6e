//! Core logic for the specimen entry and comparison tool.
//! Session store, form validation and display projections live here; widget
//! rendering and session hosting belong to callers.

pub mod form;
pub mod logging;
pub mod model;
pub mod projection;
pub mod session;
pub mod store;

pub use form::placeholder::{project_placeholder, project_placeholder_with};
pub use form::validator::{
    parse_decimal, validate_submission, FormError, FormResult, RawSubmission, SubmissionField,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::record::{Material, NewRecord, Record, RecordId, ALL_MATERIALS};
pub use projection::plot::{
    project_plot, PlotPoint, PlotView, EMPTY_PLOT_MESSAGE, PLOT_TITLE,
    STEEL_PLACEHOLDER_STRENGTH_MPA, X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use projection::table::{project_table, DisplayRow, TABLE_COLUMNS};
pub use projection::trend::{trend_lines, TrendLine};
pub use session::identity::SessionIdentity;
pub use session::registry::{
    parse_session_key, RegistryResult, SessionKey, SessionRegistry, SessionRegistryError,
};
pub use session::{Reaction, Session, SessionViews, SubmissionOutcome};
pub use store::session_store::{SessionStore, Snapshot};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
