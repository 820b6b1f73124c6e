//! Session lifecycle and the submission pipeline.
//!
//! # Responsibility
//! - Own one store and one identity for the lifetime of a user session.
//! - Run validate -> append -> re-project for each submission.
//! - Expose a version counter so hosts can pull fresh views after a change.
//!
//! # Invariants
//! - `version` increments exactly once per accepted submission.
//! - Rejected submissions leave store and version untouched.
//! - `SessionViews` are always computed from one snapshot.

pub mod identity;
pub mod registry;

use crate::form::placeholder::project_placeholder;
use crate::form::validator::{validate_submission, FormError, RawSubmission};
use crate::model::record::Record;
use crate::projection::plot::{project_plot, PlotView};
use crate::projection::table::{project_table, DisplayRow};
use crate::store::session_store::{SessionStore, Snapshot};
use identity::SessionIdentity;
use log::{debug, info, warn};

/// Outcome of one form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted {
        record: Record,
        /// Session version after the append.
        version: u64,
        /// Fresh project name for the reset form.
        next_project_placeholder: String,
    },
    Rejected(FormError),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// User-facing confirmation or rejection notice.
    pub fn message(&self) -> String {
        match self {
            Self::Accepted { record, .. } => {
                format!("Saved sample for project '{}'.", record.project_name)
            }
            Self::Rejected(err) => {
                format!("Rejected submission: invalid value for {}.", err.field())
            }
        }
    }
}

/// Status line, table and plot computed from a single snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionViews {
    /// Session version the views were computed from.
    pub source_version: u64,
    pub status: String,
    pub rows: Vec<DisplayRow>,
    pub plot: PlotView,
}

impl SessionViews {
    /// Whether the session changed since these views were computed.
    pub fn is_stale(&self, current_version: u64) -> bool {
        self.source_version != current_version
    }
}

/// Submission outcome paired with the views refreshed in the same reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub outcome: SubmissionOutcome,
    pub views: SessionViews,
}

/// One user's session: store, identity and change counter.
#[derive(Debug)]
pub struct Session {
    identity: SessionIdentity,
    store: SessionStore,
    version: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session with a freshly drawn identity and an empty store.
    pub fn new() -> Self {
        Self::with_identity(SessionIdentity::generate())
    }

    pub fn with_identity(identity: SessionIdentity) -> Self {
        info!(
            "event=session_start module=session status=ok identity={}",
            identity
        );
        Self {
            identity,
            store: SessionStore::new(),
            version: 0,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Validates and appends one submission.
    ///
    /// Never touches the store when validation fails.
    pub fn submit(&mut self, raw: &RawSubmission) -> SubmissionOutcome {
        let new_record = match validate_submission(raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "event=submission module=session status=rejected identity={} field={}",
                    self.identity,
                    err.field()
                );
                return SubmissionOutcome::Rejected(err);
            }
        };

        let record = self.store.append(new_record);
        self.version += 1;
        info!(
            "event=submission module=session status=ok identity={} record_id={} material={} name_len={} version={}",
            self.identity,
            record.id,
            record.material,
            record.project_name.chars().count(),
            self.version
        );

        SubmissionOutcome::Accepted {
            record,
            version: self.version,
            next_project_placeholder: project_placeholder(),
        }
    }

    /// Submits and re-projects before anything is handed back to the host.
    pub fn react(&mut self, raw: &RawSubmission) -> Reaction {
        let outcome = self.submit(raw);
        let views = self.views();
        Reaction { outcome, views }
    }

    /// `Session ID: <identity> | Entry count: <count>`.
    pub fn status_text(&self) -> String {
        status_line(&self.identity, self.store.count())
    }

    /// Recomputes every view from the current snapshot.
    pub fn views(&self) -> SessionViews {
        let snapshot = self.store.snapshot();
        let views = SessionViews {
            source_version: self.version,
            status: status_line(&self.identity, snapshot.len()),
            rows: project_table(&snapshot),
            plot: project_plot(&snapshot),
        };
        debug!(
            "event=views_refresh module=session status=ok identity={} version={} rows={} points={}",
            self.identity,
            self.version,
            views.rows.len(),
            views.plot.points().len()
        );
        views
    }
}

fn status_line(identity: &SessionIdentity, count: usize) -> String {
    format!("Session ID: {identity} | Entry count: {count}")
}
