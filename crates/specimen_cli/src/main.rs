//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `specimen_core` linkage with a deterministic probe.
//! - Replay `;`-separated text submissions from stdin through one session.
//!
//! Input line shape: `project;material;strength;load;latitude;longitude`.
//! Blank lines and lines starting with `#` are skipped.

use specimen_core::{
    default_log_level, init_logging, FormError, PlotView, RawSubmission, Session, PLOT_TITLE,
    TABLE_COLUMNS, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use std::io::{self, BufRead};

const LOG_DIR_ENV: &str = "SPECIMEN_LOG_DIR";
const LOG_LEVEL_ENV: &str = "SPECIMEN_LOG_LEVEL";
const FIELD_SEPARATOR: char = ';';

fn main() {
    println!("specimen_core ping={}", specimen_core::ping());
    println!("specimen_core version={}", specimen_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut session = Session::new();
    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("stdin read failed: {err}");
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(raw) => {
                let reaction = session.react(&raw);
                println!("line {}: {}", index + 1, reaction.outcome.message());
            }
            Err(err) => println!("line {}: Rejected submission: {err}.", index + 1),
        }
    }

    print_views(&session);
}

fn parse_line(line: &str) -> Result<RawSubmission, FormError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let field = |idx: usize| fields.get(idx).copied().unwrap_or("");
    RawSubmission::from_text(
        field(0),
        field(1),
        field(2),
        field(3),
        field(4),
        field(5),
    )
}

fn print_views(session: &Session) {
    let views = session.views();
    println!("{}", views.status);
    println!("{}", TABLE_COLUMNS.join(" | "));
    for row in &views.rows {
        println!("{}", row.cells().join(" | "));
    }
    println!("plot: {PLOT_TITLE} (x={X_AXIS_LABEL}, y={Y_AXIS_LABEL})");
    match &views.plot {
        PlotView::Empty => println!("plot: {}", specimen_core::EMPTY_PLOT_MESSAGE),
        PlotView::Points { points } => {
            for point in points {
                println!(
                    "plot: {} strength={} load={}",
                    point.material, point.effective_strength, point.max_load_kn
                );
            }
        }
    }
}
