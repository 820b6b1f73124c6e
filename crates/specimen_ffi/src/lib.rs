//! Flutter-facing bridge over `specimen_core`.

pub mod api;
