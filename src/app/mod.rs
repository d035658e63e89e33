//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in folio::model)
//! - Logic (pure presentation logic in folio::logic)
//! - Background image decoding and external commands
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod actions;
pub(crate) mod images;
pub(crate) mod scroll;
