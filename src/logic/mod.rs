//! Presentation Logic
//!
//! This module contains pure functions and small state machines that can be unit tested:
//! - contact: Contact entry and link construction
//! - layout: Project image layout selection
//! - navigation: Scroll offset calculations
//! - page: Section stacking and viewport geometry
//! - sections: Active-section tracking from viewport geometry
//! - skills: Skills tab cycling and grid sizing
//! - ui: Toast timing and styling rules

pub mod contact;
pub mod layout;
pub mod navigation;
pub mod page;
pub mod sections;
pub mod skills;
pub mod ui;
