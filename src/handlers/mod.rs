//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - mouse: Wheel scrolling
//!
//! Handlers are methods-by-proxy: they take &mut App and dispatch to its
//! scroll and action methods.

pub mod keyboard;
pub mod mouse;
