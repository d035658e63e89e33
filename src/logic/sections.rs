//! Active-section tracking
//!
//! Decides which page section the navigation bar highlights. On every scroll
//! notification the host's viewport geometry is probed with a fixed line near
//! the top of the viewport; the first section (in page order) straddling that
//! line becomes current. When nothing straddles it the previous section stays
//! current.

use std::fmt;
use tokio::sync::watch;

use crate::error::{PortfolioError, Result};

/// Distance of the probe line from the viewport top, in geometry units
pub const PROBE_LINE: i32 = 100;

/// Named anchor regions of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Fixed page order. Earlier sections win probe ties.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    /// Section for a 1-based hotkey number (`1` = home)
    pub fn from_hotkey(number: u32) -> Option<Self> {
        (number as usize)
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Zero-based position in page order
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|id| id == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section's extent relative to the viewport top, in geometry units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: i32,
    pub bottom: i32,
}

impl SectionBounds {
    /// Whether the section straddles the probe line (both edges inclusive)
    pub fn contains_probe(&self, probe: i32) -> bool {
        self.top <= probe && self.bottom >= probe
    }
}

/// Host viewport API: reports where each section currently sits
pub trait SectionGeometry {
    /// Bounds of `id` relative to the viewport, or `MissingElement` if the
    /// section is not on the page
    fn section_bounds(&self, id: SectionId) -> Result<SectionBounds>;
}

/// Find the first section in `order` whose bounds contain the probe line
///
/// Sections the host cannot report geometry for are skipped.
///
/// # Arguments
/// * `geometry` - Host viewport geometry
/// * `order` - Candidate sections; earlier entries win ties
///
/// # Returns
/// * `Some(id)` - First section straddling `PROBE_LINE`
/// * `None` - If no section straddles it
pub fn find_active_section<G>(geometry: &G, order: &[SectionId]) -> Option<SectionId>
where
    G: SectionGeometry + ?Sized,
{
    order.iter().copied().find(|&id| match geometry.section_bounds(id) {
        Ok(bounds) => bounds.contains_probe(PROBE_LINE),
        Err(PortfolioError::MissingElement(_)) => {
            tracing::trace!(section = %id, "section_geometry_missing");
            false
        }
        Err(e) => {
            tracing::warn!(section = %id, error = %e, "section_geometry_failed");
            false
        }
    })
}

/// Owns the current section. Only the tracker writes it; readers observe it
/// through `subscribe()`.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    current: watch::Sender<SectionId>,
}

impl ActiveSectionTracker {
    /// Start at the first section before any scroll has been observed
    pub fn new() -> Self {
        Self {
            current: watch::Sender::new(SectionId::Home),
        }
    }

    pub fn current(&self) -> SectionId {
        *self.current.borrow()
    }

    /// Observe changes to the current section
    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.current.subscribe()
    }

    /// Recompute the current section for one scroll notification
    ///
    /// Subscribers are only notified when the section actually changes. When no
    /// section straddles the probe line the previous value is kept.
    pub fn on_scroll<G>(&mut self, geometry: &G) -> SectionId
    where
        G: SectionGeometry + ?Sized,
    {
        if let Some(found) = find_active_section(geometry, &SectionId::ALL) {
            self.current.send_if_modified(|current| {
                if *current == found {
                    return false;
                }
                tracing::debug!(from = %current, to = %found, "active_section_changed");
                *current = found;
                true
            });
        }
        self.current()
    }
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
