//! Folio Library
//!
//! Exposes the portfolio data model and the pure presentation logic for testing

pub mod error;
pub mod logic;
pub mod model;
pub mod portfolio;

pub use error::{PortfolioError, Result};
pub use logic::layout::{select_layout, Alignment, LayoutPlan, LayoutVariant};
pub use logic::sections::{ActiveSectionTracker, SectionBounds, SectionGeometry, SectionId};
pub use portfolio::PortfolioData;
