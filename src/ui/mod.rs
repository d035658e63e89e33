// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (nav bar, page viewport, legend)
// - render: Main orchestration function that coordinates all rendering
// - page: Draws the sections offscreen and copies the visible rows
// - hero, skills, projects, experience, contact: One module per section
// - nav_bar: Renders the fixed navigation bar with the current section
// - menu: Renders the section menu popup
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod contact;
pub mod experience;
pub mod hero;
pub mod layout;
pub mod legend;
pub mod menu;
pub mod nav_bar;
pub mod page;
pub mod projects;
pub mod render;
pub mod skills;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
