//! Widgets composed by the picker's draw pass.

pub mod badges;
pub mod output;
pub mod prompt;
pub mod suggestions;

pub use badges::{BadgeSlot, badge_rows, layout_badges, render_badges};
pub use output::{ButtonAreas, OutputContext, max_scroll, render_buttons, render_output};
pub use prompt::{PromptContext, ProgressState, render_prompt};
pub use suggestions::render_suggestions;
