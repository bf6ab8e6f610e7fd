pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_matches, parse_selection, prompt_browse_mode, prompt_choice, prompt_meal_selection,
    prompt_search, prompt_yes_no, BrowseMode,
};
pub use render::{display_item_details, display_menu, display_numbered, display_totals};
