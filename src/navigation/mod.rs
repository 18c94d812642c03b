pub mod navigator;
pub mod types;

pub use navigator::{click_direction, PageNavigator, CLICK_PREVIOUS_THRESHOLD};
pub use types::*;
