use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::navigation::Direction;

/// Represents all possible actions in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance one page with wraparound.
    Page(Direction),
    FirstPage,
    LastPage,
    ScrollUp,
    ScrollDown,
    PageScrollUp,
    PageScrollDown,
    Quit,
}

/// Defines the key configuration for different actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Key for the previous page.
    pub prev_page_key: char,  // Default: 'a'
    /// Key for the next page.
    pub next_page_key: char,  // Default: 'd'
    /// Key for scrolling the page up.
    pub scroll_up_key: char,  // Default: 'w'
    /// Key for scrolling the page down.
    pub scroll_down_key: char, // Default: 's'
    /// Key to leave the viewer.
    pub quit_key: char,       // Default: 'q'

    /// Rows moved by the scroll keys.
    pub scroll_amount: u16,
    /// Rows moved by PageUp/PageDown.
    pub page_scroll_amount: u16,
}

impl Default for KeyConfig {
    /// Returns the default key configuration (WASD-style paging).
    fn default() -> Self {
        Self {
            prev_page_key: 'a',
            next_page_key: 'd',
            scroll_up_key: 'w',
            scroll_down_key: 's',
            quit_key: 'q',

            scroll_amount: 3,
            page_scroll_amount: 20,
        }
    }
}

/// Lowercases a key. Characters whose lowercase form is several characters
/// long are kept as they are.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl KeyConfig {
    /// Maps a key event to an `Action` based on the current key configuration.
    ///
    /// Letter keys match case-insensitively, so Shift does not change the
    /// action. Control and Alt chords are left to the terminal.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match code {
            KeyCode::Char(c) => {
                let c = fold_case(c);
                match c {
                    c if c == fold_case(self.prev_page_key) => {
                        Some(Action::Page(Direction::Previous))
                    }
                    c if c == fold_case(self.next_page_key) => Some(Action::Page(Direction::Next)),
                    c if c == fold_case(self.scroll_up_key) => Some(Action::ScrollUp),
                    c if c == fold_case(self.scroll_down_key) => Some(Action::ScrollDown),
                    c if c == fold_case(self.quit_key) => Some(Action::Quit),
                    _ => None,
                }
            }
            KeyCode::Left => Some(Action::Page(Direction::Previous)),
            KeyCode::Right => Some(Action::Page(Direction::Next)),
            KeyCode::Home => Some(Action::FirstPage),
            KeyCode::End => Some(Action::LastPage),
            KeyCode::PageUp => Some(Action::PageScrollUp),
            KeyCode::PageDown => Some(Action::PageScrollDown),
            KeyCode::Esc => Some(Action::Quit),
            _ => None, // No action for other keys
        }
    }
}
