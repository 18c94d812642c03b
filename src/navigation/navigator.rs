use crossterm::event::{KeyCode, KeyModifiers};

use crate::input::{Action, KeyConfig};
use crate::logging;
use crate::navigation::types::{Direction, DisplaySurface, NavigationError, NavigationResult};

/// Clicks left of this fraction of the page width go back a page.
pub const CLICK_PREVIOUS_THRESHOLD: f64 = 0.4;

/// Maps the horizontal click ratio inside a page to a page direction.
pub fn click_direction(ratio: f64) -> Direction {
    if ratio < CLICK_PREVIOUS_THRESHOLD {
        Direction::Previous
    } else {
        Direction::Next
    }
}

/// Owns the current page index and drives a `DisplaySurface`.
///
/// Exactly one panel is visible and exactly one tab is active after every
/// successful `show_page`, and both sit at `current()`.
#[derive(Debug)]
pub struct PageNavigator<S: DisplaySurface> {
    surface: S,
    current: usize,
}

impl<S: DisplaySurface> PageNavigator<S> {
    /// Wraps a surface without touching it. Use `start` to show the first page.
    pub fn new(surface: S) -> NavigationResult<Self> {
        let pages = surface.page_count();
        let tabs = surface.tab_count();
        if pages != tabs {
            return Err(NavigationError::TabMismatch { pages, tabs });
        }
        if pages == 0 {
            return Err(NavigationError::Empty);
        }
        Ok(Self {
            surface,
            current: 0,
        })
    }

    /// Wraps a surface and shows page 0.
    pub fn start(surface: S) -> NavigationResult<Self> {
        let mut navigator = Self::new(surface)?;
        navigator.show_page(0)?;
        Ok(navigator)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.surface.page_count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Shows the page at `index`, hiding every other page and tab.
    ///
    /// An out-of-range index is rejected before the surface is touched, so the
    /// previously visible page stays on screen.
    pub fn show_page(&mut self, index: usize) -> NavigationResult<()> {
        let count = self.surface.page_count();
        if index >= count {
            return Err(NavigationError::PageOutOfRange {
                index: index as isize,
                count,
            });
        }

        for i in 0..count {
            self.surface.deactivate(i);
        }
        self.surface.activate(index);
        self.surface.scroll_to_top();

        logging::page_shown(index, count);
        self.current = index;
        Ok(())
    }

    /// Moves `delta` pages from the current one and returns the new index.
    ///
    /// Past the last page wraps to 0 and before the first wraps to the last.
    /// The wrap is a single snap to the opposite end rather than a modulo, so
    /// deltas of magnitude N or more are not normalised.
    ///
    /// A sum that overflows `isize` can only come from a positive delta and
    /// counts as past the last page.
    pub fn advance(&mut self, delta: isize) -> NavigationResult<usize> {
        let count = self.surface.page_count();
        let next = match isize::try_from(self.current)
            .ok()
            .and_then(|current| current.checked_add(delta))
        {
            Some(next) if next < 0 => count.saturating_sub(1),
            Some(next) if (next as usize) < count => next as usize,
            _ => 0,
        };

        self.show_page(next)?;
        Ok(self.current)
    }

    pub fn next_page(&mut self) -> NavigationResult<usize> {
        self.advance(Direction::Next.delta())
    }

    pub fn previous_page(&mut self) -> NavigationResult<usize> {
        self.advance(Direction::Previous.delta())
    }

    pub fn first_page(&mut self) -> NavigationResult<()> {
        self.show_page(0)
    }

    pub fn last_page(&mut self) -> NavigationResult<()> {
        let last = self.surface.page_count().saturating_sub(1);
        self.show_page(last)
    }

    pub fn scroll(&mut self, delta: i32) {
        self.surface.scroll_by(delta);
    }

    /// Applies a navigation action. Actions the navigator does not own
    /// (quitting) pass through untouched.
    pub fn apply(&mut self, action: Action, keymap: &KeyConfig) -> NavigationResult<()> {
        match action {
            Action::Page(direction) => self.advance(direction.delta()).map(|_| ()),
            Action::FirstPage => self.first_page(),
            Action::LastPage => self.last_page(),
            Action::ScrollUp => {
                self.scroll(-i32::from(keymap.scroll_amount));
                Ok(())
            }
            Action::ScrollDown => {
                self.scroll(i32::from(keymap.scroll_amount));
                Ok(())
            }
            Action::PageScrollUp => {
                self.scroll(-i32::from(keymap.page_scroll_amount));
                Ok(())
            }
            Action::PageScrollDown => {
                self.scroll(i32::from(keymap.page_scroll_amount));
                Ok(())
            }
            Action::Quit => Ok(()),
        }
    }

    /// Maps a key press through `keymap` and applies the result.
    ///
    /// Returns the matched action so the host can react to the ones it owns.
    pub fn dispatch_key(
        &mut self,
        keymap: &KeyConfig,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> NavigationResult<Option<Action>> {
        let Some(action) = keymap.get_action(code, modifiers) else {
            return Ok(None);
        };
        self.apply(action, keymap)?;
        Ok(Some(action))
    }

    /// Handles a click `offset_x` columns into a page that is `width` wide.
    pub fn dispatch_pointer_click(&mut self, offset_x: u16, width: u16) -> NavigationResult<usize> {
        let direction = if width == 0 {
            Direction::Next
        } else {
            click_direction(f64::from(offset_x) / f64::from(width))
        };
        self.advance(direction.delta())
    }
}
