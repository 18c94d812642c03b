use std::error::Error;
use std::fmt;

/// Horizontal direction of a page change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed step passed to `PageNavigator::advance`.
    pub fn delta(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// A display surface the navigator can drive.
///
/// Panels and tabs are owned by the host; the navigator only toggles their
/// active markers and moves the viewport. Both collections are index-aligned.
pub trait DisplaySurface {
    /// Number of page panels.
    fn page_count(&self) -> usize;

    /// Number of tab controls.
    fn tab_count(&self) -> usize;

    /// Show the panel at `index` and mark its tab active.
    fn activate(&mut self, index: usize);

    /// Hide the panel at `index` and clear its tab marker.
    fn deactivate(&mut self, index: usize);

    /// Reset the viewport to the top of the page.
    fn scroll_to_top(&mut self);

    /// Move the viewport by `delta` rows (negative scrolls up).
    fn scroll_by(&mut self, delta: i32);
}

/// Errors raised by page navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Requested page does not exist
    PageOutOfRange { index: isize, count: usize },

    /// Tabs and pages are not index-aligned
    TabMismatch { pages: usize, tabs: usize },

    /// Surface has no pages to show
    Empty,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::PageOutOfRange { index, count } => {
                write!(f, "Page {} out of range (0..{})", index, count)
            }
            NavigationError::TabMismatch { pages, tabs } => {
                write!(f, "Tab count {} does not match page count {}", tabs, pages)
            }
            NavigationError::Empty => write!(f, "Gallery has no pages"),
        }
    }
}

impl Error for NavigationError {}

pub type NavigationResult<T> = Result<T, NavigationError>;
