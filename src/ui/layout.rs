use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use std::rc::Rc;

/// Blank padding the tabs widget puts on each side of a title.
pub const TAB_PADDING: u16 = 1;
/// Width of the divider drawn between two tab titles.
pub const TAB_DIVIDER_WIDTH: u16 = 1;
/// Titles are never squeezed below this many columns; the bar scrolls instead.
pub const MIN_TAB_TITLE_WIDTH: usize = 6;

/// What a mouse click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    /// A tab title, by page index
    Tab(usize),
    /// The page body, with the column offset inside it and its width
    Page { offset_x: u16, width: u16 },
    None,
}

pub struct LayoutContext {
    chunks: Rc<[Rect]>,
}

impl LayoutContext {
    pub fn new(root: Rect) -> Self {
        let chunks = Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(3), // Tab bar
                Constraint::Min(1),    // Page body
                Constraint::Length(1), // Key hints
            ])
            .split(root);

        Self { chunks }
    }

    pub fn status_area(&self) -> Rect {
        self.chunks[0]
    }

    pub fn tabs_area(&self) -> Rect {
        self.chunks[1]
    }

    pub fn tabs_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.tabs_area())
    }

    pub fn page_area(&self) -> Rect {
        self.chunks[2]
    }

    pub fn page_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.page_area())
    }

    pub fn footer_area(&self) -> Rect {
        self.chunks[3]
    }

    /// Resolves a click at (`column`, `row`) given the rendered tab strip.
    pub fn locate(&self, column: u16, row: u16, tabs: &TabStrip) -> Hit {
        let position = Position::new(column, row);

        if self.tabs_inner().contains(position) {
            return self.hit_tabs(position, tabs);
        }

        let page = self.page_inner();
        if page.contains(position) {
            return Hit::Page {
                offset_x: position.x.saturating_sub(page.x),
                width: page.width,
            };
        }

        Hit::None
    }

    fn hit_tabs(&self, position: Position, tabs: &TabStrip) -> Hit {
        let x = usize::from(position.x.saturating_sub(self.tabs_inner().x));
        let padding = usize::from(TAB_PADDING);
        let divider = usize::from(TAB_DIVIDER_WIDTH);
        let mut accum: usize = 0;

        for (index, title) in tabs.titles.iter().enumerate() {
            let title_width = Span::raw(title.as_str()).width();
            accum = accum.saturating_add(title_width.saturating_add(2 * padding));
            if x < accum {
                return Hit::Tab(tabs.first + index);
            }
            if index + 1 < tabs.titles.len() {
                accum = accum.saturating_add(divider);
                if x < accum {
                    return Hit::Tab(tabs.first + index);
                }
            }
        }

        Hit::None
    }
}

/// The tab titles that fit in the bar, starting at page `first`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabStrip {
    pub first: usize,
    pub titles: Vec<String>,
}

impl TabStrip {
    /// Builds `1:name` titles for a bar `width` columns wide.
    ///
    /// When every title fits at `MIN_TAB_TITLE_WIDTH` or more, the strip holds
    /// all pages. Otherwise it holds a window of pages centred on `active`.
    pub fn build(names: &[String], width: u16, active: usize) -> Self {
        let count = names.len();
        if count == 0 {
            return Self::default();
        }

        let width = usize::from(width);
        let visible = if title_width(width, count) >= MIN_TAB_TITLE_WIDTH {
            count
        } else {
            let slot = MIN_TAB_TITLE_WIDTH
                + 2 * usize::from(TAB_PADDING)
                + usize::from(TAB_DIVIDER_WIDTH);
            (width.saturating_add(usize::from(TAB_DIVIDER_WIDTH)) / slot).clamp(1, count)
        };

        let active = active.min(count - 1);
        let first = active.saturating_sub(visible / 2).min(count - visible);
        let max_width = title_width(width, visible).max(1);

        let titles = names[first..first + visible]
            .iter()
            .enumerate()
            .map(|(offset, name)| {
                shorten(&format!("{}:{}", first + offset + 1, name), max_width)
            })
            .collect();

        Self { first, titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Position of page `index` inside the strip, if it is shown.
    pub fn position(&self, index: usize) -> Option<usize> {
        index
            .checked_sub(self.first)
            .filter(|&position| position < self.titles.len())
    }
}

/// Columns left for each of `count` titles once padding and dividers are paid.
fn title_width(width: usize, count: usize) -> usize {
    let chrome = count
        .saturating_mul(2 * usize::from(TAB_PADDING))
        .saturating_add(
            count
                .saturating_sub(1)
                .saturating_mul(usize::from(TAB_DIVIDER_WIDTH)),
        );
    width.saturating_sub(chrome) / count
}

fn shorten(title: &str, max_width: usize) -> String {
    if title.chars().count() <= max_width {
        return title.to_string();
    }
    if max_width <= 1 {
        return title.chars().take(max_width).collect();
    }
    let mut short: String = title.chars().take(max_width - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutContext {
        LayoutContext::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_areas_stack_vertically() {
        let layout = layout();
        assert_eq!(layout.status_area(), Rect::new(0, 0, 80, 1));
        assert_eq!(layout.tabs_area(), Rect::new(0, 1, 80, 3));
        assert_eq!(layout.page_area(), Rect::new(0, 4, 80, 19));
        assert_eq!(layout.footer_area(), Rect::new(0, 23, 80, 1));
        assert_eq!(layout.page_inner(), Rect::new(1, 5, 78, 17));
    }

    #[test]
    fn test_hit_tabs() {
        let layout = layout();
        let titles = TabStrip {
            first: 0,
            titles: vec!["1:a".to_string(), "2:bb".to_string(), "3:c".to_string()],
        };
        // Inner tab row starts at x = 1, y = 2: " 1:a │ 2:bb │ 3:c "
        assert_eq!(layout.locate(1, 2, &titles), Hit::Tab(0));
        assert_eq!(layout.locate(5, 2, &titles), Hit::Tab(0));
        assert_eq!(layout.locate(6, 2, &titles), Hit::Tab(0));
        assert_eq!(layout.locate(7, 2, &titles), Hit::Tab(1));
        assert_eq!(layout.locate(12, 2, &titles), Hit::Tab(1));
        assert_eq!(layout.locate(14, 2, &titles), Hit::Tab(2));
        assert_eq!(layout.locate(18, 2, &titles), Hit::Tab(2));
        assert_eq!(layout.locate(19, 2, &titles), Hit::None);
    }

    #[test]
    fn test_hit_page_reports_offset_and_width() {
        let layout = layout();
        assert_eq!(
            layout.locate(11, 10, &TabStrip::default()),
            Hit::Page {
                offset_x: 10,
                width: 78
            }
        );
    }

    #[test]
    fn test_borders_and_status_are_not_hits() {
        let layout = layout();
        assert_eq!(layout.locate(0, 10, &TabStrip::default()), Hit::None);
        assert_eq!(layout.locate(5, 0, &TabStrip::default()), Hit::None);
        assert_eq!(layout.locate(5, 23, &TabStrip::default()), Hit::None);
    }

    #[test]
    fn test_hit_tabs_in_scrolled_strip() {
        let layout = layout();
        let tabs = TabStrip {
            first: 10,
            titles: vec!["11:a".to_string(), "12:b".to_string()],
        };
        // " 11:a │ 12:b "
        assert_eq!(layout.locate(1, 2, &tabs), Hit::Tab(10));
        assert_eq!(layout.locate(8, 2, &tabs), Hit::Tab(11));
    }

    #[test]
    fn test_tab_titles_fit_width() {
        let names = vec!["holiday-beach.png".to_string(), "b.png".to_string()];
        let tabs = TabStrip::build(&names, 20, 0);
        // 20 - (2 * 2 + 1) = 15 columns, 7 per title
        assert_eq!(tabs.first, 0);
        assert_eq!(tabs.titles, vec!["1:holi…".to_string(), "2:b.png".to_string()]);

        let tabs = TabStrip::build(&names, 200, 1);
        assert_eq!(tabs.titles[0], "1:holiday-beach.png");
    }

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("img{}.png", i)).collect()
    }

    #[test]
    fn test_tab_strip_windows_around_active_page() {
        let names = names(60);
        let tabs = TabStrip::build(&names, 78, 50);

        assert!(tabs.len() < 60);
        let position = tabs.position(50).unwrap();
        assert!(tabs.titles[position].starts_with("51:"));
        assert!(tabs
            .titles
            .iter()
            .all(|title| title.chars().count() >= MIN_TAB_TITLE_WIDTH));

        let tabs = TabStrip::build(&names, 78, 0);
        assert_eq!(tabs.first, 0);
        let tabs = TabStrip::build(&names, 78, 59);
        assert_eq!(tabs.first + tabs.len(), 60);
        assert!(tabs.position(59).is_some());
    }

    #[test]
    fn test_tab_strip_handles_huge_galleries() {
        let names = names(40_000);
        let tabs = TabStrip::build(&names, 78, 39_999);

        assert!(!tabs.is_empty());
        assert_eq!(tabs.first + tabs.len(), 40_000);
        assert!(tabs.titles.last().unwrap().starts_with("40000"));
    }

    #[test]
    fn test_tab_strip_narrow_bar_keeps_one_title() {
        let tabs = TabStrip::build(&names(5), 3, 4);
        assert_eq!(tabs.first, 4);
        assert_eq!(tabs.len(), 1);
    }
}
