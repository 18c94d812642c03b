use crate::navigation::DisplaySurface;

/// Display state of one page panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
}

/// Display state of one tab-bar entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    pub active: bool,
}

/// Terminal-side display surface: the renderer draws whatever these flags say.
#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    panels: Vec<PanelState>,
    tabs: Vec<TabState>,
    scroll: u16,
    scroll_limit: u16,
}

impl GalleryView {
    /// One hidden panel and one inactive tab per page.
    pub fn new(page_count: usize) -> Self {
        Self {
            panels: vec![PanelState::default(); page_count],
            tabs: vec![TabState::default(); page_count],
            scroll: 0,
            scroll_limit: u16::MAX,
        }
    }

    pub fn panels(&self) -> &[PanelState] {
        &self.panels
    }

    pub fn tabs(&self) -> &[TabState] {
        &self.tabs
    }

    pub fn visible_panel(&self) -> Option<usize> {
        self.panels.iter().position(|panel| panel.visible)
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Caps the scroll offset so the last content row stays reachable.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }
}

impl DisplaySurface for GalleryView {
    fn page_count(&self) -> usize {
        self.panels.len()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn activate(&mut self, index: usize) {
        self.panels[index].visible = true;
        self.tabs[index].active = true;
    }

    fn deactivate(&mut self, index: usize) {
        self.panels[index].visible = false;
        self.tabs[index].active = false;
    }

    fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(self.scroll_limit)) as u16;
    }
}
