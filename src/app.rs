//! `app.rs` - Viewer state: the gallery, its page navigator and the config.
use crossterm::event::{KeyCode, KeyModifiers};

use crate::config::Config;
use crate::gallery::{Gallery, GalleryPage};
use crate::input::Action;
use crate::logging;
use crate::navigation::{NavigationError, NavigationResult, PageNavigator};
use crate::ui::layout::{Hit, TabStrip};
use crate::ui::page::PageDetails;
use crate::ui::GalleryView;

pub struct App {
    pub config: Config,
    pub gallery: Gallery,
    pub navigator: PageNavigator<GalleryView>,
    details: Vec<PageDetails>,
    tab_names: Vec<String>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Builds the view for `gallery` and shows its first page.
    pub fn new(config: Config, gallery: Gallery) -> NavigationResult<Self> {
        let navigator = PageNavigator::start(GalleryView::new(gallery.len()))?;
        let details = gallery.pages.iter().map(PageDetails::from_page).collect();
        let tab_names = gallery.pages.iter().map(GalleryPage::title).collect();

        Ok(Self {
            config,
            gallery,
            navigator,
            details,
            tab_names,
            status_message: None,
            should_quit: false,
        })
    }

    pub fn view(&self) -> &GalleryView {
        self.navigator.surface()
    }

    pub fn current_page(&self) -> &GalleryPage {
        &self.gallery.pages[self.navigator.current()]
    }

    pub fn details(&self, index: usize) -> &PageDetails {
        &self.details[index]
    }

    /// Tab titles for a bar `width` columns wide, always including the current page.
    pub fn tab_strip(&self, width: u16) -> TabStrip {
        TabStrip::build(&self.tab_names, width, self.navigator.current())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Routes a key press through the navigator.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let result = self
            .navigator
            .dispatch_key(&self.config.keymap, code, modifiers);

        match result {
            Ok(Some(Action::Quit)) => self.quit(),
            Ok(Some(_)) => self.status_message = None,
            Ok(None) => {}
            Err(err) => self.report(err),
        }
    }

    /// Routes a resolved mouse click.
    ///
    /// Tab clicks show their page directly; page clicks go back or forward
    /// depending on where in the page they land.
    pub fn handle_hit(&mut self, hit: Hit) {
        let result = match hit {
            Hit::Tab(index) => self.navigator.show_page(index),
            Hit::Page { offset_x, width } => self
                .navigator
                .dispatch_pointer_click(offset_x, width)
                .map(|_| ()),
            Hit::None => Ok(()),
        };

        match result {
            Ok(()) if hit != Hit::None => self.status_message = None,
            Ok(()) => {}
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: NavigationError) {
        logging::error(&format!("Navigation error: {}", err));
        self.status_message = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(count: usize) -> App {
        let pages = Gallery::from_paths(
            (0..count).map(|i| format!("page{}.jpg", i)),
            crate::gallery::SortMethod::Human,
            true,
        );
        let gallery = Gallery::new("t".into(), pages, serde_json::json!({})).unwrap();
        App::new(Config::default(), gallery).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::empty());
    }

    #[test]
    fn test_starts_on_first_page() {
        let app = app(3);
        assert_eq!(app.navigator.current(), 0);
        assert_eq!(app.view().visible_panel(), Some(0));
        assert_eq!(app.current_page().arg, "page0.jpg");
    }

    #[test]
    fn test_key_scenario_wraps() {
        let mut app = app(3);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.view().active_tab(), Some(1));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view().active_tab(), Some(2));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.view().active_tab(), Some(0));
        assert_eq!(app.view().visible_panel(), Some(0));
    }

    #[test]
    fn test_tab_click_jumps_directly() {
        let mut app = app(3);
        app.handle_hit(Hit::Tab(2));
        assert_eq!(app.navigator.current(), 2);
        app.handle_hit(Hit::Tab(2));
        assert_eq!(app.navigator.current(), 2);
    }

    #[test]
    fn test_page_click_zones() {
        let mut app = app(3);
        app.handle_hit(Hit::Page {
            offset_x: 10,
            width: 100,
        });
        assert_eq!(app.navigator.current(), 2);
        app.handle_hit(Hit::Page {
            offset_x: 60,
            width: 100,
        });
        assert_eq!(app.navigator.current(), 0);
    }

    #[test]
    fn test_bad_tab_index_is_reported() {
        let mut app = app(2);
        app.handle_hit(Hit::Tab(1));
        app.handle_hit(Hit::Tab(5));
        assert_eq!(app.navigator.current(), 1);
        assert_eq!(app.view().visible_panel(), Some(1));
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|msg| msg.contains("out of range")));
    }

    #[test]
    fn test_error_message_clears_after_navigation() {
        let mut app = app(3);
        app.handle_hit(Hit::Tab(7));
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status_message, None);

        app.handle_hit(Hit::Tab(9));
        app.handle_hit(Hit::Tab(0));
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(2);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('Q'));
        assert!(app.should_quit);

        let mut app = self::app(2);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
