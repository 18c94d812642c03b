use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;

pub mod layout;
pub mod page;
pub mod view;

pub use layout::{Hit, LayoutContext};
pub use view::GalleryView;

/// Renders the entire UI of the viewer.
///
/// Takes the app mutably so the page view can learn how far it may scroll.
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.config.theme.clone();

    // Set background color for the entire frame
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.base_color())),
        frame.area(),
    );

    let layout = LayoutContext::new(frame.area());

    render_status_bar(frame, app, layout.status_area());
    render_tabs(frame, app, &layout);
    render_page(frame, app, &layout);
    render_footer(frame, app, layout.footer_area());
}

/// Renders the status bar at the top of the UI.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.current_page();
    let status = Line::from(format!(
        "{} | page {}/{} | {} | {}",
        app.gallery.title,
        app.navigator.current() + 1,
        app.navigator.page_count(),
        page.title(),
        app.status_message.as_deref().unwrap_or("")
    ));

    frame.render_widget(
        Paragraph::new(status).style(
            Style::default()
                .fg(app.config.theme.text_color())
                .bg(app.config.theme.surface0_color()),
        ),
        area,
    );
}

fn render_tabs(frame: &mut Frame, app: &App, layout: &LayoutContext) {
    let theme = &app.config.theme;
    let strip = app.tab_strip(layout.tabs_inner().width);
    let selected = app
        .view()
        .active_tab()
        .and_then(|active| strip.position(active));
    let titles: Vec<Line> = strip
        .titles
        .into_iter()
        .map(|title| Line::from(Span::raw(title)))
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Pages"))
        .style(Style::default().fg(theme.subtext0_color()))
        .highlight_style(
            Style::default()
                .fg(theme.active_tab_fg_color())
                .bg(theme.accent_color())
                .add_modifier(Modifier::BOLD),
        );

    if let Some(selected) = selected {
        tabs = tabs.select(selected);
    }

    frame.render_widget(tabs, layout.tabs_area());
}

/// Draws the visible panel. Hidden panels are not drawn at all.
fn render_page(frame: &mut Frame, app: &mut App, layout: &LayoutContext) {
    let Some(index) = app.view().visible_panel() else {
        return;
    };

    let limit = scroll_limit(app.details(index).len(), layout.page_inner().height);
    app.navigator.surface_mut().set_scroll_limit(limit);

    let theme = &app.config.theme;
    let page = &app.gallery.pages[index];
    let lines: Vec<Line> = app
        .details(index)
        .lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_color()))
                .title(page.title()),
        )
        .style(Style::default().fg(theme.text_color()))
        .scroll((app.view().scroll(), 0));

    frame.render_widget(paragraph, layout.page_area());
}

/// Furthest scroll offset that still keeps the last line on screen.
fn scroll_limit(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = &app.config.keymap;
    let hints = Line::from(format!(
        "{}/← prev  {}/→ next  {}/{} scroll  click left/right of page  {} quit",
        keys.prev_page_key, keys.next_page_key, keys.scroll_up_key, keys.scroll_down_key, keys.quit_key
    ));

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.config.theme.subtext0_color())),
        area,
    );
}
