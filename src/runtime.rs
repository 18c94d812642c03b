use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::App;
use crate::logging;
use crate::ui;

/// Drives the viewer: draw, wait for one event, handle it, repeat.
pub struct Runner<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    app: App,
}

impl<'a, B: Backend> Runner<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, app: App) -> Self {
        Self { terminal, app }
    }

    pub fn run(mut self) -> Result<(), io::Error> {
        loop {
            self.tick()?;

            if self.app.should_quit {
                logging::info("Quit requested");
                return Ok(());
            }
        }
    }

    fn tick(&mut self) -> Result<(), io::Error> {
        self.terminal
            .draw(|frame| ui::render(frame, &mut self.app))?;

        match event::read()? {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(event) => match event.kind {
                MouseEventKind::ScrollUp => self.scroll_wheel(-1),
                MouseEventKind::ScrollDown => self.scroll_wheel(1),
                MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_click(event)?,
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.app.handle_key(key.code, key.modifiers);
    }

    fn scroll_wheel(&mut self, sign: i32) {
        let amount = i32::from(self.app.config.keymap.scroll_amount);
        self.app.navigator.scroll(sign * amount);
    }

    fn handle_mouse_click(&mut self, event: MouseEvent) -> Result<(), io::Error> {
        let size = self.terminal.size()?;
        let layout = ui::LayoutContext::new(Rect::new(0, 0, size.width, size.height));
        let tabs = self.app.tab_strip(layout.tabs_inner().width);
        let hit = layout.locate(event.column, event.row, &tabs);
        logging::debug(&format!(
            "Click at ({}, {}) -> {:?}",
            event.column, event.row, hit
        ));
        self.app.handle_hit(hit);
        Ok(())
    }
}
