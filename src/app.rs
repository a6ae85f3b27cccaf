//! Application state and input handling for Pulse One.
//!
//! This module contains the `App` struct which owns the content document,
//! the view router and the last drawn viewport, and maps terminal events to
//! navigation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::trace;

use crate::models::{ActiveTab, Content};
use crate::nav;
use crate::router::{Panel, ViewRouter};
use crate::ui;

/// Application state
pub struct App {
    content: Content,
    router: ViewRouter,
    // Size of the last drawn frame, for mouse hit testing
    viewport: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            router: ViewRouter::new(),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    /// Panel to draw for the active tab
    pub fn current_panel(&self) -> Panel<'_> {
        self.router.current_panel(&self.content)
    }

    /// Select a tab as if its navigation item was activated
    pub fn select(&mut self, tab: ActiveTab) {
        nav::on_select(&mut self.router, tab);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record the frame area so pointer positions can be mapped to nav items
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Resize is picked up by the next draw
            _ => {}
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.select(ActiveTab::from_index(index));
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.select(self.router.active().next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select(self.router.active().prev());
            }
            other => trace!(key = ?other, "ignored key"),
        }
    }

    /// Handle a mouse event; a left press on a nav item selects it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(tab) = ui::hit_test(self.viewport, mouse.column, mouse.row) {
            self.select(tab);
        }
    }
}
