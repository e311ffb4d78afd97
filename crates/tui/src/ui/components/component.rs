//! Component system for the roster TUI.
//!
//! Components are self-contained UI elements. Their state lives on [`App`] so
//! that the runtime and `cmd` can reach it; a component translates keys into
//! state changes and [`Effect`]s, and draws itself into a `Rect`.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Effect, Msg};

/// A UI element with its own key handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: keys reach the focused component via `handle_key_events()`
/// 2. **State Updates**: `update()` processes application messages such as ticks
/// 3. **Rendering**: `render()` draws the component into the provided area
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    ///
    /// Returns the effects the application should process.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state based on an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
