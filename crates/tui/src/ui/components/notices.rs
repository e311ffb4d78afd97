//! Notice log: the newest notifications, colored by severity.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct NoticesComponent;

impl Component for NoticesComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme();
        let block = th::block(theme, Some("Notificações"), false);
        let visible = block.inner(rect).height as usize;

        let entries = app.notices.entries();
        let lines: Vec<Line> = if entries.is_empty() {
            vec![Line::styled("Nenhuma notificação", theme.text_muted_style())]
        } else {
            entries
                .iter()
                .rev()
                .take(visible)
                .map(|notice| {
                    let note = &notice.notification;
                    let mut spans = vec![
                        Span::styled(notice.at.format("%H:%M:%S ").to_string(), theme.text_muted_style()),
                        Span::styled(note.title.clone(), theme.severity_style(note.severity)),
                    ];
                    if !note.description.is_empty() {
                        spans.push(Span::styled(format!("  {}", note.description), theme.text_secondary_style()));
                    }
                    Line::from(spans)
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
