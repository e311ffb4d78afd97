//! Single-line strip of key bindings for the focused pane.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Pane};
use crate::ui::components::component::Component;

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab/↑↓", "campo"),
    ("←/→", "opção"),
    ("Espaço", "marcar"),
    ("Ctrl-S", "adicionar"),
    ("Ctrl-N", "limpar"),
];

const ROSTER_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "selecionar"),
    ("d", "remover"),
    ("e", "baixar CSV"),
    ("y", "copiar CSV"),
    ("m", "email"),
];

const GLOBAL_HINTS: &[(&str, &str)] = &[("Ctrl-R", "painel"), ("Ctrl-T", "tema"), ("Ctrl-Q", "sair")];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme();
        let pane_hints = match app.focus {
            Pane::Form => FORM_HINTS,
            Pane::Roster => ROSTER_HINTS,
        };
        let spans: Vec<Span> = pane_hints
            .iter()
            .chain(GLOBAL_HINTS)
            .flat_map(|(key, action)| {
                [
                    Span::styled(*key, theme.accent_primary_style()),
                    Span::styled(format!(" {action}  "), theme.text_muted_style()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
