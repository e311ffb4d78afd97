//! Top-level view: header, form and roster side by side, notices and hints
//! along the bottom. Global shortcuts are handled here; every other key goes
//! to the focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use roster_types::StatusTier;
use tracing::debug;

use super::components::{Component, FormComponent, HintBarComponent, NoticesComponent, RosterComponent};
use super::theme::theme_helpers as th;
use crate::app::{App, Effect, Msg, Pane};

/// Height of the notice log, borders included.
const NOTICES_HEIGHT: u16 = 7;

#[derive(Debug, Default)]
pub struct MainView {
    form_view: FormComponent,
    roster_view: RosterComponent,
    notices_view: NoticesComponent,
    hints_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_component(&mut self, app: &App) -> &mut dyn Component {
        match app.focus {
            Pane::Form => &mut self.form_view,
            Pane::Roster => &mut self.roster_view,
        }
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.form_view.update(app, &msg));
        effects.extend(self.roster_view.update(app, &msg));
        effects
    }

    fn render_header(&self, frame: &mut Frame, rect: Rect, app: &App) {
        let theme = app.theme();
        let summary = app.view().summary;
        let mut spans = vec![Span::styled(" Controle de Vencimentos ", theme.accent_emphasis_style())];
        for tier in [StatusTier::Expired, StatusTier::ExpiringSoon, StatusTier::Current] {
            spans.push(Span::styled(
                format!(" {} {} ", tier.label(), summary.count(tier)),
                theme.tier_style(tier),
            ));
        }
        spans.push(Span::styled(format!("  tema: {}", app.theme.definition.label), theme.text_muted_style()));
        frame.render_widget(Paragraph::new(Line::from(spans)).style(th::panel_style(theme)), rect);
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return vec![Effect::Quit],
                KeyCode::Char('r') => {
                    app.focus = app.focus.toggle();
                    debug!(pane = ?app.focus, "focus switched");
                    return Vec::new();
                }
                KeyCode::Char('t') => {
                    let id = app.cycle_theme();
                    return vec![Effect::ThemeChanged(id)];
                }
                _ => {}
            }
        }
        self.focused_component(app).handle_key_events(app, key)
    }

    fn update(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        self.handle_message(app, msg.clone())
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::panel_style(app.theme())), rect);

        let [header, body, notices, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(NOTICES_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(rect);
        let [form_area, roster_area] = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);

        self.render_header(frame, header, app);
        self.form_view.render(frame, form_area, app);
        self.roster_view.render(frame, roster_area, app);
        self.notices_view.render(frame, notices, app);
        self.hints_view.render(frame, hints, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use ratatui::{Terminal, backend::TestBackend};
    use roster_engine::RosterPort;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::new(AppOptions {
            theme: Some("dracula".into()),
            ..AppOptions::default()
        })
    }

    fn type_text(view: &mut MainView, app: &mut App, text: &str) {
        for c in text.chars() {
            view.handle_key_events(app, key(KeyCode::Char(c)));
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn global_shortcuts_switch_pane_theme_and_quit() {
        let mut view = MainView::new();
        let mut app = test_app();

        assert!(view.handle_key_events(&mut app, ctrl('r')).is_empty());
        assert_eq!(app.focus, Pane::Roster);
        assert_eq!(view.handle_key_events(&mut app, ctrl('t')), vec![Effect::ThemeChanged("nord")]);
        assert_eq!(view.handle_key_events(&mut app, ctrl('q')), vec![Effect::Quit]);
    }

    #[test]
    fn roster_keys_request_exports() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.focus = Pane::Roster;

        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('e'))), vec![Effect::SaveCsvRequested]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('y'))), vec![Effect::CopyCsvRequested]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('m'))), vec![Effect::MailDraftRequested]);
    }

    #[test]
    fn incomplete_form_submit_reports_the_first_missing_field() {
        let mut view = MainView::new();
        let mut app = test_app();
        type_text(&mut view, &mut app, "Ana Silva");

        view.handle_key_events(&mut app, ctrl('s'));

        assert!(app.roster.is_empty());
        let latest = app.notices.latest().expect("notice");
        assert_eq!(latest.notification.title, "Erro de validação");
        assert_eq!(app.form.draft().text(roster_engine::TextField::FullName), "Ana Silva");
    }

    #[test]
    fn removal_needs_confirmation() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.roster.add(roster_types::NewCollaborator {
            full_name: "Ana Silva".into(),
            ..sample_new()
        });
        app.focus = Pane::Roster;
        app.table.clamp(app.roster.len());

        view.handle_key_events(&mut app, key(KeyCode::Char('d')));
        assert!(app.table.pending_removal().is_some());
        view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert_eq!(app.roster.len(), 1);

        view.handle_key_events(&mut app, key(KeyCode::Char('d')));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(app.roster.is_empty());
        assert_eq!(app.notices.latest().map(|n| n.notification.title), Some("Colaborador removido".to_string()));
    }

    #[test]
    fn renders_empty_and_populated_screens() {
        let mut view = MainView::new();
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");

        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("Novo Colaborador"));
        assert!(text.contains("Colaboradores Cadastrados (0)"));
        assert!(text.contains("Nenhum colaborador cadastrado"));

        app.roster.add(roster_types::NewCollaborator {
            full_name: "Ana Silva".into(),
            ..sample_new()
        });
        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("Colaboradores Cadastrados (1)"));
        assert!(text.contains("Ana Silva"));
    }

    fn sample_new() -> roster_types::NewCollaborator {
        use roster_types::{ComplianceDates, ComplianceFlags, Group, Sector, TaxId, Unit};
        roster_types::NewCollaborator {
            full_name: "Sample".into(),
            tax_id: TaxId::parse("12345678901").expect("valid tax id"),
            company: None,
            company_tax_id: None,
            alternate_company: None,
            unit: Unit::ALL[0],
            group: Group::ALL[0],
            sector: Sector::ALL[0],
            manager: None,
            dates: ComplianceDates::default(),
            flags: ComplianceFlags::default(),
        }
    }
}
