//! The roster table: one row per collaborator with its worst status tier,
//! plus a detail panel listing every date badge and checklist flag of the
//! selected row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table, Wrap},
};
use roster_engine::{RosterPort, RosterRow, actions};
use roster_types::StatusTier;

use crate::app::{App, Effect, Pane};
use crate::ui::components::component::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{centered_fixed, truncate};

const HEADERS: [&str; 5] = ["Nome", "CPF", "Unidade", "Setor", "Situação"];

#[derive(Debug, Default)]
pub struct RosterComponent;

impl RosterComponent {
    fn handle_confirmation(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('s') | KeyCode::Enter => {
                if let Some(id) = app.table.take_pending_removal() {
                    actions::remove(&mut app.roster, &id, &app.notices);
                    app.table.clamp(app.roster.len());
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => app.table.cancel_removal(),
            _ => {}
        }
    }

    fn render_details(&self, frame: &mut Frame, rect: Rect, theme: &dyn Theme, row: Option<&RosterRow>) {
        let block = th::block(theme, Some("Vencimentos"), false);
        let Some(row) = row else {
            frame.render_widget(
                Paragraph::new("Nenhum colaborador cadastrado").style(theme.text_muted_style()).block(block),
                rect,
            );
            return;
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(row.full_name.clone(), theme.accent_emphasis_style()),
            Span::styled(format!("  {}", row.tax_id), theme.text_secondary_style()),
        ])];
        let org = [
            Some(row.unit.as_str()),
            Some(row.group.as_str()),
            Some(row.sector.as_str()),
            row.company.as_deref(),
            row.manager.as_deref().map(|manager| manager.trim()),
        ];
        lines.push(Line::styled(
            org.into_iter().flatten().collect::<Vec<_>>().join(" · "),
            theme.text_secondary_style(),
        ));
        lines.push(Line::default());
        for badge in &row.badges {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", badge.field.label()), theme.text_secondary_style()),
                Span::styled(format!("{:<14}", badge.display_date()), theme.text_primary_style()),
                Span::styled(badge.tier.label(), theme.tier_style(badge.tier)),
            ]));
        }
        lines.push(Line::default());
        let flags: Vec<Span> = row
            .flags
            .iter()
            .flat_map(|(flag, set)| {
                let style = if *set { theme.status_success() } else { theme.text_muted_style() };
                [
                    Span::styled(format!("{} {}", if *set { "[x]" } else { "[ ]" }, flag.label()), style),
                    Span::raw("  "),
                ]
            })
            .collect();
        lines.push(Line::from(flags));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), rect);
    }

    fn render_confirmation(&self, frame: &mut Frame, rect: Rect, theme: &dyn Theme, name: &str) {
        let area = centered_fixed(48, 6, rect);
        frame.render_widget(Clear, area);
        let block = th::block(theme, Some("Remover colaborador"), true).border_style(theme.status_error());
        let text = vec![
            Line::from(format!("Remover {}?", truncate(name, 36))),
            Line::default(),
            Line::styled("Enter/y confirma · Esc cancela", theme.text_muted_style()),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

impl Component for RosterComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.table.pending_removal().is_some() {
            self.handle_confirmation(app, key);
            return Vec::new();
        }

        let len = app.roster.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.table.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => app.table.select_prev(len),
            KeyCode::Char('d') | KeyCode::Delete => {
                let selected = app.table.selected().and_then(|index| app.roster.list().get(index));
                if let Some(record) = selected {
                    let id = record.id().clone();
                    app.table.request_removal(id);
                }
            }
            KeyCode::Char('e') => return vec![Effect::SaveCsvRequested],
            KeyCode::Char('y') => return vec![Effect::CopyCsvRequested],
            KeyCode::Char('m') => return vec![Effect::MailDraftRequested],
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        app.table.clamp(app.roster.len());
        let view = app.view();
        let focused = app.focus == Pane::Roster;
        let theme = app.theme.theme.as_ref();

        let [table_area, details_area] = Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(rect);

        let title = view.title();
        let block = th::block(theme, Some(title.as_str()), focused);
        let header = Row::new(HEADERS.map(Cell::from)).style(th::table_header_row_style(theme));
        let rows: Vec<Row> = view
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let tier = row.worst_tier();
                let tier_label = if tier == StatusTier::NotProvided { "-" } else { tier.label() };
                Row::new(vec![
                    Cell::from(row.full_name.clone()),
                    Cell::from(row.tax_id.clone()),
                    Cell::from(row.unit.clone()),
                    Cell::from(row.sector.clone()),
                    Cell::from(Span::styled(tier_label, theme.tier_style(tier))),
                ])
                .style(th::table_row_style(theme, index))
            })
            .collect();
        let widths = [
            Constraint::Percentage(30),
            Constraint::Length(15),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Min(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(th::table_selected_style(theme).add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(table, table_area, app.table.table_state());

        let selected = app.table.selected().and_then(|index| view.rows.get(index));
        self.render_details(frame, details_area, theme, selected);

        if let Some(id) = app.table.pending_removal()
            && let Some(record) = app.roster.get(id)
        {
            self.render_confirmation(frame, rect, theme, record.full_name());
        }
    }
}
