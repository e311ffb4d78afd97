use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use roster_engine::{RosterPort, actions};
use tracing::debug;

use super::state::FormField;
use crate::app::{App, Effect};
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

/// Width of the label column.
const LABEL_WIDTH: usize = 18;

/// The collaborator registration form.
#[derive(Debug, Default)]
pub struct FormComponent;

impl FormComponent {
    fn submit(&self, app: &mut App) {
        match actions::submit(app.form.draft_mut(), &mut app.roster, &app.notices) {
            Ok(id) => {
                debug!(id = %id, "form cleared after submit");
                app.form.clear_inputs();
                app.table.clamp(app.roster.len());
            }
            Err(error) => app.form.set_invalid(Some(error)),
        }
    }

    fn section_title(field: FormField) -> Option<&'static str> {
        match field {
            FormField::Text(roster_engine::TextField::FullName) => Some("Dados do colaborador"),
            FormField::Unit => Some("Organização"),
            FormField::Date(date) if date == roster_types::DateField::ALL[0] => Some("Vencimentos"),
            FormField::Flag(flag) if flag == roster_types::FlagField::ALL[0] => Some("Checklist"),
            _ => None,
        }
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if control => self.submit(app),
            KeyCode::Char('n') if control => app.form.reset(),
            KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
            KeyCode::Left => app.form.move_horizontal(-1),
            KeyCode::Right => app.form.move_horizontal(1),
            KeyCode::Home => app.form.move_to_edge(false),
            KeyCode::End => app.form.move_to_edge(true),
            KeyCode::Backspace => app.form.backspace(),
            KeyCode::Delete => app.form.delete(),
            KeyCode::Enter => match app.form.focused_field() {
                FormField::Submit => self.submit(app),
                FormField::Flag(_) => app.form.insert_char(' '),
                _ => app.form.focus_next(),
            },
            KeyCode::Char(c) if !control => app.form.insert_char(c),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let focused_pane = app.focus == crate::app::Pane::Form;
        let theme = app.theme();
        let block = th::block(theme, Some("Novo Colaborador"), focused_pane);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [fields_area, button_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

        let mut lines: Vec<Line> = Vec::new();
        let mut focused_line = 0usize;
        let focused_field = app.form.focused_field();
        for field in app.form.fields().iter().copied().filter(|field| *field != FormField::Submit) {
            if let Some(title) = Self::section_title(field) {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::styled(title, theme.accent_emphasis_style()));
            }
            let is_focused = field == focused_field;
            if is_focused {
                focused_line = lines.len();
            }
            let marker = if field.is_required() { "*" } else { " " };
            let label = format!("{marker}{:<width$}", field.label(), width = LABEL_WIDTH - 1);
            let label_style = if app.form.invalid() == Some(field) {
                theme.status_error().add_modifier(Modifier::BOLD)
            } else if is_focused {
                theme.accent_primary_style()
            } else {
                theme.text_secondary_style()
            };
            let incomplete = matches!(field, FormField::Date(date) if app.form.is_date_incomplete(date));
            let value = app.form.display_value(field);
            let value_span = match field {
                FormField::Unit | FormField::Group | FormField::Sector if value.is_empty() => {
                    Span::styled("◀ selecione ▶", theme.text_muted_style())
                }
                FormField::Unit | FormField::Group | FormField::Sector => Span::styled(format!("◀ {value} ▶"), th::input_style(theme, true, is_focused)),
                FormField::Date(_) if value.is_empty() => Span::styled("dd/mm/aaaa", theme.text_muted_style()),
                _ => Span::styled(value, th::input_style(theme, !incomplete, is_focused)),
            };
            lines.push(Line::from(vec![Span::styled(label, label_style), value_span]));
        }

        let height = fields_area.height as usize;
        let scroll = focused_line.saturating_sub(height.saturating_sub(2));
        frame.render_widget(
            Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
            fields_area,
        );

        th::render_button(
            frame,
            button_area,
            FormField::Submit.label(),
            focused_pane && focused_field == FormField::Submit,
            theme,
        );

        if focused_pane && focused_field.is_typed()
            && let Some(column) = app.form.cursor_column()
        {
            let row = u16::try_from(focused_line - scroll).unwrap_or(0);
            let x = fields_area.x + LABEL_WIDTH as u16 + column;
            let y = fields_area.y + row;
            if x < fields_area.right() && y < fields_area.bottom() {
                frame.set_cursor_position(Position::new(x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use roster_engine::TextField;
    use roster_types::DateField;

    fn press(form: &mut FormComponent, app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        form.handle_key_events(app, KeyEvent::new(code, modifiers));
    }

    fn type_text(form: &mut FormComponent, app: &mut App, text: &str) {
        for c in text.chars() {
            press(form, app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn rejected_submit_marks_the_failing_field() {
        let mut form = FormComponent;
        let mut app = App::new(AppOptions::default());

        press(&mut form, &mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.form.invalid(), Some(FormField::Text(TextField::FullName)));

        type_text(&mut form, &mut app, "Ana Silva");
        press(&mut form, &mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut form, &mut app, "12345678901");
        press(&mut form, &mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(app.roster.is_empty());
        assert_eq!(app.form.invalid(), Some(FormField::Date(DateField::REQUIRED[0])));
        assert_eq!(app.form.focused_field(), FormField::Date(DateField::REQUIRED[0]));
    }
}
