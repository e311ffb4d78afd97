use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Background style for the entire header row to avoid gaps between columns.
pub fn table_header_row_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().surface_muted)
        .fg(theme.roles().text_secondary)
        .add_modifier(Modifier::BOLD)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            Color::Rgb(scale_channel(r, f), scale_channel(g, f), scale_channel(b, f))
        }
        other => other,
    }
}

fn scale_channel(channel: u8, factor: f32) -> u8 {
    let scaled = (channel as f32 * factor).round();
    scaled.clamp(0.0, 255.0) as u8
}

/// Zebra-striped row style for a given row index.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let ThemeRoles {
        table_row_even,
        table_row_odd,
        text,
        ..
    } = *theme.roles();
    let bg = if row_index % 2 == 0 { table_row_even } else { table_row_odd };
    Style::default().bg(bg).fg(text)
}

/// Style for a selected row.
pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, focused: bool) -> Style {
    let ThemeRoles { surface, text, error, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if !valid {
        style = style.fg(error);
    }
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        surface_muted,
        text,
        ..
    } = *theme.roles();
    if focused {
        Style::default().bg(accent_primary).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(surface_muted).fg(text)
    }
}

/// Renders a standard button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, theme: &T) {
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(theme.border_style(is_focused)))
            .style(button_primary_style(theme, is_focused)),
        area,
    );
}
