//! Terminal widgets for individual elements

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// [widget] Bordered title bar.
pub fn render_heading(frame: &mut Frame, area: Rect, text: &str) {
    let title = Paragraph::new(text.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// [widget] Text input with its label in the border. The focused one is highlighted and owns
/// the cursor.
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value.to_string())
        .style(style)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(input, area);

    if is_focused && area.width > 2 && area.height > 2 {
        let width = value.chars().count() as u16;
        let x = area.x + 1 + width.min(area.width - 3);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// [widget] Bordered, centred button label.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Blue)
    };

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// [widget] Plain line of text, optionally framed.
pub fn render_text(frame: &mut Frame, area: Rect, text: &str, style: Style, framed: bool) {
    let mut paragraph = Paragraph::new(text.to_string()).style(style);
    if framed {
        paragraph = paragraph.block(Block::default().borders(Borders::ALL));
    }
    frame.render_widget(paragraph, area);
}
