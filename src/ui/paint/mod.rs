//! Painter
//!
//! Draws a live document subtree with ratatui. Elements map to widgets by tag; `div`s are
//! containers, laid out horizontally when they carry the `row` class and vertically otherwise.

pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::vdom::{Element, Node};
use widgets::{render_button, render_heading, render_input_widget, render_text};

/// Paints `root` over the whole frame.
pub fn paint<Msg>(frame: &mut Frame, root: &Node<Msg>) {
    let area = frame.area();
    paint_node(frame, root, area);
}

fn paint_node<Msg>(frame: &mut Frame, node: &Node<Msg>, area: Rect) {
    let element = match node {
        Node::Element(element) => element,
        Node::Text(text) => {
            render_text(frame, area, text, Style::default(), false);
            return;
        }
    };

    match element.tag.as_str() {
        "h1" => render_heading(frame, area, &element.text_content()),
        "input" => render_input_widget(
            frame,
            area,
            element.get_attr("placeholder").unwrap_or_default(),
            element.get_attr("value").unwrap_or_default(),
            element.is_focused(),
            Color::Yellow,
        ),
        "button" => render_button(
            frame,
            area,
            &element.text_content(),
            element.is_focused(),
        ),
        "table" => paint_table(frame, area, element),
        "p" => paint_paragraph(frame, area, element),
        _ => paint_container(frame, area, element),
    }
}

fn paint_container<Msg>(frame: &mut Frame, area: Rect, element: &Element<Msg>) {
    let direction = if element.has_class("row") {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };

    let constraints: Vec<Constraint> = element
        .children
        .iter()
        .map(|child| constraint_for(child, &direction))
        .collect();
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    for (child, chunk) in element.children.iter().zip(chunks.iter()) {
        paint_node(frame, child, *chunk);
    }
}

/// Space a child claims along the container's main axis.
fn constraint_for<Msg>(node: &Node<Msg>, direction: &Direction) -> Constraint {
    let Node::Element(element) = node else {
        return Constraint::Length(1);
    };

    match direction {
        Direction::Horizontal => match element.tag.as_str() {
            "button" => Constraint::Length(button_width(&element.text_content())),
            _ => Constraint::Fill(1),
        },
        Direction::Vertical => match element.tag.as_str() {
            "h1" | "input" | "button" => Constraint::Length(3),
            "div" if element.has_class("row") => Constraint::Length(3),
            "p" if element.has_class("hint") => Constraint::Length(1),
            "p" => Constraint::Length(3),
            _ => Constraint::Min(3),
        },
    }
}

/// Label width plus borders and padding, clamped to what a terminal can address.
fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn paint_paragraph<Msg>(frame: &mut Frame, area: Rect, element: &Element<Msg>) {
    let text = element.text_content();
    if element.has_class("hint") {
        render_text(frame, area, &text, Style::default().fg(Color::Gray), false);
    } else if element.has_class("total") {
        let style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        render_text(frame, area, &text, style, true);
    } else {
        render_text(frame, area, &text, Style::default(), true);
    }
}

fn paint_table<Msg>(frame: &mut Frame, area: Rect, element: &Element<Msg>) {
    let (headers, body): (Vec<&Element<Msg>>, Vec<&Element<Msg>>) = element
        .children
        .iter()
        .filter_map(Node::as_element)
        .partition(|row| is_header_row(row));

    let columns = headers
        .iter()
        .chain(body.iter())
        .map(|row| row.children.len())
        .max()
        .unwrap_or(1)
        .max(1);
    let widths = vec![Constraint::Fill(1); columns];

    let rows = body.iter().map(|row| Row::new(cell_texts(row)));
    let mut table = Table::new(rows, widths).block(Block::default().borders(Borders::ALL));
    if let Some(header) = headers.first() {
        table = table.header(
            Row::new(cell_texts(header))
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .bottom_margin(1),
        );
    }
    frame.render_widget(table, area);
}

fn is_header_row<Msg>(row: &Element<Msg>) -> bool {
    !row.children.is_empty()
        && row
            .children
            .iter()
            .all(|cell| cell.as_element().is_some_and(|el| el.tag == "th"))
}

fn cell_texts<Msg>(row: &Element<Msg>) -> Vec<String> {
    row.children.iter().map(Node::text_content).collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::ui::{Labels, Model, Msg, start};
    use crate::vdom::Document;

    fn screen(runtime: &crate::runtime::Runtime<crate::ui::CalorieCounter>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, runtime)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn paints_form_table_and_total() {
        let mut runtime =
            start(Labels::default(), Document::with_mount_point("app"), "app").unwrap();
        for msg in [
            Msg::UpdateMealInput("Egg".into()),
            Msg::UpdateCaloriesInput("70".into()),
            Msg::AddRow,
        ] {
            runtime.dispatch(msg).unwrap();
        }
        assert_eq!(runtime.model().rows.len(), 1);

        let screen = screen(&runtime);
        assert!(screen.contains("Kalorienzähler"), "{screen}");
        assert!(screen.contains("Hinzufügen"), "{screen}");
        assert!(screen.contains("Meal:"), "{screen}");
        assert!(screen.contains("Egg"), "{screen}");
        assert!(screen.contains("Total: 70 Calories"), "{screen}");
    }

    #[test]
    fn button_width_saturates_for_huge_labels() {
        assert_eq!(super::button_width("Hinzufügen"), 14);
        assert_eq!(super::button_width(&"x".repeat(70_000)), u16::MAX);
        assert_eq!(super::button_width(&"x".repeat(65_534)), u16::MAX);
    }

    #[test]
    fn huge_add_label_still_paints() {
        let labels = Labels {
            add: "x".repeat(70_000),
            ..Labels::default()
        };
        let runtime = start(labels, Document::with_mount_point("app"), "app").unwrap();
        assert!(screen(&runtime).contains("Total: 0 Calories"));
    }

    #[test]
    fn empty_model_paints_zero_total() {
        let runtime = start(Labels::default(), Document::with_mount_point("app"), "app").unwrap();
        assert_eq!(runtime.model(), &Model::new());
        assert!(screen(&runtime).contains("Total: 0 Calories"));
    }
}
