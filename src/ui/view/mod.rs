//! View
//!
//! Pure mapping from [`Model`] to the render tree. Inputs never write to the model themselves:
//! they report the new text as a message and the echo comes back through update.

pub mod components;

use super::actions::Msg;
use super::state::{Focus, Model};
use crate::models::total_calories;
use crate::vdom::{Element, Node, div, h1, p, table};
use components::{action_button, entry_row, header_row, text_input};

pub const KEY_HINT: &str = "[Tab/↓] next  [Shift-Tab/↑] previous  [Enter] confirm  [Esc] quit";

/// User-facing strings of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub heading: String,
    pub meal: String,
    pub calories: String,
    pub add: String,
    pub unit: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            heading: "Kalorienzähler".to_string(),
            meal: "Meal".to_string(),
            calories: "Calories".to_string(),
            add: "Hinzufügen".to_string(),
            unit: "Calories".to_string(),
        }
    }
}

/// Builds the whole UI for `model`.
pub fn view(labels: &Labels, model: &Model) -> Node<Msg> {
    let total = total_calories(&model.rows);

    let form: Element<Msg> = div()
        .class("row")
        .child(text_input(
            &labels.meal,
            &model.eats_input,
            model.focus == Focus::Meal,
            Msg::UpdateMealInput,
        ))
        .child(text_input(
            &labels.calories,
            &model.calories_input,
            model.focus == Focus::Calories,
            Msg::UpdateCaloriesInput,
        ))
        .child(action_button(
            &labels.add,
            model.focus == Focus::Add,
            Msg::AddRow,
        ));

    let meal_header = format!("{}:", labels.meal);
    let calories_header = format!("{}:", labels.calories);
    let entries: Element<Msg> = table()
        .class("entries")
        .child(header_row(&[meal_header.as_str(), calories_header.as_str()]))
        .children(model.rows.iter().map(entry_row));

    div()
        .class("app")
        .child(h1().class("heading").text(&labels.heading))
        .child(form)
        .child(entries)
        .child(
            p().class("total")
                .text(format!("Total: {total} {}", labels.unit)),
        )
        .child(p().class("hint").text(KEY_HINT))
        .into()
}
