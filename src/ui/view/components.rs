//! Reusable render-tree pieces

use crate::models::Row;
use crate::vdom::{Element, Node, button, input, td, th, tr};

/// A text input echoing `value`; every edit is reported through `on_input`.
pub fn text_input<Msg>(
    placeholder: &str,
    value: &str,
    focused: bool,
    on_input: fn(String) -> Msg,
) -> Element<Msg> {
    input()
        .attr("type", "text")
        .attr("placeholder", placeholder)
        .attr("value", value)
        .focused(focused)
        .on_input(on_input)
}

/// A button dispatching `msg` when activated.
pub fn action_button<Msg>(label: &str, focused: bool, msg: Msg) -> Element<Msg> {
    button()
        .class("btn")
        .focused(focused)
        .on_click(msg)
        .text(label)
}

pub fn header_row<Msg>(headers: &[&str]) -> Node<Msg> {
    tr().children(headers.iter().map(|h| th().text(*h).into()))
        .into()
}

pub fn entry_row<Msg>(row: &Row) -> Node<Msg> {
    tr().child(td().text(&row.meal))
        .child(td().text(&row.calories))
        .into()
}
