//! Keymap (key press -> Intent)
//!
//! Focus movement and quitting are bound to fixed keys. Everything else is delivered to the
//! focused element of the live document, and its listener decides which message to dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::CalorieCounter;
use super::actions::Msg;
use crate::error::Result;
use crate::runtime::Runtime;
use crate::vdom::{Event, Node};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Quit,
    Dispatch(Msg),
}

/// Maps `key` to an intent, consulting the focused element of `runtime`.
pub fn get_intent(runtime: &Runtime<CalorieCounter>, key: KeyEvent) -> Option<Intent> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('c') if control => Some(Intent::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Intent::Dispatch(Msg::FocusNext)),
        KeyCode::BackTab | KeyCode::Up => Some(Intent::Dispatch(Msg::FocusPrev)),
        KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
            edit_focused_input(runtime, |text| text.push(c))
        }
        KeyCode::Backspace => edit_focused_input(runtime, |text| {
            text.pop();
        }),
        KeyCode::Enter => activate_focused(runtime),
        _ => None,
    }
}

/// Handles a key press. Returns `true` when the application should quit.
pub fn handle_key_event(runtime: &mut Runtime<CalorieCounter>, key: KeyEvent) -> Result<bool> {
    match get_intent(runtime, key) {
        Some(Intent::Quit) => Ok(true),
        Some(Intent::Dispatch(msg)) => {
            runtime.dispatch(msg)?;
            Ok(false)
        }
        None => {
            trace!(?key, "key ignored");
            Ok(false)
        }
    }
}

/// Applies `edit` to the value of the focused input and sends the result to its listener.
fn edit_focused_input(
    runtime: &Runtime<CalorieCounter>,
    edit: impl FnOnce(&mut String),
) -> Option<Intent> {
    let path = runtime.focused_path()?;
    let element = runtime.document().node(&path)?.as_element()?;
    if element.tag != "input" {
        return None;
    }

    let mut text = element.get_attr("value").unwrap_or_default().to_string();
    edit(&mut text);
    runtime
        .emit(&path, &Event::Input(text))
        .map(Intent::Dispatch)
}

/// Enter on an input moves on to the next control; on anything else it is a click.
fn activate_focused(runtime: &Runtime<CalorieCounter>) -> Option<Intent> {
    let path = runtime.focused_path()?;
    match runtime.document().node(&path)? {
        Node::Element(element) if element.tag == "input" => Some(Intent::Dispatch(Msg::FocusNext)),
        _ => runtime.emit(&path, &Event::Click).map(Intent::Dispatch),
    }
}
