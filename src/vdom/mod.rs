//! Render tree
//!
//! A [`Node`] is an immutable description of the UI produced by a view function. Elements carry
//! attributes, event [`Listener`]s and children; text nodes carry a string. Trees are built with
//! the tag helpers at the bottom of this module:
//!
//! ```
//! use kcal::vdom::{Node, button, div, h1};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Msg {
//!     Clicked,
//! }
//!
//! let tree: Node<Msg> = div()
//!     .class("app")
//!     .child(h1().text("Hello"))
//!     .child(button().on_click(Msg::Clicked).text("Go"))
//!     .into();
//! assert_eq!(tree.children().len(), 2);
//! ```

pub mod diff;
pub mod dom;

use std::collections::BTreeMap;

pub use diff::{Patch, PatchOp, diff};
pub use dom::Document;

/// Attribute that marks the control receiving keyboard input.
pub const FOCUSED: &str = "focused";

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<Msg> {
    Element(Element<Msg>),
    Text(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<Msg> {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub listeners: Vec<Listener<Msg>>,
    pub children: Vec<Node<Msg>>,
}

/// An event binding. Listeners hold the message to dispatch, never a callback into the runtime.
#[derive(Debug, Clone)]
pub enum Listener<Msg> {
    /// Fired when the text of an input changes; receives the complete new text.
    Input(fn(String) -> Msg),
    /// Fired when a control is activated.
    Click(Msg),
}

/// An event delivered to a node of the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(String),
    Click,
}

impl<Msg: PartialEq> PartialEq for Listener<Msg> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Listener::Input(a), Listener::Input(b)) => std::ptr::fn_addr_eq(*a, *b),
            (Listener::Click(a), Listener::Click(b)) => a == b,
            _ => false,
        }
    }
}

impl<Msg: Clone> Listener<Msg> {
    /// The message this listener produces for `event`, if it listens to that kind of event.
    pub fn handle(&self, event: &Event) -> Option<Msg> {
        match (self, event) {
            (Listener::Input(to_msg), Event::Input(text)) => Some(to_msg(text.clone())),
            (Listener::Click(msg), Event::Click) => Some(msg.clone()),
            _ => None,
        }
    }
}

impl<Msg> Node<Msg> {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element<Msg>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node<Msg>] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Follows `path` (child indices from this node) down the tree.
    pub fn get(&self, path: &[usize]) -> Option<&Node<Msg>> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Node<Msg>> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => match self {
                Node::Element(element) => element.children.get_mut(index)?.get_mut(rest),
                Node::Text(_) => None,
            },
        }
    }

    /// Path of the first node (pre-order) matching `predicate`, relative to this node.
    pub fn find(&self, predicate: &impl Fn(&Node<Msg>) -> bool) -> Option<Vec<usize>> {
        if predicate(self) {
            return Some(Vec::new());
        }
        self.children().iter().enumerate().find_map(|(index, child)| {
            child.find(predicate).map(|mut path| {
                path.insert(0, index);
                path
            })
        })
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl<Msg> Element<Msg> {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets the [`FOCUSED`] attribute when `focused` is true.
    pub fn focused(self, focused: bool) -> Self {
        if focused {
            self.attr(FOCUSED, "true")
        } else {
            self
        }
    }

    pub fn on_input(mut self, to_msg: fn(String) -> Msg) -> Self {
        self.listeners.push(Listener::Input(to_msg));
        self
    }

    pub fn on_click(mut self, msg: Msg) -> Self {
        self.listeners.push(Listener::Click(msg));
        self
    }

    pub fn child(mut self, child: impl Into<Node<Msg>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node<Msg>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn is_focused(&self) -> bool {
        self.attrs.contains_key(FOCUSED)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl<Msg> From<Element<Msg>> for Node<Msg> {
    fn from(element: Element<Msg>) -> Self {
        Node::Element(element)
    }
}

macro_rules! tags {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("A `<", stringify!($tag), ">` element.")]
            pub fn $tag<Msg>() -> Element<Msg> {
                Element::new(stringify!($tag))
            }
        )*
    };
}

tags!(div, h1, p, input, button, table, tr, th, td);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Typed(String),
        Pressed,
    }

    fn sample() -> Node<Msg> {
        div()
            .child(h1().text("Title"))
            .child(
                div()
                    .class("row form")
                    .child(input().focused(true).on_input(Msg::Typed))
                    .child(button().on_click(Msg::Pressed).text("Go")),
            )
            .into()
    }

    #[test]
    fn find_returns_path_of_first_match() {
        let tree = sample();
        let path = tree.find(&|node| node.as_element().is_some_and(Element::is_focused));
        assert_eq!(path, Some(vec![1, 0]));
        assert_eq!(tree.find(&|node| matches!(node, Node::Text(t) if t == "Nope")), None);
    }

    #[test]
    fn get_follows_child_indices() {
        let tree = sample();
        assert_eq!(tree.get(&[1, 1]).map(Node::text_content).as_deref(), Some("Go"));
        assert!(tree.get(&[1, 5]).is_none());
        assert!(tree.get(&[0, 0, 0]).is_none());
    }

    #[test]
    fn class_matching_splits_on_whitespace() {
        let tree = sample();
        let form = tree.get(&[1]).and_then(Node::as_element).unwrap();
        assert!(form.has_class("row"));
        assert!(form.has_class("form"));
        assert!(!form.has_class("ro"));
    }

    #[test]
    fn listeners_turn_events_into_messages() {
        let typed = Listener::Input(Msg::Typed);
        let pressed = Listener::Click(Msg::Pressed);

        assert_eq!(
            typed.handle(&Event::Input("Egg".into())),
            Some(Msg::Typed("Egg".into()))
        );
        assert_eq!(typed.handle(&Event::Click), None);
        assert_eq!(pressed.handle(&Event::Click), Some(Msg::Pressed));
        assert_eq!(pressed.handle(&Event::Input("x".into())), None);
    }

    #[test]
    fn click_listeners_compare_by_message() {
        assert_eq!(Listener::Click(Msg::Pressed), Listener::Click(Msg::Pressed));
        assert_ne!(
            Listener::Click(Msg::Pressed),
            Listener::Click(Msg::Typed(String::new()))
        );
        assert_ne!(Listener::Click(Msg::Pressed), Listener::Input(Msg::Typed));
    }
}
