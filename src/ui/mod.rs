//! Calorie counter UI
//!
//! Model-View-Update layout:
//! - Model (state.rs): the immutable [`Model`] snapshot
//! - Msg (actions.rs): every state transition as a closed enum
//! - Update (logic.rs): pure `(Msg, &Model) -> Model`
//! - View (view/): pure `&Model -> Node<Msg>`
//! - Input (input.rs): key presses routed to the focused element
//! - Paint (paint/): draws the live document with ratatui

pub mod actions;
pub mod input;
pub mod logic;
pub mod paint;
pub mod state;
pub mod view;

use ratatui::Frame;

use crate::error::Result;
use crate::runtime::{Program, Runtime};
use crate::vdom::{Document, Node};

pub use actions::Msg;
pub use input::handle_key_event;
pub use state::{Focus, Model};
pub use view::Labels;

/// The calorie counter as a [`Program`].
#[derive(Debug, Clone, Default)]
pub struct CalorieCounter {
    labels: Labels,
}

impl CalorieCounter {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }
}

impl Program for CalorieCounter {
    type Model = Model;
    type Msg = Msg;

    fn init(&self) -> Model {
        Model::new()
    }

    fn update(&self, msg: Msg, model: &Model) -> Model {
        logic::update(msg, model)
    }

    fn view(&self, model: &Model) -> Node<Msg> {
        view::view(&self.labels, model)
    }
}

/// Starts the calorie counter inside `document` at the element `mount_point`.
pub fn start(
    labels: Labels,
    document: Document<Msg>,
    mount_point: &str,
) -> Result<Runtime<CalorieCounter>> {
    Runtime::start(CalorieCounter::new(labels), document, mount_point)
}

/// Paints the mounted view of `runtime`.
pub fn render(frame: &mut Frame, runtime: &Runtime<CalorieCounter>) {
    if let Some(root) = runtime.root() {
        paint::paint(frame, root);
    }
}
