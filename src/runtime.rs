//! Model-View-Update runtime
//!
//! [`Runtime`] is the only impure piece: it owns the current model, the render tree last
//! produced by the view and the live [`Document`]. Everything else is a pure function supplied
//! through [`Program`].

use std::fmt::Debug;

use tracing::{debug, info};

use crate::error::Result;
use crate::vdom::{Document, Event, Node, diff};

/// The pure half of an application.
pub trait Program {
    type Model: Clone + Debug;
    type Msg: Clone + PartialEq + Debug;

    /// The model the application starts from.
    fn init(&self) -> Self::Model;

    /// Computes the next model. Must not depend on anything but its arguments.
    fn update(&self, msg: Self::Msg, model: &Self::Model) -> Self::Model;

    /// Describes the UI for `model`.
    fn view(&self, model: &Self::Model) -> Node<Self::Msg>;
}

pub struct Runtime<P: Program> {
    program: P,
    model: P::Model,
    current_view: Node<P::Msg>,
    document: Document<P::Msg>,
    root: Vec<usize>,
}

impl<P: Program> Runtime<P> {
    /// Renders the initial model and mounts it under the element `mount_point` of `document`.
    pub fn start(program: P, mut document: Document<P::Msg>, mount_point: &str) -> Result<Self> {
        let model = program.init();
        let current_view = program.view(&model);
        let root = document.mount(mount_point, current_view.clone())?;
        info!(mount_point, ?root, "view mounted");

        Ok(Self {
            program,
            model,
            current_view,
            document,
            root,
        })
    }

    /// Runs `msg` through update and view, then patches the document with the difference.
    /// Returns the number of patches applied.
    ///
    /// If patching fails the runtime keeps its previous model and view.
    pub fn dispatch(&mut self, msg: P::Msg) -> Result<usize> {
        debug!(?msg, "dispatch");
        let next_model = self.program.update(msg, &self.model);
        let next_view = self.program.view(&next_model);
        let patches = diff(&self.current_view, &next_view);
        self.document.apply(&self.root, &patches)?;

        debug!(patches = patches.len(), "document patched");
        self.model = next_model;
        self.current_view = next_view;
        Ok(patches.len())
    }

    pub fn model(&self) -> &P::Model {
        &self.model
    }

    /// The render tree produced for the current model.
    pub fn view(&self) -> &Node<P::Msg> {
        &self.current_view
    }

    pub fn document(&self) -> &Document<P::Msg> {
        &self.document
    }

    /// The mounted root inside the live document.
    pub fn root(&self) -> Option<&Node<P::Msg>> {
        self.document.node(&self.root)
    }

    pub fn root_path(&self) -> &[usize] {
        &self.root
    }

    /// Absolute path of the focused element of the mounted view.
    pub fn focused_path(&self) -> Option<Vec<usize>> {
        self.document.find_focused(&self.root)
    }

    /// The message the element at `path` produces for `event`, without dispatching it.
    pub fn emit(&self, path: &[usize], event: &Event) -> Option<P::Msg> {
        self.document.emit(path, event)
    }
}
