//! Live document
//!
//! The document is the mutable counterpart of the render tree: a host body containing mount
//! points, into which a view is materialized once and then kept current by applying patches.

use super::diff::{Patch, PatchOp};
use super::{Element, Event, Node, div};
use crate::error::{Error, Result};

pub struct Document<Msg> {
    body: Node<Msg>,
    mounted: Vec<String>,
}

impl<Msg: Clone> Document<Msg> {
    /// Wraps a host body tree. Any element with an `id` attribute can serve as a mount point.
    pub fn new(body: Node<Msg>) -> Self {
        Self {
            body,
            mounted: Vec::new(),
        }
    }

    /// A body holding a single empty container with the given id.
    pub fn with_mount_point(id: &str) -> Self {
        Self::new(Element::new("body").child(div().id(id)).into())
    }

    pub fn body(&self) -> &Node<Msg> {
        &self.body
    }

    pub fn node(&self, path: &[usize]) -> Option<&Node<Msg>> {
        self.body.get(path)
    }

    /// Path of the element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Vec<usize>> {
        self.body
            .find(&|node| node.as_element().and_then(|el| el.get_attr("id")) == Some(id))
    }

    /// Path of the focused element below `root`, as an absolute path.
    pub fn find_focused(&self, root: &[usize]) -> Option<Vec<usize>> {
        let subtree = self.node(root)?;
        let relative = subtree.find(&|node| node.as_element().is_some_and(Element::is_focused))?;
        Some(join(root, &relative))
    }

    /// Materializes `view` as the last child of the mount point `id` and returns the absolute
    /// path of the mounted root. A mount point accepts one view only.
    pub fn mount(&mut self, id: &str, view: Node<Msg>) -> Result<Vec<usize>> {
        if self.mounted.iter().any(|m| m == id) {
            return Err(Error::AlreadyMounted(id.to_string()));
        }
        let mut path = self
            .find_by_id(id)
            .ok_or_else(|| Error::MountPointNotFound(id.to_string()))?;

        let Some(Node::Element(container)) = self.body.get_mut(&path) else {
            return Err(Error::MountPointNotFound(id.to_string()));
        };
        container.children.push(view);
        path.push(container.children.len() - 1);

        self.mounted.push(id.to_string());
        Ok(path)
    }

    /// Applies `patches` (relative to `root`) in order. Either every patch lands or the document
    /// is left as it was.
    pub fn apply(&mut self, root: &[usize], patches: &[Patch<Msg>]) -> Result<()> {
        let mut subtree = self
            .node(root)
            .cloned()
            .ok_or_else(|| Error::PatchTargetMissing(root.to_vec()))?;
        for patch in patches {
            apply_patch(&mut subtree, patch)
                .ok_or_else(|| Error::PatchTargetMissing(join(root, &patch.path)))?;
        }

        let slot = self
            .body
            .get_mut(root)
            .ok_or_else(|| Error::PatchTargetMissing(root.to_vec()))?;
        *slot = subtree;
        Ok(())
    }

    /// Delivers `event` to the node at `path` and returns the message of the first listener that
    /// handles it.
    pub fn emit(&self, path: &[usize], event: &Event) -> Option<Msg> {
        self.node(path)?
            .as_element()?
            .listeners
            .iter()
            .find_map(|listener| listener.handle(event))
    }
}

/// Applies one patch to `subtree`; `None` when its target is missing or of the wrong kind.
fn apply_patch<Msg: Clone>(subtree: &mut Node<Msg>, patch: &Patch<Msg>) -> Option<()> {
    let node = subtree.get_mut(&patch.path)?;
    match (&patch.op, node) {
        (PatchOp::Replace(replacement), node) => *node = replacement.clone(),
        (PatchOp::SetText(text), Node::Text(current)) => current.clone_from(text),
        (PatchOp::SetAttr { name, value }, Node::Element(el)) => {
            el.attrs.insert(name.clone(), value.clone());
        }
        (PatchOp::RemoveAttr(name), Node::Element(el)) => {
            el.attrs.remove(name);
        }
        (PatchOp::SetListeners(listeners), Node::Element(el)) => {
            el.listeners.clone_from(listeners);
        }
        (PatchOp::Append(child), Node::Element(el)) => el.children.push(child.clone()),
        (PatchOp::Truncate(len), Node::Element(el)) => el.children.truncate(*len),
        _ => return None,
    }
    Some(())
}

fn join(root: &[usize], relative: &[usize]) -> Vec<usize> {
    let mut path = Vec::with_capacity(root.len() + relative.len());
    path.extend_from_slice(root);
    path.extend_from_slice(relative);
    path
}
