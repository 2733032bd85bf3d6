//! Structural diff between two render trees.
//!
//! Children are matched by position. Patches are emitted in pre-order and every path is
//! relative to the root that was diffed, so applying them in order against a live copy of the
//! old tree yields the new tree.

use super::{Element, Listener, Node};

/// One mutation of the live document.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch<Msg> {
    pub path: Vec<usize>,
    pub op: PatchOp<Msg>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp<Msg> {
    /// Swap the node for a freshly materialized one.
    Replace(Node<Msg>),
    SetText(String),
    SetAttr { name: String, value: String },
    RemoveAttr(String),
    SetListeners(Vec<Listener<Msg>>),
    /// Append a child at the end of the element.
    Append(Node<Msg>),
    /// Drop children from the given index onwards.
    Truncate(usize),
}

/// Computes the patches that turn `old` into `new`. Identical trees yield no patches.
pub fn diff<Msg: Clone + PartialEq>(old: &Node<Msg>, new: &Node<Msg>) -> Vec<Patch<Msg>> {
    let mut patches = Vec::new();
    let mut path = Vec::new();
    diff_node(old, new, &mut path, &mut patches);
    patches
}

fn diff_node<Msg: Clone + PartialEq>(
    old: &Node<Msg>,
    new: &Node<Msg>,
    path: &mut Vec<usize>,
    patches: &mut Vec<Patch<Msg>>,
) {
    match (old, new) {
        (Node::Text(old_text), Node::Text(new_text)) => {
            if old_text != new_text {
                push(patches, path, PatchOp::SetText(new_text.clone()));
            }
        }
        (Node::Element(old_el), Node::Element(new_el)) if old_el.tag == new_el.tag => {
            diff_element(old_el, new_el, path, patches);
        }
        _ => push(patches, path, PatchOp::Replace(new.clone())),
    }
}

fn diff_element<Msg: Clone + PartialEq>(
    old: &Element<Msg>,
    new: &Element<Msg>,
    path: &mut Vec<usize>,
    patches: &mut Vec<Patch<Msg>>,
) {
    for (name, value) in &new.attrs {
        if old.attrs.get(name) != Some(value) {
            push(
                patches,
                path,
                PatchOp::SetAttr {
                    name: name.clone(),
                    value: value.clone(),
                },
            );
        }
    }
    for name in old.attrs.keys() {
        if !new.attrs.contains_key(name) {
            push(patches, path, PatchOp::RemoveAttr(name.clone()));
        }
    }

    if old.listeners != new.listeners {
        push(patches, path, PatchOp::SetListeners(new.listeners.clone()));
    }

    for (index, (old_child, new_child)) in old.children.iter().zip(&new.children).enumerate() {
        path.push(index);
        diff_node(old_child, new_child, path, patches);
        path.pop();
    }

    let common = old.children.len().min(new.children.len());
    if new.children.len() > common {
        for child in &new.children[common..] {
            push(patches, path, PatchOp::Append(child.clone()));
        }
    } else if old.children.len() > common {
        push(patches, path, PatchOp::Truncate(common));
    }
}

fn push<Msg>(patches: &mut Vec<Patch<Msg>>, path: &[usize], op: PatchOp<Msg>) {
    patches.push(Patch {
        path: path.to_vec(),
        op,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{div, p, table, td, tr};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Add,
        Clear,
    }

    fn rows(entries: &[&str]) -> Node<Msg> {
        table()
            .children(entries.iter().map(|e| tr().child(td().text(*e)).into()))
            .into()
    }

    #[test]
    fn identical_trees_need_no_patches() {
        let tree = rows(&["Egg", "Soup"]);
        assert!(diff(&tree, &tree.clone()).is_empty());
    }

    #[test]
    fn appended_row_becomes_single_append() {
        let old = rows(&["Egg"]);
        let new = rows(&["Egg", "Soup"]);

        let patches = diff(&old, &new);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].path, Vec::<usize>::new());
        assert!(matches!(&patches[0].op, PatchOp::Append(node) if node.text_content() == "Soup"));
    }

    #[test]
    fn removed_children_are_truncated() {
        let patches = diff(&rows(&["Egg", "Soup", "Tea"]), &rows(&["Egg"]));
        assert_eq!(
            patches,
            vec![Patch {
                path: vec![],
                op: PatchOp::Truncate(1)
            }]
        );
    }

    #[test]
    fn changed_text_is_patched_in_place() {
        let old: Node<Msg> = div().child(p().text("Total: 0 Calories")).into();
        let new: Node<Msg> = div().child(p().text("Total: 70 Calories")).into();

        assert_eq!(
            diff(&old, &new),
            vec![Patch {
                path: vec![0, 0],
                op: PatchOp::SetText("Total: 70 Calories".into())
            }]
        );
    }

    #[test]
    fn different_tag_replaces_whole_subtree() {
        let old: Node<Msg> = div().child(p().text("a")).into();
        let new: Node<Msg> = div().child(table()).into();

        let patches = diff(&old, &new);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].path, vec![0]);
        assert!(matches!(patches[0].op, PatchOp::Replace(_)));
    }

    #[test]
    fn attribute_changes_and_removals() {
        let old: Node<Msg> = div().attr("value", "Eg").attr("focused", "true").into();
        let new: Node<Msg> = div().attr("value", "Egg").into();

        let patches = diff(&old, &new);
        assert_eq!(
            patches.iter().map(|p| p.op.clone()).collect::<Vec<_>>(),
            vec![
                PatchOp::SetAttr {
                    name: "value".into(),
                    value: "Egg".into()
                },
                PatchOp::RemoveAttr("focused".into()),
            ]
        );
    }

    #[test]
    fn listener_change_is_reported() {
        let old: Node<Msg> = div().on_click(Msg::Add).into();
        let new: Node<Msg> = div().on_click(Msg::Clear).into();

        let patches = diff(&old, &new);
        assert_eq!(patches.len(), 1);
        assert_eq!(
            patches[0].op,
            PatchOp::SetListeners(vec![Listener::Click(Msg::Clear)])
        );
    }
}
