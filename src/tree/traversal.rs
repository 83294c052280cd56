//! Common tree traversal logic shared by every derived operation.
//!
//! Each level of the tree is processed in two passes: one reports the
//! level's own entries to the visitor, the other recurses into the entries
//! that are containers. [`Order`] decides which pass runs first, for every
//! level of a single call. Containers are reported just like leaves; the
//! visitor decides what to keep.

use std::ops::ControlFlow;

use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};

use super::config::Order;
use super::node::{Container, Node, Path};

/// One visited entry.
#[derive(Debug, Clone)]
pub struct Visit<'a, V = Value> {
    pub value: &'a Node<V>,
    /// Last segment of `path`.
    pub key: &'a str,
    /// Full path from the traversal root, owned by this record.
    pub path: Path,
    /// The container that holds `value` under `key`.
    pub parent: &'a Container<V>,
    /// The container the traversal started from.
    pub root: &'a Container<V>,
    pub is_container: bool,
}

/// Walk every entry below `root`, in the given order.
///
/// Fails with [`Error::NonContainerRoot`] if `root` is a leaf. A visitor
/// returning `ControlFlow::Break` ends the walk early.
pub fn traverse<'a, V, F>(root: &'a Node<V>, order: Order, visitor: F) -> Result<()>
where
    F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
{
    let container = root.as_container().ok_or(Error::NonContainerRoot)?;
    // Break only means the visitor has what it needs.
    let _stopped_early = traverse_container(container, order, visitor).is_break();
    Ok(())
}

/// Walk every entry below a container. Returns `Break` if the visitor stopped early.
pub fn traverse_container<'a, V, F>(
    root: &'a Container<V>,
    order: Order,
    mut visitor: F,
) -> ControlFlow<()>
where
    F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
{
    trace!(?order, entries = root.len(), "starting traversal");
    let traversal = Traversal { root, order };
    let flow = traversal.level(root, &[], &mut visitor);
    if flow.is_break() {
        trace!("traversal stopped by visitor");
    }
    flow
}

struct Traversal<'a, V> {
    root: &'a Container<V>,
    order: Order,
}

impl<'a, V> Traversal<'a, V> {
    fn level<F>(&self, container: &'a Container<V>, prefix: &[String], visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
    {
        match self.order {
            Order::ShallowFirst => {
                self.visit_own_entries(container, prefix, visitor)?;
                self.descend_into_children(container, prefix, visitor)
            }
            Order::DeepFirst => {
                self.descend_into_children(container, prefix, visitor)?;
                self.visit_own_entries(container, prefix, visitor)
            }
        }
    }

    /// Report every entry of this level, containers included.
    fn visit_own_entries<F>(
        &self,
        container: &'a Container<V>,
        prefix: &[String],
        visitor: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
    {
        for (key, value) in container {
            visitor(Visit {
                value,
                key: key.as_str(),
                path: child_path(prefix, key),
                parent: container,
                root: self.root,
                is_container: value.is_container(),
            })?;
        }
        ControlFlow::Continue(())
    }

    /// Run a full level traversal for each container entry of this level.
    fn descend_into_children<F>(
        &self,
        container: &'a Container<V>,
        prefix: &[String],
        visitor: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
    {
        for (key, value) in container {
            if let Node::Container(child) = value {
                self.level(child, &child_path(prefix, key), visitor)?;
            }
        }
        ControlFlow::Continue(())
    }
}

fn child_path(prefix: &[String], key: &str) -> Path {
    let mut path = Vec::with_capacity(prefix.len() + 1);
    path.extend_from_slice(prefix);
    path.push(key.to_string());
    path
}
