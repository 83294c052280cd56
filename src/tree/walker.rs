//! Path walker - resolves a key sequence to a container inside a tree

use tracing::debug;

use super::node::{Container, Node};

/// What to do when a step of the path does not lead to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    /// Replace the missing or non-container value with an empty container.
    Create,
    /// Give up and report the path as not found.
    Stop,
}

/// Follow `path` from `target` without modifying anything.
///
/// Returns `None` as soon as a step does not lead to a container. An empty
/// path resolves to `target` itself.
pub fn walk<'a, V>(target: &'a Container<V>, path: &[String]) -> Option<&'a Container<V>> {
    path.iter()
        .try_fold(target, |current, step| current.get(step.as_str())?.as_container())
}

/// Follow `path` from `target`, optionally creating missing containers.
///
/// With [`OnMissing::Create`] every step that holds a leaf, `Absent`, or
/// nothing is overwritten by an empty container, so the call always succeeds.
/// Every segment counts as a step, including empty strings.
pub fn walk_mut<'a, V>(
    mut target: &'a mut Container<V>,
    path: &[String],
    on_missing: OnMissing,
) -> Option<&'a mut Container<V>> {
    for step in path {
        let slot = match on_missing {
            OnMissing::Create => {
                let slot = target
                    .entry(step.clone())
                    .or_insert_with(Node::container);
                if !slot.is_container() {
                    debug!(key = %step, "replacing non-container with empty container");
                    *slot = Node::container();
                }
                slot
            }
            OnMissing::Stop => target.get_mut(step.as_str())?,
        };
        target = slot.as_container_mut()?;
    }
    Some(target)
}
