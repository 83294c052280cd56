//! Derived operations over nested trees
//!
//! Every operation here is a visitor handed to [`traverse`]. Unless
//! `include_intermediate` is set, container entries are skipped and only
//! leaves reach the callback. Callbacks receive the full [`Visit`] record:
//! value, key, path, parent container and traversal root.

use std::ops::ControlFlow;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::tree::{Container, Node, OnMissing, Path, TraversalConfig, Visit, traverse, walk_mut};

/// A `(key, value, path)` triple as returned by [`entries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<'a, V = Value> {
    pub key: &'a str,
    pub value: &'a Node<V>,
    pub path: Path,
}

/// Drive a traversal, dropping container entries unless they were requested.
fn candidates<'a, V, F>(root: &'a Node<V>, config: TraversalConfig, mut visitor: F) -> Result<()>
where
    F: FnMut(Visit<'a, V>) -> ControlFlow<()>,
{
    traverse(root, config.order, |visit| {
        if visit.is_container && !config.include_intermediate {
            return ControlFlow::Continue(());
        }
        visitor(visit)
    })
}

/// Put `node` at `path` in an output tree, creating parents on demand.
fn place<W>(output: &mut Container<W>, path: &[String], node: Node<W>) {
    let Some((key, parents)) = path.split_last() else {
        return;
    };
    if let Some(position) = walk_mut(output, parents, OnMissing::Create) {
        position.insert(key.clone(), node);
    }
}

/// Call `callback` once for every candidate entry.
pub fn for_each<'a, V, F>(root: &'a Node<V>, config: TraversalConfig, mut callback: F) -> Result<()>
where
    F: FnMut(&Visit<'a, V>),
{
    candidates(root, config, |visit| {
        callback(&visit);
        ControlFlow::Continue(())
    })
}

/// Build a new tree holding `callback`'s result at the path of every candidate.
///
/// With intermediates included, a mapped container may be overwritten by its
/// own children (shallow-first) or may overwrite them (deep-first); the
/// later write wins.
pub fn map<'a, V, W, F>(root: &'a Node<V>, config: TraversalConfig, mut callback: F) -> Result<Node<W>>
where
    F: FnMut(&Visit<'a, V>) -> Node<W>,
{
    let mut result = Container::new();
    candidates(root, config, |visit| {
        let mapped = callback(&visit);
        place(&mut result, &visit.path, mapped);
        ControlFlow::Continue(())
    })?;
    Ok(Node::Container(result))
}

/// Build a new tree holding copies of the candidates `predicate` accepts.
///
/// Parents of kept entries are synthesized as empty containers, so branches
/// without a kept descendant do not appear in the result.
pub fn filter<'a, V, F>(root: &'a Node<V>, config: TraversalConfig, mut predicate: F) -> Result<Node<V>>
where
    V: Clone,
    F: FnMut(&Visit<'a, V>) -> bool,
{
    let mut result = Container::new();
    candidates(root, config, |visit| {
        if predicate(&visit) {
            place(&mut result, &visit.path, visit.value.clone());
        }
        ControlFlow::Continue(())
    })?;
    Ok(Node::Container(result))
}

/// First candidate accepted by `predicate`, in traversal order.
pub fn find<'a, V, F>(
    root: &'a Node<V>,
    config: TraversalConfig,
    mut predicate: F,
) -> Result<Option<&'a Node<V>>>
where
    F: FnMut(&Visit<'a, V>) -> bool,
{
    let mut found = None;
    candidates(root, config, |visit| {
        if predicate(&visit) {
            found = Some(visit.value);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    Ok(found)
}

/// Whether any candidate is accepted by `predicate`.
pub fn some<'a, V, F>(root: &'a Node<V>, config: TraversalConfig, predicate: F) -> Result<bool>
where
    F: FnMut(&Visit<'a, V>) -> bool,
{
    Ok(find(root, config, predicate)?.is_some())
}

/// Whether every candidate is accepted by `predicate`. True when there are none.
pub fn every<'a, V, F>(root: &'a Node<V>, config: TraversalConfig, mut predicate: F) -> Result<bool>
where
    F: FnMut(&Visit<'a, V>) -> bool,
{
    let mut every = true;
    candidates(root, config, |visit| {
        if predicate(&visit) {
            ControlFlow::Continue(())
        } else {
            every = false;
            ControlFlow::Break(())
        }
    })?;
    Ok(every)
}

pub fn values<V>(root: &Node<V>, config: TraversalConfig) -> Result<Vec<&Node<V>>> {
    let mut values = Vec::new();
    for_each(root, config, |visit| values.push(visit.value))?;
    Ok(values)
}

pub fn keys<V>(root: &Node<V>, config: TraversalConfig) -> Result<Vec<&str>> {
    let mut keys = Vec::new();
    for_each(root, config, |visit| keys.push(visit.key))?;
    Ok(keys)
}

pub fn paths<V>(root: &Node<V>, config: TraversalConfig) -> Result<Vec<Path>> {
    let mut paths = Vec::new();
    candidates(root, config, |visit| {
        paths.push(visit.path);
        ControlFlow::Continue(())
    })?;
    Ok(paths)
}

pub fn entries<V>(root: &Node<V>, config: TraversalConfig) -> Result<Vec<Entry<'_, V>>> {
    let mut entries = Vec::new();
    candidates(root, config, |visit| {
        entries.push(Entry {
            key: visit.key,
            value: visit.value,
            path: visit.path,
        });
        ControlFlow::Continue(())
    })?;
    Ok(entries)
}
