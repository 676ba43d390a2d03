//! Diff two evaluated documents into patches a live host can apply.
//!
//! Paths are child indices from the document root. Unkeyed children are
//! compared by position. Sibling lists where every child carries a unique
//! key are matched by key, so a moved section becomes one
//! `ReorderChildren` patch instead of a cascade of replacements.
//!
//! Patches for one keyed list are emitted in apply order: removals by
//! descending old index, then the reorder of surviving keys, then creations
//! by ascending new index, then updates inside matched children.

use crate::vdom::{EmbedScript, VNode, VirtualDomDocument};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VDocPatch {
    CreateNode { path: Vec<u32>, node: VNode },
    RemoveNode { path: Vec<u32> },
    ReplaceNode { path: Vec<u32>, node: VNode },
    /// Reorder the children at `path` to match `keys`
    ReorderChildren { path: Vec<u32>, keys: Vec<String> },
    UpdateAttributes {
        path: Vec<u32>,
        attributes: BTreeMap<String, String>,
    },
    UpdateStyles {
        path: Vec<u32>,
        styles: BTreeMap<String, String>,
    },
    UpdateText { path: Vec<u32>, content: String },
    UpdateTitle { title: String },
    UpdatePageStyles { styles: BTreeMap<String, String> },
    UpdateEmbeds { embeds: Vec<EmbedScript> },
}

/// Diff two documents and generate patches
pub fn diff_vdocument(old: &VirtualDomDocument, new: &VirtualDomDocument) -> Vec<VDocPatch> {
    let mut patches = diff_page_meta(old, new);
    diff_children(&old.nodes, &new.nodes, &[], &mut patches);
    patches
}

/// Patches for title, page styles and embeds only, no node patches
pub fn diff_page_meta(old: &VirtualDomDocument, new: &VirtualDomDocument) -> Vec<VDocPatch> {
    let mut patches = Vec::new();

    if old.title != new.title {
        patches.push(VDocPatch::UpdateTitle {
            title: new.title.clone(),
        });
    }
    if old.page_styles != new.page_styles {
        patches.push(VDocPatch::UpdatePageStyles {
            styles: new.page_styles.clone(),
        });
    }
    if old.embeds != new.embeds {
        patches.push(VDocPatch::UpdateEmbeds {
            embeds: new.embeds.clone(),
        });
    }
    patches
}

/// Diff two subtrees rooted at `path`
pub fn diff_vnode(old: &VNode, new: &VNode, path: Vec<u32>) -> Vec<VDocPatch> {
    let mut patches = Vec::new();
    diff_same_path(old, new, path, &mut patches);
    patches
}

fn child_path(path: &[u32], index: usize) -> Vec<u32> {
    let mut child = path.to_vec();
    child.push(index as u32);
    child
}

fn diff_children(old: &[VNode], new: &[VNode], path: &[u32], patches: &mut Vec<VDocPatch>) {
    if let (Some(old_keys), Some(new_keys)) = (unique_keys(old), unique_keys(new)) {
        diff_keyed_children(old, &old_keys, new, &new_keys, path, patches);
        return;
    }

    let max_len = old.len().max(new.len());
    // removals from the end so earlier paths stay valid
    for i in (new.len()..old.len()).rev() {
        patches.push(VDocPatch::RemoveNode {
            path: child_path(path, i),
        });
    }
    for i in 0..max_len {
        match (old.get(i), new.get(i)) {
            (Some(old_node), Some(new_node)) => {
                diff_same_path(old_node, new_node, child_path(path, i), patches)
            }
            (None, Some(node)) => patches.push(VDocPatch::CreateNode {
                path: child_path(path, i),
                node: node.clone(),
            }),
            _ => {}
        }
    }
}

/// Keys of every child, or `None` unless all children carry distinct keys
fn unique_keys(children: &[VNode]) -> Option<Vec<&str>> {
    if children.is_empty() {
        return None;
    }
    let keys: Vec<&str> = children.iter().map(VNode::key).collect::<Option<_>>()?;
    let distinct: HashSet<&str> = keys.iter().copied().collect();
    (distinct.len() == keys.len()).then_some(keys)
}

fn diff_keyed_children(
    old: &[VNode],
    old_keys: &[&str],
    new: &[VNode],
    new_keys: &[&str],
    path: &[u32],
    patches: &mut Vec<VDocPatch>,
) {
    let new_set: HashSet<&str> = new_keys.iter().copied().collect();
    let old_index: HashMap<&str, usize> = old_keys
        .iter()
        .enumerate()
        .map(|(index, key)| (*key, index))
        .collect();

    for (index, key) in old_keys.iter().enumerate().rev() {
        if !new_set.contains(key) {
            patches.push(VDocPatch::RemoveNode {
                path: child_path(path, index),
            });
        }
    }

    let surviving_old: Vec<&str> = old_keys
        .iter()
        .copied()
        .filter(|key| new_set.contains(key))
        .collect();
    let surviving_new: Vec<&str> = new_keys
        .iter()
        .copied()
        .filter(|key| old_index.contains_key(key))
        .collect();
    if surviving_old != surviving_new {
        patches.push(VDocPatch::ReorderChildren {
            path: path.to_vec(),
            keys: surviving_new.iter().map(|key| key.to_string()).collect(),
        });
    }

    for (index, key) in new_keys.iter().enumerate() {
        if !old_index.contains_key(key) {
            patches.push(VDocPatch::CreateNode {
                path: child_path(path, index),
                node: new[index].clone(),
            });
        }
    }

    for (index, key) in new_keys.iter().enumerate() {
        if let Some(&previous) = old_index.get(key) {
            diff_same_path(&old[previous], &new[index], child_path(path, index), patches);
        }
    }
}

fn diff_same_path(old: &VNode, new: &VNode, path: Vec<u32>, patches: &mut Vec<VDocPatch>) {
    match (old, new) {
        (
            VNode::Element {
                tag: old_tag,
                attributes: old_attrs,
                styles: old_styles,
                children: old_children,
                ..
            },
            VNode::Element {
                tag: new_tag,
                attributes: new_attrs,
                styles: new_styles,
                children: new_children,
                ..
            },
        ) if old_tag == new_tag => {
            if old_attrs != new_attrs {
                patches.push(VDocPatch::UpdateAttributes {
                    path: path.clone(),
                    attributes: new_attrs.clone(),
                });
            }
            if old_styles != new_styles {
                patches.push(VDocPatch::UpdateStyles {
                    path: path.clone(),
                    styles: new_styles.clone(),
                });
            }
            diff_children(old_children, new_children, &path, patches);
        }
        (VNode::Text { content: old_text }, VNode::Text { content: new_text }) => {
            if old_text != new_text {
                patches.push(VDocPatch::UpdateText {
                    path,
                    content: new_text.clone(),
                });
            }
        }
        _ if old == new => {}
        _ => patches.push(VDocPatch::ReplaceNode {
            path,
            node: new.clone(),
        }),
    }
}
