use std::collections::HashMap;
use tracing::debug;

pub type PrimitiveId = u32;

/// A sememe in the hierarchy. A node that is its own parent is a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveNode {
    pub id: PrimitiveId,
    pub name: String,
    pub parent: PrimitiveId,
}

/// Sememe tree, immutable once built.
#[derive(Debug, Default)]
pub struct PrimitiveHierarchy {
    nodes: HashMap<PrimitiveId, PrimitiveNode>,
    by_name: HashMap<String, PrimitiveId>,
}

pub struct HierarchyBuilder {
    nodes: Vec<PrimitiveNode>,
}

impl HierarchyBuilder {
    pub fn node(mut self, id: PrimitiveId, name: &str, parent: PrimitiveId) -> Self {
        self.nodes.push(PrimitiveNode {
            id,
            name: name.to_string(),
            parent,
        });
        self
    }

    pub fn push(&mut self, node: PrimitiveNode) {
        self.nodes.push(node);
    }

    pub fn build(self) -> PrimitiveHierarchy {
        let mut hierarchy = PrimitiveHierarchy::default();
        for node in self.nodes {
            let id = node.id;
            let name = node.name.clone();
            // Later definitions of the same name or id win.
            if let Some(previous) = hierarchy.by_name.insert(name.clone(), id) {
                if previous != id {
                    debug!(name = %name, previous, id, "sememe name redefined");
                }
            }
            if let Some(replaced) = hierarchy.nodes.insert(id, node) {
                if replaced.name != name && hierarchy.by_name.get(&replaced.name) == Some(&id) {
                    debug!(id, old = %replaced.name, new = %name, "sememe id redefined");
                    hierarchy.by_name.remove(&replaced.name);
                }
            }
        }
        hierarchy
    }
}

impl PrimitiveHierarchy {
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn is_primitive(&self, token: &str) -> bool {
        self.by_name.contains_key(token)
    }

    pub fn id_of(&self, token: &str) -> Option<PrimitiveId> {
        self.by_name.get(token).copied()
    }

    pub fn node(&self, id: PrimitiveId) -> Option<&PrimitiveNode> {
        self.nodes.get(&id)
    }

    /// Ids from `token` itself up to its root, nearest first.
    /// Empty when `token` is not a registered sememe.
    pub fn ancestor_chain(&self, token: &str) -> Vec<PrimitiveId> {
        let Some(start) = self.id_of(token) else {
            return Vec::new();
        };

        let mut chain = vec![start];
        let mut current = start;
        while let Some(node) = self.nodes.get(&current) {
            let parent = node.parent;
            if parent == current || !self.nodes.contains_key(&parent) || chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Walks the chain of `p1` and stops at the first entry also found in
    /// the chain of `p2`; the result is the sum of both positions.
    /// `None` when the chains share nothing (or a token is unknown).
    pub fn distance(&self, p1: &str, p2: &str) -> Option<u32> {
        let chain1 = self.ancestor_chain(p1);
        let chain2 = self.ancestor_chain(p2);

        chain1.iter().enumerate().find_map(|(i, id)| {
            chain2
                .iter()
                .position(|other| other == id)
                .map(|j| (i + j) as u32)
        })
    }
}
