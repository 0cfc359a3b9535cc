//! Interpretation collections: the tree that organises faults.

use strata_core::{CollectionId, FaultId};

/// A node of the interpretation tree.
///
/// Holds child ids only, no parent link. Nodes are created through
/// [`ProjectBuilder::add_collection`](crate::ProjectBuilder::add_collection),
/// which attaches each new node to exactly one parent, so the structure
/// is always a forest.
#[derive(Clone, Debug)]
pub struct InterpretationCollection {
    id: CollectionId,
    name: String,
    faults: Vec<FaultId>,
    children: Vec<CollectionId>,
}

impl InterpretationCollection {
    pub(crate) fn new(id: CollectionId, name: String) -> Self {
        Self {
            id,
            name,
            faults: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Identifier of this collection.
    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faults directly under this node, in insertion order.
    pub fn faults(&self) -> &[FaultId] {
        &self.faults
    }

    /// Child collections, in insertion order.
    pub fn children(&self) -> &[CollectionId] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_fault(&mut self, id: FaultId) {
        self.faults.push(id);
    }

    pub(crate) fn push_child(&mut self, id: CollectionId) {
        self.children.push(id);
    }
}
