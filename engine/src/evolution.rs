//! Evolution chain flattening

use dexnote_protocol::ChainLink;

use crate::display::title_case;
use crate::error::EngineError;

/// Deepest chain the walker follows before assuming a cycle
///
/// Real chains are at most three levels deep.
pub const MAX_EVOLUTION_DEPTH: usize = 32;

/// A species and the species it can evolve into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    /// Raw species identifier ("pichu")
    pub species: String,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<EvolutionNode>) -> Self {
        self.children = children;
        self
    }

    /// Create from the protocol's chain link
    pub fn from_protocol(link: &ChainLink) -> Self {
        Self {
            species: link.species.name.clone(),
            children: link.evolves_to.iter().map(Self::from_protocol).collect(),
        }
    }
}

/// Flattened evolution chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineage {
    /// Display names in pre-order, root first
    pub names: Vec<String>,
    /// Set when the depth guard cut the walk short
    pub truncated: bool,
}

/// Walk the chain depth-first, pre-order, siblings in source order
///
/// Nodes at depth `max_depth` or below are not visited; the lineage is marked
/// truncated and a warning is logged instead. The root is always visited.
pub fn walk_lineage(root: &EvolutionNode, max_depth: usize) -> Lineage {
    let max_depth = max_depth.max(1);
    let mut lineage = Lineage::default();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth >= max_depth {
            lineage.truncated = true;
            continue;
        }

        lineage.names.push(title_case(&node.species));
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    if lineage.truncated {
        tracing::warn!(
            root = %root.species,
            error = %EngineError::EvolutionCycleSuspected { depth: max_depth },
            "evolution chain truncated"
        );
    }

    lineage
}
