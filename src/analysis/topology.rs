use crate::store::{NodeId, NodeRegistry};
use log::trace;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use smallvec::SmallVec;

/// Topological sort by depth-first search from the sinks.
///
/// Returns every reachable node after all of its parents. Starting points
/// are the nodes without children, in insertion order; a node's parents are
/// visited in insertion order as well, so the result depends only on the
/// order nodes were added and connected.
///
/// The graph is assumed acyclic. Nodes on a cycle that reaches no sink are
/// left out rather than reported; use [`check_acyclic`] to detect that.
pub fn sort<V, C>(registry: &NodeRegistry<V, C>) -> Vec<NodeId> {
    let count = registry.count();
    let mut order = Vec::with_capacity(count);
    let mut visited = vec![false; count];

    let sinks: Vec<NodeId> = registry
        .ids()
        .filter(|&id| registry.get_children(id).is_empty())
        .collect();

    for sink in sinks {
        visit(sink, registry, &mut visited, &mut order);
    }

    order
}

fn visit<V, C>(node: NodeId, registry: &NodeRegistry<V, C>, visited: &mut [bool], order: &mut Vec<NodeId>) {
    let idx = node.index();
    if visited[idx] {
        return;
    }
    visited[idx] = true;

    // Parent sets mirror child sets, so these are exactly the nodes with an
    // edge into `node`. Sorted by id to follow insertion order.
    let mut parents: SmallVec<[NodeId; 8]> = registry
        .get_parents(node)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default();
    parents.sort_unstable();

    for parent in parents {
        visit(parent, registry, visited, order);
    }

    trace!("topsort: emit {:?}", node);
    order.push(node);
}

/// Checks that the parent relation has no cycle.
///
/// On failure returns a node that lies on a cycle.
pub fn check_acyclic<V, C>(registry: &NodeRegistry<V, C>) -> Result<(), NodeId> {
    let mut graph: DiGraph<NodeId, ()> = DiGraph::with_capacity(registry.count(), registry.count());
    let indices: Vec<_> = registry.ids().map(|id| graph.add_node(id)).collect();

    for child in registry.ids() {
        if let Some(parents) = registry.get_parents(child) {
            for parent in parents.iter() {
                graph.add_edge(indices[parent.index()], indices[child.index()], ());
            }
        }
    }

    toposort(&graph, None).map(|_| ()).map_err(|cycle| graph[cycle.node_id()])
}
