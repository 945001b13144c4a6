use crate::grid::Position;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct SearchNode {
    pub position: Position,
    pub cost_so_far: usize,
    pub heuristic: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl SearchNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena holding every node created by one search. Dropping the tree releases
/// all of them at once, frontier leftovers included.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new(root: Position, heuristic: usize) -> Self {
        SearchTree {
            nodes: vec![SearchNode {
                position: root,
                cost_so_far: 0,
                heuristic,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a child one step further from the root than `parent`.
    pub fn add_child(&mut self, parent: NodeId, position: Position, heuristic: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let cost_so_far = self.nodes[parent.0].cost_so_far + 1;
        self.nodes.push(SearchNode {
            position,
            cost_so_far,
            heuristic,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Positions from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.next?);
        self.next = node.parent;
        Some(node)
    }
}
