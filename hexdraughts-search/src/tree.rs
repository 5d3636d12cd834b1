//! Game tree structure and expansion
//!
//! Uses arena allocation: nodes live in a `Vec` and refer to each other by
//! index, giving the tree single ownership of every hypothetical board
//! while parent links stay cheap non-owning back-references.

use hexdraughts_core::{all_moves, Board, Move, Player};

/// Node identifier (index into arena)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// One hypothetical board state in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Board after `incoming` was applied
    pub board: Board,
    /// Side to move at this node
    pub to_move: Player,
    /// Parent node (None for root)
    pub parent: Option<NodeId>,
    /// Move that led to this node (None for root)
    pub incoming: Option<Move>,
    /// Children: (move, node_id) pairs
    pub children: Vec<(Move, NodeId)>,
    /// Whether expansion was attempted; an expanded node with no children
    /// is terminal.
    pub expanded: bool,
    /// Memoized evaluation, filled in bottom-up by minimax
    pub value: Option<i32>,
}

/// Search tree with arena allocation.
///
/// A tree is built for a single search invocation and discarded afterwards;
/// nodes are never shared across invocations.
#[derive(Debug)]
pub struct GameTree {
    nodes: Vec<SearchNode>,
}

impl GameTree {
    /// Create a new tree rooted at the given position.
    pub fn new(board: Board, to_move: Player) -> Self {
        let root = SearchNode {
            board,
            to_move,
            parent: None,
            incoming: None,
            children: Vec::new(),
            expanded: false,
            value: None,
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A node is terminal when expansion produced no children.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        let node = self.get(id);
        node.expanded && node.children.is_empty()
    }

    /// Materialize the states reachable from `id` in one ply.
    ///
    /// Children inherit the move generator's mandatory-capture discipline:
    /// when any capture exists for the side to move, only capture children
    /// are created. Each child wraps its own clone of the board.
    pub fn expand(&mut self, id: NodeId) {
        if self.nodes[id.0].expanded {
            return;
        }
        let side = self.nodes[id.0].to_move;
        let list = all_moves(&self.nodes[id.0].board, side);

        for mv in list.moves {
            let child_board = self.nodes[id.0].board.apply(&mv);
            let child_id = NodeId(self.nodes.len());
            self.nodes.push(SearchNode {
                board: child_board,
                to_move: side.opponent(),
                parent: Some(id),
                incoming: Some(mv),
                children: Vec::new(),
                expanded: false,
                value: None,
            });
            self.nodes[id.0].children.push((mv, child_id));
        }
        self.nodes[id.0].expanded = true;
    }

    /// Expand the tree to a fixed ply depth with an explicit worklist, so
    /// large depths cannot overflow the stack.
    pub fn expand_to_depth(&mut self, depth: u32) {
        let mut worklist = vec![(NodeId::ROOT, depth)];
        while let Some((id, remaining)) = worklist.pop() {
            if remaining == 0 {
                continue;
            }
            self.expand(id);
            for i in 0..self.nodes[id.0].children.len() {
                let child = self.nodes[id.0].children[i].1;
                worklist.push((child, remaining - 1));
            }
        }
    }
}
