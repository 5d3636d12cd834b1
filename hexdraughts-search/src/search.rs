//! Minimax over a materialized game tree
//!
//! A pure bottom-up fold: child values are computed before their parent,
//! with an explicit post-order stack instead of recursion or parent-pointer
//! propagation. Values are memoized on the nodes.

use crate::tree::{GameTree, NodeId};
use hexdraughts_core::{evaluate, evaluate_terminal, Move, Player};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Compute the minimax value of every node and return the root value.
///
/// Frontier leaves (depth exhausted) take the static evaluation; terminal
/// nodes (no legal moves) take the win/loss evaluation. White nodes take
/// the maximum of their children, Black nodes the minimum.
pub fn minimax(tree: &mut GameTree) -> i32 {
    let mut stack = vec![(tree.root(), false)];

    while let Some((id, children_done)) = stack.pop() {
        if tree.get(id).value.is_some() {
            continue;
        }

        if tree.get(id).children.is_empty() {
            let node = tree.get(id);
            let value = if node.expanded {
                evaluate_terminal(&node.board, node.to_move)
            } else {
                evaluate(&node.board)
            };
            tree.get_mut(id).value = Some(value);
        } else if children_done {
            let value = {
                let node = tree.get(id);
                let child_values = node
                    .children
                    .iter()
                    .map(|&(_, child)| {
                        tree.get(child).value.expect("child evaluated before parent")
                    });
                match node.to_move {
                    Player::White => child_values.max(),
                    Player::Black => child_values.min(),
                }
                .expect("interior node has children")
            };
            tree.get_mut(id).value = Some(value);
        } else {
            stack.push((id, true));
            for &(_, child) in &tree.get(id).children {
                stack.push((child, false));
            }
        }
    }

    tree.get(tree.root()).value.expect("root evaluated")
}

/// Root moves whose child value equals the root minimax value.
///
/// Call after [`minimax`]; equally good moves are returned in child order
/// for the caller to break ties among.
pub fn best_moves(tree: &GameTree) -> Vec<Move> {
    let root = tree.get(NodeId::ROOT);
    let Some(root_value) = root.value else {
        return Vec::new();
    };
    root.children
        .iter()
        .filter(|&&(_, child)| tree.get(child).value == Some(root_value))
        .map(|&(mv, _)| mv)
        .collect()
}
