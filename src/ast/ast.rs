use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, NumberExpr};

/// A node of the expression tree.
///
/// Closed over the two shapes the grammar can produce, so any consumer has to
/// handle both.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Node {
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Number(number) => number.get_span(),
            Node::Binary(binary) => &binary.span,
        }
    }
}

// Long operator chains build deep trees, so children are torn down from a
// worklist instead of through recursive drop glue.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Moves the binary children of `node` onto `pending`, leaving leaves behind.
fn detach_children(node: &mut Node, pending: &mut Vec<Node>) {
    let Node::Binary(binary) = node else {
        return;
    };

    for child in [&mut binary.left, &mut binary.right] {
        if let Node::Binary(_) = **child {
            let leaf = Node::Number(NumberExpr {
                token: binary.operator.clone(),
            });
            pending.push(std::mem::replace(&mut **child, leaf));
        }
    }
}

impl From<NumberExpr> for Node {
    fn from(value: NumberExpr) -> Self {
        Node::Number(value)
    }
}

impl From<BinaryExpr> for Node {
    fn from(value: BinaryExpr) -> Self {
        Node::Binary(value)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(number) => write!(f, "{}", number),
            Node::Binary(binary) => write!(f, "{}", binary),
        }
    }
}
