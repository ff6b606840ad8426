//! Concrete parse tree and its box-drawn rendering.
//!
//! Interior nodes are named after grammar nonterminals, leaves after the tokens they matched
//! (`(ID, x)`, `(SYMBOL, ;)`, ...). A rule that fired its ε-alternative gets a single `epsilon`
//! leaf so the derivation stays visible.
//!
//! Rendering, searching and dropping all walk the tree with an explicit stack, so arbitrarily
//! deep trees never recurse.

use std::fmt;

use crate::grammar::NonTerminal;

/// Label of the leaf attached under an ε-derivation.
pub const EPSILON: &str = "epsilon";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    name: String,
    terminal: bool,
    children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn nonterminal(nt: NonTerminal) -> Self {
        Self {
            name: nt.name().to_string(),
            terminal: false,
            children: Vec::new(),
        }
    }

    /// A terminal leaf with a pre-rendered label.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terminal: true,
            children: Vec::new(),
        }
    }

    pub fn epsilon() -> Self {
        Self::leaf(EPSILON)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    pub fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    /// First node named `name`, in pre-order.
    pub fn find(&self, name: &str) -> Option<&ParseNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.name == name {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Box-drawn rendering: the root alone on the first line, then one line per descendant.
    ///
    /// ## Notes
    /// - No trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.name.clone();
        let mut stack: Vec<(&ParseNode, String, bool)> = Vec::new();
        push_children(&mut stack, self, "");

        while let Some((node, prefix, last)) = stack.pop() {
            out.push('\n');
            out.push_str(&prefix);
            out.push_str(if last { LAST_BRANCH } else { BRANCH });
            out.push_str(&node.name);

            let child_prefix = format!("{}{}", prefix, if last { BLANK } else { CONTINUATION });
            push_children(&mut stack, node, &child_prefix);
        }
        out
    }
}

/// Queue `node`'s children so the first child is popped first.
fn push_children<'a>(stack: &mut Vec<(&'a ParseNode, String, bool)>, node: &'a ParseNode, prefix: &str) {
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), index + 1 == count));
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
