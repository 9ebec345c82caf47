use std::io::{self, Write};

use crate::node::{Color, Direction, NodeId};
use crate::tree::TreeSet;

////////////////////////////////////////////////////////////////////////////////

const RED: &str = "\x1b[31;1m";
const BLACK: &str = "\x1b[30;1m";
const GREEN: &str = "\x1b[32;1m";
const RESET: &str = "\x1b[0m";

/// How the printed node hangs off the line above it.
#[derive(Clone, Copy)]
enum Branch {
    Root,
    Upper,
    Lower,
}

impl Branch {
    fn glyph(self) -> &'static str {
        match self {
            Self::Root => "─ ",
            Self::Upper => "┌ ",
            Self::Lower => "└ ",
        }
    }
}

/// Renders a tree as depth-indented text, one node per line: right subtree
/// above, left subtree below, keys as two-digit uppercase hex. Balanced
/// trees color each key by its node color, plain trees print green.
///
/// Read-only: the renderer only ever asks the tree for the sentinel test,
/// keys, children and colors, and never touches the sentinel's key.
pub struct TreePrinter<'a, W> {
    tree: &'a TreeSet,
    // One (low, high) key span per depth; a column shows a rung while the
    // key being printed falls inside the span recorded for that depth.
    bough: Vec<(i64, i64)>,
    out: W,
}

impl<'a, W: Write> TreePrinter<'a, W> {
    pub fn new(tree: &'a TreeSet, out: W) -> Self {
        Self {
            tree,
            bough: Vec::new(),
            out,
        }
    }

    pub fn print(&mut self) -> io::Result<()> {
        if self.tree.is_empty() {
            return writeln!(self.out, "─ ");
        }
        let root = self.tree.root();
        let anchor = self.tree.key(root);
        self.bough.clear();
        self.bough.push((anchor, anchor));
        self.node(root, 0, Branch::Root)
    }

    fn node(&mut self, v: NodeId, dep: usize, rel: Branch) -> io::Result<()> {
        if self.tree.is_nil(v) {
            return Ok(());
        }
        let key = self.tree.key(v);
        let left = self.tree.child(v, Direction::Left);
        let right = self.tree.child(v, Direction::Right);

        let mut span = (key, key);
        if !self.tree.is_nil(left) {
            span.0 = self.tree.key(left);
        }
        if !self.tree.is_nil(right) {
            span.1 = self.tree.key(right);
        }
        self.bough.push(span);

        self.node(right, dep + 1, Branch::Upper)?;

        for i in 0..dep {
            let (low, high) = self.bough[i];
            if key < low || high < key {
                write!(self.out, "  ")?;
            } else {
                write!(self.out, "│ ")?;
            }
        }
        let color = if self.tree.is_balanced() {
            match self.tree.color(v) {
                Color::Red => RED,
                Color::Black => BLACK,
            }
        } else {
            GREEN
        };
        write!(self.out, "{}", rel.glyph())?;
        writeln!(self.out, "{}{:02X}", color, key)?;
        write!(self.out, "{}", RESET)?;

        self.node(left, dep + 1, Branch::Lower)?;

        self.bough.pop();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tree: &TreeSet) -> String {
        let mut buf = Vec::new();
        TreePrinter::new(tree, &mut buf).print().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_tree_prints_a_bare_branch() {
        assert_eq!(render(&TreeSet::balanced()), "─ \n");
        assert_eq!(render(&TreeSet::plain()), "─ \n");
    }

    #[test]
    fn balanced_tree_colors_nodes_by_color() {
        let mut tree = TreeSet::balanced();
        for key in [10, 20, 30] {
            tree.insert(key);
        }
        // Root 20 black, children 10 and 30 red; right subtree on top.
        let expected = concat!(
            "  ┌ \x1b[31;1m1E\n\x1b[0m",
            "─ \x1b[30;1m14\n\x1b[0m",
            "  └ \x1b[31;1m0A\n\x1b[0m",
        );
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn plain_tree_prints_green() {
        let mut tree = TreeSet::plain();
        tree.insert(5);
        assert_eq!(render(&tree), "─ \x1b[32;1m05\n\x1b[0m");
    }

    #[test]
    fn one_line_per_node() {
        let mut tree = TreeSet::balanced();
        for key in 0..32 {
            tree.insert(key);
        }
        assert_eq!(render(&tree).matches('\n').count(), 32);
    }
}
