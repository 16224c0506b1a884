use crate::maze::{Direction, Maze};

/// A spanning tree of the maze, rooted at one cell, with ordered children per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    root: usize,
    /// Children of every cell, in probe order.
    children: Vec<Vec<usize>>,
    /// Cells in depth-first pre-order: every cell comes after its parent.
    preorder: Vec<usize>,
}

impl RootedTree {
    /// Walks the open sides of `maze` depth-first from `root`, making every newly reached cell a
    /// child of the cell it was reached from.
    ///
    /// Uses an explicit stack, so long corridors cannot overflow the call stack.
    pub fn build(maze: &Maze, root: usize) -> Self {
        let mut visited = vec![false; maze.len()];
        let mut children = vec![Vec::new(); maze.len()];
        let mut preorder = Vec::with_capacity(maze.len());

        visited[root] = true;
        let mut stack = vec![root];
        while let Some(cell) = stack.pop() {
            preorder.push(cell);
            let kids: Vec<usize> = maze
                .passages(cell, &Direction::PROBE_ORDER)
                .filter(|&next| !std::mem::replace(&mut visited[next], true))
                .collect();
            // Reversed so the first child is expanded first.
            stack.extend(kids.iter().rev());
            children[cell] = kids;
        }

        tracing::trace!(root, reached = preorder.len(), "built rooted tree");
        RootedTree {
            root,
            children,
            preorder,
        }
    }

    /// Builds a tree from an explicit children table, where `children[n]` lists the children of
    /// node `n`.
    ///
    /// # Panics
    /// If a node is listed as a child twice, or is reachable from `root` twice.
    pub fn from_children(root: usize, children: Vec<Vec<usize>>) -> Self {
        let mut seen = vec![false; children.len()];
        let mut preorder = Vec::with_capacity(children.len());
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            preorder.push(node);
            for &child in children[node].iter().rev() {
                assert!(!seen[child], "node {child} has more than one parent");
                seen[child] = true;
                stack.push(child);
            }
        }
        RootedTree {
            root,
            children,
            preorder,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Reached cells in pre-order, starting with the root.
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Number of cells in the tree.
    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preorder.is_empty()
    }

    /// Number of parent-child edges.
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }

    /// Number of node slots in the children table, reached or not.
    pub fn table_len(&self) -> usize {
        self.children.len()
    }

    /// Whether every node of the underlying table was reached from the root.
    pub fn is_spanning(&self) -> bool {
        self.preorder.len() == self.children.len()
    }
}
