use super::tree::RootedTree;

/// What the analysis knows about the subtree hanging from one node.
///
/// Every edge from a node to one of its children weighs as much as that node has children, so
/// paths through many junctions beat merely long corridors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Subtree {
    /// Weighted distance from the node down to [`Subtree::furthest`].
    pub distance: u64,
    /// Leaf furthest from the node.
    pub furthest: usize,
    /// Weighted length of the longest path inside the subtree.
    pub length: u64,
    /// One end of that longest path.
    pub first: usize,
    /// The other end of that longest path.
    pub second: usize,
}

impl Subtree {
    fn leaf(node: usize) -> Self {
        Subtree {
            distance: 0,
            furthest: node,
            length: 0,
            first: node,
            second: node,
        }
    }
}

/// Per-node results of [`analyze`].
#[derive(Debug, Clone)]
pub struct TreeAnalysis {
    root: usize,
    subtrees: Box<[Subtree]>,
}

impl TreeAnalysis {
    pub fn subtree(&self, node: usize) -> &Subtree {
        &self.subtrees[node]
    }

    /// Ends of the longest weighted path of the whole tree.
    pub fn endpoints(&self) -> (usize, usize) {
        let root = &self.subtrees[self.root];
        (root.first, root.second)
    }

    /// Weighted length of the longest path of the whole tree.
    pub fn length(&self) -> u64 {
        self.subtrees[self.root].length
    }
}

/// Finds the longest weighted path of `tree` in one bottom-up sweep.
///
/// Children are handled before their parent by walking the pre-order backwards. At each node the
/// two deepest children give the best path through the node; it wins only if it is strictly
/// longer than the best path found inside a single child. Among equal children the one listed
/// first wins.
pub fn analyze(tree: &RootedTree) -> TreeAnalysis {
    let mut subtrees = vec![Subtree::default(); tree.table_len()].into_boxed_slice();

    for &node in tree.preorder().iter().rev() {
        let kids = tree.children(node);
        let Some((&last, rest)) = kids.split_last() else {
            subtrees[node] = Subtree::leaf(node);
            continue;
        };

        let (mut d1, mut deepest) = (subtrees[last].distance, last);
        let (mut d2, mut runner_up) = (0, None);
        let (mut l1, mut longest) = (subtrees[last].length, last);
        for &child in rest.iter().rev() {
            let sub = &subtrees[child];
            if sub.length >= l1 {
                l1 = sub.length;
                longest = child;
            }
            if sub.distance >= d1 {
                (d2, runner_up) = (d1, Some(deepest));
                (d1, deepest) = (sub.distance, child);
            } else if sub.distance >= d2 {
                (d2, runner_up) = (sub.distance, Some(child));
            }
        }

        let weight = kids.len() as u64;
        let (d1, d2) = (d1 + weight, d2 + weight);
        let furthest = subtrees[deepest].furthest;
        let summary = if d1 + d2 > l1 {
            Subtree {
                distance: d1,
                furthest,
                length: d1 + d2,
                first: furthest,
                // A single child pairs its furthest leaf with the node itself.
                second: runner_up.map_or(node, |child| subtrees[child].furthest),
            }
        } else {
            Subtree {
                distance: d1,
                furthest,
                ..subtrees[longest]
            }
        };
        subtrees[node] = summary;
    }

    let analysis = TreeAnalysis {
        root: tree.root(),
        subtrees,
    };
    tracing::trace!(
        endpoints = ?analysis.endpoints(),
        length = analysis.length(),
        "analyzed tree"
    );
    analysis
}
