/// Disjoint-set forest over cell indices, with path compression and union by size.
///
/// Roots have no parent; `size` is only meaningful for roots.
pub struct UnionFind {
    parent: Box<[Option<usize>]>,
    size: Box<[usize]>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton components.
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: vec![None; len].into_boxed_slice(),
            size: vec![1; len].into_boxed_slice(),
            components: len,
        }
    }

    /// Returns the root of the component containing `x`, relinking every cell on the way
    /// straight to that root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while let Some(parent) = self.parent[root] {
            root = parent;
        }

        let mut current = x;
        while let Some(parent) = self.parent[current] {
            if parent != root {
                self.parent[current] = Some(root);
            }
            current = parent;
        }
        root
    }

    /// Merges two components given by their roots. The smaller one goes under the larger;
    /// on a tie `root_a` goes under `root_b`. Returns the surviving root.
    ///
    /// Both arguments must already be roots, as returned by [`UnionFind::find`].
    pub fn union(&mut self, root_a: usize, root_b: usize) -> usize {
        debug_assert!(self.is_root(root_a), "{root_a} is not a root");
        debug_assert!(self.is_root(root_b), "{root_b} is not a root");
        if root_a == root_b {
            return root_a;
        }

        let (child, root) = if self.size[root_a] > self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child] = Some(root);
        self.size[root] += self.size[child];
        self.components -= 1;
        root
    }

    /// Whether `a` and `b` are in the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn is_root(&self, x: usize) -> bool {
        self.parent[x].is_none()
    }

    /// Size of the component whose root is `root`.
    pub fn component_size(&self, root: usize) -> usize {
        debug_assert!(self.is_root(root), "{root} is not a root");
        self.size[root]
    }

    /// Number of components left.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
