#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

/// A disjoint-set forest over the elements `0..count`.
///
/// Every element starts in its own singleton set. `union` merges two sets
/// (by size, smaller under larger) and `find` compresses the path it walks,
/// so a long sequence of operations costs near-constant time per call.
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `count` singleton sets, one per element in `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
        }
    }

    /// Number of elements the structure was built over.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// If `x` is not an element of the structure.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // second pass: point everything on the walked path straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    /// Merging an already-merged pair changes nothing.
    pub fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }

        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }

    /// Reports whether `a` and `b` currently belong to the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
