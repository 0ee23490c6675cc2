use std::fmt::Display;

use dsu::DisjointSet;

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Element reserved for the virtual top node in both disjoint-set structures.
const TOP: usize = 0;

/// An N-by-N grid of sites that starts fully blocked and percolates once a
/// chain of open sites connects the top row to the bottom row.
///
/// Connectivity lives in two disjoint-set structures over the sites plus
/// virtual boundary elements. `full` holds both a virtual top and a virtual
/// bottom and answers `percolates` with a single query. `no_backwash` holds
/// the virtual top only and answers `is_full`: once the grid percolates,
/// every open bottom-row site in `full` reaches the top *through the virtual
/// bottom*, so fullness queries against `full` would report open bottom-row
/// sites as full with no real open path from the top. A structure that never
/// touches the bottom element cannot pick up that transitive shortcut.
pub struct Percolation {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    full: DisjointSet,
    no_backwash: DisjointSet,
}

impl Percolation {
    /// Creates an all-blocked `size`-by-`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument { what: "grid size" });
        }
        Ok(Self {
            size,
            open: vec![false; size * size],
            open_count: 0,
            full: DisjointSet::new(size * size + 2),
            no_backwash: DisjointSet::new(size * size + 1),
        })
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites opened so far.
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens site (`row`, `col`) and links it to the open sites around it.
    /// Opening an already-open site changes nothing observable.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check(row, col)?;
        let id = self.id(row, col);

        if !self.open[id - 1] {
            self.open[id - 1] = true;
            self.open_count += 1;
        }

        // top-row sites reach the virtual top in both structures; bottom-row
        // sites reach the virtual bottom in `full` only
        if row == 0 {
            self.full.union(id, TOP);
            self.no_backwash.union(id, TOP);
        }
        if row == self.size - 1 {
            let bottom = self.bottom();
            self.full.union(id, bottom);
        }

        for (nrow, ncol) in self.neighbours(row, col) {
            let neighbour = self.id(nrow, ncol);
            if self.open[neighbour - 1] {
                self.full.union(id, neighbour);
                self.no_backwash.union(id, neighbour);
            }
        }

        Ok(())
    }

    /// Is site (`row`, `col`) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        Ok(self.open[self.id(row, col) - 1])
    }

    /// Is site (`row`, `col`) connected to the top row through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        let id = self.id(row, col);
        if !self.open[id - 1] {
            return Ok(false);
        }
        Ok(self.no_backwash.connected(id, TOP))
    }

    /// Does an open path connect the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        let bottom = self.bottom();
        self.full.connected(TOP, bottom)
    }

    // (row, col) -> disjoint-set element, reserving 0 for the virtual top;
    // the open flag for the site lives at `id - 1`
    fn id(&self, row: usize, col: usize) -> usize {
        self.size * row + col + 1
    }

    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    fn neighbours(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .filter_map(|(drow, dcol)| {
                let row = row as isize + drow;
                let col = col as isize + dcol;

                if row >= 0 && row < self.size as isize && col >= 0 && col < self.size as isize {
                    return Some((row as usize, col as usize));
                }
                None
            })
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////

impl Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.open[self.id(row, col) - 1] {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
