//! Connection topologies for oscillator networks.
//!
//! A network's coupling structure is a symmetric, self-loop-free graph over the
//! oscillator indices. Built-in kinds cover the classic Kuramoto setups
//! (all-to-all, square lattices, a bidirectional chain), while spatial variants
//! connect oscillators whose associated data points lie within a connectivity radius.
//!
//! The adjacency can be stored either as a dense boolean matrix or as
//! per-oscillator neighbor lists. Both representations expose identical
//! connectivity; the choice only affects memory layout.

use crate::error::{Error, Result};

/// Static connection topology kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// No edges at all (spatial variants start here and connect later).
    None,
    /// Every pair of distinct oscillators is connected.
    AllToAll,
    /// Square lattice, 4-neighborhood (up/down/left/right).
    GridFour,
    /// Square lattice, 8-neighborhood (4-neighborhood plus diagonals).
    GridEight,
    /// Bidirectional chain `0 - 1 - 2 - ... - (n-1)`.
    ListBidirectional,
}

impl Connectivity {
    fn name(self) -> &'static str {
        match self {
            Connectivity::None => "none",
            Connectivity::AllToAll => "all-to-all",
            Connectivity::GridFour => "grid-four",
            Connectivity::GridEight => "grid-eight",
            Connectivity::ListBidirectional => "list-bidirectional",
        }
    }
}

/// Storage representation for the adjacency structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRepr {
    /// Dense row-major boolean matrix. O(1) edge queries, O(n²) memory.
    #[default]
    Matrix,
    /// Per-oscillator neighbor index lists. Compact for sparse topologies.
    List,
}

#[derive(Debug, Clone)]
enum Storage {
    Matrix { size: usize, cells: Vec<bool> },
    List { lists: Vec<Vec<usize>> },
}

/// Symmetric adjacency structure over oscillator indices.
///
/// Self connections are never present: `has_connection(i, i)` is always false.
#[derive(Debug, Clone)]
pub struct Adjacency {
    storage: Storage,
}

impl Adjacency {
    /// Build a static topology over `size` oscillators.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `size` is zero.
    /// - [`Error::InvalidTopology`] if a grid kind is requested and `size` is
    ///   not a perfect square.
    pub fn build(size: usize, kind: Connectivity, repr: AdjacencyRepr) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyInput);
        }

        let mut adjacency = Self::empty(size, repr);
        match kind {
            Connectivity::None => {}
            Connectivity::AllToAll => {
                for i in 0..size {
                    for j in (i + 1)..size {
                        adjacency.connect(i, j);
                    }
                }
            }
            Connectivity::GridFour | Connectivity::GridEight => {
                let side = grid_side(size).ok_or(Error::InvalidTopology {
                    topology: kind.name(),
                    size,
                })?;
                let diagonals = kind == Connectivity::GridEight;
                for row in 0..side {
                    for col in 0..side {
                        let i = row * side + col;
                        // Edges toward larger indices only; symmetry fills the rest.
                        if col + 1 < side {
                            adjacency.connect(i, i + 1);
                        }
                        if row + 1 < side {
                            adjacency.connect(i, i + side);
                            if diagonals {
                                if col > 0 {
                                    adjacency.connect(i, i + side - 1);
                                }
                                if col + 1 < side {
                                    adjacency.connect(i, i + side + 1);
                                }
                            }
                        }
                    }
                }
            }
            Connectivity::ListBidirectional => {
                for i in 1..size {
                    adjacency.connect(i - 1, i);
                }
            }
        }
        Ok(adjacency)
    }

    /// Build a proximity topology: `i` and `j` are connected iff the Euclidean
    /// distance between `points[i]` and `points[j]` is at most `radius`.
    ///
    /// Must be called again from scratch whenever the radius changes; the
    /// structure is not updated incrementally.
    pub fn by_radius(points: &[Vec<f64>], radius: f64, repr: AdjacencyRepr) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut adjacency = Self::empty(points.len(), repr);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if crate::cluster::util::euclidean(&points[i], &points[j]) <= radius {
                    adjacency.connect(i, j);
                }
            }
        }
        Ok(adjacency)
    }

    fn empty(size: usize, repr: AdjacencyRepr) -> Self {
        let storage = match repr {
            AdjacencyRepr::Matrix => Storage::Matrix {
                size,
                cells: vec![false; size * size],
            },
            AdjacencyRepr::List => Storage::List {
                lists: vec![Vec::new(); size],
            },
        };
        Self { storage }
    }

    /// Insert the symmetric edge `i <-> j`. Self edges are ignored.
    fn connect(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        match &mut self.storage {
            Storage::Matrix { size, cells } => {
                cells[i * *size + j] = true;
                cells[j * *size + i] = true;
            }
            Storage::List { lists } => {
                if let Err(pos) = lists[i].binary_search(&j) {
                    lists[i].insert(pos, j);
                }
                if let Err(pos) = lists[j].binary_search(&i) {
                    lists[j].insert(pos, i);
                }
            }
        }
    }

    /// Number of oscillators covered by this structure.
    pub fn size(&self) -> usize {
        match &self.storage {
            Storage::Matrix { size, .. } => *size,
            Storage::List { lists } => lists.len(),
        }
    }

    /// Whether oscillators `i` and `j` are connected.
    pub fn has_connection(&self, i: usize, j: usize) -> bool {
        match &self.storage {
            Storage::Matrix { size, cells } => cells[i * *size + j],
            Storage::List { lists } => lists[i].binary_search(&j).is_ok(),
        }
    }

    /// Neighbor indices of oscillator `i`, in ascending order.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        match &self.storage {
            Storage::Matrix { size, cells } => (0..*size)
                .filter(|&j| cells[i * *size + j])
                .collect(),
            Storage::List { lists } => lists[i].clone(),
        }
    }

    /// Number of neighbors of oscillator `i`.
    pub fn degree(&self, i: usize) -> usize {
        match &self.storage {
            Storage::Matrix { size, cells } => {
                cells[i * *size..(i + 1) * *size].iter().filter(|&&c| c).count()
            }
            Storage::List { lists } => lists[i].len(),
        }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = (0..self.size()).map(|i| self.degree(i)).sum();
        directed / 2
    }
}

/// Side length of a square lattice holding `size` cells, if `size` is a
/// perfect square.
fn grid_side(size: usize) -> Option<usize> {
    let side = (size as f64).sqrt().round() as usize;
    (side * side == size).then_some(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_reprs(size: usize, kind: Connectivity) -> (Adjacency, Adjacency) {
        (
            Adjacency::build(size, kind, AdjacencyRepr::Matrix).unwrap(),
            Adjacency::build(size, kind, AdjacencyRepr::List).unwrap(),
        )
    }

    #[test]
    fn test_all_to_all() {
        let (matrix, list) = both_reprs(5, Connectivity::AllToAll);
        for adjacency in [&matrix, &list] {
            for i in 0..5 {
                assert!(!adjacency.has_connection(i, i));
                assert_eq!(adjacency.degree(i), 4);
            }
            assert_eq!(adjacency.edge_count(), 10);
        }
    }

    #[test]
    fn test_none_topology() {
        let (matrix, list) = both_reprs(4, Connectivity::None);
        for adjacency in [&matrix, &list] {
            assert_eq!(adjacency.edge_count(), 0);
            assert!(adjacency.neighbors(2).is_empty());
        }
    }

    #[test]
    fn test_chain() {
        let (matrix, list) = both_reprs(4, Connectivity::ListBidirectional);
        for adjacency in [&matrix, &list] {
            assert_eq!(adjacency.neighbors(0), vec![1]);
            assert_eq!(adjacency.neighbors(1), vec![0, 2]);
            assert_eq!(adjacency.neighbors(3), vec![2]);
        }
    }

    #[test]
    fn test_grid_four() {
        // 3x3 lattice: the center cell has all four neighbors.
        let (matrix, list) = both_reprs(9, Connectivity::GridFour);
        for adjacency in [&matrix, &list] {
            assert_eq!(adjacency.neighbors(4), vec![1, 3, 5, 7]);
            // Corner has two.
            assert_eq!(adjacency.neighbors(0), vec![1, 3]);
        }
    }

    #[test]
    fn test_grid_eight() {
        let (matrix, list) = both_reprs(9, Connectivity::GridEight);
        for adjacency in [&matrix, &list] {
            assert_eq!(adjacency.degree(4), 8);
            assert_eq!(adjacency.neighbors(0), vec![1, 3, 4]);
        }
    }

    #[test]
    fn test_grid_requires_square() {
        let err = Adjacency::build(10, Connectivity::GridFour, AdjacencyRepr::Matrix);
        assert!(matches!(err, Err(Error::InvalidTopology { .. })));
        let err = Adjacency::build(10, Connectivity::GridEight, AdjacencyRepr::List);
        assert!(matches!(err, Err(Error::InvalidTopology { .. })));
    }

    #[test]
    fn test_zero_size() {
        let err = Adjacency::build(0, Connectivity::AllToAll, AdjacencyRepr::Matrix);
        assert!(matches!(err, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_radius_topology() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.5, 0.0],
            vec![10.0, 10.0],
            vec![10.5, 10.0],
        ];
        let adjacency = Adjacency::by_radius(&points, 1.0, AdjacencyRepr::List).unwrap();
        assert!(adjacency.has_connection(0, 1));
        assert!(adjacency.has_connection(2, 3));
        assert!(!adjacency.has_connection(1, 2));
        assert_eq!(adjacency.edge_count(), 2);
    }

    #[test]
    fn test_symmetry() {
        let (matrix, list) = both_reprs(9, Connectivity::GridEight);
        for adjacency in [&matrix, &list] {
            for i in 0..9 {
                for j in 0..9 {
                    assert_eq!(adjacency.has_connection(i, j), adjacency.has_connection(j, i));
                }
            }
        }
    }
}
