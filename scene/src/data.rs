//! Polygonal datasets and composite containers

use glam::Vec3;

/// Polygon connectivity stored as offsets into a flat index array.
///
/// Cells keep their insertion order; iteration yields each cell's vertex
/// indices as a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellArray {
    offsets: Vec<usize>,
    connectivity: Vec<u32>,
}

impl CellArray {
    pub fn new() -> Self {
        Self {
            offsets: Vec::new(),
            connectivity: Vec::new(),
        }
    }

    /// Append one polygon cell given its vertex indices.
    pub fn push_cell(&mut self, cell: &[u32]) {
        if self.offsets.is_empty() {
            self.offsets.push(0);
        }
        self.connectivity.extend_from_slice(cell);
        self.offsets.push(self.connectivity.len());
    }

    /// Number of polygon cells.
    pub fn cell_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Total vertex-index occurrences across all cells.
    pub fn index_count(&self) -> usize {
        self.connectivity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Iterate cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.offsets
            .windows(2)
            .map(|w| &self.connectivity[w[0]..w[1]])
    }
}

/// A simple polygonal mesh: a point set plus polygon connectivity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyData {
    pub points: Vec<Vec3>,
    pub polys: CellArray,
}

impl PolyData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// A dataset as produced by a geometry pipeline: either a simple mesh or a
/// composite container of nested datasets.
#[derive(Debug, Clone, PartialEq)]
pub enum DataObject {
    Poly(PolyData),
    MultiBlock(Vec<DataObject>),
}

impl DataObject {
    /// First simple mesh in the dataset, searching composite containers
    /// depth-first in block order. `None` when no simple mesh exists
    /// anywhere in the hierarchy.
    pub fn first_poly_data(&self) -> Option<&PolyData> {
        match self {
            DataObject::Poly(poly) => Some(poly),
            DataObject::MultiBlock(blocks) => {
                blocks.iter().find_map(|block| block.first_poly_data())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PolyData {
        let mut polys = CellArray::new();
        polys.push_cell(&[0, 1, 2]);
        PolyData {
            points: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.5, 1.0, 0.0),
            ],
            polys,
        }
    }

    #[test]
    fn test_cell_array_counts() {
        let mut cells = CellArray::new();
        assert!(cells.is_empty());
        assert_eq!(cells.cell_count(), 0);
        assert_eq!(cells.index_count(), 0);

        cells.push_cell(&[0, 1, 2]);
        cells.push_cell(&[2, 1, 3, 4]);

        assert_eq!(cells.cell_count(), 2);
        assert_eq!(cells.index_count(), 7);
        assert!(!cells.is_empty());
    }

    #[test]
    fn test_cell_array_iteration_order() {
        let mut cells = CellArray::new();
        cells.push_cell(&[0, 1, 2]);
        cells.push_cell(&[3, 4, 5, 6]);
        cells.push_cell(&[7]);

        let collected: Vec<&[u32]> = cells.iter().collect();
        assert_eq!(collected, vec![&[0, 1, 2][..], &[3, 4, 5, 6][..], &[7][..]]);
    }

    #[test]
    fn test_first_poly_data_simple() {
        let data = DataObject::Poly(triangle());
        assert!(data.first_poly_data().is_some());
    }

    #[test]
    fn test_first_poly_data_nested() {
        // First block is an empty container; the mesh sits one level deeper
        // in the second block. Depth-first order must find it.
        let data = DataObject::MultiBlock(vec![
            DataObject::MultiBlock(vec![]),
            DataObject::MultiBlock(vec![DataObject::Poly(triangle())]),
        ]);
        let poly = data.first_poly_data().expect("nested mesh not found");
        assert_eq!(poly.point_count(), 3);
    }

    #[test]
    fn test_first_poly_data_prefers_earlier_block() {
        let mut other = triangle();
        other.points.push(Vec3::ZERO);
        let data = DataObject::MultiBlock(vec![
            DataObject::Poly(triangle()),
            DataObject::Poly(other),
        ]);
        assert_eq!(data.first_poly_data().unwrap().point_count(), 3);
    }

    #[test]
    fn test_first_poly_data_empty_container() {
        let data = DataObject::MultiBlock(vec![DataObject::MultiBlock(vec![])]);
        assert!(data.first_poly_data().is_none());
    }
}
