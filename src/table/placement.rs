use crate::chemistry::{ELEMENT_COUNT, ElementRecord};
use crate::constants::{GRID_COLUMNS, MAIN_ROWS, STRIP_FIRST_COLUMN};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// 1-based cell in the 18-column table. Rows 8 and 9 are the f-block strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: u8,
    pub column: u8,
}

impl GridCell {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    pub fn is_main_grid(&self) -> bool {
        self.row <= MAIN_ROWS
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// The two rows pulled out of periods 6 and 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FBlock {
    Lanthanides,
    Actinides,
}

impl FBlock {
    pub const ALL: [FBlock; 2] = [FBlock::Lanthanides, FBlock::Actinides];

    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            FBlock::Lanthanides => 57..=71,
            FBlock::Actinides => 89..=103,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FBlock::Lanthanides => "Lanthanides",
            FBlock::Actinides => "Actinides",
        }
    }

    pub fn strip_row(self) -> u8 {
        match self {
            FBlock::Lanthanides => MAIN_ROWS + 1,
            FBlock::Actinides => MAIN_ROWS + 2,
        }
    }

    /// Marker cell left in the main grid where the strip was cut out.
    pub fn placeholder_cell(self) -> GridCell {
        match self {
            FBlock::Lanthanides => GridCell::new(6, 3),
            FBlock::Actinides => GridCell::new(7, 3),
        }
    }

    pub fn range_label(self) -> String {
        let range = self.range();
        format!("{}-{}", range.start(), range.end())
    }

    pub fn containing(z: u8) -> Option<FBlock> {
        FBlock::ALL
            .into_iter()
            .find(|block| block.range().contains(&z))
    }
}

/// Position of an element in the standard layout.
///
/// Periods 2 and 3 have no d-block and periods 6 and 7 lose their f-block to
/// the strips, so this is a lookup by range rather than a formula.
pub fn placement_for(z: u8) -> Option<GridCell> {
    let cell = match z {
        1 => GridCell::new(1, 1),
        2 => GridCell::new(1, GRID_COLUMNS),
        3..=4 => GridCell::new(2, z - 2),
        5..=10 => GridCell::new(2, z + 8),
        11..=12 => GridCell::new(3, z - 10),
        13..=18 => GridCell::new(3, z),
        19..=36 => GridCell::new(4, z - 18),
        37..=54 => GridCell::new(5, z - 36),
        55..=56 => GridCell::new(6, z - 54),
        72..=86 => GridCell::new(6, z - 68),
        87..=88 => GridCell::new(7, z - 86),
        104..=118 => GridCell::new(7, z - 100),
        _ => {
            let block = FBlock::containing(z)?;
            let offset = z - block.range().start();
            GridCell::new(block.strip_row(), STRIP_FIRST_COLUMN + offset)
        }
    };
    Some(cell)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("atomic number {0} is outside 1..=118")]
    OutOfRange(u8),
    #[error("no grid placement for atomic number {0}")]
    MissingPlacement(u8),
    #[error("atomic numbers {first} and {second} both map to {cell}")]
    Collision { first: u8, second: u8, cell: GridCell },
}

/// Placements for a whole dataset, resolved once at startup.
#[derive(Clone, Debug)]
pub struct TableLayout {
    cells: Vec<(u8, GridCell)>,
    by_cell: HashMap<GridCell, u8>,
}

impl TableLayout {
    pub fn build(elements: &[ElementRecord]) -> Result<Self, LayoutError> {
        let mut cells = Vec::with_capacity(elements.len());
        let mut by_cell = HashMap::with_capacity(elements.len());

        for element in elements {
            let z = element.atomic_number;
            if z == 0 || usize::from(z) > ELEMENT_COUNT {
                return Err(LayoutError::OutOfRange(z));
            }
            let cell = placement_for(z).ok_or(LayoutError::MissingPlacement(z))?;
            if let Some(first) = by_cell.insert(cell, z) {
                return Err(LayoutError::Collision {
                    first,
                    second: z,
                    cell,
                });
            }
            cells.push((z, cell));
        }

        Ok(Self { cells, by_cell })
    }

    /// `(atomic_number, cell)` pairs in dataset order.
    pub fn cells(&self) -> impl Iterator<Item = (u8, GridCell)> + '_ {
        self.cells.iter().copied()
    }

    pub fn cell_of(&self, z: u8) -> Option<GridCell> {
        self.cells
            .iter()
            .find(|(number, _)| *number == z)
            .map(|(_, cell)| *cell)
    }

    pub fn element_at(&self, cell: GridCell) -> Option<u8> {
        self.by_cell.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::Category;
    use crate::constants::TOTAL_ROWS;
    use std::collections::HashSet;

    #[test]
    fn every_element_has_a_unique_cell() {
        let mut seen = HashSet::new();
        for z in 1..=118u8 {
            let cell = placement_for(z).unwrap_or_else(|| panic!("no cell for {z}"));
            assert!((1..=TOTAL_ROWS).contains(&cell.row));
            assert!((1..=GRID_COLUMNS).contains(&cell.column));
            assert!(seen.insert(cell), "duplicate cell {cell:?} for {z}");
        }
    }

    #[test]
    fn out_of_range_has_no_cell() {
        assert_eq!(placement_for(0), None);
        assert_eq!(placement_for(119), None);
        assert_eq!(placement_for(u8::MAX), None);
    }

    #[test]
    fn first_three_periods_leave_the_d_block_empty() {
        assert_eq!(placement_for(1), Some(GridCell::new(1, 1)));
        assert_eq!(placement_for(2), Some(GridCell::new(1, 18)));
        assert_eq!(placement_for(4), Some(GridCell::new(2, 2)));
        assert_eq!(placement_for(5), Some(GridCell::new(2, 13)));
        assert_eq!(placement_for(10), Some(GridCell::new(2, 18)));
        assert_eq!(placement_for(12), Some(GridCell::new(3, 2)));
        assert_eq!(placement_for(13), Some(GridCell::new(3, 13)));
        for z in 1..=18u8 {
            let column = placement_for(z).unwrap().column;
            assert!(!(3..=12).contains(&column), "{z} landed in the d-block");
        }
    }

    #[test]
    fn heavy_periods_skip_the_f_block() {
        assert_eq!(placement_for(56), Some(GridCell::new(6, 2)));
        assert_eq!(placement_for(72), Some(GridCell::new(6, 4)));
        assert_eq!(placement_for(86), Some(GridCell::new(6, 18)));
        assert_eq!(placement_for(88), Some(GridCell::new(7, 2)));
        assert_eq!(placement_for(104), Some(GridCell::new(7, 4)));
        assert_eq!(placement_for(118), Some(GridCell::new(7, 18)));
    }

    #[test]
    fn f_block_lives_only_in_the_strips() {
        for block in FBlock::ALL {
            let cells: Vec<_> = block
                .range()
                .map(|z| placement_for(z).unwrap())
                .collect();
            assert_eq!(cells.len(), 15);
            for (offset, cell) in cells.iter().enumerate() {
                assert!(!cell.is_main_grid());
                assert_eq!(cell.row, block.strip_row());
                assert_eq!(usize::from(cell.column), usize::from(STRIP_FIRST_COLUMN) + offset);
            }
        }
        for z in (1..=118u8).filter(|z| FBlock::containing(*z).is_none()) {
            assert!(placement_for(z).unwrap().is_main_grid(), "{z}");
        }
    }

    #[test]
    fn placeholders_sit_in_empty_cells() {
        let layout = TableLayout::build(ElementRecord::all()).unwrap();
        assert_eq!(FBlock::Lanthanides.range_label(), "57-71");
        assert_eq!(FBlock::Actinides.range_label(), "89-103");
        for block in FBlock::ALL {
            assert_eq!(layout.element_at(block.placeholder_cell()), None);
        }
    }

    #[test]
    fn main_grid_columns_match_groups() {
        for element in ElementRecord::all() {
            let cell = placement_for(element.atomic_number).unwrap();
            match element.group {
                Some(group) => {
                    assert_eq!(cell.column, group, "{}", element.symbol);
                    assert_eq!(cell.row, element.period, "{}", element.symbol);
                }
                None => assert!(matches!(
                    element.category,
                    Category::Lanthanide | Category::Actinide
                )),
            }
        }
    }

    #[test]
    fn layout_indexes_both_ways() {
        let layout = TableLayout::build(ElementRecord::all()).unwrap();
        assert_eq!(layout.len(), 118);
        assert_eq!(layout.cell_of(26), Some(GridCell::new(4, 8)));
        assert_eq!(layout.element_at(GridCell::new(4, 8)), Some(26));
        assert_eq!(layout.element_at(GridCell::new(8, 4)), Some(57));
        assert_eq!(layout.element_at(GridCell::new(1, 5)), None);
    }

    #[test]
    fn layout_rejects_duplicates_and_bad_numbers() {
        let hydrogen = ElementRecord::by_atomic_number(1).unwrap().clone();
        let err = TableLayout::build(&[hydrogen.clone(), hydrogen.clone()]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Collision {
                first: 1,
                second: 1,
                cell: GridCell::new(1, 1)
            }
        );

        let mut bogus = hydrogen;
        bogus.atomic_number = 200;
        assert_eq!(
            TableLayout::build(&[bogus]).unwrap_err(),
            LayoutError::OutOfRange(200)
        );
    }
}
