use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Position, Tile};
use crate::error::LevelError;

/// Rectangular grid of classified tiles for one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: BoundedGrid<Tile>,
}

impl Board {
    /// Parses newline separated rows, top row first. A single trailing line
    /// break (and `\r` line endings) are tolerated.
    pub fn parse(text: &str) -> Result<Board, LevelError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let rows: Vec<&str> = text
            .split('\n')
            .map(|row| row.strip_suffix('\r').unwrap_or(row))
            .collect();
        Board::from_rows(&rows)
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, LevelError> {
        let Some(first) = rows.first() else {
            return Err(LevelError::Empty);
        };
        let expected = first.as_ref().chars().count();
        if expected == 0 && rows.iter().all(|row| row.as_ref().is_empty()) {
            return Err(LevelError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(LevelError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            cells.extend(line.as_ref().chars().map(Tile::classify));
        }

        let bounds = BoundsOriginRoot::new(rows.len() as i32, expected as i32);
        Ok(Board {
            tiles: BoundedGrid::from_cells(bounds, cells),
        })
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.tiles.size()
    }

    pub fn height(&self) -> i32 {
        self.tiles.size().rows
    }

    pub fn width(&self) -> i32 {
        self.tiles.size().cols
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.tiles.contains(pos)
    }

    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    pub fn set(&mut self, pos: &Position, tile: Tile) {
        self.tiles[pos] = tile;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles.iter().map(|(pos, tile)| (pos, *tile))
    }

    pub fn row(&self, row: i32) -> impl Iterator<Item = Tile> + '_ {
        (0..self.width()).map(move |col| self[&Position::new(row, col)])
    }
}

impl std::ops::Index<&Position> for Board {
    type Output = Tile;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.tiles[index]
    }
}
