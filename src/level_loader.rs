use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use tracing::{error, info};

use crate::config::GameConfig;
use crate::core::{Cell, Grid, Vec2};
use crate::error::LoadError;

/// Where raw level text comes from.
pub trait LevelSource {
    fn read_level(&self, level_id: usize) -> io::Result<String>;
}

/// Reads `<dir>/<level_id + 1>.txt`.
pub struct DirLevelSource {
    dir: PathBuf,
}

impl DirLevelSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirLevelSource { dir: dir.into() }
    }

    pub fn level_path(&self, level_id: usize) -> PathBuf {
        self.dir.join(format!("{}.txt", level_id + 1))
    }
}

impl LevelSource for DirLevelSource {
    fn read_level(&self, level_id: usize) -> io::Result<String> {
        std::fs::read_to_string(self.level_path(level_id))
    }
}

#[derive(Default)]
pub struct MemoryLevelSource {
    levels: HashMap<usize, String>,
}

impl MemoryLevelSource {
    pub fn new() -> Self {
        MemoryLevelSource::default()
    }

    pub fn with_level(mut self, level_id: usize, text: impl Into<String>) -> Self {
        self.levels.insert(level_id, text.into());
        self
    }
}

impl LevelSource for MemoryLevelSource {
    fn read_level(&self, level_id: usize) -> io::Result<String> {
        self.levels.get(&level_id).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no level {level_id} in memory"))
        })
    }
}

pub struct LevelLoader {
    height: usize,
    width: usize,
    level_count: usize,
    source: Box<dyn LevelSource>,
}

impl LevelLoader {
    pub fn new(config: &GameConfig, source: Box<dyn LevelSource>) -> Self {
        LevelLoader {
            height: config.height,
            width: config.width,
            level_count: config.level_count,
            source,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config, Box::new(DirLevelSource::new(config.levels_dir.clone())))
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Fresh grid for `level_id`. Each call re-reads the source.
    pub fn load(&self, level_id: usize) -> Result<Grid, LoadError> {
        if level_id >= self.level_count {
            return Err(LoadError::UnknownLevel {
                level_id,
                level_count: self.level_count,
            });
        }
        let text = self
            .source
            .read_level(level_id)
            .map_err(|source| LoadError::Read { level_id, source })?;
        let grid = parse_level(&text, self.height, self.width).inspect_err(|err| {
            error!(level = level_id, %err, "level text rejected");
        })?;
        info!(
            level = level_id,
            boxes = grid.count(Cell::Box) + grid.count(Cell::BoxOnTarget),
            "level loaded"
        );
        Ok(grid)
    }
}

/// Parses line-based level text into a `height` x `width` grid. Cells the text
/// does not cover stay `Floor`.
pub fn parse_level(text: &str, height: usize, width: usize) -> Result<Grid, LoadError> {
    let mut grid = Grid::new(height, width);

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if i >= height {
            if line.is_empty() {
                continue;
            }
            return Err(LoadError::TooManyRows { height });
        }

        for (j, ch) in line.chars().enumerate() {
            if j >= width {
                return Err(LoadError::RowTooLong { row: i, width });
            }
            let cell = Cell::from_char(ch).ok_or(LoadError::UnknownCell { row: i, col: j, ch })?;
            grid[Vec2 {
                i: i as i32,
                j: j as i32,
            }] = cell;
        }
    }

    let players = grid.count(Cell::Player) + grid.count(Cell::PlayerOnTarget);
    if players != 1 {
        return Err(LoadError::PlayerCount(players));
    }

    Ok(grid)
}
