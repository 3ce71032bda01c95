#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::config::GameConfig;
    use crate::core::{Cell, Vec2};
    use crate::error::LoadError;
    use crate::json_export::level_json;
    use crate::level_loader::{parse_level, DirLevelSource, LevelLoader, MemoryLevelSource};

    fn bundled_config() -> GameConfig {
        GameConfig {
            levels_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("levels"),
            ..GameConfig::default()
        }
    }

    #[test]
    fn every_cell_kind_has_its_own_character() {
        let alphabet: String = Cell::ALL.iter().map(|c| c.to_char()).collect();
        assert_eq!(alphabet, " X@*.$+");
        for cell in Cell::ALL {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('#'), None);
    }

    #[test]
    fn parse_maps_every_character() {
        let grid = parse_level("X@*.$ ", 1, 6).unwrap();
        let row: Vec<Cell> = grid.rows().next().unwrap().to_vec();
        assert_eq!(
            row,
            vec![
                Cell::Wall,
                Cell::Player,
                Cell::Box,
                Cell::Target,
                Cell::BoxOnTarget,
                Cell::Floor,
            ]
        );

        let grid = parse_level("X+*", 1, 3).unwrap();
        assert_eq!(grid[Vec2 { i: 0, j: 1 }], Cell::PlayerOnTarget);
        assert_eq!(grid.find_player(), Ok(Vec2 { i: 0, j: 1 }));
    }

    #[test]
    fn short_rows_and_missing_rows_default_to_floor() {
        let grid = parse_level("XX\n@\n", 20, 30).unwrap();
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid[Vec2 { i: 0, j: 1 }], Cell::Wall);
        assert_eq!(grid[Vec2 { i: 0, j: 2 }], Cell::Floor);
        assert_eq!(grid[Vec2 { i: 1, j: 0 }], Cell::Player);
        assert_eq!(grid[Vec2 { i: 19, j: 29 }], Cell::Floor);
        assert_eq!(grid.count(Cell::Floor), 20 * 30 - 3);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let grid = parse_level("X@\r\nXX\r\n", 2, 2).unwrap();
        assert_eq!(grid[Vec2 { i: 0, j: 1 }], Cell::Player);
        assert_eq!(grid[Vec2 { i: 1, j: 1 }], Cell::Wall);
    }

    #[test]
    fn unknown_character_is_rejected() {
        let err = parse_level("X@#", 1, 3).unwrap_err();
        assert!(matches!(err, LoadError::UnknownCell { row: 0, col: 2, ch: '#' }));
    }

    #[test]
    fn oversized_levels_are_rejected() {
        assert!(matches!(
            parse_level("@  ", 1, 2).unwrap_err(),
            LoadError::RowTooLong { row: 0, width: 2 }
        ));
        assert!(matches!(
            parse_level("@\nX\n", 1, 2).unwrap_err(),
            LoadError::TooManyRows { height: 1 }
        ));
    }

    #[test]
    fn level_without_exactly_one_player_is_rejected() {
        assert!(matches!(parse_level("X*.", 1, 3).unwrap_err(), LoadError::PlayerCount(0)));
        assert!(matches!(parse_level("@+", 1, 2).unwrap_err(), LoadError::PlayerCount(2)));
    }

    #[test]
    fn missing_level_resource_is_a_read_error() {
        let config = GameConfig {
            level_count: 2,
            ..GameConfig::default()
        };
        let source = MemoryLevelSource::new().with_level(0, "@");
        let loader = LevelLoader::new(&config, Box::new(source));

        assert!(loader.load(0).is_ok());
        assert!(matches!(loader.load(1).unwrap_err(), LoadError::Read { level_id: 1, .. }));
        assert!(matches!(
            loader.load(2).unwrap_err(),
            LoadError::UnknownLevel { level_id: 2, level_count: 2 }
        ));
    }

    #[test]
    fn each_load_returns_a_fresh_grid() {
        let config = GameConfig::default();
        let loader = LevelLoader::new(&config, Box::new(MemoryLevelSource::new().with_level(0, "@*.")));
        let mut first = loader.load(0).unwrap();
        first[Vec2 { i: 0, j: 1 }] = Cell::Floor;
        let second = loader.load(0).unwrap();
        assert_eq!(second[Vec2 { i: 0, j: 1 }], Cell::Box);
    }

    #[test]
    fn dir_source_uses_one_based_file_names() {
        let source = DirLevelSource::new("levels");
        assert_eq!(source.level_path(0), PathBuf::from("levels").join("1.txt"));
        assert_eq!(source.level_path(19), PathBuf::from("levels").join("20.txt"));
    }

    #[test]
    fn bundled_levels_load_with_one_player_and_enough_targets() {
        let config = bundled_config();
        let loader = LevelLoader::from_config(&config);
        assert_eq!(loader.level_count(), 20);

        for level_id in 0..loader.level_count() {
            let grid = loader
                .load(level_id)
                .unwrap_or_else(|err| panic!("level {} failed to load: {err}", level_id + 1));
            let players = grid.count(Cell::Player) + grid.count(Cell::PlayerOnTarget);
            assert_eq!(players, 1, "level {}", level_id + 1);
            assert!(grid.find_player().is_ok());

            let boxes = grid.count(Cell::Box) + grid.count(Cell::BoxOnTarget);
            let targets = grid.count(Cell::Target)
                + grid.count(Cell::BoxOnTarget)
                + grid.count(Cell::PlayerOnTarget);
            assert!(boxes > 0 && boxes == targets, "level {} has {boxes} boxes, {targets} targets", level_id + 1);
            assert!(!grid.is_complete(), "level {} starts complete", level_id + 1);
        }
    }

    #[test]
    fn level_json_reports_dimensions_and_counts() {
        let grid = parse_level("X@*.X\nX $ X", 2, 5).unwrap();
        let json: serde_json::Value = serde_json::from_str(&level_json(4, &grid).unwrap()).unwrap();
        assert_eq!(json["level_id"], 4);
        assert_eq!(json["height"], 2);
        assert_eq!(json["width"], 5);
        assert_eq!(json["boxes"], 2);
        assert_eq!(json["targets"], 2);
        assert_eq!(json["rows"][1], "X $ X");
        assert!(json.get("note").is_none());
    }
}
