use conway_engine::{Cell, GridError, Preset, Seed, UniverseConfig, UniverseCore};

#[test]
fn render_loop_reads_every_generation() {
    let config = UniverseConfig::from_json(r#"{"width":40,"height":30,"seed":{"kind":"random","seed":2024}}"#)
        .expect("config should parse");
    let mut universe = UniverseCore::from_config(&config).expect("universe should build");

    for _ in 0..100 {
        universe.advance();
        let view = universe.cells();
        assert_eq!(view.len(), 40 * 30);
        let live = view.as_bytes().iter().filter(|&&b| b == 1).count() as u32;
        assert!(view.as_bytes().iter().all(|&b| b <= 1));
        assert_eq!(live, universe.live_count());
    }
    assert_eq!(universe.generation(), 100);
}

#[test]
fn explicit_blinker_oscillates() {
    #[rustfmt::skip]
    let cells = vec![
        0, 0, 0, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ];
    let mut universe = UniverseCore::new(5, 5, Seed::Explicit { cells: cells.clone() }).unwrap();

    universe.advance();
    #[rustfmt::skip]
    let horizontal: Vec<u8> = vec![
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        0, 1, 1, 1, 0,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    assert_eq!(universe.cells().as_bytes(), &horizontal[..]);

    universe.advance();
    assert_eq!(universe.cells().as_bytes(), &cells[..]);
}

#[test]
fn pulsar_has_period_three() {
    let mut universe = UniverseCore::new(21, 21, Seed::Dead).unwrap();
    universe.place_preset(Preset::Pulsar, 4, 4).unwrap();
    let start = universe.cells().as_bytes().to_vec();

    universe.advance();
    assert_ne!(universe.cells().as_bytes(), &start[..]);
    universe.advance();
    universe.advance();
    assert_eq!(universe.cells().as_bytes(), &start[..]);
}

#[test]
fn editing_errors_leave_universe_untouched() {
    let mut universe = UniverseCore::new(4, 4, Seed::Dead).unwrap();
    universe.toggle(1, 1).unwrap();

    assert_eq!(
        universe.toggle(4, 1),
        Err(GridError::OutOfBounds { row: 4, col: 1, height: 4, width: 4 })
    );
    assert_eq!(
        universe.set_cells(&[(0, 0), (0, 9)], Cell::Alive),
        Err(GridError::OutOfBounds { row: 0, col: 9, height: 4, width: 4 })
    );
    assert_eq!(universe.live_count(), 1);
    assert_eq!(universe.render(), "◻◻◻◻\n◻◼◻◻\n◻◻◻◻\n◻◻◻◻\n");
}
