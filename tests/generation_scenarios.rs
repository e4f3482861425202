//! Integration tests for end-to-end puzzle generation scenarios.

use std::collections::HashSet;
use wordsearch::generation::utils::create_rng;
use wordsearch::{
    can_place, place_word, Direction, GenerationConfig, Generator, Grid, Position,
    PuzzleGenerator, WordSearchResult,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_two_short_words_east_and_south() -> WordSearchResult<()> {
    let config = GenerationConfig::new(10, 10, words(&["CAT", "DOG"]))
        .with_directions(vec![Direction::East, Direction::South])
        .with_decoys(0)
        .with_seed(12345);

    for generator in [PuzzleGenerator::new(), PuzzleGenerator::best_fit()] {
        let mut rng = create_rng(&config);
        let puzzle = generator.generate(&config, &mut rng)?;

        let mut placed = puzzle.words();
        placed.sort();
        assert_eq!(placed, vec!["CAT", "DOG"]);

        for placement in &puzzle.placements {
            assert_eq!(placement.coordinates.len(), 3);
            assert!(matches!(placement.direction, Direction::East | Direction::South));
            for (i, pos) in placement.coordinates.iter().enumerate() {
                assert!(puzzle.grid.is_valid_position(*pos));
                assert_eq!(*pos, placement.direction.step(placement.origin, i));
            }
        }

        assert!(puzzle.grid.is_full());
        assert_eq!(puzzle.grid.positions().count(), 100);
        generator.validate(&puzzle, &config)?;
    }

    Ok(())
}

#[test]
fn test_word_longer_than_grid_is_dropped() -> WordSearchResult<()> {
    let config = GenerationConfig::new(5, 5, words(&["ELEPHANT"])).with_seed(99);
    let generator = PuzzleGenerator::new();
    let mut rng = create_rng(&config);
    let puzzle = generator.generate(&config, &mut rng)?;

    assert!(puzzle.placements.is_empty());
    assert_eq!(puzzle.dropped, vec!["ELEPHANT".to_string()]);
    assert!(puzzle.grid.is_full());
    Ok(())
}

#[test]
fn test_overlapping_words_share_only_matching_cells() {
    let mut grid = Grid::new(8, 8);
    let cats: Vec<char> = "CATS".chars().collect();
    let ate: Vec<char> = "ATE".chars().collect();
    place_word(&mut grid, &cats, Position::new(3, 2), Direction::East).unwrap();

    // Crossing through the shared A
    assert!(can_place(&grid, &ate, Position::new(3, 3), Direction::South));
    // Crossing through the shared T, running upward so T sits in the middle
    assert!(can_place(&grid, &ate, Position::new(4, 4), Direction::North));
    // Reusing A and T in line would put E on top of S
    assert!(!can_place(&grid, &ate, Position::new(3, 3), Direction::East));
    // Starting on C conflicts
    assert!(!can_place(&grid, &ate, Position::new(3, 2), Direction::South));

    let coords = place_word(&mut grid, &ate, Position::new(3, 3), Direction::South).unwrap();
    assert_eq!(grid.letter_at(coords[0]), Some('A'));
    assert_eq!(grid.letter_at(Position::new(3, 5)), Some('S'));
}

#[test]
fn test_best_fit_crosses_words_when_possible() -> WordSearchResult<()> {
    // Whichever word lands first, the other can run south through the shared C
    let config = GenerationConfig::new(8, 8, words(&["CATS", "COW"]))
        .with_directions(vec![Direction::East, Direction::South])
        .with_seed(4);
    let generator = PuzzleGenerator::best_fit();
    let mut rng = create_rng(&config);
    let puzzle = generator.generate(&config, &mut rng)?;

    assert_eq!(puzzle.placements.len(), 2);
    let first: HashSet<Position> = puzzle.placements[0].coordinates.iter().copied().collect();
    let second: HashSet<Position> = puzzle.placements[1].coordinates.iter().copied().collect();
    let shared: Vec<_> = first.intersection(&second).collect();
    assert!(!shared.is_empty(), "best fit should reuse a letter");
    generator.validate(&puzzle, &config)?;
    Ok(())
}

#[test]
fn test_same_seed_same_puzzle() -> WordSearchResult<()> {
    let config = GenerationConfig::for_testing(2718).with_decoys(4);

    for generator in [PuzzleGenerator::new(), PuzzleGenerator::best_fit(), PuzzleGenerator::for_testing()] {
        let first = generator.generate(&config, &mut create_rng(&config))?;
        let second = generator.generate(&config, &mut create_rng(&config))?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_empty_word_list_still_fills_grid() -> WordSearchResult<()> {
    let config = GenerationConfig::new(6, 7, Vec::new()).with_decoys(3).with_seed(1);
    let generator = PuzzleGenerator::new();
    let puzzle = generator.generate(&config, &mut create_rng(&config))?;

    assert!(puzzle.placements.is_empty());
    assert!(puzzle.decoys.is_empty());
    assert!(puzzle.grid.is_full());
    assert_eq!(puzzle.grid.rows(), 6);
    assert_eq!(puzzle.grid.cols(), 7);
    Ok(())
}

#[test]
fn test_extra_filler_characters_appear_only_from_alphabet() -> WordSearchResult<()> {
    let config = GenerationConfig::new(20, 20, words(&["éclair"]))
        .with_extra_filler("ÉÈ")
        .with_seed(55);
    let generator = PuzzleGenerator::new();
    let puzzle = generator.generate(&config, &mut create_rng(&config))?;

    let placement = puzzle.find("ÉCLAIR").expect("word should be placed");
    assert_eq!(placement.coordinates.len(), 6);
    assert_eq!(puzzle.grid.letter_at(placement.origin), Some('É'));

    for pos in puzzle.grid.positions() {
        let ch = puzzle.grid.letter_at(pos).unwrap();
        assert!(ch.is_ascii_uppercase() || "ÉÈ".contains(ch) || "ÉCLAIR".contains(ch));
    }
    Ok(())
}
