use super::*;
use crate::game::{GameRecord, Termination};
use crate::config::MatchConfig;
use chess_rules::{Board, create_move, square_at};

fn sample() -> MatchResult {
    let board = Board::standard();
    let mut record = GameRecord::new("MiniMax", "Random");
    record.record(&create_move(board, square_at("e2").unwrap(), square_at("e4").unwrap()));
    record.finish(GameOutcome::WhiteWins, Termination::Forfeit);

    let mut result = MatchResult::new("MiniMax", "Random");
    result.add_game(GameResult::Win, record.clone());
    result.add_game(GameResult::Draw, record);
    result
}

#[test]
fn test_game_result_perspective() {
    assert_eq!(GameResult::from_outcome(GameOutcome::WhiteWins, true), GameResult::Win);
    assert_eq!(GameResult::from_outcome(GameOutcome::WhiteWins, false), GameResult::Loss);
    assert_eq!(GameResult::from_outcome(GameOutcome::BlackWins, false), GameResult::Win);
    assert_eq!(GameResult::from_outcome(GameOutcome::Draw, false), GameResult::Draw);
}

#[test]
fn test_score() {
    let result = sample();
    assert_eq!(result.total_games(), 2);
    assert!((result.score() - 0.75).abs() < 1e-9);
    assert!((MatchResult::default().score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("match_result_{}.json", std::process::id()));
    let result = sample();
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.wins, 1);
    assert_eq!(loaded.draws, 1);
    assert_eq!(loaded.games, result.games);
}

#[test]
fn test_load_rejects_garbage() {
    let path = std::env::temp_dir().join(format!("match_garbage_{}.json", std::process::id()));
    std::fs::write(&path, "not json").unwrap();
    let err = MatchResult::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, TournamentError::Json(_)));
}

#[test]
fn test_report_lists_games() {
    let report = sample().generate_report();
    assert!(report.contains("=== Match: MiniMax vs Random ==="));
    assert!(report.contains("1-0"));
    assert!(report.contains("1 wins, 0 losses, 1 draws (75.0%)"));
}

#[test]
fn test_match_config_toml() {
    let config = MatchConfig::from_toml_str("num_games = 4\nalternate_colors = false").unwrap();
    assert_eq!(config.num_games, 4);
    assert!(!config.alternate_colors);
    assert_eq!(config.max_moves, MatchConfig::default().max_moves);
    assert!(matches!(
        MatchConfig::from_toml_str("num_games = -1"),
        Err(TournamentError::Toml(_))
    ));
}
