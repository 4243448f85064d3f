//! The console harness must reach exactly the state that calling the engine
//! directly reaches for the same column sequence.

use connect_four::console::Console;
use connect_four::game::{GameEngine, MoveOutcome, Phase, Player};

fn script(columns: &[usize]) -> String {
    columns.iter().map(|c| format!("{}\n", c + 1)).collect()
}

fn play_direct(columns: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &column in columns {
        let _ = engine.drop_disc(column);
    }
    engine
}

fn play_console(columns: &[usize]) -> (GameEngine, String) {
    let input = script(columns);
    let mut console = Console::new(GameEngine::new(), input.as_bytes(), Vec::new());
    console.run().unwrap();
    let (engine, output) = console.into_parts();
    (engine, String::from_utf8(output).unwrap())
}

#[test]
fn test_console_matches_engine_mid_game() {
    let columns = [3, 3, 2, 4, 6, 6, 0, 1, 1, 5];
    let (console_engine, _) = play_console(&columns);
    let direct = play_direct(&columns);

    assert_eq!(console_engine.current_state(), direct.current_state());
    assert_eq!(direct.phase(), Phase::InProgress);
}

#[test]
fn test_console_matches_engine_with_rejected_moves() {
    // Column 0 fills up after six drops; the seventh is rejected by both.
    let columns = [0, 0, 0, 0, 0, 0, 0, 9, 2];
    let (console_engine, output) = play_console(&columns);
    let direct = play_direct(&columns);

    assert_eq!(console_engine.current_state(), direct.current_state());
    assert!(output.contains("column 1 is full"));
    assert!(output.contains("column 10 is not on the board"));
}

#[test]
fn test_console_matches_engine_diagonal_win() {
    let columns = [0, 1, 1, 2, 6, 2, 2, 3, 6, 3, 5, 3, 3];
    let (console_engine, output) = play_console(&columns);
    let direct = play_direct(&columns);

    assert_eq!(console_engine.current_state(), direct.current_state());
    assert_eq!(direct.phase(), Phase::Won(Player::One));
    assert!(output.contains("Player One wins!"));
}

#[test]
fn test_draw_through_console() {
    let pair = |a: usize, b: usize| [a, b, b, a].repeat(3);
    let mut columns = pair(0, 2);
    columns.extend(pair(1, 3));
    columns.extend(pair(4, 6));
    columns.extend([5; 6]);

    let mut direct = GameEngine::new();
    let mut last = None;
    for &column in &columns {
        last = Some(direct.drop_disc(column).unwrap());
    }
    assert_eq!(last, Some(MoveOutcome::Draw { row: 0, column: 5 }));

    let (console_engine, output) = play_console(&columns);
    assert_eq!(console_engine.current_state(), direct.current_state());
    assert!(output.contains("It's a draw!"));
}
