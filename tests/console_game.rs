//! Scripted console sessions driven through in-memory streams

use std::io::Cursor;

use tictactoe::console::Console;
use tictactoe::{AIEngine, Board, Game, GameError, InputError};

fn run(script: &str, board: Board) -> (Result<(), GameError>, String) {
    let mut game = Game::new(board, AIEngine::new());
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), 3);
    let result = game.run(&mut console);
    let out = String::from_utf8(console.into_output()).unwrap();
    (result, out)
}

fn three_by_three() -> Board {
    Board::new(3, 3, 3).unwrap()
}

#[test]
fn test_agents_play_a_draw_then_quit() {
    let (result, out) = run("3\n0\n", three_by_three());
    assert!(result.is_ok());

    for announce in ["[1|1]", "[2|2]", "[2|1]", "[3|1]", "[1|3]", "[1|2]", "[3|2]", "[2|3]", "[3|3]"] {
        assert!(out.contains(&format!("Moving to [column|row]: {announce}")), "missing {announce}");
    }
    assert!(out.contains("GAME OVER - The game is a DRAW."));
    assert!(out.contains("Do you wish to play another round?"));
}

#[test]
fn test_agent_beats_careless_human() {
    // Human X plays (1,1), (1,2), (2,1); agent O answers (2,2), (1,3), (3,1)
    let (result, out) = run("2\n1\n1\n2\n1\n1\n2\n0\n", three_by_three());
    assert!(result.is_ok());
    assert!(out.contains("Moving to [column|row]: [2|2]"));
    assert!(out.contains("Moving to [column|row]: [3|1]"));
    assert!(out.contains("Moving to [column|row]: [1|3]"));
    assert!(out.contains("GAME OVER - Player O WON the game."));
}

#[test]
fn test_replay_resets_board() {
    // Hotseat: X wins the left column, replay, then quit from the menu
    let script = "4\n1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n1\n0\n";
    let (result, out) = run(script, three_by_three());
    assert!(result.is_ok());
    assert!(out.contains("GAME OVER - Player X WON the game."));
    assert!(out.contains(&"\n".repeat(100)));
    assert_eq!(out.matches("Please choose game mode:").count(), 2);

    // the menu after the replay is preceded by the cleared screen, not a board
    let after_clear = out.rsplit(&"\n".repeat(100)).next().unwrap();
    assert!(after_clear.contains("Please choose game mode:"));
    assert!(!after_clear.contains("| X "));
}

#[test]
fn test_rules_message_reflects_board() {
    let (_, out) = run("0\n", Board::new(4, 6, 3).unwrap());
    assert!(out.contains("The board size is set to 4 rows and 6 columns."));
    assert!(out.contains("You win if you have 3 symbols in a row."));
    assert!(out.contains("Player X starts the game."));
}

#[test]
fn test_menu_gives_up_after_retries() {
    let (result, out) = run("7\nnope\n-1\n9\n", three_by_three());
    assert!(matches!(
        result,
        Err(GameError::Input(InputError::RetriesExhausted { attempts: 4, .. }))
    ));
    assert!(out.contains("RETRY [3/3]"));
}

#[test]
fn test_input_closed_mid_game() {
    let (result, _) = run("4\n1\n", three_by_three());
    assert!(matches!(result, Err(GameError::Input(InputError::EndOfInput))));
}
