//! Integration tests for the game controller pipeline.

use tictactoe_engine::{
    Game, GameEvent, GameStatus, Mode, MoveError, Player, Position, Square,
};

fn mark_at(game: &Game, index: usize) -> Square {
    game.board().get(Position::from_index(index).unwrap())
}

#[test]
fn test_two_human_moves() {
    // X takes the center, O takes the top-left corner.
    let mut game = Game::new();
    game.play(4).unwrap();
    game.play(0).unwrap();

    assert_eq!(mark_at(&game, 0), Square::Occupied(Player::O));
    assert_eq!(mark_at(&game, 4), Square::Occupied(Player::X));
    for index in [1, 2, 3, 5, 6, 7, 8] {
        assert_eq!(mark_at(&game, index), Square::Empty);
    }
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(*game.status(), GameStatus::InProgress);
}

#[test]
fn test_top_row_win_reports_line() {
    let mut game = Game::new();
    // X: 0, 1, 2; O: 3, 4
    let events = [0, 3, 1, 4, 2]
        .iter()
        .flat_map(|&i| game.play(i).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(*game.status(), GameStatus::Won(Player::X));

    let last = events.last().unwrap();
    match last {
        GameEvent::Won { winner, line } => {
            assert_eq!(*winner, Player::X);
            assert_eq!(
                line.positions(),
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            );
            assert_eq!(line.endpoints(), (Position::TopLeft, Position::TopRight));
        }
        other => panic!("expected Won event, got {other:?}"),
    }
}

#[test]
fn test_won_game_ignores_further_moves() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.play(index).unwrap();
    }
    let before = game.clone();

    let events = game.play(8).unwrap();
    assert!(events.is_empty());
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = Game::new();
    // X O X / O O X / X X O - no line completes at any point
    let events = [0, 1, 2, 4, 7, 3, 5, 8, 6]
        .iter()
        .flat_map(|&i| game.play(i).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(*game.status(), GameStatus::Draw);
    assert_eq!(events.last(), Some(&GameEvent::Drawn));
    // Nine marks, nine Moved events, one Drawn.
    assert_eq!(events.len(), 10);
}

#[test]
fn test_turns_alternate_and_noops_preserve_the_turn() {
    let mut game = Game::new();

    game.play(4).unwrap();
    assert_eq!(game.current_player(), Player::O);

    // Occupied cell: ignored, still O's turn.
    game.play(4).unwrap();
    assert_eq!(game.current_player(), Player::O);

    game.play(0).unwrap();
    assert_eq!(game.current_player(), Player::X);

    // Out of range: rejected, still X's turn.
    assert_eq!(game.play(42), Err(MoveError::OutOfBounds(42)));
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_reset_is_idempotent_and_keeps_mode() {
    let mut game = Game::with_mode(Mode::PlayerVsComputer);
    game.play(0).unwrap();

    game.reset();
    let once = game.clone();
    game.reset();

    assert_eq!(game, once);
    assert_eq!(game, Game::with_mode(Mode::PlayerVsComputer));
    assert_eq!(game.mode(), Mode::PlayerVsComputer);
}

#[test]
fn test_mode_switch_resets_mid_game() {
    let mut game = Game::new();
    game.play(4).unwrap();
    game.play(0).unwrap();
    assert!(!game.history().is_empty());

    game.set_mode(Mode::PlayerVsComputer);

    assert_eq!(game.mode(), Mode::PlayerVsComputer);
    assert_eq!(*game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);
    assert!(game.history().is_empty());
    for index in 0..9 {
        assert_eq!(mark_at(&game, index), Square::Empty);
    }
}

#[test]
fn test_reselecting_the_same_mode_also_resets() {
    let mut game = Game::new();
    game.play(4).unwrap();

    game.set_mode(Mode::PlayerVsPlayer);

    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_computer_mode_answers_each_human_move() {
    let mut game = Game::with_mode(Mode::PlayerVsComputer);

    // X opens with a corner; the engine must answer in the same call.
    let events = game.play(0).unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GameEvent::Moved {
            player: Player::X,
            ..
        }
    ));
    let GameEvent::Moved {
        player: Player::O,
        position: reply,
    } = events[1]
    else {
        panic!("expected an O reply, got {:?}", events[1]);
    };

    // Back to the human, with exactly two marks down.
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().get(reply), Square::Occupied(Player::O));
}

#[test]
fn test_won_event_wire_shape() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4] {
        game.play(index).unwrap();
    }
    let events = game.play(2).unwrap();

    let won = events.last().unwrap();
    let json = serde_json::to_value(won).unwrap();
    assert_eq!(json["Won"]["winner"], "X");
    assert_eq!(
        json["Won"]["line"]["positions"],
        serde_json::json!(["TopLeft", "TopCenter", "TopRight"])
    );
}
