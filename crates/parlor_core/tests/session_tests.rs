use parlor_core::{
    Color, Engine, EngineConfig, Game, GameError, GameMode, Outcome, Position, SearchResult,
    Square, Strength, TieredEngine, legal_moves,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn engine(strength: Strength) -> TieredEngine {
    TieredEngine::seeded(strength, EngineConfig::default(), 42)
}

/// Always answers with the first legal move.
struct FirstMove;

impl Engine for FirstMove {
    fn choose_move(&mut self, pos: &Position) -> SearchResult {
        SearchResult {
            best_move: legal_moves(pos).first().copied(),
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

#[test]
fn human_moves_alternate_in_hotseat_mode() {
    let mut game = Game::new(GameMode::HumanVsHuman, FirstMove);
    game.play(sq("e2"), sq("e4")).unwrap();
    game.play(sq("e7"), sq("e5")).unwrap();
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.position().side_to_move, Color::White);
    assert!(!game.is_machine_turn());
}

#[test]
fn illegal_move_leaves_the_game_untouched() {
    let mut game = Game::new(GameMode::HumanVsHuman, FirstMove);
    let before = game.position().clone();
    let err = game.play(sq("e2"), sq("e5")).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    assert_eq!(game.position(), &before);
    assert!(game.history().is_empty());
}

#[test]
fn human_cannot_move_for_the_machine() {
    let mut game = Game::new(
        GameMode::HumanVsMachine {
            machine: Color::Black,
        },
        engine(Strength::Medium),
    );
    game.play(sq("e2"), sq("e4")).unwrap();
    assert!(game.is_machine_turn());
    assert!(matches!(
        game.play(sq("e7"), sq("e5")),
        Err(GameError::NotYourTurn)
    ));

    let reply = game.machine_move().unwrap().unwrap();
    let mv = reply.best_move.unwrap();
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[1], mv);
    assert_eq!(game.position().side_to_move, Color::White);
    assert!(game.engine().nodes() > 0);
}

#[test]
fn seeded_engines_replay_the_same_game() {
    let play_out = || {
        let mut game = Game::new(
            GameMode::HumanVsMachine {
                machine: Color::Black,
            },
            engine(Strength::Weak),
        );
        for (from, to) in [("g1", "f3"), ("f3", "g1"), ("g1", "f3")] {
            if game.is_over() {
                break;
            }
            if game.play(sq(from), sq(to)).is_err() {
                break;
            }
            game.machine_move().unwrap();
        }
        game.history().to_vec()
    };
    assert_eq!(play_out(), play_out());
}

#[test]
fn finished_game_refuses_moves() {
    let mut game = Game::new(GameMode::HumanVsHuman, FirstMove);
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        game.play(sq(from), sq(to)).unwrap();
    }
    assert!(game.is_over());
    assert_eq!(
        game.status().outcome,
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(matches!(
        game.play(sq("a2"), sq("a3")),
        Err(GameError::GameOver)
    ));
    assert!(game.machine_move().unwrap().is_none());
    assert!(game.selectable_targets(sq("a2")).is_empty());
}

#[test]
fn selectable_targets_lists_destinations() {
    let game = Game::new(GameMode::HumanVsHuman, FirstMove);
    let mut targets = game.selectable_targets(sq("e2"));
    targets.sort_by_key(|s| s.row);
    assert_eq!(targets, vec![sq("e4"), sq("e3")]);
    assert!(game.selectable_targets(sq("e4")).is_empty());
    // Opponent pieces are not selectable
    assert!(game.selectable_targets(sq("e7")).is_empty());
}

#[test]
fn reset_returns_to_the_start() {
    let mut game = Game::new(
        GameMode::HumanVsMachine {
            machine: Color::White,
        },
        engine(Strength::Medium),
    );
    assert!(game.is_machine_turn());
    game.machine_move().unwrap();
    assert_eq!(game.history().len(), 1);

    game.reset();
    assert_eq!(game.position(), &Position::startpos());
    assert!(game.history().is_empty());
    assert_eq!(game.engine().nodes(), 0);
    assert_eq!(
        game.mode(),
        GameMode::HumanVsMachine {
            machine: Color::White
        }
    );
}
