use super::*;
use crate::types::{PieceKind, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MATE: i32 = 999_999;

fn fen(f: &str) -> Position {
    Position::from_fen(f).unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Plain minimax with no pruning and no move ordering.
fn reference_minimax(pos: &Position, depth: u8, maximizer: Color, values: &PieceValues) -> i32 {
    let children = legal_successors(pos);
    if children.is_empty() {
        if pos.in_check(pos.side_to_move) {
            return if pos.side_to_move == maximizer { -MATE } else { MATE };
        }
        return 0;
    }
    if depth == 0 {
        return evaluate(pos, maximizer, values);
    }
    let scores = children
        .iter()
        .map(|(_, child)| reference_minimax(child, depth - 1, maximizer, values));
    if pos.side_to_move == maximizer {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn reference_best(pos: &Position, depth: u8, values: &PieceValues) -> (Move, i32) {
    let me = pos.side_to_move;
    let mut best: Option<(Move, i32)> = None;
    for (mv, child) in legal_successors(pos) {
        let score = reference_minimax(&child, depth - 1, me, values);
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

fn quiet_config() -> SearchConfig {
    SearchConfig {
        weak_random_ratio: 0.0,
        weak_noise: 0.0,
        medium_noise: 0.0,
        ..SearchConfig::default()
    }
}

#[test]
fn test_pruning_does_not_change_the_chosen_move() {
    let values = PieceValues::default();
    let positions = [
        "4k3/8/8/3q4/4P3/2N5/8/4K3 w - - 0 1",
        "r3k3/ppp2ppp/8/3n4/3P4/2N5/PPP2PPP/4K2R w K - 0 1",
        "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
        "4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1",
    ];
    for f in positions {
        let pos = fen(f);
        let mut nodes = 0;
        let pruned = pick_best_move(&pos, 3, &values, MATE, &mut nodes).unwrap();
        let full = reference_best(&pos, 3, &values);
        assert_eq!(pruned, full, "pruned search disagrees on {f}");
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let values = PieceValues::default();
    let pos = fen("r3k3/ppp2ppp/8/3n4/3P4/2N5/PPP2PPP/4K2R w K - 0 1");
    let me = pos.side_to_move;

    let mut pruned = Searcher::new(&values, MATE, me);
    let mut full = Searcher::new(&values, MATE, me).without_pruning();
    let a = pruned.minimax(&pos, 3, -INF, INF);
    let b = full.minimax(&pos, 3, -INF, INF);
    assert_eq!(a, b);
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_strong_is_deterministic() {
    let pos = fen("r3k3/ppp2ppp/8/3n4/3P4/2N5/PPP2PPP/4K2R w K - 0 1");
    let values = PieceValues::default();
    let config = SearchConfig::default();
    let first = choose_move(&pos, Strength::Strong, &values, &config, &mut StdRng::seed_from_u64(1));
    for seed in 2..4 {
        let again = choose_move(
            &pos,
            Strength::Strong,
            &values,
            &config,
            &mut StdRng::seed_from_u64(seed),
        );
        assert_eq!(first.best_move, again.best_move);
        assert_eq!(first.score, again.score);
    }
}

#[test]
fn test_finds_mate_in_one() {
    // Qe8 is mate behind the unmoved pawns
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let values = PieceValues::default();
    let mut rng = StdRng::seed_from_u64(7);
    for strength in [Strength::Medium, Strength::Strong] {
        let result = choose_move(&pos, strength, &values, &SearchConfig::default(), &mut rng);
        let mv = result.best_move.unwrap();
        assert_eq!(mv.to, sq("e8"), "{strength} missed the mate");
        assert_eq!(result.score, MATE);
    }
}

#[test]
fn test_weak_without_randomness_grabs_material() {
    let pos = fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let values = PieceValues::default();
    let mut rng = StdRng::seed_from_u64(3);
    let result = choose_move(&pos, Strength::Weak, &values, &quiet_config(), &mut rng);
    let mv = result.best_move.unwrap();
    assert_eq!(mv.to_string(), "e4d5");
    assert_eq!(mv.captured, Some(PieceKind::Queen));
}

#[test]
fn test_weak_random_moves_are_legal() {
    let pos = Position::startpos();
    let values = PieceValues::default();
    let config = SearchConfig {
        weak_random_ratio: 1.0,
        ..SearchConfig::default()
    };
    let legal = crate::movegen::legal_moves(&pos);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let mv = choose_move(&pos, Strength::Weak, &values, &config, &mut rng)
            .best_move
            .unwrap();
        assert!(legal.contains(&mv));
    }
}

#[test]
fn test_black_maximizes_for_black() {
    // Black to move can take the queen on d4
    let pos = fen("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1");
    let values = PieceValues::default();
    let mut rng = StdRng::seed_from_u64(5);
    for strength in [Strength::Medium, Strength::Strong] {
        let result = choose_move(&pos, strength, &values, &quiet_config(), &mut rng);
        assert_eq!(result.best_move.unwrap().to_string(), "e5d4");
        assert!(result.score > 0);
    }
}

#[test]
fn test_terminal_scores() {
    let values = PieceValues::default();
    // Black is mated
    let mated = fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert_eq!(
        Searcher::new(&values, MATE, Color::Black).minimax(&mated, 3, -INF, INF),
        -MATE
    );
    assert_eq!(
        Searcher::new(&values, MATE, Color::White).minimax(&mated, 3, -INF, INF),
        MATE
    );

    let stalemate = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(
        Searcher::new(&values, MATE, Color::White).minimax(&stalemate, 3, -INF, INF),
        0
    );
}

#[test]
fn test_no_move_when_game_is_over() {
    let pos = fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let values = PieceValues::default();
    let mut rng = StdRng::seed_from_u64(9);
    for strength in [Strength::Weak, Strength::Medium, Strength::Strong] {
        let result = choose_move(&pos, strength, &values, &SearchConfig::default(), &mut rng);
        assert!(result.best_move.is_none());
    }
}

#[test]
fn test_order_moves_puts_captures_first() {
    let pos = fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    let mut children = legal_successors(&pos);
    let quiet_before: Vec<Move> = children
        .iter()
        .filter(|(m, _)| !m.is_capture())
        .map(|(m, _)| *m)
        .collect();
    order_moves(&mut children);
    assert!(children[0].0.is_capture());
    assert!(children[1..].iter().all(|(m, _)| !m.is_capture()));
    let quiet_after: Vec<Move> = children[1..].iter().map(|(m, _)| *m).collect();
    assert_eq!(quiet_before, quiet_after);
}

#[test]
fn test_strength_parsing() {
    assert_eq!("easy".parse::<Strength>().unwrap(), Strength::Weak);
    assert_eq!("Medium".parse::<Strength>().unwrap(), Strength::Medium);
    assert_eq!("hard".parse::<Strength>().unwrap(), Strength::Strong);
    assert_eq!(
        "grandmaster".parse::<Strength>().unwrap_err(),
        ParseError::UnknownStrength("grandmaster".to_string())
    );
}
