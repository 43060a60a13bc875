use super::*;

fn build(phrases: &[&str]) -> AdjacencyIndex {
    AdjacencyIndex::from_phrases(phrases.iter().copied()).unwrap()
}

#[test]
fn test_one_ply_forced_win() {
    // "hồng nhạt" strands the opponent immediately
    let idx = build(&["hoa hồng", "hồng nhạt"]);
    let mut pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Engine).unwrap();
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut pos, Side::Engine, 2, &mut memo),
        ForcedWin::Win(1)
    );

    let (mv, plies) = best_forced_move(&idx, &pos, 2).unwrap();
    assert_eq!(idx.phrase_text(mv.id), "hồng nhạt");
    assert_eq!(plies, 1);
}

#[test]
fn test_stuck_mover_verdicts() {
    let idx = build(&["hoa hồng", "hồng nhạt"]);
    let mut pos = Position::from_history(&idx, &["hoa", "hồng", "nhạt"], Side::Engine).unwrap();

    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut pos, Side::Engine, 5, &mut memo),
        ForcedWin::No
    );
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut pos, Side::Opponent, 5, &mut memo),
        ForcedWin::Win(0)
    );
    assert!(best_forced_move(&idx, &pos, 5).is_none());
}

#[test]
fn test_three_ply_forced_win_needs_full_budget() {
    // After "a b" the defender must answer "b c" or "b d", and either reply
    // ("c e" / "d f") strands them. Three plies, not fewer.
    let idx = build(&["z a", "a b", "b c", "b d", "c e", "d f"]);
    let pos = Position::from_history(&idx, &["z", "a"], Side::Engine).unwrap();

    let mut scratch = pos.clone();
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut scratch, Side::Engine, 3, &mut memo),
        ForcedWin::Win(3)
    );

    let mut scratch = pos.clone();
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut scratch, Side::Engine, 2, &mut memo),
        ForcedWin::Undetermined
    );

    let (mv, plies) = best_forced_move(&idx, &pos, 3).unwrap();
    assert_eq!(idx.phrase_text(mv.id), "a b");
    assert_eq!(plies, 3);
}

#[test]
fn test_defender_to_move_root() {
    // Same graph, one ply later: the defender is on the move and both
    // answers lose, so the forcing side wins in two plies from here.
    let idx = build(&["z a", "a b", "b c", "b d", "c e", "d f"]);
    let mut pos = Position::from_history(&idx, &["z", "a", "b"], Side::Opponent).unwrap();
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut pos, Side::Engine, 2, &mut memo),
        ForcedWin::Win(2)
    );
}

#[test]
fn test_single_escape_disproves_win() {
    // "b g" leaves the forcing side stuck (g has no continuation), so the
    // defender escapes and the answer is a definitive no.
    let idx = build(&["z a", "a b", "b c", "c e", "b g"]);
    let mut pos = Position::from_history(&idx, &["z", "a"], Side::Engine).unwrap();
    let mut memo = SolveMemo::new();
    assert_eq!(
        can_force_win(&idx, &mut pos, Side::Engine, 4, &mut memo),
        ForcedWin::No
    );
    assert!(best_forced_move(&idx, &pos, 4).is_none());
}

#[test]
fn test_memo_is_populated_and_consistent() {
    let idx = build(&["z a", "a b", "b c", "b d", "c e", "d f"]);
    let mut pos = Position::from_history(&idx, &["z", "a"], Side::Engine).unwrap();
    let mut memo = SolveMemo::new();
    assert!(memo.is_empty());

    let first = can_force_win(&idx, &mut pos, Side::Engine, 3, &mut memo);
    assert!(memo.len() > 0);
    let filled = memo.len();

    // a repeat query under the same budget answers from the memo
    let second = can_force_win(&idx, &mut pos, Side::Engine, 3, &mut memo);
    assert_eq!(first, second);
    assert_eq!(memo.len(), filled);
}
