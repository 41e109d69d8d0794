use game_core::{Board, EntityKind, Position};

fn crowded_board() -> Board {
    let mut board = Board::new(6, 4);
    board.add(EntityKind::Player, 3, 2).unwrap();
    board.add(EntityKind::Creep, 1, 1).unwrap();
    board.add(EntityKind::Creep, 6, 4).unwrap();
    board.add(EntityKind::PowerUp, 3, 2).unwrap();
    board.add(EntityKind::Player, 5, 3).unwrap();
    board
}

#[test]
fn rendering_is_deterministic() {
    let board = crowded_board();
    let first = board.render();

    for _ in 0..10 {
        assert_eq!(board.render(), first);
    }

    // An independently built board with the same inputs renders identically.
    assert_eq!(crowded_board().render(), first);
}

#[test]
fn corners_render_inside_the_grid() {
    let mut board = Board::new(4, 3);
    board.add(EntityKind::Creep, 1, 1).unwrap();
    board.add(EntityKind::PowerUp, 4, 3).unwrap();

    let rendered = board.render();
    let lines: Vec<&str> = rendered.lines().collect();

    // blank first line, 3 rows, ruler
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], " 3[ ][ ][ ][3]");
    assert_eq!(lines[3], " 1[2][ ][ ][ ]");
    assert_eq!(lines[4], "   1  2  3  4");
}

#[test]
fn overlapping_entities_show_the_first_inserted() {
    let mut a_then_b = Board::new(2, 1);
    a_then_b.add(EntityKind::Player, 2, 1).unwrap();
    a_then_b.add(EntityKind::Creep, 2, 1).unwrap();

    let mut b_then_a = Board::new(2, 1);
    b_then_a.add(EntityKind::Creep, 2, 1).unwrap();
    b_then_a.add(EntityKind::Player, 2, 1).unwrap();

    assert_eq!(a_then_b.render(), "\n 1[ ][1]\n   1  2\n");
    assert_eq!(b_then_a.render(), "\n 1[ ][2]\n   1  2\n");
    assert_eq!(
        a_then_b.entity_at(Position::new(2, 1)).map(|e| e.kind),
        Some(EntityKind::Player)
    );
}

#[test]
fn every_row_has_the_same_width() {
    let rendered = crowded_board().render();
    let rows: Vec<&str> = rendered.lines().skip(1).take(4).collect();

    assert!(rows.iter().all(|row| row.len() == 2 + 6 * 3));
}
