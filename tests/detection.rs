use cowboy_checkers::core::coord::Coord;
use cowboy_checkers::core::point::Point;
use cowboy_checkers::core::point_set::PointSet;
use cowboy_checkers::detect::{
    complete_mills, double_mills, find_double_mill, has_double_mill, Occupancy, Side,
};
use cowboy_checkers::topology::Topology;

fn set(cells: &[(u8, u8)]) -> PointSet {
    cells
        .iter()
        .map(|&(r, c)| Point::from_coord(Coord::new(r, c)).unwrap())
        .collect()
}

const TOP_ROW: [(u8, u8); 3] = [(0, 0), (0, 3), (0, 6)];

#[test]
fn empty_white_has_no_double_mill() {
    let t = Topology::standard();
    assert!(!has_double_mill(PointSet::EMPTY, PointSet::EMPTY, t));
    assert!(!has_double_mill(PointSet::EMPTY, set(&TOP_ROW), t));
}

#[test]
fn mill_with_every_exit_blocked_is_not_a_double_mill() {
    let t = Topology::standard();
    let white = set(&TOP_ROW);
    let black = set(&[(3, 0), (1, 3), (3, 6)]);
    assert_eq!(complete_mills(white, t).len(), 1);
    assert!(!has_double_mill(white, black, t));

    // Same blockade made of White's own pieces.
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 0), (1, 3), (3, 6)]);
    assert!(!has_double_mill(white, PointSet::EMPTY, t));
}

#[test]
fn swing_into_right_crossing_is_a_double_mill() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4), (3, 5)]);
    assert!(has_double_mill(white, PointSet::EMPTY, t));

    let w = find_double_mill(white, PointSet::EMPTY, t).unwrap();
    assert_eq!(t.mill_set(w.mill), set(&TOP_ROW));
    assert_eq!(w.from.coord(), Coord::new(0, 6));
    assert_eq!(w.to.coord(), Coord::new(3, 6));
    assert_eq!(t.mill_set(w.second), set(&[(3, 4), (3, 5), (3, 6)]));
}

#[test]
fn target_mill_through_the_vacated_point_does_not_count() {
    // Sliding (0,6) to (3,6) would need (0,6) itself for the right column.
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (6, 6)]);
    assert!(!has_double_mill(white, PointSet::EMPTY, t));
}

#[test]
fn occupied_target_blocks_the_swing() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4), (3, 5)]);
    assert!(!has_double_mill(white, set(&[(3, 6)]), t));
}

#[test]
fn black_pieces_never_complete_white_mills() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4)]);
    let black = set(&[(3, 5)]);
    assert!(!has_double_mill(white, black, t));
}

#[test]
fn witnesses_never_reuse_the_vacated_mill() {
    let t = Topology::standard();
    // Two complete mills sharing (0,0) plus partners for several swings.
    let white = set(&[
        (0, 0),
        (0, 3),
        (0, 6),
        (3, 0),
        (6, 0),
        (3, 4),
        (3, 5),
        (1, 1),
        (1, 5),
        (3, 1),
        (3, 2),
    ]);
    let all = double_mills(white, PointSet::EMPTY, t);
    assert!(!all.is_empty());
    for w in &all {
        assert_ne!(w.mill, w.second);
        assert!(t.mill_set(w.mill).contains(w.from));
        assert!(t.mill_set(w.second).contains(w.to));
        assert!(t.are_adjacent(w.from, w.to));
        assert!(!white.contains(w.to));
    }
    assert_eq!(all.first().copied(), find_double_mill(white, PointSet::EMPTY, t));
}

#[test]
fn detection_is_deterministic_and_pure() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4), (3, 5)]);
    let black = set(&[(6, 0), (6, 3)]);
    let (w0, b0) = (white, black);

    let first = double_mills(white, black, t);
    for _ in 0..10 {
        assert_eq!(double_mills(white, black, t), first);
        assert!(has_double_mill(white, black, t));
    }
    assert_eq!((white, black), (w0, b0));
}

#[test]
fn out_of_universe_cells_are_ignored() {
    let t = Topology::standard();
    let occ = Occupancy::from_coords(
        [
            Coord::new(0, 0),
            Coord::new(0, 3),
            Coord::new(0, 6),
            Coord::new(3, 4),
            Coord::new(3, 5),
            Coord::new(3, 3),
            Coord::new(9, 9),
        ],
        [Coord::new(0, 1)],
    );
    assert_eq!(occ.white.len(), 5);
    assert!(occ.black.is_empty());
    assert!(occ.double_mill_for(Side::White, t).is_some());
}

#[test]
fn overlapping_points_count_as_occupied() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4), (3, 5)]);
    let occ = Occupancy::new(white, set(&[(3, 6), (0, 0)]));
    assert_eq!(occ.owner(Point::from_coord(Coord::new(0, 0)).unwrap()), Some(Side::White));
    assert!(!occ.empty().contains(Point::from_coord(Coord::new(3, 6)).unwrap()));
    assert!(occ.double_mill_for(Side::White, t).is_none());
}

#[test]
fn parallel_queries_agree() {
    let t = Topology::standard();
    let white = set(&[(0, 0), (0, 3), (0, 6), (3, 4), (3, 5)]);
    let expected = has_double_mill(white, PointSet::EMPTY, t);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                has_double_mill(white, PointSet::EMPTY, Topology::standard())
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
