use glam::Vec2;
use jigsaw_canvas::consts::SEAM_TOLERANCE;
use jigsaw_canvas::interact::{
    InteractionArbiter, Interactive, ObjectId, PointerButton, PointerState,
};
use jigsaw_canvas::puzzle::{Puzzle, Spline, point_in_polygon};
use jigsaw_canvas::EdgeConfig;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Circle centered on `pos`, used to drive the arbiter without puzzle geometry
#[derive(Clone, Debug)]
struct Disc {
    pos: Vec2,
    radius: f32,
}

impl Interactive for Disc {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    fn on_drag_move(&mut self, new_pos: Vec2) {
        self.pos = new_pos;
    }
}

#[derive(Clone, Copy, Debug)]
enum PointerOp {
    Move { x: i16, y: i16 },
    Down,
    Up,
    Tick,
}

fn pointer_op_strategy() -> impl Strategy<Value = PointerOp> {
    prop_oneof![
        4 => (0i16..200, 0i16..200).prop_map(|(x, y)| PointerOp::Move { x, y }),
        1 => Just(PointerOp::Down),
        1 => Just(PointerOp::Up),
        3 => Just(PointerOp::Tick),
    ]
}

fn disc_strategy() -> impl Strategy<Value = Disc> {
    (0i16..200, 0i16..200, 5i16..60).prop_map(|(x, y, r)| Disc {
        pos: Vec2::new(x as f32, y as f32),
        radius: r as f32,
    })
}

fn generate(rows: u32, cols: u32, size: Vec2, seed: u64) -> Puzzle {
    let mut rng = Pcg32::seed_from_u64(seed);
    Puzzle::generate(rows, cols, size, &EdgeConfig::default(), 0.1, &mut rng)
        .expect("valid grid")
}

proptest! {
    #[test]
    fn spline_passes_through_path_ends(
        raw in prop::collection::vec((-100i16..100, -100i16..100), 2..8),
        step in 0.01f32..1.0,
    ) {
        let path: Vec<Vec2> = raw.iter().map(|&(x, y)| Vec2::new(x as f32, y as f32)).collect();
        let spline = Spline::new(&path).unwrap();
        let first = path[0];
        let last = path[path.len() - 1];

        prop_assert!(spline.point_at(0.0).unwrap().distance(first) < 1e-3);
        prop_assert!(spline.point_at(spline.max_t()).unwrap().distance(last) < 1e-3);

        let sampled = spline.sample(step).unwrap();
        prop_assert!(sampled.len() >= 2);
        prop_assert!(sampled.first().unwrap().distance(first) < 1e-3);
        prop_assert!(sampled.last().unwrap().distance(last) < 1e-3);
    }

    #[test]
    fn rectangle_hit_test_is_half_open(
        x0 in -50i16..50, y0 in -50i16..50,
        w in 1i16..50, h in 1i16..50,
        px in -120i16..120, py in -120i16..120,
        ox in -20i16..20, oy in -20i16..20,
    ) {
        let (x0, y0) = (x0 as f32, y0 as f32);
        let (x1, y1) = (x0 + w as f32, y0 + h as f32);
        let polygon = [
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ];
        let offset = Vec2::new(ox as f32, oy as f32);
        let point = Vec2::new(px as f32, py as f32);
        let local = point - offset;
        let expected = x0 <= local.x && local.x < x1 && y0 <= local.y && local.y < y1;
        prop_assert_eq!(point_in_polygon(point, &polygon, offset), expected);
    }

    #[test]
    fn generated_outlines_are_closed_and_interlock(
        rows in 1u32..5,
        cols in 1u32..5,
        tile_w in 40u32..120,
        aspect in 80u32..125,
        seed in any::<u64>(),
    ) {
        // Near-square tiles keep every tab clear of its own piece center
        let tile = Vec2::new(tile_w as f32, (tile_w * aspect) as f32 / 100.0);
        let size = tile * Vec2::new(cols as f32, rows as f32);
        let puzzle = generate(rows, cols, size, seed);
        let pieces = puzzle.pieces();
        prop_assert_eq!(pieces.len(), (rows * cols) as usize);

        for piece in &pieces {
            prop_assert!(piece.outline().is_closed(SEAM_TOLERANCE), "seams {:?}", piece.outline().seams());
            prop_assert!(piece.contains_point(piece.home));
        }

        let world_side = |index: usize, side: usize| -> Vec<Vec2> {
            let piece = &pieces[index];
            piece.outline().edge(side).iter().map(|&p| p + piece.pos).collect()
        };

        for y in 0..rows {
            for x in 0..cols {
                let i = (y * cols + x) as usize;
                // Right neighbour walks the shared edge the other way
                if x + 1 < cols {
                    let mine = world_side(i, 1);
                    let theirs = world_side(i + 1, 3);
                    prop_assert_eq!(mine.len(), theirs.len());
                    for (a, b) in mine.iter().rev().zip(&theirs) {
                        prop_assert!(a.distance(*b) < SEAM_TOLERANCE);
                    }
                }
                if y + 1 < rows {
                    let mine = world_side(i, 2);
                    let theirs = world_side(i + cols as usize, 0);
                    prop_assert_eq!(mine.len(), theirs.len());
                    for (a, b) in mine.iter().rev().zip(&theirs) {
                        prop_assert!(a.distance(*b) < SEAM_TOLERANCE);
                    }
                }
            }
        }
    }

    #[test]
    fn border_edges_are_straight(
        rows in 1u32..5,
        cols in 1u32..5,
        seed in any::<u64>(),
    ) {
        let puzzle = generate(rows, cols, Vec2::new(400.0, 300.0), seed);
        let lattice = puzzle.lattice();
        for x in 0..cols {
            for edge in [lattice.top(x, 0), lattice.bottom(x, rows - 1)] {
                prop_assert!(edge.points.iter().all(|p| p.y.abs() < 1e-3));
            }
        }
        for y in 0..rows {
            for edge in [lattice.left(0, y), lattice.right(cols - 1, y)] {
                prop_assert!(edge.points.iter().all(|p| p.x.abs() < 1e-3));
            }
        }
    }

    #[test]
    fn same_seed_same_board(rows in 1u32..4, cols in 1u32..4, seed in any::<u64>()) {
        let size = Vec2::new(300.0, 200.0);
        let a = generate(rows, cols, size, seed);
        let b = generate(rows, cols, size, seed);
        for (pa, pb) in a.pieces().iter().zip(&b.pieces()) {
            prop_assert_eq!(pa.outline(), pb.outline());
        }
    }

    #[test]
    fn hover_goes_to_front_most_containing(
        discs in prop::collection::vec(disc_strategy(), 1..8),
        px in 0i16..200,
        py in 0i16..200,
    ) {
        let mut arbiter = InteractionArbiter::new();
        for disc in &discs {
            arbiter.insert(disc.clone());
        }
        let mut pointer = PointerState::new();
        let point = Vec2::new(px as f32, py as f32);
        pointer.on_move(point);
        arbiter.update(&pointer, 0.0);

        let expected = arbiter
            .front_to_back()
            .find(|(_, d)| d.contains_point(point))
            .map(|(id, _)| id);
        prop_assert_eq!(arbiter.hovered(), expected);

        let hovered_count = arbiter
            .front_to_back()
            .filter(|(id, _)| arbiter.state(*id).is_some_and(|s| s.hovered))
            .count();
        prop_assert!(hovered_count <= 1);
    }

    #[test]
    fn at_most_one_object_drags(
        discs in prop::collection::vec(disc_strategy(), 1..6),
        ops in prop::collection::vec(pointer_op_strategy(), 1..60),
    ) {
        let mut arbiter = InteractionArbiter::new();
        for disc in discs {
            arbiter.insert(disc);
        }
        let mut pointer = PointerState::new();

        for op in ops {
            match op {
                PointerOp::Move { x, y } => pointer.on_move(Vec2::new(x as f32, y as f32)),
                PointerOp::Down => pointer.on_down(PointerButton::Primary),
                PointerOp::Up => pointer.on_up(PointerButton::Primary),
                PointerOp::Tick => {
                    arbiter.update(&pointer, 1.0 / 60.0);
                    pointer.end_frame();
                }
            }

            let dragging: Vec<ObjectId> = arbiter
                .front_to_back()
                .map(|(id, _)| id)
                .filter(|id| arbiter.state(*id).is_some_and(|s| s.dragging))
                .collect();
            prop_assert!(dragging.len() <= 1);
            prop_assert_eq!(arbiter.drag_locked(), dragging.first().copied());
            if !pointer.button_down && matches!(op, PointerOp::Tick) {
                prop_assert!(dragging.is_empty());
            }
        }
    }

    #[test]
    fn drag_keeps_grab_offset(
        gx in -10i16..10,
        gy in -10i16..10,
        moves in prop::collection::vec((-10i16..10, -10i16..10), 1..30),
    ) {
        let x0 = Vec2::new(100.0, 100.0);
        let mut arbiter = InteractionArbiter::new();
        let id = arbiter.insert(Disc { pos: x0, radius: 50.0 });

        let p0 = x0 + Vec2::new(gx as f32, gy as f32);
        let mut pointer = PointerState::new();
        pointer.on_move(p0);
        pointer.on_down(PointerButton::Primary);
        arbiter.update(&pointer, 0.0);
        prop_assert_eq!(arbiter.drag_locked(), Some(id));

        let mut p = p0;
        for (dx, dy) in moves {
            p += Vec2::new(dx as f32, dy as f32);
            pointer.on_move(p);
            arbiter.update(&pointer, 0.0);
            pointer.end_frame();
            let pos = arbiter.get(id).unwrap().pos;
            prop_assert!(pos.distance((x0 - p0) + p) < 1e-3);
        }
    }
}

#[test]
fn single_tile_is_a_rectangle() {
    let puzzle = generate(1, 1, Vec2::new(100.0, 100.0), 0);
    let pieces = puzzle.pieces();
    let piece = &pieces[0];
    let bounds = piece.outline().bounds();
    assert!(bounds.min.distance(Vec2::new(-50.0, -50.0)) < 1e-3);
    assert!(bounds.max.distance(Vec2::new(50.0, 50.0)) < 1e-3);
    assert!(piece.contains_point(Vec2::new(50.0, 50.0)));
    assert!(piece.contains_point(Vec2::new(1.0, 1.0)));
    assert!(!piece.contains_point(Vec2::new(101.0, 50.0)));
    assert!(!piece.contains_point(Vec2::new(50.0, -1.0)));
}

#[test]
fn unit_square_boundary_convention() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    assert!(point_in_polygon(Vec2::new(0.5, 0.5), &square, Vec2::ZERO));
    assert!(!point_in_polygon(Vec2::new(1.5, 0.5), &square, Vec2::ZERO));
    assert!(point_in_polygon(Vec2::new(0.0, 0.5), &square, Vec2::ZERO));
    assert!(!point_in_polygon(Vec2::new(1.0, 0.5), &square, Vec2::ZERO));
    assert!(!point_in_polygon(Vec2::new(1.0, 1.0), &square, Vec2::ZERO));
}
