//! One active puzzle session
//!
//! Owns the generated board, the arbiter holding every piece, the latest
//! pointer state and the session RNG. Each frame runs in a fixed order:
//! 1. observe the latest pointer state
//! 2. run the arbiter over all pieces
//! 3. draw back to front
//! 4. reset the pointer's per-frame delta

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::PuzzleError;
use crate::interact::{InteractionArbiter, InteractionEvent, ObjectId, PointerState};
use crate::puzzle::{Puzzle, PuzzlePiece};
use crate::settings::{EdgeConfig, PuzzleSettings};

pub struct PuzzleSession {
    settings: PuzzleSettings,
    surface: Vec2,
    seed: u64,
    rng: Pcg32,
    puzzle: Puzzle,
    arbiter: InteractionArbiter<PuzzlePiece>,
    pointer: PointerState,
}

impl PuzzleSession {
    /// Build a session covering a `surface`-sized drawing area
    pub fn new(settings: PuzzleSettings, surface: Vec2, seed: u64) -> Result<Self, PuzzleError> {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let puzzle = Puzzle::generate(
            settings.rows,
            settings.cols,
            surface,
            &settings.edge,
            settings.sample_step,
            &mut rng,
        )?;

        let mut session = Self {
            settings,
            surface,
            seed,
            rng,
            puzzle,
            arbiter: InteractionArbiter::new(),
            pointer: PointerState::new(),
        };
        session.populate();
        log::info!("Puzzle session started with seed {seed}");
        Ok(session)
    }

    /// Throw away all pieces and arbitration state and generate a new board.
    ///
    /// On error the current board is kept.
    pub fn rebuild(
        &mut self,
        rows: u32,
        cols: u32,
        size: Vec2,
        config: &EdgeConfig,
    ) -> Result<(), PuzzleError> {
        let config = config.sanitized();
        let puzzle = Puzzle::generate(rows, cols, size, &config, self.settings.sample_step, &mut self.rng)?;

        self.arbiter.clear();
        self.settings.rows = rows;
        self.settings.cols = cols;
        self.settings.edge = config;
        self.surface = size;
        self.puzzle = puzzle;
        self.populate();
        Ok(())
    }

    /// Rebuild using the stored settings and surface
    pub fn regenerate(&mut self) -> Result<(), PuzzleError> {
        let PuzzleSettings { rows, cols, edge, .. } = self.settings.clone();
        self.rebuild(rows, cols, self.surface, &edge)
    }

    /// Replace settings and rebuild
    pub fn apply_settings(&mut self, settings: PuzzleSettings) -> Result<(), PuzzleError> {
        let settings = settings.sanitized();
        self.settings.sample_step = settings.sample_step;
        self.rebuild(settings.rows, settings.cols, self.surface, &settings.edge)
    }

    fn populate(&mut self) {
        for piece in self.puzzle.pieces() {
            self.arbiter.insert(piece);
        }
    }

    /// Run the arbiter against the latest pointer state
    pub fn update(&mut self, dt: f32) -> Vec<InteractionEvent> {
        self.arbiter.update(&self.pointer, dt)
    }

    /// One full frame: update, draw back to front, reset pointer delta.
    ///
    /// `draw` receives each piece and whether it is the mouse-over target.
    pub fn frame<F>(&mut self, dt: f32, mut draw: F) -> Vec<InteractionEvent>
    where
        F: FnMut(&PuzzlePiece, bool),
    {
        let events = self.update(dt);
        let target = self.arbiter.hovered();
        for (id, piece) in self.arbiter.back_to_front() {
            draw(piece, Some(id) == target);
        }
        self.pointer.end_frame();
        events
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Event handlers write here between frames
    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn mouse_over_target(&self) -> Option<ObjectId> {
        self.arbiter.hovered()
    }

    pub fn arbiter(&self) -> &InteractionArbiter<PuzzlePiece> {
        &self.arbiter
    }

    /// Pieces front to back
    pub fn pieces(&self) -> impl Iterator<Item = (ObjectId, &PuzzlePiece)> {
        self.arbiter.front_to_back()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
