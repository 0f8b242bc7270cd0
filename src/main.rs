//! Jigsaw Canvas entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use glam::Vec2;
    use jigsaw_canvas::consts::*;
    use jigsaw_canvas::interact::PointerButton;
    use jigsaw_canvas::puzzle::PuzzlePiece;
    use jigsaw_canvas::{PuzzleSession, PuzzleSettings};

    /// App instance holding all state
    struct App {
        session: PuzzleSession,
        ctx: CanvasRenderingContext2d,
        image: HtmlImageElement,
        surface: Vec2,
        last_time: f64,
        // FPS tracking
        frames: u32,
        fps_window_start: f64,
    }

    impl App {
        fn update_fps(&mut self, time: f64) {
            self.frames += 1;
            let elapsed = time - self.fps_window_start;
            if elapsed >= 1000.0 {
                let fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
                log::info!("FPS: {}", fps);
                self.frames = 0;
                self.fps_window_start = time;
            }
        }

        /// Update the session and draw every piece back to front
        fn frame(&mut self, dt: f32) {
            self.ctx
                .clear_rect(0.0, 0.0, self.surface.x as f64, self.surface.y as f64);

            let ctx = &self.ctx;
            let image = &self.image;
            let surface = self.surface;
            self.session.frame(dt, |piece, hovered| {
                draw_piece(ctx, image, surface, piece, hovered);
            });
        }
    }

    /// Clip to the outline, draw the image so the piece shows its own part, then stroke
    fn draw_piece(
        ctx: &CanvasRenderingContext2d,
        image: &HtmlImageElement,
        surface: Vec2,
        piece: &PuzzlePiece,
        hovered: bool,
    ) {
        let mut points = piece.world_outline();
        let Some(first) = points.next() else {
            return;
        };

        ctx.begin_path();
        ctx.move_to(first.x as f64, first.y as f64);
        for p in points {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();

        ctx.save();
        ctx.clip();
        if image.complete() && image.natural_width() > 0 {
            let origin = piece.image_origin();
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                origin.x as f64,
                origin.y as f64,
                surface.x as f64,
                surface.y as f64,
            );
        } else {
            ctx.set_fill_style_str("#c8c8c8");
            ctx.fill();
        }
        ctx.restore();

        ctx.set_stroke_style_str("#202020");
        ctx.set_line_width(if hovered {
            STROKE_WIDTH_HOVERED
        } else {
            STROKE_WIDTH
        });
        ctx.stroke();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jigsaw Canvas starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas pixels match CSS pixels so mouse offsets are surface coordinates
        let client_w = canvas.client_width().max(1) as u32;
        let client_h = canvas.client_height().max(1) as u32;
        canvas.set_width(client_w);
        canvas.set_height(client_h);
        let surface = Vec2::new(client_w as f32, client_h as f32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let image = HtmlImageElement::new().expect("Failed to create image");
        image.set_src("puzzle.jpg");

        let seed = js_sys::Date::now() as u64;
        let session = match PuzzleSession::new(PuzzleSettings::default(), surface, seed) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Failed to build puzzle: {e}");
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            session,
            ctx,
            image,
            surface,
            last_time: 0.0,
            frames: 0,
            fps_window_start: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_generate_button(app.clone());

        request_animation_frame(app);

        log::info!("Jigsaw Canvas running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.session
                    .pointer_mut()
                    .on_move(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let pointer = a.session.pointer_mut();
                pointer.on_move(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
                pointer.on_down(PointerButton::from_dom(event.button()));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up is tracked on the window so releasing off-canvas still ends the drag
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.session
                    .pointer_mut()
                    .on_up(PointerButton::from_dom(event.button()));
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Suppress the context menu so secondary clicks stay on the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                a.fps_window_start = time;
                0.0
            };
            a.last_time = time;

            a.frame(dt.min(0.1));
            a.update_fps(time);
        }

        request_animation_frame(app);
    }

    fn setup_generate_button(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("btnGeneratePuzzle") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                match a.session.regenerate() {
                    Ok(()) => log::info!("Puzzle regenerated"),
                    Err(e) => log::error!("Failed to regenerate puzzle: {e}"),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Jigsaw Canvas (native) starting...");
    log::info!("Native mode has no canvas - serve the wasm build for the interactive version");

    if let Err(e) = smoke_drag() {
        log::error!("Smoke run failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Build a board, drag the first piece across the surface, and report where it landed
#[cfg(not(target_arch = "wasm32"))]
fn smoke_drag() -> Result<(), jigsaw_canvas::PuzzleError> {
    use glam::Vec2;
    use jigsaw_canvas::interact::PointerButton;
    use jigsaw_canvas::{PuzzleSession, PuzzleSettings};

    let surface = Vec2::new(800.0, 600.0);
    let mut session = PuzzleSession::new(PuzzleSettings::default(), surface, 7)?;
    log::info!(
        "Built {} pieces, tile {:?}",
        session.arbiter().len(),
        session.puzzle().tile_size()
    );

    let start = session.puzzle().tile_center(0, 0);
    session.pointer_mut().on_move(start);
    session.pointer_mut().on_down(PointerButton::Primary);
    session.frame(1.0 / 60.0, |_, _| {});

    // Small steps keep the pointer inside the piece between ticks
    for step in 1..=40 {
        let p = start + Vec2::new(step as f32 * 5.0, step as f32 * 2.5);
        session.pointer_mut().on_move(p);
        session.frame(1.0 / 60.0, |_, _| {});
    }

    session.pointer_mut().on_up(PointerButton::Primary);
    let mut drawn = 0;
    session.frame(1.0 / 60.0, |_, _| drawn += 1);

    if let Some((id, piece)) = session.pieces().next() {
        log::info!(
            "Front piece {:?} cell {:?} moved from {:?} to {:?}",
            id,
            piece.cell,
            piece.home,
            piece.pos
        );
    }
    log::info!("Drew {drawn} pieces, drag lock {:?}", session.arbiter().drag_locked());
    Ok(())
}
