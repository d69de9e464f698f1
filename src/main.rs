//! Brickbreak entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use brickbreak::renderer::CanvasSurface;
    use brickbreak::sim::InputActivity;
    use brickbreak::{Layout, PaddleScreen, ScreenLayout, ScreenModeController, Settings};

    /// Game instance holding all state
    struct Game {
        controller: ScreenModeController<PaddleScreen>,
        surface: CanvasSurface,
        /// Keys currently down, by `KeyboardEvent.key`
        keys_held: HashSet<String>,
        /// Mouse button or touch point currently down
        pointer_held: bool,
    }

    impl Game {
        fn activity(&self) -> InputActivity {
            InputActivity {
                key_held: !self.keys_held.is_empty(),
                pointer_held: self.pointer_held,
            }
        }

        fn key_down(&mut self, key: String) {
            self.keys_held.insert(key.clone());
            let activity = self.activity();
            self.controller.handle_raw_key(&key, activity);
        }

        fn key_up(&mut self, key: &str) {
            self.keys_held.remove(key);
            self.controller.handle_key_released();
        }

        fn pointer_down(&mut self, point: Vec2) {
            self.pointer_held = true;
            let activity = self.activity();
            self.controller.handle_touch_started(point, activity);
        }

        fn pointer_up(&mut self) {
            self.pointer_held = false;
            self.controller.handle_touch_released();
        }

        /// Key-up and touch-end events may never arrive after focus moves
        fn input_lost(&mut self) {
            self.keys_held.clear();
            self.pointer_held = false;
            self.controller.reset_input();
        }

        fn render(&mut self) {
            self.controller.render(&mut self.surface);
        }
    }

    /// Log a failed DOM call instead of dropping it
    fn warn_on_err(what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("{} failed: {:?}", what, e);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Brickbreak starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(480.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(854.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::error!("2d context has unexpected type");
                    return;
                }
            },
            _ => {
                log::error!("Canvas 2d context unavailable");
                return;
            }
        };

        let settings = Settings::load();
        let layout = ScreenLayout::new(width as f32, height as f32, &settings);
        let gameplay = PaddleScreen::new(layout.game_area(), &settings);
        let controller =
            ScreenModeController::new(&layout, gameplay).with_button_overlay(settings.show_buttons);

        let game = Rc::new(RefCell::new(Game {
            controller,
            surface: CanvasSurface::new(ctx, width, height),
            keys_held: HashSet::new(),
            pointer_held: false,
        }));

        setup_play_button(&layout, game.clone());
        setup_input_handlers(&canvas, game.clone());
        setup_input_reset(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Brickbreak running!");
    }

    /// Place the DOM play button over the layout's play control
    fn setup_play_button(layout: &ScreenLayout, game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(btn) = document.get_element_by_id("play-btn") else {
            log::warn!("No #play-btn element, starting straight into play");
            game.borrow_mut().controller.on_play_activated();
            return;
        };

        if let Ok(el) = btn.clone().dyn_into::<HtmlElement>() {
            let rect = layout.play_control();
            let style = el.style();
            let props = [
                ("position", "absolute".to_string()),
                ("left", format!("{}px", rect.x)),
                ("top", format!("{}px", rect.y)),
                ("width", format!("{}px", rect.width)),
                ("height", format!("{}px", rect.height)),
            ];
            for (name, value) in props {
                warn_on_err("play button style", style.set_property(name, &value));
            }
        }

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if game.borrow_mut().controller.on_play_activated() {
                btn_clone.remove();
            }
        });
        warn_on_err(
            "click listener",
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
        );
        closure.forget();
    }

    /// Touch position relative to the canvas
    fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(Vec2::new(
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        ))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key().starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().key_down(event.key());
            });
            warn_on_err(
                "keydown listener",
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            warn_on_err(
                "keyup listener",
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }

        // Mouse down on the canvas, up anywhere
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().pointer_down(point);
            });
            warn_on_err(
                "mousedown listener",
                canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer_up();
            });
            warn_on_err(
                "mouseup listener",
                window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(point) = touch_point(&canvas_clone, &event) {
                    game.borrow_mut().pointer_down(point);
                }
            });
            warn_on_err(
                "touchstart listener",
                canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().pointer_up();
            });
            warn_on_err(
                "touchend listener",
                canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
    }

    /// Release held input when focus leaves the page or a touch is cancelled
    fn setup_input_reset(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input_lost();
                log::info!("Input released (window blur)");
            });
            warn_on_err(
                "blur listener",
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().pointer_up();
            });
            warn_on_err(
                "touchcancel listener",
                canvas.add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().render();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickbreak (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the screens through a short scripted session and log the result
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use brickbreak::renderer::DrawList;
    use brickbreak::sim::{DirectionalInput, InputActivity};
    use brickbreak::{Layout, PaddleScreen, ScreenLayout, ScreenModeController, Settings};

    let settings = Settings::load();
    let layout = ScreenLayout::new(480.0, 854.0, &settings);
    let gameplay = PaddleScreen::new(layout.game_area(), &settings);
    let mut controller =
        ScreenModeController::new(&layout, gameplay).with_button_overlay(settings.show_buttons);
    let mut frame = DrawList::new();

    controller.render(&mut frame);
    log::info!("Menu frame: {} draw commands", frame.take().len());

    controller.on_play_activated();

    // Hold right for a second
    controller.handle_key_pressed(DirectionalInput::Right, InputActivity::key());
    for _ in 0..60 {
        controller.render(&mut frame);
        frame.take();
    }
    controller.handle_key_released();
    log::info!("After holding right: x = {:.1}", controller.gameplay().player.pos.x);

    // Tap the left touch button for half a second
    if let Some(left) = controller.buttons().first().map(|b| b.rect) {
        let point = left.origin() + left.size() * 0.5;
        controller.handle_touch_started(point, InputActivity::pointer());
        for _ in 0..30 {
            controller.render(&mut frame);
            frame.take();
        }
        controller.handle_touch_released();
    }

    let player = &controller.gameplay().player;
    println!(
        "mode={:?} x={:.1} direction={:?} area={:?}",
        controller.mode(),
        player.pos.x,
        player.direction,
        player.area()
    );
}
