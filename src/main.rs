//! Stump Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement,
        HtmlInputElement,
    };

    use stump_runner::Session;
    use stump_runner::audio::AudioManager;
    use stump_runner::consts::*;
    use stump_runner::platform::{InputAction, InputMapper, LocalStore};
    use stump_runner::renderer::{CanvasRenderer, Renderer};
    use stump_runner::settings::Settings;
    use stump_runner::sim::GamePhase;

    const SPRITE_URL: &str = "person.png";

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStore, AudioManager>,
        renderer: CanvasRenderer,
        settings: Settings,
        input: InputMapper,
        // Track phase to toggle the game-over overlay once per transition
        last_phase: GamePhase,
    }

    impl Game {
        /// Run one simulation frame and draw it
        fn frame(&mut self, time: f64) {
            self.session.frame();
            self.renderer.draw(self.session.state(), time);
        }

        fn handle(&mut self, action: InputAction) {
            self.session.audio_mut().resume();
            self.session.handle_input(action);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            set_text(document, "hud-score", &self.session.score().to_string());
            set_text(document, "hud-high-score", &self.session.high_score().to_string());

            let phase = self.session.phase();
            if phase == self.last_phase {
                return;
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                if phase == GamePhase::GameOver {
                    set_text(document, "final-score", &self.session.score().to_string());
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
            self.last_phase = phase;
        }

        /// Accept the nickname prompt; blank names shake the input instead
        fn submit_nickname(&mut self, document: &Document) {
            let Some(input) = document
                .get_element_by_id("nickname-input")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            if self.settings.set_nickname(&input.value()) {
                self.settings.save(self.session.store_mut());
                self.session.set_input_enabled(true);
                show_nickname(document, &self.settings);
                log::info!("Nickname set");
            } else {
                input.set_placeholder("Please enter a nickname!");
                let _ = input.class_list().add_1("shake");
                let target = input.clone();
                let unshake = Closure::once(move || {
                    let _ = target.class_list().remove_1("shake");
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        unshake.as_ref().unchecked_ref(),
                        500,
                    );
                }
                unshake.forget();
            }
        }

        fn toggle_sound(&mut self, document: &Document) {
            let enabled = self.settings.toggle_sound();
            self.settings.save(self.session.store_mut());
            self.session.audio_mut().set_sound_enabled(enabled);
            update_sound_buttons(document, &self.settings);
        }

        fn toggle_music(&mut self, document: &Document) {
            let enabled = self.settings.toggle_music();
            self.settings.save(self.session.store_mut());
            let running = self.session.phase() == GamePhase::Running;
            self.session.audio_mut().set_music_enabled(enabled, running);
            update_sound_buttons(document, &self.settings);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn update_sound_buttons(document: &Document, settings: &Settings) {
        let toggles = [
            ("sound-toggle", settings.sound_enabled, "🔊", "🔇"),
            ("music-toggle", settings.music_enabled, "🎵", "🎶"),
        ];
        for (id, enabled, on, off) in toggles {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(if enabled { on } else { off }));
                let _ = el.class_list().toggle_with_force("muted", !enabled);
            }
        }
    }

    /// Show the nickname in the HUD and hide the prompt, or show the prompt
    fn show_nickname(document: &Document, settings: &Settings) {
        let modal = document.get_element_by_id("nickname-modal");
        match &settings.nickname {
            Some(name) => {
                set_text(document, "player-name", name);
                if let Some(modal) = modal {
                    let _ = modal.class_list().add_1("hidden");
                }
            }
            None => {
                if let Some(modal) = modal {
                    let _ = modal.class_list().remove_1("hidden");
                }
                if let Some(input) = document
                    .get_element_by_id("nickname-input")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    let _ = input.focus();
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Stump Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprite = HtmlImageElement::new().ok();
        let renderer = CanvasRenderer::new(ctx, sprite.clone());

        let store = LocalStore::open();
        let settings = Settings::load(&store);
        let audio = AudioManager::new(&settings);

        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(store, audio, seed);
        session.set_input_enabled(settings.has_nickname());
        log::info!("Game initialized with seed: {}", seed);

        show_nickname(&document, &settings);
        update_sound_buttons(&document, &settings);
        set_text(&document, "hud-high-score", &session.high_score().to_string());

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            settings,
            input: InputMapper::new(),
            last_phase: GamePhase::Idle,
        }));

        if let Some(img) = sprite {
            setup_sprite(&img, game.clone());
        }
        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Stump Runner running!");
    }

    fn setup_sprite(img: &HtmlImageElement, game: Rc<RefCell<Game>>) {
        {
            let loaded = img.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let (w, h) = (loaded.natural_width() as f32, loaded.natural_height() as f32);
                game.borrow_mut().session.state_mut().player.fit_to_sprite(w, h);
                log::info!("Player sprite loaded ({}x{})", w, h);
            });
            img.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                log::warn!("Player sprite not loaded, using rectangle");
            });
            img.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        img.set_src(SPRITE_URL);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if !g.session.input_enabled() {
                    // Let the nickname prompt receive the key
                    if code == "Enter" {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            g.submit_nickname(&document);
                        }
                    }
                    return;
                }
                if let Some(action) = g.input.key_down(&code, event.repeat()) {
                    event.prevent_default();
                    g.handle(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-up events will be lost
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                let action = g.input.pointer_down();
                g.handle(action);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let action = g.input.pointer_down();
                g.handle(action);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        type Handler = fn(&mut Game, &Document);
        let buttons: [(&str, Handler); 4] = [
            ("restart-btn", |g, _| g.handle(InputAction::Restart)),
            ("nickname-btn", |g, d| g.submit_nickname(d)),
            ("sound-toggle", |g, d| g.toggle_sound(d)),
            ("music-toggle", |g, d| g.toggle_music(d)),
        ];

        for (id, handler) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let game = game.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                // Keep button clicks from reaching the canvas/keyboard handlers
                event.stop_propagation();
                let mut g = game.borrow_mut();
                g.session.audio_mut().resume();
                handler(&mut g, &document);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            // Decorative drift keys off wall-clock time, not the frame stamp
            g.frame(js_sys::Date::now());
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

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
    log::info!("Stump Runner (native) starting...");
    log::info!("Native mode plays headless demo runs - run with `trunk serve` for the web version");

    headless::run(std::env::args().skip(1).collect());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use stump_runner::Session;
    use stump_runner::audio::NullAudio;
    use stump_runner::persistence::FileStore;
    use stump_runner::sim::GamePhase;

    /// Save file location override
    const SAVE_ENV: &str = "STUMP_RUNNER_SAVE";
    const DEFAULT_SAVE: &str = "stump_runner_save.json";
    /// Ten minutes at 60 fps; the autopilot rarely dies on its own
    const MAX_FRAMES_PER_RUN: u64 = 60 * 60 * 10;

    /// `stump-runner [seed] [runs]`
    pub fn run(args: Vec<String>) {
        let seed = args
            .first()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);
        let runs: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

        let path = std::env::var(SAVE_ENV).unwrap_or_else(|_| DEFAULT_SAVE.to_string());
        let store = FileStore::open(path);
        log::info!("Save file: {}", store.path().display());

        let mut session = Session::new(store, NullAudio, seed);
        session.autopilot = true;
        log::info!("Seed {}, {} runs, high score {}", seed, runs, session.high_score());

        for run in 1..=runs {
            session.jump_input();
            let mut frames = 0;
            while session.phase() == GamePhase::Running && frames < MAX_FRAMES_PER_RUN {
                session.frame();
                frames += 1;
            }
            let state = session.state();
            println!(
                "run {}: score {} speed {:.1} frames {}{}",
                run,
                state.run.score,
                state.run.scroll_speed,
                frames,
                if session.phase() == GamePhase::Running {
                    " (capped)"
                } else {
                    ""
                }
            );
            // Capped runs still count toward the high score
            session.forfeit();
        }
        println!("high score {}", session.high_score());
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
