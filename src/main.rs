//! Bunny Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use bunny_hop::audio::{AudioManager, SoundEffect};
    use bunny_hop::consts::SIM_DT;
    use bunny_hop::highscores::LocalStorageStore;
    use bunny_hop::platform::{InputState, KeyAction};
    use bunny_hop::renderer::{RenderState, draw_list};
    use bunny_hop::session::{Session, high_score_text, score_text};
    use bunny_hop::sim::GameEvent;
    use bunny_hop::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        input: InputState,
        last_time: f64,
        /// An animation frame is scheduled
        loop_active: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());
            Self {
                session: Session::new(seed, Tuning::default(), LocalStorageStore),
                settings,
                render_state: None,
                audio,
                input: InputState::default(),
                last_time: 0.0,
                loop_active: false,
            }
        }

        /// Start trigger. Returns true if the frame loop needs arming.
        fn start(&mut self) -> bool {
            if !self.session.start() {
                return false;
            }
            self.audio.resume();
            self.last_time = 0.0;
            self.handle_events();
            self.update_panels();
            !self.loop_active
        }

        /// Apply a settings key and persist the result
        fn toggle_setting(&mut self, action: KeyAction) {
            match action {
                KeyAction::ToggleParticles => {
                    self.settings.toggle_particles();
                    log::info!("Particles {}", if self.settings.particles { "on" } else { "off" });
                    // The loop is parked outside a run, so redraw here
                    if !self.loop_active {
                        self.render();
                    }
                }
                KeyAction::ToggleMute => {
                    let volume = self.settings.toggle_mute();
                    self.audio.set_volume(volume);
                }
                _ => return,
            }
            self.settings.save();
        }

        /// Run simulation ticks for this frame, then present it.
        /// Returns whether another frame should be scheduled.
        fn frame(&mut self, dt: f32) -> bool {
            let input = self.input.tick_input();
            self.session.advance(dt, &input);
            self.handle_events();
            self.render();
            if !self.session.is_running() {
                self.update_panels();
            }
            self.session.is_running()
        }

        /// Route simulation events to audio and the HUD
        fn handle_events(&mut self) {
            for event in self.session.drain_events() {
                self.audio.play(SoundEffect::for_event(&event));
                match event {
                    GameEvent::RunStarted => {
                        set_text("score", &score_text(0));
                        set_text("high-score", &high_score_text(self.session.high_score()));
                    }
                    GameEvent::Collected { score } => {
                        set_text("score", &score_text(score));
                    }
                    GameEvent::GameOver { score } => {
                        let best = self.session.high_score();
                        set_text("final-score", &score_text(score));
                        set_text("final-high-score", &high_score_text(best));
                        set_text("high-score", &high_score_text(best));
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let commands = draw_list::build(self.session.state(), &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&commands) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Show/hide overlay panels for the current phase
        fn update_panels(&self) {
            let Some(document) = document() else { return };
            let panels = self.session.panels();
            set_visible(&document, "start-screen", panels.start_screen);
            set_visible(&document, "game-over-screen", panels.game_over_screen);
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Bunny Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let tuning = game.borrow().session.state().tuning.clone();
        let width = tuning.canvas_width as u32;
        let height = tuning.canvas_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Rendering is optional: without a GPU the game still runs, unseen
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let canvas_size = (tuning.canvas_width, tuning.canvas_height);
                        match RenderState::new(surface, &adapter, width, height, canvas_size).await
                        {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No graphics adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        {
            let g = game.borrow();
            set_text("score", &score_text(0));
            set_text("high-score", &high_score_text(g.session.high_score()));
            g.update_panels();
        }

        setup_input_handlers(game.clone());

        // Idle frame; the loop itself starts on the first start trigger
        game.borrow_mut().render();

        log::info!("Bunny Hop ready - press Space to start");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Key down: latch movement, handle start/restart and settings toggles
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match g.input.key_down(&event.code()) {
                    Some(KeyAction::Start) => {
                        if g.start() {
                            g.loop_active = true;
                            drop(g);
                            request_animation_frame(game.clone());
                        }
                    }
                    Some(action) => g.toggle_setting(action),
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            let keep_going = g.frame(dt);
            g.loop_active = keep_going;
            keep_going
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bunny Hop (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let options = native::Options::from_args(std::env::args().skip(1));
    native::run(&options);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use bunny_hop::consts::SIM_DT;
    use bunny_hop::sim::{GameEvent, GameState, ItemKind, TickInput};
    use bunny_hop::{MemoryStore, Session, Tuning};

    pub struct Options {
        pub seed: u64,
        /// Stop after this many ticks even if still alive
        pub max_ticks: u64,
        pub runs: u32,
        pub tuning: Tuning,
    }

    impl Options {
        pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
            let mut options = Self {
                seed: 12345,
                max_ticks: 60 * 60 * 5,
                runs: 1,
                tuning: Tuning::default(),
            };
            while let Some(arg) = args.next() {
                let value = args.next();
                match (arg.as_str(), value) {
                    ("--seed", Some(v)) => match v.parse() {
                        Ok(seed) => options.seed = seed,
                        Err(_) => log::warn!("Bad --seed {:?}, using {}", v, options.seed),
                    },
                    ("--ticks", Some(v)) => match v.parse() {
                        Ok(ticks) => options.max_ticks = ticks,
                        Err(_) => log::warn!("Bad --ticks {:?}", v),
                    },
                    ("--runs", Some(v)) => match v.parse() {
                        Ok(runs) => options.runs = runs,
                        Err(_) => log::warn!("Bad --runs {:?}", v),
                    },
                    ("--tuning", Some(path)) => match std::fs::read_to_string(&path) {
                        Ok(json) => {
                            if let Some(tuning) = Tuning::from_json(&json) {
                                options.tuning = tuning;
                            }
                        }
                        Err(e) => log::warn!("Cannot read {}: {}", path, e),
                    },
                    (other, _) => log::warn!("Ignoring argument {:?}", other),
                }
            }
            options
        }
    }

    /// Dodge rocks about to land on the bunny, otherwise chase the lowest carrot
    fn autopilot(state: &GameState) -> TickInput {
        let player = &state.player;
        let center = player.center().x;
        let margin = player.speed * 2.0;

        let threat = state
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Hazardous)
            .filter(|i| i.pos.y + i.size.y > player.pos.y - 120.0)
            .find(|i| {
                i.pos.x < player.pos.x + player.size.x + margin
                    && i.pos.x + i.size.x > player.pos.x - margin
            });
        if let Some(rock) = threat {
            let at_right_wall = player.pos.x + player.size.x >= state.tuning.canvas_width;
            let flee_left = (rock.center().x > center && player.pos.x > 0.0) || at_right_wall;
            return TickInput {
                move_left: flee_left,
                move_right: !flee_left,
            };
        }

        let target = state
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Beneficial && i.pos.y < player.pos.y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        match target {
            Some(carrot) => {
                let dx = carrot.center().x - center;
                TickInput {
                    move_left: dx < -player.speed,
                    move_right: dx > player.speed,
                }
            }
            None => TickInput::default(),
        }
    }

    pub fn run(options: &Options) {
        let mut session = Session::new(options.seed, options.tuning.clone(), MemoryStore::default());

        for run in 1..=options.runs {
            session.start();
            let mut ticks = 0;
            while session.is_running() && ticks < options.max_ticks {
                let input = autopilot(session.state());
                session.step(&input);
                ticks += 1;
            }

            let collected = session
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Collected { .. }))
                .count();
            let outcome = if session.is_running() { "survived" } else { "hit a rock" };
            println!(
                "Run {}: {} after {} ticks ({:.1}s), score {}, carrots {}, high score {}",
                run,
                outcome,
                ticks,
                ticks as f32 * SIM_DT,
                session.score(),
                collected,
                session.high_score()
            );

            // Tick cap reached mid-run; there is no next run to start
            if session.is_running() {
                break;
            }
        }
    }
}
