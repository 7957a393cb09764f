//! Rush Out the Tunnel entry point
//!
//! The browser build starts from `platform::wasm_start`. Natively there is no
//! window: the binary plays one attract-mode run with the autopilot, drawing
//! every frame into a counting target, and logs the outcome.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use glam::IVec2;

    use rush_tunnel::platform::{InputSnapshot, Key};
    use rush_tunnel::renderer::{Color, RenderTarget};
    use rush_tunnel::resources::{ResourceError, ResourceId, ResourceLoader, Resources};
    use rush_tunnel::sim::{Rect, autopilot};
    use rush_tunnel::{AppContext, Game, Screen};

    /// Decoded image; the headless host only needs its size
    pub struct PngImage {
        size: IVec2,
    }

    /// Reads image files below `root`
    pub struct PngLoader {
        root: PathBuf,
    }

    impl PngLoader {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    impl ResourceLoader for PngLoader {
        type Image = PngImage;

        fn load(&mut self, id: ResourceId) -> Result<PngImage, ResourceError> {
            let bytes = std::fs::read(self.root.join(id.path()))
                .map_err(|source| ResourceError::Read { id, source })?;
            let decode = |reason: String| ResourceError::Decode { id, reason };
            let img = image::load_from_memory(&bytes).map_err(|e| decode(e.to_string()))?;
            let width = i32::try_from(img.width()).map_err(|e| decode(e.to_string()))?;
            let height = i32::try_from(img.height()).map_err(|e| decode(e.to_string()))?;
            Ok(PngImage {
                size: IVec2::new(width, height),
            })
        }
    }

    /// Discards drawing, counting calls
    #[derive(Default)]
    pub struct CountingTarget {
        pub calls: u64,
    }

    impl RenderTarget for CountingTarget {
        type Image = PngImage;

        fn fill(&mut self, _color: Color) {
            self.calls += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.calls += 1;
        }

        fn blit(&mut self, _image: &PngImage, _pos: IVec2) {
            self.calls += 1;
        }

        fn blit_region(&mut self, _image: &PngImage, _src: Rect, _pos: IVec2, _tint: Color) {
            self.calls += 1;
        }

        fn plot(&mut self, _pos: IVec2, _color: Color) {
            self.calls += 1;
        }

        fn image_size(&self, image: &PngImage) -> IVec2 {
            image.size
        }
    }

    /// Input the demo "player" gives on each screen
    fn demo_input(game: &Game) -> InputSnapshot {
        match game.screen() {
            Screen::Title | Screen::HighScoresThenPlaying => InputSnapshot::new().press(Key::Enter),
            Screen::Playing => {
                let steer = autopilot::steer(game.session());
                let mut input = InputSnapshot::new();
                if steer.ascend {
                    input = input.hold(Key::Up);
                }
                if steer.bomb {
                    input = input.press(Key::X);
                }
                input
            }
            Screen::NameInput => InputSnapshot::new().press(Key::Space),
            Screen::GameOver if game.explosion_done() => InputSnapshot::new().press(Key::Enter),
            _ => InputSnapshot::new(),
        }
    }

    /// Play until the run is over, the host asks to exit, or `max_ticks`
    pub fn run(game: &mut Game, ctx: &mut AppContext, max_ticks: u64) {
        let resources = Resources::preload(&mut PngLoader::new("."));
        if !resources.is_loaded(ResourceId::Font) {
            log::warn!("Font missing, text will not be drawn");
        }
        let mut target = CountingTarget::default();
        let mut ticks = 0;
        let mut started = false;

        while ticks < max_ticks && !ctx.exit_requested() {
            let input = demo_input(game);
            game.update(ctx, &input);
            game.draw(ctx, &mut target, &resources);
            ticks += 1;

            match game.screen() {
                Screen::Playing => started = true,
                Screen::Win | Screen::HighScores | Screen::Title if started => break,
                _ => {}
            }
        }

        let session = game.session();
        log::info!(
            "Demo finished on {:?} after {ticks} ticks: distance {}, score {}, {} draw calls",
            game.screen(),
            session.distance,
            session.score,
            target.calls
        );
        for (rank, entry) in ctx.high_scores.entries().iter().enumerate() {
            log::info!("  {}. {:<8} {}", rank + 1, entry.name, entry.score);
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rush_tunnel::{AppContext, Game, Settings};

    let settings = Settings::load();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    log::info!("Rush Out the Tunnel (native) starting...");

    let mut ctx = AppContext::new(settings.high_score_storage());
    let mut game = Game::from_settings(&settings);
    headless::run(&mut game, &mut ctx, settings.demo_max_ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web entry is `rush_tunnel::platform::wasm_start`
}
