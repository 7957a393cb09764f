//! Screen state machine
//!
//! [`Game`] owns the run state and UI sub-state and dispatches each tick to
//! the update function of the current [`Screen`]. The high score table and
//! the exit flag are not owned here; they live in the [`AppContext`] the host
//! passes in on every call.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::highscores::HighScoreTable;
use crate::persistence::HighScoreStorage;
use crate::platform::input::{self, InputSource, Key};
use crate::renderer::{RenderTarget, scenes};
use crate::resources::Resources;
use crate::settings::Settings;
use crate::sim::{GameEvent, PlayInput, Rect, Session, tick};
use crate::ui::{MenuItem, Message, NameEntry, NameEntryAction, TIPS, TitleMenu};

/// Every screen the game can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Countdown,
    Playing,
    Help,
    About,
    Win,
    GameOver,
    NameInput,
    Paused,
    ExitConfirm,
    HighScores,
    /// Leaderboard shown after "New Game", leading into the countdown
    HighScoresThenPlaying,
}

/// Process-wide state shared with the host
pub struct AppContext {
    pub high_scores: HighScoreTable,
    storage: Box<dyn HighScoreStorage>,
    exit_requested: bool,
}

impl AppContext {
    /// Load the table from `storage`; failures leave it empty
    pub fn new(storage: Box<dyn HighScoreStorage>) -> Self {
        let high_scores = HighScoreTable::load(&*storage);
        Self {
            high_scores,
            storage,
            exit_requested: false,
        }
    }

    /// Ranked-insert and persist. Returns the slot written, if any.
    pub fn record_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let slot = self.high_scores.insert_ranked(name, score);
        if slot.is_some() {
            self.high_scores.save(&mut *self.storage);
        }
        slot
    }

    pub fn request_exit(&mut self) {
        log::info!("Exit requested");
        self.exit_requested = true;
    }

    /// Polled by the host after every tick
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// On-screen bomb button (bottom left)
pub fn bomb_button() -> Rect {
    Rect::from_size(
        BUTTON_MARGIN,
        SCREEN_HEIGHT - BUTTON_SIZE - BUTTON_MARGIN,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

/// On-screen ascend button (bottom right)
pub fn up_button() -> Rect {
    Rect::from_size(
        SCREEN_WIDTH - BUTTON_SIZE - BUTTON_MARGIN,
        SCREEN_HEIGHT - BUTTON_SIZE - BUTTON_MARGIN,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

/// The game controller
pub struct Game {
    screen: Screen,
    session: Session,
    rng: Pcg32,
    menu: TitleMenu,
    message: Message,
    name_entry: NameEntry,
    explosion_frame: u32,
    win_frame: u32,
    show_tips: bool,
    /// Slot written by the most recent name entry, highlighted on the table
    last_entry: Option<usize>,
}

impl Game {
    /// New game on the title screen with a fixed seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new(&mut rng);
        Self {
            screen: Screen::Title,
            session,
            rng,
            menu: TitleMenu::default(),
            message: Message::default(),
            name_entry: NameEntry::new(),
            explosion_frame: 0,
            win_frame: 0,
            show_tips: true,
            last_entry: None,
        }
    }

    /// New game configured from user settings; unseeded settings draw a
    /// seed from the OS
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game seed: {seed}");
        let mut game = Self::new(seed);
        game.show_tips = settings.show_tips;
        game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn menu(&self) -> &TitleMenu {
        &self.menu
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn name_entry(&self) -> &NameEntry {
        &self.name_entry
    }

    pub fn explosion_frame(&self) -> u32 {
        self.explosion_frame
    }

    /// Explosion animation has played out
    pub fn explosion_done(&self) -> bool {
        self.explosion_frame > EXPLOSION_FRAMES
    }

    pub fn win_frame(&self) -> u32 {
        self.win_frame
    }

    pub fn last_entry(&self) -> Option<usize> {
        self.last_entry
    }

    /// Digit shown during the countdown (3, 2, 1, then 0)
    pub fn countdown_digit(&self) -> u32 {
        self.session.countdown.div_ceil(TICKS_PER_SECOND)
    }

    /// Start a fresh run
    pub fn reset(&mut self) {
        self.session = Session::new(&mut self.rng);
        self.name_entry.reset();
        self.explosion_frame = 0;
        self.win_frame = 0;
        self.last_entry = None;
    }

    fn set_screen(&mut self, next: Screen) {
        if next != self.screen {
            log::debug!("{:?} -> {:?}", self.screen, next);
            self.screen = next;
        }
    }

    /// Advance one tick
    pub fn update<I: InputSource + ?Sized>(&mut self, ctx: &mut AppContext, input: &I) {
        self.message.tick();
        self.name_entry.tick_highlights();

        match self.screen {
            Screen::Title => self.update_title(ctx, input),
            Screen::Countdown => self.update_countdown(),
            Screen::Playing => self.update_playing(input),
            Screen::Help | Screen::About | Screen::Win | Screen::HighScores => {
                self.update_info(input)
            }
            Screen::GameOver => self.update_game_over(ctx, input),
            Screen::NameInput => self.update_name_input(ctx, input),
            Screen::Paused => self.update_paused(input),
            Screen::ExitConfirm => self.update_exit_confirm(ctx, input),
            Screen::HighScoresThenPlaying => self.update_high_scores_then_playing(input),
        }
    }

    /// Issue this frame's draw commands
    pub fn draw<R: RenderTarget>(
        &self,
        ctx: &AppContext,
        target: &mut R,
        resources: &Resources<R::Image>,
    ) {
        match self.screen {
            Screen::Title => scenes::draw_title(target, resources, &self.menu),
            Screen::Countdown => scenes::draw_countdown(target, resources, self),
            Screen::Playing => scenes::draw_playing(target, resources, self),
            Screen::Help => scenes::draw_help(target, resources),
            Screen::About => scenes::draw_about(target, resources),
            Screen::Win => scenes::draw_win(target, resources, self.win_frame),
            Screen::GameOver => scenes::draw_game_over(target, resources, self),
            Screen::NameInput => scenes::draw_name_input(target, resources, &self.name_entry),
            Screen::Paused => scenes::draw_paused(target, resources),
            Screen::ExitConfirm => scenes::draw_exit_confirm(target, resources),
            Screen::HighScores | Screen::HighScoresThenPlaying => {
                scenes::draw_high_scores(target, resources, &ctx.high_scores, self.last_entry)
            }
        }
        if let Some(text) = self.message.visible() {
            scenes::draw_message(target, resources, text);
        }
    }

    fn update_title<I: InputSource + ?Sized>(&mut self, ctx: &mut AppContext, input: &I) {
        if input.key_just_pressed(Key::Down) {
            self.menu.next();
        }
        if input.key_just_pressed(Key::Up) {
            self.menu.prev();
        }
        let tapped = input::taps(input).find_map(|p| self.menu.hit(p));
        if let Some(item) = tapped {
            self.select_menu_item(ctx, item);
            return;
        }
        if input.key_just_pressed(Key::Enter) {
            self.select_menu_item(ctx, self.menu.selected());
            return;
        }
        if input.key_just_pressed(Key::Escape) {
            self.set_screen(Screen::ExitConfirm);
        }
    }

    fn select_menu_item(&mut self, ctx: &mut AppContext, item: MenuItem) {
        match item {
            MenuItem::NewGame => {
                self.reset();
                self.set_screen(Screen::HighScoresThenPlaying);
            }
            MenuItem::Help => self.set_screen(Screen::Help),
            MenuItem::About => self.set_screen(Screen::About),
            MenuItem::Exit => ctx.request_exit(),
        }
    }

    fn update_countdown(&mut self) {
        self.session.countdown = self.session.countdown.saturating_sub(1);
        if self.session.countdown == 0 {
            self.set_screen(Screen::Playing);
        }
    }

    fn update_playing<I: InputSource + ?Sized>(&mut self, input: &I) {
        if input.key_just_pressed(Key::Z) {
            self.message.show("Paused", MESSAGE_TICKS);
            self.set_screen(Screen::Paused);
            return;
        }
        if input.key_just_pressed(Key::Escape) {
            self.set_screen(Screen::ExitConfirm);
            return;
        }

        let play = PlayInput {
            ascend: input.key_held(Key::Up) || input::held_in(input, &up_button()),
            bomb: input.key_just_pressed(Key::X) || input::tapped_in(input, &bomb_button()),
        };
        let tips_before = self.session.tip_timer;
        let events = tick(&mut self.session, &play, &mut self.rng);

        for event in events {
            match event {
                GameEvent::Won => {
                    log::info!("Run won with score {}", self.session.score);
                    self.win_frame = 0;
                    self.message.show("Win", MESSAGE_TICKS);
                    self.set_screen(Screen::Win);
                }
                GameEvent::Crashed(kind) => {
                    log::info!(
                        "Crashed ({kind:?}) at distance {} with score {}",
                        self.session.distance,
                        self.session.score
                    );
                    self.explosion_frame = 0;
                    self.set_screen(Screen::GameOver);
                }
                GameEvent::CoinCollected => self.message.show("Got coin!", COIN_MESSAGE_TICKS),
                GameEvent::BombLaunched { remaining } => {
                    log::debug!("Bomb launched, {remaining} left")
                }
                GameEvent::FieldCleared | GameEvent::CoinSpawned => {}
            }
        }

        let timer = self.session.tip_timer;
        if self.show_tips && timer != tips_before && timer % TIP_INTERVAL == 0 {
            let tip = TIPS[self.rng.random_range(0..TIPS.len())];
            self.message.show(tip, MESSAGE_TICKS);
        }
    }

    fn update_paused<I: InputSource + ?Sized>(&mut self, input: &I) {
        if input.key_just_pressed(Key::Z) {
            self.message.show("Resume", MESSAGE_TICKS);
            self.set_screen(Screen::Playing);
        }
    }

    /// Help, About, Win and HighScores all return to the title on confirm
    fn update_info<I: InputSource + ?Sized>(&mut self, input: &I) {
        if self.screen == Screen::Win {
            self.win_frame = (self.win_frame + 1).min(win_reveal_ticks());
        }
        if input::confirm(input) {
            self.set_screen(Screen::Title);
        }
    }

    fn update_game_over<I: InputSource + ?Sized>(&mut self, ctx: &AppContext, input: &I) {
        if !self.explosion_done() {
            self.explosion_frame += 1;
            return;
        }
        if ctx.high_scores.is_high_score(self.session.score) {
            self.name_entry.reset();
            self.set_screen(Screen::NameInput);
        } else if input::confirm(input) {
            self.set_screen(Screen::Title);
        }
    }

    fn update_name_input<I: InputSource + ?Sized>(&mut self, ctx: &mut AppContext, input: &I) {
        if let NameEntryAction::Commit(name) = self.name_entry.update(input) {
            self.last_entry = ctx.record_score(&name, self.session.score);
            log::info!(
                "High score {} recorded for {name} (slot {:?})",
                self.session.score,
                self.last_entry
            );
            self.set_screen(Screen::HighScores);
        }
    }

    fn update_exit_confirm<I: InputSource + ?Sized>(&mut self, ctx: &mut AppContext, input: &I) {
        if input.key_just_pressed(Key::Y) {
            ctx.request_exit();
        } else if input.key_just_pressed(Key::N) || input.key_just_pressed(Key::Escape) {
            self.set_screen(Screen::Title);
        }
    }

    fn update_high_scores_then_playing<I: InputSource + ?Sized>(&mut self, input: &I) {
        if input::confirm(input) {
            self.reset();
            self.set_screen(Screen::Countdown);
        }
    }
}

/// Ticks until "You Win" is fully revealed
fn win_reveal_ticks() -> u32 {
    scenes::WIN_TEXT.len() as u32 * WIN_LETTER_TICKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScoreEntry;
    use crate::persistence::MemoryStorage;
    use crate::platform::InputSnapshot;

    fn setup() -> (Game, AppContext, MemoryStorage) {
        let storage = MemoryStorage::new();
        let ctx = AppContext::new(Box::new(storage.clone()));
        (Game::new(12345), ctx, storage)
    }

    fn press(key: Key) -> InputSnapshot {
        InputSnapshot::new().press(key)
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::new()
    }

    /// Title -> New Game -> leaderboard -> countdown -> playing
    fn start_playing(game: &mut Game, ctx: &mut AppContext) {
        game.update(ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::HighScoresThenPlaying);
        game.update(ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::Countdown);
        for _ in 0..COUNTDOWN_TICKS {
            game.update(ctx, &idle());
        }
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn test_initial_screen() {
        let (game, ctx, _) = setup();
        assert_eq!(game.screen(), Screen::Title);
        assert!(!ctx.exit_requested());
    }

    #[test]
    fn test_countdown_length() {
        let (mut game, mut ctx, _) = setup();
        game.update(&mut ctx, &press(Key::Enter));
        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.countdown_digit(), 3);
        for _ in 0..COUNTDOWN_TICKS - 1 {
            game.update(&mut ctx, &idle());
        }
        assert_eq!(game.screen(), Screen::Countdown);
        assert_eq!(game.countdown_digit(), 1);
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn test_menu_navigation() {
        let (mut game, mut ctx, _) = setup();
        game.update(&mut ctx, &press(Key::Down));
        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::Help);
        game.update(&mut ctx, &InputSnapshot::new().tap(10, 10));
        assert_eq!(game.screen(), Screen::Title);

        game.update(&mut ctx, &press(Key::Down));
        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::About);
        game.update(&mut ctx, &InputSnapshot::new().click(1, 1));
        assert_eq!(game.screen(), Screen::Title);
    }

    #[test]
    fn test_menu_click_selects_item() {
        let (mut game, mut ctx, _) = setup();
        // Exit item sits at y 53..62
        game.update(&mut ctx, &InputSnapshot::new().click(130, 55));
        assert!(ctx.exit_requested());
        assert_eq!(game.menu().selected(), MenuItem::Exit);
    }

    #[test]
    fn test_exit_confirm() {
        let (mut game, mut ctx, _) = setup();
        game.update(&mut ctx, &press(Key::Escape));
        assert_eq!(game.screen(), Screen::ExitConfirm);
        game.update(&mut ctx, &press(Key::N));
        assert_eq!(game.screen(), Screen::Title);
        assert!(!ctx.exit_requested());

        game.update(&mut ctx, &press(Key::Escape));
        game.update(&mut ctx, &press(Key::Escape));
        assert_eq!(game.screen(), Screen::Title);

        game.update(&mut ctx, &press(Key::Escape));
        game.update(&mut ctx, &press(Key::Y));
        assert!(ctx.exit_requested());
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.update(&mut ctx, &idle());
        let distance = game.session().distance;

        game.update(&mut ctx, &press(Key::Z));
        assert_eq!(game.screen(), Screen::Paused);
        assert_eq!(game.message().visible(), Some("Paused"));
        for _ in 0..10 {
            game.update(&mut ctx, &idle());
        }
        assert_eq!(game.session().distance, distance);

        game.update(&mut ctx, &press(Key::Z));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.message().visible(), Some("Resume"));
    }

    #[test]
    fn test_escape_from_playing() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.update(&mut ctx, &press(Key::Escape));
        assert_eq!(game.screen(), Screen::ExitConfirm);
    }

    #[test]
    fn test_win_transition() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.session_mut().distance = WIN_DISTANCE - 1;
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::Win);
        assert_eq!(game.session().distance, WIN_DISTANCE);
        assert_eq!(game.message().visible(), Some("Win"));
        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::Title);
    }

    #[test]
    fn test_boundary_crash_to_title_without_high_score() {
        let (mut game, mut ctx, _) = setup();
        ctx.high_scores = HighScoreTable::from_entries(
            (0..5).map(|i| HighScoreEntry::new("pro", 1000 - i)),
        );
        start_playing(&mut game, &mut ctx);
        game.session_mut().player.pos.y = 0.0;
        game.session_mut().player.vy = -0.3;
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::GameOver);

        // Input is ignored while the explosion plays
        for _ in 0..=EXPLOSION_FRAMES {
            game.update(&mut ctx, &press(Key::Enter));
            assert_eq!(game.screen(), Screen::GameOver);
        }
        assert!(game.explosion_done());
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::GameOver);
        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::Title);
    }

    #[test]
    fn test_high_score_flow_persists() {
        let (mut game, mut ctx, storage) = setup();
        start_playing(&mut game, &mut ctx);
        game.session_mut().score = 42;
        game.session_mut().player.pos.y = 79.0;
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::GameOver);

        for _ in 0..=EXPLOSION_FRAMES {
            game.update(&mut ctx, &idle());
        }
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::NameInput);

        // Type "J" by tapping row 0, column 9
        game.update(&mut ctx, &InputSnapshot::new().tap(2 + 9 * 8 + 1, 30));
        assert_eq!(game.name_entry().buffer, "J");
        game.update(&mut ctx, &press(Key::Space));
        assert_eq!(game.screen(), Screen::HighScores);
        assert_eq!(game.last_entry(), Some(0));
        assert_eq!(ctx.high_scores.entries()[0], HighScoreEntry::new("J", 42));

        let saved = HighScoreTable::load(&storage);
        assert_eq!(saved, ctx.high_scores);

        game.update(&mut ctx, &press(Key::Enter));
        assert_eq!(game.screen(), Screen::Title);
    }

    #[test]
    fn test_bomb_button_tap() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.update(&mut ctx, &InputSnapshot::new().tap(20, 50));
        assert!(game.session().bombing);
        assert_eq!(game.session().bombs, 2);
    }

    #[test]
    fn test_up_button_hold_ascends() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        let y = game.session().player.pos.y;
        game.update(&mut ctx, &InputSnapshot::new().touch(130, 60));
        assert!(game.session().player.pos.y < y);
    }

    #[test]
    fn test_new_game_resets_session() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.session_mut().score = 99;
        game.session_mut().bombs = 0;
        game.update(&mut ctx, &press(Key::Escape));
        game.update(&mut ctx, &press(Key::N));
        game.update(&mut ctx, &press(Key::Enter)); // menu cursor still on New Game
        assert_eq!(game.screen(), Screen::HighScoresThenPlaying);
        assert_eq!(game.session().score, 0);
        assert_eq!(game.session().bombs, STARTING_BOMBS);
    }

    #[test]
    fn test_same_seed_same_run() {
        let (mut a, mut ctx_a, _) = setup();
        let (mut b, mut ctx_b, _) = setup();
        start_playing(&mut a, &mut ctx_a);
        start_playing(&mut b, &mut ctx_b);
        for i in 0..300 {
            let input = if i % 7 < 3 {
                InputSnapshot::new().hold(Key::Up)
            } else {
                idle()
            };
            a.update(&mut ctx_a, &input);
            b.update(&mut ctx_b, &input);
        }
        assert_eq!(a.screen(), b.screen());
        assert_eq!(a.session().segments, b.session().segments);
        assert_eq!(a.session().collectibles, b.session().collectibles);
        assert_eq!(a.session().player.pos, b.session().player.pos);
    }

    #[test]
    fn test_tip_every_interval() {
        let (mut game, mut ctx, _) = setup();
        start_playing(&mut game, &mut ctx);
        game.session_mut().tip_timer = TIP_INTERVAL - 1;
        game.update(&mut ctx, &idle());
        assert_eq!(game.screen(), Screen::Playing);
        let shown = game.message().visible().unwrap();
        assert!(TIPS.contains(&shown), "{shown:?} is not a tip");
    }

    #[test]
    fn test_tips_disabled() {
        let settings = Settings {
            seed: Some(12345),
            show_tips: false,
            ..Settings::default()
        };
        let mut game = Game::from_settings(&settings);
        let mut ctx = AppContext::new(Box::new(MemoryStorage::new()));
        start_playing(&mut game, &mut ctx);
        game.session_mut().tip_timer = TIP_INTERVAL - 1;
        game.update(&mut ctx, &idle());
        assert_eq!(game.session().tip_timer, TIP_INTERVAL);
        assert!(game.message().visible().is_none_or(|m| !TIPS.contains(&m)));
    }
}
