//! The game scene
//!
//! One screen: walk the player right (hold the mouse button or touch) to the
//! treasure while dragons patrol up and down in between.
//!
//! Lifecycle, driven by the app loop:
//! - `init` resets tuning state
//! - `create` places every sprite and rolls enemy speeds
//! - `update` runs once per fixed frame
//!
//! Ending a round is a small state machine advanced by the host's effect
//! completion notifications:
//!
//! ```text
//! Playing -> Shaking(outcome) -> Fading(outcome) -> Playing (restarted)
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use super::assets::AssetKey;
use super::config::{GameConfig, Tuning};
use super::entity::{Enemy, Sprite};
use super::host::SceneHost;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// End-of-round message shown after the restart
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "Game Over",
        }
    }
}

/// Where the scene is in its round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    /// Camera shake running, waiting for its completion
    Shaking(Outcome),
    /// Fade-out running, waiting for its completion
    Fading(Outcome),
}

/// Per-round scalar state. Rebuilt from scratch by `init`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub player_speed: f32,
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    pub enemy_min_y: f32,
    pub enemy_max_y: f32,
    pub phase: Phase,
}

impl SceneState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player_speed: tuning.player_speed,
            enemy_min_speed: tuning.enemy_min_speed,
            enemy_max_speed: tuning.enemy_max_speed,
            enemy_min_y: tuning.enemy_min_y,
            enemy_max_y: tuning.enemy_max_y,
            phase: Phase::Playing,
        }
    }

    /// Termination latch: set for the whole end-of-round sequence
    pub fn is_terminating(&self) -> bool {
        self.phase != Phase::Playing
    }
}

/// All entities of a round
#[derive(Debug, Clone, PartialEq)]
pub struct Entities {
    pub background: Sprite,
    pub player: Sprite,
    pub goal: Sprite,
    /// In creation order
    pub enemies: Vec<Enemy>,
}

pub struct GameScene {
    config: GameConfig,
    state: SceneState,
    /// None until the first `create`
    entities: Option<Entities>,
    rng: SmallRng,
    /// Rounds started, counting restarts
    round: u32,
}

impl GameScene {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = SceneState::new(&config.tuning);
        Self {
            config,
            state,
            entities: None,
            rng: SmallRng::seed_from_u64(seed),
            round: 0,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn entities(&self) -> Option<&Entities> {
        self.entities.as_ref()
    }

    pub fn is_terminating(&self) -> bool {
        self.state().is_terminating()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Reset tuning state and clear the termination latch
    pub fn init(&mut self) {
        self.state = SceneState::new(&self.config.tuning);
    }

    /// Place every sprite and roll a speed for each enemy
    pub fn create(&mut self, host: &dyn SceneHost) {
        let viewport = host.viewport();
        let layout = &self.config.layout;

        let background = Sprite::new(AssetKey::Background, 0.0, 0.0, viewport)
            .with_origin(0.0, 0.0);

        let player = Sprite::new(
            AssetKey::Player,
            layout.player_x,
            viewport.y / 2.0,
            host.frame_size(AssetKey::Player),
        )
        .with_scale(layout.player_scale);

        let goal = Sprite::new(
            AssetKey::Goal,
            viewport.x - layout.goal_inset,
            viewport.y / 2.0,
            host.frame_size(AssetKey::Goal),
        )
        .with_scale(layout.goal_scale);

        let enemy_size = host.frame_size(AssetKey::Enemy);
        let (x0, y0) = layout.enemy_origin;
        let (step_x, step_y) = layout.enemy_step;
        let mut enemies = Vec::with_capacity(layout.enemy_count);
        for i in 0..layout.enemy_count {
            let mut sprite = Sprite::new(
                AssetKey::Enemy,
                x0 + step_x * i as f32,
                y0 + step_y * i as f32,
                enemy_size,
            );
            sprite.scale_by(layout.enemy_scale_delta, layout.enemy_scale_delta);
            sprite.flip_x = true;

            let speed = roll_speed(&mut self.rng, self.state.enemy_min_speed, self.state.enemy_max_speed);
            enemies.push(Enemy::new(sprite, speed));
        }

        self.entities = Some(Entities { background, player, goal, enemies });
        self.round += 1;
        log::info!("Round {} started", self.round);
    }

    /// Throw away every entity and start a fresh round
    pub fn restart(&mut self, host: &dyn SceneHost) {
        self.entities = None;
        self.init();
        self.create(host);
    }

    /// One fixed frame of gameplay. Returns the outcome if the round ended this frame.
    pub fn update(&mut self, host: &mut dyn SceneHost) -> Option<Outcome> {
        if self.state.is_terminating() {
            return None;
        }
        let entities = self.entities.as_mut()?;

        if host.pointer_down() {
            entities.player.position.x += self.state.player_speed;
        }

        let player_bounds = entities.player.bounds();
        if player_bounds.intersects(&entities.goal.bounds()) {
            self.end_round(Outcome::Win, host);
            return Some(Outcome::Win);
        }

        let (min_y, max_y) = (self.state.enemy_min_y, self.state.enemy_max_y);
        let hit = entities.enemies.iter_mut().any(|enemy| {
            enemy.patrol(min_y, max_y);
            player_bounds.intersects(&enemy.bounds())
        });
        if hit {
            self.end_round(Outcome::Lose, host);
            return Some(Outcome::Lose);
        }

        None
    }

    /// Latch termination and start the shake
    fn end_round(&mut self, outcome: Outcome, host: &mut dyn SceneHost) {
        log::info!("Round {} ended: {:?}", self.round, outcome);
        self.state.phase = Phase::Shaking(outcome);
        host.shake(self.config.effects.shake_ms);
    }

    /// Host notification: the shake finished
    pub fn on_shake_complete(&mut self, host: &mut dyn SceneHost) {
        match self.state.phase {
            Phase::Shaking(outcome) => {
                log::debug!("Shake complete, fading out ({:?})", outcome);
                self.state.phase = Phase::Fading(outcome);
                host.fade(self.config.effects.fade_ms);
            }
            phase => log::debug!("Ignoring shake completion in {:?}", phase),
        }
    }

    /// Host notification: the fade finished. Restarts, then shows the message.
    pub fn on_fade_complete(&mut self, host: &mut dyn SceneHost) {
        match self.state.phase {
            Phase::Fading(outcome) => {
                log::debug!("Fade complete, restarting ({:?})", outcome);
                self.restart(host);
                host.present_message(outcome.message());
            }
            phase => log::debug!("Ignoring fade completion in {:?}", phase),
        }
    }
}

/// Random direction times a magnitude in [min, max), or exactly `min` when the range is empty
fn roll_speed<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let magnitude = if min < max { rng.gen_range(min..max) } else { min };
    direction * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::{vec2, Vec2};
    use rand::rngs::mock::StepRng;

    /// Records everything the scene asks of its host
    struct TestHost {
        viewport: Vec2,
        pointer: bool,
        shakes: Vec<f32>,
        fades: Vec<f32>,
        messages: Vec<String>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                viewport: vec2(640.0, 360.0),
                pointer: false,
                shakes: Vec::new(),
                fades: Vec::new(),
                messages: Vec::new(),
            }
        }
    }

    impl SceneHost for TestHost {
        fn viewport(&self) -> Vec2 {
            self.viewport
        }

        fn frame_size(&self, key: AssetKey) -> Vec2 {
            match key {
                AssetKey::Background => self.viewport,
                AssetKey::Player => vec2(64.0, 96.0),
                AssetKey::Enemy => vec2(128.0, 96.0),
                AssetKey::Goal => vec2(64.0, 64.0),
            }
        }

        fn pointer_down(&self) -> bool {
            self.pointer
        }

        fn shake(&mut self, duration_ms: f32) {
            self.shakes.push(duration_ms);
        }

        fn fade(&mut self, duration_ms: f32) {
            self.fades.push(duration_ms);
        }

        fn present_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn started(seed: u64) -> (GameScene, TestHost) {
        let host = TestHost::new();
        let mut scene = GameScene::new(GameConfig::default(), seed);
        scene.init();
        scene.create(&host);
        (scene, host)
    }

    fn entities_mut(scene: &mut GameScene) -> &mut Entities {
        scene.entities.as_mut().unwrap()
    }

    /// Move enemies far below the player so only the goal matters
    fn park_enemies(scene: &mut GameScene) {
        for enemy in &mut entities_mut(scene).enemies {
            enemy.sprite.position = vec2(-1000.0, 200.0);
            enemy.speed = 0.0;
        }
    }

    #[test]
    fn test_init_resets_tuning() {
        let (mut scene, _host) = started(1);
        scene.state.player_speed = 99.0;
        scene.state.phase = Phase::Fading(Outcome::Lose);
        scene.init();

        let s = scene.state();
        assert_eq!(s.player_speed, 3.2);
        assert_eq!((s.enemy_min_speed, s.enemy_max_speed), (3.0, 4.0));
        assert_eq!((s.enemy_min_y, s.enemy_max_y), (80.0, 280.0));
        assert!(!s.is_terminating());
    }

    #[test]
    fn test_create_places_entities() {
        let (scene, _host) = started(7);
        let e = scene.entities().unwrap();

        assert_eq!(e.background.position, vec2(0.0, 0.0));
        assert_eq!(e.background.origin, vec2(0.0, 0.0));
        assert_eq!(e.background.bounds().w, 640.0);

        assert_eq!(e.player.position, vec2(20.0, 180.0));
        assert_eq!(e.player.scale, Vec2::splat(0.5));
        assert_eq!(e.goal.position, vec2(560.0, 180.0));
        assert_eq!(e.goal.scale, Vec2::splat(0.6));

        assert_eq!(e.enemies.len(), 4);
        for (i, enemy) in e.enemies.iter().enumerate() {
            let i = i as f32;
            assert_eq!(enemy.sprite.position, vec2(110.0 + 120.0 * i, 100.0 + 40.0 * i));
            assert!((enemy.sprite.scale.x - 0.6).abs() < 1e-6);
            assert!((enemy.sprite.scale.y - 0.6).abs() < 1e-6);
            assert!(enemy.sprite.flip_x);
            assert!(enemy.speed.abs() >= 3.0 && enemy.speed.abs() < 4.0);
        }
    }

    #[test]
    fn test_enemy_directions_are_mixed() {
        let mut up = 0;
        let mut down = 0;
        for seed in 0..32 {
            let (scene, _host) = started(seed);
            for enemy in &scene.entities().unwrap().enemies {
                if enemy.speed < 0.0 { up += 1 } else { down += 1 }
            }
        }
        assert!(up > 0 && down > 0);
    }

    #[test]
    fn test_speeds_drawn_once_per_create() {
        let (mut scene, mut host) = started(3);
        let speeds: Vec<f32> = scene.entities().unwrap().enemies.iter().map(|e| e.speed.abs()).collect();
        for _ in 0..10 {
            scene.update(&mut host);
            if scene.is_terminating() {
                break;
            }
        }
        let after: Vec<f32> = scene.entities().unwrap().enemies.iter().map(|e| e.speed.abs()).collect();
        assert_eq!(speeds, after);
    }

    #[test]
    fn test_pointer_moves_player() {
        let (mut scene, mut host) = started(5);
        park_enemies(&mut scene);

        scene.update(&mut host);
        assert_eq!(scene.entities().unwrap().player.position.x, 20.0);

        host.pointer = true;
        scene.update(&mut host);
        assert!((scene.entities().unwrap().player.position.x - 23.2).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_bounces_past_bound() {
        let (mut scene, mut host) = started(9);
        park_enemies(&mut scene);
        let enemy = &mut entities_mut(&mut scene).enemies[0];
        enemy.sprite.position.y = 280.0;
        enemy.speed = 3.5;

        scene.update(&mut host);
        let enemy = &scene.entities().unwrap().enemies[0];
        assert_eq!(enemy.sprite.position.y, 283.5);
        assert_eq!(enemy.speed, -3.5);
    }

    #[test]
    fn test_reaching_goal_wins() {
        let (mut scene, mut host) = started(11);
        park_enemies(&mut scene);
        let goal = scene.entities().unwrap().goal.position;
        entities_mut(&mut scene).player.position = goal;

        assert_eq!(scene.update(&mut host), Some(Outcome::Win));
        assert!(scene.is_terminating());
        assert_eq!(scene.state().phase, Phase::Shaking(Outcome::Win));
        assert_eq!(host.shakes, vec![150.0]);
    }

    #[test]
    fn test_win_checked_before_enemies() {
        let (mut scene, mut host) = started(13);
        let goal = scene.entities().unwrap().goal.position;
        let e = entities_mut(&mut scene);
        e.player.position = goal;
        for enemy in &mut e.enemies {
            enemy.sprite.position = goal;
            enemy.speed = 0.0;
        }

        assert_eq!(scene.update(&mut host), Some(Outcome::Win));
    }

    #[test]
    fn test_enemy_contact_loses_and_short_circuits() {
        let (mut scene, mut host) = started(17);
        let player = scene.entities().unwrap().player.position;
        let e = entities_mut(&mut scene);
        for enemy in &mut e.enemies {
            enemy.speed = 0.0;
        }
        e.enemies[1].sprite.position = player;
        e.enemies[2].sprite.position = player;
        e.enemies[3].speed = 3.0;
        let last_y = e.enemies[3].sprite.position.y;

        assert_eq!(scene.update(&mut host), Some(Outcome::Lose));
        assert_eq!(scene.state().phase, Phase::Shaking(Outcome::Lose));
        // Enemy 3 comes after the hit and never moved
        assert_eq!(scene.entities().unwrap().enemies[3].sprite.position.y, last_y);
    }

    #[test]
    fn test_collision_uses_moved_enemy() {
        // Enemy starts just below the player and only overlaps after its move
        let (mut scene, mut host) = started(19);
        park_enemies(&mut scene);
        let player = scene.entities().unwrap().player.bounds();
        let enemy = &mut entities_mut(&mut scene).enemies[0];
        let half_h = enemy.bounds().h / 2.0;
        enemy.sprite.position = vec2(player.center_x(), player.bottom() + half_h + 2.0);
        enemy.speed = -3.0;

        assert_eq!(scene.update(&mut host), Some(Outcome::Lose));
    }

    #[test]
    fn test_frozen_while_terminating() {
        let (mut scene, mut host) = started(23);
        park_enemies(&mut scene);
        entities_mut(&mut scene).enemies[0].speed = 3.0;
        let goal = scene.entities().unwrap().goal.position;
        entities_mut(&mut scene).player.position = goal;
        scene.update(&mut host);

        let before = scene.entities().unwrap().clone();
        host.pointer = true;
        for _ in 0..20 {
            assert_eq!(scene.update(&mut host), None);
        }
        assert_eq!(scene.entities().unwrap(), &before);
        assert_eq!(host.shakes.len(), 1);
    }

    #[test]
    fn test_full_win_sequence_restarts() {
        let (mut scene, mut host) = started(29);
        let first_speeds: Vec<f32> = scene.entities().unwrap().enemies.iter().map(|e| e.speed).collect();
        park_enemies(&mut scene);
        let goal = scene.entities().unwrap().goal.position;
        entities_mut(&mut scene).player.position = goal;
        scene.update(&mut host);

        scene.on_shake_complete(&mut host);
        assert_eq!(scene.state().phase, Phase::Fading(Outcome::Win));
        assert_eq!(host.fades, vec![300.0]);
        assert!(host.messages.is_empty());

        scene.on_fade_complete(&mut host);
        assert_eq!(host.messages, vec!["You win!".to_string()]);
        assert_eq!(scene.round(), 2);

        let s = scene.state();
        assert!(!s.is_terminating());
        assert_eq!(s.player_speed, 3.2);

        let e = scene.entities().unwrap();
        assert_eq!(e.player.position, vec2(20.0, 180.0));
        for (i, enemy) in e.enemies.iter().enumerate() {
            let i = i as f32;
            assert_eq!(enemy.sprite.position, vec2(110.0 + 120.0 * i, 100.0 + 40.0 * i));
            assert!(enemy.speed.abs() >= 3.0 && enemy.speed.abs() < 4.0);
        }
        let new_speeds: Vec<f32> = e.enemies.iter().map(|e| e.speed).collect();
        assert_ne!(new_speeds, first_speeds, "restart must reroll enemy speeds");
    }

    #[test]
    fn test_roll_speed_stays_below_max() {
        // All-ones draws push a naive `min + t * (max - min)` onto `max`
        let mut rng = StepRng::new(u64::MAX, 0);
        for _ in 0..4 {
            let speed = roll_speed(&mut rng, 3.0, 4.0);
            assert!(speed.abs() >= 3.0 && speed.abs() < 4.0, "speed {} out of range", speed);
        }
    }

    #[test]
    fn test_roll_speed_empty_range_uses_min() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..8 {
            assert_eq!(roll_speed(&mut rng, 3.5, 3.5).abs(), 3.5);
        }
    }

    #[test]
    fn test_full_lose_sequence_message() {
        let (mut scene, mut host) = started(31);
        let player = scene.entities().unwrap().player.position;
        entities_mut(&mut scene).enemies[0].sprite.position = player;
        entities_mut(&mut scene).enemies[0].speed = 0.0;
        scene.update(&mut host);

        scene.on_shake_complete(&mut host);
        scene.on_fade_complete(&mut host);
        assert_eq!(host.messages, vec!["Game Over".to_string()]);
        assert_eq!(scene.state().phase, Phase::Playing);
    }

    #[test]
    fn test_out_of_order_notifications_ignored() {
        let (mut scene, mut host) = started(37);
        scene.on_fade_complete(&mut host);
        scene.on_shake_complete(&mut host);
        assert!(host.fades.is_empty());
        assert!(host.messages.is_empty());
        assert_eq!(scene.round(), 1);

        // Fade completion while still shaking does not skip a stage
        park_enemies(&mut scene);
        let goal = scene.entities().unwrap().goal.position;
        entities_mut(&mut scene).player.position = goal;
        scene.update(&mut host);
        scene.on_fade_complete(&mut host);
        assert_eq!(scene.state().phase, Phase::Shaking(Outcome::Win));
    }

    #[test]
    fn test_update_before_create_is_noop() {
        let mut host = TestHost::new();
        let mut scene = GameScene::new(GameConfig::default(), 0);
        scene.init();
        assert_eq!(scene.update(&mut host), None);
    }

    #[test]
    fn test_roll_speed_range() {
        let mut rng = SmallRng::seed_from_u64(41);
        for _ in 0..1000 {
            let speed = roll_speed(&mut rng, 3.0, 4.0);
            assert!(speed.abs() >= 3.0 && speed.abs() < 4.0);
        }
    }
}
