// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND as u64;

// Gameplay area (the left UI panel is excluded)
pub const UI_PANEL_WIDTH: f32 = 300.0;
pub const GAMEPLAY_WIDTH: f32 = 800.0;
pub const GAMEPLAY_LEFT: f32 = UI_PANEL_WIDTH;
pub const GAMEPLAY_RIGHT: f32 = UI_PANEL_WIDTH + GAMEPLAY_WIDTH;
pub const GAMEPLAY_TOP: f32 = 0.0;
pub const GAMEPLAY_BOTTOM: f32 = 600.0;

// Player
pub const PLAYER_SIZE: f32 = 50.0;
pub const PLAYER_ATTACK_RANGE: f64 = 80.0;
/// Regeneration baseline is this fraction of base max health per tick.
pub const REGEN_BASELINE_DIVISOR: f64 = 1000.0;
/// Share of the new max health restored on each level-up.
pub const LEVEL_UP_HEAL_FRACTION: f64 = 0.5;
pub const PET_SLOT_COUNT: usize = 3;

// XP and leveling
pub const START_EXP_TO_LEVEL: f64 = 5.0;
pub const EXP_MULTIPLIER: f64 = 2.0;
pub const EXP_PER_ENEMY_KILL: f64 = 2.2;

// Enemy base stats (level 1)
pub const ENEMY_HEALTH: u32 = 5;
pub const ENEMY_MIN_SPEED: u32 = 1;
pub const ENEMY_MAX_SPEED: u32 = 3;
pub const ENEMY_MIN_DAMAGE: u32 = 3;
pub const ENEMY_MAX_DAMAGE: u32 = 3;
pub const ENEMY_ATTACK_RANGE: f64 = 60.0;
pub const ENEMY_ATTACK_COOLDOWN_MS: u64 = 1000;
pub const ENEMY_SIZE: f32 = 40.0;
/// How far past the gameplay area an enemy may wander.
pub const ENEMY_BOUNDS_MARGIN: f32 = 12.0;

// Per-level enemy scaling
pub const ENEMY_HEALTH_PER_LEVEL: u32 = 10;
pub const ENEMY_DAMAGE_PER_LEVEL: u32 = 5;
pub const ENEMY_SPEED_BONUS_CAP: u32 = 2;

// Boss
pub const BOSS_SIZE: f32 = 80.0;
pub const BOSS_HEALTH_MULTIPLIER_MIN: f64 = 10.0;
pub const BOSS_HEALTH_MULTIPLIER_MAX: f64 = 30.0;
pub const BOSS_DAMAGE_MULTIPLIER_MIN: f64 = 2.0;
pub const BOSS_DAMAGE_MULTIPLIER_MAX: f64 = 4.0;
pub const BOSS_SPAWN_EVERY: u32 = 10;
pub const BOSS_MIN_PLAYER_LEVEL: u32 = 3;

// Spawn cadence (frames)
pub const ENEMY_SPAWN_FRAMES: u32 = 180;
pub const ENEMY_SPAWN_FRAMES_MEDIUM: u32 = 120;
pub const ENEMY_SPAWN_FRAMES_FAST: u32 = 60;
pub const SPAWN_MEDIUM_LEVEL: u32 = 3;
pub const SPAWN_FAST_LEVEL: u32 = 5;
pub const SPAWN_EDGE_OFFSET: f32 = 40.0;

// Collectibles
pub const COLLECTIBLE_SIZE: f32 = 30.0;
pub const GOLDEN_APPLE_EXP_VALUE: f64 = 5.0;
pub const GOLDEN_APPLE_SPAWN_FRAMES: u32 = 420;
pub const SHIELD_FRUIT_DURATION_SECONDS: f64 = 10.0;
pub const SHIELD_FRUIT_SPAWN_FRAMES: u32 = 900;
pub const COLLECTIBLE_EDGE_MARGIN: f32 = 50.0;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 10;
