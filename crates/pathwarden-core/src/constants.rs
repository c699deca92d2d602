//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Convert a millisecond delay into whole ticks (rounded up).
pub const fn ms_to_ticks(ms: u64) -> u64 {
    (ms * TICK_RATE as u64).div_ceil(1000)
}

// --- Economy ---

/// Money at the start of a game.
pub const STARTING_MONEY: u32 = 100;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 5;

/// Cost of placing a new tower.
pub const TOWER_COST: u32 = 70;

/// Cost of upgrading an existing tower by one level.
pub const UPGRADE_COST: u32 = 50;

/// Money awarded for each enemy destroyed.
pub const KILL_BOUNTY: u32 = 10;

// --- Path ---

/// Default enemy path, in arena units (origin top-left, 800x600 arena).
pub const DEFAULT_WAYPOINTS: [(f64, f64); 9] = [
    (50.0, 50.0),
    (350.0, 50.0),
    (350.0, 150.0),
    (40.0, 150.0),
    (40.0, 300.0),
    (600.0, 300.0),
    (700.0, 300.0),
    (700.0, 550.0),
    (50.0, 550.0),
];

// --- Placement ---

/// Number of evenly spaced path samples checked for tower clearance.
pub const PLACEMENT_SAMPLES: usize = 50;

/// A tower must be strictly farther than this from every sampled path point.
pub const PLACEMENT_CLEARANCE: f64 = 30.0;

/// A click strictly closer than this to a tower selects that tower.
pub const TOWER_CLICK_RADIUS: f64 = 20.0;

// --- Towers ---

/// Targeting radius of a freshly placed tower.
pub const TOWER_BASE_RANGE: f64 = 150.0;

/// Ticks between shots of a freshly placed tower.
pub const TOWER_BASE_FIRE_DELAY: u32 = 50;

/// Fire delay never drops below this.
pub const TOWER_MIN_FIRE_DELAY: u32 = 20;

/// Range gained per upgrade.
pub const UPGRADE_RANGE_BONUS: f64 = 20.0;

/// Fire delay removed per upgrade (before the floor is applied).
pub const UPGRADE_FIRE_DELAY_REDUCTION: u32 = 10;

// --- Enemies ---

/// Path progress per tick for a Basic enemy.
pub const BASIC_SPEED: f64 = 0.0003;

/// Path progress per tick for a Saucer enemy.
pub const SAUCER_SPEED: f64 = 0.0005;

// --- Waves ---

/// Enemies per wave before the first escalation.
pub const INITIAL_ENEMIES_PER_WAVE: u32 = 5;

/// Enemy base health before the first escalation.
pub const INITIAL_BASE_HEALTH: u32 = 3;

/// Enemies added to each successive wave.
pub const ENEMIES_PER_WAVE_STEP: u32 = 2;

/// Base health added to each successive wave.
pub const BASE_HEALTH_STEP: u32 = 1;

/// Delay between staggered spawns within a wave (milliseconds).
pub const SPAWN_STAGGER_MS: u64 = 500;

/// Delay between staggered spawns within a wave (ticks).
pub const SPAWN_STAGGER_TICKS: u64 = ms_to_ticks(SPAWN_STAGGER_MS);

// --- Projectiles ---

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f64 = 550.0;

/// Projectile travel per tick.
pub const PROJECTILE_STEP: f64 = PROJECTILE_SPEED * DT;

/// Distance at which a projectile counts as overlapping its target.
pub const PROJECTILE_HIT_RADIUS: f64 = 12.0;

/// Damage dealt by a single projectile hit.
pub const PROJECTILE_DAMAGE: u32 = 1;
