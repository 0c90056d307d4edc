// Single source of truth for all default values.

// --- Activation ---
pub const DEFAULT_SPREADING_ENABLED: bool = true;
pub const DEFAULT_GAMMA: f64 = 0.8;
pub const DEFAULT_THETA: f64 = 0.3;
pub const DEFAULT_HEAT_BIAS: f64 = 0.3;
pub const DEFAULT_MAX_ACTIVATION_DEPTH: u32 = 3;
pub const DEFAULT_ENERGY_BUDGET: f64 = 10.0;
pub const DEFAULT_HYPEREDGE_FLOW: bool = true;

// --- Hebbian learning ---
pub const DEFAULT_HEBBIAN_ENABLED: bool = true;
pub const DEFAULT_ETA: f64 = 0.1;
pub const DEFAULT_ETA_DECAY: f64 = 0.02;
pub const DEFAULT_CO_FIRING_FLOOR: f64 = 0.05;
pub const DEFAULT_NEW_MEMORY_ENERGY: f64 = 1.0;

// --- Heat ---
pub const DEFAULT_HEAT_DECAY_RATE: f64 = 0.05;
pub const DEFAULT_HEAT_FLOOR: f64 = 0.05;
pub const DEFAULT_HEAT_BOOST: f64 = 0.3;

// --- Selection ---
pub const DEFAULT_PRUNING_ENABLED: bool = true;
pub const DEFAULT_MMR_LAMBDA: f64 = 0.7;
pub const DEFAULT_CONTEXT_SIZE: usize = 8;
pub const DEFAULT_RELEVANCE_FLOOR: f64 = 0.05;
pub const DEFAULT_SAME_CATEGORY_REDUNDANCY: f64 = 0.8;
pub const DEFAULT_CROSS_CATEGORY_REDUNDANCY: f64 = 0.1;

// --- Contradiction ---
pub const DEFAULT_ACTIVITY_FLOOR: f64 = 0.05;
pub const DEFAULT_TEXT_HEURISTICS: bool = true;
pub const DEFAULT_TOPIC_OVERLAP_THRESHOLD: f64 = 0.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;
