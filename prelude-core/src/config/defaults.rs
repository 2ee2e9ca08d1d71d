// Single source of truth for all default values.

// --- Client ---
pub const DEFAULT_BASE_URL: &str = "https://api.preludesecurity.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;

// --- Detect ---
pub const DEFAULT_ACTIVITY_DAYS: u32 = 7;
pub const DEFAULT_PROBE_DAYS: u32 = 7;
pub const DEFAULT_STATS_DAYS: u32 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
