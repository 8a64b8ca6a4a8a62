//! System-wide constants for the shelter adoption matcher.

/// Maximum animals a single candidate may receive in one run.
pub const MAX_ADOPTIONS_PER_CANDIDATE: usize = 3;

/// Prior placements a candidate needs before the escort animal can join them.
pub const MIN_COMPANIONS_FOR_ESCORT: usize = 1;

/// Separator between tokens in raw list input.
pub const LIST_SEPARATOR: char = ',';

/// Separator between display name and destination in a rendered placement.
pub const PLACEMENT_SEPARATOR: &str = " - ";

/// Locale whose collation orders the rendered placement list.
pub const COLLATION_LOCALE: &str = "pt-BR";

/// Environment variable holding the log filter for the binaries.
pub const LOG_ENV_VAR: &str = "SHELTER_LOG";

/// Log filter used when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
