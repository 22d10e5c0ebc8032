mod filesystem;
mod loader;
mod model;
pub mod presets;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{
    CONFIG_VERSION, CheckConfig, Config, DEFAULT_SYNTAX_TIMEOUT_SECS, RuleConfig, ScannerConfig,
    SyntaxConfig,
};
pub use presets::{AVAILABLE_PRESETS, load_preset};
pub use validation::validate_config;
