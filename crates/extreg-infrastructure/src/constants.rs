//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Registry vocabulary (alias separators, descriptor namespaces) is defined
//! in `extreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "extreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "extreg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EXTREG";

/// Separator between nested keys in configuration environment variables
///
/// `EXTREG_LOGGING__JSON_FORMAT` sets `logging.json_format`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "EXTREG_LOG";

/// File stem used for rolling log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "extreg";

// ============================================================================
// RESOURCE CONSTANTS
// ============================================================================

/// Built-in descriptor of the injection category
pub const BUILTIN_INJECTION_DESCRIPTOR: &str =
    include_str!("../resources/META-INF/extreg/internal/extreg.InjectionProvider");

/// Location reported for embedded resources
pub const EMBEDDED_RESOURCE_LOCATION: &str = "embedded";

// ============================================================================
// BUILT-IN PROVIDER NAMES
// ============================================================================

/// Qualified name of the built-in injection adapter
pub const INJECTION_ADAPTER_TYPE_NAME: &str = "extreg.injection.InjectionAdapter";

/// Qualified name of the built-in alias-lookup injection provider
pub const ALIAS_INJECTION_TYPE_NAME: &str = "extreg.injection.AliasInjectionProvider";

/// Qualified name of the built-in category-lookup injection provider
pub const CONTRACT_INJECTION_TYPE_NAME: &str = "extreg.injection.ContractInjectionProvider";

// ============================================================================
// INJECTION CONSTANTS
// ============================================================================

/// Method name prefix recognised by the setter pass
pub const SETTER_PREFIX: &str = "set";

/// Method name prefix recognised when resolving a wrapper's getter
pub const GETTER_PREFIX: &str = "get";
