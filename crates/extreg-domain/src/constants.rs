//! Domain layer constants
//!
//! Contains constants that are part of the registry vocabulary: alias
//! separators, built-in type names and the descriptor namespace layout.
//! Infrastructure-specific constants remain in `extreg_infrastructure::constants`.

// ============================================================================
// ALIAS CONSTANTS
// ============================================================================

/// Separator between a category's qualified name and a provider's local name
pub const PROVIDER_ALIAS_SEPARATOR: char = '#';

/// Suffix of the synthetic alias under which a category registry is cached
pub const REGISTRY_ALIAS_SUFFIX: char = '@';

/// Separator between namespace segments of a qualified type name
pub const NAMESPACE_SEPARATOR: char = '.';

// ============================================================================
// BUILT-IN TYPE NAMES
// ============================================================================

/// Qualified name of the injection-capability category
pub const INJECTION_CATEGORY_NAME: &str = "extreg.InjectionProvider";

/// Qualified name of the built-in single-value wrapper type
pub const HOLDER_TYPE_NAME: &str = "extreg.Holder";

// ============================================================================
// DESCRIPTOR NAMESPACES
// ============================================================================

/// Internal-priority descriptor namespace
pub const INTERNAL_DESCRIPTOR_DIR: &str = "META-INF/extreg/internal/";

/// Stable descriptor namespace
pub const STABLE_DESCRIPTOR_DIR: &str = "META-INF/extreg/";

/// Test-override descriptor namespace
pub const TEST_DESCRIPTOR_DIR: &str = "META-INF/extreg/test/";

/// Legacy-compatibility descriptor namespace
pub const LEGACY_DESCRIPTOR_DIR: &str = "META-INF/services/";

/// Comment marker in descriptor files
pub const DESCRIPTOR_COMMENT: char = '#';

/// Separator between local name and type reference in descriptor lines
pub const DESCRIPTOR_ASSIGN: char = '=';
