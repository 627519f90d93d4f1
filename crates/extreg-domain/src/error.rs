//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the extension registry
///
/// Every variant except the ambient `Io` / `Configuration` ones is a
/// configuration or lifecycle failure of the registry itself. Individual
/// attribute resolution gaps during injection are never reported here.
#[derive(Error, Debug)]
pub enum Error {
    /// No descriptor entry exists for a category in any namespace
    #[error("No providers declared for service category {category}")]
    NoProviders {
        /// Qualified name of the category
        category: String,
    },

    /// The injection category declares no adapter-marked provider
    #[error("No injection adapter declared for service category {category}")]
    NoAdapter {
        /// Qualified name of the category
        category: String,
    },

    /// A second, different adapter-marked type was discovered
    #[error("Only one injection adapter may exist: {existing} and {duplicate} are both adapter-marked")]
    DuplicateAdapter {
        /// Adapter type already bound
        existing: String,
        /// Adapter type rejected
        duplicate: String,
    },

    /// A provider type does not implement its category contract
    #[error("Provider {provider} does not implement service category {category}")]
    ContractViolation {
        /// Qualified name of the provider type
        provider: String,
        /// Qualified name of the category
        category: String,
    },

    /// A plain provider lacks a zero-argument constructor
    #[error("Provider {type_name} has no zero-argument constructor")]
    MissingConstructor {
        /// Qualified name of the provider type
        type_name: String,
    },

    /// A provider resolved to an empty local name
    #[error("Provider {type_name} of category {category} has no alias; name it in the descriptor or with a provider marker")]
    MissingAlias {
        /// Qualified name of the provider type
        type_name: String,
        /// Qualified name of the category
        category: String,
    },

    /// One type was declared under two different aliases
    #[error("Provider {type_name} is already registered as {existing}, cannot register it again as {alias}")]
    DuplicateProvider {
        /// Qualified name of the provider type
        type_name: String,
        /// Alias the type is already bound to
        existing: String,
        /// Alias rejected
        alias: String,
    },

    /// One alias was declared for two different types
    #[error("Alias {alias} is bound to {existing}, cannot bind it to {requested}")]
    AliasConflict {
        /// Alias in conflict
        alias: String,
        /// Type already bound
        existing: String,
        /// Type rejected
        requested: String,
    },

    /// A type reference could not be resolved by the type catalog
    #[error("Unknown type reference: {reference}")]
    UnknownType {
        /// The unresolved reference
        reference: String,
    },

    /// A type requested as a service category is not a valid category
    #[error("Invalid service category {name}: {reason}")]
    InvalidCategory {
        /// Qualified name requested
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Two components resolved to the same alias
    #[error("Component alias {alias} is already bound")]
    DuplicateComponent {
        /// Alias in conflict
        alias: String,
    },

    /// No type is bound for a requested provider alias
    #[error("Provider not found: {alias}")]
    ProviderNotFound {
        /// The requested alias
        alias: String,
    },

    /// Constructing a provider instance failed
    #[error("Failed to instantiate {alias}: {message}")]
    Instantiation {
        /// Alias of the provider being built
        alias: String,
        /// Description of the failure
        message: String,
    },

    /// A value did not have the type a target expected
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Expected type
        expected: String,
        /// Actual type
        actual: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Discovery error creation methods
impl Error {
    /// Create a no-providers error
    pub fn no_providers<S: Into<String>>(category: S) -> Self {
        Self::NoProviders {
            category: category.into(),
        }
    }

    /// Create a no-adapter error
    pub fn no_adapter<S: Into<String>>(category: S) -> Self {
        Self::NoAdapter {
            category: category.into(),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type<S: Into<String>>(reference: S) -> Self {
        Self::UnknownType {
            reference: reference.into(),
        }
    }

    /// Create an invalid category error
    pub fn invalid_category<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidCategory {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract_violation<P: Into<String>, C: Into<String>>(provider: P, category: C) -> Self {
        Self::ContractViolation {
            provider: provider.into(),
            category: category.into(),
        }
    }
}

// Registration error creation methods
impl Error {
    /// Create a duplicate adapter error
    pub fn duplicate_adapter<E: Into<String>, D: Into<String>>(existing: E, duplicate: D) -> Self {
        Self::DuplicateAdapter {
            existing: existing.into(),
            duplicate: duplicate.into(),
        }
    }

    /// Create a missing constructor error
    pub fn missing_constructor<S: Into<String>>(type_name: S) -> Self {
        Self::MissingConstructor {
            type_name: type_name.into(),
        }
    }

    /// Create a missing alias error
    pub fn missing_alias<T: Into<String>, C: Into<String>>(type_name: T, category: C) -> Self {
        Self::MissingAlias {
            type_name: type_name.into(),
            category: category.into(),
        }
    }

    /// Create a duplicate provider error
    pub fn duplicate_provider<T, E, A>(type_name: T, existing: E, alias: A) -> Self
    where
        T: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::DuplicateProvider {
            type_name: type_name.into(),
            existing: existing.into(),
            alias: alias.into(),
        }
    }

    /// Create an alias conflict error
    pub fn alias_conflict<A, E, R>(alias: A, existing: E, requested: R) -> Self
    where
        A: Into<String>,
        E: Into<String>,
        R: Into<String>,
    {
        Self::AliasConflict {
            alias: alias.into(),
            existing: existing.into(),
            requested: requested.into(),
        }
    }

    /// Create a duplicate component error
    pub fn duplicate_component<S: Into<String>>(alias: S) -> Self {
        Self::DuplicateComponent {
            alias: alias.into(),
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Create a provider not found error
    pub fn provider_not_found<S: Into<String>>(alias: S) -> Self {
        Self::ProviderNotFound {
            alias: alias.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<A: Into<String>, M: Into<String>>(alias: A, message: M) -> Self {
        Self::Instantiation {
            alias: alias.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
