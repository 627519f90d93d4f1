//! Built-in injection providers
//!
//! | Local name | Provider | Resolves |
//! |------------|----------|----------|
//! | `spi` | [`AliasInjectionProvider`] | Instance published under the request name, else the first one published for the target type |
//! | `contract` | [`ContractInjectionProvider`] | Provider `name` of the target's service category |

mod alias;
mod contract;

pub use alias::{ALIAS_INJECTION_PROVIDER_TYPE, AliasInjectionProvider};
pub use contract::{CONTRACT_INJECTION_PROVIDER_TYPE, ContractInjectionProvider};
