//! Platform-keyed registry of structure offsets and tuning parameters.
//!
//! At startup the [`Registry`] asks a [`PlatformProbe`] for the running
//! platform, evaluates the compiled-in rule tables against it, and decides
//! whether enough platform-specific rules matched for the resulting
//! [`Parameters`] to be trusted.
//!
//! ## Modules
//!
//! - [`key`] — Parameter keys and categories
//! - [`keys`] — Named keys for every built-in parameter
//! - [`store`] — The parameter store
//! - [`rule`] — Rules, rule tables, and table evaluation
//! - [`tables`] — The built-in system and offset tables
//! - [`derived`] — Parameters computed from other parameters
//! - [`driver`] — The initialization state machine
//! - [`parameters`] — Read-only handle with named accessors
//! - [`policy`] — Tunable registry policy
//!
//! [`PlatformProbe`]: kparams_platform::PlatformProbe

pub mod derived;
pub mod driver;
pub mod error;
pub mod key;
pub mod keys;
pub mod parameters;
pub mod policy;
pub mod rule;
pub mod store;
pub mod tables;

pub use driver::{parameters_init, DriverState, Registry};
pub use error::RegistryError;
pub use key::{Category, ParameterKey, ParameterValue};
pub use parameters::Parameters;
pub use policy::RegistryPolicy;
pub use rule::{Initializer, Rule, RuleTable};
pub use store::ParameterStore;
pub use tables::RuleTables;
