//! The registry driver.
//!
//! Initialization runs once, in fixed phases:
//!
//! 1. Ask the probe for the platform.
//! 2. Evaluate the system table.
//! 3. Evaluate the offsets table and count the rules that fired.
//! 4. If the count is below the quorum, stop: the platform is unrecognized.
//! 5. Evaluate the derived table, which reads what phase 3 wrote.
//! 6. Seal the store and hand out [`Parameters`].
//!
//! `Ready` and `Failed` are terminal.

use kparams_platform::{PlatformDescriptor, PlatformProbe};
use log::{debug, info, warn};

use crate::error::{RegistryError, Result};
use crate::key::{ParameterKey, ParameterValue};
use crate::parameters::Parameters;
use crate::policy::RegistryPolicy;
use crate::store::ParameterStore;
use crate::tables::RuleTables;

/// Progress of the initialization state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    PlatformResolved,
    GeneralParamsApplied,
    OffsetsApplied { count: usize },
    DerivedApplied,
    Ready,
    Failed,
}

impl DriverState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

/// Owns the rule tables and the parameter store, and runs initialization.
#[derive(Debug)]
pub struct Registry<P> {
    probe: P,
    tables: RuleTables,
    policy: RegistryPolicy,
    state: DriverState,
    platform: Option<PlatformDescriptor>,
    store: ParameterStore,
    parameters: Option<Parameters>,
}

impl<P: PlatformProbe> Registry<P> {
    /// A registry over the built-in tables with the default policy.
    pub fn new(probe: P) -> Self {
        Self::with_tables(probe, RuleTables::builtin())
    }

    /// A registry over custom tables.
    pub fn with_tables(probe: P, tables: RuleTables) -> Self {
        Self {
            probe,
            tables,
            policy: RegistryPolicy::default(),
            state: DriverState::NotStarted,
            platform: None,
            store: ParameterStore::new(),
            parameters: None,
        }
    }

    pub fn with_policy(mut self, policy: RegistryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The platform, once the probe has run.
    pub fn platform(&self) -> Option<&PlatformDescriptor> {
        self.platform.as_ref()
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// The resolved parameters, only once the registry is `Ready`.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Read one parameter. Fails with [`RegistryError::UnresolvedParameter`]
    /// unless the registry is `Ready` and the key was set.
    pub fn get(&self, key: ParameterKey) -> Result<ParameterValue> {
        match &self.parameters {
            Some(params) => params.get(key),
            None => self.store.get(key),
        }
    }

    /// Run initialization and report whether the parameters are usable.
    ///
    /// Returns `false` when the platform is unrecognized (too few offset
    /// rules matched) or the probe failed.
    ///
    /// # Panics
    ///
    /// Panics on a defect in the rule tables (a derived rule reading a
    /// missing or zero base parameter) or when called a second time. Use
    /// [`Registry::try_init`] to handle those as errors.
    pub fn parameters_init(&mut self) -> bool {
        match self.try_init() {
            Ok(_) => true,
            Err(e) if e.is_fatal() => panic!("parameter registry: {e}"),
            Err(_) => false,
        }
    }

    /// Run initialization, returning the parameters on success.
    pub fn try_init(&mut self) -> Result<&Parameters> {
        if self.state != DriverState::NotStarted {
            return Err(RegistryError::AlreadyInitialized);
        }
        if let Err(e) = self.run() {
            self.state = DriverState::Failed;
            return Err(e);
        }
        self.parameters
            .as_ref()
            .ok_or(RegistryError::AlreadyInitialized)
    }

    fn run(&mut self) -> Result<()> {
        let platform = self.probe.probe()?;
        self.platform = Some(platform.clone());
        self.advance(DriverState::PlatformResolved);

        let fired = self.tables.system.evaluate(&platform, &mut self.store)?;
        debug!("system: {fired} rules fired");
        self.advance(DriverState::GeneralParamsApplied);

        let count = self.tables.offsets.evaluate(&platform, &mut self.store)?;
        self.advance(DriverState::OffsetsApplied { count });

        let required = self.policy.required_offsets(&self.tables.offsets);
        if count < required {
            warn!(
                "no offsets for {} {}",
                platform.machine(),
                platform.os_version()
            );
            return Err(RegistryError::QuorumNotMet {
                platform,
                matched: count,
                required,
            });
        }

        let fired = self.tables.derived.evaluate(&platform, &mut self.store)?;
        debug!("derived: {fired} rules fired");
        self.advance(DriverState::DerivedApplied);

        let mut store = std::mem::take(&mut self.store);
        store.seal();
        info!("parameters ready for {platform} ({} values)", store.len());
        self.parameters = Some(Parameters::new(platform, store));
        self.advance(DriverState::Ready);
        Ok(())
    }

    fn advance(&mut self, next: DriverState) {
        debug!("registry: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Initialize a registry over the built-in tables and return its parameters.
///
/// Returns `None` when the platform is unrecognized or the probe failed.
///
/// # Panics
///
/// Panics on a defect in the built-in tables, as [`Registry::parameters_init`].
pub fn parameters_init(probe: impl PlatformProbe) -> Option<Parameters> {
    let mut registry = Registry::new(probe);
    if registry.parameters_init() {
        registry.parameters.take()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::rule::{Rule, RuleTable};
    use kparams_platform::{FixedPlatform, PlatformError};

    fn probe(machine: &str, build: &str) -> FixedPlatform {
        FixedPlatform::new(machine.to_string(), build.to_string()).unwrap()
    }

    fn set(key: ParameterKey, value: u64) -> impl Fn(&mut ParameterStore) -> Result<()> {
        move |store: &mut ParameterStore| {
            store.set(key, value);
            Ok(())
        }
    }

    /// Tables where `deviceA` matches one offset rule and `deviceB` two.
    fn quorum_tables() -> RuleTables {
        RuleTables {
            system: RuleTable::new("system"),
            offsets: RuleTable::new("offsets")
                .rule(Rule::new(
                    "deviceA deviceB",
                    "*",
                    "shared",
                    set(keys::ipc_port::SIZE, 0xa8),
                ))
                .rule(Rule::new(
                    "deviceB",
                    "*",
                    "zones",
                    set(keys::ipc_port::BLOCK_SIZE, 0x4000),
                ))
                .with_quorum(2),
            derived: RuleTable::new("derived"),
        }
    }

    #[test]
    fn known_platform_is_ready() {
        let mut registry = Registry::new(probe("iPhone8,2", "16E227"));
        assert_eq!(registry.state(), DriverState::NotStarted);
        assert!(registry.parameters_init());
        assert_eq!(registry.state(), DriverState::Ready);
        assert!(registry.state().is_terminal());

        let params = registry.parameters().unwrap();
        assert_eq!(params.kernel_base(), Ok(0xFFFF_FFF0_0700_4000));
        assert_eq!(params.kernel_slide_step(), Ok(0x1000));
        assert_eq!(params.message_size_for_kmsg_zone(), Ok(76));
        assert_eq!(params.kmsg_zone_size(), Ok(256));
        assert_eq!(params.max_ool_ports_per_message(), Ok(16382));
        assert_eq!(params.offset("ipc_port", "ip_kobject"), Ok(104));
        assert_eq!(params.count_per_block("ipc_port"), Ok(97));
        assert_eq!(params.count_per_block("ipc_voucher"), Ok(204));
        assert_eq!(registry.get(keys::task::ITK_SPACE), Ok(0x300));
    }

    #[test]
    fn unknown_platform_fails_quorum() {
        let mut registry = Registry::new(probe("iPhoneUnknown,1", "ZZ000Z"));
        let err = registry.try_init().unwrap_err();
        assert_eq!(
            err,
            RegistryError::QuorumNotMet {
                platform: PlatformDescriptor::new("iPhoneUnknown,1", "ZZ000Z").unwrap(),
                matched: 0,
                required: 2,
            }
        );
        assert_eq!(registry.state(), DriverState::Failed);
        assert!(registry.parameters().is_none());

        for key in [
            keys::ipc_port::SIZE,
            keys::ipc_port::IP_BITS,
            keys::task::BSD_INFO,
            keys::ipc_port::COUNT_PER_BLOCK,
        ] {
            assert_eq!(
                registry.get(key),
                Err(RegistryError::UnresolvedParameter { key })
            );
        }
        // System parameters were written but are not readable either.
        assert!(registry.get(keys::KERNEL_BASE).is_err());
    }

    #[test]
    fn unknown_platform_init_returns_false() {
        let mut registry = Registry::new(probe("iPhoneUnknown,1", "ZZ000Z"));
        assert!(!registry.parameters_init());
        assert!(parameters_init(probe("iPhoneUnknown,1", "ZZ000Z")).is_none());
    }

    #[test]
    fn single_offset_match_is_below_quorum() {
        let mut registry = Registry::with_tables(probe("deviceA", "1A1"), quorum_tables());
        assert!(!registry.parameters_init());
        assert_eq!(registry.state(), DriverState::Failed);
    }

    #[test]
    fn two_offset_matches_meet_quorum() {
        let mut registry = Registry::with_tables(probe("deviceB", "1A1"), quorum_tables());
        assert!(registry.parameters_init());
        assert_eq!(registry.get(keys::ipc_port::BLOCK_SIZE), Ok(0x4000));
    }

    #[test]
    fn policy_overrides_table_quorum() {
        let mut registry = Registry::with_tables(probe("deviceA", "1A1"), quorum_tables())
            .with_policy(RegistryPolicy {
                min_offsets: Some(1),
            });
        assert!(registry.parameters_init());
    }

    #[test]
    fn builtin_device_on_known_build_without_zones_fails() {
        let mut registry = Registry::new(probe("iPhone10,3", "16E227"));
        match registry.try_init() {
            Err(RegistryError::QuorumNotMet { matched, .. }) => assert_eq!(matched, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn derived_runs_after_offsets() {
        // The derived rule is listed in its own table, so it sees the
        // offsets regardless of where they sit in the offsets table.
        let tables = RuleTables {
            system: RuleTable::new("system"),
            offsets: RuleTable::new("offsets")
                .rule(Rule::new("*", "*", "size", set(keys::ipc_port::SIZE, 0xa8)))
                .rule(Rule::new("*", "*", "block", set(keys::ipc_port::BLOCK_SIZE, 0x4000))),
            derived: crate::derived::table_for(&["ipc_port"]),
        };
        let mut registry = Registry::with_tables(probe("x", "1A1"), tables);
        let params = registry.try_init().unwrap();
        assert_eq!(params.count_per_block("ipc_port"), Ok(97));
    }

    #[test]
    fn missing_base_for_derived_is_fatal() {
        let tables = RuleTables {
            system: RuleTable::new("system"),
            offsets: RuleTable::new("offsets")
                .rule(Rule::new("*", "*", "size", set(keys::ipc_port::SIZE, 0xa8))),
            derived: crate::derived::table_for(&["ipc_port"]),
        };
        let mut registry = Registry::with_tables(probe("x", "1A1"), tables);
        let err = registry.try_init().unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(registry.state(), DriverState::Failed);
    }

    #[test]
    #[should_panic(expected = "parameter registry")]
    fn fatal_defect_panics_in_bool_api() {
        let tables = RuleTables {
            system: RuleTable::new("system"),
            offsets: RuleTable::new("offsets")
                .rule(Rule::new("*", "*", "zero", set(keys::ipc_port::SIZE, 0)))
                .rule(Rule::new("*", "*", "block", set(keys::ipc_port::BLOCK_SIZE, 0x4000))),
            derived: crate::derived::table_for(&["ipc_port"]),
        };
        Registry::with_tables(probe("x", "1A1"), tables).parameters_init();
    }

    #[test]
    fn wildcard_offset_rules_count_toward_quorum() {
        let tables = RuleTables {
            system: RuleTable::new("system"),
            offsets: RuleTable::new("offsets")
                .rule(Rule::new("*", "*", "a", set(keys::ipc_port::SIZE, 1)))
                .rule(Rule::new("*", "*", "b", set(keys::ipc_port::SIZE, 2)))
                .with_quorum(2),
            derived: RuleTable::new("derived"),
        };
        let mut registry = Registry::with_tables(probe("anything", "1A1"), tables);
        assert!(registry.parameters_init());
        assert_eq!(registry.get(keys::ipc_port::SIZE), Ok(2));
    }

    #[test]
    fn second_init_is_rejected() {
        let mut registry = Registry::new(probe("iPhone8,2", "16E227"));
        assert!(registry.try_init().is_ok());
        assert_eq!(
            registry.try_init().unwrap_err(),
            RegistryError::AlreadyInitialized
        );
        assert_eq!(registry.state(), DriverState::Ready);
    }

    #[test]
    fn probe_failure_leaves_registry_failed() {
        let failing = || -> kparams_platform::error::Result<PlatformDescriptor> {
            Err(PlatformError::Probe {
                detail: "no machine string".into(),
            })
        };
        let mut registry = Registry::new(failing);
        assert!(!registry.parameters_init());
        assert_eq!(registry.state(), DriverState::Failed);
        assert!(registry.platform().is_none());
    }

    #[test]
    fn free_function_returns_parameters() {
        let params = parameters_init(probe("iPhone8,1", "16E227")).unwrap();
        assert_eq!(params.platform().machine(), "iPhone8,1");
        assert_eq!(params.gc_step(), Ok(2 * 1024 * 1024));
    }
}
