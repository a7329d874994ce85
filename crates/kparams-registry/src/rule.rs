//! Rules and rule tables.
//!
//! A rule pairs a device pattern and a build pattern with an initializer.
//! Evaluating a table runs the initializer of *every* rule whose patterns
//! both match the platform, in table order. A generic rule early in a table
//! can therefore seed defaults that a more specific rule further down
//! overrides.

use std::fmt;

use kparams_platform::PlatformDescriptor;
use log::debug;

use crate::error::Result;
use crate::store::ParameterStore;

/// Writes parameters into a store when its rule fires.
///
/// Implemented for plain functions and closures taking `&mut ParameterStore`.
pub trait Initializer {
    fn apply(&self, store: &mut ParameterStore) -> Result<()>;
}

impl<F> Initializer for F
where
    F: Fn(&mut ParameterStore) -> Result<()>,
{
    fn apply(&self, store: &mut ParameterStore) -> Result<()> {
        self(store)
    }
}

/// A pattern-guarded initializer.
pub struct Rule {
    /// Device pattern, matched against the machine identifier.
    pub devices: &'static str,
    /// Build pattern, matched against the OS build identifier.
    pub builds: &'static str,
    /// Name used in logs and listings.
    pub name: &'static str,
    init: Box<dyn Initializer>,
}

impl Rule {
    pub fn new(
        devices: &'static str,
        builds: &'static str,
        name: &'static str,
        init: impl Initializer + 'static,
    ) -> Self {
        Self {
            devices,
            builds,
            name,
            init: Box::new(init),
        }
    }

    /// Whether both patterns match the platform.
    pub fn matches(&self, platform: &PlatformDescriptor) -> bool {
        platform.matches(self.devices, self.builds)
    }

    /// Run the initializer unconditionally.
    pub fn apply(&self, store: &mut ParameterStore) -> Result<()> {
        self.init.apply(store)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("devices", &self.devices)
            .field("builds", &self.builds)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered list of rules for one parameter category.
#[derive(Debug)]
pub struct RuleTable {
    name: &'static str,
    rules: Vec<Rule>,
    quorum: Option<usize>,
}

impl RuleTable {
    /// Create an empty table with no quorum.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            quorum: None,
        }
    }

    /// Append a rule. Rules added later override earlier ones.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Declare the minimum number of rules that must fire for this table's
    /// data to be trusted.
    pub fn with_quorum(mut self, quorum: usize) -> Self {
        self.quorum = Some(quorum);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn quorum(&self) -> Option<usize> {
        self.quorum
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules that would fire for `platform`, in table order.
    pub fn matching<'a>(
        &'a self,
        platform: &'a PlatformDescriptor,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| r.matches(platform))
    }

    /// Fire every matching rule in order and return how many fired.
    ///
    /// Stops at the first initializer error.
    pub fn evaluate(
        &self,
        platform: &PlatformDescriptor,
        store: &mut ParameterStore,
    ) -> Result<usize> {
        let mut fired = 0;
        for rule in self.matching(platform) {
            debug!(
                "{}: rule '{}' ({} / {}) fired for {}",
                self.name, rule.name, rule.devices, rule.builds, platform
            );
            rule.apply(store)?;
            fired += 1;
        }
        Ok(fired)
    }
}
