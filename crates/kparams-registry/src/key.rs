//! Parameter keys.
//!
//! Every parameter is named by a category and one or two identifiers. The
//! textual form mirrors how the parameters are usually written down, e.g.
//! `OFFSET(ipc_port, ip_bits)` or `SIZE(ipc_port)`.

use std::fmt;

use serde::{Serialize, Serializer};

/// The scalar type of every parameter: wide enough for an offset, a size, a
/// kernel address, or a count.
pub type ParameterValue = u64;

/// The category a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// General system tunables (zone sizes, message limits).
    System,
    /// Unslid kernel addresses.
    StaticAddress,
    /// Byte offset of a field within a structure.
    Offset,
    /// Size of a structure in bytes.
    Size,
    /// Allocation block size of the zone holding a structure.
    BlockSize,
    /// Number of structures per zone block.
    CountPerBlock,
}

impl Category {
    /// Name used in the textual key form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::StaticAddress => "STATIC_ADDRESS",
            Self::Offset => "OFFSET",
            Self::Size => "SIZE",
            Self::BlockSize => "BLOCK_SIZE",
            Self::CountPerBlock => "COUNT_PER_BLOCK",
        }
    }
}

/// A (category, name) pair identifying one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterKey {
    System(&'static str),
    StaticAddress(&'static str),
    Offset {
        structure: &'static str,
        field: &'static str,
    },
    Size(&'static str),
    BlockSize(&'static str),
    CountPerBlock(&'static str),
}

impl ParameterKey {
    pub fn category(&self) -> Category {
        match self {
            Self::System(_) => Category::System,
            Self::StaticAddress(_) => Category::StaticAddress,
            Self::Offset { .. } => Category::Offset,
            Self::Size(_) => Category::Size,
            Self::BlockSize(_) => Category::BlockSize,
            Self::CountPerBlock(_) => Category::CountPerBlock,
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System(name) => f.write_str(name),
            Self::Offset { structure, field } => write!(f, "OFFSET({structure}, {field})"),
            Self::StaticAddress(name)
            | Self::Size(name)
            | Self::BlockSize(name)
            | Self::CountPerBlock(name) => write!(f, "{}({name})", self.category().as_str()),
        }
    }
}

impl Serialize for ParameterKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
