//! Platform identity and rule pattern matching for the kparams registry.
//!
//! A platform is identified by two strings: the hardware machine identifier
//! (e.g. `iPhone8,2`) and the OS build identifier (e.g. `16E227`). Rule
//! tables guard their initializers with a pattern for each of these.
//!
//! - [`platform`] — The immutable platform descriptor
//! - [`pattern`] — Device/build pattern matching
//! - [`build_version`] — OS build identifier ordering, used by build ranges
//! - [`probe`] — The seam through which a platform identity is obtained

pub mod build_version;
pub mod error;
pub mod pattern;
pub mod platform;
pub mod probe;

pub use build_version::BuildVersion;
pub use error::PlatformError;
pub use pattern::{matches, WILDCARD};
pub use platform::PlatformDescriptor;
pub use probe::{FixedPlatform, PlatformProbe};
