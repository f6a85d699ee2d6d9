//! # tagver
//!
//! A library for parsing, validating, and bumping semantic versions.
//!
//! tagver implements the [SemVer 2.0.0 spec](https://semver.org/) with one
//! convenience extension: version strings may carry an optional leading `v`,
//! as is the convention for git tags. `v1.2.3` and `1.2.3` parse to the same
//! [`Version`].
//!
//! ## Examples
//!
//! Parse a version string and inspect its parts:
//!
//! ```
//! use tagver::Version;
//!
//! let version = Version::parse("v2.3.7-rc.1+build.123").unwrap();
//! assert_eq!(2, version.major);
//! assert_eq!(3, version.minor);
//! assert_eq!(7, version.patch);
//! assert_eq!("rc.1", version.prerelease);
//! assert_eq!("build.123", version.build);
//! ```
//!
//! Render it back out, plainly or as a git tag:
//!
//! ```
//! use tagver::Version;
//!
//! let version = Version::new(2, 3, 7, "build.123", "rc.1");
//! assert_eq!("2.3.7-rc.1+build.123", version.to_string());
//! assert_eq!("v2.3.7-rc.1+build.123", version.tag());
//! ```
//!
//! Cut the next release:
//!
//! ```
//! use tagver::Version;
//!
//! let version = Version::parse("1.2.3-rc.1").unwrap();
//! assert_eq!("1.3.0", version.bump_minor().to_string());
//! ```
//!
//! Or just check a string without caring why it might be bad:
//!
//! ```
//! use tagver::Version;
//!
//! assert!(Version::is_valid("v8.1.0-rc.1+build.123"));
//! assert!(!Version::is_valid("1.2.3.4"));
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: A `MAJOR.MINOR.PATCH` identifier, optionally extended with
//!   prerelease and build-metadata identifiers. Modeled by the [`Version`]
//!   struct.
//! - **Prerelease**: A dot-separated sequence of alphanumeric/hyphen
//!   identifiers after a `-`, denoting a pre-release (e.g. `rc.1`).
//! - **Build metadata**: A dot-separated sequence of alphanumeric/hyphen
//!   identifiers after a `+`, carrying non-semantic build information.
//! - **Bump**: Incrementing one numeric component and resetting every
//!   lower-significance component (and all metadata) to its empty state.
//!
//! ## What tagver is not
//!
//! tagver does not order versions, match version-range constraints, or
//! loosely parse near-misses like `1.2` or `01.2.3`. A string either is a
//! semantic version or it is not.
#![warn(missing_docs)]

mod error;
mod grammar;
mod version;

pub use crate::error::VersionError;
pub use crate::version::Version;
