use crate::{error::VersionError, grammar};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A semantic version, per [SemVer 2.0.0](https://semver.org/).
///
/// A `Version` is a plain value: construct one from known-good fields with
/// [`Version::new`], or from untrusted text with [`Version::parse`]. There
/// are no mutating methods; the bump methods return new values.
///
/// The default value is `0.0.0`, which doubles as a "no version yet"
/// sentinel.
///
/// # Examples
///
/// ```
/// use tagver::Version;
///
/// let version = Version::parse("v1.2.3-rc.1").unwrap();
/// assert_eq!(Version::new(1, 2, 3, "", "rc.1"), version);
/// assert_eq!("1.2.3-rc.1", version.to_string());
/// assert_eq!("v1.2.3-rc.1", version.tag());
/// assert_eq!("1.3.0", version.bump_minor().to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// The major component.
    pub major: u64,
    /// The minor component.
    pub minor: u64,
    /// The patch component.
    pub patch: u64,
    /// Dot-separated prerelease identifiers, without the leading `-`. Empty
    /// means no prerelease.
    pub prerelease: String,
    /// Dot-separated build-metadata identifiers, without the leading `+`.
    /// Empty means no build metadata.
    pub build: String,
}

impl Version {
    /// Creates a `Version` from its parts.
    ///
    /// The parts are trusted as-is: no grammar check is made against
    /// `build` or `prerelease`. Use [`Version::parse`] for untrusted text.
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// let version = Version::new(4, 16, 3, "build.123", "rc.1");
    /// assert_eq!("4.16.3-rc.1+build.123", version.to_string());
    /// ```
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        build: impl Into<String>,
        prerelease: impl Into<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: prerelease.into(),
            build: build.into(),
        }
    }

    /// Parses a version string, with or without a leading `v`.
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// let version = Version::parse("1.2.4").unwrap();
    /// assert_eq!(Version::new(1, 2, 4, "", ""), version);
    ///
    /// assert!(Version::parse("1.2.3.4").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`VersionError::InvalidVersion`] if `text` does not match
    /// the semantic version grammar. This includes otherwise well-formed
    /// strings whose numeric components exceed [`u64::MAX`].
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let captures = grammar::extract(text).ok_or_else(|| VersionError::InvalidVersion {
            input: text.to_owned(),
        })?;

        Ok(Self {
            major: captures.major,
            minor: captures.minor,
            patch: captures.patch,
            prerelease: captures.prerelease.to_owned(),
            build: captures.build.to_owned(),
        })
    }

    /// Returns whether `text` is a valid semantic version, with or without a
    /// leading `v`.
    ///
    /// Unlike [`Version::parse`], this reports no detail. It never panics,
    /// for any input.
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// assert!(Version::is_valid("v8.1.0-rc.1+build.123"));
    /// assert!(!Version::is_valid("8.1"));
    /// ```
    pub fn is_valid(text: &str) -> bool {
        grammar::matches(text)
    }

    /// Renders the version as a git tag: the [`Display`] rendering with a
    /// `v` prepended.
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// assert_eq!("v1.2.3", Version::new(1, 2, 3, "", "").tag());
    /// ```
    pub fn tag(&self) -> String {
        format!("v{self}")
    }

    /// Returns a new version with the major component incremented and
    /// everything else reset: `1.2.3-rc.1+build.5` becomes `2.0.0`.
    ///
    /// A bump starts a new release lineage, so prerelease and build metadata
    /// are always discarded. Saturates at [`u64::MAX`].
    pub fn bump_major(&self) -> Self {
        Self::new(self.major.saturating_add(1), 0, 0, "", "")
    }

    /// Returns a new version with the minor component incremented and the
    /// patch and metadata reset: `1.2.3-rc.1+build.5` becomes `1.3.0`.
    ///
    /// Saturates at [`u64::MAX`].
    pub fn bump_minor(&self) -> Self {
        Self::new(self.major, self.minor.saturating_add(1), 0, "", "")
    }

    /// Returns a new version with the patch component incremented and the
    /// metadata reset: `1.2.3-rc.1+build.5` becomes `1.2.4`.
    ///
    /// Saturates at [`u64::MAX`].
    pub fn bump_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch.saturating_add(1), "", "")
    }
}

impl Display for Version {
    /// Renders the canonical version string, without a `v` prefix:
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Equivalent to [`Version::parse`].
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// let version: Version = "1.2.3".parse().unwrap();
    /// assert_eq!(Version::new(1, 2, 3, "", ""), version);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
