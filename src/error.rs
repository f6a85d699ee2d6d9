/// Errors returned when working with version strings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The input string does not match the semantic version grammar. The
    /// grammar does not report *which* rule failed, only that the input as a
    /// whole is not a version.
    #[error("`{input}` is not a valid semantic version")]
    InvalidVersion {
        /// The offending input, echoed back for diagnostics.
        input: String,
    },
}
