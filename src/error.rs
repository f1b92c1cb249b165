// Typed errors for the recommendation core.
//
// Only genuinely fatal conditions live here. An unknown query title is NOT
// an error — the ranker answers it with an empty list (see ranking::hybrid).
// Gateway failures never reach these types either; they are handled at the
// gateway boundary.

use std::path::PathBuf;

/// Errors surfaced by the recommendation core.
#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    /// A dataset file is missing or malformed (unreadable, or a required
    /// column is absent). Fatal at load time — there is no partial load.
    #[error("dataset unavailable: {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A collaborative similarity row ran out before the content matrix
    /// did, so the positional score pairing would read past its end.
    /// Indicates inconsistent matrix construction, not user error.
    #[error("collaborative similarity row has {len} entries, needed index {index}")]
    IndexOutOfRange { index: usize, len: usize },
}
