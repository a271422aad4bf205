use std::path::Path;

use crate::core::errors::Result;

/// Port for appending lines to one audit log stream.
pub trait AuditLogger: Send + Sync {
    /// Append `line` followed by a line separator.
    ///
    /// Implementations must write the whole line in one operation so
    /// concurrent callers never interleave within a line.
    fn append_line(&self, line: &str) -> Result<()>;

    /// Where this stream ends up, for diagnostics.
    fn location(&self) -> &Path;
}
