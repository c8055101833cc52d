use std::time::{Duration, Instant};

/// Timing for a single classification request.
#[derive(Debug, Clone)]
pub struct ClassifyStats {
    /// Wall-clock time from request entry to result.
    pub total_time: Duration,
}

impl ClassifyStats {
    /// Create a new stats tracker (call at start of the request).
    pub(crate) fn start() -> ClassifyStatsBuilder {
        ClassifyStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Builder for ClassifyStats - tracks timing from creation to finalize.
pub(crate) struct ClassifyStatsBuilder {
    start_time: Instant,
}

impl ClassifyStatsBuilder {
    pub fn finish(self) -> ClassifyStats {
        ClassifyStats {
            total_time: self.start_time.elapsed(),
        }
    }
}
