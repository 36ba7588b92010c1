use std::time::Duration;

use criterion::{Criterion, Throughput};

/// Layout runs are short, so a small sample over brief windows is enough.
pub fn layout_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

/// Throughput in placements. Empty layouts still count as one element.
pub fn placements(count: usize) -> Throughput {
    Throughput::Elements(count.max(1) as u64)
}
