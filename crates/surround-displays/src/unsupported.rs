//! Stand-in for platforms without a display enumeration backend.
//!
//! Enumeration reports no displays, so callers fail their display-count
//! precondition instead of failing to build.

use crate::bounds::PhysicalBounds;

#[derive(Clone, Copy)]
pub struct DisplayImpl(u64);

impl DisplayImpl {
    pub fn list() -> Vec<Self> {
        tracing::debug!("display enumeration is not supported on this platform");
        Vec::new()
    }

    pub fn raw_id(&self) -> u64 {
        self.0
    }

    pub fn refresh_rate(&self) -> u32 {
        0
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        None
    }
}
