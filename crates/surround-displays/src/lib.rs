pub mod bounds;

#[cfg(windows)]
mod win;

#[cfg(windows)]
pub use win::DisplayImpl;

#[cfg(not(windows))]
mod unsupported;

#[cfg(not(windows))]
pub use unsupported::DisplayImpl;

use bounds::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy)]
pub struct Display(DisplayImpl);

impl Display {
    /// Every attached display, in the order the OS enumerates them.
    pub fn list() -> Vec<Self> {
        DisplayImpl::list().into_iter().map(Self).collect()
    }

    pub fn id(&self) -> DisplayId {
        DisplayId(self.0.raw_id())
    }

    pub fn refresh_rate(&self) -> u32 {
        self.0.refresh_rate()
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        self.0.physical_bounds()
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("id", &self.id())
            .field("bounds", &self.physical_bounds())
            .field("refresh_rate", &self.refresh_rate())
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayId(u64);

impl DisplayId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_id_formats_as_raw_handle() {
        let id = DisplayId(65537);
        assert_eq!(id.raw(), 65537);
        assert_eq!(id.to_string(), "65537");
    }
}
