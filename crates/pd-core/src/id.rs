use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier for a component on the canvas.
///
/// Numeric internally (Copy, Eq, Hash in O(1)) but displayed and
/// persisted in the `comp-<n>` form the saved-document format uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub const fn new(n: u64) -> Self {
        ComponentId(n)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse the persisted `comp-<n>` form. Foreign id strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        s.strip_prefix("comp-")?.parse().ok().map(ComponentId)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comp-{}", self.0)
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comp-{}", self.0)
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ComponentId::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid component id `{s}`")))
    }
}

/// Hands out fresh component ids from a monotonically increasing counter.
///
/// Lives on the editor session rather than in a global so documents stay
/// independent and tests deterministic. Ids are never reused: `bump_past`
/// raises the counter when a restored or loaded document contains ids the
/// allocator has not seen.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next fresh id. The first allocation yields `comp-1`.
    pub fn allocate(&mut self) -> ComponentId {
        self.last += 1;
        ComponentId(self.last)
    }

    /// Ensure later allocations land strictly after `id`.
    pub fn bump_past(&mut self, id: ComponentId) {
        self.last = self.last.max(id.0);
    }
}
