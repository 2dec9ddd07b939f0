//! Widget identity.
//!
//! Nothing about a widget survives its call, so an id is the only thing that
//! correlates a widget invocation with the same invocation on the previous
//! frame. Ids must be stable across frames for the same logical widget and
//! distinct across different logical widgets within one UI tree.

/// Unique identifier for a widget.
///
/// Two values are reserved and never name a real widget: [`WidgetId::NONE`]
/// ("no widget") and [`WidgetId::UNCLAIMED`] (the pointer press has been
/// claimed, but by no widget — see [`Ui::end_frame`](crate::Ui::end_frame)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// "No widget". This is the rest state of both the hot and active slots.
    pub const NONE: Self = Self(0);

    /// The press is claimed but no widget owns it.
    ///
    /// Set by the frame bracket when the pointer went down over empty space,
    /// so that a widget hovered later in the same press can never claim it.
    pub const UNCLAIMED: Self = Self(u64::MAX);

    /// Creates an id from a raw value.
    ///
    /// `0` and `u64::MAX` are reserved; passing them yields the corresponding
    /// sentinel, which no widget call will ever match.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derives a stable id from a human-readable label (FNV-1a).
    ///
    /// The hash is remapped away from the two reserved values, so any label
    /// produces a usable id.
    #[must_use]
    pub const fn from_label(label: &str) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let bytes = label.as_bytes();
        let mut hash = FNV_OFFSET;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        // Keep clear of the reserved sentinels.
        if hash == 0 || hash == u64::MAX {
            hash = FNV_OFFSET;
        }
        Self(hash)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns true if this is a real widget id rather than a sentinel.
    #[must_use]
    pub const fn is_real(self) -> bool {
        self.0 != 0 && self.0 != u64::MAX
    }
}

/// Sequential id allocator owned by the application.
///
/// Allocate once at startup and keep the resulting ids for the life of the
/// UI; allocating fresh ids every frame would break cross-frame correlation.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator. The first id handed out is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused id.
    pub fn alloc(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
