//! Enter/leave counting for drag hover detection.
//!
//! Browsers fire `dragenter` and `dragleave` for every descendant the
//! pointer crosses, and those events bubble up to the zone root. A
//! single boolean flipped on each event flickers as soon as the zone
//! has children. Counting net enters instead makes the zone hover
//! exactly while the count is positive.

/// Change in hover state caused by a single drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    /// The net count went from zero to one: a payload is now over the zone.
    Started,
    /// The net count returned to zero: the payload left the zone.
    Ended,
}

/// Net `dragenter`/`dragleave` counter for one zone.
///
/// States are `idle` (count 0) and `hovering` (count > 0). There is no
/// terminal state; the tracker cycles for the lifetime of the zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    depth: u32,
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Whether a drag payload is currently over the zone.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.depth > 0
    }

    /// Current net enter count.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Record a `dragenter` on the zone or any descendant.
    pub const fn enter(&mut self) -> Option<DragTransition> {
        self.depth = self.depth.saturating_add(1);
        if self.depth == 1 {
            Some(DragTransition::Started)
        } else {
            None
        }
    }

    /// Record a `dragleave` on the zone or any descendant.
    ///
    /// A leave without a matching enter (possible when a drag starts
    /// inside the zone) is ignored rather than driving the count negative.
    pub const fn leave(&mut self) -> Option<DragTransition> {
        match self.depth {
            0 => None,
            1 => {
                self.depth = 0;
                Some(DragTransition::Ended)
            }
            _ => {
                self.depth -= 1;
                None
            }
        }
    }

    /// Return to idle after a drop, whatever the current count.
    pub const fn reset(&mut self) -> Option<DragTransition> {
        let was_hovering = self.is_hovering();
        self.depth = 0;
        if was_hovering {
            Some(DragTransition::Ended)
        } else {
            None
        }
    }
}
