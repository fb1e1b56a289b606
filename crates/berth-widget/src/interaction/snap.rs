//! Snap session state
//!
//! A snap session lives between pointer-down and pointer-up. It holds the
//! current classification, the dwell deadline before the preview appears,
//! and the preview element once shown. Edge and reset snapping share it, so
//! at most one preview exists at a time.

use crate::geometry::SnapEdge;

/// What a release would snap to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTarget {
    /// Maximize the axes of an edge
    Edge(SnapEdge),
    /// Return to the preset baseline
    Reset,
}

#[derive(Debug)]
pub(crate) struct SnapSession<N> {
    target: Option<SnapTarget>,
    deadline: Option<f64>,
    ghost: Option<N>,
}

impl<N> Default for SnapSession<N> {
    fn default() -> Self {
        Self {
            target: None,
            deadline: None,
            ghost: None,
        }
    }
}

impl<N> SnapSession<N> {
    /// Current classification
    #[inline]
    pub fn target(&self) -> Option<SnapTarget> {
        self.target
    }

    /// Start dwelling on a classification
    pub fn arm(&mut self, target: SnapTarget, deadline: f64) {
        self.target = Some(target);
        self.deadline = Some(deadline);
    }

    /// Dwell deadline, if dwelling
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Classification whose dwell has elapsed at `now`
    pub fn due(&self, now: f64) -> Option<SnapTarget> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.target,
            _ => None,
        }
    }

    /// Record the shown preview; the snap is now pending
    pub fn show(&mut self, ghost: N) {
        self.deadline = None;
        self.ghost = Some(ghost);
    }

    /// Classification a release would act on
    #[inline]
    pub fn pending(&self) -> Option<SnapTarget> {
        self.ghost.as_ref().and(self.target)
    }

    /// Reset the session, handing back the preview for removal
    pub fn clear(&mut self) -> Option<N> {
        self.target = None;
        self.deadline = None;
        self.ghost.take()
    }
}
