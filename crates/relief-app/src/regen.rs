//! Debouncing of regeneration requests from continuous controls.
//!
//! A dragged slider reports a new value every frame. [`RegenGate`] keeps only
//! the latest requested parameters and releases them at most once per
//! interval, so the generator runs on a bounded schedule instead of once per
//! input event.

use std::time::{Duration, Instant};

use relief_mesh::NoiseParams;

/// Coalesces regeneration requests and rate-limits their release.
#[derive(Debug)]
pub struct RegenGate {
    interval: Duration,
    pending: Option<NoiseParams>,
    applied: Option<NoiseParams>,
    last_release: Option<Instant>,
    requests: u64,
    releases: u64,
}

impl RegenGate {
    /// Create a gate releasing at most once per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            applied: None,
            last_release: None,
            requests: 0,
            releases: 0,
        }
    }

    /// Record the latest parameters, replacing any still-pending request.
    pub fn request(&mut self, params: NoiseParams) {
        self.requests += 1;
        self.pending = Some(params);
    }

    /// Release the pending parameters if the interval has elapsed.
    ///
    /// Returns `None` while rate-limited, when nothing is pending, or when the
    /// pending parameters equal the last released ones.
    pub fn poll(&mut self, now: Instant) -> Option<NoiseParams> {
        if let Some(last) = self.last_release
            && now.saturating_duration_since(last) < self.interval
        {
            return None;
        }
        self.release(now)
    }

    /// Release the pending parameters immediately, ignoring the interval.
    ///
    /// Use when the control is let go so the final value is always applied.
    pub fn flush(&mut self, now: Instant) -> Option<NoiseParams> {
        self.release(now)
    }

    fn release(&mut self, now: Instant) -> Option<NoiseParams> {
        let params = self.pending.take()?;
        if self.applied == Some(params) {
            return None;
        }
        self.applied = Some(params);
        self.last_release = Some(now);
        self.releases += 1;
        Some(params)
    }

    /// Whether a request is waiting to be released.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Parameters most recently released.
    pub fn applied(&self) -> Option<&NoiseParams> {
        self.applied.as_ref()
    }

    /// Total requests received.
    pub fn request_count(&self) -> u64 {
        self.requests
    }

    /// Total parameter sets released.
    pub fn release_count(&self) -> u64 {
        self.releases
    }
}
