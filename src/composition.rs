//! Process-wide composition state and colorization.
//!
//! Unlike the other facades, [`Composition`] has no per-instance
//! identity: it carries no state beyond its backend and every query goes
//! straight to the native side. The one exception is
//! [`is_available`](Composition::is_available), a capability flag the
//! backend computes once per process from the platform version and then
//! serves from cache.

use crate::traits::{Compositor, CompositorError};
use crate::types::{Color, Colorization};

/// System-wide composition enablement and colorization.
pub struct Composition<C: Compositor> {
    compositor: C,
}

impl<C: Compositor> Composition<C> {
    /// Create the facade over the given backend.
    pub fn new(compositor: C) -> Self {
        Self { compositor }
    }

    /// Whether the platform supports composition at all.
    ///
    /// Fixed for the process lifetime; composition being toggled off at
    /// runtime (e.g. by a remote session) shows up in
    /// [`is_enabled`](Composition::is_enabled) instead.
    pub fn is_available(&self) -> bool {
        self.compositor.composition_supported()
    }

    /// Whether composition is currently enabled. Re-queries the native
    /// side on every call; no local caching.
    pub fn is_enabled(&self) -> Result<bool, CompositorError> {
        self.compositor.composition_enabled()
    }

    /// Enable or disable composition system-wide.
    pub fn set_enabled(&self, enabled: bool) -> Result<(), CompositorError> {
        self.compositor.set_composition_enabled(enabled)
    }

    /// Current colorization: the accent color decoded from the packed
    /// `0xAARRGGBB` value, plus the opaque-blend flag.
    pub fn colorization(&self) -> Result<Colorization, CompositorError> {
        let (packed, opaque_blend) = self.compositor.colorization()?;
        Ok(Colorization {
            color: Color::from_argb(packed),
            opaque_blend,
        })
    }
}
