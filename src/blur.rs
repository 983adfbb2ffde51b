//! Blur-behind and frame extension for a single window.
//!
//! [`BlurBehindController`] tracks two booleans per window: whether
//! blur-behind is enabled and whether the frame is extended into the
//! client area. The compositor renders both effects into the same
//! non-client surface, so they are mutually exclusive here: enabling
//! one while the other is active first disables the other,
//! synchronously, before the new state is applied natively. At most one
//! of [`is_enabled`](BlurBehindController::is_enabled) /
//! [`is_frame_extended`](BlurBehindController::is_frame_extended) is
//! ever true.
//!
//! Unlike thumbnails, everything here is keyed on a caller-supplied
//! [`WindowId`], which never invalidates through this crate; native
//! failures simply propagate.

use crate::props::{BlurBehind, BlurBehindFields};
use crate::traits::{Compositor, CompositorError};
use crate::types::{Margins, RegionId, WindowId};
use log::debug;

/// Per-window blur-behind / extended-frame state.
///
/// Queries reflect the last state this controller applied, not a native
/// re-query; the controller assumes it is the only writer for its
/// window.
pub struct BlurBehindController<C: Compositor> {
    compositor: C,
    window: WindowId,
    enabled: bool,
    frame_extended: bool,
}

impl<C: Compositor> BlurBehindController<C> {
    /// Create a controller for `window`. No native call is issued until
    /// the first setter.
    pub fn new(compositor: C, window: WindowId) -> Self {
        Self {
            compositor,
            window,
            enabled: false,
            frame_extended: false,
        }
    }

    /// The window this controller drives.
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Whether blur-behind was last applied as enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the frame was last extended into the client area.
    pub fn is_frame_extended(&self) -> bool {
        self.frame_extended
    }

    /// Enable or disable blur-behind.
    ///
    /// Enabling while the frame is extended first removes the extension
    /// so the two effects never overlap. A native call is issued even
    /// when the requested state matches the current one.
    pub fn set_enabled(&mut self, enable: bool) -> Result<(), CompositorError> {
        if enable && self.frame_extended {
            debug!("removing extended frame before enabling blur");
            self.compositor.extend_frame(self.window, Margins::ZERO)?;
            self.frame_extended = false;
        }
        self.enabled = enable;
        let blur = BlurBehind {
            fields: BlurBehindFields::ENABLE,
            enable,
            ..BlurBehind::default()
        };
        self.compositor.enable_blur_behind(self.window, &blur)
    }

    /// Restrict the blur to `region`, enabling blur first if it is off.
    ///
    /// `None` blurs the entire window; it is marshaled as a null native
    /// region, never as an empty one.
    pub fn set_region(&mut self, region: Option<RegionId>) -> Result<(), CompositorError> {
        if !self.enabled {
            self.set_enabled(true)?;
        }
        let blur = BlurBehind {
            fields: BlurBehindFields::REGION,
            region,
            ..BlurBehind::default()
        };
        self.compositor.enable_blur_behind(self.window, &blur)
    }

    /// Control whether the blur transitions smoothly when the window
    /// maximizes. Independent of the enable state.
    pub fn set_transition_on_maximized(&mut self, transition: bool) -> Result<(), CompositorError> {
        let blur = BlurBehind {
            fields: BlurBehindFields::TRANSITION_ON_MAXIMIZED,
            transition_on_maximized: transition,
            ..BlurBehind::default()
        };
        self.compositor.enable_blur_behind(self.window, &blur)
    }

    /// Extend the window frame into the client area by `margins`.
    ///
    /// All-zero margins remove the extension. Extending while blur is
    /// enabled first disables the blur.
    pub fn extend_frame(&mut self, margins: Margins) -> Result<(), CompositorError> {
        let extended = !margins.is_zero();
        if self.enabled && extended {
            debug!("disabling blur before extending frame");
            self.set_enabled(false)?;
        }
        self.compositor.extend_frame(self.window, margins)?;
        self.frame_extended = extended;
        Ok(())
    }

    /// Remove the extended frame. Equivalent to
    /// [`extend_frame`](BlurBehindController::extend_frame) with
    /// [`Margins::ZERO`].
    pub fn remove_extended_frame(&mut self) -> Result<(), CompositorError> {
        self.extend_frame(Margins::ZERO)
    }
}
