//! Typed access to per-window compositor attributes.
//!
//! The native get/set-window-attribute entry points take an integer
//! attribute code, an untyped buffer, and an explicit byte size; the
//! value's actual type depends on the code. [`WindowAttribute`] fixes
//! the small vocabulary this crate uses, and [`WindowAttributes`]
//! exposes each attribute through a correctly typed accessor so no
//! caller ever sizes a buffer by hand.

use crate::traits::{Compositor, CompositorError};
use crate::types::{Rect, WindowId};

/// Window attributes this crate reads or writes.
///
/// Discriminants are the native `DWMWA_*` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum WindowAttribute {
    /// Whether non-client rendering is currently enabled (bool, read).
    NonClientRenderingEnabled = 1,
    /// Non-client rendering policy (int, write).
    NonClientRenderingPolicy = 2,
    /// Force-disable compositor transitions (bool, write).
    TransitionsDisabled = 3,
    /// Allow paint into the non-client area (bool, write).
    AllowNonClientPaint = 4,
    /// Bounds of the caption buttons, window-relative (rect, read).
    CaptionButtonBounds = 5,
    /// Extended frame bounds in screen space (rect, read).
    ExtendedFrameBounds = 9,
}

impl WindowAttribute {
    /// The native attribute code.
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Values for [`WindowAttribute::NonClientRenderingPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NonClientRenderingPolicy {
    /// Follow the window style bits.
    UseWindowStyle = 0,
    /// Never render the non-client area through the compositor.
    Disabled = 1,
    /// Always render the non-client area through the compositor.
    Enabled = 2,
}

/// Typed attribute accessors for one window.
///
/// Attributes are keyed on a caller-supplied [`WindowId`]; there is no
/// internally registered resource, so nothing here ever invalidates.
/// Native failures propagate to the caller.
pub struct WindowAttributes<C: Compositor> {
    compositor: C,
    window: WindowId,
}

impl<C: Compositor> WindowAttributes<C> {
    /// Create the accessor for `window`.
    pub fn new(compositor: C, window: WindowId) -> Self {
        Self { compositor, window }
    }

    /// Whether the compositor currently renders this window's
    /// non-client area.
    pub fn non_client_rendering_enabled(&self) -> Result<bool, CompositorError> {
        self.compositor
            .window_attribute_bool(self.window, WindowAttribute::NonClientRenderingEnabled)
    }

    /// Set the non-client rendering policy.
    pub fn set_non_client_rendering_policy(
        &self,
        policy: NonClientRenderingPolicy,
    ) -> Result<(), CompositorError> {
        self.compositor.set_window_attribute_int(
            self.window,
            WindowAttribute::NonClientRenderingPolicy,
            policy as i32,
        )
    }

    /// Force compositor transitions off (or back on) for this window.
    pub fn set_transitions_disabled(&self, disabled: bool) -> Result<(), CompositorError> {
        self.compositor.set_window_attribute_bool(
            self.window,
            WindowAttribute::TransitionsDisabled,
            disabled,
        )
    }

    /// Allow or forbid painting into the non-client area.
    pub fn set_allow_non_client_paint(&self, allow: bool) -> Result<(), CompositorError> {
        self.compositor.set_window_attribute_bool(
            self.window,
            WindowAttribute::AllowNonClientPaint,
            allow,
        )
    }

    /// Bounds of the caption buttons, relative to the window.
    pub fn caption_button_bounds(&self) -> Result<Rect, CompositorError> {
        self.compositor
            .window_attribute_rect(self.window, WindowAttribute::CaptionButtonBounds)
    }

    /// Extended frame bounds in screen coordinates.
    pub fn extended_frame_bounds(&self) -> Result<Rect, CompositorError> {
        self.compositor
            .window_attribute_rect(self.window, WindowAttribute::ExtendedFrameBounds)
    }
}
