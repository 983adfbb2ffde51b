//! The seam between the facades and the native compositor.
//!
//! Every native entry point the crate touches is a method on
//! [`Compositor`]. Concrete backends implement it: [`crate::dwm`] talks
//! to `dwmapi` on Windows, and the tests use a recording mock. The
//! facades ([`ThumbnailHandle`](crate::thumbnail::ThumbnailHandle),
//! [`BlurBehindController`](crate::blur::BlurBehindController), …) only
//! depend on this abstraction, which keeps their state machines
//! unit-testable on any platform.

use crate::attributes::WindowAttribute;
use crate::props::{BlurBehind, ThumbnailProperties};
use crate::types::{Margins, Rect, Size, ThumbnailId, WindowId};

/// Errors from the native compositor boundary.
///
/// [`HandleInvalidated`](CompositorError::HandleInvalidated) is the only
/// kind the facades recognize and recover from: it means a handle no
/// longer refers to a live resource (typically because the window it
/// depended on was destroyed) and is converted into permanent local
/// invalidation at the call site. Everything else is surfaced to the
/// caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositorError {
    /// The handle no longer refers to a live compositor resource.
    #[error("compositor handle no longer refers to a live resource")]
    HandleInvalidated,

    /// Any other native failure, carrying the failing call and its
    /// raw result code.
    #[error("{call} failed with HRESULT {hresult:#010x}")]
    Native {
        /// Name of the native entry point that failed.
        call: &'static str,
        /// Raw `HRESULT` (bit pattern; hex-formatted in the message).
        hresult: i32,
    },
}

/// Abstraction over the native compositor API.
///
/// An implementation might marshal straight into `dwmapi`
/// ([`DwmCompositor`](crate::dwm::DwmCompositor)), or it might be a
/// recording stub used in tests.
///
/// All methods are blocking request/response against external native
/// state; none of them retains references to their arguments. Methods
/// taking a [`ThumbnailId`] fail with
/// [`CompositorError::HandleInvalidated`] once the registration is
/// stale; methods keyed on a caller-supplied [`WindowId`] never fail
/// that way.
pub trait Compositor {
    /// Register a live thumbnail link mirroring `source` inside
    /// `destination`.
    fn register_thumbnail(
        &self,
        destination: WindowId,
        source: WindowId,
    ) -> Result<ThumbnailId, CompositorError>;

    /// Unregister a thumbnail link.
    fn unregister_thumbnail(&self, thumbnail: ThumbnailId) -> Result<(), CompositorError>;

    /// Query the current size of a thumbnail's source window.
    fn thumbnail_source_size(&self, thumbnail: ThumbnailId) -> Result<Size, CompositorError>;

    /// Apply the fields named by `properties.fields` to a thumbnail.
    fn update_thumbnail(
        &self,
        thumbnail: ThumbnailId,
        properties: &ThumbnailProperties,
    ) -> Result<(), CompositorError>;

    /// Apply the fields named by `blur.fields` to a window's blur-behind
    /// state.
    fn enable_blur_behind(
        &self,
        window: WindowId,
        blur: &BlurBehind,
    ) -> Result<(), CompositorError>;

    /// Extend the window frame into the client area by `margins`
    /// (all-zero margins remove the extension).
    fn extend_frame(&self, window: WindowId, margins: Margins) -> Result<(), CompositorError>;

    /// Whether the host platform supports composition at all.
    ///
    /// A capability flag, not a live state query; backends compute it
    /// once per process.
    fn composition_supported(&self) -> bool;

    /// Whether composition is currently enabled system-wide.
    fn composition_enabled(&self) -> Result<bool, CompositorError>;

    /// Enable or disable composition system-wide.
    fn set_composition_enabled(&self, enabled: bool) -> Result<(), CompositorError>;

    /// Query the colorization as the packed `0xAARRGGBB` value plus the
    /// opaque-blend flag. Decoding is the facade's job.
    fn colorization(&self) -> Result<(u32, bool), CompositorError>;

    /// Read a boolean window attribute.
    fn window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<bool, CompositorError>;

    /// Read a rectangle window attribute.
    fn window_attribute_rect(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<Rect, CompositorError>;

    /// Write a boolean window attribute.
    fn set_window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: bool,
    ) -> Result<(), CompositorError>;

    /// Write an integer window attribute.
    fn set_window_attribute_int(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: i32,
    ) -> Result<(), CompositorError>;

    /// Forward a window message to the compositor's default window
    /// procedure. Returns `(handled, result)`.
    fn default_window_proc(
        &self,
        window: WindowId,
        code: u32,
        wparam: usize,
        lparam: isize,
    ) -> Result<(bool, isize), CompositorError>;
}

/// A shared reference to a compositor is itself a compositor, so one
/// backend instance can serve several facades at once.
impl<C: Compositor + ?Sized> Compositor for &C {
    fn register_thumbnail(
        &self,
        destination: WindowId,
        source: WindowId,
    ) -> Result<ThumbnailId, CompositorError> {
        (**self).register_thumbnail(destination, source)
    }

    fn unregister_thumbnail(&self, thumbnail: ThumbnailId) -> Result<(), CompositorError> {
        (**self).unregister_thumbnail(thumbnail)
    }

    fn thumbnail_source_size(&self, thumbnail: ThumbnailId) -> Result<Size, CompositorError> {
        (**self).thumbnail_source_size(thumbnail)
    }

    fn update_thumbnail(
        &self,
        thumbnail: ThumbnailId,
        properties: &ThumbnailProperties,
    ) -> Result<(), CompositorError> {
        (**self).update_thumbnail(thumbnail, properties)
    }

    fn enable_blur_behind(
        &self,
        window: WindowId,
        blur: &BlurBehind,
    ) -> Result<(), CompositorError> {
        (**self).enable_blur_behind(window, blur)
    }

    fn extend_frame(&self, window: WindowId, margins: Margins) -> Result<(), CompositorError> {
        (**self).extend_frame(window, margins)
    }

    fn composition_supported(&self) -> bool {
        (**self).composition_supported()
    }

    fn composition_enabled(&self) -> Result<bool, CompositorError> {
        (**self).composition_enabled()
    }

    fn set_composition_enabled(&self, enabled: bool) -> Result<(), CompositorError> {
        (**self).set_composition_enabled(enabled)
    }

    fn colorization(&self) -> Result<(u32, bool), CompositorError> {
        (**self).colorization()
    }

    fn window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<bool, CompositorError> {
        (**self).window_attribute_bool(window, attribute)
    }

    fn window_attribute_rect(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<Rect, CompositorError> {
        (**self).window_attribute_rect(window, attribute)
    }

    fn set_window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: bool,
    ) -> Result<(), CompositorError> {
        (**self).set_window_attribute_bool(window, attribute, value)
    }

    fn set_window_attribute_int(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: i32,
    ) -> Result<(), CompositorError> {
        (**self).set_window_attribute_int(window, attribute, value)
    }

    fn default_window_proc(
        &self,
        window: WindowId,
        code: u32,
        wparam: usize,
        lparam: isize,
    ) -> Result<(bool, isize), CompositorError> {
        (**self).default_window_proc(window, code, wparam, lparam)
    }
}
