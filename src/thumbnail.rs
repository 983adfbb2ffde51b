//! Live window thumbnails.
//!
//! [`ThumbnailHandle`] owns one thumbnail registration: a live link that
//! makes the compositor draw a continuously updated preview of a source
//! window inside a destination window. The handle keeps a persistent
//! [`ThumbnailProperties`] command record; each setter names exactly one
//! field of that record and issues exactly one native update carrying
//! only that field's bit.
//!
//! A registration dies with either of its windows. The compositor
//! reports that as [`CompositorError::HandleInvalidated`], which every
//! method converts into permanent local invalidation: the handle is
//! dropped and all subsequent operations turn into silent no-ops
//! instead of re-attempting a doomed native call.

use crate::props::{ThumbnailFields, ThumbnailProperties};
use crate::traits::{Compositor, CompositorError};
use crate::types::{Rect, Size, ThumbnailId, WindowId};
use log::warn;

/// Owner of one live thumbnail registration.
///
/// The registration is released exactly once: explicitly through
/// [`release`](ThumbnailHandle::release) or implicitly on drop,
/// whichever comes first.
///
/// # Typical usage
///
/// ```ignore
/// let mut thumb = ThumbnailHandle::new(DwmCompositor::new(), destination, source)?;
/// thumb.set_destination(Rect::new(0, 0, 320, 180))?;
/// thumb.set_opacity(200)?;
/// thumb.set_visible(true)?;
/// ```
pub struct ThumbnailHandle<C: Compositor> {
    compositor: C,
    /// `None` once released or invalidated; every operation is then a
    /// no-op.
    handle: Option<ThumbnailId>,
    record: ThumbnailProperties,
}

impl<C: Compositor> ThumbnailHandle<C> {
    /// Register a thumbnail link mirroring `source` inside
    /// `destination`.
    pub fn new(
        compositor: C,
        destination: WindowId,
        source: WindowId,
    ) -> Result<Self, CompositorError> {
        let handle = compositor.register_thumbnail(destination, source)?;
        Ok(Self {
            compositor,
            handle: Some(handle),
            record: ThumbnailProperties::default(),
        })
    }

    /// Whether the registration is still live.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// Current size of the source window, or [`Size::ZERO`] once the
    /// handle is invalid.
    pub fn source_size(&mut self) -> Result<Size, CompositorError> {
        let Some(handle) = self.handle else {
            return Ok(Size::ZERO);
        };
        match self.compositor.thumbnail_source_size(handle) {
            Ok(size) => Ok(size),
            Err(CompositorError::HandleInvalidated) => {
                self.invalidate();
                Ok(Size::ZERO)
            }
            Err(e) => Err(e),
        }
    }

    /// Set the sub-rectangle of the source window to mirror.
    pub fn set_source(&mut self, source: Rect) -> Result<(), CompositorError> {
        self.record.source = source;
        self.apply(ThumbnailFields::SOURCE)
    }

    /// Set where the thumbnail is drawn inside the destination window.
    pub fn set_destination(&mut self, destination: Rect) -> Result<(), CompositorError> {
        self.record.destination = destination;
        self.apply(ThumbnailFields::DESTINATION)
    }

    /// Set the thumbnail opacity (`0` transparent, `255` opaque).
    pub fn set_opacity(&mut self, opacity: u8) -> Result<(), CompositorError> {
        self.record.opacity = opacity;
        self.apply(ThumbnailFields::OPACITY)
    }

    /// Show or hide the thumbnail.
    pub fn set_visible(&mut self, visible: bool) -> Result<(), CompositorError> {
        self.record.visible = visible;
        self.apply(ThumbnailFields::VISIBLE)
    }

    /// Mirror only the source window's client area, omitting its frame.
    pub fn set_source_client_area_only(&mut self, only: bool) -> Result<(), CompositorError> {
        self.record.source_client_area_only = only;
        self.apply(ThumbnailFields::SOURCE_CLIENT_AREA_ONLY)
    }

    /// Unregister the thumbnail. Idempotent; the handle is invalid
    /// afterwards either way.
    pub fn release(&mut self) -> Result<(), CompositorError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        match self.compositor.unregister_thumbnail(handle) {
            // Already dead on the native side; nothing left to release.
            Ok(()) | Err(CompositorError::HandleInvalidated) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Issue one native update carrying exactly the field named by
    /// `field`.
    ///
    /// The record's other values persist between calls but are outside
    /// the bit-set, so the receiver never reads them.
    fn apply(&mut self, field: ThumbnailFields) -> Result<(), CompositorError> {
        let Some(handle) = self.handle else {
            return Ok(());
        };
        self.record.fields = field;
        match self.compositor.update_thumbnail(handle, &self.record) {
            Ok(()) => Ok(()),
            Err(CompositorError::HandleInvalidated) => {
                self.invalidate();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn invalidate(&mut self) {
        warn!("thumbnail registration invalidated; further operations are no-ops");
        self.handle = None;
    }
}

impl<C: Compositor> Drop for ThumbnailHandle<C> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("failed to unregister thumbnail on drop: {}", e);
        }
    }
}
