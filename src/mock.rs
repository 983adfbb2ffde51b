//! Recording [`Compositor`] used by the unit tests.
//!
//! Records every native call with its full argument payload so tests can
//! assert on exactly what would have crossed the native boundary, and
//! can be scripted to fail the next handle-taking thumbnail call with
//! [`CompositorError::HandleInvalidated`] to simulate a destroyed
//! source or destination window.

use crate::attributes::WindowAttribute;
use crate::props::{BlurBehind, ThumbnailProperties};
use crate::traits::{Compositor, CompositorError};
use crate::types::{Margins, Rect, Size, ThumbnailId, WindowId};
use std::cell::{Cell, RefCell};

/// One call that reached the (fake) native boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NativeCall {
    RegisterThumbnail {
        destination: WindowId,
        source: WindowId,
    },
    UnregisterThumbnail(ThumbnailId),
    QuerySourceSize(ThumbnailId),
    UpdateThumbnail {
        thumbnail: ThumbnailId,
        properties: ThumbnailProperties,
    },
    EnableBlurBehind {
        window: WindowId,
        blur: BlurBehind,
    },
    ExtendFrame {
        window: WindowId,
        margins: Margins,
    },
    QueryCompositionEnabled,
    SetCompositionEnabled(bool),
    QueryColorization,
    GetAttributeBool {
        window: WindowId,
        attribute: WindowAttribute,
    },
    GetAttributeRect {
        window: WindowId,
        attribute: WindowAttribute,
    },
    SetAttributeBool {
        window: WindowId,
        attribute: WindowAttribute,
        value: bool,
    },
    SetAttributeInt {
        window: WindowId,
        attribute: WindowAttribute,
        value: i32,
    },
    DefaultWindowProc {
        window: WindowId,
        code: u32,
        wparam: usize,
        lparam: isize,
    },
}

/// Record-keeping mock compositor.
pub(crate) struct RecorderCompositor {
    pub calls: RefCell<Vec<NativeCall>>,
    /// Answer for [`Compositor::thumbnail_source_size`].
    pub source_size: Cell<Size>,
    /// Answer for [`Compositor::composition_supported`].
    pub supported: Cell<bool>,
    /// Answer for [`Compositor::composition_enabled`].
    pub enabled: Cell<bool>,
    /// Answer for [`Compositor::colorization`].
    pub packed_colorization: Cell<(u32, bool)>,
    /// Answer for [`Compositor::window_attribute_bool`].
    pub attribute_bool: Cell<bool>,
    /// Answer for [`Compositor::window_attribute_rect`].
    pub attribute_rect: Cell<Rect>,
    /// Answer for [`Compositor::default_window_proc`].
    pub proc_response: Cell<(bool, isize)>,
    /// When set, the next thumbnail-handle-taking call records itself
    /// and then fails with `HandleInvalidated` (one-shot).
    pub invalidate_next: Cell<bool>,
    next_thumbnail: Cell<isize>,
}

impl Default for RecorderCompositor {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            source_size: Cell::new(Size {
                width: 800,
                height: 600,
            }),
            supported: Cell::new(true),
            enabled: Cell::new(true),
            packed_colorization: Cell::new((0xFF336699, true)),
            attribute_bool: Cell::new(false),
            attribute_rect: Cell::new(Rect::default()),
            proc_response: Cell::new((false, 0)),
            invalidate_next: Cell::new(false),
            next_thumbnail: Cell::new(1),
        }
    }
}

impl RecorderCompositor {
    fn record(&self, call: NativeCall) {
        self.calls.borrow_mut().push(call);
    }

    /// One-shot check used by the thumbnail-handle-taking methods.
    fn stale(&self) -> Result<(), CompositorError> {
        if self.invalidate_next.take() {
            Err(CompositorError::HandleInvalidated)
        } else {
            Ok(())
        }
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<NativeCall> {
        self.calls.borrow().last().cloned()
    }
}

impl Compositor for RecorderCompositor {
    fn register_thumbnail(
        &self,
        destination: WindowId,
        source: WindowId,
    ) -> Result<ThumbnailId, CompositorError> {
        self.record(NativeCall::RegisterThumbnail {
            destination,
            source,
        });
        let id = self.next_thumbnail.get();
        self.next_thumbnail.set(id + 1);
        Ok(ThumbnailId(id))
    }

    fn unregister_thumbnail(&self, thumbnail: ThumbnailId) -> Result<(), CompositorError> {
        self.record(NativeCall::UnregisterThumbnail(thumbnail));
        self.stale()
    }

    fn thumbnail_source_size(&self, thumbnail: ThumbnailId) -> Result<Size, CompositorError> {
        self.record(NativeCall::QuerySourceSize(thumbnail));
        self.stale()?;
        Ok(self.source_size.get())
    }

    fn update_thumbnail(
        &self,
        thumbnail: ThumbnailId,
        properties: &ThumbnailProperties,
    ) -> Result<(), CompositorError> {
        self.record(NativeCall::UpdateThumbnail {
            thumbnail,
            properties: *properties,
        });
        self.stale()
    }

    fn enable_blur_behind(
        &self,
        window: WindowId,
        blur: &BlurBehind,
    ) -> Result<(), CompositorError> {
        self.record(NativeCall::EnableBlurBehind {
            window,
            blur: *blur,
        });
        Ok(())
    }

    fn extend_frame(&self, window: WindowId, margins: Margins) -> Result<(), CompositorError> {
        self.record(NativeCall::ExtendFrame { window, margins });
        Ok(())
    }

    fn composition_supported(&self) -> bool {
        self.supported.get()
    }

    fn composition_enabled(&self) -> Result<bool, CompositorError> {
        self.record(NativeCall::QueryCompositionEnabled);
        Ok(self.enabled.get())
    }

    fn set_composition_enabled(&self, enabled: bool) -> Result<(), CompositorError> {
        self.record(NativeCall::SetCompositionEnabled(enabled));
        self.enabled.set(enabled);
        Ok(())
    }

    fn colorization(&self) -> Result<(u32, bool), CompositorError> {
        self.record(NativeCall::QueryColorization);
        Ok(self.packed_colorization.get())
    }

    fn window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<bool, CompositorError> {
        self.record(NativeCall::GetAttributeBool { window, attribute });
        Ok(self.attribute_bool.get())
    }

    fn window_attribute_rect(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<Rect, CompositorError> {
        self.record(NativeCall::GetAttributeRect { window, attribute });
        Ok(self.attribute_rect.get())
    }

    fn set_window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: bool,
    ) -> Result<(), CompositorError> {
        self.record(NativeCall::SetAttributeBool {
            window,
            attribute,
            value,
        });
        Ok(())
    }

    fn set_window_attribute_int(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: i32,
    ) -> Result<(), CompositorError> {
        self.record(NativeCall::SetAttributeInt {
            window,
            attribute,
            value,
        });
        Ok(())
    }

    fn default_window_proc(
        &self,
        window: WindowId,
        code: u32,
        wparam: usize,
        lparam: isize,
    ) -> Result<(bool, isize), CompositorError> {
        self.record(NativeCall::DefaultWindowProc {
            window,
            code,
            wparam,
            lparam,
        });
        Ok(self.proc_response.get())
    }
}
