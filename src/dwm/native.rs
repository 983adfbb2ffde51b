//! [`Compositor`] implementation backed by `dwmapi`.
//!
//! Marshals the trait's value types into the Win32 structures and back.
//! Every entry point returns an `HRESULT`; `E_INVALIDARG` is the
//! compositor's way of saying a handle has gone stale (its window was
//! destroyed), so it maps to [`CompositorError::HandleInvalidated`] and
//! every other failure code to [`CompositorError::Native`].

use crate::attributes::WindowAttribute;
use crate::props::{BlurBehind, ThumbnailProperties};
use crate::traits::{Compositor, CompositorError};
use crate::types::{Margins, Rect, Size, ThumbnailId, WindowId};
use log::debug;
use std::ffi::c_void;
use std::sync::OnceLock;
use windows_sys::Win32::Foundation::{BOOL, E_INVALIDARG, HRESULT, HWND, LRESULT, RECT, SIZE};
use windows_sys::Win32::Graphics::Dwm::{
    DwmDefWindowProc, DwmEnableBlurBehindWindow, DwmEnableComposition, DwmExtendFrameIntoClientArea,
    DwmGetColorizationColor, DwmGetWindowAttribute, DwmIsCompositionEnabled,
    DwmQueryThumbnailSourceSize, DwmRegisterThumbnail, DwmSetWindowAttribute,
    DwmUnregisterThumbnail, DwmUpdateThumbnailProperties, DWMWINDOWATTRIBUTE, DWM_BLURBEHIND,
    DWM_EC_DISABLECOMPOSITION, DWM_EC_ENABLECOMPOSITION, DWM_THUMBNAIL_PROPERTIES, HTHUMBNAIL,
};
use windows_sys::Win32::Graphics::Gdi::HRGN;
use windows_sys::Win32::System::SystemInformation::{GetVersionExW, OSVERSIONINFOW};
use windows_sys::Win32::UI::Controls::MARGINS;

/// Desktop Window Manager backend.
///
/// Stateless; every method is a direct system call. One instance can be
/// shared freely (it is `Copy`), or each facade can own its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct DwmCompositor;

impl DwmCompositor {
    /// Create a new backend handle.
    pub fn new() -> Self {
        Self
    }
}

/// Map an `HRESULT` into the crate's error vocabulary.
fn check(call: &'static str, hr: HRESULT) -> Result<(), CompositorError> {
    if hr >= 0 {
        Ok(())
    } else if hr == E_INVALIDARG {
        Err(CompositorError::HandleInvalidated)
    } else {
        Err(CompositorError::Native { call, hresult: hr })
    }
}

fn to_bool32(value: bool) -> BOOL {
    value as BOOL
}

fn to_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

fn from_rect(rect: RECT) -> Rect {
    Rect {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

fn to_thumbnail_properties(properties: &ThumbnailProperties) -> DWM_THUMBNAIL_PROPERTIES {
    DWM_THUMBNAIL_PROPERTIES {
        dwFlags: properties.fields.bits(),
        rcDestination: to_rect(properties.destination),
        rcSource: to_rect(properties.source),
        opacity: properties.opacity,
        fVisible: to_bool32(properties.visible),
        fSourceClientAreaOnly: to_bool32(properties.source_client_area_only),
    }
}

fn to_blur_behind(blur: &BlurBehind) -> DWM_BLURBEHIND {
    DWM_BLURBEHIND {
        dwFlags: blur.fields.bits(),
        fEnable: to_bool32(blur.enable),
        // Null region means "the entire window".
        hRgnBlur: blur.region.map_or(std::ptr::null_mut(), |r| r.0 as HRGN),
        fTransitionOnMaximized: to_bool32(blur.transition_on_maximized),
    }
}

/// Composition capability, computed once per process from the OS major
/// version (Vista introduced the DWM with major version 6).
fn composition_supported_once() -> bool {
    static SUPPORTED: OnceLock<bool> = OnceLock::new();
    *SUPPORTED.get_or_init(|| {
        let mut info: OSVERSIONINFOW = unsafe { std::mem::zeroed() };
        info.dwOSVersionInfoSize = std::mem::size_of::<OSVERSIONINFOW>() as u32;
        let ok = unsafe { GetVersionExW(&mut info) };
        let supported = ok != 0 && info.dwMajorVersion >= 6;
        debug!(
            "composition capability: major version {} -> {}",
            info.dwMajorVersion, supported
        );
        supported
    })
}

impl Compositor for DwmCompositor {
    fn register_thumbnail(
        &self,
        destination: WindowId,
        source: WindowId,
    ) -> Result<ThumbnailId, CompositorError> {
        let mut handle: HTHUMBNAIL = std::ptr::null_mut();
        let hr = unsafe {
            DwmRegisterThumbnail(destination.0 as HWND, source.0 as HWND, &mut handle)
        };
        check("DwmRegisterThumbnail", hr)?;
        debug!(
            "registered thumbnail {:#x} ({:#x} -> {:#x})",
            handle as isize, source.0, destination.0
        );
        Ok(ThumbnailId(handle as isize))
    }

    fn unregister_thumbnail(&self, thumbnail: ThumbnailId) -> Result<(), CompositorError> {
        debug!("unregistering thumbnail {:#x}", thumbnail.0);
        let hr = unsafe { DwmUnregisterThumbnail(thumbnail.0 as HTHUMBNAIL) };
        check("DwmUnregisterThumbnail", hr)
    }

    fn thumbnail_source_size(&self, thumbnail: ThumbnailId) -> Result<Size, CompositorError> {
        let mut size = SIZE { cx: 0, cy: 0 };
        let hr = unsafe { DwmQueryThumbnailSourceSize(thumbnail.0 as HTHUMBNAIL, &mut size) };
        check("DwmQueryThumbnailSourceSize", hr)?;
        Ok(Size {
            width: size.cx,
            height: size.cy,
        })
    }

    fn update_thumbnail(
        &self,
        thumbnail: ThumbnailId,
        properties: &ThumbnailProperties,
    ) -> Result<(), CompositorError> {
        let native = to_thumbnail_properties(properties);
        let hr = unsafe { DwmUpdateThumbnailProperties(thumbnail.0 as HTHUMBNAIL, &native) };
        check("DwmUpdateThumbnailProperties", hr)
    }

    fn enable_blur_behind(
        &self,
        window: WindowId,
        blur: &BlurBehind,
    ) -> Result<(), CompositorError> {
        let native = to_blur_behind(blur);
        let hr = unsafe { DwmEnableBlurBehindWindow(window.0 as HWND, &native) };
        check("DwmEnableBlurBehindWindow", hr)
    }

    fn extend_frame(&self, window: WindowId, margins: Margins) -> Result<(), CompositorError> {
        let native = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };
        let hr = unsafe { DwmExtendFrameIntoClientArea(window.0 as HWND, &native) };
        check("DwmExtendFrameIntoClientArea", hr)
    }

    fn composition_supported(&self) -> bool {
        composition_supported_once()
    }

    fn composition_enabled(&self) -> Result<bool, CompositorError> {
        let mut enabled: BOOL = 0;
        let hr = unsafe { DwmIsCompositionEnabled(&mut enabled) };
        check("DwmIsCompositionEnabled", hr)?;
        Ok(enabled != 0)
    }

    fn set_composition_enabled(&self, enabled: bool) -> Result<(), CompositorError> {
        debug!("setting composition enabled = {}", enabled);
        let action = if enabled {
            DWM_EC_ENABLECOMPOSITION
        } else {
            DWM_EC_DISABLECOMPOSITION
        };
        let hr = unsafe { DwmEnableComposition(action) };
        check("DwmEnableComposition", hr)
    }

    fn colorization(&self) -> Result<(u32, bool), CompositorError> {
        let mut packed: u32 = 0;
        let mut opaque: BOOL = 0;
        let hr = unsafe { DwmGetColorizationColor(&mut packed, &mut opaque) };
        check("DwmGetColorizationColor", hr)?;
        Ok((packed, opaque != 0))
    }

    fn window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<bool, CompositorError> {
        let mut value: BOOL = 0;
        let hr = unsafe {
            DwmGetWindowAttribute(
                window.0 as HWND,
                attribute.code() as DWMWINDOWATTRIBUTE,
                &mut value as *mut BOOL as *mut c_void,
                std::mem::size_of::<BOOL>() as u32,
            )
        };
        check("DwmGetWindowAttribute", hr)?;
        Ok(value != 0)
    }

    fn window_attribute_rect(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
    ) -> Result<Rect, CompositorError> {
        let mut value = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        let hr = unsafe {
            DwmGetWindowAttribute(
                window.0 as HWND,
                attribute.code() as DWMWINDOWATTRIBUTE,
                &mut value as *mut RECT as *mut c_void,
                std::mem::size_of::<RECT>() as u32,
            )
        };
        check("DwmGetWindowAttribute", hr)?;
        Ok(from_rect(value))
    }

    fn set_window_attribute_bool(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: bool,
    ) -> Result<(), CompositorError> {
        let native = to_bool32(value);
        let hr = unsafe {
            DwmSetWindowAttribute(
                window.0 as HWND,
                attribute.code() as DWMWINDOWATTRIBUTE,
                &native as *const BOOL as *const c_void,
                std::mem::size_of::<BOOL>() as u32,
            )
        };
        check("DwmSetWindowAttribute", hr)
    }

    fn set_window_attribute_int(
        &self,
        window: WindowId,
        attribute: WindowAttribute,
        value: i32,
    ) -> Result<(), CompositorError> {
        let hr = unsafe {
            DwmSetWindowAttribute(
                window.0 as HWND,
                attribute.code() as DWMWINDOWATTRIBUTE,
                &value as *const i32 as *const c_void,
                std::mem::size_of::<i32>() as u32,
            )
        };
        check("DwmSetWindowAttribute", hr)
    }

    fn default_window_proc(
        &self,
        window: WindowId,
        code: u32,
        wparam: usize,
        lparam: isize,
    ) -> Result<(bool, isize), CompositorError> {
        let mut result: LRESULT = 0;
        let handled =
            unsafe { DwmDefWindowProc(window.0 as HWND, code, wparam, lparam, &mut result) };
        Ok((handled != 0, result))
    }
}
