//! Shared vocabulary types.
//!
//! This module defines the plain data every facade exchanges with the
//! [`Compositor`](crate::traits::Compositor) seam: opaque handle newtypes,
//! geometry ([`Rect`], [`Size`], [`Margins`]), the decoded colorization
//! value, and the [`WindowMessage`] record used by the message router.
//!
//! All types are `Copy` value types; none of them owns a native resource.
//! Ownership of live handles lives in the facades
//! ([`ThumbnailHandle`](crate::thumbnail::ThumbnailHandle) and friends).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of a top-level window, supplied by the host
/// application (on Windows this is the `HWND` value).
///
/// The crate never creates or destroys windows; a `WindowId` is borrowed
/// identity, not ownership, and never becomes invalid through any
/// mechanism of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowId(pub isize);

/// Opaque identifier of a live thumbnail registration.
///
/// Returned by
/// [`Compositor::register_thumbnail`](crate::traits::Compositor::register_thumbnail)
/// and owned by exactly one [`ThumbnailHandle`](crate::thumbnail::ThumbnailHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThumbnailId(pub isize);

/// Opaque identifier of a region object (on Windows, an `HRGN`).
///
/// Blur-behind takes `Option<RegionId>`; `None` means "the entire
/// window" and is marshaled as a null native region, never as an empty
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionId(pub isize);

/// An axis-aligned rectangle in window coordinates (pixels).
///
/// Follows the Win32 convention: `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Build a rectangle from its four edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels (negative if the rectangle is inverted).
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels (negative if the rectangle is inverted).
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A 2D size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The zero-valued size, returned by queries on invalidated handles.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };
}

/// Frame margins in pixels: how far the window frame extends into the
/// client area on each side.
///
/// All-zero margins are the sentinel for "no extended frame".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    /// The "no extended frame" sentinel.
    pub const ZERO: Margins = Margins {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    /// Uniform margins on all four sides.
    pub fn uniform(size: i32) -> Self {
        Self {
            left: size,
            right: size,
            top: size,
            bottom: size,
        }
    }

    /// Whether these margins mean "no extended frame".
    pub fn is_zero(&self) -> bool {
        *self == Margins::ZERO
    }
}

/// An ARGB color decoded from the compositor's packed 32-bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Decode a packed `0xAARRGGBB` value.
    pub fn from_argb(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}

/// Current colorization of the compositor: the accent color plus the
/// opaque-blend flag (`true` when the color is applied without
/// transparency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Colorization {
    pub color: Color,
    pub opaque_blend: bool,
}

/// A window message as delivered by the host application's window
/// procedure.
///
/// `result` is the slot the window procedure must return from; the
/// [message router](crate::message::route) writes the native result
/// value into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMessage {
    /// Message code (`WM_*`).
    pub code: u32,
    /// First message parameter (`WPARAM`).
    pub wparam: usize,
    /// Second message parameter (`LPARAM`).
    pub lparam: isize,
    /// Result slot (`LRESULT`), written by the router.
    pub result: isize,
}

impl WindowMessage {
    /// Build a message with a zeroed result slot.
    pub fn new(code: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            code,
            wparam,
            lparam,
            result: 0,
        }
    }
}
