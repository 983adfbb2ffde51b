//! Windows-specific implementation.
//!
//! This module provides the concrete backend for the
//! [`Compositor`](crate::traits::Compositor) trait, marshaling straight
//! into `dwmapi`. It only exists on Windows.
//!
//! Nothing outside this module should reference Win32 directly.

#[cfg(windows)]
pub mod native;

#[cfg(windows)]
pub use native::DwmCompositor;
