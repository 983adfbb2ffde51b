//! **dwm-facade** — safe facades over the Desktop Window Manager.
//!
//! Four independent wrappers over the compositor's composition API,
//! sharing no runtime state with each other:
//!
//! * [`thumbnail::ThumbnailHandle`] — owns one live thumbnail
//!   registration and drives per-field partial updates.
//! * [`blur::BlurBehindController`] — per-window blur-behind and frame
//!   extension, kept mutually exclusive.
//! * [`composition::Composition`] — process-wide composition state and
//!   colorization.
//! * [`message::route`] — forwards a window message to the compositor's
//!   default window procedure.
//!
//! # Architecture
//!
//! The crate is organised around one core trait:
//!
//! * [`traits::Compositor`] — abstracts every native entry point so the
//!   facades' state machines (partial-update encoding, blur/frame
//!   mutual exclusion, handle invalidation) are not coupled to Win32
//!   and can be unit-tested anywhere.
//!
//! The concrete implementation lives in [`dwm`] (`dwmapi` marshaling,
//! Windows only). Control flow is caller-driven and synchronous: a host
//! application creates one facade per window or thumbnail, calls
//! setters from its UI events, and forwards window messages through the
//! router. Nothing here spawns threads or suspends, and no facade is
//! guarded against concurrent use of the same native handle from
//! several threads; that sequencing stays with the caller.

pub mod attributes;
pub mod blur;
pub mod composition;
pub mod dwm;
pub mod message;
pub mod props;
pub mod thumbnail;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
