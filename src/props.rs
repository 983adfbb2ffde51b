//! Partial-update command records.
//!
//! The native thumbnail and blur-behind calls take a structure carrying
//! several packed fields plus a bit-set naming which of those fields the
//! call actually means. The contract is one-sided: exactly the bits set
//! in `fields` may be read by the receiver; values in unset fields are
//! stale leftovers from earlier calls and carry no meaning.
//!
//! Facades keep one record alive for the lifetime of the handle and
//! overwrite `fields` with a single bit per setter call, so every native
//! update names exactly one field.

use crate::types::{Rect, RegionId};
use bitflags::bitflags;

bitflags! {
    /// Which fields of a [`ThumbnailProperties`] record are meaningful.
    ///
    /// Bit values match the native `DWM_TNP_*` constants so the backend
    /// can pass them through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ThumbnailFields: u32 {
        /// `destination` is meaningful.
        const DESTINATION = 0x0000_0001;
        /// `source` is meaningful.
        const SOURCE = 0x0000_0002;
        /// `opacity` is meaningful.
        const OPACITY = 0x0000_0004;
        /// `visible` is meaningful.
        const VISIBLE = 0x0000_0008;
        /// `source_client_area_only` is meaningful.
        const SOURCE_CLIENT_AREA_ONLY = 0x0000_0010;
    }
}

bitflags! {
    /// Which fields of a [`BlurBehind`] record are meaningful.
    ///
    /// Bit values match the native `DWM_BB_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlurBehindFields: u32 {
        /// `enable` is meaningful.
        const ENABLE = 0x0000_0001;
        /// `region` is meaningful.
        const REGION = 0x0000_0002;
        /// `transition_on_maximized` is meaningful.
        const TRANSITION_ON_MAXIMIZED = 0x0000_0004;
    }
}

/// Command record for a thumbnail property update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailProperties {
    /// Bit-set naming the fields below that this update carries.
    pub fields: ThumbnailFields,
    /// Where the thumbnail is drawn inside the destination window.
    pub destination: Rect,
    /// Sub-rectangle of the source window to mirror.
    pub source: Rect,
    /// Opacity, `0` (transparent) to `255` (opaque).
    pub opacity: u8,
    /// Whether the thumbnail is drawn at all.
    pub visible: bool,
    /// Mirror only the source window's client area, omitting its frame.
    pub source_client_area_only: bool,
}

impl Default for ThumbnailProperties {
    fn default() -> Self {
        Self {
            fields: ThumbnailFields::empty(),
            destination: Rect::default(),
            source: Rect::default(),
            opacity: 255,
            visible: true,
            source_client_area_only: false,
        }
    }
}

/// Command record for a blur-behind update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurBehind {
    /// Bit-set naming the fields below that this update carries.
    pub fields: BlurBehindFields,
    /// Whether blur-behind is on.
    pub enable: bool,
    /// Region to blur; `None` blurs the entire window and is marshaled
    /// as a null native region, not an empty one.
    pub region: Option<RegionId>,
    /// Whether the blur transitions smoothly when the window maximizes.
    pub transition_on_maximized: bool,
}

impl Default for BlurBehind {
    fn default() -> Self {
        Self {
            fields: BlurBehindFields::empty(),
            enable: false,
            region: None,
            transition_on_maximized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_field_bits_match_native_constants() {
        // DWM_TNP_RECTDESTINATION .. DWM_TNP_SOURCECLIENTAREAONLY
        assert_eq!(ThumbnailFields::DESTINATION.bits(), 0x1);
        assert_eq!(ThumbnailFields::SOURCE.bits(), 0x2);
        assert_eq!(ThumbnailFields::OPACITY.bits(), 0x4);
        assert_eq!(ThumbnailFields::VISIBLE.bits(), 0x8);
        assert_eq!(ThumbnailFields::SOURCE_CLIENT_AREA_ONLY.bits(), 0x10);
    }

    #[test]
    fn blur_field_bits_match_native_constants() {
        // DWM_BB_ENABLE .. DWM_BB_TRANSITIONONMAXIMIZED
        assert_eq!(BlurBehindFields::ENABLE.bits(), 0x1);
        assert_eq!(BlurBehindFields::REGION.bits(), 0x2);
        assert_eq!(BlurBehindFields::TRANSITION_ON_MAXIMIZED.bits(), 0x4);
    }

    #[test]
    fn default_records_carry_no_fields() {
        assert!(ThumbnailProperties::default().fields.is_empty());
        assert!(BlurBehind::default().fields.is_empty());
    }
}
