//! Device classification from host-supplied hints.

use serde::{Deserialize, Serialize};

use crate::layout::Size;

/// Touch devices whose shorter viewport side exceeds this are tablets.
pub const TABLET_MIN_SHORT_SIDE: f32 = 600.0;

/// Platform substrings that mark a mobile device, matched case-insensitively.
const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// What the host knows about the device. All fields are plain values; the
/// host reads them from its platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceHints {
    pub viewport: Size,
    /// User agent or platform name.
    pub platform: String,
    /// Primary input is touch.
    pub touch_primary: bool,
    pub pixel_ratio: f32,
}

impl Default for DeviceHints {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 720.0),
            platform: String::new(),
            touch_primary: false,
            pixel_ratio: 1.0,
        }
    }
}

impl DeviceHints {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    #[must_use]
    pub fn with_touch(mut self, touch_primary: bool) -> Self {
        self.touch_primary = touch_primary;
        self
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Tablet,
    Phone,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Classified device.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub class: DeviceClass,
    pub orientation: Orientation,
    pub viewport: Size,
    pub touch: bool,
    pub pixel_ratio: f32,
    /// Mobile in portrait: the host should prompt for landscape.
    pub requires_rotation: bool,
}

impl DeviceInfo {
    /// Tablets and phones both count as mobile.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.class != DeviceClass::Desktop
    }
}

/// Classify a device.
///
/// ```
/// use ccg_table::device::{classify, DeviceClass, DeviceHints};
/// use ccg_table::layout::Size;
///
/// let hints = DeviceHints::new(Size::new(390.0, 844.0))
///     .with_platform("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)")
///     .with_touch(true);
/// let info = classify(&hints);
///
/// assert_eq!(info.class, DeviceClass::Phone);
/// assert!(info.requires_rotation);
/// ```
#[must_use]
pub fn classify(hints: &DeviceHints) -> DeviceInfo {
    let platform = hints.platform.to_lowercase();
    let mobile_platform = MOBILE_TOKENS.iter().any(|token| platform.contains(token));
    let mobile = mobile_platform || hints.touch_primary;

    let tablet_platform = platform.contains("ipad")
        || (platform.contains("android") && !platform.contains("mobile"));
    let short_side = hints.viewport.width.min(hints.viewport.height);
    let large_touch = hints.touch_primary && short_side > TABLET_MIN_SHORT_SIDE;

    let class = match (mobile, tablet_platform || large_touch) {
        (false, _) => DeviceClass::Desktop,
        (true, true) => DeviceClass::Tablet,
        (true, false) => DeviceClass::Phone,
    };
    let orientation = if hints.viewport.height > hints.viewport.width {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    };

    DeviceInfo {
        class,
        orientation,
        viewport: hints.viewport,
        touch: hints.touch_primary || mobile_platform,
        pixel_ratio: hints.pixel_ratio,
        requires_rotation: mobile && orientation == Orientation::Portrait,
    }
}
