//! Design token constants
//!
//! Named references to the CSS custom properties defined in
//! [`super::STYLESHEET`]. Tokens are static values, never computed at
//! render time; use them in inline styles when a component class is not
//! enough.

#![allow(dead_code)]

// === Grays ===
pub const GRAY_50: &str = "var(--gray-50)";
pub const GRAY_100: &str = "var(--gray-100)";
pub const GRAY_500: &str = "var(--gray-500)";
pub const GRAY_800: &str = "var(--gray-800)";
pub const GRAY_900: &str = "var(--gray-900)";

// === Blues ===
pub const BLUE_50: &str = "var(--blue-50)";
pub const BLUE_100: &str = "var(--blue-100)";
pub const BLUE_600: &str = "var(--blue-600)";
pub const BLUE_700: &str = "var(--blue-700)";
pub const BLUE_800: &str = "var(--blue-800)";

// === Reds ===
pub const RED_50: &str = "var(--red-50)";
pub const RED_100: &str = "var(--red-100)";
pub const RED_700: &str = "var(--red-700)";
pub const RED_800: &str = "var(--red-800)";

// === Greens ===
pub const GREEN_50: &str = "var(--green-50)";
pub const GREEN_100: &str = "var(--green-100)";
pub const GREEN_700: &str = "var(--green-700)";
pub const GREEN_800: &str = "var(--green-800)";

// === Yellows ===
pub const YELLOW_50: &str = "var(--yellow-50)";
pub const YELLOW_100: &str = "var(--yellow-100)";
pub const YELLOW_700: &str = "var(--yellow-700)";
pub const YELLOW_800: &str = "var(--yellow-800)";

// === Indigos ===
pub const INDIGO_100: &str = "var(--indigo-100)";
pub const INDIGO_800: &str = "var(--indigo-800)";

// === Purples ===
pub const PURPLE_100: &str = "var(--purple-100)";
pub const PURPLE_800: &str = "var(--purple-800)";

// === Pinks ===
pub const PINK_100: &str = "var(--pink-100)";
pub const PINK_800: &str = "var(--pink-800)";

// === Type scale ===
pub const TEXT_SM: &str = "var(--text-sm)";
pub const TEXT_BASE: &str = "var(--text-base)";
pub const TEXT_LG: &str = "var(--text-lg)";

// === Font weights ===
pub const FONT_NORMAL: &str = "var(--font-normal)";
pub const FONT_MEDIUM: &str = "var(--font-medium)";
pub const FONT_SEMIBOLD: &str = "var(--font-semibold)";

// === Spacing ===
pub const SPACE_2: &str = "var(--space-2)";
pub const SPACE_3: &str = "var(--space-3)";
pub const SPACE_4: &str = "var(--space-4)";
pub const SPACE_6: &str = "var(--space-6)";
pub const SPACE_8: &str = "var(--space-8)";
pub const SPACE_12: &str = "var(--space-12)";

// === Radii ===
pub const RADIUS_SM: &str = "var(--radius-sm)";
pub const RADIUS_MD: &str = "var(--radius-md)";
pub const RADIUS_LG: &str = "var(--radius-lg)";
pub const RADIUS_XL: &str = "var(--radius-xl)";

// === Shadows ===
pub const SHADOW_MD: &str = "var(--shadow-md)";
pub const SHADOW_LG: &str = "var(--shadow-lg)";

// === Line heights ===
pub const LEADING_TIGHT: &str = "var(--leading-tight)";
pub const LEADING_SNUG: &str = "var(--leading-snug)";
pub const LEADING_NORMAL: &str = "var(--leading-normal)";
pub const LEADING_RELAXED: &str = "var(--leading-relaxed)";
