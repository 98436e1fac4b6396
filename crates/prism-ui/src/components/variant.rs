//! Variant Registry
//!
//! Closed enums for every presentational variant in the library, each with a
//! static lookup to its presentation attributes (CSS class token, icon,
//! ARIA role, live-region policy). The matches are exhaustive with no
//! default arm, so adding a variant is a compile-time-visible change.

use dioxus::prelude::*;

use super::icons::{IconError, IconInfo, IconSuccess, IconWarning};

/// Badge shape variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeFormat {
    /// Rounded-corner rectangle
    #[default]
    Square,
    /// Fully rounded capsule
    Pill,
}

/// All badge formats, in declaration order
pub const BADGE_FORMATS: [BadgeFormat; 2] = [BadgeFormat::Square, BadgeFormat::Pill];

impl BadgeFormat {
    /// Returns the CSS class token for this format
    pub fn class(&self) -> &'static str {
        match self {
            BadgeFormat::Square => "square",
            BadgeFormat::Pill => "pill",
        }
    }
}

/// Badge color variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeColor {
    #[default]
    Gray,
    Red,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    Pink,
}

/// All badge colors, in declaration order
pub const BADGE_COLORS: [BadgeColor; 8] = [
    BadgeColor::Gray,
    BadgeColor::Red,
    BadgeColor::Yellow,
    BadgeColor::Green,
    BadgeColor::Blue,
    BadgeColor::Indigo,
    BadgeColor::Purple,
    BadgeColor::Pink,
];

impl BadgeColor {
    /// Returns the CSS class token for this color
    pub fn class(&self) -> &'static str {
        match self {
            BadgeColor::Gray => "gray",
            BadgeColor::Red => "red",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
            BadgeColor::Indigo => "indigo",
            BadgeColor::Purple => "purple",
            BadgeColor::Pink => "pink",
        }
    }
}

/// Banner status variants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerStatus {
    Success,
    Info,
    Warning,
    Error,
}

/// All banner statuses, in declaration order
pub const BANNER_STATUSES: [BannerStatus; 4] = [
    BannerStatus::Success,
    BannerStatus::Info,
    BannerStatus::Warning,
    BannerStatus::Error,
];

/// Presentation attributes resolved from a [`BannerStatus`].
///
/// `warning` and `error` interrupt assistive technology immediately
/// (`alert`/`assertive`); `success` and `info` wait for a pause
/// (`status`/`polite`).
#[derive(Clone, Copy, PartialEq)]
pub struct BannerPresentation {
    /// Status icon component
    pub icon: fn() -> Element,
    /// ARIA role announced for the banner
    pub role: &'static str,
    /// Live-region politeness
    pub aria_live: &'static str,
}

impl BannerStatus {
    /// Returns the lowercase token used in class names and element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerStatus::Success => "success",
            BannerStatus::Info => "info",
            BannerStatus::Warning => "warning",
            BannerStatus::Error => "error",
        }
    }

    /// Returns the capitalized label used as the icon's accessible name
    pub fn label(&self) -> &'static str {
        match self {
            BannerStatus::Success => "Success",
            BannerStatus::Info => "Info",
            BannerStatus::Warning => "Warning",
            BannerStatus::Error => "Error",
        }
    }

    /// Resolves the full presentation record for this status
    pub fn presentation(&self) -> BannerPresentation {
        match self {
            BannerStatus::Success => BannerPresentation {
                icon: IconSuccess,
                role: "status",
                aria_live: "polite",
            },
            BannerStatus::Info => BannerPresentation {
                icon: IconInfo,
                role: "status",
                aria_live: "polite",
            },
            BannerStatus::Warning => BannerPresentation {
                icon: IconWarning,
                role: "alert",
                aria_live: "assertive",
            },
            BannerStatus::Error => BannerPresentation {
                icon: IconError,
                role: "alert",
                aria_live: "assertive",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_format_classes() {
        assert_eq!(BadgeFormat::Square.class(), "square");
        assert_eq!(BadgeFormat::Pill.class(), "pill");
    }

    #[test]
    fn badge_defaults() {
        assert_eq!(BadgeFormat::default(), BadgeFormat::Square);
        assert_eq!(BadgeColor::default(), BadgeColor::Gray);
    }

    #[test]
    fn badge_color_classes_are_unique() {
        let mut seen: Vec<&str> = BADGE_COLORS.iter().map(|c| c.class()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), BADGE_COLORS.len());
    }

    #[test]
    fn banner_role_live_pairs() {
        for status in BANNER_STATUSES {
            let pres = status.presentation();
            match status {
                BannerStatus::Success | BannerStatus::Info => {
                    assert_eq!(pres.role, "status");
                    assert_eq!(pres.aria_live, "polite");
                }
                BannerStatus::Warning | BannerStatus::Error => {
                    assert_eq!(pres.role, "alert");
                    assert_eq!(pres.aria_live, "assertive");
                }
            }
        }
    }

    #[test]
    fn banner_tokens_and_labels() {
        assert_eq!(BannerStatus::Success.as_str(), "success");
        assert_eq!(BannerStatus::Error.label(), "Error");
        for status in BANNER_STATUSES {
            let label = status.label();
            assert_eq!(label.to_lowercase(), status.as_str());
        }
    }
}
