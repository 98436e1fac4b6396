//! Badge page: named stories plus the full color x format grid.

use dioxus::prelude::*;
use prism_ui::{Badge, BadgeColor, BadgeFormat, BADGE_COLORS, BADGE_FORMATS};

use crate::app::GalleryNav;

#[component]
pub fn BadgePage() -> Element {
    rsx! {
        GalleryNav {}
        main { class: "gallery-page",
            h1 { class: "gallery-heading", "Badge" }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Defaults" }
                div { class: "demo-row",
                    Badge { content: "Badge" }
                    Badge { content: "Pill Badge", format: BadgeFormat::Pill }
                    Badge { content: "Red Badge", color: BadgeColor::Red }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Counters" }
                div { class: "demo-row",
                    Badge { content: 3.to_string(), color: BadgeColor::Blue, format: BadgeFormat::Pill }
                    Badge { content: 128.to_string(), color: BadgeColor::Purple, format: BadgeFormat::Pill }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "All combinations" }
                div { class: "demo-grid",
                    for format in BADGE_FORMATS {
                        for color in BADGE_COLORS {
                            Badge { content: color.class(), color, format }
                        }
                    }
                }
            }
        }
    }
}
