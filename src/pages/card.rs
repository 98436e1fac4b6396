//! Card page: default icon, injected icon, long text.

use dioxus::prelude::*;
use prism_ui::Card;

use crate::app::GalleryNav;

/// Stacked-layers glyph used to demo icon injection
#[component]
fn LayersGlyph() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            path { d: "M12 2 2 7l10 5 10-5-10-5z" }
            path { d: "M2 17l10 5 10-5" }
            path { d: "M2 12l10 5 10-5" }
        }
    }
}

#[component]
pub fn CardPage() -> Element {
    rsx! {
        GalleryNav {}
        main { class: "gallery-page",
            h1 { class: "gallery-heading", "Card" }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Default icon" }
                div { class: "demo-row",
                    Card {
                        title: "Upload files",
                        content: "Drag and drop files here, or browse your computer.",
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Custom icon" }
                div { class: "demo-row",
                    Card {
                        icon: Some(rsx! { LayersGlyph {} }),
                        title: "Organize",
                        content: "Group related files into collections.",
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Long text" }
                div { class: "demo-row",
                    Card {
                        title: "This is a very long title that should still render correctly without any issues",
                        content: "This is a very long content that should still render correctly and wrap if needed without breaking the layout.",
                    }
                }
            }
        }
    }
}
