//! Overview page: one example of each component.

use dioxus::prelude::*;
use prism_ui::{Badge, BadgeColor, Banner, BannerStatus, Card, Testimonial};

use crate::app::GalleryNav;

#[component]
pub fn Overview() -> Element {
    rsx! {
        GalleryNav {}
        main { class: "gallery-page",
            h1 { class: "gallery-heading", "Prism UI" }
            p { class: "gallery-intro",
                "Four stateless components: Badge, Banner, Card, and Testimonial. "
                "Pick a page above to browse every variant."
            }
            section { class: "gallery-section",
                div { class: "demo-row",
                    Badge { content: "New", color: BadgeColor::Green }
                    Banner {
                        status: BannerStatus::Success,
                        title: "Success!",
                        content: Some("Your action was completed successfully.".to_string()),
                    }
                }
                div { class: "demo-row",
                    Card {
                        title: "Upload files",
                        content: "Drag and drop files here, or browse your computer.",
                    }
                    Testimonial {
                        logo: "https://placehold.co/96x96",
                        quote: "Prism UI cut our design review time in half.",
                        author: "Ada Perez",
                        role: "CTO",
                    }
                }
            }
        }
    }
}
