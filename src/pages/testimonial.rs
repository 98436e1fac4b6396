//! Testimonial page: image logo, custom graphic logo, custom alt text.

use dioxus::prelude::*;
use prism_ui::{LogoSource, Testimonial};

use crate::app::GalleryNav;

/// Square company mark used to demo custom logo graphics
#[component]
fn AcmeMark() -> Element {
    rsx! {
        svg {
            view_box: "0 0 48 48",
            width: "48",
            height: "48",
            fill: "none",
            "aria-hidden": "true",
            rect { width: "48", height: "48", rx: "8", fill: "#3b82f6" }
            path { d: "M24 14 16 20v12h4v-6h8v6h4V20l-8-6z", fill: "#ffffff" }
        }
    }
}

#[component]
pub fn TestimonialPage() -> Element {
    rsx! {
        GalleryNav {}
        main { class: "gallery-page",
            h1 { class: "gallery-heading", "Testimonial" }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Image logo" }
                div { class: "demo-row",
                    Testimonial {
                        logo: "https://placehold.co/96x96",
                        quote: "Prism UI cut our design review time in half.",
                        author: "Ada Perez",
                        role: "CTO",
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Custom graphic logo" }
                div { class: "demo-row",
                    Testimonial {
                        logo: LogoSource::Custom(rsx! { AcmeMark {} }),
                        quote: "The accessibility defaults saved us an audit cycle.",
                        author: "Jun Tanaka",
                        role: "Head of Product",
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Custom alt text" }
                div { class: "demo-row",
                    Testimonial {
                        logo: "https://placehold.co/96x96",
                        logo_alt: Some("Acme Corp logo".to_string()),
                        quote: "Consistent components, zero surprises.",
                        author: "Maria Silva",
                        role: "Engineering Manager",
                    }
                }
            }
        }
    }
}
