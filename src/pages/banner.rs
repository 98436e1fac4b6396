//! Banner page: the four statuses, with and without content.

use dioxus::prelude::*;
use prism_ui::{Banner, BannerStatus};

use crate::app::GalleryNav;

#[component]
pub fn BannerPage() -> Element {
    rsx! {
        GalleryNav {}
        main { class: "gallery-page",
            h1 { class: "gallery-heading", "Banner" }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Statuses" }
                div { class: "demo-stack",
                    Banner {
                        status: BannerStatus::Success,
                        title: "Success!",
                        content: Some("Your action was completed successfully.".to_string()),
                    }
                    Banner {
                        status: BannerStatus::Info,
                        title: "Info!",
                    }
                    Banner {
                        status: BannerStatus::Warning,
                        title: "Warning!",
                        content: Some("Please be cautious.".to_string()),
                    }
                    Banner {
                        status: BannerStatus::Error,
                        title: "Error!",
                        content: Some("Something went wrong.".to_string()),
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "gallery-subheading", "Title only" }
                div { class: "demo-stack",
                    Banner { status: BannerStatus::Success, title: "Saved" }
                    Banner { status: BannerStatus::Error, title: "Connection lost" }
                }
            }
        }
    }
}
