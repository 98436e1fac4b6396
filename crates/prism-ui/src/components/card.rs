//! Card Component
//!
//! Icon + title + content block with an injectable icon.

use dioxus::prelude::*;

use super::icons::IconUpload;

/// Properties for the Card component
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    /// Optional icon override; the built-in upload glyph is used when absent.
    /// The icon renders inside a labelled `role="img"` container, so the
    /// supplied graphic should be decorative (aria-hidden).
    #[props(default = None)]
    pub icon: Option<Element>,
    /// Card heading
    #[props(into)]
    pub title: String,
    /// Card body text
    #[props(into)]
    pub content: String,
}

/// Content card with a labelled icon container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         title: "Upload files",
///         content: "Drag and drop or browse to upload.",
///     }
///     Card {
///         icon: Some(rsx! { LayersGlyph {} }),
///         title: "Organize",
///         content: "Group related files together.",
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let icon = props.icon.unwrap_or_else(|| rsx! { IconUpload {} });
    let title = &props.title;
    let content = &props.content;

    rsx! {
        article {
            class: "card-container",
            "aria-labelledby": "card-title",
            "aria-describedby": "card-content",
            div {
                class: "icon-container",
                role: "img",
                "aria-label": "Card icon",
                {icon}
            }
            div { class: "card-text-wrapper",
                h3 { id: "card-title", class: "card-title", "{title}" }
                p { id: "card-content", class: "card-content", "{content}" }
            }
        }
    }
}
