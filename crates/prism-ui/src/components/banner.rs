//! Banner Component
//!
//! Titled alert/status block. Role, live-region policy, and icon all come
//! from the status variant table in [`super::variant`].

use dioxus::prelude::*;

use super::variant::BannerStatus;

/// Properties for the Banner component
#[derive(Clone, PartialEq, Props)]
pub struct BannerProps {
    /// Severity of the banner, drives icon, role, and aria-live
    pub status: BannerStatus,
    /// Title text, always rendered
    #[props(into)]
    pub title: String,
    /// Optional body text; the content element and `aria-describedby` are
    /// only emitted when this is non-empty
    #[props(default)]
    pub content: Option<String>,
}

/// Status banner with icon, title, and optional content
///
/// `success` and `info` announce politely (`role="status"`), `warning` and
/// `error` interrupt (`role="alert"`, `aria-live="assertive"`).
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Banner {
///         status: BannerStatus::Success,
///         title: "Saved",
///         content: Some("Your changes are live.".to_string()),
///     }
/// }
/// ```
#[component]
pub fn Banner(props: BannerProps) -> Element {
    let status = props.status.as_str();
    let pres = props.status.presentation();
    let icon = (pres.icon)();
    let title = &props.title;

    let content = props
        .content
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_owned);
    let has_content = content.is_some();

    rsx! {
        div {
            class: "banner-wrapper banner-{status}",
            role: "{pres.role}",
            "aria-live": "{pres.aria_live}",
            "aria-labelledby": "banner-title-{status}",
            "aria-describedby": if has_content { "banner-content-{status}" },
            {icon}
            div { class: "banner-text-container",
                span {
                    id: "banner-title-{status}",
                    class: "banner-title",
                    "{title}"
                }
                if let Some(content) = content {
                    span {
                        id: "banner-content-{status}",
                        class: "banner-content",
                        "{content}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults_to_none() {
        let props = BannerProps::builder()
            .status(BannerStatus::Info)
            .title("Heads up")
            .build();
        assert!(props.content.is_none());
    }
}
