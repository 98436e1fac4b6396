//! Markup-level tests
//!
//! Components are rendered to HTML strings with `dioxus_ssr` and asserted
//! against the class and ARIA contracts.

use dioxus::prelude::*;
use proptest::prelude::*;

use prism_ui::{
    Badge, BadgeColor, BadgeFormat, Banner, BannerStatus, Card, LogoSource, Testimonial,
    BADGE_COLORS, BADGE_FORMATS, BANNER_STATUSES,
};

/// Distinctive geometry of the built-in upload glyph
const UPLOAD_GLYPH_MARKER: &str = "17 8 12 3 7 8";

/// Extract the value of the first `name="..."` attribute occurrence.
fn attr_value(html: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = html.find(&needle)? + needle.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}

fn render_banner(status: BannerStatus, title: &str, content: Option<&str>) -> String {
    let title = title.to_string();
    let content = content.map(str::to_owned);
    dioxus_ssr::render_element(rsx! {
        Banner { status, title, content }
    })
}

// === Banner ===

#[test]
fn banner_role_and_live_follow_status_table() {
    let expected = [
        (BannerStatus::Success, "status", "polite"),
        (BannerStatus::Info, "status", "polite"),
        (BannerStatus::Warning, "alert", "assertive"),
        (BannerStatus::Error, "alert", "assertive"),
    ];
    for (status, role, live) in expected {
        let html = render_banner(status, "Title", None);
        assert_eq!(attr_value(&html, "role").as_deref(), Some(role), "{html}");
        assert_eq!(attr_value(&html, "aria-live").as_deref(), Some(live));
    }
}

#[test]
fn banner_carries_wrapper_and_status_classes() {
    for status in BANNER_STATUSES {
        let html = render_banner(status, "Title", None);
        let class = attr_value(&html, "class").unwrap();
        let tokens: Vec<&str> = class.split_whitespace().collect();
        assert!(tokens.contains(&"banner-wrapper"), "{html}");
        assert!(tokens.contains(&format!("banner-{}", status.as_str()).as_str()));
    }
}

#[test]
fn banner_describedby_present_only_with_content() {
    for status in BANNER_STATUSES {
        let with = render_banner(status, "Title", Some("Body"));
        let expected_id = format!("banner-content-{}", status.as_str());
        assert_eq!(
            attr_value(&with, "aria-describedby").as_deref(),
            Some(expected_id.as_str())
        );
        assert!(with.contains("banner-content"));
        assert!(with.contains("Body"));

        let without = render_banner(status, "Title", None);
        assert!(!without.contains("aria-describedby"), "{without}");
        assert!(!without.contains("banner-content"));
    }
}

#[test]
fn banner_empty_content_is_treated_as_absent() {
    let html = render_banner(BannerStatus::Info, "Title", Some(""));
    assert!(!html.contains("aria-describedby"));
    assert!(!html.contains("banner-content"));
}

#[test]
fn banner_labelledby_points_at_title_id() {
    for status in BANNER_STATUSES {
        let html = render_banner(status, "Title", None);
        let id = format!("banner-title-{}", status.as_str());
        assert_eq!(attr_value(&html, "aria-labelledby").as_deref(), Some(id.as_str()));
        assert!(html.contains(&format!("id=\"{id}\"")));
    }
}

#[test]
fn banner_icon_is_labelled_with_capitalized_status() {
    for status in BANNER_STATUSES {
        let html = render_banner(status, "Title", None);
        assert!(html.contains("<svg"), "{html}");
        assert!(
            html.contains(&format!("aria-label=\"{}\"", status.label())),
            "{html}"
        );
    }
}

// === Badge ===

#[test]
fn badge_every_combination_has_exactly_three_classes() {
    for color in BADGE_COLORS {
        for format in BADGE_FORMATS {
            let html = dioxus_ssr::render_element(rsx! {
                Badge { content: "x", color, format }
            });
            let class = attr_value(&html, "class").unwrap();
            let tokens: Vec<&str> = class.split_whitespace().collect();
            assert_eq!(tokens.len(), 3, "{class}");
            assert_eq!(tokens[0], "badge");
            assert!(tokens.contains(&color.class()));
            assert!(tokens.contains(&format.class()));
            let mut deduped = tokens.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), 3, "duplicate class in {class}");
        }
    }
}

#[test]
fn badge_defaults_to_gray_square() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { content: "Default" }
    });
    let class = attr_value(&html, "class").unwrap();
    assert_eq!(class, "badge gray square");
}

#[test]
fn badge_label_is_color_badge_content() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { content: "New", color: BadgeColor::Green }
    });
    assert_eq!(
        attr_value(&html, "aria-label").as_deref(),
        Some("green badge: New")
    );
    assert_eq!(attr_value(&html, "role").as_deref(), Some("status"));
}

#[test]
fn badge_label_keeps_numeric_text_verbatim() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { content: 42.to_string(), color: BadgeColor::Red, format: BadgeFormat::Pill }
    });
    assert_eq!(
        attr_value(&html, "aria-label").as_deref(),
        Some("red badge: 42")
    );
}

#[test]
fn badge_label_with_empty_content() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { content: "" }
    });
    assert_eq!(attr_value(&html, "aria-label").as_deref(), Some("gray badge: "));
}

// === Card ===

#[test]
fn card_renders_default_upload_icon() {
    let html = dioxus_ssr::render_element(rsx! {
        Card { title: "Title", content: "Content" }
    });
    assert!(html.contains(UPLOAD_GLYPH_MARKER), "{html}");
    assert!(html.contains("aria-label=\"Card icon\""));
    assert!(html.contains("role=\"img\""));
}

#[test]
fn card_custom_icon_replaces_default() {
    let html = dioxus_ssr::render_element(rsx! {
        Card {
            icon: Some(rsx! {
                svg { class: "custom-glyph", "aria-hidden": "true",
                    circle { cx: "12", cy: "12", r: "10" }
                }
            }),
            title: "Title",
            content: "Content",
        }
    });
    assert!(html.contains("custom-glyph"));
    assert!(!html.contains(UPLOAD_GLYPH_MARKER), "{html}");
    assert!(html.contains("aria-label=\"Card icon\""));
}

#[test]
fn card_structure_and_aria_wiring() {
    let html = dioxus_ssr::render_element(rsx! {
        Card { title: "My Title", content: "My Content" }
    });
    assert_eq!(
        attr_value(&html, "aria-labelledby").as_deref(),
        Some("card-title")
    );
    assert_eq!(
        attr_value(&html, "aria-describedby").as_deref(),
        Some("card-content")
    );
    for class in ["card-container", "icon-container", "card-text-wrapper", "card-title", "card-content"] {
        assert!(html.contains(class), "missing {class}");
    }
    assert!(html.contains("My Title"));
    assert!(html.contains("My Content"));
}

// === Testimonial ===

#[test]
fn testimonial_url_logo_renders_img_with_default_alt() {
    let html = dioxus_ssr::render_element(rsx! {
        Testimonial {
            logo: "https://x/y.png",
            quote: "Great product",
            author: "Ada Perez",
            role: "CTO",
        }
    });
    assert_eq!(attr_value(&html, "src").as_deref(), Some("https://x/y.png"));
    assert_eq!(
        attr_value(&html, "alt").as_deref(),
        Some("Ada Perez company logo")
    );
}

#[test]
fn testimonial_url_logo_uses_custom_alt_when_given() {
    let html = dioxus_ssr::render_element(rsx! {
        Testimonial {
            logo: "https://x/y.png",
            quote: "Great product",
            author: "Ada Perez",
            role: "CTO",
            logo_alt: Some("Acme Corp logo".to_string()),
        }
    });
    assert_eq!(attr_value(&html, "alt").as_deref(), Some("Acme Corp logo"));
}

#[test]
fn testimonial_custom_logo_gets_labelled_container() {
    let html = dioxus_ssr::render_element(rsx! {
        Testimonial {
            logo: LogoSource::Custom(rsx! {
                svg { class: "acme-mark", "aria-hidden": "true",
                    rect { width: "48", height: "48" }
                }
            }),
            quote: "Great product",
            author: "Ada Perez",
            role: "CTO",
        }
    });
    assert!(html.contains("acme-mark"));
    assert!(html.contains("role=\"img\""));
    assert!(html.contains("aria-label=\"Company logo\""));
    assert!(!html.contains("<img"));
}

#[test]
fn testimonial_wraps_quote_in_curly_quotes() {
    let html = dioxus_ssr::render_element(rsx! {
        Testimonial {
            logo: "https://x/y.png",
            quote: "Hello",
            author: "Ada",
            role: "CTO",
        }
    });
    assert!(html.contains("\u{201c}Hello\u{201d}"), "{html}");
}

#[test]
fn testimonial_author_before_role() {
    let html = dioxus_ssr::render_element(rsx! {
        Testimonial {
            logo: "https://x/y.png",
            quote: "Hello",
            author: "Ada",
            role: "CTO",
        }
    });
    assert_eq!(
        attr_value(&html, "aria-labelledby").as_deref(),
        Some("testimonial-author")
    );
    let author_pos = html.find("testimonial-author-name").unwrap();
    let role_pos = html.find("testimonial-author-role").unwrap();
    assert!(author_pos < role_pos);
}

// === Idempotence ===

#[test]
fn rerender_is_byte_identical() {
    let badge = || {
        dioxus_ssr::render_element(rsx! {
            Badge { content: "7", color: BadgeColor::Blue, format: BadgeFormat::Pill }
        })
    };
    assert_eq!(badge(), badge());

    let banner = || render_banner(BannerStatus::Warning, "Careful", Some("Mind the gap"));
    assert_eq!(banner(), banner());

    let card = || {
        dioxus_ssr::render_element(rsx! {
            Card { title: "T", content: "C" }
        })
    };
    assert_eq!(card(), card());

    let testimonial = || {
        dioxus_ssr::render_element(rsx! {
            Testimonial { logo: "https://x/y.png", quote: "Q", author: "A", role: "R" }
        })
    };
    assert_eq!(testimonial(), testimonial());
}

proptest! {
    /// Badge markup is a pure function of its props, and the accessible
    /// label preserves the content text verbatim.
    #[test]
    fn badge_render_is_deterministic(content in "[a-zA-Z0-9 ]{0,40}") {
        let render = || {
            let content = content.clone();
            dioxus_ssr::render_element(rsx! {
                Badge { content }
            })
        };
        let first = render();
        prop_assert_eq!(&first, &render());
        let label = attr_value(&first, "aria-label").unwrap();
        prop_assert_eq!(label, format!("gray badge: {}", content));
    }

    /// Banner markup is a pure function of its props.
    #[test]
    fn banner_render_is_deterministic(
        title in "[a-zA-Z0-9 ]{1,40}",
        content in prop::option::of("[a-zA-Z0-9 ]{1,40}"),
    ) {
        let first = render_banner(BannerStatus::Success, &title, content.as_deref());
        let second = render_banner(BannerStatus::Success, &title, content.as_deref());
        prop_assert_eq!(first, second);
    }
}
