//! Gallery chrome CSS
//!
//! Page shell, navigation, and demo layout only. Component styling lives in
//! `prism_ui::theme::STYLESHEET`.

pub const GALLERY_STYLES: &str = r#"
*, *::before, *::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: #ffffff;
  color: var(--gray-900);
}

.gallery-nav {
  display: flex;
  align-items: center;
  gap: var(--space-6);
  padding: var(--space-4) var(--space-8);
  border-bottom: 1px solid var(--gray-100);
}

.gallery-nav-title {
  font-size: var(--text-lg);
  font-weight: var(--font-semibold);
  margin-right: var(--space-6);
}

.gallery-nav-link {
  font-size: var(--text-sm);
  color: var(--blue-700);
  text-decoration: none;
}

.gallery-nav-link:hover {
  text-decoration: underline;
}

.gallery-page {
  max-width: 56rem;
  margin: 0 auto;
  padding: var(--space-8);
}

.gallery-heading {
  margin: 0 0 var(--space-4);
  font-size: 2rem;
  font-weight: var(--font-semibold);
}

.gallery-subheading {
  margin: 0 0 var(--space-3);
  font-size: var(--text-lg);
  font-weight: var(--font-medium);
  color: var(--gray-500);
}

.gallery-intro {
  margin: 0 0 var(--space-8);
  color: var(--gray-500);
  line-height: var(--leading-relaxed);
}

.gallery-section {
  margin-bottom: var(--space-12);
}

.demo-row {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-start;
  gap: var(--space-6);
}

.demo-stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.demo-grid {
  display: grid;
  grid-template-columns: repeat(8, max-content);
  gap: var(--space-3);
}
"#;
