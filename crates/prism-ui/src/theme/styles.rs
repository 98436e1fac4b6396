//! Component stylesheet
//!
//! Token definitions plus the CSS for every component class. Host apps
//! include this once via a `style` element at the root.

pub const STYLESHEET: &str = r#"
/* === Design Tokens === */
:root {
  /* Grays */
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-500: #6b7280;
  --gray-800: #1f2937;
  --gray-900: #111827;

  /* Blues */
  --blue-50: #eff6ff;
  --blue-100: #dbeafe;
  --blue-600: #2563eb;
  --blue-700: #1d4ed8;
  --blue-800: #1e40af;

  /* Reds */
  --red-50: #fef2f2;
  --red-100: #fee2e2;
  --red-700: #b91c1c;
  --red-800: #991b1b;

  /* Greens */
  --green-50: #f0fdf4;
  --green-100: #dcfce7;
  --green-700: #15803d;
  --green-800: #166534;

  /* Yellows */
  --yellow-50: #fefce8;
  --yellow-100: #fef9c3;
  --yellow-700: #a16207;
  --yellow-800: #854d0e;

  /* Indigos */
  --indigo-100: #e0e7ff;
  --indigo-800: #3730a3;

  /* Purples */
  --purple-100: #f3e8ff;
  --purple-800: #6b21a8;

  /* Pinks */
  --pink-100: #fce7f3;
  --pink-800: #9d174d;

  /* Type scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;

  /* Font weights */
  --font-normal: 400;
  --font-medium: 500;
  --font-semibold: 600;

  /* Spacing */
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;

  /* Radii */
  --radius-sm: 0.25rem;
  --radius-md: 0.375rem;
  --radius-lg: 0.5rem;
  --radius-xl: 0.75rem;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);
  --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);

  /* Line heights */
  --leading-tight: 1.25;
  --leading-snug: 1.375;
  --leading-normal: 1.5;
  --leading-relaxed: 1.625;
}

/* === Badge === */
.badge {
  display: inline-flex;
  align-items: center;
  padding: var(--space-2) var(--space-3);
  font-size: var(--text-sm);
  font-weight: var(--font-medium);
  line-height: var(--leading-tight);
}

.badge.square { border-radius: var(--radius-sm); }
.badge.pill { border-radius: 9999px; }

.badge.gray { background: var(--gray-100); color: var(--gray-800); }
.badge.red { background: var(--red-100); color: var(--red-800); }
.badge.yellow { background: var(--yellow-100); color: var(--yellow-800); }
.badge.green { background: var(--green-100); color: var(--green-800); }
.badge.blue { background: var(--blue-100); color: var(--blue-800); }
.badge.indigo { background: var(--indigo-100); color: var(--indigo-800); }
.badge.purple { background: var(--purple-100); color: var(--purple-800); }
.badge.pink { background: var(--pink-100); color: var(--pink-800); }

/* === Banner === */
.banner-wrapper {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  padding: var(--space-4) var(--space-6);
  border-radius: var(--radius-lg);
  border: 1px solid transparent;
}

.banner-wrapper .banner-icon { flex-shrink: 0; }

.banner-success {
  background: var(--green-50);
  border-color: var(--green-100);
  color: var(--green-800);
}

.banner-info {
  background: var(--blue-50);
  border-color: var(--blue-100);
  color: var(--blue-800);
}

.banner-warning {
  background: var(--yellow-50);
  border-color: var(--yellow-100);
  color: var(--yellow-800);
}

.banner-error {
  background: var(--red-50);
  border-color: var(--red-100);
  color: var(--red-800);
}

.banner-text-container {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.banner-title {
  font-size: var(--text-base);
  font-weight: var(--font-semibold);
  line-height: var(--leading-snug);
}

.banner-content {
  font-size: var(--text-sm);
  font-weight: var(--font-normal);
  line-height: var(--leading-normal);
}

/* === Card === */
.card-container {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  max-width: 20rem;
  padding: var(--space-6);
  background: var(--gray-50);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
}

.icon-container {
  display: flex;
  align-items: center;
  justify-content: center;
  width: var(--space-12);
  height: var(--space-12);
  background: var(--blue-600);
  color: var(--blue-50);
  border-radius: var(--radius-lg);
}

.card-text-wrapper {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.card-title {
  margin: 0;
  font-size: var(--text-lg);
  font-weight: var(--font-semibold);
  color: var(--gray-900);
  line-height: var(--leading-snug);
}

.card-content {
  margin: 0;
  font-size: var(--text-base);
  color: var(--gray-500);
  line-height: var(--leading-relaxed);
}

/* === Testimonial === */
.testimonial-container {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  max-width: 28rem;
  padding: var(--space-8);
  background: var(--gray-50);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
}

.testimonial-header {
  display: flex;
  align-items: center;
}

.testimonial-logo {
  width: var(--space-12);
  height: var(--space-12);
  border-radius: var(--radius-md);
  object-fit: contain;
}

.testimonial-quote {
  margin: 0;
  font-size: var(--text-lg);
  color: var(--gray-800);
  line-height: var(--leading-relaxed);
}

.testimonial-author {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.testimonial-author-name {
  margin: 0;
  font-size: var(--text-base);
  font-weight: var(--font-semibold);
  color: var(--gray-900);
}

.testimonial-author-role {
  margin: 0;
  font-size: var(--text-sm);
  color: var(--gray-500);
}
"#;
