//! Global CSS injected at the app root.
//!
//! The class-flag names (`hidden`, `slow-hidden`, `scrolled`,
//! `scrolled-hero`, `contact-open`, `active`, `open`, `expanded`,
//! `no-scroll`, `no-transitions`) are the contract with the state machine;
//! renaming any of them breaks the controllers.

pub const GLOBAL_STYLES: &str = r#"
/* === Base ================================================================ */

:root {
  --ink: #1c1b19;
  --ink-soft: rgba(28, 27, 25, 0.65);
  --paper: #f6f2ea;
  --paper-deep: #e8e1d3;
  --accent: #b4552d;
  --accent-soft: rgba(180, 85, 45, 0.15);
  --line: rgba(28, 27, 25, 0.14);
  --nav-height: 64px;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: "Iowan Old Style", "Palatino", Georgia, serif;
  color: var(--ink);
  background: var(--paper);
}

#folio-root {
  height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--paper);
  transition: background 0.4s ease;
}

/* Page-level "not at the very top" backdrop. */
#folio-root.scrolled-hero {
  background: var(--paper-deep);
}

/* Scroll restores flip many flags in one tick; transitions stay off until
   the corrected position has been painted. */
#folio-root.no-transitions,
#folio-root.no-transitions * {
  transition: none !important;
}

/* Background scroll lock while the menu panel is out. */
#folio-root.no-scroll main {
  overflow: hidden;
}

/* === Splash ============================================================== */

.splash {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: var(--paper);
}

.splash-mark {
  font-size: 2.5rem;
  letter-spacing: 0.35em;
  text-transform: uppercase;
}

.splash-hint {
  color: var(--ink-soft);
  font-size: 0.85rem;
}

/* === Top nav ============================================================= */

.site-nav {
  position: relative;
  z-index: 30;
  height: var(--nav-height);
  background: transparent;
  border-bottom: 1px solid transparent;
  transition: background 0.3s ease, border-color 0.3s ease;
}

.site-nav.scrolled {
  background: var(--paper);
  border-bottom-color: var(--line);
}

.nav-inner {
  max-width: 960px;
  margin: 0 auto;
  height: 100%;
  padding: 0 1.25rem;
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-logo {
  font-size: 1.15rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  text-decoration: none;
  color: var(--ink);
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  margin-left: auto;
}

.nav-link {
  text-decoration: none;
  color: var(--ink-soft);
  font-size: 0.95rem;
}

.nav-link:hover {
  color: var(--ink);
}

.contact-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--ink);
  border-radius: 999px;
  padding: 0.45rem 1.1rem;
  background: transparent;
  color: var(--ink);
  font: inherit;
  font-size: 0.95rem;
  text-decoration: none;
  cursor: pointer;
  transition: background 0.2s ease, color 0.2s ease;
}

.contact-btn:hover {
  background: var(--ink);
  color: var(--paper);
}

.contact-btn.open {
  background: var(--ink);
  color: var(--paper);
}

.menu-btn {
  display: none;
  border: none;
  background: transparent;
  color: var(--ink);
  cursor: pointer;
  padding: 0.4rem;
}

/* === Hero ================================================================ */

.hero {
  position: relative;
  min-height: 330px;
  display: flex;
  align-items: center;
  gap: 2rem;
  max-width: 960px;
  margin: 0 auto;
  padding: 2.5rem 1.25rem;
}

.hero-bg {
  position: absolute;
  inset: 0;
  z-index: -1;
  background:
    radial-gradient(circle at 20% 30%, var(--accent-soft), transparent 55%),
    radial-gradient(circle at 80% 70%, rgba(90, 110, 90, 0.18), transparent 50%);
  opacity: 1;
}

/* Immediate hide: the overlay takes the stage without a fade race. */
.hero-bg.hidden {
  opacity: 0;
  transition: none;
}

/* Scroll-driven hide: the slow fade. */
.hero-bg.slow-hidden {
  opacity: 0;
  transition: opacity 0.6s ease;
}

.hero-portrait {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.2rem;
  background: var(--ink);
  color: var(--paper);
  flex-shrink: 0;
}

.hero-title {
  font-size: 2.4rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.hero-tagline {
  color: var(--ink-soft);
  max-width: 34rem;
  margin-bottom: 1rem;
}

/* === Social dropdown ===================================================== */

.social-dropdown {
  position: relative;
  display: inline-block;
}

.social-toggle {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  border: none;
  background: transparent;
  color: var(--accent);
  font: inherit;
  font-size: 0.95rem;
  cursor: pointer;
}

.social-toggle .chevron {
  transition: transform 0.2s ease;
}

.social-toggle.open .chevron {
  transform: rotate(180deg);
}

.social-backdrop {
  position: fixed;
  inset: 0;
  z-index: 39;
}

.social-panel {
  position: absolute;
  top: calc(100% + 0.4rem);
  left: 0;
  z-index: 40;
  min-width: 10rem;
  list-style: none;
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 8px;
  box-shadow: 0 8px 24px rgba(28, 27, 25, 0.12);
  padding: 0.4rem 0;
  display: none;
}

.social-panel.open {
  display: block;
}

.social-panel a {
  display: block;
  padding: 0.45rem 1rem;
  text-decoration: none;
  color: var(--ink);
  font-size: 0.9rem;
}

.social-panel a:hover {
  background: var(--accent-soft);
}

/* === Main container ====================================================== */

main.site-main {
  flex: 1;
  overflow-y: auto;
  scroll-behavior: auto;
  position: relative;
}

/* The overlay replaces the home content visually. */
main.site-main.contact-open > :not(.contact-panel) {
  visibility: hidden;
}

/* === Portfolio nav ======================================================= */

.portfolio-nav-sentinel {
  height: 1px;
}

.portfolio_nav {
  position: sticky;
  top: 0;
  z-index: 20;
  background: transparent;
  padding: 0.75rem 1.25rem;
  max-width: 960px;
  margin: 0 auto;
  transition: background 0.3s ease, box-shadow 0.3s ease;
}

.portfolio_nav.scrolled {
  background: var(--paper);
  box-shadow: 0 6px 18px rgba(28, 27, 25, 0.08);
}

.filter-bar {
  display: flex;
  gap: 0.5rem;
}

.filter-btn {
  border: 1px solid var(--line);
  border-radius: 999px;
  background: transparent;
  color: var(--ink-soft);
  font: inherit;
  font-size: 0.85rem;
  padding: 0.35rem 0.9rem;
  cursor: pointer;
}

.filter-btn.active {
  border-color: var(--accent);
  color: var(--accent);
  background: var(--accent-soft);
}

/* === Portfolio grid ====================================================== */

.portfolio-grid {
  max-width: 960px;
  margin: 0 auto;
  padding: 1rem 1.25rem 4rem;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.portfolio-item {
  border: 1px solid var(--line);
  border-radius: 10px;
  background: var(--paper);
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  transition: box-shadow 0.2s ease;
}

.portfolio-item:hover {
  box-shadow: 0 8px 24px rgba(28, 27, 25, 0.08);
}

.portfolio-item.hidden {
  display: none;
}

.portfolio-item.expanded {
  grid-column: 1 / -1;
  box-shadow: 0 12px 32px rgba(28, 27, 25, 0.12);
}

.portfolio-item-title {
  font-size: 1.15rem;
  font-weight: 500;
}

.portfolio-item-meta {
  color: var(--ink-soft);
  font-size: 0.8rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.portfolio-item-summary {
  color: var(--ink-soft);
  font-size: 0.95rem;
}

.portfolio-item-details {
  border-top: 1px solid var(--line);
  padding-top: 0.75rem;
  font-size: 0.95rem;
  line-height: 1.55;
}

.portfolio-item-details table {
  border-collapse: collapse;
  margin-top: 0.5rem;
}

.portfolio-item-details td,
.portfolio-item-details th {
  border: 1px solid var(--line);
  padding: 0.3rem 0.6rem;
  text-align: left;
}

.portfolio-item-link {
  color: var(--accent);
  font-size: 0.9rem;
}

.expand-btn,
.close-btn {
  align-self: flex-start;
  border: none;
  background: transparent;
  color: var(--accent);
  font: inherit;
  font-size: 0.9rem;
  cursor: pointer;
  padding: 0;
}

.close-btn {
  color: var(--ink-soft);
}

/* === Contact overlay ===================================================== */

.contact-panel {
  position: absolute;
  inset: 0;
  z-index: 25;
  background: var(--paper);
  display: none;
  overflow-y: auto;
}

.contact-panel.active {
  display: block;
  visibility: visible;
}

.contact-inner {
  max-width: 560px;
  margin: 0 auto;
  padding: 3rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-title {
  font-size: 2rem;
  font-weight: 500;
}

.contact-lead {
  color: var(--ink-soft);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.form-label {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  font-size: 0.85rem;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: var(--ink-soft);
}

.form-field {
  border: 1px solid var(--line);
  border-radius: 6px;
  padding: 0.6rem 0.75rem;
  font: inherit;
  background: #fff;
}

.form-field:focus {
  outline: 2px solid var(--accent-soft);
  border-color: var(--accent);
}

textarea.form-field {
  min-height: 8rem;
  resize: vertical;
}

.form-submit {
  align-self: flex-start;
  border: none;
  border-radius: 999px;
  background: var(--accent);
  color: var(--paper);
  font: inherit;
  padding: 0.6rem 1.6rem;
  cursor: pointer;
}

.form-submit:disabled {
  opacity: 0.6;
  cursor: wait;
}

.form-notice {
  font-size: 0.95rem;
  padding: 0.6rem 0.9rem;
  border-radius: 6px;
}

.form-notice.sent {
  background: rgba(90, 130, 90, 0.15);
  color: #3c5a3c;
}

.form-notice.failed {
  background: rgba(180, 60, 45, 0.12);
  color: #8c3424;
}

/* === Mobile menu ========================================================= */

.menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 44;
  background: rgba(28, 27, 25, 0.35);
}

.menu-panel {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 45;
  width: min(20rem, 80vw);
  background: var(--paper);
  border-left: 1px solid var(--line);
  padding: 4.5rem 1.5rem 1.5rem;
  transform: translateX(100%);
  transition: transform 0.25s ease;
}

.menu-panel.open {
  transform: translateX(0);
}

.menu-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.menu-link {
  border: none;
  background: transparent;
  font: inherit;
  font-size: 1.1rem;
  color: var(--ink);
  text-decoration: none;
  text-align: left;
  cursor: pointer;
}

.menu-link:hover {
  color: var(--accent);
}

/* === Archive ============================================================= */

.archive-list {
  max-width: 720px;
  margin: 0 auto;
  padding: 2.5rem 1.25rem 4rem;
}

.archive-title {
  font-size: 2rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.archive-lead {
  color: var(--ink-soft);
  margin-bottom: 2rem;
}

.archive-entries {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.archive-entry {
  display: flex;
  gap: 1rem;
  align-items: baseline;
  border-bottom: 1px solid var(--line);
  padding-bottom: 1rem;
}

.archive-year {
  color: var(--accent);
  font-size: 0.9rem;
  flex-shrink: 0;
}

.archive-note {
  color: var(--ink-soft);
  font-size: 0.9rem;
}

/* === Narrow viewports ==================================================== */

@media (max-width: 720px) {
  .nav-links {
    display: none;
  }

  .menu-btn {
    display: inline-flex;
    margin-left: auto;
  }

  .contact-btn span {
    display: none;
  }

  .hero {
    flex-direction: column;
    align-items: flex-start;
  }
}
"#;
