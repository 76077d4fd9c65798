use constcat::concat;

mod components;
mod page;

pub use components::BASE_COMPONENTS;
pub use page::PAGE_STYLES;

// colors come from the active theme (see common::theme::Theme::css_variables),
// everything here only refers to the custom properties
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: auto;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  color: var(--accent);
}
"#,
    BASE_COMPONENTS,
    r#"
/* Header and navigation */
.site-header {
  position: fixed;
  top: 0;
  width: 100%;
  background-color: var(--header);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
  z-index: 50;
}

.nav-container {
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: 1280px;
  margin: 0 auto;
  padding: 16px 24px;
}

.brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--accent);
}

.nav-links {
  display: flex;
  gap: 24px;
  list-style: none;
  font-size: 0.875rem;
}

.nav-link {
  cursor: pointer;
  transition: color 150ms ease;
}

.nav-link.active {
  color: var(--accent);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text);
  font-size: 1.5rem;
  cursor: pointer;
}

.compact-menu {
  display: none;
  flex-direction: column;
  gap: 16px;
  list-style: none;
  background-color: var(--surface);
  padding: 16px 24px;
  font-size: 0.875rem;
}

.compact-menu .nav-link {
  display: block;
}

@media (max-width: 767px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: block;
  }

  .compact-menu.open {
    display: flex;
  }
}
"#,
    PAGE_STYLES
);
