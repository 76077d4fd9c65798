pub mod config;
pub mod nav;
pub mod scroll;
pub mod section;
pub mod spy;
pub mod theme;

// string validation
//
// the site config is hand-edited, so we check the few fields that end up as hrefs
// before the page ever renders them.  these are deliberately loose -- they only need
// to catch typos, not enforce rfc compliance
pub const URL_REGEX: &str = r"^https?://[^\s/$.?#][^\s]*$";
pub const EMAIL_REGEX: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$";
pub const PHONE_REGEX: &str = r"^\+?[0-9][0-9 ()-]{5,19}$";
