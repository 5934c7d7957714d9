//! Gravatar image tag helper.

use md5::{Digest, Md5};
use minijinja::HtmlEscape;

use crate::config::{AVATAR_CSS_CLASS, DEFAULT_AVATAR_SIZE, GRAVATAR_BASE_URL, GRAVATAR_DEFAULT_IMAGE};

/// Builds Gravatar `<img>` tags.
///
/// The email is hashed exactly as given: no trimming or lower-casing.
#[derive(Debug, Clone, Copy)]
pub struct GravatarHelper {
    default_size: u32,
}

impl Default for GravatarHelper {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_SIZE)
    }
}

impl GravatarHelper {
    /// Create a helper using `default_size` when no size is requested
    pub fn new(default_size: u32) -> Self {
        Self { default_size }
    }

    /// Render an avatar image tag for `email`.
    ///
    /// ```
    /// use admin_panel::utils::GravatarHelper;
    ///
    /// let tag = GravatarHelper::default().process("test@example.com", None);
    /// assert!(tag.contains("s=40&d=identicon"));
    /// ```
    pub fn process(&self, email: &str, size: Option<u32>) -> String {
        format!(
            r#"<img class="{}" src="{}" alt="{}">"#,
            AVATAR_CSS_CLASS,
            self.avatar_url(email, size),
            HtmlEscape(email)
        )
    }

    /// Gravatar image URL for `email`
    pub fn avatar_url(&self, email: &str, size: Option<u32>) -> String {
        format!(
            "{}{}?s={}&d={}",
            GRAVATAR_BASE_URL,
            hash_email(email),
            size.unwrap_or(self.default_size),
            GRAVATAR_DEFAULT_IMAGE
        )
    }
}

/// MD5 digest of the email as 32 lowercase hex characters
pub fn hash_email(email: &str) -> String {
    format!("{:x}", Md5::digest(email.as_bytes()))
}
