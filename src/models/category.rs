// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::page::PageAttributes;

/// Coarse website type guessed from title and body text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebsiteCategory {
    Blog,
    Ecommerce,
    Business,
    Portfolio,
    Informational,
}

impl WebsiteCategory {
    /// Classify a page by keyword presence.
    /// Checks run in a fixed order and the first match wins.
    pub fn classify(page: &PageAttributes) -> Self {
        let title = page.title.to_lowercase();
        let content = page.text_content.to_lowercase();

        if title.contains("blog") || content.contains("blog") {
            WebsiteCategory::Blog
        } else if title.contains("shop") || content.contains("buy") || content.contains("cart") {
            WebsiteCategory::Ecommerce
        } else if content.contains("about") && content.contains("contact") {
            WebsiteCategory::Business
        } else if title.contains("portfolio") || content.contains("portfolio") {
            WebsiteCategory::Portfolio
        } else {
            WebsiteCategory::Informational
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebsiteCategory::Blog => "blog or news website",
            WebsiteCategory::Ecommerce => "e-commerce website",
            WebsiteCategory::Business => "business or corporate website",
            WebsiteCategory::Portfolio => "portfolio website",
            WebsiteCategory::Informational => "informational website",
        }
    }
}

impl std::fmt::Display for WebsiteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, text: &str) -> PageAttributes {
        PageAttributes {
            title: title.to_string(),
            text_content: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blog_title() {
        assert_eq!(
            WebsiteCategory::classify(&page("My Blog", "welcome")),
            WebsiteCategory::Blog
        );
    }

    #[test]
    fn test_blog_wins_over_ecommerce() {
        assert_eq!(
            WebsiteCategory::classify(&page("Shop", "read our BLOG, add to cart")),
            WebsiteCategory::Blog
        );
    }

    #[test]
    fn test_ecommerce_keywords() {
        assert_eq!(
            WebsiteCategory::classify(&page("Acme SHOP", "")),
            WebsiteCategory::Ecommerce
        );
        assert_eq!(
            WebsiteCategory::classify(&page("Acme", "Buy now")),
            WebsiteCategory::Ecommerce
        );
        assert_eq!(
            WebsiteCategory::classify(&page("Acme", "view cart")),
            WebsiteCategory::Ecommerce
        );
    }

    #[test]
    fn test_shop_only_counts_in_title() {
        assert_eq!(
            WebsiteCategory::classify(&page("Acme", "visit the shop")),
            WebsiteCategory::Informational
        );
    }

    #[test]
    fn test_business_needs_about_and_contact() {
        assert_eq!(
            WebsiteCategory::classify(&page("Acme", "About us. Contact us.")),
            WebsiteCategory::Business
        );
        assert_eq!(
            WebsiteCategory::classify(&page("Acme", "About us.")),
            WebsiteCategory::Informational
        );
    }

    #[test]
    fn test_portfolio() {
        assert_eq!(
            WebsiteCategory::classify(&page("Jane Doe Portfolio", "")),
            WebsiteCategory::Portfolio
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(WebsiteCategory::Blog.to_string(), "blog or news website");
        assert_eq!(
            WebsiteCategory::Informational.to_string(),
            "informational website"
        );
    }
}
