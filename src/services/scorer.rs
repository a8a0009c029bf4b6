// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Rule-based analysis used when the model's answer cannot be used.
//!
//! Everything here is a pure function of [`PageAttributes`]: no I/O, no
//! randomness, the same page always yields the same result.

use crate::models::analysis::{
    AiToolIntegration, AnalysisResult, Categories, CategoryScore, MetaAnalysis, MetaFieldAnalysis,
    Suggestion, ToolRecommendation,
};
use crate::models::category::WebsiteCategory;
use crate::models::page::PageAttributes;

const SLOW_LOAD_SECS: f64 = 3.0;
const VERY_SLOW_LOAD_SECS: f64 = 5.0;
const LARGE_PAGE_BYTES: usize = 1_000_000;
const THIN_CONTENT_CHARS: usize = 500;
const SEARCH_AI_MIN_LINKS: usize = 50;

const ENGAGING_KEYWORDS: [&str; 6] = ["best", "top", "guide", "how", "what", "why"];
const CALL_TO_ACTION_WORDS: [&str; 5] = ["learn", "discover", "get", "find", "explore"];

/// Produce a complete analysis from page attributes alone.
pub fn score_page(page: &PageAttributes) -> AnalysisResult {
    let category = WebsiteCategory::classify(page);

    AnalysisResult {
        overall_score: overall_score(page),
        content_summary: format!(
            "This website titled '{}' appears to be a {}. It has {} links and {} images.",
            page.title, category, page.links_count, page.images_count
        ),
        suggestions: suggestions(page),
        tools_recommended: recommended_tools(),
        meta_analysis: meta_analysis(page, category),
        ai_tools_integration: ai_tools(page, category),
        categories: category_scores(page),
    }
}

fn has_h1(page: &PageAttributes) -> bool {
    !page.headings.h1.is_empty()
}

/// 70 baseline, penalized for slowness, missing description and missing H1; within [40, 95].
pub fn overall_score(page: &PageAttributes) -> u32 {
    let mut score: i32 = 70;
    if page.load_time > VERY_SLOW_LOAD_SECS {
        score -= 10;
    }
    if page.description.is_empty() {
        score -= 5;
    }
    if !has_h1(page) {
        score -= 5;
    }
    clamp(score, 40, 95)
}

fn clamp(score: i32, min: i32, max: i32) -> u32 {
    score.clamp(min, max) as u32
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    words.iter().any(|word| lowered.contains(word))
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Suggestions and tools
// ---------------------------------------------------------------------------

fn suggestion(
    category: &str,
    title: &str,
    description: String,
    priority: &str,
    impact: &str,
    effort: &str,
) -> Suggestion {
    Suggestion {
        category: category.to_string(),
        title: title.to_string(),
        description,
        priority: priority.to_string(),
        impact: impact.to_string(),
        effort: effort.to_string(),
    }
}

pub fn suggestions(page: &PageAttributes) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if page.description.is_empty() {
        out.push(suggestion(
            "SEO",
            "Add Meta Description",
            "Your website is missing a meta description. Add a compelling 150-160 character description to improve search engine visibility.".to_string(),
            "High",
            "High",
            "Low",
        ));
    }

    if !has_h1(page) {
        out.push(suggestion(
            "SEO",
            "Add H1 Tag",
            "Your website is missing an H1 tag. Add a proper H1 tag to improve SEO and page structure.".to_string(),
            "High",
            "High",
            "Low",
        ));
    }

    if page.load_time > SLOW_LOAD_SECS {
        out.push(suggestion(
            "Performance",
            "Optimize Page Load Speed",
            format!(
                "Your page loads in {:.2} seconds. Optimize images and minify CSS/JS to improve performance.",
                page.load_time
            ),
            "High",
            "High",
            "Medium",
        ));
    }

    if page.page_size > LARGE_PAGE_BYTES {
        out.push(suggestion(
            "Performance",
            "Reduce Page Size",
            format!(
                "Your page size is {:.1}KB. Consider compressing images and optimizing resources.",
                page.page_size as f64 / 1024.0
            ),
            "Medium",
            "Medium",
            "Medium",
        ));
    }

    out.push(suggestion(
        "UX",
        "Improve User Experience",
        "Consider improving navigation, readability, and overall user experience based on user feedback and testing.".to_string(),
        "Medium",
        "Medium",
        "High",
    ));

    out
}

/// Same four tools for every page.
pub fn recommended_tools() -> Vec<ToolRecommendation> {
    [
        (
            "SEO",
            "Google Search Console",
            "Monitor search performance and identify SEO issues",
            "Track keyword rankings and fix crawl errors",
        ),
        (
            "Performance",
            "GTmetrix",
            "Analyze page speed and get optimization suggestions",
            "Identify performance bottlenecks and optimization opportunities",
        ),
        (
            "UX",
            "Google Analytics",
            "Track user behavior and identify UX issues",
            "Analyze user flow and identify drop-off points",
        ),
        (
            "Content",
            "Grammarly",
            "Improve content quality and readability",
            "Fix grammar and improve content clarity",
        ),
    ]
    .into_iter()
    .map(|(category, tool_name, description, use_case)| ToolRecommendation {
        category: category.to_string(),
        tool_name: tool_name.to_string(),
        description: description.to_string(),
        use_case: use_case.to_string(),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Meta analysis
// ---------------------------------------------------------------------------

fn field_analysis(length: usize, score: i32, issues: Vec<String>, advice: &str) -> MetaFieldAnalysis {
    MetaFieldAnalysis {
        length: u32::try_from(length).unwrap_or(u32::MAX),
        seo_score: clamp(score, 20, 100),
        issues: if issues.is_empty() {
            owned(&["No major issues detected"])
        } else {
            issues
        },
        suggestions: advice.to_string(),
    }
}

fn title_analysis(meta_title: &str) -> MetaFieldAnalysis {
    let length = meta_title.chars().count();
    let mut score = 80;
    let mut issues = Vec::new();

    if length > 60 {
        score -= 20;
        issues.push("Too long (over 60 characters)".to_string());
    } else if length < 30 {
        score -= 10;
        issues.push("Too short (under 30 characters)".to_string());
    }

    if !contains_any(meta_title, &ENGAGING_KEYWORDS) {
        issues.push("Missing engaging keywords".to_string());
    }

    field_analysis(
        length,
        score,
        issues,
        "Include primary keywords and keep under 60 characters for optimal display",
    )
}

fn description_analysis(meta_description: &str) -> MetaFieldAnalysis {
    let length = meta_description.chars().count();
    let mut score = 70;
    let mut issues = Vec::new();

    if length == 0 {
        score = 20;
        issues.push("Missing meta description".to_string());
    } else if length > 160 {
        score -= 20;
        issues.push("Too long (over 160 characters)".to_string());
    } else if length < 120 {
        score -= 10;
        issues.push("Too short (under 120 characters)".to_string());
    }

    if length > 0 && !contains_any(meta_description, &CALL_TO_ACTION_WORDS) {
        issues.push("Missing call-to-action words".to_string());
    }

    field_analysis(
        length,
        score,
        issues,
        "Include compelling call-to-action and keep between 120-160 characters",
    )
}

pub fn meta_analysis(page: &PageAttributes, category: WebsiteCategory) -> MetaAnalysis {
    let strategy = match category {
        WebsiteCategory::Ecommerce => {
            "E-commerce site focusing on product visibility and conversion optimization"
        }
        WebsiteCategory::Blog => "Content-focused strategy targeting informational keywords",
        WebsiteCategory::Business => "Local SEO and service-based keyword strategy",
        WebsiteCategory::Portfolio | WebsiteCategory::Informational => {
            "General informational content strategy"
        }
    };
    let mut insights = vec![strategy.to_string()];
    if !page.meta_description.is_empty() {
        insights.push("Uses meta descriptions to improve click-through rates".to_string());
    }

    let recommended_title = format!("Optimized {} - Key Benefits", page.title);
    let recommended_description = format!(
        "Discover {} and learn how we can help you achieve your goals. Get started today!",
        page.title
    );

    MetaAnalysis {
        current_meta_title: page.meta_title.clone(),
        current_meta_description: page.meta_description.clone(),
        meta_title_analysis: title_analysis(&page.meta_title),
        meta_description_analysis: description_analysis(&page.meta_description),
        seo_strategy_insights: insights,
        recommended_meta_title: truncate_chars(&recommended_title, 60),
        recommended_meta_description: truncate_chars(&recommended_description, 160),
    }
}

// ---------------------------------------------------------------------------
// AI tools
// ---------------------------------------------------------------------------

fn ai_tool(
    category: &str,
    tool_name: &str,
    description: &str,
    complexity: &str,
    impact: &str,
    use_case: &str,
    steps: &[&str],
) -> AiToolIntegration {
    AiToolIntegration {
        category: category.to_string(),
        tool_name: tool_name.to_string(),
        description: description.to_string(),
        integration_complexity: complexity.to_string(),
        expected_impact: impact.to_string(),
        use_case: use_case.to_string(),
        implementation_steps: owned(steps),
    }
}

/// The one tool tailored to the site's category
fn category_ai_tool(category: WebsiteCategory) -> AiToolIntegration {
    match category {
        WebsiteCategory::Ecommerce => ai_tool(
            "E-commerce",
            "Product Recommendation AI",
            "Smart product recommendations based on user behavior and purchase history",
            "Medium",
            "High",
            "Increase average order value by 25% with intelligent upselling",
            &[
                "Integrate with product catalog and user data",
                "Implement collaborative filtering algorithms",
                "Add recommendation widgets to product pages",
                "Monitor and optimize recommendation performance",
            ],
        ),
        WebsiteCategory::Blog => ai_tool(
            "Content",
            "AI Content Optimization",
            "Automated content optimization and SEO enhancement using AI",
            "Medium",
            "Medium",
            "Improve content quality and search rankings automatically",
            &[
                "Integrate with content management system",
                "Set up AI content analysis tools",
                "Implement automated SEO suggestions",
                "Monitor content performance metrics",
            ],
        ),
        WebsiteCategory::Business | WebsiteCategory::Portfolio | WebsiteCategory::Informational => {
            ai_tool(
                "Analytics",
                "Predictive Analytics Dashboard",
                "AI-powered analytics for predicting user behavior and business trends",
                "High",
                "High",
                "Predict user churn and optimize conversion funnels proactively",
                &[
                    "Set up comprehensive data collection",
                    "Implement machine learning prediction models",
                    "Create real-time analytics dashboard",
                    "Integrate with marketing automation tools",
                ],
            )
        }
    }
}

pub fn ai_tools(page: &PageAttributes, category: WebsiteCategory) -> Vec<AiToolIntegration> {
    let mut tools = vec![
        ai_tool(
            "Customer Support",
            "AI Chatbot Integration",
            "Implement AI-powered chatbot for instant customer support and FAQ assistance",
            "Medium",
            "High",
            "Reduce support tickets by 40% and provide 24/7 customer assistance",
            &[
                "Choose chatbot platform (Dialogflow, Microsoft Bot Framework, or Rasa)",
                "Train AI model with existing FAQ and support data",
                "Integrate with website using JavaScript widget",
                "Test and optimize conversation flows",
            ],
        ),
        ai_tool(
            "Personalization",
            "Content Personalization Engine",
            "AI-driven content recommendations based on user behavior and preferences",
            "High",
            "High",
            "Increase user engagement by 30% through personalized content delivery",
            &[
                "Implement user tracking and behavior analytics",
                "Set up machine learning recommendation system",
                "Create dynamic content delivery system",
                "A/B test personalization strategies",
            ],
        ),
    ];

    tools.push(category_ai_tool(category));

    if page.links_count > SEARCH_AI_MIN_LINKS {
        tools.push(ai_tool(
            "Search",
            "AI-Powered Site Search",
            "Intelligent search with natural language processing and semantic understanding",
            "Medium",
            "Medium",
            "Improve search accuracy by 60% and reduce bounce rate from search results",
            &[
                "Implement search indexing system",
                "Integrate NLP capabilities (Elasticsearch or Algolia)",
                "Add search analytics and autocomplete",
                "Optimize search results ranking with AI",
            ],
        ));
    }

    tools
}

// ---------------------------------------------------------------------------
// Category scores
// ---------------------------------------------------------------------------

fn category_score(score: i32, issues: Vec<String>, no_issues: &str) -> CategoryScore {
    CategoryScore {
        score: clamp(score, 30, 100),
        key_issues: if issues.is_empty() {
            vec![no_issues.to_string()]
        } else {
            issues
        },
    }
}

pub fn category_scores(page: &PageAttributes) -> Categories {
    let h1_count = page.headings.h1.len();

    let mut seo = 70;
    let mut seo_issues = Vec::new();
    if page.description.is_empty() {
        seo -= 15;
        seo_issues.push("Missing meta description".to_string());
    }
    if h1_count == 0 {
        seo -= 10;
        seo_issues.push("Missing H1 tag".to_string());
    }
    if h1_count > 1 {
        seo -= 5;
        seo_issues.push("Multiple H1 tags".to_string());
    }

    let mut performance = 80;
    let mut performance_issues = Vec::new();
    if page.load_time > SLOW_LOAD_SECS {
        performance -= 20;
        performance_issues.push("Slow page load time".to_string());
    }
    if page.page_size > LARGE_PAGE_BYTES {
        performance -= 15;
        performance_issues.push("Large page size".to_string());
    }

    let mut content = 70;
    let mut content_issues = Vec::new();
    if page.text_content.chars().count() < THIN_CONTENT_CHARS {
        content -= 10;
        content_issues.push("Thin content".to_string());
    }
    if page.description.is_empty() {
        content -= 5;
        content_issues.push("Missing content description".to_string());
    }

    let mut technical = 75;
    let mut technical_issues = Vec::new();
    if page.url.starts_with("http://") {
        technical -= 15;
        technical_issues.push("Not using HTTPS".to_string());
    }

    Categories {
        seo: category_score(seo, seo_issues, "No major SEO issues detected"),
        performance: category_score(
            performance,
            performance_issues,
            "No major performance issues detected",
        ),
        ux: CategoryScore {
            score: 75,
            key_issues: owned(&[
                "Navigation assessment needed",
                "Mobile responsiveness check needed",
            ]),
        },
        content: category_score(content, content_issues, "Content quality appears adequate"),
        technical: category_score(
            technical,
            technical_issues,
            "No major technical issues detected",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::Headings;

    /// A page that trips no penalty at all
    fn healthy_page() -> PageAttributes {
        PageAttributes {
            url: "https://acme.test/".to_string(),
            title: "Acme Widgets".to_string(),
            description: "Widgets for every workshop.".to_string(),
            meta_title: "The Best Guide to Buying Industrial Widgets".to_string(),
            meta_description: "Widgets for every workshop.".to_string(),
            headings: Headings {
                h1: vec!["Acme".to_string()],
                ..Default::default()
            },
            links_count: 10,
            images_count: 4,
            text_content: "y".repeat(600),
            page_size: 50_000,
            load_time: 0.4,
            status_code: 200,
            ..Default::default()
        }
    }

    fn worst_page() -> PageAttributes {
        PageAttributes {
            url: "http://slow.test/".to_string(),
            title: "x".repeat(100),
            load_time: 12.0,
            page_size: 5_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_overall_score_baseline() {
        assert_eq!(overall_score(&healthy_page()), 70);
    }

    #[test]
    fn test_overall_score_penalties() {
        let page = PageAttributes {
            load_time: 6.0,
            ..healthy_page()
        };
        assert_eq!(overall_score(&page), 60);
        assert_eq!(overall_score(&worst_page()), 50);
    }

    #[test]
    fn test_scores_stay_in_range() {
        for page in [healthy_page(), worst_page(), PageAttributes::default()] {
            let result = score_page(&page);
            assert!((40..=95).contains(&result.overall_score));
            let categories = &result.categories;
            for category in [
                &categories.seo,
                &categories.performance,
                &categories.ux,
                &categories.content,
                &categories.technical,
            ] {
                assert!((30..=100).contains(&category.score));
                assert!(!category.key_issues.is_empty());
            }
        }
    }

    #[test]
    fn test_missing_description_lowers_seo_score() {
        let with = healthy_page();
        let without = PageAttributes {
            description: String::new(),
            ..healthy_page()
        };
        let with_score = category_scores(&with).seo.score;
        let without_score = category_scores(&without).seo.score;
        assert!(without_score < with_score);
        assert_eq!(with_score - without_score, 15);
    }

    #[test]
    fn test_seo_h1_rules() {
        let none = PageAttributes {
            headings: Headings::default(),
            ..healthy_page()
        };
        let many = PageAttributes {
            headings: Headings {
                h1: vec!["a".to_string(), "b".to_string()],
                ..Default::default()
            },
            ..healthy_page()
        };
        assert_eq!(category_scores(&healthy_page()).seo.score, 70);
        assert_eq!(
            category_scores(&healthy_page()).seo.key_issues,
            vec!["No major SEO issues detected"]
        );
        assert_eq!(category_scores(&none).seo.score, 60);
        assert_eq!(category_scores(&many).seo.score, 65);
        assert_eq!(category_scores(&many).seo.key_issues, vec!["Multiple H1 tags"]);
    }

    #[test]
    fn test_performance_and_technical_penalties() {
        let categories = category_scores(&worst_page());
        assert_eq!(categories.performance.score, 45);
        assert_eq!(
            categories.performance.key_issues,
            vec!["Slow page load time", "Large page size"]
        );
        assert_eq!(categories.technical.score, 60);
        assert_eq!(categories.technical.key_issues, vec!["Not using HTTPS"]);
        assert_eq!(categories.content.score, 55);
        assert_eq!(categories.ux.score, 75);
    }

    #[test]
    fn test_meta_title_baseline_for_good_title() {
        let title = "How to pick the right widget for your shop!";
        let padded = format!("{}{}", title, "!".repeat(45 - title.chars().count()));
        assert_eq!(padded.chars().count(), 45);
        let analysis = title_analysis(&padded);
        assert_eq!(analysis.seo_score, 80);
        assert_eq!(analysis.length, 45);
        assert_eq!(analysis.issues, vec!["No major issues detected"]);
    }

    #[test]
    fn test_meta_title_too_long_and_short() {
        let long = title_analysis(&"best ".repeat(15));
        assert_eq!(long.seo_score, 60);
        assert_eq!(long.issues, vec!["Too long (over 60 characters)"]);

        let short = title_analysis("Acme");
        assert_eq!(short.seo_score, 70);
        assert_eq!(
            short.issues,
            vec!["Too short (under 30 characters)", "Missing engaging keywords"]
        );
    }

    #[test]
    fn test_meta_description_rules() {
        let missing = description_analysis("");
        assert_eq!(missing.seo_score, 20);
        assert_eq!(missing.issues, vec!["Missing meta description"]);

        let short = description_analysis("Quality tools.");
        assert_eq!(short.seo_score, 60);
        assert_eq!(
            short.issues,
            vec!["Too short (under 120 characters)", "Missing call-to-action words"]
        );

        let long = description_analysis(&"Discover ".repeat(20));
        assert_eq!(long.seo_score, 50);
        assert_eq!(long.issues, vec!["Too long (over 160 characters)"]);

        let good = description_analysis(&format!("Explore {}", "w".repeat(130)));
        assert_eq!(good.seo_score, 70);
        assert_eq!(good.issues, vec!["No major issues detected"]);
    }

    #[test]
    fn test_recommended_meta_is_truncated() {
        let page = worst_page();
        let meta = meta_analysis(&page, WebsiteCategory::classify(&page));
        assert_eq!(meta.recommended_meta_title.chars().count(), 60);
        assert_eq!(meta.recommended_meta_description.chars().count(), 160);
        assert!(meta.recommended_meta_title.starts_with("Optimized x"));
    }

    #[test]
    fn test_strategy_insights() {
        let page = healthy_page();
        let meta = meta_analysis(&page, WebsiteCategory::Ecommerce);
        assert_eq!(
            meta.seo_strategy_insights,
            vec![
                "E-commerce site focusing on product visibility and conversion optimization",
                "Uses meta descriptions to improve click-through rates",
            ]
        );

        let bare = PageAttributes::default();
        let meta = meta_analysis(&bare, WebsiteCategory::Portfolio);
        assert_eq!(
            meta.seo_strategy_insights,
            vec!["General informational content strategy"]
        );
    }

    #[test]
    fn test_suggestions_for_healthy_page() {
        let suggestions = suggestions(&healthy_page());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Improve User Experience");
    }

    #[test]
    fn test_suggestions_interpolate_numbers() {
        let page = PageAttributes {
            load_time: 4.256,
            page_size: 2_048_000,
            ..worst_page()
        };
        let suggestions = suggestions(&page);
        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Add Meta Description",
                "Add H1 Tag",
                "Optimize Page Load Speed",
                "Reduce Page Size",
                "Improve User Experience",
            ]
        );
        assert!(suggestions[2].description.contains("loads in 4.26 seconds"));
        assert!(suggestions[3].description.contains("size is 2000.0KB"));
    }

    #[test]
    fn test_tools_are_fixed() {
        let tools = recommended_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.tool_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Google Search Console", "GTmetrix", "Google Analytics", "Grammarly"]
        );
    }

    #[test]
    fn test_blog_page_gets_content_optimization() {
        let page = PageAttributes {
            title: "My Blog".to_string(),
            links_count: 10,
            ..Default::default()
        };
        let category = WebsiteCategory::classify(&page);
        assert_eq!(category, WebsiteCategory::Blog);
        let tools = ai_tools(&page, category);
        let names: Vec<&str> = tools.iter().map(|t| t.tool_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "AI Chatbot Integration",
                "Content Personalization Engine",
                "AI Content Optimization",
            ]
        );
    }

    #[test]
    fn test_search_ai_needs_many_links() {
        let many = PageAttributes {
            title: "My Blog".to_string(),
            links_count: 80,
            ..Default::default()
        };
        let few = PageAttributes {
            links_count: 10,
            ..many.clone()
        };
        let boundary = PageAttributes {
            links_count: 50,
            ..many.clone()
        };
        let has_search = |page: &PageAttributes| {
            score_page(page)
                .ai_tools_integration
                .iter()
                .any(|t| t.tool_name == "AI-Powered Site Search")
        };
        assert!(has_search(&many));
        assert!(!has_search(&few));
        assert!(!has_search(&boundary));
    }

    #[test]
    fn test_content_summary() {
        let result = score_page(&PageAttributes {
            title: "My Blog".to_string(),
            links_count: 3,
            images_count: 2,
            ..Default::default()
        });
        assert_eq!(
            result.content_summary,
            "This website titled 'My Blog' appears to be a blog or news website. It has 3 links and 2 images."
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let page = healthy_page();
        let first = serde_json::to_string(&score_page(&page)).unwrap();
        let second = serde_json::to_string(&score_page(&page)).unwrap();
        assert_eq!(first, second);
    }
}
