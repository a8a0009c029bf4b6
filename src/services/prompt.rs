// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Renders page attributes into the instruction sent to the model.

use crate::models::page::PageAttributes;

/// System message sent alongside every analysis prompt
pub const SYSTEM_INSTRUCTION: &str = "You are a website analysis expert. Return only valid JSON responses in the exact format requested, with no additional text before or after the JSON.";

/// Characters of page text included in the prompt
const CONTENT_SAMPLE_CHARS: usize = 2_000;

/// H2 headings included in the prompt
const MAX_H2_HEADINGS: usize = 5;

/// Example response shape embedded in the prompt. Placeholder content only:
/// the fallback scorer builds its own lists.
const RESPONSE_EXAMPLE: &str = r#"{
    "overall_score": 75,
    "content_summary": "Brief 2-3 sentence summary of what this website does and its main purpose",
    "suggestions": [
        {
            "category": "SEO",
            "title": "Improve Meta Description",
            "description": "Add compelling meta descriptions to improve search engine visibility",
            "priority": "High",
            "impact": "High",
            "effort": "Low"
        },
        {
            "category": "Performance",
            "title": "Optimize Page Load Speed",
            "description": "Reduce page load time by compressing images and minifying CSS/JS",
            "priority": "High",
            "impact": "High",
            "effort": "Medium"
        },
        {
            "category": "UX",
            "title": "Improve Navigation",
            "description": "Make navigation more intuitive and user-friendly",
            "priority": "Medium",
            "impact": "Medium",
            "effort": "Medium"
        },
        {
            "category": "Content",
            "title": "Enhance Content Quality",
            "description": "Improve content clarity and add more valuable information",
            "priority": "Medium",
            "impact": "Medium",
            "effort": "High"
        },
        {
            "category": "Technical",
            "title": "Fix Technical Issues",
            "description": "Address any technical issues found on the website",
            "priority": "High",
            "impact": "High",
            "effort": "Medium"
        }
    ],
    "tools_recommended": [
        {
            "category": "SEO",
            "tool_name": "Google Search Console",
            "description": "Monitor search performance and fix SEO issues",
            "use_case": "Track keyword rankings and crawl errors"
        },
        {
            "category": "Performance",
            "tool_name": "GTmetrix",
            "description": "Analyze page speed and get optimization suggestions",
            "use_case": "Identify performance bottlenecks and optimization opportunities"
        },
        {
            "category": "UX",
            "tool_name": "Google Analytics",
            "description": "Track user behavior and identify UX issues",
            "use_case": "Analyze user flow and identify drop-off points"
        },
        {
            "category": "Content",
            "tool_name": "Grammarly",
            "description": "Improve content quality and readability",
            "use_case": "Fix grammar and improve content clarity"
        }
    ],
    "meta_analysis": {
        "current_meta_title": "Current meta title from the website",
        "current_meta_description": "Current meta description from the website",
        "meta_title_analysis": {
            "length": 60,
            "seo_score": 75,
            "issues": ["Too long", "Missing keywords"],
            "suggestions": "Make it more concise and include primary keywords"
        },
        "meta_description_analysis": {
            "length": 155,
            "seo_score": 80,
            "issues": ["Missing call-to-action"],
            "suggestions": "Add a compelling call-to-action at the end"
        },
        "seo_strategy_insights": [
            "This website focuses on informational content targeting long-tail keywords",
            "The meta descriptions are optimized for click-through rates",
            "Primary keyword strategy appears to be around [specific topic]"
        ],
        "recommended_meta_title": "Optimized Meta Title Example - Brand Name",
        "recommended_meta_description": "Optimized meta description example that includes primary keywords and compelling call-to-action within 155 characters."
    },
    "ai_tools_integration": [
        {
            "category": "Customer Support",
            "tool_name": "Chatbot Integration",
            "description": "AI-powered chatbot for instant customer support",
            "integration_complexity": "Medium",
            "expected_impact": "High",
            "use_case": "Reduce support tickets by 40% and improve response times",
            "implementation_steps": [
                "Choose chatbot platform (Intercom, Zendesk, or custom)",
                "Train AI model with FAQ data",
                "Integrate with existing support systems",
                "Test and optimize responses"
            ]
        },
        {
            "category": "Personalization",
            "tool_name": "Content Personalization Engine",
            "description": "AI-driven content personalization based on user behavior",
            "integration_complexity": "High",
            "expected_impact": "High",
            "use_case": "Increase engagement by 30% through personalized content",
            "implementation_steps": [
                "Implement user tracking and analytics",
                "Set up machine learning models",
                "Create dynamic content system",
                "A/B test personalization strategies"
            ]
        },
        {
            "category": "Search",
            "tool_name": "Intelligent Search",
            "description": "AI-powered search with natural language processing",
            "integration_complexity": "Medium",
            "expected_impact": "Medium",
            "use_case": "Improve search accuracy and user experience",
            "implementation_steps": [
                "Implement search indexing system",
                "Integrate NLP capabilities",
                "Add search analytics",
                "Optimize search results ranking"
            ]
        },
        {
            "category": "Analytics",
            "tool_name": "Predictive Analytics",
            "description": "AI-powered analytics for predicting user behavior",
            "integration_complexity": "High",
            "expected_impact": "High",
            "use_case": "Predict user churn and optimize conversion funnels",
            "implementation_steps": [
                "Set up comprehensive data collection",
                "Implement machine learning models",
                "Create prediction dashboards",
                "Integrate with marketing automation"
            ]
        }
    ],
    "categories": {
        "seo": {
            "score": 78,
            "key_issues": ["Missing meta description", "Poor heading structure"]
        },
        "performance": {
            "score": 65,
            "key_issues": ["Slow page load", "Large image sizes"]
        },
        "ux": {
            "score": 72,
            "key_issues": ["Poor navigation", "Low mobile responsiveness"]
        },
        "content": {
            "score": 80,
            "key_issues": ["Thin content", "Poor readability"]
        },
        "technical": {
            "score": 75,
            "key_issues": ["Missing SSL", "Broken links"]
        }
    }
}"#;

/// Render the analysis prompt for a page.
pub fn build_analysis_prompt(page: &PageAttributes) -> String {
    let h2: Vec<&String> = page.headings.h2.iter().take(MAX_H2_HEADINGS).collect();
    let meta_tags = serde_json::to_string_pretty(&page.meta_tags).unwrap_or_else(|_| "{}".into());
    let content_sample: String = page.text_content.chars().take(CONTENT_SAMPLE_CHARS).collect();
    let canonical = if page.canonical_url.is_empty() {
        "Not found"
    } else {
        page.canonical_url.as_str()
    };

    format!(
        "You are a professional website analysis expert. Analyze the following website and provide specific, actionable improvement recommendations including meta title/description analysis and AI tool integration suggestions.

Website Details:
- URL: {url}
- Page Title: {title}
- Meta Title: {meta_title}
- Meta Description: {meta_description}
- Page Size: {page_size} bytes
- Load Time: {load_time} seconds
- H1 Tags: {h1:?}
- H2 Tags: {h2:?}
- Links: {links} links
- Images: {images} images
- Canonical URL: {canonical}
- Schema Data: {schema} structured data items
- Meta Tags: {meta_tags}

Content Sample: {content_sample}

IMPORTANT: Return ONLY valid JSON in the exact format below. Do not include any text before or after the JSON.

{example}

Provide specific analysis of the actual meta title and description from the website. Analyze their SEO strategy based on the meta tags and content. Recommend relevant AI tools that would specifically benefit this type of website.
",
        url = page.url,
        title = page.title,
        meta_title = page.meta_title,
        meta_description = page.meta_description,
        page_size = page.page_size,
        load_time = page.load_time,
        h1 = page.headings.h1,
        h2 = h2,
        links = page.links_count,
        images = page.images_count,
        canonical = canonical,
        schema = page.schema_data.len(),
        meta_tags = meta_tags,
        content_sample = content_sample,
        example = RESPONSE_EXAMPLE,
    )
}
