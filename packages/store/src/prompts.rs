//! # Prompt library — templates, themes, and layouts
//!
//! Fixed per-category prompt strings with a `{topic}` placeholder, plus the
//! composition rules that merge a free-text topic and up to three selectors
//! into the single string shipped to the generation API.
//!
//! Two compositions exist on purpose and serve different call sites:
//!
//! - [`combined_prompt`] feeds the generation request. Each selected category
//!   substitutes the *running* string into its template, so selections nest:
//!   template first, then theme, then layout.
//! - [`display_prompt`] populates the prompt field in the sidebar. It appends
//!   category descriptors (each built from the bare topic) to the running
//!   string instead of nesting, and falls back to "your topic" when the
//!   field is empty.
//!
//! Unknown selector names are ignored in both.

const TOPIC_TOKEN: &str = "{topic}";

const TEMPLATE_PROMPTS: &[(&str, &str)] = &[
    (
        "Business",
        "Create a professional business presentation about {topic}. Include sections for executive summary, market analysis, competitive landscape, strategy, implementation plan, and financial projections.",
    ),
    (
        "Creative",
        "Design a visually engaging and creative presentation about {topic}. Use metaphors, storytelling elements, and compelling visuals to create an inspiring narrative that captures imagination.",
    ),
    (
        "Education",
        "Develop an educational presentation about {topic} suitable for classroom or training environments. Structure it with clear learning objectives, key concepts, examples, practice opportunities, and assessment questions.",
    ),
    (
        "Minimal",
        "Create a clean, minimalist presentation about {topic} with concise text, ample white space, and only essential visuals. Focus on key messages with no more than 5 bullet points per slide.",
    ),
];

const THEME_PROMPTS: &[(&str, &str)] = &[
    (
        "Modern",
        "Create a modern presentation about {topic} with contemporary design elements, sleek typography, and a fresh color palette. Use clean lines, subtle gradients, and modern icons.",
    ),
    (
        "Classic",
        "Design a classic, timeless presentation about {topic} with traditional layouts, serif fonts, and elegant color schemes. Emphasize professionalism and sophistication.",
    ),
    (
        "Vibrant",
        "Build a vibrant, energetic presentation about {topic} with bold colors, dynamic layouts, and eye-catching visuals. Use high-contrast color combinations and lively graphics.",
    ),
    (
        "Minimal",
        "Create a minimalist presentation about {topic} with a clean, simple design, plenty of white space, and focused content. Use minimal colors and simple typography.",
    ),
    (
        "Bold",
        "Design a bold, impactful presentation about {topic} with strong visual hierarchy, powerful typography, and striking design elements. Make a strong statement with confident design choices.",
    ),
    (
        "Elegant",
        "Craft an elegant, refined presentation about {topic} with sophisticated design elements, graceful layouts, and a refined color palette. Focus on beauty and refinement.",
    ),
];

const LAYOUT_PROMPTS: &[(&str, &str)] = &[
    (
        "Full",
        "Create a full-bleed presentation about {topic} with content spanning edge to edge. Use immersive visuals and maximize the use of screen space for impactful delivery.",
    ),
    (
        "Split",
        "Design a split-screen presentation about {topic} with content divided into distinct sections. Balance text and visuals across the layout for clear communication.",
    ),
    (
        "Image Left",
        "Build a presentation about {topic} with images positioned on the left side of each slide. Place text content on the right for a balanced, visual-first approach.",
    ),
    (
        "Image Right",
        "Create a presentation about {topic} with images positioned on the right side of each slide. Place text content on the left for optimal readability and visual balance.",
    ),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, prompt)| *prompt)
}

/// Selector names offered by the sidebar, in display order.
pub fn template_names() -> Vec<&'static str> {
    TEMPLATE_PROMPTS.iter().map(|(name, _)| *name).collect()
}

pub fn theme_names() -> Vec<&'static str> {
    THEME_PROMPTS.iter().map(|(name, _)| *name).collect()
}

pub fn layout_names() -> Vec<&'static str> {
    LAYOUT_PROMPTS.iter().map(|(name, _)| *name).collect()
}

/// Compose the generation-request prompt. Selections nest in fixed order:
/// template, then theme, then layout. No selections returns the topic
/// unchanged.
pub fn combined_prompt(
    topic: &str,
    template: Option<&str>,
    theme: Option<&str>,
    layout: Option<&str>,
) -> String {
    let mut prompt = topic.to_string();

    if let Some(text) = template.and_then(|name| lookup(TEMPLATE_PROMPTS, name)) {
        prompt = text.replace(TOPIC_TOKEN, &prompt);
    }

    if let Some(name) = theme {
        if let Some(text) = lookup(THEME_PROMPTS, name) {
            let themed = text.replace(TOPIC_TOKEN, &prompt);
            prompt = format!(
                "{themed} Apply the {} theme throughout.",
                name.to_lowercase()
            );
        }
    }

    if let Some(name) = layout {
        if let Some(text) = lookup(LAYOUT_PROMPTS, name) {
            let laid_out = text.replace(TOPIC_TOKEN, &prompt);
            prompt = format!("{laid_out} Use the {} layout style.", name.to_lowercase());
        }
    }

    prompt
}

/// Compose the prompt-field preview string. Unlike [`combined_prompt`],
/// theme and layout descriptors are appended to the running string and each
/// is built from the bare topic, keeping the preview readable.
pub fn display_prompt(
    topic: &str,
    template: Option<&str>,
    theme: Option<&str>,
    layout: Option<&str>,
) -> String {
    let base_topic = if topic.is_empty() { "your topic" } else { topic };
    let mut prompt = base_topic.to_string();

    if let Some(text) = template.and_then(|name| lookup(TEMPLATE_PROMPTS, name)) {
        prompt = text.replace(TOPIC_TOKEN, &prompt);
    }

    if let Some(name) = theme {
        if let Some(text) = lookup(THEME_PROMPTS, name) {
            let desc = text.replace(TOPIC_TOKEN, base_topic);
            prompt = format!("{prompt} {desc} Apply {} theme.", name.to_lowercase());
        }
    }

    if let Some(name) = layout {
        if let Some(text) = lookup(LAYOUT_PROMPTS, name) {
            let desc = text.replace(TOPIC_TOKEN, base_topic);
            prompt = format!("{prompt} {desc} Use {} layout.", name.to_lowercase());
        }
    }

    prompt
}

/// Preview string for a single template selection.
pub fn prompt_for_template(topic: &str, template: &str) -> String {
    single(TEMPLATE_PROMPTS, topic, template)
}

/// Preview string for a single theme selection.
pub fn prompt_for_theme(topic: &str, theme: &str) -> String {
    single(THEME_PROMPTS, topic, theme)
}

/// Preview string for a single layout selection.
pub fn prompt_for_layout(topic: &str, layout: &str) -> String {
    single(LAYOUT_PROMPTS, topic, layout)
}

fn single(table: &[(&str, &'static str)], topic: &str, name: &str) -> String {
    let base_topic = if topic.is_empty() { "your topic" } else { topic };
    match lookup(table, name) {
        Some(text) => text.replace(TOPIC_TOKEN, base_topic),
        None => topic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selectors_returns_topic_unchanged() {
        assert_eq!(combined_prompt("Rust in prod", None, None, None), "Rust in prod");
    }

    #[test]
    fn test_template_substitutes_topic() {
        let prompt = combined_prompt("cats", Some("Minimal"), None, None);
        assert!(prompt.starts_with("Create a clean, minimalist presentation about cats"));
        assert!(!prompt.contains("{topic}"));
    }

    #[test]
    fn test_theme_nests_and_appends_suffix() {
        let prompt = combined_prompt("cats", Some("Business"), Some("Modern"), None);
        // The theme template wraps the already-templated string.
        assert!(prompt.starts_with("Create a modern presentation about Create a professional business presentation about cats"));
        assert!(prompt.ends_with("Apply the modern theme throughout."));
    }

    #[test]
    fn test_layout_applied_last() {
        let prompt = combined_prompt("cats", None, None, Some("Image Left"));
        assert!(prompt.starts_with("Build a presentation about cats"));
        assert!(prompt.ends_with("Use the image left layout style."));
    }

    #[test]
    fn test_unknown_selectors_ignored() {
        assert_eq!(
            combined_prompt("cats", Some("Nope"), Some("Nah"), Some("Never")),
            "cats"
        );
    }

    #[test]
    fn test_display_prompt_falls_back_to_placeholder_topic() {
        let prompt = display_prompt("", Some("Business"), None, None);
        assert!(prompt.contains("your topic"));
    }

    #[test]
    fn test_display_prompt_appends_instead_of_nesting() {
        let prompt = display_prompt("cats", None, Some("Bold"), None);
        assert!(prompt.starts_with("cats Design a bold, impactful presentation about cats"));
        assert!(prompt.ends_with("Apply bold theme."));
    }

    #[test]
    fn test_single_selector_preview() {
        let prompt = prompt_for_theme("", "Elegant");
        assert!(prompt.starts_with("Craft an elegant, refined presentation about your topic"));

        // Unknown names fall back to the raw topic.
        assert_eq!(prompt_for_layout("cats", "Diagonal"), "cats");
    }

    #[test]
    fn test_selector_tables_expose_names() {
        assert_eq!(template_names(), vec!["Business", "Creative", "Education", "Minimal"]);
        assert_eq!(layout_names().len(), 4);
        assert!(theme_names().contains(&"Vibrant"));
    }
}
