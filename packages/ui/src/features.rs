use dioxus::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "Describe, don't design",
        "Type what the presentation is about and let the generator handle structure, copy, and visuals.",
    ),
    (
        "Templates, themes, layouts",
        "Steer the result with business, creative, educational, or minimal templates and a range of themes and layouts.",
    ),
    (
        "Export to PowerPoint",
        "Download a finished .pptx file and preview it right in the browser before you share it.",
    ),
];

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section {
            id: "features",
            class: "features",
            h2 { class: "section-title", "Everything you need to present" }
            div {
                class: "features-grid",
                for feature in FEATURES.iter() {
                    div {
                        key: "{feature.0}",
                        class: "feature-card",
                        h3 { "{feature.0}" }
                        p { "{feature.1}" }
                    }
                }
            }
        }
    }
}
