//! Prompt-style rendering of component listings.

use crate::docs::ComponentMeta;

const LIST_PREAMBLE: [&str; 3] = [
    "You are given a task to integrate an existing React component in the codebase.",
    "Here are the available components:",
    "",
];

/// Renders `metas` as the text handed to a model choosing a component.
pub fn format_component_list(metas: &[ComponentMeta]) -> String {
    let mut lines: Vec<String> = LIST_PREAMBLE.iter().map(|l| l.to_string()).collect();
    lines.extend(
        metas
            .iter()
            .map(|meta| format!("- `{}` - {}", meta.name, meta.description)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_component_list() {
        let metas = vec![
            ComponentMeta::new("Button", "Clickable button"),
            ComponentMeta::new("Input", "Text entry"),
        ];

        let text = format_component_list(&metas);

        assert_eq!(
            text,
            "You are given a task to integrate an existing React component in the codebase.\n\
             Here are the available components:\n\
             \n\
             - `Button` - Clickable button\n\
             - `Input` - Text entry"
        );
    }

    #[test]
    fn test_format_empty_list() {
        let text = format_component_list(&[]);
        assert!(text.ends_with("Here are the available components:\n"));
    }
}
