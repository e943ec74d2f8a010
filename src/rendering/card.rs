use crate::constants::*;
use crate::dom::{Document, Element};
use crate::options::{Action, SnackInstanceOptions};

/// Elements of a freshly built snackbar, not yet attached or wired
#[derive(Debug)]
pub struct Card {
    pub root: Element,
    pub container: Element,
    /// One button per action, in action order
    pub buttons: Vec<(Element, Action)>,
}

/// Build the element tree for a snackbar
///
/// Theme colors become inline overrides only where the theme sets them.
/// Buttons get the theme's action color first, then their own overrides.
pub fn build_card(document: &Document, message: &str, options: &SnackInstanceOptions) -> Card {
    let root = document.create_element("div");
    root.set_class_name(SNACKBAR_CLASS);
    root.set_attribute(ARIA_LIVE, "assertive");
    root.set_attribute(ARIA_ATOMIC, "true");
    root.set_attribute(ARIA_HIDDEN, "false");
    if let Some(animation) = document.dismiss_animation() {
        root.set_style("animation", &animation);
    }

    let theme = &options.theme;
    let container = document.create_element("div");
    container.set_class_name(CONTAINER_CLASS);
    if let Some(background) = &theme.background_color {
        container.set_style("background-color", background);
    }
    if let Some(color) = &theme.text_color {
        container.set_style("color", color);
    }
    if let Some(shadow) = &theme.box_shadow {
        container.set_style("box-shadow", shadow);
    }
    root.append_child(&container);

    let text = document.create_element("div");
    text.set_class_name(TEXT_CLASS);
    text.set_text(message);
    container.append_child(&text);

    let buttons = options
        .actions
        .iter()
        .map(|action| {
            let button = document.create_element("button");
            button.set_class_name(BUTTON_CLASS);
            button.set_text(&action.text);
            if let Some(color) = &theme.action_color {
                button.set_style("color", color);
            }
            for (property, value) in action.style.iter() {
                button.set_style(property.css_name(), value);
            }
            container.append_child(&button);
            (button, action.clone())
        })
        .collect();

    Card {
        root,
        container,
        buttons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SnackOptions;
    use snackbars_config::SnackbarsConfig;
    use snackbars_util::{StyleProperty, ThemeRules};

    fn resolve(options: SnackOptions) -> SnackInstanceOptions {
        options.resolve(&SnackbarsConfig::default())
    }

    #[test]
    fn test_card_structure_and_aria() {
        let document = Document::new();
        let card = build_card(&document, "Saved", &resolve(SnackOptions::new()));

        assert_eq!(card.root.class_name(), "snackbar");
        assert_eq!(card.root.attribute("aria-live").as_deref(), Some("assertive"));
        assert_eq!(card.root.attribute("aria-atomic").as_deref(), Some("true"));
        assert_eq!(card.root.attribute("aria-hidden").as_deref(), Some("false"));

        let text = card.root.find_by_class("snackbar--text").unwrap();
        assert_eq!(text.text(), "Saved");

        assert_eq!(card.buttons.len(), 1);
        assert_eq!(card.buttons[0].0.text(), "dismiss");
        assert_eq!(card.buttons[0].0.class_name(), "snackbar--button");
        assert_eq!(card.root.animation_event(), None);
    }

    #[test]
    fn test_dark_theme_sets_no_inline_colors() {
        let document = Document::new();
        let card = build_card(&document, "x", &resolve(SnackOptions::new()));

        assert_eq!(card.container.style("background-color"), None);
        assert_eq!(card.container.style("color"), None);
        assert_eq!(card.container.style("box-shadow"), None);
        assert_eq!(card.buttons[0].0.style("color"), None);
    }

    #[test]
    fn test_light_theme_colors() {
        let document = Document::new();
        let card = build_card(&document, "x", &resolve(SnackOptions::new().theme("light")));

        assert_eq!(card.container.style("background-color").as_deref(), Some("#fff"));
        assert_eq!(card.container.style("color").as_deref(), Some("#000"));
        assert_eq!(card.buttons[0].0.style("color").as_deref(), Some("#008000"));
    }

    #[test]
    fn test_action_style_overrides_theme_color() {
        let document = Document::new();
        let action = Action::new("undo")
            .try_style(StyleProperty::Color, "red")
            .unwrap()
            .try_style(StyleProperty::FontWeight, "bold")
            .unwrap();
        let theme = ThemeRules {
            action_color: Some("gold".to_string()),
            box_shadow: Some("none".to_string()),
            ..Default::default()
        };
        let options = resolve(SnackOptions::new().theme(theme).action(action));
        let card = build_card(&document, "x", &options);

        let button = &card.buttons[0].0;
        assert_eq!(button.style("color").as_deref(), Some("red"));
        assert_eq!(button.style("font-weight").as_deref(), Some("bold"));
        assert_eq!(card.container.style("box-shadow").as_deref(), Some("none"));
    }

    #[test]
    fn test_buttons_follow_action_order() {
        let document = Document::new();
        let options = resolve(
            SnackOptions::new()
                .action(Action::new("undo"))
                .action(Action::new("close")),
        );
        let card = build_card(&document, "x", &options);
        let labels: Vec<String> = card.buttons.iter().map(|(b, _)| b.text()).collect();
        assert_eq!(labels, vec!["undo", "close"]);
        assert_eq!(card.container.children().len(), 3);
    }

    #[test]
    fn test_document_animation_applied() {
        let document = Document::with_dismiss_animation("snackbar-out 0.3s");
        let card = build_card(&document, "x", &resolve(SnackOptions::new()));
        assert!(card.root.animation_event().is_some());
    }
}
