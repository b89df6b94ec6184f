//! Placeholder substitution for case descriptions.
//!
//! `"#input->#output"` with fixture `{"input": "foo", "output": "bar"}`
//! renders as `"foo->bar"`. Fields are applied in the fixture's insertion
//! order, each one replacing every occurrence of its placeholder in the string
//! produced by the previous field. A field is applied once, so its rendered
//! value is not rescanned for its own placeholder. Placeholders naming absent
//! fields are left verbatim.

use crate::config::DEFAULT_PLACEHOLDER_PREFIX;
use crate::fixture::{render_value, Fixture};

/// Render `template` against `fixture` using the `#` prefix.
pub fn render_description(template: &str, fixture: &Fixture) -> String {
    render_description_with_prefix(template, fixture, DEFAULT_PLACEHOLDER_PREFIX)
}

pub fn render_description_with_prefix(template: &str, fixture: &Fixture, prefix: &str) -> String {
    fixture
        .fields()
        .fold(template.to_string(), |description, (key, value)| {
            let placeholder = format!("{prefix}{key}");
            if description.contains(&placeholder) {
                description.replace(&placeholder, &render_value(value))
            } else {
                description
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture(value: serde_json::Value) -> Fixture {
        Fixture::new(value)
    }

    #[test]
    fn test_replaces_each_field() {
        let rendered = render_description(
            "testFn applied to #input should return #output",
            &fixture(json!({"input": "foo", "output": "bar"})),
        );
        assert_eq!(rendered, "testFn applied to foo should return bar");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let rendered = render_description("#x + #x = #y", &fixture(json!({"x": 2, "y": 4})));
        assert_eq!(rendered, "2 + 2 = 4");
    }

    #[test]
    fn test_absent_fields_stay_verbatim() {
        let rendered = render_description("#present and #absent", &fixture(json!({"present": 1})));
        assert_eq!(rendered, "1 and #absent");
    }

    #[test]
    fn test_unused_fields_are_ignored() {
        let rendered = render_description("plain", &fixture(json!({"unused": 1})));
        assert_eq!(rendered, "plain");
    }

    #[test]
    fn test_scalar_fixture_leaves_template_untouched() {
        let rendered = render_description("a description #x", &fixture(json!(3)));
        assert_eq!(rendered, "a description #x");
    }

    #[test]
    fn test_value_is_not_rescanned_for_its_own_placeholder() {
        let rendered = render_description("#a", &fixture(json!({"a": "#a#a"})));
        assert_eq!(rendered, "#a#a");
    }

    #[test]
    fn test_later_fields_see_earlier_substitutions() {
        // `a` inserts a `#b` token which the later `b` field then fills.
        let rendered = render_description("#a", &fixture(json!({"a": "#b", "b": "done"})));
        assert_eq!(rendered, "done");

        // With the order reversed, `b` runs first and the inserted token survives.
        let rendered = render_description("#a", &fixture(json!({"b": "done", "a": "#b"})));
        assert_eq!(rendered, "#b");
    }

    #[test]
    fn test_non_string_values_use_canonical_text() {
        let rendered = render_description(
            "#n #f #ok #none #list",
            &fixture(json!({"n": 1, "f": 0.5, "ok": false, "none": null, "list": [1, 2]})),
        );
        assert_eq!(rendered, "1 0.5 false null [1,2]");
    }

    #[test]
    fn test_custom_prefix() {
        let rendered =
            render_description_with_prefix("{{x}} but #x", &fixture(json!({"x": 7})), "{{");
        assert_eq!(rendered, "7}} but #x");

        let rendered = render_description_with_prefix("$x and #x", &fixture(json!({"x": 7})), "$");
        assert_eq!(rendered, "7 and #x");
    }
}
