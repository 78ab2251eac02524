//! Property-based tests for the transformation pipeline.

use proptest::prelude::*;
use svgcomp_transform::options::DEFAULT_REMOVED_ATTRIBUTES;
use svgcomp_transform::stages::normalize::collapse_whitespace;
use svgcomp_transform::{transform, ComponentName, TransformOptions};

fn run(source: &str) -> String {
    let name = ComponentName::new("Icon").unwrap();
    transform(source, &name, &TransformOptions::default()).expect("transform to succeed")
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

proptest! {
    #[test]
    fn whitespace_collapse_is_idempotent(input in "[ a-z<>/\t\r\n]{0,64}") {
        let once = collapse_whitespace(&input);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn removed_attributes_never_survive(
        index in 0..DEFAULT_REMOVED_ATTRIBUTES.len(),
        value in "[a-z0-9 :/.;-]{0,16}",
        on_root in any::<bool>(),
    ) {
        let attribute = DEFAULT_REMOVED_ATTRIBUTES[index];
        let source = if on_root {
            format!(r#"<svg {}="{}" width="1"><path d="M0"/></svg>"#, attribute, value)
        } else {
            format!(r#"<svg width="1"><path {}="{}" d="M0"/></svg>"#, attribute, value)
        };
        let output = run(&source);
        let needle = format!(" {}=\"", attribute);
        prop_assert!(!output.contains(&needle));
    }

    #[test]
    fn tags_are_capitalized_in_pairs(name in "[a-z][a-zA-Z]{0,8}") {
        prop_assume!(!name.eq_ignore_ascii_case("title"));
        let source = format!(r#"<svg><{0} fill="none"></{0}></svg>"#, name);
        let output = run(&source);
        let tag = capitalized(&name);
        let opening = format!("<{} fill=\"none\">", tag);
        let closing = format!("</{}>", tag);
        prop_assert!(output.contains(&opening));
        prop_assert!(output.contains(&closing));
    }

    #[test]
    fn props_are_spread_on_the_root_only(children in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let body: String = children.iter().map(|c| format!("<{} x=\"1\"/>", c)).collect();
        let output = run(&format!("<svg viewBox=\"0 0 1 1\">{}</svg>", body));
        prop_assert_eq!(output.matches("{...props}").count(), 1);
        let line = output.lines().find(|l| l.contains("{...props}")).unwrap();
        prop_assert!(line.trim_start().starts_with("<Svg viewBox"));
    }

    #[test]
    fn closing_lines_align_with_their_opening(chain in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        prop_assume!(chain.iter().all(|c| c != "title" && c != "svg"));
        let mut source = String::from("<svg>");
        for name in &chain {
            source.push_str(&format!("<{} k=\"v\">", name));
        }
        source.push_str("<path d=\"M0\"/>");
        for name in chain.iter().rev() {
            source.push_str(&format!("</{}>", name));
        }
        source.push_str("</svg>");

        let output = run(&source);
        let mut open = Vec::new();
        for line in output.lines().filter(|l| l.trim_start().starts_with('<')) {
            let trimmed = line.trim_start();
            if trimmed.starts_with("</") {
                let expected = open.pop().expect("closing tag has an opening partner");
                prop_assert_eq!(leading_spaces(line), expected);
            } else if trimmed.ends_with("/>") {
                let parent = *open.last().expect("self-closing tag has a parent");
                prop_assert_eq!(leading_spaces(line), parent + 2);
            } else {
                if let Some(parent) = open.last() {
                    prop_assert_eq!(leading_spaces(line), parent + 2);
                }
                open.push(leading_spaces(line));
            }
        }
        prop_assert!(open.is_empty());
    }
}
