//! Locale parity: Hindi and Telugu carry exactly the en-US message set, with
//! no duplicate ids and no variables the English message does not pass.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/agrigraud-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("hi-IN", include_str!("../i18n/hi-IN/agrigraud-ui.ftl")),
    ("te-IN", include_str!("../i18n/te-IN/agrigraud-ui.ftl")),
];

struct Bundle {
    messages: BTreeMap<String, BTreeSet<String>>,
    duplicates: Vec<String>,
}

fn parse(src: &str) -> Bundle {
    let mut messages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut duplicates = Vec::new();
    let mut current: Option<String> = None;

    for line in src.lines() {
        if line.starts_with(|c: char| c.is_ascii_lowercase()) {
            if let Some((id, _)) = line.split_once('=') {
                let id = id.trim().to_string();
                if messages.insert(id.clone(), BTreeSet::new()).is_some() {
                    duplicates.push(id.clone());
                }
                current = Some(id);
            }
        } else if line.starts_with('#') {
            current = None;
        }

        let Some(vars) = current.as_ref().and_then(|id| messages.get_mut(id)) else {
            continue;
        };
        for (i, _) in line.match_indices('$') {
            let name: String = line[i + 1..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            if !name.is_empty() {
                vars.insert(name);
            }
        }
    }

    Bundle {
        messages,
        duplicates,
    }
}

#[test]
fn locales_match_the_fallback_bundle() {
    let fallback = parse(EN_US);
    assert!(!fallback.messages.is_empty(), "en-US has no messages");
    assert!(
        fallback.duplicates.is_empty(),
        "en-US defines twice: {}",
        fallback.duplicates.join(", ")
    );

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let bundle = parse(src);

        if !bundle.duplicates.is_empty() {
            failures.push(format!("{locale} defines twice: {}", bundle.duplicates.join(", ")));
        }

        let missing: Vec<&str> = fallback
            .messages
            .keys()
            .filter(|id| !bundle.messages.contains_key(*id))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }

        let extra: Vec<&str> = bundle
            .messages
            .keys()
            .filter(|id| !fallback.messages.contains_key(*id))
            .map(String::as_str)
            .collect();
        if !extra.is_empty() {
            failures.push(format!("{locale} has unknown ids: {}", extra.join(", ")));
        }

        for (id, vars) in &bundle.messages {
            let Some(expected) = fallback.messages.get(id) else {
                continue;
            };
            let unknown: Vec<&str> = vars
                .difference(expected)
                .map(String::as_str)
                .collect();
            if !unknown.is_empty() {
                failures.push(format!("{locale} {id} uses unknown ${}", unknown.join(", $")));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn placeables_are_read_per_message() {
    let bundle = parse("a = { $x }\nb = { $y ->\n   *[other] { $y } z\n}\n# $ignored\nc = c\n");
    assert_eq!(bundle.messages["a"], BTreeSet::from(["x".to_string()]));
    assert_eq!(bundle.messages["b"], BTreeSet::from(["y".to_string()]));
    assert!(bundle.messages["c"].is_empty());
    assert!(bundle.duplicates.is_empty());

    let twice = parse("a = 1\na = 2\n");
    assert_eq!(twice.duplicates, vec!["a".to_string()]);
}
