//! Placeholder detection and substitution

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid pattern"));

/// Distinct placeholder names in `template`, sorted
pub fn find_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `recipient_name` -> `Recipient Name`
///
/// Underscores become spaces; a letter is capitalised when it does not
/// follow another letter, so `abc1def` reads `Abc1Def`.
pub fn readable_name(placeholder: &str) -> String {
    let mut prev_alpha = false;
    placeholder
        .chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .flat_map(|c| {
            let upper = !prev_alpha;
            prev_alpha = c.is_alphabetic();
            if upper {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Value used when the user leaves a placeholder blank
pub fn default_value(placeholder: &str) -> String {
    format!("[{}]", placeholder)
}

/// Replace every `{name}` that has an entry in `values`.
///
/// Values are inserted verbatim; placeholders without an entry are left alone.
pub fn fill_template(template: &str, values: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_find_placeholders_sorted_and_distinct() {
        let template = "Dear {recipient_name}, welcome to {company}! {company} loves {recipient_name}.";
        assert_eq!(find_placeholders(template), vec!["company", "recipient_name"]);
    }

    #[test]
    fn test_find_placeholders_ignores_non_words() {
        assert!(find_placeholders("no braces here").is_empty());
        assert!(find_placeholders("{} {with space} {dash-ed}").is_empty());
        assert_eq!(find_placeholders("{{skill_1}}"), vec!["skill_1"]);
    }

    #[test]
    fn test_readable_name() {
        assert_eq!(readable_name("recipient_name"), "Recipient Name");
        assert_eq!(readable_name("skill_1"), "Skill 1");
        assert_eq!(readable_name("EMAIL"), "Email");
        assert_eq!(readable_name("date"), "Date");
    }

    #[test]
    fn test_readable_name_word_boundaries() {
        assert_eq!(readable_name("abc1def"), "Abc1Def");
        assert_eq!(readable_name("a__b"), "A  B");
        assert_eq!(readable_name("mcDONALD_iii"), "Mcdonald Iii");
    }

    #[test]
    fn test_fill_template() {
        let filled = fill_template(
            "Hi {name}, see you at {place}. Bye {name}!",
            &values(&[("name", "Ada"), ("place", "the lab")]),
        );
        assert_eq!(filled, "Hi Ada, see you at the lab. Bye Ada!");
    }

    #[test]
    fn test_fill_template_is_verbatim() {
        let filled = fill_template("Total: {amount}", &values(&[("amount", "$1 {x}")]));
        assert_eq!(filled, "Total: $1 {x}");
    }

    #[test]
    fn test_fill_template_with_defaults() {
        let filled = fill_template("Dear {name},", &values(&[("name", &default_value("name"))]));
        assert_eq!(filled, "Dear [name],");
        assert_eq!(fill_template("{missing}", &BTreeMap::new()), "{missing}");
    }
}
