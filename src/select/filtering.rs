//! Search filtering for the option list.
//!
//! Options are matched against the search text after both sides are
//! normalized (trimmed and lower-cased). Membership checks, by contrast, use
//! exact case-sensitive comparison of the trimmed search text.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// How the search text is matched against options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The normalized option contains the normalized search text.
    #[default]
    Substring,
    /// Skim-style fuzzy matching, ignoring case.
    Fuzzy,
}

/// Trims and lower-cases `text` for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns the options passing the search predicate, in their original order.
///
/// An empty (or whitespace-only) search matches everything.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::{filter_options, MatchMode};
///
/// let options = vec!["Blue".to_string(), "Red".to_string()];
/// let filtered = filter_options(&options, " blue ", MatchMode::Substring);
/// assert_eq!(filtered, vec!["Blue".to_string()]);
/// ```
pub fn filter_options(options: &[String], search: &str, mode: MatchMode) -> Vec<String> {
    let needle = normalize(search);
    if needle.is_empty() {
        return options.to_vec();
    }

    match mode {
        MatchMode::Substring => options
            .iter()
            .filter(|option| normalize(option).contains(&needle))
            .cloned()
            .collect(),
        MatchMode::Fuzzy => {
            let matcher = SkimMatcherV2::default().ignore_case();
            options
                .iter()
                .filter(|option| matcher.fuzzy_match(&normalize(option), &needle).is_some())
                .cloned()
                .collect()
        }
    }
}

/// Inputs of the add-new eligibility rule.
#[derive(Debug, Clone, Copy)]
pub(super) struct AddNewRule {
    pub allow_add_new: bool,
    pub require_empty_filter: bool,
}

impl AddNewRule {
    /// Whether `search` may be offered as a new option.
    ///
    /// `search` is expected trimmed; `acceptable` reports the outcome of the
    /// configured validators for the candidate.
    pub fn eligible(
        &self,
        search: &str,
        master: &[String],
        filtered: &[String],
        acceptable: bool,
    ) -> bool {
        self.allow_add_new
            && !search.is_empty()
            && !master.iter().any(|option| option == search)
            && (!self.require_empty_filter || filtered.is_empty())
            && acceptable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  BlUe "), "blue");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let o = opts(&["Red", "Blue", "Green"]);
        assert_eq!(filter_options(&o, "", MatchMode::Substring), o);
        assert_eq!(filter_options(&o, "   ", MatchMode::Fuzzy), o);
    }

    #[test]
    fn test_substring_is_case_insensitive_and_ordered() {
        let o = opts(&["Red", "Green", "Gray", "Teal"]);
        assert_eq!(
            filter_options(&o, "E", MatchMode::Substring),
            opts(&["Red", "Green", "Teal"])
        );
        assert_eq!(filter_options(&o, "gr", MatchMode::Substring), opts(&["Green", "Gray"]));
    }

    #[test]
    fn test_substring_requires_contiguous_match() {
        let o = opts(&["Navi Mumbai", "Nagpur"]);
        assert_eq!(filter_options(&o, "nmb", MatchMode::Substring), Vec::<String>::new());
    }

    #[test]
    fn test_fuzzy_matches_scattered_characters() {
        let o = opts(&["Navi Mumbai", "Nagpur"]);
        assert_eq!(filter_options(&o, "nmb", MatchMode::Fuzzy), opts(&["Navi Mumbai"]));
    }

    #[test]
    fn test_filtered_is_subset_containing_needle() {
        let o = opts(&["Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Ahmedabad"]);
        for search in ["a", "bad", "DEL", " hy ", "zzz"] {
            let f = filter_options(&o, search, MatchMode::Substring);
            for item in &f {
                assert!(o.contains(item));
                assert!(normalize(item).contains(&normalize(search)));
            }
        }
    }

    #[test]
    fn test_add_new_strict_rule() {
        let rule = AddNewRule {
            allow_add_new: true,
            require_empty_filter: true,
        };
        let master = opts(&["Red", "Blue"]);
        assert!(rule.eligible("Teal", &master, &[], true));
        assert!(!rule.eligible("Re", &master, &opts(&["Red"]), true));
        assert!(!rule.eligible("Red", &master, &[], true));
        assert!(!rule.eligible("", &master, &[], true));
        assert!(!rule.eligible("Teal", &master, &[], false));
    }

    #[test]
    fn test_add_new_permissive_rule() {
        let rule = AddNewRule {
            allow_add_new: true,
            require_empty_filter: false,
        };
        let master = opts(&["Red", "Blue"]);
        assert!(rule.eligible("Re", &master, &opts(&["Red"]), true));
        // Membership is case-sensitive.
        assert!(rule.eligible("red", &master, &opts(&["Red"]), true));
    }

    #[test]
    fn test_add_new_disabled() {
        let rule = AddNewRule {
            allow_add_new: false,
            require_empty_filter: false,
        };
        assert!(!rule.eligible("Teal", &[], &[], true));
    }
}
