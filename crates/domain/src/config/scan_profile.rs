use std::collections::BTreeSet;

/// Plain/script source extensions counted with the function heuristic.
pub const CODE_EXTENSIONS: [&str; 4] = ["java", "js", "jss", "lss"];
/// Extension counted as plain text under the `other` language.
pub const PLAIN_EXTENSION: &str = "properties";
/// File names always routed to the structural counter, whatever their extension.
pub const MARKUP_FILE_NAMES: [&str; 1] = ["database.properties"];
/// Extensions ending with this marker are never counted.
pub const METADATA_SUFFIX: &str = "metadata";

/// A keyword searched for in code lines and the category it counts towards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    needle: String,
    category: String,
}

impl KeywordRule {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self { needle: keyword.to_lowercase(), category: category.to_string() }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Read-only configuration shared by every counter during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanProfile {
    markup_extensions: BTreeSet<String>,
    code_bearing_tags: BTreeSet<String>,
    keywords: Vec<KeywordRule>,
}

impl ScanProfile {
    pub fn new<M, C, K>(markup_extensions: M, code_bearing_tags: C, keywords: K) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        K: IntoIterator<Item = KeywordRule>,
    {
        Self {
            markup_extensions: markup_extensions.into_iter().map(Into::into).collect(),
            code_bearing_tags: code_bearing_tags.into_iter().map(Into::into).collect(),
            keywords: keywords.into_iter().collect(),
        }
    }

    pub fn is_markup_extension(&self, extension: &str) -> bool {
        self.markup_extensions.contains(extension)
    }

    pub fn is_markup_file_name(&self, name: &str) -> bool {
        MARKUP_FILE_NAMES.contains(&name)
    }

    pub fn is_code_extension(&self, extension: &str) -> bool {
        CODE_EXTENSIONS.contains(&extension)
    }

    pub fn is_plain_extension(&self, extension: &str) -> bool {
        extension == PLAIN_EXTENSION
    }

    pub fn is_code_bearing(&self, node_name: &str) -> bool {
        self.code_bearing_tags.contains(node_name)
    }

    /// Categories whose keyword occurs anywhere in `line` (raw substring match).
    ///
    /// `line` is expected to be lower-cased already. Yields one category per matching
    /// keyword, so a category appears twice when two of its keywords match.
    pub fn categories_in<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keywords
            .iter()
            .filter(move |rule| line.contains(rule.needle()))
            .map(KeywordRule::category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ScanProfile {
        ScanProfile::new(
            ["form", "view"],
            ["lotusscript", "formula"],
            [
                KeywordRule::new("GetDocumentByKey", "lookup"),
                KeywordRule::new("@DbLookup", "lookup"),
                KeywordRule::new("send", "mail"),
            ],
        )
    }

    #[test]
    fn keyword_match_is_substring_and_case_folded() {
        let p = profile();
        let hits: Vec<_> = p.categories_in("set doc = view.getdocumentbykey(key)").collect();
        assert_eq!(hits, vec!["lookup"]);
    }

    #[test]
    fn one_line_can_hit_several_categories() {
        let p = profile();
        let hits: Vec<_> = p.categories_in("call memo.send(false) ' after getdocumentbykey").collect();
        assert_eq!(hits, vec!["lookup", "mail"]);
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        let p = profile();
        assert_eq!(p.categories_in("resend = true").count(), 1);
    }

    #[test]
    fn routing_sets() {
        let p = profile();
        assert!(p.is_markup_extension("form"));
        assert!(!p.is_markup_extension("java"));
        assert!(p.is_markup_file_name("database.properties"));
        assert!(p.is_code_extension("lss"));
        assert!(p.is_plain_extension("properties"));
        assert!(p.is_code_bearing("formula"));
        assert!(!p.is_code_bearing("field"));
    }
}
