/// One value of an entity's status vocabulary together with its style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTag {
    pub label: &'static str,
    pub class: &'static str,
}

impl StatusTag {
    pub const fn new(label: &'static str, class: &'static str) -> Self {
        Self { label, class }
    }
}

/// Fixed, ordered set of status values for one entity.
///
/// The first tag is the lowest-severity value and doubles as the fallback
/// for statuses that are missing or not part of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVocabulary {
    tags: &'static [StatusTag],
}

impl StatusVocabulary {
    pub const fn new(tags: &'static [StatusTag]) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &'static [StatusTag] {
        self.tags
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.tags.iter().map(|t| t.label)
    }

    pub fn default_tag(&self) -> &'static StatusTag {
        &self.tags[0]
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, status: &str) -> Option<&'static StatusTag> {
        self.tags.iter().find(|t| t.label == status)
    }

    /// Style class for a status; unknown values get the default tag's class.
    pub fn classify(&self, status: &str) -> &'static StatusTag {
        self.find(status).unwrap_or_else(|| self.default_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &[StatusTag] = &[
        StatusTag::new("Pending", "pending"),
        StatusTag::new("Partial", "partial"),
        StatusTag::new("Complete", "done"),
    ];
    const VOCAB: StatusVocabulary = StatusVocabulary::new(TAGS);

    #[test]
    fn test_classify_known_status() {
        assert_eq!(VOCAB.classify("Complete").class, "done");
        assert_eq!(VOCAB.classify("Partial").class, "partial");
    }

    #[test]
    fn test_unknown_status_falls_back_to_first_tag() {
        assert_eq!(VOCAB.classify("complete").class, "pending");
        assert_eq!(VOCAB.classify("").class, "pending");
        assert!(VOCAB.find("complete").is_none());
    }
}
