use std::fmt;

/// Business intent bucket derived from the winning label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Actively shopping for software or tooling.
    High,
    /// Hiring or growing a team.
    Medium,
    /// Discussing trends or content with no purchase signal.
    Low,
    /// Off-topic, greeting, spam, or anything unrecognized.
    None,
}

impl Intent {
    /// Maps a winning label to an intent bucket.
    ///
    /// Trigger words are checked in fixed priority order and the first match
    /// wins: `shopping`, then `hiring`, then `discussing`. The test is a
    /// case-insensitive substring match, so minor phrasing drift in the label
    /// text still maps correctly as long as the trigger word survives.
    /// Labels with no trigger word fall through to [`Intent::None`].
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("shopping") {
            Intent::High
        } else if label.contains("hiring") {
            Intent::Medium
        } else if label.contains("discussing") {
            Intent::Low
        } else {
            Intent::None
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Intent::High => "HIGH INTENT",
            Intent::Medium => "MEDIUM INTENT",
            Intent::Low => "LOW INTENT",
            Intent::None => "NO INTENT",
        };
        write!(f, "{tag}")
    }
}

/// A candidate label and the intent bucket it stands for.
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    /// Label text sent to the model.
    pub label: String,
    /// Bucket the label represents.
    pub intent: Intent,
}

/// The ordered candidate-label set passed to the model on every request.
///
/// Immutable once constructed: the resolver sends the same labels, in the
/// same order, for every classification. The default taxonomy targets
/// HR-tech lead qualification.
#[derive(Debug, Clone)]
pub struct LabelTaxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl LabelTaxonomy {
    /// Creates a taxonomy from ordered entries. Must be non-empty.
    pub fn new(entries: Vec<TaxonomyEntry>) -> Self {
        Self { entries }
    }

    /// The entries in classification order.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub(crate) fn candidate_labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

impl Default for LabelTaxonomy {
    fn default() -> Self {
        let entry = |label: &str, intent| TaxonomyEntry {
            label: label.to_string(),
            intent,
        };
        Self::new(vec![
            entry("shopping for software or tools", Intent::High),
            entry("hiring employees or growing team", Intent::Medium),
            entry("discussing HR trends or articles", Intent::Low),
            entry("off-topic, greeting, hate, spam, personal", Intent::None),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_case_insensitive() {
        assert_eq!(
            Intent::from_label("SHOPPING FOR SOFTWARE OR TOOLS"),
            Intent::High
        );
        assert_eq!(Intent::from_label("Hiring Employees"), Intent::Medium);
        assert_eq!(Intent::from_label("DISCUSSING hr trends"), Intent::Low);
    }

    #[test]
    fn trigger_priority_is_fixed() {
        // First match wins even when several trigger words appear.
        assert_eq!(
            Intent::from_label("shopping while hiring and discussing"),
            Intent::High
        );
        assert_eq!(
            Intent::from_label("hiring while discussing trends"),
            Intent::Medium
        );
    }

    #[test]
    fn unrecognized_labels_fall_back_to_no_intent() {
        assert_eq!(
            Intent::from_label("off-topic, greeting, hate, spam, personal"),
            Intent::None
        );
        assert_eq!(Intent::from_label("completely novel phrasing"), Intent::None);
        assert_eq!(Intent::from_label(""), Intent::None);
    }

    #[test]
    fn display_matches_boundary_renderings() {
        assert_eq!(Intent::High.to_string(), "HIGH INTENT");
        assert_eq!(Intent::Medium.to_string(), "MEDIUM INTENT");
        assert_eq!(Intent::Low.to_string(), "LOW INTENT");
        assert_eq!(Intent::None.to_string(), "NO INTENT");
    }

    #[test]
    fn default_taxonomy_order_and_tags() {
        let taxonomy = LabelTaxonomy::default();
        let entries = taxonomy.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].label, "shopping for software or tools");
        assert_eq!(entries[0].intent, Intent::High);
        assert_eq!(entries[3].label, "off-topic, greeting, hate, spam, personal");
        assert_eq!(entries[3].intent, Intent::None);

        // Every default label maps back to the bucket it was tagged with.
        for entry in entries {
            assert_eq!(Intent::from_label(&entry.label), entry.intent);
        }
    }
}
