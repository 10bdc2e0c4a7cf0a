//! Artifact classifier
//!
//! Assigns each storage key to at most one category via an ordered table of
//! substring predicates. The table replaces the per-page filter chains of
//! earlier mirror iterations with one shared precedence list, so rule order
//! and edge cases (e.g. a professional pre-release) stay auditable and
//! independently testable. The first matching rule wins; keys matching no
//! rule are unclassified and dropped from every group.

use serde::{Deserialize, Serialize};

/// Classification buckets, declared in evaluation-precedence order, which is
/// also the fixed output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Beta or alpha builds
    PreRelease,
    /// Paid-edition packages
    ProfessionalRelease,
    /// Community-edition packages
    CommunityRelease,
    /// Configuration files shipped alongside releases
    Configuration,
}

impl Category {
    /// All categories, in fixed precedence/output order
    pub const ALL: [Category; 4] = [
        Category::PreRelease,
        Category::ProfessionalRelease,
        Category::CommunityRelease,
        Category::Configuration,
    ];

    /// Human-readable section label for the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            Category::PreRelease => "Pre-Releases",
            Category::ProfessionalRelease => "Professional Releases",
            Category::CommunityRelease => "Releases",
            Category::Configuration => "Configs",
        }
    }

    /// Position in the fixed precedence/output order
    pub fn ordinal(self) -> usize {
        match self {
            Category::PreRelease => 0,
            Category::ProfessionalRelease => 1,
            Category::CommunityRelease => 2,
            Category::Configuration => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the precedence table
struct Rule {
    category: Category,
    /// At least one must be present (no constraint when empty)
    any_of: &'static [&'static str],
    /// All must be present
    all_of: &'static [&'static str],
    /// None may be present
    none_of: &'static [&'static str],
}

impl Rule {
    fn matches(&self, key: &str) -> bool {
        if !self.any_of.is_empty() && !self.any_of.iter().any(|s| key.contains(s)) {
            return false;
        }
        self.all_of.iter().all(|s| key.contains(s))
            && !self.none_of.iter().any(|s| key.contains(s))
    }
}

/// Ordered precedence table. "halo-1" marks the legacy 1.x line, excluded
/// from the browsable groups. The bare "v" exclusion on community releases
/// mirrors a legacy path-naming convention and is kept as a literal
/// predicate.
const RULES: &[Rule] = &[
    Rule {
        category: Category::PreRelease,
        any_of: &["beta", "alpha"],
        all_of: &[],
        none_of: &["halo-1"],
    },
    Rule {
        category: Category::ProfessionalRelease,
        any_of: &[],
        all_of: &["pro", "jar"],
        none_of: &[],
    },
    Rule {
        category: Category::CommunityRelease,
        any_of: &[],
        all_of: &["jar"],
        none_of: &["v", "halo-1"],
    },
    Rule {
        category: Category::Configuration,
        any_of: &[],
        all_of: &["config"],
        none_of: &[],
    },
];

/// The classifier
///
/// Pure and total: classification never fails, worst case returns `None`
/// (unclassified, dropped from output).
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a storage key. The first matching precedence rule wins, so a
    /// key lands in at most one category.
    pub fn classify(&self, key: &str) -> Option<Category> {
        RULES
            .iter()
            .find(|rule| rule.matches(key))
            .map(|rule| rule.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_community_release() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("halo-2.19.0.jar"),
            Some(Category::CommunityRelease)
        );
    }

    #[test]
    fn test_classify_professional_release() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("halo-pro-2.19.0.jar"),
            Some(Category::ProfessionalRelease)
        );
    }

    #[test]
    fn test_classify_beta_pre_release() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("halo-2.20.0-beta.1.jar"),
            Some(Category::PreRelease)
        );
    }

    #[test]
    fn test_classify_alpha_pre_release() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("halo-2.20.0-alpha.1.jar"),
            Some(Category::PreRelease)
        );
    }

    #[test]
    fn test_professional_pre_release_lands_in_pre_release() {
        // Pre-release takes precedence over the professional rule
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("halo-pro-2.19.0-beta.1.jar"),
            Some(Category::PreRelease)
        );
    }

    #[test]
    fn test_classify_configuration() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify("application-config.yaml"),
            Some(Category::Configuration)
        );
    }

    #[test]
    fn test_legacy_line_excluded_from_pre_release() {
        let classifier = Classifier::new();
        assert_ne!(
            classifier.classify("halo-1.6.0-beta.1.jar"),
            Some(Category::PreRelease)
        );
    }

    #[test]
    fn test_legacy_line_excluded_from_community() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("halo-1.6.0.jar"), None);
    }

    #[test]
    fn test_version_path_marker_excluded_from_community() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("v2/halo-2.19.0.jar"), None);
    }

    #[test]
    fn test_unclassified_key_returns_none() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("readme.txt"), None);
    }

    #[test]
    fn test_classification_deterministic() {
        let classifier = Classifier::new();
        let keys = [
            "halo-2.19.0.jar",
            "halo-pro-2.19.0.jar",
            "halo-2.20.0-beta.1.jar",
            "application-config.yaml",
            "readme.txt",
        ];
        for key in keys {
            assert_eq!(classifier.classify(key), classifier.classify(key));
        }
    }

    #[test]
    fn test_ordinal_matches_all_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.ordinal(), position);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::CommunityRelease.label(), "Releases");
        assert_eq!(Category::ProfessionalRelease.label(), "Professional Releases");
        assert_eq!(Category::PreRelease.label(), "Pre-Releases");
        assert_eq!(Category::Configuration.label(), "Configs");
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::ProfessionalRelease).unwrap();
        assert_eq!(json, "\"professional-release\"");
    }
}
