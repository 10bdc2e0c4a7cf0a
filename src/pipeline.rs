//! Grouping pipeline
//!
//! Orchestrates the classifier and the version comparator: a flat listing
//! goes in, an ordered set of labeled groups comes out, ready for the
//! presentation layer. A run holds no state between invocations and never
//! mutates its input; identical listings always produce identical grouped
//! output.

use serde::Serialize;

use crate::classifier::{Category, Classifier};
use crate::listing::Artifact;
use crate::version::{compare_newest_first, VersionExtractor};

/// One labeled, version-ordered section of the grouped output
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Which bucket this is
    pub category: Category,
    /// Human-readable section label
    pub label: &'static str,
    /// Artifacts, newest first
    pub artifacts: Vec<Artifact>,
}

impl Group {
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Grouped output: one group per category, in fixed precedence order,
/// present even when empty
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct GroupedListing {
    groups: Vec<Group>,
}

impl GroupedListing {
    /// Groups in fixed category order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Artifacts for one category, newest first
    pub fn get(&self, category: Category) -> &[Artifact] {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.artifacts.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}

/// Turns a flat artifact listing into ordered, labeled groups
#[derive(Debug, Default)]
pub struct GroupingPipeline {
    classifier: Classifier,
    extractor: VersionExtractor,
}

impl GroupingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a listing
    ///
    /// Each artifact is classified once; unclassifiable artifacts are
    /// dropped. Surviving artifacts are partitioned per category preserving
    /// encounter order, then each group is stably sorted newest first by its
    /// extracted version, with the raw key deciding for artifacts that carry
    /// no parseable version.
    pub fn group(&self, artifacts: &[Artifact]) -> GroupedListing {
        let mut buckets: Vec<Vec<(Artifact, Option<String>)>> =
            Category::ALL.iter().map(|_| Vec::new()).collect();

        for artifact in artifacts {
            if let Some(category) = self.classifier.classify(&artifact.key) {
                let version = self.extractor.extract(&artifact.key);
                buckets[category.ordinal()].push((artifact.clone(), version));
            }
        }

        let groups = Category::ALL
            .iter()
            .zip(buckets)
            .map(|(&category, mut members)| {
                // Stable sort keeps encounter order for ties
                members.sort_by(|(a, a_version), (b, b_version)| {
                    compare_newest_first(
                        a_version.as_deref(),
                        b_version.as_deref(),
                        &a.key,
                        &b.key,
                    )
                });

                Group {
                    category,
                    label: category.label(),
                    artifacts: members.into_iter().map(|(artifact, _)| artifact).collect(),
                }
            })
            .collect();

        GroupedListing { groups }
    }
}
