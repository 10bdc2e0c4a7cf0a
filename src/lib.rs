//! Halo download-mirror index engine
//!
//! This crate turns a flat object-storage listing (artifact key + byte size)
//! into a fixed set of labeled, version-ordered groups for human browsing:
//! community releases, professional releases, pre-releases, and configuration
//! files. The engine is pure computation: an ordered substring rule table
//! classifies each key, a tolerant pattern pulls the version out of package
//! filenames, and groups sort newest-first with a deterministic fallback for
//! keys that carry no version.

pub mod classifier;
pub mod listing;
pub mod pipeline;
pub mod version;

pub use classifier::{Category, Classifier};
pub use listing::{decode, Artifact, MalformedInputError};
pub use pipeline::{Group, GroupedListing, GroupingPipeline};
pub use version::{compare_newest_first, VersionExtractor};
