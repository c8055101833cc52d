//! Lead-intent resolution on top of the zero-shot model boundary.
//!
//! An [`IntentResolver`] owns one lazily-acquired classifier handle and a
//! fixed [`LabelTaxonomy`]. Each request scores the input text against the
//! taxonomy's labels (mutually exclusive probabilities) and maps the winning
//! label to an [`Intent`] bucket by trigger word.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lead_intent::classifier::ModernBertSize;
//! use lead_intent::intent::{Intent, IntentResolverBuilder};
//!
//! # fn main() -> lead_intent::error::Result<()> {
//! let resolver = IntentResolverBuilder::modernbert(ModernBertSize::Base)
//!     .cuda(0)
//!     .build();
//!
//! // Eager load so a broken environment fails at startup, not mid-traffic.
//! resolver.initialize()?;
//!
//! let outcome = resolver.classify("We are recruiting a data analyst")?;
//! assert_eq!(outcome.intent, Intent::Medium);
//! for p in &outcome.ranking {
//!     println!("{}: {:.4}", p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom backends
//!
//! The resolver is generic over [`ZeroShotClassifier`](crate::classifier::ZeroShotClassifier);
//! [`IntentResolver::with_loader`] accepts any loader closure, which is also
//! the seam tests use to substitute stub classifiers.

mod resolver;
mod taxonomy;

pub use crate::stats::ClassifyStats;
pub use resolver::{IntentMatch, IntentResolver, IntentResolverBuilder, Prediction};
pub use taxonomy::{Intent, LabelTaxonomy, TaxonomyEntry};
