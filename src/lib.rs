//! Zero-shot lead-intent detection for free-text messages.
//!
//! Powered by [Candle](https://github.com/huggingface/candle): a pretrained
//! NLI checkpoint scores each message against a fixed label taxonomy, and the
//! winning label is mapped to a business intent bucket (high, medium, low, or
//! no intent). The model is acquired once per process and reused across
//! requests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lead_intent::classifier::ModernBertSize;
//! use lead_intent::intent::IntentResolverBuilder;
//!
//! # fn main() -> lead_intent::error::Result<()> {
//! let resolver = IntentResolverBuilder::modernbert(ModernBertSize::Base).build();
//! resolver.initialize()?;
//!
//! let outcome = resolver.classify("Looking to buy payroll software")?;
//! println!(
//!     "{} ({}) via \"{}\"",
//!     outcome.intent,
//!     outcome.confidence_percent(),
//!     outcome.matched_label
//! );
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod stats;

// ============ Public API ============

pub mod classifier;
pub mod error;
pub mod intent;
