//! The model boundary: zero-shot scoring of text against candidate labels.
//!
//! Everything above this module treats the classifier as an opaque scoring
//! function `(text, labels, exclusive) -> ranked (label, score)`. The
//! [`ZeroShotClassifier`] trait is that function; [`ModernBertClassifier`]
//! is the Candle-backed implementation that runs a pretrained NLI checkpoint
//! locally.
//!
//! ```rust,no_run
//! use lead_intent::classifier::{
//!     DeviceRequest, ModernBertClassifier, ModernBertSize, Precision, ZeroShotClassifier,
//! };
//!
//! # fn main() -> lead_intent::error::Result<()> {
//! let classifier =
//!     ModernBertClassifier::load(ModernBertSize::Base, DeviceRequest::Cpu, Precision::Full)?;
//!
//! let scores = classifier.score("I love my new car", &["cars", "cooking"], true)?;
//! println!("{}: {:.2}", scores[0].0, scores[0].1);
//! # Ok(())
//! # }
//! ```

mod device;
mod model;
mod modernbert;

pub use device::{DeviceRequest, Precision};
pub use model::{LabelScores, ZeroShotClassifier};
pub use modernbert::{ModernBertClassifier, ModernBertSize};
