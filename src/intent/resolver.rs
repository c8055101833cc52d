use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use once_cell::sync::OnceCell;

use super::taxonomy::{Intent, LabelTaxonomy};
use crate::classifier::{
    DeviceRequest, LabelScores, ModernBertClassifier, ModernBertSize, Precision,
    ZeroShotClassifier,
};
use crate::error::{IntentError, Result};
use crate::stats::ClassifyStats;

// ============ Output types ============

/// A label with confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Label name.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Result of resolving one text: the bucket, the evidence, and timing.
#[derive(Debug)]
pub struct IntentMatch {
    /// The resolved intent bucket.
    pub intent: Intent,
    /// Confidence of the winning label (0.0 to 1.0).
    pub confidence: f32,
    /// The literal winning label text.
    pub matched_label: String,
    /// All labels ranked by confidence.
    pub ranking: Vec<Prediction>,
    /// Execution statistics.
    pub stats: ClassifyStats,
}

impl IntentMatch {
    /// Confidence rendered for display, e.g. `"82.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

type Loader<C> = Box<dyn FnOnce() -> Result<C> + Send>;

// ============ Resolver ============

/// Resolves free text to an [`Intent`] bucket through a lazily-acquired
/// zero-shot classifier.
///
/// The classifier is acquired at most once per resolver: the first
/// [`initialize`](Self::initialize) or [`classify`](Self::classify) call runs
/// the loader (concurrent callers wait rather than loading twice), and every
/// later call reuses the handle. If loading fails the resolver is terminally
/// unavailable and every call reports
/// [`ResourceUnavailable`](IntentError::ResourceUnavailable); per-request
/// failures leave it fully usable.
///
/// Construct with [`IntentResolverBuilder`], or with
/// [`Self::with_loader`] for a custom backend.
pub struct IntentResolver<C = ModernBertClassifier> {
    classifier: OnceCell<Arc<Mutex<C>>>,
    loader: Mutex<Option<Loader<C>>>,
    taxonomy: LabelTaxonomy,
    timeout: Option<Duration>,
}

impl<C> IntentResolver<C>
where
    C: ZeroShotClassifier + Send + 'static,
{
    /// Creates a resolver backed by a custom classifier loader.
    ///
    /// The loader runs at most once, on first use. Uses the default taxonomy
    /// and no timeout; see [`Self::with_taxonomy`] and [`Self::with_timeout`].
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: FnOnce() -> Result<C> + Send + 'static,
    {
        Self {
            classifier: OnceCell::new(),
            loader: Mutex::new(Some(Box::new(loader))),
            taxonomy: LabelTaxonomy::default(),
            timeout: None,
        }
    }

    /// Replaces the label taxonomy. Only meaningful before the first request.
    pub fn with_taxonomy(mut self, taxonomy: LabelTaxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Bounds every scoring call.
    ///
    /// On expiry the request fails with [`IntentError::Inference`]. The
    /// stalled worker keeps the classifier lock until its call returns, so
    /// later requests may block for the remainder of the stall.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The taxonomy used for every request.
    pub fn taxonomy(&self) -> &LabelTaxonomy {
        &self.taxonomy
    }

    /// Acquires the classifier now instead of on the first request.
    ///
    /// Idempotent: repeated calls return without re-acquiring.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::ResourceUnavailable`] if the classifier cannot
    /// be loaded. This is fatal: the resolver never retries.
    pub fn initialize(&self) -> Result<()> {
        self.handle().map(|_| ())
    }

    /// Classifies `text` against the taxonomy and resolves the intent bucket.
    ///
    /// The input is trimmed first; blank input fails
    /// [`IntentError::InvalidInput`] without touching (or loading) the model.
    /// Scoring is mutually exclusive: the returned ranking's scores sum
    /// to 1.0. Calls against the shared classifier are serialized.
    ///
    /// # Errors
    ///
    /// [`IntentError::InvalidInput`] for blank text,
    /// [`IntentError::ResourceUnavailable`] if the classifier never loaded,
    /// and a request-scoped error if this single scoring call fails.
    pub fn classify(&self, text: &str) -> Result<IntentMatch> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IntentError::InvalidInput(
                "input text is empty after trimming; provide non-blank text".into(),
            ));
        }

        let stats = ClassifyStats::start();
        let classifier = self.handle()?;
        let scores = self.score_ranked(classifier, text)?;

        let ranking: Vec<Prediction> = scores
            .into_iter()
            .map(|(label, score)| Prediction { label, score })
            .collect();
        let top = ranking.first().cloned().ok_or_else(|| {
            IntentError::Unexpected("classifier returned no predictions".into())
        })?;

        Ok(IntentMatch {
            intent: Intent::from_label(&top.label),
            confidence: top.score,
            matched_label: top.label,
            ranking,
            stats: stats.finish(),
        })
    }

    fn handle(&self) -> Result<Arc<Mutex<C>>> {
        self.classifier
            .get_or_try_init(|| {
                let loader = self.loader.lock().unwrap().take().ok_or_else(|| {
                    IntentError::ResourceUnavailable(
                        "classifier failed to load earlier; restart the process to retry".into(),
                    )
                })?;
                let classifier = loader().map_err(|e| {
                    IntentError::ResourceUnavailable(format!("failed to load classifier: {e}"))
                })?;
                tracing::debug!("classifier handle acquired");
                Ok(Arc::new(Mutex::new(classifier)))
            })
            .map(Arc::clone)
    }

    fn score_ranked(&self, classifier: Arc<Mutex<C>>, text: &str) -> Result<LabelScores> {
        match self.timeout {
            None => {
                let labels = self.taxonomy.candidate_labels();
                classifier.lock().unwrap().score(text, &labels, true)
            }
            Some(limit) => {
                let text = text.to_string();
                let labels: Vec<String> = self
                    .taxonomy
                    .candidate_labels()
                    .into_iter()
                    .map(str::to_string)
                    .collect();

                let (tx, rx) = mpsc::channel();
                thread::spawn(move || {
                    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
                    let result = classifier.lock().unwrap().score(&text, &refs, true);
                    let _ = tx.send(result);
                });

                match rx.recv_timeout(limit) {
                    Ok(result) => result,
                    Err(_) => Err(IntentError::Inference(format!(
                        "classification timed out after {}ms",
                        limit.as_millis()
                    ))),
                }
            }
        }
    }
}

// ============ Builder ============

/// Builder for creating [`IntentResolver`] instances backed by a ModernBERT
/// zero-shot checkpoint.
///
/// Use [`Self::modernbert`] as the entry point. Building is cheap: the model
/// itself loads lazily on first use (or eagerly via
/// [`IntentResolver::initialize`]).
///
/// # Examples
///
/// ```rust,no_run
/// use lead_intent::classifier::{ModernBertSize, Precision};
/// use lead_intent::intent::IntentResolverBuilder;
///
/// let resolver = IntentResolverBuilder::modernbert(ModernBertSize::Base)
///     .cuda(0)
///     .precision(Precision::Half)
///     .build();
/// ```
pub struct IntentResolverBuilder {
    size: ModernBertSize,
    device: DeviceRequest,
    precision: Precision,
    taxonomy: LabelTaxonomy,
    timeout: Option<Duration>,
}

impl IntentResolverBuilder {
    /// Creates a builder for a ModernBERT zero-shot checkpoint.
    pub fn modernbert(size: ModernBertSize) -> Self {
        Self {
            size,
            device: DeviceRequest::Cpu,
            precision: Precision::Full,
            taxonomy: LabelTaxonomy::default(),
            timeout: None,
        }
    }

    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device = DeviceRequest::Cuda(index);
        self
    }

    /// Use CUDA device 0 when available, CPU otherwise.
    pub fn auto_device(mut self) -> Self {
        self.device = DeviceRequest::auto();
        self
    }

    /// Numeric precision for model weights (default: full).
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Replaces the default label taxonomy.
    pub fn taxonomy(mut self, taxonomy: LabelTaxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Bounds every scoring call; expiry fails the request with
    /// [`IntentError::Inference`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the resolver with the configured settings.
    pub fn build(self) -> IntentResolver<ModernBertClassifier> {
        let Self {
            size,
            device,
            precision,
            taxonomy,
            timeout,
        } = self;
        IntentResolver {
            classifier: OnceCell::new(),
            loader: Mutex::new(Some(Box::new(move || {
                ModernBertClassifier::load(size, device, precision)
            }))),
            taxonomy,
            timeout,
        }
    }
}
