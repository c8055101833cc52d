use std::collections::HashMap;
use std::time::Instant;

use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::modernbert::{Config, ModernBertForSequenceClassification};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::device::{DeviceRequest, Precision};
use super::model::{normalize_exclusive, LabelScores, ZeroShotClassifier};
use crate::error::{IntentError, Result};

/// Available zero-shot checkpoint sizes.
#[derive(Debug, Clone, Copy)]
pub enum ModernBertSize {
    /// Base model (~150M parameters).
    Base,
    /// Large model (~400M parameters).
    Large,
}

impl ModernBertSize {
    fn repo_id(self) -> &'static str {
        match self {
            ModernBertSize::Base => "MoritzLaurer/ModernBERT-base-zeroshot-v2.0",
            ModernBertSize::Large => "MoritzLaurer/ModernBERT-large-zeroshot-v2.0",
        }
    }
}

impl std::fmt::Display for ModernBertSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModernBertSize::Base => "modernbert-base",
            ModernBertSize::Large => "modernbert-large",
        };
        write!(f, "{name}")
    }
}

/// Zero-shot classifier backed by a ModernBERT NLI checkpoint running locally
/// through Candle.
///
/// Each candidate label becomes the hypothesis `"This example is {label}."`;
/// all premise/hypothesis pairs go through the model in one batch and the
/// entailment probability of each pair is the label's score.
pub struct ModernBertClassifier {
    model: ModernBertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    entailment_id: usize,
}

impl ModernBertClassifier {
    /// Fetches the checkpoint from the Hugging Face Hub (or reuses the local
    /// cache) and loads it onto the requested device.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails, the device cannot be
    /// initialized, or the checkpoint is not an NLI classifier.
    pub fn load(size: ModernBertSize, device: DeviceRequest, precision: Precision) -> Result<Self> {
        let started = Instant::now();
        let device = device.resolve()?;
        let repo_id = size.repo_id();
        tracing::info!(%size, model = repo_id, device = ?device.location(), "loading zero-shot classifier");

        let api = Api::new()?;
        let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));

        let config_path = repo.get("config.json")?;
        let weights_path = repo
            .get("model.safetensors")
            .or_else(|_| repo.get("pytorch_model.bin"))?;
        let tokenizer_path = repo.get("tokenizer.json")?;

        let config_str = std::fs::read_to_string(&config_path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        let head: ClassifierHeadJson = serde_json::from_str(&config_str)?;
        patch_config_num_labels(&mut config, head.label2id.len().max(head.id2label.len()));

        // A checkpoint without an entailment output cannot score anything; fail at load.
        let entailment_id = *head.label2id.get("entailment").ok_or_else(|| {
            let available: Vec<&str> = head.label2id.keys().map(String::as_str).collect();
            IntentError::Unexpected(format!(
                "Missing 'entailment' in label2id mapping. Available: {}",
                available.join(", ")
            ))
        })? as usize;

        let dtype = precision.dtype();
        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], dtype, &device)? }
        } else {
            VarBuilder::from_pth(&weights_path, dtype, &device)?
        };
        let model = ModernBertForSequenceClassification::load(vb, &config)?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            IntentError::Tokenization(format!(
                "Failed to load tokenizer from '{}': {e}",
                tokenizer_path.display()
            ))
        })?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "classifier ready"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            entailment_id,
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &Device {
        &self.device
    }

    fn entailment_probs(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<f32>> {
        let mut encodings = Vec::with_capacity(candidate_labels.len());
        for &label in candidate_labels {
            let hypothesis = format!("This example is {label}.");
            let encoding = self
                .tokenizer
                .encode((text, hypothesis.as_str()), true)
                .map_err(|e| {
                    IntentError::Tokenization(format!(
                        "Tokenization failed on '{}': {}",
                        &text.chars().take(50).collect::<String>(),
                        e
                    ))
                })?;
            encodings.push(encoding);
        }

        let max_len = encodings.iter().map(|e| e.len()).max().unwrap_or(0);
        let pad_token_id = self
            .tokenizer
            .get_padding()
            .map(|p| p.pad_id)
            .or_else(|| self.tokenizer.token_to_id("<pad>"))
            .or_else(|| self.tokenizer.token_to_id("[PAD]"))
            .unwrap_or(0);

        let mut all_token_ids: Vec<u32> = Vec::new();
        let mut all_attention_masks: Vec<u32> = Vec::new();

        for encoding in encodings {
            let mut token_ids = encoding.get_ids().to_vec();
            let mut attention_mask = encoding.get_attention_mask().to_vec();
            token_ids.resize(max_len, pad_token_id);
            attention_mask.resize(max_len, 0);
            all_token_ids.extend(token_ids);
            all_attention_masks.extend(attention_mask);
        }

        let input_ids = Tensor::from_vec(
            all_token_ids,
            (candidate_labels.len(), max_len),
            &self.device,
        )?;
        let attention_mask = Tensor::from_vec(
            all_attention_masks,
            (candidate_labels.len(), max_len),
            &self.device,
        )?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        // Upcast before softmax so half-precision weights still produce f32 scores.
        let probabilities = softmax(&logits.to_dtype(DType::F32)?, D::Minus1)?;
        Ok(probabilities
            .i((.., self.entailment_id))?
            .to_vec1::<f32>()?)
    }
}

impl ZeroShotClassifier for ModernBertClassifier {
    fn score(
        &self,
        text: &str,
        candidate_labels: &[&str],
        exclusive: bool,
    ) -> Result<LabelScores> {
        if candidate_labels.is_empty() {
            return Ok(vec![]);
        }

        let probs = self.entailment_probs(text, candidate_labels)?;
        let mut scores: LabelScores = candidate_labels
            .iter()
            .map(|&l| l.to_string())
            .zip(probs)
            .collect();
        if exclusive {
            normalize_exclusive(&mut scores);
        }
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scores)
    }
}

#[derive(Deserialize)]
struct ClassifierHeadJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

fn patch_config_num_labels(config: &mut Config, num_labels: usize) {
    use candle_transformers::models::modernbert::{ClassifierConfig, ClassifierPooling};

    if config.classifier_config.is_none()
        || config
            .classifier_config
            .as_ref()
            .map(|c| c.id2label.len())
            .unwrap_or(0)
            != num_labels
    {
        let id2label: HashMap<String, String> = (0..num_labels)
            .map(|i| (i.to_string(), format!("label_{i}")))
            .collect();
        let label2id: HashMap<String, String> = id2label
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect();

        config.classifier_config = Some(ClassifierConfig {
            id2label,
            label2id,
            classifier_pooling: ClassifierPooling::default(),
        });
    }
}
