//! Live-model smoke tests. Run with: cargo test --features cuda

#![cfg(feature = "cuda")]

use lead_intent::classifier::{ModernBertSize, Precision};
use lead_intent::intent::{Intent, IntentResolverBuilder};

#[test]
fn resolves_buying_signal_end_to_end() -> anyhow::Result<()> {
    let resolver = IntentResolverBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .precision(Precision::Half)
        .build();
    resolver.initialize()?;

    let outcome = resolver.classify("Looking to buy payroll software")?;
    assert_eq!(outcome.intent, Intent::High);
    assert_eq!(outcome.ranking.len(), 4);

    let sum: f32 = outcome.ranking.iter().map(|p| p.score).sum();
    assert!(
        (sum - 1.0).abs() < 1e-3,
        "exclusive scores should sum to 1.0, got {sum}"
    );
    Ok(())
}

#[test]
fn greeting_resolves_to_no_intent() -> anyhow::Result<()> {
    let resolver = IntentResolverBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .precision(Precision::Half)
        .build();
    resolver.initialize()?;

    let outcome = resolver.classify("Good morning everyone!")?;
    assert_eq!(outcome.intent, Intent::None);
    Ok(())
}
