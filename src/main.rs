use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lead_intent::classifier::{ModernBertSize, Precision};
use lead_intent::intent::IntentResolverBuilder;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &[&str] = &[
    "Looking for HR automation tools",
    "Hiring an HR Manager",
    "Top HR trends in 2025",
    "I love playing football",
    "Need a recruitment AI solution",
    "Our company is expanding the dev team",
    "Best productivity apps for managers",
    "Looking to buy payroll software",
    "We are recruiting a data analyst",
    "AI tools for office automation",
    "Good morning everyone!",
    "Company culture tips for employees",
    "Hiring interns for marketing department",
    "Off-topic message about hobbies",
    "Searching for employee engagement platforms",
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(70));
    println!("LEAD INTENT CLASSIFIER");
    println!("Type text to classify, 'examples' for sample inputs, 'exit' to stop");
    println!("{}", "=".repeat(70));

    let mut builder = IntentResolverBuilder::modernbert(ModernBertSize::Base).auto_device();
    if candle_core::utils::cuda_is_available() {
        builder = builder.precision(Precision::Half);
    }
    let resolver = builder.build();

    println!("Loading classifier (first run downloads the model)...");
    if let Err(e) = resolver.initialize() {
        eprintln!("fatal: {e}");
        return ExitCode::FAILURE;
    }
    println!("Ready.");

    let stdin = io::stdin();
    loop {
        print!("\nEnter text: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("input error: {e}");
                break;
            }
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            break;
        }
        if text.eq_ignore_ascii_case("examples") {
            for example in EXAMPLES {
                println!("  - {example}");
            }
            continue;
        }

        match resolver.classify(text) {
            Ok(outcome) => {
                println!(" {}", outcome.intent);
                println!(" Confidence: {}", outcome.confidence_percent());
                println!(" Matched: {}", outcome.matched_label);
                println!("{}", "-".repeat(50));
            }
            Err(e) => eprintln!("classification failed: {e}"),
        }
    }

    println!("Goodbye!");
    ExitCode::SUCCESS
}
