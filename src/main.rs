use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payswitch::application::dispatcher::StrategyRegistry;
use payswitch::domain::ports::PaymentStrategyBox;
use payswitch::domain::request::PaymentRequest;
use payswitch::error;
use payswitch::infrastructure::paypal::PaypalStrategy;
use payswitch::infrastructure::razorpay::RazorpayStrategy;
use payswitch::interfaces::csv::request_reader::RequestReader;
use payswitch::interfaces::json::request_reader::RequestReader as JsonRequestReader;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// CSV with an `amount,paymentType,sender,receiver` header
    Csv,
    /// One JSON request object per line
    Jsonl,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests file
    input: PathBuf,

    /// Input file format
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    format: InputFormat,
}

fn main() -> Result<()> {
    // Diagnostic logging goes to stderr so stdout carries only confirmations.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Wire the provider strategies under their own keys. The registry is
    // complete after this loop and only read from below.
    let mut registry = StrategyRegistry::new();
    for strategy in [
        Box::new(PaypalStrategy::new()) as PaymentStrategyBox,
        Box::new(RazorpayStrategy::new()),
    ] {
        let key = strategy.name();
        registry.register(key, strategy);
    }
    let registry = registry;
    debug!(providers = ?registry.providers(), "strategy registry initialized");

    let file = File::open(&cli.input).into_diagnostic()?;
    let requests: Box<dyn Iterator<Item = error::Result<PaymentRequest>>> = match cli.format {
        InputFormat::Csv => Box::new(RequestReader::new(file).requests()),
        InputFormat::Jsonl => Box::new(JsonRequestReader::new(file).requests()),
    };

    // Process requests
    for request in requests {
        match request {
            Ok(request) => match registry.dispatch(&request) {
                Ok(confirmation) => println!("{}", confirmation),
                Err(e) => eprintln!("Error processing payment: {}", e),
            },
            Err(e) => eprintln!("Error reading payment request: {}", e),
        }
    }

    Ok(())
}
