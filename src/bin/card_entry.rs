//! CLI for exercising the card entry core from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Judge a number as typed so far
//! card-entry number 4532015112830366
//!
//! # Judge an expiry entry (MMYY, separators allowed)
//! card-entry expiry 1230
//!
//! # Judge a CVC for a network
//! card-entry cvc 1234 --network amex
//!
//! # Show what the entry field would display
//! card-entry format 4532015112830366
//!
//! # Detect the network from a partial number
//! card-entry classify 37
//!
//! # Check the Luhn checksum alone
//! card-entry luhn 4532015112830366
//! ```
//!
//! Exit code 0 means Valid; anything else exits 1.

use card_entry::{
    classify, format, luhn, validate_cvc, validate_expiry, validate_number, CardNetwork, FieldKind,
    ValidationResult,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "card-entry")]
#[command(author, version, about = "Credit card entry validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge a card number entry (partial input welcome)
    Number {
        /// The number as typed so far (spaces and dashes allowed)
        digits: String,
    },

    /// Judge an expiry entry
    Expiry {
        /// The expiry as typed so far (MMYY, MM/YY)
        digits: String,
    },

    /// Judge a CVC entry
    Cvc {
        /// The CVC as typed so far
        digits: String,

        /// Card network (decides between 3 and 4 digits)
        #[arg(short, long, default_value = "unknown")]
        network: NetworkArg,
    },

    /// Show the formatted display text for an entry
    Format {
        /// Raw input
        digits: String,

        /// Which field the input belongs to
        #[arg(short, long, default_value = "number")]
        kind: KindArg,

        /// Card network context (CVC cap)
        #[arg(short, long, default_value = "unknown")]
        network: NetworkArg,
    },

    /// Detect the card network from a (partial) number
    Classify {
        /// The number or prefix
        digits: String,
    },

    /// Check the Luhn checksum of a digit string
    Luhn {
        /// The digits to check
        digits: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Number,
    Expiry,
    Cvc,
}

impl From<KindArg> for FieldKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Number => FieldKind::Number,
            KindArg::Expiry => FieldKind::ExpiryDate,
            KindArg::Cvc => FieldKind::Cvc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Unknown,
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
    Maestro,
    Mir,
    Rupay,
    Verve,
    Elo,
    Troy,
    BcCard,
}

impl From<NetworkArg> for CardNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Unknown => CardNetwork::Unknown,
            NetworkArg::Visa => CardNetwork::Visa,
            NetworkArg::Mastercard => CardNetwork::Mastercard,
            NetworkArg::Amex => CardNetwork::Amex,
            NetworkArg::Discover => CardNetwork::Discover,
            NetworkArg::DinersClub => CardNetwork::DinersClub,
            NetworkArg::Jcb => CardNetwork::Jcb,
            NetworkArg::UnionPay => CardNetwork::UnionPay,
            NetworkArg::Maestro => CardNetwork::Maestro,
            NetworkArg::Mir => CardNetwork::Mir,
            NetworkArg::Rupay => CardNetwork::RuPay,
            NetworkArg::Verve => CardNetwork::Verve,
            NetworkArg::Elo => CardNetwork::Elo,
            NetworkArg::Troy => CardNetwork::Troy,
            NetworkArg::BcCard => CardNetwork::BcCard,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Number { digits } => cmd_number(&digits),
        Commands::Expiry { digits } => cmd_expiry(&digits),
        Commands::Cvc { digits, network } => cmd_cvc(&digits, network.into()),
        Commands::Format {
            digits,
            kind,
            network,
        } => cmd_format(&digits, kind.into(), network.into()),
        Commands::Classify { digits } => cmd_classify(&digits),
        Commands::Luhn { digits } => cmd_luhn(&digits),
    }
}

fn exit_for(result: ValidationResult) -> ! {
    std::process::exit(if result.is_valid() { 0 } else { 1 })
}

fn cmd_number(digits: &str) {
    let network = classify(digits);
    let result = validate_number(digits);

    println!("Result: {:?}", result);
    println!("Network: {}", network.name());
    println!("Display: {}", format::format_number(digits));
    exit_for(result);
}

fn cmd_expiry(digits: &str) {
    let result = validate_expiry(digits);
    println!("Result: {:?}", result);
    println!("Display: {}", format::format_expiry(digits));
    exit_for(result);
}

fn cmd_cvc(digits: &str, network: CardNetwork) {
    let result = validate_cvc(digits, network);
    println!("Result: {:?}", result);
    println!(
        "Required digits: {} ({})",
        network.cvc_length(),
        network.name()
    );
    exit_for(result);
}

fn cmd_format(digits: &str, kind: FieldKind, network: CardNetwork) {
    println!("{}", format::format(digits, kind, network));
}

fn cmd_classify(digits: &str) {
    let network = classify(digits);
    println!("Network: {}", network.name());
    if network != CardNetwork::Unknown {
        println!("Lengths: {:?}", network.valid_lengths());
        println!("CVC digits: {}", network.cvc_length());
    }
}

fn cmd_luhn(digits: &str) {
    let values: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    if luhn::passes(&values) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}
