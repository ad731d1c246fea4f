pub mod convert;
pub mod validate;
pub mod watch;

use clap::{Parser, Subcommand};
use ipconv_core::AddressKind;

#[derive(Parser)]
#[command(name = "ipconv")]
#[command(about = "Convert IPv4 addresses between dotted-quad, decimal and hexadecimal notation.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reverse the byte order during conversion
    #[arg(short, long, global = true)]
    pub reverse: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value into the other notations
    #[command(alias = "c")]
    Convert {
        value: String,
        /// Source representation; detected from the value when omitted
        #[arg(short, long)]
        from: Option<AddressKind>,
        /// Render only this representation
        #[arg(short, long)]
        to: Option<AddressKind>,
    },
    /// Check whether a value is a valid IPv4 address
    #[command(alias = "v")]
    Validate {
        value: String,
        /// Representation to validate against; any matches when omitted
        #[arg(short, long)]
        kind: Option<AddressKind>,
        /// Require a complete dotted-quad (all four octets)
        #[arg(short, long)]
        strict: bool,
    },
    /// Convert values interactively as they are entered
    #[command(alias = "w")]
    Watch,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
