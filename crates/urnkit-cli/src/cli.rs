use clap::{Parser, Subcommand, ValueEnum};
use urnkit_kernel::UrnKind;

#[derive(Parser)]
#[command(
    name = "urnkit",
    about = "Urnkit: lazy enumeration of the four classical urn models",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI spelling of the four kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Order matters, repetition allowed
    #[value(alias = "owr")]
    OrderedWithRepetition,

    /// Order matters, repetition forbidden
    #[value(alias = "ow")]
    OrderedWithoutRepetition,

    /// Order does not matter, repetition allowed
    #[value(alias = "uwr")]
    UnorderedWithRepetition,

    /// Order does not matter, repetition forbidden
    #[value(alias = "uw")]
    UnorderedWithoutRepetition,
}

impl From<KindArg> for UrnKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::OrderedWithRepetition => UrnKind::OrderedWithRepetition,
            KindArg::OrderedWithoutRepetition => UrnKind::OrderedWithoutRepetition,
            KindArg::UnorderedWithRepetition => UrnKind::UnorderedWithRepetition,
            KindArg::UnorderedWithoutRepetition => UrnKind::UnorderedWithoutRepetition,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the total number of draws
    Count {
        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the draw at an ordinal position
    Unrank {
        /// Ordinal position in the canonical order
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,

        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stream the draw sequence in canonical order
    List {
        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Stop after this many draws
        #[arg(long)]
        limit: Option<u64>,

        /// Traverse in reverse order
        #[arg(long)]
        rev: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the successor of a comma-separated draw
    Next {
        /// Draw as comma-separated slot indices, e.g. 0,2,1
        draw: String,

        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the predecessor of a comma-separated draw
    Back {
        /// Draw as comma-separated slot indices, e.g. 0,2,1
        draw: String,

        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Test whether a comma-separated draw is a member of the urn
    Contains {
        /// Draw as comma-separated slot indices, e.g. 0,2,1
        draw: String,

        /// Urn kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Number of labeled slots
        #[arg(short)]
        n: u32,

        /// Draw size
        #[arg(short)]
        k: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
