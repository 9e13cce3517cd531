use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "engrave",
    about = "Engrave — chunked on-ledger payloads, frozen forever",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the JSON state file holding all entries.
    #[arg(long, global = true, default_value = "engrave.json")]
    pub state: String,

    /// Caller principal; falls back to the ENGRAVE_CALLER environment
    /// variable.
    #[arg(long, global = true)]
    pub caller: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chunk-upload an image file as entry metadata
    Upload(UploadArgs),
    /// Freeze an entry, making its payload immutable
    Freeze(FreezeArgs),
    /// Mint (claim) an entry id permanently
    Mint(MintArgs),
    /// Show an entry's lifecycle state
    Status(StatusArgs),
    /// Print an entry's stored payload
    Show(ShowArgs),
}

#[derive(Args)]
pub struct UploadArgs {
    /// Target entry id
    pub id: u64,
    /// Image file to embed
    #[arg(short, long)]
    pub file: String,
    /// Token name
    #[arg(short, long)]
    pub name: String,
    /// Token description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Maximum bytes per ledger write
    #[arg(long, default_value_t = engrave_upload::DEFAULT_SEGMENT_SIZE)]
    pub segment_size: usize,
    /// Base64-encode the metadata JSON inside the URI
    #[arg(long)]
    pub encode_metadata: bool,
    /// Skip the already-claimed pre-check
    #[arg(long)]
    pub force: bool,
    /// Resume from this segment index instead of starting over
    #[arg(long)]
    pub from_segment: Option<usize>,
}

#[derive(Args)]
pub struct FreezeArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct MintArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct StatusArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: u64,
    /// Decode the payload as a metadata URI and pretty-print it
    #[arg(long)]
    pub decode: bool,
}
