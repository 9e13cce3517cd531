use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use colored::Colorize;
use engrave_metadata::{MediaType, TokenMetadata};
use engrave_store::{EntryStore, InMemoryEntryStore, SingleOwner};
use engrave_types::{CallerId, EntryId};
use engrave_upload::{DirectTransport, UploadConfig, UploadDriver};

use crate::cli::{Cli, Command, FreezeArgs, MintArgs, ShowArgs, StatusArgs, UploadArgs};
use crate::state;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let caller = resolve_caller(cli.caller.as_deref())?;
    let state_path = Path::new(&cli.state).to_path_buf();
    match cli.command {
        Command::Upload(args) => cmd_upload(&state_path, &caller, args).await,
        Command::Freeze(args) => cmd_freeze(&state_path, &caller, args),
        Command::Mint(args) => cmd_mint(&state_path, &caller, args),
        Command::Status(args) => cmd_status(&state_path, &caller, args),
        Command::Show(args) => cmd_show(&state_path, &caller, args),
    }
}

/// Caller resolution order: `--caller` flag, then the `ENGRAVE_CALLER`
/// environment variable.
fn resolve_caller(flag: Option<&str>) -> anyhow::Result<CallerId> {
    let label = match flag {
        Some(label) => label.to_string(),
        None => match std::env::var("ENGRAVE_CALLER") {
            Ok(label) => label,
            Err(_) => bail!("no caller: pass --caller or set ENGRAVE_CALLER"),
        },
    };
    Ok(CallerId::new(label)?)
}

fn open_store(path: &Path, caller: &CallerId) -> anyhow::Result<Arc<InMemoryEntryStore>> {
    let entries = state::load(path)?;
    Ok(Arc::new(InMemoryEntryStore::restore(
        SingleOwner::new(caller.clone()),
        entries,
    )))
}

fn persist(path: &Path, store: &InMemoryEntryStore) -> anyhow::Result<()> {
    state::save(path, &store.snapshot())
}

async fn cmd_upload(path: &Path, caller: &CallerId, args: UploadArgs) -> anyhow::Result<()> {
    let id = EntryId::new(args.id);
    let image = std::fs::read(&args.file)
        .with_context(|| format!("failed to read image file {}", args.file))?;
    let extension = Path::new(&args.file)
        .extension()
        .and_then(|ext| ext.to_str())
        .with_context(|| format!("{} has no file extension to infer a media type from", args.file))?;
    let media = MediaType::from_extension(extension)?;

    let metadata =
        TokenMetadata::new(&args.name, &args.description).with_image(media, &image);
    let uri = if args.encode_metadata {
        engrave_metadata::encode_json_base64(&metadata)?
    } else {
        engrave_metadata::encode_json_plain(&metadata)?
    };
    let payload = uri.as_bytes();

    if args.segment_size == 0 {
        bail!("--segment-size must be positive");
    }
    println!(
        "Uploading {} ({} bytes) into entry {}: payload {} bytes, {} segments of ≤{}",
        args.file.bold(),
        image.len(),
        id.to_string().yellow(),
        payload.len(),
        engrave_upload::segment_count(payload.len(), args.segment_size),
        args.segment_size,
    );

    let store = open_store(path, caller)?;
    let shared: Arc<dyn EntryStore> = store.clone();
    let transport = DirectTransport::new(shared, caller.clone());
    let driver = UploadDriver::with_config(
        transport,
        UploadConfig {
            segment_size: args.segment_size,
            guard_existing: !args.force,
        },
    );

    let result = match args.from_segment {
        Some(from) => driver.resume(id, payload, from).await,
        None => driver.upload(id, payload).await,
    };
    // Confirmed segments are durable even when the run fails partway.
    persist(path, &store)?;
    let report = result?;

    println!(
        "{} Entry {}: {} of {} segments confirmed, {} bytes",
        "✓".green().bold(),
        id.to_string().yellow(),
        report.segments_submitted,
        report.total_segments,
        report.bytes_sent,
    );
    Ok(())
}

fn cmd_freeze(path: &Path, caller: &CallerId, args: FreezeArgs) -> anyhow::Result<()> {
    let id = EntryId::new(args.id);
    let store = open_store(path, caller)?;
    store.freeze(caller, id)?;
    persist(path, &store)?;
    println!(
        "{} Entry {} frozen: payload is now immutable",
        "✓".green().bold(),
        id.to_string().yellow(),
    );
    Ok(())
}

fn cmd_mint(path: &Path, caller: &CallerId, args: MintArgs) -> anyhow::Result<()> {
    let id = EntryId::new(args.id);
    let store = open_store(path, caller)?;
    store.claim(caller, id)?;
    persist(path, &store)?;
    println!(
        "{} Entry {} minted by {}",
        "✓".green().bold(),
        id.to_string().yellow(),
        caller.to_string().bold(),
    );
    Ok(())
}

fn cmd_status(path: &Path, caller: &CallerId, args: StatusArgs) -> anyhow::Result<()> {
    let id = EntryId::new(args.id);
    let store = open_store(path, caller)?;
    let flag = |on: bool| if on { "yes".green() } else { "no".dimmed() };
    println!("Entry {}", id.to_string().yellow().bold());
    println!("  exists:  {}", flag(store.exists(id)?));
    println!("  frozen:  {}", flag(store.frozen(id)?));
    println!("  claimed: {}", flag(store.claimed(id)?));
    println!("  bytes:   {}", store.read(id)?.len());
    Ok(())
}

fn cmd_show(path: &Path, caller: &CallerId, args: ShowArgs) -> anyhow::Result<()> {
    let id = EntryId::new(args.id);
    let store = open_store(path, caller)?;
    let buffer = store.read(id)?;
    if args.decode {
        let uri = std::str::from_utf8(&buffer).context("payload is not valid UTF-8")?;
        let metadata = engrave_metadata::decode_json(uri)?;
        println!("name:        {}", metadata.name.bold());
        println!("description: {}", metadata.description);
        let (media, bytes) = metadata.image_bytes()?;
        println!("image:       {media}, {} bytes", bytes.len());
    } else {
        println!("{}", String::from_utf8_lossy(&buffer));
    }
    Ok(())
}
