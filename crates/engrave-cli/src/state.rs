use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use engrave_store::Entry;
use engrave_types::EntryId;

/// Load the persisted state layout (id → entry) from a JSON file.
/// A missing file is an empty ledger.
pub fn load(path: &Path) -> anyhow::Result<BTreeMap<EntryId, Entry>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("state file {} is not valid engrave state", path.display()))
}

/// Persist the state layout as pretty-printed JSON.
pub fn save(path: &Path, state: &BTreeMap<EntryId, Entry>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write state file {}", path.display()))
}
