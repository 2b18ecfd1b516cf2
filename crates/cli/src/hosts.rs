use anyhow::Context;
use tracing::warn;

const APEX: &str = "@";

/// Reads the host list and qualifies every entry with `parent`.
pub fn load_hosts(path: &str, parent: Option<&str>) -> anyhow::Result<Vec<String>> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read hosts file {}", path))?;
    Ok(expand_hosts(&contents, parent))
}

/// One host per line, trimmed, blank lines skipped. With a parent zone `@`
/// is the zone itself and `x` becomes `x.<parent>`.
pub fn expand_hosts(contents: &str, parent: Option<&str>) -> Vec<String> {
    let parent = parent
        .map(|p| p.trim().trim_end_matches('.'))
        .filter(|p| !p.is_empty());

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|host| match (host, parent) {
            (APEX, Some(parent)) => Some(parent.to_string()),
            (APEX, None) => {
                warn!("Skipping '@' host entry: no parent zone configured");
                None
            }
            (host, Some(parent)) => Some(format!("{}.{}", host, parent)),
            (host, None) => Some(host.to_string()),
        })
        .collect()
}
