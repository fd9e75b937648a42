//! Where the CLI keeps its config file and run logs.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "dealflow";
const APPLICATION: &str = "dealflow";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs go.
///
/// - Linux: `$XDG_CACHE_HOME/dealflow` or `~/.cache/dealflow`
/// - macOS: `~/Library/Caches/io.dealflow.dealflow`
/// - Windows: `C:\Users\<User>\AppData\Local\dealflow\dealflow\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/dealflow` or `~/.config/dealflow`
/// - macOS: `~/Library/Application Support/io.dealflow.dealflow`
/// - Windows: `C:\Users\<User>\AppData\Roaming\dealflow\dealflow\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path of the log file the current run writes to.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

const LATEST_LOG: &str = "latest.log";

/// Prefix of archived run logs: `dealflow-<yyyymmdd_hhmmss>.log`.
const ARCHIVE_PREFIX: &str = "dealflow-";

/// Archived run logs kept next to `latest.log`.
const KEPT_RUN_LOGS: usize = 10;

/// Archives the previous run's log before a command starts.
///
/// Each `dealflow` invocation logs to `latest.log`; the previous one is
/// renamed to `dealflow-<timestamp>.log` and only the newest archives are
/// kept. Failures are ignored, logging is best effort for a CLI.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, chrono::Local::now(), KEPT_RUN_LOGS);
    }
}

fn rotate_logs_in<Tz>(dir: &Path, now: chrono::DateTime<Tz>, keep: usize)
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let mut archived = dir.join(format!("{}{}.log", ARCHIVE_PREFIX, stamp));
        // Two runs within the same second.
        let mut n = 1;
        while archived.exists() {
            archived = dir.join(format!("{}{}-{}.log", ARCHIVE_PREFIX, stamp, n));
            n += 1;
        }
        let _ = fs::rename(&latest, &archived);
    }

    prune_archives(dir, keep);
}

/// Deletes archived run logs beyond the newest `keep`.
///
/// Archive names sort by their timestamp; other files are left alone.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for name in archives.iter().take(excess) {
        let _ = fs::remove_file(dir.join(name));
    }
}
