//! Locating the database file through mpd.conf

use crate::error::ConfigError;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Candidate mpd.conf locations, in search order
pub fn config_candidates(home: &Path) -> Vec<PathBuf> {
    // $XDG_CONFIG_HOME, or the platform default when unset
    let xdg_config = dirs::config_dir().unwrap_or_else(|| home.join(".config"));

    let mut paths = vec![xdg_config.join("mpd").join("mpd.conf")];
    let home_config = home.join(".config").join("mpd").join("mpd.conf");
    if !paths.contains(&home_config) {
        paths.push(home_config);
    }
    paths.push(home.join(".mpdconf"));
    paths.push(PathBuf::from("/etc/mpd.conf"));
    paths
}

/// Find the database file named by the first existing config
pub fn find_db_file() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
    let candidates = config_candidates(&home);

    let config = candidates
        .iter()
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::NotFound {
            searched: candidates.clone(),
        })?;

    log::info!("Using MPD config {:?}", config);
    db_file_from_config(config, &home)
}

/// Read `db_file` from a specific mpd.conf
pub fn db_file_from_config(config: &Path, home: &Path) -> Result<PathBuf, ConfigError> {
    let file = File::open(config)?;
    db_file_from_reader(BufReader::new(file), home)?.ok_or_else(|| ConfigError::MissingDbFile {
        config: config.to_path_buf(),
    })
}

/// Scan config text for the first `db_file "..."` setting
///
/// A leading `~` in the value is expanded to `home`.
pub fn db_file_from_reader<R: BufRead>(
    reader: R,
    home: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    let db_file = db_file_pattern();

    for line in reader.lines() {
        let line = line?;
        if let Some(caps) = db_file.captures(&line) {
            let expanded =
                shellexpand::tilde_with_context(&caps[1], || Some(home.to_string_lossy()));
            return Ok(Some(PathBuf::from(expanded.as_ref())));
        }
    }

    Ok(None)
}

fn db_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^\s*db_file\s*"([^"]+)""#).expect("db_file pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn scan(text: &str) -> Option<PathBuf> {
        db_file_from_reader(Cursor::new(text.as_bytes().to_vec()), Path::new("/home/me")).unwrap()
    }

    #[test]
    fn test_db_file_found() {
        let conf = "music_directory \"~/Music\"\n  db_file   \"/var/lib/mpd/tag_cache\"\n";
        assert_eq!(scan(conf), Some(PathBuf::from("/var/lib/mpd/tag_cache")));
    }

    #[test]
    fn test_db_file_tilde_expanded() {
        let conf = "db_file \"~/.mpd/database\"\n";
        assert_eq!(scan(conf), Some(PathBuf::from("/home/me/.mpd/database")));
    }

    #[test]
    fn test_commented_db_file_ignored() {
        let conf = "#db_file \"/nope\"\nport \"6600\"\n";
        assert_eq!(scan(conf), None);
    }

    #[test]
    fn test_first_db_file_wins() {
        let conf = "db_file \"/first\"\ndb_file \"/second\"\n";
        assert_eq!(scan(conf), Some(PathBuf::from("/first")));
    }

    #[test]
    fn test_missing_db_file_reports_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("mpd.conf");
        fs::write(&config, "port \"6600\"\n").unwrap();

        match db_file_from_config(&config, dir.path()) {
            Err(ConfigError::MissingDbFile { config: reported }) => assert_eq!(reported, config),
            other => panic!("expected MissingDbFile, got {:?}", other),
        }
    }

    #[test]
    fn test_candidates_end_with_system_config() {
        let candidates = config_candidates(Path::new("/home/me"));
        assert!(candidates.contains(&PathBuf::from("/home/me/.mpdconf")));
        assert_eq!(candidates.last(), Some(&PathBuf::from("/etc/mpd.conf")));
    }
}
