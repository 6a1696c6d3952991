//! Lexicon lookup and user path handling.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Where to look for the lexicon when no explicit path is given.
///
/// Directories are searched in order; the first one containing
/// `file_name` wins.
#[derive(Debug, Clone)]
pub struct LexiconLocations {
    pub file_name: String,
    pub dirs: Vec<PathBuf>,
}

impl LexiconLocations {
    /// The executable's directory, then the current working directory.
    #[must_use]
    pub fn conventional(file_name: &str) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().ok();
        Self {
            file_name: file_name.to_string(),
            dirs: exe_dir.into_iter().chain(cwd).collect(),
        }
    }
}

/// Pick the lexicon file to load.
///
/// # Errors
///
/// Returns [`IoError::NotFound`] if `explicit` is given but missing, and
/// [`IoError::LexiconNotFound`] if no conventional location has the file.
pub fn resolve_lexicon(
    explicit: Option<&Path>,
    locations: &LexiconLocations,
) -> Result<PathBuf, IoError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }

    for dir in &locations.dirs {
        let candidate = dir.join(&locations.file_name);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found lexicon");
            return Ok(candidate);
        }
    }

    let searched = locations
        .dirs
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(IoError::LexiconNotFound {
        file_name: locations.file_name.clone(),
        searched,
    })
}

/// Expand a leading `~` to the user's home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, std::env::var_os("HOME").as_deref())
}

fn expand_home_with(path: &str, home: Option<&OsStr>) -> PathBuf {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return PathBuf::from(home);
    }
    match path.strip_prefix("~/") {
        Some(rest) => Path::new(home).join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_bare_tilde() {
        assert_eq!(
            expand_home_with("~", Some(OsStr::new("/home/ana"))),
            PathBuf::from("/home/ana")
        );
    }

    #[test]
    fn expands_tilde_prefix() {
        assert_eq!(
            expand_home_with("~/docs/memo.txt", Some(OsStr::new("/home/ana"))),
            PathBuf::from("/home/ana/docs/memo.txt")
        );
    }

    #[test]
    fn leaves_other_paths_alone() {
        let home = Some(OsStr::new("/home/ana"));
        assert_eq!(expand_home_with("memo.txt", home), PathBuf::from("memo.txt"));
        assert_eq!(expand_home_with("~ana/memo.txt", home), PathBuf::from("~ana/memo.txt"));
        assert_eq!(expand_home_with("/abs/~/x", home), PathBuf::from("/abs/~/x"));
    }

    #[test]
    fn no_home_leaves_tilde() {
        assert_eq!(expand_home_with("~/memo.txt", None), PathBuf::from("~/memo.txt"));
    }

    #[test]
    fn explicit_lexicon_must_exist() {
        let locations = LexiconLocations {
            file_name: "affinity_scores.csv".to_string(),
            dirs: vec![],
        };
        let result = resolve_lexicon(Some(Path::new("/definitely/not/here.csv")), &locations);
        assert!(
            matches!(result, Err(IoError::NotFound { .. })),
            "expected NotFound, got: {result:?}"
        );
    }

    #[test]
    fn first_directory_with_file_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("affinity_scores.csv"), "luck,1\n").unwrap();

        let locations = LexiconLocations {
            file_name: "affinity_scores.csv".to_string(),
            dirs: vec![first.path().to_path_buf(), second.path().to_path_buf()],
        };
        assert_eq!(
            resolve_lexicon(None, &locations).unwrap(),
            second.path().join("affinity_scores.csv")
        );

        std::fs::write(first.path().join("affinity_scores.csv"), "luck,2\n").unwrap();
        assert_eq!(
            resolve_lexicon(None, &locations).unwrap(),
            first.path().join("affinity_scores.csv")
        );
    }

    #[test]
    fn missing_everywhere_lists_searched_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let locations = LexiconLocations {
            file_name: "affinity_scores.csv".to_string(),
            dirs: vec![dir.path().to_path_buf()],
        };
        match resolve_lexicon(None, &locations) {
            Err(IoError::LexiconNotFound { file_name, searched }) => {
                assert_eq!(file_name, "affinity_scores.csv");
                assert_eq!(searched, dir.path().display().to_string());
            }
            other => panic!("expected LexiconNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn conventional_searches_exe_dir_then_cwd() {
        let locations = LexiconLocations::conventional("affinity_scores.csv");
        assert_eq!(locations.file_name, "affinity_scores.csv");
        assert_eq!(
            locations.dirs.last(),
            std::env::current_dir().ok().as_ref()
        );
    }
}
