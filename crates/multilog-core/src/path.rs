//! Path resolution with `~` expansion

use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("cannot find HOME")]
    NoHome,
    #[error("cannot resolve current directory: {0}")]
    CurrentDir(#[from] io::Error),
}

/// Home directory of the current user
pub fn home_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir()
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or(PathError::NoHome)
}

/// `~` or `~/` (`~\` too) followed by the rest of the path
fn strip_tilde(name: &str) -> Option<&str> {
    let rest = name.strip_prefix('~')?;
    if rest.is_empty() {
        Some(rest)
    } else if rest.starts_with('/') || rest.starts_with('\\') {
        Some(&rest[1..])
    } else {
        None
    }
}

/// Resolve `name` against the home directory.
///
/// Absolute paths are returned unchanged; `""` and `~` give the home
/// directory itself, `~/x` gives `home/x` and any other relative name is
/// joined onto home as is.
pub fn expand_home(name: &str) -> Result<PathBuf, PathError> {
    if Path::new(name).is_absolute() {
        return Ok(PathBuf::from(name));
    }

    let home = home_dir()?;
    match strip_tilde(name) {
        Some("") => Ok(home),
        Some(rest) => Ok(home.join(rest)),
        None if name.is_empty() => Ok(home),
        None => Ok(home.join(name)),
    }
}

/// Absolute form of `name`, expanding a leading `~`
pub fn abs(name: &str) -> Result<PathBuf, PathError> {
    if name.is_empty() {
        return Ok(std::env::current_dir()?);
    }
    if Path::new(name).is_absolute() {
        return Ok(PathBuf::from(name));
    }
    if strip_tilde(name).is_some() {
        return expand_home(name);
    }
    Ok(clean(&std::env::current_dir()?.join(name)))
}

/// Absolute form of `name`, taking relative names from `dir`
pub fn abs_join(dir: &Path, name: &str) -> Result<PathBuf, PathError> {
    if name.is_empty() {
        return match dir.to_str() {
            Some(dir) => abs(dir),
            None => Ok(clean(&std::env::current_dir()?.join(dir))),
        };
    }
    if Path::new(name).is_absolute() {
        return Ok(PathBuf::from(name));
    }
    if strip_tilde(name).is_some() {
        return expand_home(name);
    }

    let joined = dir.join(name);
    if joined.is_absolute() {
        Ok(clean(&joined))
    } else {
        Ok(clean(&std::env::current_dir()?.join(joined)))
    }
}

/// Lexically remove `.` and `..` components
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
