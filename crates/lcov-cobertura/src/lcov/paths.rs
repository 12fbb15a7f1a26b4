//! Source path handling for `SF` records.
//!
//! Paths are joined onto the base directory and normalized with POSIX rules:
//! `.` segments and repeated separators vanish, `..` pops a segment, and a
//! relative path may climb above its start. Packages and display names are
//! then derived by swapping `/` for `.`.

const SEPARATOR: char = '/';

/// Join `file` onto `base_dir` and normalize the result.
///
/// The two parts are concatenated, not resolved: an absolute `file` does not
/// replace the base directory.
#[must_use]
pub fn join_normalized(base_dir: &str, file: &str) -> String {
    let joined = match (base_dir.is_empty(), file.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => file.to_string(),
        (false, true) => base_dir.to_string(),
        (false, false) => format!("{base_dir}{SEPARATOR}{file}"),
    };
    normalize(&joined)
}

fn normalize(path: &str) -> String {
    let absolute = path.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    let _ = segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if absolute {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Package name: the directory part of `key` with separators as dots.
#[must_use]
pub fn package_name(key: &str) -> String {
    match key.rsplit_once(SEPARATOR) {
        Some((dir, _)) => dir.replace(SEPARATOR, "."),
        None => String::new(),
    }
}

/// Class display name: the whole of `key` with separators as dots.
#[must_use]
pub fn display_name(key: &str) -> String {
    key.replace(SEPARATOR, ".")
}
