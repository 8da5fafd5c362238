use std::ffi::{OsStr, OsString};

/// Separator placed after each directory name folded into a flattened filename.
pub const DIR_SEPARATOR: &str = "__";

/// Builds the flat resource name for `name` found under `prefix`.
///
/// The result is lower-cased with `-` turned into `_`. When `replace_dot` is
/// set, `.` becomes `_` as well, which is what raw resources need since their
/// names must be valid identifiers. Returns `None` when an uppercase letter
/// has no lowercase form (`ℂ`, for one).
pub fn flattened_name(prefix: &str, name: &str, replace_dot: bool) -> Option<String> {
    normalize(&format!("{prefix}{name}"), replace_dot)
}

/// [`flattened_name`] for an already joined path that may not be UTF-8.
///
/// Names that are not UTF-8 are rewritten byte by byte on unix: only ASCII
/// letters, `-` and `.` change, every other byte is kept.
pub fn flattened_os_name(joined: &OsStr, replace_dot: bool) -> Option<OsString> {
    match joined.to_str() {
        Some(name) => normalize(name, replace_dot).map(OsString::from),
        None => flattened_raw_name(joined, replace_dot),
    }
}

fn normalize(joined: &str, replace_dot: bool) -> Option<String> {
    let mut flat = joined.replace('-', "_").to_lowercase();
    if replace_dot {
        flat = flat.replace('.', "_");
    }
    if flat.chars().any(char::is_uppercase) {
        return None;
    }
    Some(flat)
}

#[cfg(unix)]
fn flattened_raw_name(joined: &OsStr, replace_dot: bool) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes: Vec<u8> = joined
        .as_bytes()
        .iter()
        .map(|&b| match b {
            b'-' => b'_',
            b'.' if replace_dot => b'_',
            _ => b.to_ascii_lowercase(),
        })
        .collect();
    if String::from_utf8_lossy(&bytes).chars().any(char::is_uppercase) {
        return None;
    }
    Some(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn flattened_raw_name(_joined: &OsStr, _replace_dot: bool) -> Option<OsString> {
    None
}
