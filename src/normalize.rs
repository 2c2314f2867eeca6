//! Dot-segment removal.

/// Removes dot segments from a path.
///
/// This is equivalent to the algorithm in
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4),
/// implemented as a single forward scan that keeps the start of the last
/// output segment instead of a second buffer. Excess `..` segments are
/// dropped once there is nothing left to remove.
///
/// The function is idempotent.
///
/// # Examples
///
/// ```
/// use uri_ref::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/../../g"), "/g");
/// assert_eq!(remove_dot_segments("/a/b/.."), "/a/");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return path.to_owned();
    }

    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    // Start of the last segment in `out`, including its leading slash.
    let mut last_slash = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            // Only reachable at the start of the path or after a skipped prefix.
            b'.' => match bytes.get(i + 1) {
                // "."
                None => break,
                // "./"
                Some(b'/') => {
                    i += 2;
                    continue;
                }
                Some(b'.') => match bytes.get(i + 2) {
                    // ".."
                    None => break,
                    // "../"
                    Some(b'/') => {
                        i += 3;
                        continue;
                    }
                    _ => {}
                },
                _ => {}
            },
            b'/' => match bytes.get(i + 1) {
                None => {
                    out.push('/');
                    break;
                }
                Some(b'.') => match bytes.get(i + 2) {
                    // "/."
                    None => {
                        out.push('/');
                        break;
                    }
                    // "/./", keep the second slash
                    Some(b'/') => {
                        i += 2;
                        continue;
                    }
                    Some(b'.') => match bytes.get(i + 3) {
                        // "/.."
                        None => {
                            out.truncate(last_slash);
                            out.push('/');
                            break;
                        }
                        // "/../", keep the last slash
                        Some(b'/') => {
                            out.truncate(last_slash);
                            last_slash = out.rfind('/').unwrap_or(0);
                            i += 3;
                            continue;
                        }
                        _ => {}
                    },
                    _ => {}
                },
                _ => {}
            },
            _ => {}
        }

        // Copy a normal segment up to the next slash.
        match bytes[i + 1..].iter().position(|&x| x == b'/') {
            Some(len) => {
                let end = i + 1 + len;
                last_slash = out.len();
                out.push_str(&path[i..end]);
                i = end;
            }
            None => {
                out.push_str(&path[i..]);
                break;
            }
        }
    }

    out
}
