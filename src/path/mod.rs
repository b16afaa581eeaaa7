//! Lexical path handling for a chosen platform syntax.
//!
//! Directory rules of one platform must produce that platform's paths no matter which host they
//! are evaluated on, so [`std::path::Path`] (which follows the host) is not used for building
//! them. Nothing here touches the filesystem.
//!
//! ```rust
//! # use platform_dirs::path::PathSyntax;
//! assert_eq!(PathSyntax::Windows.join(["C:", "ProgramData", "", "App"]), r"C:\ProgramData\App");
//! assert_eq!(PathSyntax::Posix.join(["/usr/share/", "App"]), "/usr/share/App");
//! assert!(!PathSyntax::Windows.is_absolute("C:ProgramData"));
//! ```

/// Path conventions of a platform family.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PathSyntax {
    /// `/`-separated, rooted at `/`.
    Posix,
    /// `\`-separated (`/` accepted on input), rooted at `\`, `X:\` or `\\server\share`.
    Windows,
}

impl PathSyntax {
    /// Preferred separator.
    pub const fn separator(self) -> char {
        match self {
            PathSyntax::Posix => '/',
            PathSyntax::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathSyntax::Posix => c == '/',
            PathSyntax::Windows => c == '\\' || c == '/',
        }
    }

    /// Whether `path` is absolute in this syntax.
    ///
    /// On Windows a bare drive (`C:`) or a drive-relative path (`C:foo`) is *not* absolute, while
    /// a rooted path without a drive (`\foo`) is.
    pub fn is_absolute(self, path: &str) -> bool {
        let mut chars = path.chars();
        match self {
            PathSyntax::Posix => path.starts_with('/'),
            PathSyntax::Windows => match (chars.next(), chars.next(), chars.next()) {
                (Some(c), _, _) if self.is_separator(c) => true,
                (Some(drive), Some(':'), Some(sep)) => {
                    drive.is_ascii_alphabetic() && self.is_separator(sep)
                }
                _ => false,
            },
        }
    }

    /// Join `parts` with the separator and [`normalize`](PathSyntax::normalize) the result.
    ///
    /// Empty parts are skipped, so optional segments can be passed as `""`.
    pub fn join<'a>(self, parts: impl IntoIterator<Item = &'a str>) -> String {
        let sep = self.separator().to_string();
        let joined = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(&sep);
        self.normalize(&joined)
    }

    /// Lexically normalize `path`: collapse repeated separators, drop `.` segments and resolve
    /// `..` against preceding segments. Trailing separators are removed.
    ///
    /// An empty result is `.`, like an empty relative path.
    pub fn normalize(self, path: &str) -> String {
        let (prefix, rest) = self.split_prefix(path);
        let rooted = rest.starts_with(|c: char| self.is_separator(c));

        let mut segments: Vec<&str> = Vec::new();
        for segment in rest.split(|c: char| self.is_separator(c)) {
            match segment {
                "" | "." => {}
                ".." => match segments.last().copied() {
                    Some(last) if last != ".." => {
                        segments.pop();
                    }
                    // `..` above the root is the root.
                    _ if rooted => {}
                    _ => segments.push(".."),
                },
                segment => segments.push(segment),
            }
        }

        let sep = self.separator();
        let mut out = prefix;
        if rooted {
            out.push(sep);
        }
        out.push_str(&segments.join(&sep.to_string()));
        if out.is_empty() {
            out.push('.');
        }
        out
    }

    /// Split a Windows drive (`C:`) or UNC (`\\server\share`) prefix off `path`. The prefix is
    /// returned with separators normalized.
    fn split_prefix(self, path: &str) -> (String, &str) {
        if self == PathSyntax::Posix {
            return (String::new(), path);
        }
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return (path[..2].to_owned(), &path[2..]);
        }
        let is_sep = |b: u8| b == b'\\' || b == b'/';
        if bytes.len() > 2 && is_sep(bytes[0]) && is_sep(bytes[1]) && !is_sep(bytes[2]) {
            let mut parts = path[2..].splitn(3, |c: char| self.is_separator(c));
            if let (Some(server), Some(share)) = (parts.next(), parts.next()) {
                if !share.is_empty() {
                    let consumed = 2 + server.len() + 1 + share.len();
                    return (format!(r"\\{server}\{share}"), &path[consumed..]);
                }
            }
        }
        (String::new(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_absolute() {
        assert!(PathSyntax::Posix.is_absolute("/tmp"));
        assert!(!PathSyntax::Posix.is_absolute("relative/path"));
        assert!(!PathSyntax::Posix.is_absolute(""));
        assert!(!PathSyntax::Posix.is_absolute(r"C:\Users"));
    }

    #[test]
    fn windows_absolute() {
        assert!(PathSyntax::Windows.is_absolute(r"C:\ProgramData"));
        assert!(PathSyntax::Windows.is_absolute("C:/ProgramData"));
        assert!(PathSyntax::Windows.is_absolute(r"\ProgramData"));
        assert!(PathSyntax::Windows.is_absolute(r"\\server\share"));
        assert!(!PathSyntax::Windows.is_absolute("C:"));
        assert!(!PathSyntax::Windows.is_absolute("C:ProgramData"));
        assert!(!PathSyntax::Windows.is_absolute(r"AppData\Local"));
    }

    #[test]
    fn posix_join_normalizes() {
        let syntax = PathSyntax::Posix;
        assert_eq!(syntax.join(["/tmp/xdg_data", "TestApp"]), "/tmp/xdg_data/TestApp");
        assert_eq!(syntax.join(["/tmp//a/", "", "b"]), "/tmp/a/b");
        assert_eq!(syntax.join(["/a/b", "../c"]), "/a/c");
        assert_eq!(syntax.join(["/", "..", "x"]), "/x");
        assert_eq!(syntax.join(["a", "../../b"]), "../b");
        assert_eq!(syntax.join([""]), ".");
    }

    #[test]
    fn windows_join_normalizes() {
        let syntax = PathSyntax::Windows;
        assert_eq!(syntax.join(["C:", "ProgramData"]), r"C:\ProgramData");
        assert_eq!(
            syntax.join([r"C:\Users\TestUser", "AppData", "Local"]),
            r"C:\Users\TestUser\AppData\Local"
        );
        assert_eq!(syntax.join(["C:/Users/x/", "", "App"]), r"C:\Users\x\App");
        assert_eq!(syntax.join([r"\\srv\share\data", "App"]), r"\\srv\share\data\App");
        assert_eq!(syntax.join([r"C:\a", r"..\b"]), r"C:\b");
    }
}
