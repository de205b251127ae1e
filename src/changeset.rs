/// status of a single changed path as reported by `svnlook changed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Modified,
    Added,
    Deleted,
    Other,
}

impl ChangeStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "U" => Self::Modified,
            "A" => Self::Added,
            "D" => Self::Deleted,
            _ => Self::Other,
        }
    }
}

/// one parsed line of `svnlook changed` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLine {
    /// `<code> <path>`
    Entry(ChangeEntry),
    /// anything that isn't exactly two whitespace separated tokens
    Malformed(String),
}

impl ChangeLine {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(code), Some(path), None) => Self::Entry(ChangeEntry {
                status: ChangeStatus::from_code(code),
                path: path.to_string(),
            }),
            _ => Self::Malformed(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub status: ChangeStatus,
    pub path: String,
}

impl ChangeEntry {
    /// top level path segment, or the whole path when it has no separator
    pub fn module(&self) -> &str {
        self.path
            .split_once('/')
            .map_or(self.path.as_str(), |(module, _)| module)
    }
}

/// changed paths bucketed by status, plus the distinct modules they touch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub other: Vec<String>,
    /// first path segments in first-seen order, no duplicates
    pub modules: Vec<String>,
}

impl ChangeSet {
    /// classify raw `svnlook changed` lines; blank lines are ignored
    pub fn classify<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changes = Self::default();

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            match ChangeLine::parse(line) {
                ChangeLine::Entry(entry) => {
                    changes.add_module(entry.module());
                    changes.bucket_mut(entry.status).push(entry.path);
                }
                // malformed lines keep their raw text and name no module
                ChangeLine::Malformed(raw) => changes.other.push(raw),
            }
        }

        changes
    }

    pub fn bucket(&self, status: ChangeStatus) -> &[String] {
        match status {
            ChangeStatus::Modified => &self.modified,
            ChangeStatus::Added => &self.added,
            ChangeStatus::Deleted => &self.deleted,
            ChangeStatus::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, status: ChangeStatus) -> &mut Vec<String> {
        match status {
            ChangeStatus::Modified => &mut self.modified,
            ChangeStatus::Added => &mut self.added,
            ChangeStatus::Deleted => &mut self.deleted,
            ChangeStatus::Other => &mut self.other,
        }
    }

    fn add_module(&mut self, module: &str) {
        if !self.modules.iter().any(|m| m == module) {
            self.modules.push(module.to_string());
        }
    }

    /// mail subject tag: the modules joined with commas
    pub fn subject_tag(&self) -> String {
        self.modules.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_changes() {
        let changes =
            ChangeSet::classify(["U src/a.py", "A src/b.py", "D old/c.py", "X weird line"]);

        assert_eq!(changes.modified, ["src/a.py"]);
        assert_eq!(changes.added, ["src/b.py"]);
        assert_eq!(changes.deleted, ["old/c.py"]);
        assert_eq!(changes.other, ["X weird line"]);
        assert_eq!(changes.modules, ["src", "old"]);
    }

    #[test]
    fn test_each_path_lands_in_one_bucket() {
        let lines = ["U a/1", "A b/2", "D c/3", "_U d/4", "UU e/5"];
        let changes = ChangeSet::classify(lines);

        let total = changes.modified.len()
            + changes.added.len()
            + changes.deleted.len()
            + changes.other.len();
        assert_eq!(total, lines.len());

        for status in [
            ChangeStatus::Modified,
            ChangeStatus::Added,
            ChangeStatus::Deleted,
        ] {
            assert_eq!(changes.bucket(status).len(), 1, "{status:?}");
        }
        assert_eq!(changes.bucket(ChangeStatus::Other), ["d/4", "e/5"]);
    }

    #[test]
    fn test_unknown_code_keeps_path() {
        let changes = ChangeSet::classify(["_U trunk/props.txt"]);
        assert_eq!(changes.other, ["trunk/props.txt"]);
        assert_eq!(changes.modules, ["trunk"]);
    }

    #[test]
    fn test_malformed_lines_keep_raw_text() {
        let changes = ChangeSet::classify(["A + trunk/copied.c", "lonely", "U   trunk/ok.c"]);

        assert_eq!(changes.other, ["A + trunk/copied.c", "lonely"]);
        assert_eq!(changes.modified, ["trunk/ok.c"]);
        assert_eq!(changes.modules, ["trunk"]);
    }

    #[test]
    fn test_modules_deduplicated_in_first_seen_order() {
        let changes = ChangeSet::classify([
            "U web/index.html",
            "A lib/util.c",
            "D web/old.html",
            "U README",
            "A lib/new/deep.c",
            "U README",
        ]);

        assert_eq!(changes.modules, ["web", "lib", "README"]);
        assert_eq!(changes.subject_tag(), "web, lib, README");
    }

    #[test]
    fn test_module_of_path_without_separator() {
        let entry = ChangeEntry {
            status: ChangeStatus::Modified,
            path: "Makefile".to_string(),
        };
        assert_eq!(entry.module(), "Makefile");

        let entry = ChangeEntry {
            status: ChangeStatus::Added,
            path: "trunk/".to_string(),
        };
        assert_eq!(entry.module(), "trunk");
    }

    #[test]
    fn test_empty_input() {
        let changes = ChangeSet::classify(Vec::<String>::new());
        assert!(changes.modules.is_empty());
        assert_eq!(changes, ChangeSet::default());

        let changes = ChangeSet::classify(["", "   "]);
        assert_eq!(changes, ChangeSet::default());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            ChangeLine::parse("D   branches/x.txt"),
            ChangeLine::Entry(ChangeEntry {
                status: ChangeStatus::Deleted,
                path: "branches/x.txt".to_string(),
            })
        );
        assert_eq!(
            ChangeLine::parse("X weird line"),
            ChangeLine::Malformed("X weird line".to_string())
        );
    }
}
