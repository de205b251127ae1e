use crate::constants::COMMENT_PREFIX;
use std::fs;
use std::io;
use std::path::Path;

/// username to display address map, loaded from a tab separated file
///
/// lines starting with `#` are comments; anything that doesn't split into
/// exactly two tab separated fields is skipped
#[derive(Debug, Default)]
pub struct AuthorDirectory {
    entries: Vec<(String, String)>,
}

impl AuthorDirectory {
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.starts_with(COMMENT_PREFIX))
            .filter_map(|line| {
                let mut fields = line.split('\t');
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(username), Some(email), None) => {
                        Some((username.to_string(), email.trim().to_string()))
                    }
                    _ => None,
                }
            })
            .collect();
        Self { entries }
    }

    /// first matching entry wins
    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, email)| email.as_str())
    }
}

/// resolve `username` to an address, falling back to the username itself
/// when there is no directory, it can't be read, or it has no entry
pub fn resolve(directory: Option<&Path>, username: &str) -> String {
    directory
        .and_then(|path| AuthorDirectory::load(path).ok())
        .and_then(|authors| authors.lookup(username).map(str::to_string))
        .unwrap_or_else(|| username.to_string())
}
