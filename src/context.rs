use std::path::{Path, PathBuf};
use std::time::Duration;

/// where the report goes; always names at least one sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destinations {
    Mail(String),
    Changelog(PathBuf),
    Both { mailto: String, changelog: PathBuf },
}

impl Destinations {
    pub fn mailto(&self) -> Option<&str> {
        match self {
            Self::Mail(mailto) | Self::Both { mailto, .. } => Some(mailto),
            Self::Changelog(_) => None,
        }
    }

    pub fn changelog(&self) -> Option<&Path> {
        match self {
            Self::Changelog(changelog) | Self::Both { changelog, .. } => Some(changelog),
            Self::Mail(_) => None,
        }
    }
}

/// what to render beneath the "Other:" heading
///
/// historical output listed the deleted paths there; kept as the default so
/// existing changelogs stay consistent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtherSection {
    #[default]
    DeletedPaths,
    OtherPaths,
}

/// validated configuration for a single hook invocation
#[derive(Debug, Clone)]
pub struct HookContext {
    /// repository passed by the svn server
    pub repo: PathBuf,

    /// revision that was just committed
    pub revision: u64,

    /// mail and/or changelog sinks
    pub destinations: Destinations,

    /// optional username to address map
    pub authors: Option<PathBuf>,

    /// inspection command line (split with shell rules)
    pub svnlook: String,

    /// mail transfer agent command line (split with shell rules)
    pub sendmail: String,

    /// limit for each external command, none waits indefinitely
    pub timeout: Option<Duration>,

    pub other_section: OtherSection,

    pub verbose: bool,
}
