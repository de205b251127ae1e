use crate::error::HookError;
use crate::process;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

/// author, date and log message of the committed revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub author: String,
    pub date: String,
    /// length indicator reported by the inspection tool, when numeric
    pub log_length: Option<usize>,
    pub log_message: String,
    pub revision: u64,
}

impl CommitInfo {
    /// parse `svnlook info` output
    ///
    /// the first three lines are author, date and log length; everything after
    /// the third newline is the log message, so multi-line messages survive
    pub fn parse(text: &str, revision: u64) -> Result<Self, String> {
        let mut fields = text.splitn(4, '\n');
        let (Some(author), Some(date), Some(log_length)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(format!(
                "expected author, date and log length lines, got {} line(s)",
                text.lines().count()
            ));
        };

        Ok(Self {
            author: author.to_string(),
            date: date.to_string(),
            log_length: log_length.trim().parse().ok(),
            log_message: fields.next().unwrap_or("").trim_end_matches('\n').to_string(),
            revision,
        })
    }
}

/// source of commit metadata for one revision
pub trait Inspector {
    fn info(&self) -> Result<CommitInfo, HookError>;

    /// raw `<code> <path>` lines
    fn changed(&self) -> Result<Vec<String>, HookError>;
}

/// runs `svnlook` against a repository at a pinned revision
#[derive(Debug, Clone)]
pub struct SvnLook {
    pub command: String,
    pub repo: PathBuf,
    pub revision: u64,
    pub timeout: Option<Duration>,
}

impl SvnLook {
    fn run(&self, subcommand: &str) -> Result<String, HookError> {
        let revision = self.revision.to_string();
        process::run(
            &self.command,
            &[
                OsStr::new(subcommand),
                self.repo.as_os_str(),
                OsStr::new("-r"),
                OsStr::new(&revision),
            ],
            None,
            self.timeout,
        )
        .map_err(|message| HookError::inspection(format!("svnlook {subcommand}"), message))
    }
}

impl Inspector for SvnLook {
    fn info(&self) -> Result<CommitInfo, HookError> {
        let output = self.run("info")?;
        CommitInfo::parse(&output, self.revision)
            .map_err(|message| HookError::inspection("svnlook info", message))
    }

    fn changed(&self) -> Result<Vec<String>, HookError> {
        let output = self.run("changed")?;
        Ok(output.lines().map(str::to_string).collect())
    }
}
