// external commands
pub const SVNLOOK_COMMAND: &str = "svnlook";
pub const SENDMAIL_COMMAND: &str = "/usr/sbin/sendmail";

// mail
pub const SUBJECT_PREFIX: &str = "SVN Commit: ";

// changelog
pub const CHANGELOG_SEPARATOR: &str = "===>";

// authors file
pub const COMMENT_PREFIX: char = '#';
