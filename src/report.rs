use crate::changeset::{ChangeSet, ChangeStatus};
use crate::context::OtherSection;
use crate::svnlook::CommitInfo;
use std::fmt::Write;

const SECTIONS: [(&str, ChangeStatus); 4] = [
    ("Modified", ChangeStatus::Modified),
    ("Added", ChangeStatus::Added),
    ("Deleted", ChangeStatus::Deleted),
    ("Other", ChangeStatus::Other),
];

/// render the cvs style commit summary
///
/// a section is written only when its own bucket is non-empty; with
/// `OtherSection::DeletedPaths` the body under "Other:" is the deleted list
pub fn format_report(
    info: &CommitInfo,
    changes: &ChangeSet,
    other_section: OtherSection,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Changes by: {}", info.author.trim());
    let _ = writeln!(output, "Date:       {}", info.date.trim());
    let _ = writeln!(output, "Revision:   {}", info.revision);
    output.push('\n');

    for (heading, status) in SECTIONS {
        if changes.bucket(status).is_empty() {
            continue;
        }

        let paths = match (status, other_section) {
            (ChangeStatus::Other, OtherSection::DeletedPaths) => changes.deleted.as_slice(),
            _ => changes.bucket(status),
        };

        let _ = writeln!(output, "{heading}:");
        for path in paths {
            let _ = writeln!(output, "\t{path}");
        }
        output.push('\n');
    }

    output.push_str("Log message:\n");
    output.push_str(&info.log_message);
    output.push('\n');

    output
}
