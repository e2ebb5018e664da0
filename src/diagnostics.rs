use crate::config::CONFIG_FILE;
use crate::error::Error;
use crate::role::Message;

/// Bold on.
const BOLD: &str = "\x1b[1m";
/// Attributes off.
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Print markup messages to stderr, one per line.
pub fn print_messages(messages: &[Message]) {
    for message in messages {
        eprintln!("{message}");
    }
}

/// Render an error as a structured markdown diagnostic: what happened,
/// and for the fixable ones, how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::ConfigInvalid { path, reason } => format!(
            "\
# Error: Invalid Config

`{}` could not be read: {reason}

## Fix

Only `include` and `exclude` are recognized, both lists of path prefixes:

    include = [\"doc/\"]
    exclude = [\"doc/_build/\"]
",
            path.display()
        ),
        Error::DuplicateDomain { name } => format!(
            "\
# Error: Duplicate Domain

Domain `{name}` was registered twice.
"
        ),
        Error::DuplicateRole { name } => format!(
            "\
# Error: Duplicate Role

Role `{name}` was registered twice.
"
        ),
        Error::FileNotFound { path } => format!(
            "\
# Error: File Not Found

`{}` does not exist.
",
            path.display()
        ),
        Error::UnknownDomain { name } => format!(
            "\
# Error: Unknown Domain

A role was added to domain `{name}` before the domain was registered.
"
        ),
        Error::Io(_) | Error::Json(_) | Error::Pattern(_) => render_generic(e),
    };
}

/// Fallback rendering for wrapped library errors.
fn render_generic(e: &Error) -> String {
    return format!(
        "\
# Error

{e}

Check `{CONFIG_FILE}` and the paths passed on the command line.
"
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn duplicate_role_names_the_role() {
        let md = render_error(&Error::DuplicateRole {
            name: "swoc:git".to_string(),
        });
        assert!(md.starts_with("# Error: Duplicate Role"));
        assert!(md.contains("`swoc:git`"));
    }

    #[test]
    fn invalid_config_shows_fix() {
        let md = render_error(&Error::ConfigInvalid {
            path: PathBuf::from(".swocdoc.toml"),
            reason: "expected `[`".to_string(),
        });
        assert!(md.contains("## Fix"));
        assert!(md.contains("`.swocdoc.toml` could not be read: expected `[`"));
    }

    #[test]
    fn io_errors_fall_back_to_generic_block() {
        let md = render_error(&Error::Io(std::io::Error::other("disk gone")));
        assert!(md.starts_with("# Error\n"));
        assert!(md.contains("disk gone"));
    }
}
