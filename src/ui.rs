use std::io::IsTerminal;

/// write one coloured line to stdout or stderr, ignoring write failures
#[macro_export]
macro_rules! emit {
    ($stream:ident, $colour:ident, $($arg:tt)*) => {{
        use colored::Colorize;
        use std::io::Write;
        let _ = writeln!(std::io::$stream(), "{}", format!($($arg)*).$colour());
    }};
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::emit!(stderr, yellow, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit!(stderr, red, $($arg)*)
    };
}

#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        $crate::emit!(stdout, green, $($arg)*)
    };
}

/// hooks usually run with stderr piped back to the svn client, so only colour a real terminal
pub fn configure_colour() {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}
