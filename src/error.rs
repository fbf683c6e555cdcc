// error.rs - Startup Error Taxonomy
//
// Every fatal condition the program can hit, plus the single reporter that
// prints it and terminates the process.

use std::fmt;

use crate::constants;

/// Fatal conditions. All of them occur before the overlay loop runs, or
/// tear the overlay down immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Bad argument count, `-h`/`--help`, or an unparsable coordinate.
    /// Carries the program name for the usage line.
    Usage { program: String },
    /// The X11 session could not be reached
    Connection(String),
    /// Color argument was not `#` followed by six hex digits
    InvalidColorFormat(String),
    /// Border argument was not four colon-separated non-negative integers
    InvalidBorderFormat(String),
    /// The default colormap refused one of our colors
    ColorAllocation(String),
    /// A segment falls outside the X11 coordinate range
    Geometry(String),
    /// Creating or mapping a segment window failed
    Window(String),
    /// The running overlay failed (repaint, focus or event loop)
    Runtime(String),
}

impl FrameError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn usage(program: impl Into<String>) -> Self {
        FrameError::Usage { program: program.into() }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Usage { program } => {
                write!(f, "usage: {} {}", program, constants::cli::USAGE_ARGS)
            }
            FrameError::Connection(reason) => write!(f, "cannot open display: {}", reason),
            FrameError::InvalidColorFormat(input) => {
                write!(f, "invalid color '{}', expected #RRGGBB", input)
            }
            FrameError::InvalidBorderFormat(_) => {
                write!(f, "{}", constants::cli::BORDER_FORMAT_MESSAGE)
            }
            FrameError::ColorAllocation(reason) => write!(f, "cannot set color: {}", reason),
            FrameError::Geometry(what) => {
                write!(f, "border does not fit the X11 coordinate range: {}", what)
            }
            FrameError::Window(reason) => write!(f, "cannot create overlay: {}", reason),
            FrameError::Runtime(reason) => write!(f, "overlay failed: {}", reason),
        }
    }
}

impl std::error::Error for FrameError {}

/// Report a fatal error and exit.
///
/// Usage goes to stdout like a help screen; everything else is an
/// `error: ...` line on stderr.
pub fn die(err: &FrameError) -> ! {
    match err {
        FrameError::Usage { .. } => println!("{}", err),
        _ => eprintln!("error: {}", err),
    }
    std::process::exit(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_message_matches_cli_contract() {
        let err = FrameError::InvalidBorderFormat("a:b:c".into());
        assert_eq!(
            format!("error: {}", err),
            "error: borders should be entered in the format 't:r:b:l'"
        );
    }

    #[test]
    fn runtime_failures_are_not_labelled_as_creation() {
        let err = FrameError::Runtime("Event loop error".into());
        assert_eq!(err.to_string(), "overlay failed: Event loop error");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_line_names_program() {
        let err = FrameError::usage("rectframe");
        assert_eq!(err.to_string(), "usage: rectframe x y width height #RRGGBB [t:r:b:l]");
        assert_eq!(err.exit_code(), 1);
    }
}
