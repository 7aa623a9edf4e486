//! Error adapter for converting StratusError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stratus::StratusError;

/// Adapter giving a [`StratusError`] a diagnostic code and help text.
///
/// Build errors carry their own code and help; the other variants get a
/// code only.
pub struct ErrorAdapter<'a>(pub &'a StratusError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            // The message already embeds the cause.
            StratusError::Io(_) | StratusError::Render(_) => None,
            err => std::error::Error::source(err),
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            StratusError::Io(_) => "stratus::io",
            StratusError::Build(err) => err.code(),
            StratusError::Config(_) => "stratus::config",
            StratusError::Render(_) => "stratus::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            StratusError::Build(err) => err.help(),
            StratusError::Render(_) => {
                "check that Graphviz is installed and `dot` is on PATH, or use --format dot"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`StratusError`] for rendering by miette.
pub fn to_reportable(err: &StratusError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use stratus::{BuildError, EndpointRole, identifier::Id};

    use super::*;

    fn code_of(err: &StratusError) -> Option<String> {
        to_reportable(err).code().map(|c| c.to_string())
    }

    fn help_of(err: &StratusError) -> Option<String> {
        to_reportable(err).help().map(|h| h.to_string())
    }

    #[test]
    fn test_build_error_code_and_help() {
        let err = StratusError::Build(BuildError::UnknownNode {
            id: Id::new("nat_b"),
            role: EndpointRole::Target,
        });

        assert_eq!(code_of(&err).as_deref(), Some("stratus::reference"));
        assert_eq!(
            help_of(&err).as_deref(),
            Some("create the node before declaring edges that use it")
        );
        assert_eq!(
            to_reportable(&err).to_string(),
            "edge target `nat_b` does not refer to a declared node"
        );
    }

    #[test]
    fn test_duplicate_node_code() {
        let err = StratusError::Build(BuildError::DuplicateNode(Id::new("alb")));
        assert_eq!(code_of(&err).as_deref(), Some("stratus::duplicate"));
    }

    #[test]
    fn test_non_build_errors() {
        let io_err = StratusError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(code_of(&io_err).as_deref(), Some("stratus::io"));
        assert_eq!(help_of(&io_err), None);

        let config_err = StratusError::Config("bad".to_string());
        assert_eq!(code_of(&config_err).as_deref(), Some("stratus::config"));
        assert_eq!(
            to_reportable(&config_err).to_string(),
            "Configuration error: bad"
        );

        let render_err = StratusError::render("dot: not found");
        assert_eq!(code_of(&render_err).as_deref(), Some("stratus::render"));
        assert!(help_of(&render_err).is_some());
    }

    #[test]
    fn test_graphical_report_includes_code() {
        let err = StratusError::Config("bad".to_string());
        let mut writer = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut writer, &to_reportable(&err))
            .unwrap();

        assert!(writer.contains("stratus::config"));
        assert!(writer.contains("Configuration error: bad"));
    }
}
