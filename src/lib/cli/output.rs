//! What a run of the program tells the user
use serde::Serialize;

use crate::cli::input::OutputFormat;
use crate::comparator::Bound;
use crate::error::ErrorKind;

/// The outcome of a single command
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Report {
    pub effective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<Bound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    pub gnu_extensions: bool,
    /// Whether the configuration satisfies the required standard. Always `true`
    /// for the `effective` command.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Reason {
    pub kind: ErrorKind,
    pub message: String,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}")),
        }
    }

    fn render_text(&self) -> String {
        match (&self.bound, &self.reason) {
            (None, _) => self.effective.clone().unwrap_or_default(),
            (Some(_), None) => self.valid.to_string(),
            (Some(_), Some(reason)) => format!("{} ({})", self.valid, reason.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            effective: Some("gnu14".into()),
            bound: Some(Bound::Max),
            required: Some("11".into()),
            gnu_extensions: false,
            valid: false,
            reason: Some(Reason {
                kind: ErrorKind::StandardTooNew,
                message: "Current cppstd (gnu14) is higher than the required C++ standard (11)."
                    .into(),
            }),
        }
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(
            report().render(OutputFormat::Text),
            "false (Current cppstd (gnu14) is higher than the required C++ standard (11).)"
        );

        let effective_only = Report {
            bound: None,
            required: None,
            valid: true,
            reason: None,
            ..report()
        };
        assert_eq!(effective_only.render(OutputFormat::Text), "gnu14");
    }

    #[test]
    fn test_json_rendering() {
        let json: serde_json::Value =
            serde_json::from_str(&report().render(OutputFormat::Json)).unwrap();
        assert_eq!(json["effective"], "gnu14");
        assert_eq!(json["bound"], "max");
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"]["kind"], "standard_too_new");
    }
}
