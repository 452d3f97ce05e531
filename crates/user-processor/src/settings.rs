//! Processor settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{MissingNotifierPolicy, NOTIFICATION_MESSAGE, ProcessorOptions};

/// Configuration values controlling [`crate::UserProcessor`] behaviour.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_PROCESSOR")]
pub struct ProcessorSettings {
    /// Return a status string instead of panicking when no notifier is
    /// configured. Changes the documented fault into a recoverable outcome.
    #[ortho_config(default = false)]
    pub report_missing_notifier: bool,
    /// Optional override for the notification email body.
    pub notification_message: Option<String>,
}

impl ProcessorSettings {
    /// Return the configured notification body, falling back to the default
    /// when unset or blank.
    #[must_use]
    pub fn notification_message(&self) -> &str {
        self.notification_message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(NOTIFICATION_MESSAGE)
    }

    /// Translate settings into processor options.
    #[must_use]
    pub fn options(&self) -> ProcessorOptions {
        let missing_notifier = if self.report_missing_notifier {
            MissingNotifierPolicy::Report
        } else {
            MissingNotifierPolicy::Fault
        };
        ProcessorOptions {
            missing_notifier,
            notification_message: self.notification_message().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for processor settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ProcessorSettings {
        ProcessorSettings::load_from_iter([OsString::from("user-processor")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_PROCESSOR_REPORT_MISSING_NOTIFIER", None::<String>),
            ("USER_PROCESSOR_NOTIFICATION_MESSAGE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.report_missing_notifier);
        assert_eq!(settings.notification_message(), NOTIFICATION_MESSAGE);
        assert_eq!(settings.options(), ProcessorOptions::default());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "USER_PROCESSOR_REPORT_MISSING_NOTIFIER",
                Some("true".to_owned()),
            ),
            (
                "USER_PROCESSOR_NOTIFICATION_MESSAGE",
                Some("Welcome back".to_owned()),
            ),
        ]);

        let options = load_from_empty_args().options();
        assert_eq!(options.missing_notifier, MissingNotifierPolicy::Report);
        assert_eq!(options.notification_message, "Welcome back");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_messages_fall_back_to_default(#[case] message: Option<&str>) {
        let settings = ProcessorSettings {
            report_missing_notifier: false,
            notification_message: message.map(str::to_owned),
        };

        assert_eq!(settings.notification_message(), NOTIFICATION_MESSAGE);
    }
}
