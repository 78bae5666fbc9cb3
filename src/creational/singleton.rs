//! One shared configuration instance, owned by the caller.
//!
//! Instead of a hidden global, the caller constructs an [`AppConfiguration`]
//! once and lends it out. Every borrower observes the same instance for as
//! long as the caller keeps it alive.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfiguration {
    pub option1: Option<String>,
    pub option2: Option<String>,
}

impl AppConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Component that writes to the shared configuration.
pub fn configure(config: &mut AppConfiguration, option1: impl Into<String>) {
    config.option1 = Some(option1.into());
}

/// Component that only reads it.
pub fn describe(config: &AppConfiguration) -> String {
    format!(
        "option1={}, option2={}",
        config.option1.as_deref().unwrap_or("unset"),
        config.option2.as_deref().unwrap_or("unset")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_write_through_one_borrow_when_reading_through_another_then_sees_value() {
        let mut config = AppConfiguration::new();

        configure(&mut config, "value1");

        assert_eq!(describe(&config), "option1=value1, option2=unset");
    }
}
