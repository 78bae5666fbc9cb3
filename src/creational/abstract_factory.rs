//! Abstract factory: families of UI widgets for one platform theme.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

pub trait Button {
    fn paint(&self) -> String;
}

pub trait TextBox {
    fn show(&self) -> String;
}

/// Creates a matching set of widgets.
pub trait UiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_box(&self) -> Box<dyn TextBox>;
}

struct WindowsButton;
struct WindowsTextBox;
struct MacOsButton;
struct MacOsTextBox;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "Painting button in Windows style".to_string()
    }
}

impl TextBox for WindowsTextBox {
    fn show(&self) -> String {
        "Showing text box in Windows style".to_string()
    }
}

impl Button for MacOsButton {
    fn paint(&self) -> String {
        "Painting button in macOS style".to_string()
    }
}

impl TextBox for MacOsTextBox {
    fn show(&self) -> String {
        "Showing text box in macOS style".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

impl UiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(WindowsTextBox)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsFactory;

impl UiFactory for MacOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(MacOsTextBox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Windows,
    MacOs,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Windows, Theme::MacOs];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Windows => f.write_str("windows"),
            Theme::MacOs => f.write_str("macos"),
        }
    }
}

impl FromStr for Theme {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Theme::Windows),
            "macos" | "mac" => Ok(Theme::MacOs),
            _ => Err(PatternError::unknown("theme", s)),
        }
    }
}

pub fn factory_for(theme: Theme) -> Box<dyn UiFactory> {
    match theme {
        Theme::Windows => Box::new(WindowsFactory),
        Theme::MacOs => Box::new(MacOsFactory),
    }
}

/// Build one widget of each kind from the same family.
pub fn create_interface(factory: &dyn UiFactory) -> (Box<dyn Button>, Box<dyn TextBox>) {
    (factory.create_button(), factory.create_text_box())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_theme_when_creating_interface_then_widgets_share_family() {
        let (button, text_box) = create_interface(factory_for(Theme::MacOs).as_ref());
        assert_eq!(button.paint(), "Painting button in macOS style");
        assert_eq!(text_box.show(), "Showing text box in macOS style");
    }

    #[test]
    fn given_theme_key_when_parsing_then_round_trips_display() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn given_unknown_theme_when_parsing_then_errors() {
        assert_eq!(
            "linux".parse::<Theme>(),
            Err(PatternError::unknown("theme", "linux"))
        );
    }
}
