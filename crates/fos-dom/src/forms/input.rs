//! Input types
//!
//! Only the distinctions that change `value`/`checked` behaviour are kept.

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
    Hidden,
    Checkbox,
    Radio,
    Submit,
    Reset,
    Button,
    Other,
}

impl InputType {
    /// Parse the `type` attribute; missing or unknown types are text
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "password" => Self::Password,
            "email" => Self::Email,
            "number" => Self::Number,
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "hidden" => Self::Hidden,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            "date" | "time" | "datetime-local" | "month" | "week" | "color" | "range"
            | "file" | "image" => Self::Other,
            _ => Self::Text,
        }
    }

    /// Checkbox or radio
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// `value` reflects the attribute instead of a dirty value
    pub fn value_is_attribute(self) -> bool {
        matches!(
            self,
            Self::Hidden | Self::Submit | Self::Reset | Self::Button | Self::Checkbox | Self::Radio
        )
    }

    pub fn is_button(self) -> bool {
        matches!(self, Self::Submit | Self::Reset | Self::Button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(InputType::parse("CHECKBOX"), InputType::Checkbox);
        assert_eq!(InputType::parse(""), InputType::Text);
        assert_eq!(InputType::parse("bogus"), InputType::Text);
        assert_eq!(InputType::parse("date"), InputType::Other);
    }

    #[test]
    fn test_classification() {
        assert!(InputType::Radio.is_checkable());
        assert!(!InputType::Text.is_checkable());
        assert!(InputType::Hidden.value_is_attribute());
        assert!(!InputType::Email.value_is_attribute());
    }
}
