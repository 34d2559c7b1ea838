use crossterm::style::Color;
use struggle_core::record::Status;

use super::Tone;

/// Trait for converting output tones to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Option<Color>;

    /// Whether the text should also be bold.
    fn is_bold(&self) -> bool {
        false
    }
}

impl AsTermColor for Status {
    fn as_crossterm_color(&self) -> Option<Color> {
        Some(match self {
            Status::Pending => Color::Blue,
            Status::InProgress => Color::Yellow,
            Status::OfferReceived => Color::Magenta,
            Status::Hired => Color::Green,
            Status::Rejected => Color::Red,
        })
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            Status::Pending | Status::InProgress | Status::OfferReceived
        )
    }
}

impl AsTermColor for Tone {
    fn as_crossterm_color(&self) -> Option<Color> {
        match self {
            Tone::Plain | Tone::Heading => None,
            Tone::Success => Some(Color::Green),
            Tone::Warning => Some(Color::Yellow),
            Tone::Error => Some(Color::Red),
            Tone::Status(status) => status.as_crossterm_color(),
        }
    }

    fn is_bold(&self) -> bool {
        match self {
            Tone::Plain | Tone::Warning => false,
            Tone::Heading | Tone::Success | Tone::Error => true,
            Tone::Status(status) => status.is_bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_are_distinct() {
        let colors: Vec<Option<Color>> = Status::ALL
            .iter()
            .map(AsTermColor::as_crossterm_color)
            .collect();

        for (i, color) in colors.iter().enumerate() {
            assert!(color.is_some());
            assert!(!colors[i + 1..].contains(color));
        }
    }

    #[test]
    fn test_tone_delegates_to_status() {
        let tone = Tone::Status(Status::Hired);
        assert_eq!(tone.as_crossterm_color(), Some(Color::Green));
        assert!(!tone.is_bold());
        assert!(Tone::Status(Status::Pending).is_bold());
    }

    #[test]
    fn test_plain_has_no_color() {
        assert_eq!(Tone::Plain.as_crossterm_color(), None);
        assert!(!Tone::Plain.is_bold());
        assert!(Tone::Heading.is_bold());
    }
}
