use serde::{Deserialize, Serialize};

/// State of the copy-code button label.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
}

impl CopyStatus {
    /// Outcome of a clipboard write. Failures leave the label as it was.
    pub fn after_copy(self, succeeded: bool) -> Self {
        if succeeded { CopyStatus::Copied } else { self }
    }

    /// The confirmation timer fired. Any timer reverts the label, even one
    /// started by an earlier copy.
    pub fn after_confirmation_elapsed(self) -> Self {
        CopyStatus::Idle
    }

    pub fn label(self, config: &crate::config::ClipboardSection) -> &str {
        match self {
            CopyStatus::Idle => &config.idle_label,
            CopyStatus::Copied => &config.copied_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClipboardSection;

    #[test]
    fn successful_copy_shows_confirmation_until_timer() {
        let config = ClipboardSection::default();
        let status = CopyStatus::default().after_copy(true);

        assert_eq!(status.label(&config), "copied !");
        assert_eq!(status.after_confirmation_elapsed().label(&config), "copy code");
    }

    #[test]
    fn failed_copy_keeps_label() {
        assert_eq!(CopyStatus::Idle.after_copy(false), CopyStatus::Idle);
        assert_eq!(CopyStatus::Copied.after_copy(false), CopyStatus::Copied);
    }
}
