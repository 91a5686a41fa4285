/// One entry of the option list.
///
/// Entries with `section` set are non-selectable headers; every selection
/// path skips them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    pub key: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub section: bool,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            section: false,
        }
    }

    pub fn section(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            section: true,
        }
    }

    pub fn is_section(&self) -> bool {
        self.section
    }
}
