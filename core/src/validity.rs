#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub name: String,
    pub is_valid: bool,
    pub message: String,
}

impl FieldReport {
    pub fn valid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_valid: false,
            message: message.into(),
        }
    }
}

pub fn form_is_valid(reports: &[FieldReport]) -> bool {
    reports.iter().all(|report| report.is_valid)
}
