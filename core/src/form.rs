#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
            return;
        }
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn value_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut snapshot = FormSnapshot::new();
        snapshot.push("name", "Alps");
        snapshot.push("link", "http://x/y.jpg");
        let keys: Vec<&str> = snapshot.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "link"]);
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let mut snapshot = FormSnapshot::new();
        snapshot.push("name", "first");
        snapshot.push("link", "x");
        snapshot.push("name", "second");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("name"), Some("second"));
        let keys: Vec<&str> = snapshot.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "link"]);
    }

    #[test]
    fn missing_key_is_none_and_empty_fallback() {
        let snapshot = FormSnapshot::new();
        assert_eq!(snapshot.get("name"), None);
        assert_eq!(snapshot.value_or_empty("name"), "");
        assert!(snapshot.is_empty());
    }
}
