use std::collections::BTreeMap;

/// Per-field validation messages for one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    fields: BTreeMap<F, &'static str>,
}

impl<F: Ord + Copy> FormErrors<F> {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Record `message` for `field`. The first message for a field wins.
    pub fn insert(&mut self, field: F, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field/message pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    /// `Ok(value)` when no errors were recorded.
    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl<F: Ord + Copy> Default for FormErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A text input counts as filled only if it has non-whitespace content.
pub(crate) fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
