// ============================================================================
// Editable Field Interface
// DOM-like field abstraction, independent of any UI toolkit
// ============================================================================

/// An editable value holder the binder can read and write.
///
/// This is the only shape the crate assumes about the surrounding UI: a
/// current string value with get/set access. Focus-loss notification stays
/// with the caller, which invokes the binder's commit when it fires.
pub trait EditableField: Send {
    /// Current raw value as typed/displayed.
    fn value(&self) -> String;

    /// Replace the displayed value.
    fn set_value(&mut self, value: &str);

    /// Clear the field.
    fn clear(&mut self) {
        self.set_value("");
    }
}

/// In-memory field for tests, demos, and headless callers.
#[derive(Debug, Default, Clone)]
pub struct MemoryField {
    value: String,
}

impl MemoryField {
    /// Create a field holding an initial value.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
        }
    }
}

impl EditableField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_field_round_trip() {
        let mut field = MemoryField::new("12,5");
        assert_eq!(field.value(), "12,5");

        field.set_value("1234,50");
        assert_eq!(field.value(), "1234,50");

        field.clear();
        assert_eq!(field.value(), "");
    }
}
