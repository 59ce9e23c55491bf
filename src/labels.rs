use serde::Serialize;

/// Exit-sign class recognized by the detection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitClass {
    /// Generic exit signage without a known lighting state.
    Exit,
    /// Illuminated exit sign.
    LitExitSign,
    /// Exit sign that is present but not illuminated.
    UnlitExitSign,
}

impl ExitClass {
    /// Canonical label name, as used in the training label set.
    pub fn name(&self) -> &'static str {
        match self {
            ExitClass::Exit => "exit",
            ExitClass::LitExitSign => "lit_exit_sign",
            ExitClass::UnlitExitSign => "unlit_exit_sign",
        }
    }

    /// Weight of this class in the safety scoring formula.
    ///
    /// Lit signs count fully, unlit signs count for little, and signage with an
    /// unknown lighting state sits in between.
    pub fn weight(&self) -> f32 {
        match self {
            ExitClass::Exit => 0.7,
            ExitClass::LitExitSign => 1.0,
            ExitClass::UnlitExitSign => 0.3,
        }
    }
}

impl std::fmt::Display for ExitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordered set of class labels; index position defines the class id.
///
/// Fixed at configuration time and shared by every decode call.
#[derive(Debug, Clone)]
pub struct LabelSet {
    classes: Vec<ExitClass>,
}

impl Default for LabelSet {
    /// The training label order: exit, lit_exit_sign, unlit_exit_sign.
    fn default() -> Self {
        Self {
            classes: vec![
                ExitClass::Exit,
                ExitClass::LitExitSign,
                ExitClass::UnlitExitSign,
            ],
        }
    }
}

impl LabelSet {
    /// Create a label set from an explicit class ordering.
    pub fn new(classes: Vec<ExitClass>) -> Self {
        Self { classes }
    }

    /// Look up the class for a class id, if the id is in range.
    pub fn get(&self, class_id: usize) -> Option<ExitClass> {
        self.classes.get(class_id).copied()
    }

    /// Number of classes in the set.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the set contains no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_order() {
        let labels = LabelSet::default();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get(0), Some(ExitClass::Exit));
        assert_eq!(labels.get(1), Some(ExitClass::LitExitSign));
        assert_eq!(labels.get(2), Some(ExitClass::UnlitExitSign));
        assert_eq!(labels.get(3), None);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ExitClass::Exit.name(), "exit");
        assert_eq!(ExitClass::LitExitSign.name(), "lit_exit_sign");
        assert_eq!(ExitClass::UnlitExitSign.name(), "unlit_exit_sign");
    }

    #[test]
    fn test_class_weights() {
        assert_eq!(ExitClass::LitExitSign.weight(), 1.0);
        assert_eq!(ExitClass::Exit.weight(), 0.7);
        assert_eq!(ExitClass::UnlitExitSign.weight(), 0.3);
    }
}
