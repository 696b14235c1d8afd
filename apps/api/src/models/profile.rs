use serde::{Deserialize, Serialize};

/// Optional student details supplied by the profile store. Only used to
/// personalize the advisory prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: Option<String>,
    pub grade_level: Option<String>,
    pub goals: Option<String>,
}

impl StudentProfile {
    /// One line per populated field, or `None` when nothing useful is set.
    pub fn summary(&self) -> Option<String> {
        let fields = [
            ("Name", &self.name),
            ("Grade level", &self.grade_level),
            ("Goals", &self.goals),
        ];

        let lines: Vec<String> = fields
            .iter()
            .filter_map(|(label, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{label}: {v}"))
            })
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}
