//! Hand-off message text

use enrol_record::{RegistrationRecord, EMAIL_NOT_PROVIDED};
use serde::{Deserialize, Serialize};

/// Second line of the message: two spaces, not empty
const HEADING_SPACER: &str = "  ";

/// Chat message announcing a new registration
///
/// Lines are joined with `\n`. The layout:
///
/// ```text
/// *NOVA INSCRIÇÃO - <academy>*
/// (two spaces)
/// *Nome:* ...
/// ...
/// *Cursos de interesse:*
/// • <course>
///
/// Veja o formulário em anexo.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    /// Academy name in the heading
    pub academy: String,
    /// Shown in place of a missing e-mail
    pub missing_email: String,
}

impl MessageTemplate {
    /// Template for an academy
    #[must_use]
    pub fn new(academy: impl Into<String>) -> Self {
        Self {
            academy: academy.into(),
            ..Self::default()
        }
    }

    /// Compose the message for a record
    #[must_use]
    pub fn compose(&self, record: &RegistrationRecord) -> String {
        let mut lines = vec![
            format!("*NOVA INSCRIÇÃO - {}*", self.academy),
            HEADING_SPACER.to_string(),
            format!("*Nome:* {}", record.full_name),
            format!("*Idade:* {}", record.age),
            format!("*WhatsApp:* {}", record.whatsapp),
            format!("*Email:* {}", record.email_or(&self.missing_email)),
            format!("*Escolaridade:* {}", record.education),
            format!("*Nível:* {}", record.knowledge_level),
            format!("*Fonte:* {}", record.referral_source),
            String::new(),
            "*Cursos de interesse:*".to_string(),
        ];
        if record.courses_of_interest.is_empty() {
            lines.push(String::new());
        }
        lines.extend(record.courses_of_interest.iter().map(|c| format!("• {c}")));
        lines.push(String::new());
        lines.push("Veja o formulário em anexo.".to_string());
        lines.join("\n")
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            academy: "TECH_STAR ACADEMY".to_string(),
            missing_email: EMAIL_NOT_PROVIDED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            full_name: "Rui".to_string(),
            age: 20,
            whatsapp: "912345678".to_string(),
            email: String::new(),
            education: "técnico".to_string(),
            courses_of_interest: vec!["Robótica".to_string()],
            knowledge_level: "Avançado".to_string(),
            referral_source: "eventos".to_string(),
        }
    }

    #[test]
    fn missing_email_uses_placeholder() {
        let message = MessageTemplate::default().compose(&record());
        assert!(message.contains("*Email:* Não fornecido\n"));
    }

    #[test]
    fn heading_names_academy() {
        let message = MessageTemplate::new("OUTRA").compose(&record());
        assert!(message.starts_with("*NOVA INSCRIÇÃO - OUTRA*\n  \n*Nome:* Rui\n"));
        assert!(message.ends_with("• Robótica\n\nVeja o formulário em anexo."));
    }
}
