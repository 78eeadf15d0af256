//! Random-event prompts

use serde::{Deserialize, Serialize};

/// A random event offered to the player, rendered as a modal with one
/// button per choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPrompt {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub choices: Vec<EventChoice>,
}

/// A single choice. The server also attaches an `effect` object, which the
/// client never reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub text: String,
}

impl EventPrompt {
    /// Choice labels in display order
    pub fn choice_texts(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_event_and_ignores_effects() {
        let event: EventPrompt = serde_json::from_value(serde_json::json!({
            "title": "Wine Tasting",
            "description": "A vineyard owner waves you over.",
            "choices": [
                { "text": "Taste the wine", "effect": { "stamina": -10 } },
                { "text": "Politely decline", "effect": {} }
            ]
        }))
        .unwrap();

        assert_eq!(
            event.choice_texts(),
            vec!["Taste the wine".to_string(), "Politely decline".to_string()]
        );
    }
}
