//! Notification sink for in-game narration.
//!
//! Actions narrate through [`MessageSink`]; the engine never reads messages
//! back. [`MessageLog`] is the stacking log used by clients and tests.

/// Semantic colour tag. Mapping to RGB is a rendering concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageColor {
    Default,
    PlayerAttack,
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    HealthRecovered,
    StatusEffectApplied,
    Descend,
    Impossible,
}

impl MessageColor {
    /// Attack narration colour, chosen by who is attacking.
    pub fn attack(attacker_is_player: bool) -> Self {
        if attacker_is_player {
            Self::PlayerAttack
        } else {
            Self::EnemyAttack
        }
    }
}

/// Fire-and-forget narration target.
pub trait MessageSink {
    fn add_message(&mut self, text: String, color: MessageColor);
}

/// A narrated line. Consecutive identical lines stack into `count`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: MessageColor,
    pub count: u32,
}

impl Message {
    /// Text with a `(xN)` suffix when the line was stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates the raw texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|message| message.text.as_str())
    }
}

impl MessageSink for MessageLog {
    fn add_message(&mut self, text: String, color: MessageColor) {
        if let Some(last) = self.messages.last_mut()
            && last.text == text
            && last.color == color
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message {
            text,
            color,
            count: 1,
        });
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
