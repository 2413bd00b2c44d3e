/// Trigger state for the text being composed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriggerSignal {
    pub active: bool,
    /// Text typed between the trigger character and the cursor.
    pub prefix: String,
    /// Char index of the trigger character, if active.
    pub trigger_pos: Option<usize>,
}

impl TriggerSignal {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn active(prefix: &str) -> Self {
        TriggerSignal {
            active: true,
            prefix: prefix.to_string(),
            trigger_pos: None,
        }
    }
}

/// Detects whether the cursor sits inside a cashtag being typed.
#[derive(Debug, Copy, Clone)]
pub struct CashtagDetector {
    pub trigger: char,
}

impl Default for CashtagDetector {
    fn default() -> Self {
        CashtagDetector { trigger: '$' }
    }
}

impl CashtagDetector {
    /// Scans backward from `cursor` (a char index) for the trigger character.
    ///
    /// The trigger only counts at the start of the text or after whitespace. Whitespace between
    /// the trigger and the cursor ends the cashtag.
    pub fn detect(self, text: &str, cursor: usize) -> TriggerSignal {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());

        for pos in (0..cursor).rev() {
            let ch = chars[pos];

            if ch == self.trigger {
                let at_word_start = pos == 0 || chars[pos - 1].is_whitespace();
                if !at_word_start {
                    return TriggerSignal::inactive();
                }

                return TriggerSignal {
                    active: true,
                    prefix: chars[pos + 1..cursor].iter().collect(),
                    trigger_pos: Some(pos),
                };
            }

            if ch.is_whitespace() {
                return TriggerSignal::inactive();
            }
        }

        TriggerSignal::inactive()
    }
}

/// Shorthand for [`CashtagDetector::detect`] with the `$` trigger.
pub fn detect_cashtag(text: &str, cursor: usize) -> TriggerSignal {
    CashtagDetector::default().detect(text, cursor)
}
