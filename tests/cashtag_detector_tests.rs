use cashtag_sniffer::{detect_cashtag, CashtagDetector, TriggerSignal};

#[cfg(test)]
mod tests {
    use super::*;

    fn at_end(text: &str) -> TriggerSignal {
        detect_cashtag(text, text.chars().count())
    }

    #[test]
    fn test_detects_prefix_at_cursor() {
        let signal = at_end("gm $bon");

        assert!(signal.active);
        assert_eq!(signal.prefix, "bon");
        assert_eq!(signal.trigger_pos, Some(3));
    }

    #[test]
    fn test_trigger_alone_is_active_with_empty_prefix() {
        let signal = at_end("$");

        assert!(signal.active);
        assert_eq!(signal.prefix, "");
    }

    #[test]
    fn test_whitespace_ends_cashtag() {
        assert!(!at_end("gm $bonk ").active);
        assert!(!at_end("no cashtags here").active);
        assert!(!at_end("").active);
    }

    #[test]
    fn test_trigger_must_start_a_word() {
        assert!(!at_end("price is 5$ab").active);
        assert!(at_end("5 $ab").active);
    }

    #[test]
    fn test_cursor_in_middle_of_text() {
        let text = "$btc and $eth";

        let signal = detect_cashtag(text, 3);
        assert!(signal.active);
        assert_eq!(signal.prefix, "bt");

        assert!(!detect_cashtag(text, 6).active);

        // Out of range cursors are clamped
        assert_eq!(detect_cashtag(text, 500).prefix, "eth");
    }

    #[test]
    fn test_multibyte_text() {
        let signal = at_end("🚀 $wif");

        assert!(signal.active);
        assert_eq!(signal.prefix, "wif");
        assert_eq!(signal.trigger_pos, Some(2));
    }

    #[test]
    fn test_custom_trigger() {
        let detector = CashtagDetector { trigger: '#' };
        let text = "tagging #sol";

        assert_eq!(detector.detect(text, text.chars().count()).prefix, "sol");
        assert!(!detector.detect("$sol", 4).active);
    }
}
