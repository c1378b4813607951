//! 噪音判别服务 - 业务能力层
//!
//! 判断一段文本是真正的考题还是试卷上的管理性说明文字。
//! 只做过滤，从不修改文本。

/// 管理性说明短语目录（全部小写）
const NOISE_PHRASES: [&str; 15] = [
    "all questions are compulsory",
    "instructions to",
    "max marks",
    "duration:",
    "assume suitable",
    "use of calculator",
    "course outcome",
    "the level of",
    "solve any two",
    "solve any one",
    "attempt any",
    "answer any",
    "end of paper",
    "***",
    "rough work",
];

/// 判断文本是否为噪音（说明文字而非考题）
///
/// 任意一个目录短语作为子串出现即判定为噪音。
pub fn is_noise(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    NOISE_PHRASES
        .iter()
        .any(|phrase| text_lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compulsory_instruction_is_noise() {
        assert!(is_noise("All questions are compulsory. Max Marks: 80"));
    }

    #[test]
    fn test_real_question_is_not_noise() {
        assert!(!is_noise("Explain the OSI reference model in detail"));
    }

    #[test]
    fn test_phrases_match_case_insensitively() {
        assert!(is_noise("DURATION: 3 Hours"));
        assert!(is_noise("Attempt ANY four of the following"));
        assert!(is_noise("Use of Calculator is not allowed"));
    }

    #[test]
    fn test_phrase_matches_as_substring() {
        assert!(is_noise("Note: solve any two questions from section B"));
        assert!(is_noise("*** End ***"));
        assert!(is_noise("Space for rough work only"));
    }

    #[test]
    fn test_empty_text_is_not_noise() {
        assert!(!is_noise(""));
    }
}
