/// Turn one raw model response into Jira-safe label tokens.
///
/// The model is asked for a comma-separated list but nothing enforces that
/// shape, so this stays lenient: every comma-separated entry becomes exactly
/// one token, empty or not. Hyphens touching a word character and interior
/// whitespace runs both become underscores, since Jira labels cannot contain
/// spaces. Hyphen replacement runs first so that a free-standing hyphen
/// (`"a - b"`) survives as-is rather than picking up word neighbors from the
/// collapsed whitespace.
pub fn sanitize_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| collapse_whitespace(&replace_word_hyphens(entry)))
        .collect()
}

fn replace_word_hyphens(entry: &str) -> String {
    let chars: Vec<char> = entry.chars().collect();
    let mut out = String::with_capacity(entry.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            let prev_word = i.checked_sub(1).is_some_and(|j| is_word(chars[j]));
            let next_word = chars.get(i + 1).copied().is_some_and(is_word);
            out.push(if prev_word || next_word { '_' } else { '-' });
        } else {
            out.push(c);
        }
    }
    out
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn collapse_whitespace(entry: &str) -> String {
    entry.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_hyphens_and_whitespace() {
        assert_eq!(
            sanitize_labels("login-bug, UI error , payment flow"),
            vec!["login_bug", "UI_error", "payment_flow"]
        );
    }

    #[test]
    fn keeps_one_token_per_entry() {
        assert_eq!(sanitize_labels("a,,b"), vec!["a", "", "b"]);
        assert_eq!(sanitize_labels(""), vec![""]);
    }

    #[test]
    fn collapses_whitespace_runs_to_one_underscore() {
        assert_eq!(sanitize_labels("user   onboarding\tflow"), vec!["user_onboarding_flow"]);
        assert_eq!(sanitize_labels("  padded  "), vec!["padded"]);
    }

    #[test]
    fn free_standing_hyphen_is_left_alone() {
        // Only hyphens adjacent to a word character become underscores.
        assert_eq!(sanitize_labels("a - b"), vec!["a_-_b"]);
        assert_eq!(sanitize_labels("--x"), vec!["-_x"]);
    }

    #[test]
    fn hyphen_between_words_becomes_underscore() {
        assert_eq!(sanitize_labels("sign-in, multi-factor-auth"), vec!["sign_in", "multi_factor_auth"]);
    }

    #[test]
    fn stray_punctuation_survives_without_panic() {
        assert_eq!(sanitize_labels(" . ,!"), vec![".", "!"]);
    }
}
