use crate::tokenizer::tokenize;
use crate::utils::push_with_first_uppercased;

const TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// Where the sentence-case scan currently is relative to a sentence start.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Boundary {
    /// The next letter begins a sentence.
    AwaitingCapital,
    MidSentence,
}

impl Boundary {
    fn after(self, c: char) -> Self {
        if is_terminator(c) {
            Boundary::AwaitingCapital
        } else if c.is_whitespace() {
            self
        } else {
            Boundary::MidSentence
        }
    }
}

/// Capitalize the first letter of every sentence and lower-case all other letters.
///
/// A sentence starts at the beginning of the text and after every `.`, `!` or `?`.
/// Whitespace between a terminator and the next letter is skipped over, but any
/// other character there (a digit, a dash) ends the wait, so the letter after it
/// stays lower case. Abbreviations are not special: `"mr. smith"` becomes
/// `"Mr. Smith"`.
///
/// ```
/// assert_eq!(
///     recase::sentencecase("hELLo world. tHIS is PYTHON."),
///     "Hello world. This is python."
/// );
/// ```
pub fn sentencecase(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(text.len());
    let mut state = Boundary::AwaitingCapital;

    for c in text.chars() {
        if c.is_alphabetic() {
            match state {
                Boundary::AwaitingCapital => result.extend(c.to_uppercase()),
                Boundary::MidSentence => result.extend(c.to_lowercase()),
            }
        } else {
            result.push(c);
        }
        state = state.after(c);
    }

    result
}

/// Upper-case the first character of every word and lower-case everything else.
///
/// A word is a run of alphanumeric characters and apostrophes that starts with an
/// alphanumeric character, so `"don't"` is one word. Existing capitalization inside
/// words is discarded.
///
/// ```
/// assert_eq!(recase::titlecase("the cat in THE HAT"), "The Cat In The Hat");
/// ```
pub fn titlecase(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let mut result = String::with_capacity(lowered.len());

    for token in tokenize(&lowered) {
        if token.is_word() {
            push_with_first_uppercased(&mut result, token.text);
        } else {
            result.push_str(token.text);
        }
    }

    result
}

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentencecase_capitalizes_each_sentence() {
        assert_eq!(
            sentencecase("hELLo world. tHIS is PYTHON."),
            "Hello world. This is python."
        );
        assert_eq!(
            sentencecase("hELLo world! this IS great."),
            "Hello world! This is great."
        );
        assert_eq!(sentencecase("what? no way!yes"), "What? No way!Yes");
    }

    #[test]
    fn sentencecase_first_letter_is_capitalized_anywhere() {
        assert_eq!(sentencecase("   ...hello"), "   ...Hello");
        assert_eq!(sentencecase("\n\tindented"), "\n\tIndented");
    }

    #[test]
    fn sentencecase_leading_punctuation_ends_the_wait() {
        assert_eq!(sentencecase("\"quoted\" text"), "\"quoted\" text");
        assert_eq!(sentencecase("123 go"), "123 go");
        assert_eq!(sentencecase("done. -- next"), "Done. -- next");
        assert_eq!(sentencecase("step 1. 2nd step"), "Step 1. 2nd step");
    }

    #[test]
    fn sentencecase_consecutive_terminators() {
        assert_eq!(sentencecase("really?! yes... OK"), "Really?! Yes... Ok");
        assert_eq!(sentencecase("?!.a"), "?!.A");
    }

    #[test]
    fn sentencecase_does_not_know_abbreviations() {
        assert_eq!(
            sentencecase("MR. SMITH went to e.g. london"),
            "Mr. Smith went to e.G. London"
        );
    }

    #[test]
    fn sentencecase_without_letters_is_unchanged() {
        assert_eq!(sentencecase(""), "");
        assert_eq!(sentencecase("12, 34 - 56!"), "12, 34 - 56!");
        assert_eq!(sentencecase(" \n "), " \n ");
    }

    #[test]
    fn sentencecase_non_ascii() {
        assert_eq!(sentencecase("ÉCOLE. été"), "École. Été");
        assert_eq!(sentencecase("привет. МИР"), "Привет. Мир");
    }

    #[test]
    fn titlecase_capitalizes_each_word() {
        assert_eq!(titlecase("the cat in THE HAT"), "The Cat In The Hat");
        assert_eq!(titlecase("a taLE oF TWO cities"), "A Tale Of Two Cities");
    }

    #[test]
    fn titlecase_keeps_contractions_together() {
        assert_eq!(titlecase("DON'T stop BELIEVIN'"), "Don't Stop Believin'");
        assert_eq!(titlecase("'twas the night"), "'Twas The Night");
    }

    #[test]
    fn titlecase_splits_on_punctuation() {
        assert_eq!(titlecase("well-known e-mail"), "Well-Known E-Mail");
        assert_eq!(titlecase("hello,world;foo"), "Hello,World;Foo");
        assert_eq!(titlecase("3rd place, 2ND try"), "3rd Place, 2nd Try");
    }

    #[test]
    fn titlecase_discards_inner_capitalization() {
        assert_eq!(titlecase("McDONALD iPhone"), "Mcdonald Iphone");
    }

    #[test]
    fn titlecase_preserves_whitespace() {
        assert_eq!(titlecase("  two  spaces\n"), "  Two  Spaces\n");
        assert_eq!(titlecase(""), "");
        assert_eq!(titlecase("-- !! --"), "-- !! --");
    }

    #[test]
    fn upper_and_lower() {
        assert_eq!(uppercase("MiXeD Case"), "MIXED CASE");
        assert_eq!(lowercase("MiXeD Case"), "mixed case");
        assert_eq!(uppercase("straße"), "STRASSE");
        assert_eq!(lowercase("123 !?"), "123 !?");
        assert_eq!(uppercase(""), "");
        assert_eq!(lowercase(""), "");
    }

    #[test]
    fn boundary_transitions() {
        use Boundary::*;
        assert_eq!(MidSentence.after('.'), AwaitingCapital);
        assert_eq!(AwaitingCapital.after(' '), AwaitingCapital);
        assert_eq!(MidSentence.after('\n'), MidSentence);
        assert_eq!(AwaitingCapital.after('-'), MidSentence);
        assert_eq!(AwaitingCapital.after('a'), MidSentence);
        assert_eq!(AwaitingCapital.after('!'), AwaitingCapital);
    }
}
