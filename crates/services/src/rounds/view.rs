use rand::Rng;
use rand::seq::SliceRandom;

use trivia_core::model::Question;

/// Render-ready projection of one question.
///
/// The correct answer is folded into the incorrect ones and the combined
/// list is shuffled with a uniform Fisher-Yates pass, so every ordering of
/// the options is equally likely. The view carries no notion of which
/// option is correct; grading stays with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    ordinal: usize,
    prompt: String,
    options: Vec<String>,
}

impl QuestionView {
    /// Project a question for display. `ordinal` is 1-based.
    #[must_use]
    pub fn project<R: Rng + ?Sized>(question: &Question, ordinal: usize, rng: &mut R) -> Self {
        let mut options = question.incorrect_answers().to_vec();
        options.push(question.correct_answer().to_string());
        options.shuffle(rng);

        Self {
            ordinal,
            prompt: question.prompt().to_string(),
            options,
        }
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Option text at `index`, if in range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Heading line in the form `Question N: <prompt>`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {}: {}", self.ordinal, self.prompt)
    }
}

//
// ─── Tests ─────────────────────────────────────────────────────────────────────
//
