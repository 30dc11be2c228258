use rand::rng;

use services::QuestionView;
use trivia_core::session::{AnswerVerdict, QuizSession, SessionError, SessionStep};

/// View-model over one running session.
///
/// Projects the current question once and holds the projection, so option
/// order stays stable between rendering and the player's selection.
pub struct QuizVm {
    session: QuizSession,
    view: Option<QuestionView>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let mut vm = Self {
            session,
            view: None,
        };
        vm.refresh_view();
        vm
    }

    fn refresh_view(&mut self) {
        self.view = self.session.current_question().map(|question| {
            QuestionView::project(question, self.session.current_index() + 1, &mut rng())
        });
    }

    /// Projection of the question on display, `None` once complete.
    #[must_use]
    pub fn view(&self) -> Option<&QuestionView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.session.score()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Grade the selected option text against the question on display.
    ///
    /// # Errors
    ///
    /// Propagates the session's guards: one answer per question, none
    /// after completion.
    pub fn select(&mut self, option_text: &str) -> Result<AnswerVerdict, SessionError> {
        self.session.answer(option_text)
    }

    /// Move on to the next question and project it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session is already over.
    pub fn advance(&mut self) -> Result<SessionStep, SessionError> {
        let step = self.session.advance()?;
        self.refresh_view();
        Ok(step)
    }
}

//
// ─── Tests ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{Question, QuestionBatch, UserId};

    fn build_vm(len: usize) -> QuizVm {
        let questions = (0..len)
            .map(|n| {
                Question::new(
                    format!("prompt {n}"),
                    format!("answer {n}"),
                    vec![format!("wrong {n}")],
                )
            })
            .collect();
        let batch = QuestionBatch::new(questions).unwrap();
        QuizVm::new(QuizSession::new(UserId::One, batch))
    }

    #[test]
    fn starts_on_the_first_question() {
        let vm = build_vm(3);
        let view = vm.view().unwrap();
        assert_eq!(view.ordinal(), 1);
        assert_eq!(view.prompt(), "prompt 0");
        assert_eq!(view.options().len(), 2);
    }

    #[test]
    fn selecting_the_correct_option_scores() {
        let mut vm = build_vm(3);
        let verdict = vm.select("answer 0").unwrap();
        assert_eq!(verdict, AnswerVerdict::Correct);
        assert_eq!(vm.score(), 5);
    }

    #[test]
    fn second_selection_is_rejected() {
        let mut vm = build_vm(3);
        vm.select("answer 0").unwrap();
        let err = vm.select("wrong 0").unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered);
        assert_eq!(vm.score(), 5);
    }

    #[test]
    fn advancing_projects_the_next_question() {
        let mut vm = build_vm(3);
        let step = vm.advance().unwrap();
        assert_eq!(step, SessionStep::Next);
        assert_eq!(vm.view().unwrap().ordinal(), 2);
    }

    #[test]
    fn final_advance_clears_the_view() {
        let mut vm = build_vm(1);
        vm.select("answer 0").unwrap();
        let step = vm.advance().unwrap();
        assert_eq!(step, SessionStep::Complete);
        assert!(vm.view().is_none());
        assert!(vm.is_complete());
    }
}
