use std::sync::Arc;

use services::{FixedQuestionSource, RoundLoopService, RoundOutcome};
use trivia_core::model::{Question, UserId, Winner};
use trivia_core::session::QuizSession;

fn build_questions(len: usize) -> Vec<Question> {
    (0..len)
        .map(|n| {
            Question::new(
                format!("Q{n}"),
                format!("A{n}"),
                vec![format!("X{n}"), format!("Y{n}"), format!("Z{n}")],
            )
        })
        .collect()
}

fn build_service() -> RoundLoopService {
    let source = FixedQuestionSource::new()
        .with_batch(UserId::One, build_questions(5))
        .with_batch(UserId::Two, build_questions(5));
    RoundLoopService::new(Arc::new(source))
}

fn skip_to_end(session: &mut QuizSession) {
    while !session.is_complete() {
        session.advance().unwrap();
    }
}

#[tokio::test]
async fn full_round_settles_with_the_higher_score_winning() {
    let mut service = build_service();

    // User 1: three correct, one wrong, one pass.
    let mut first = service.start_session(UserId::One).await.unwrap();
    first.answer("A0").unwrap();
    first.advance().unwrap();
    first.answer("X1").unwrap();
    first.advance().unwrap();
    first.answer("A2").unwrap();
    first.advance().unwrap();
    first.advance().unwrap();
    first.answer("A4").unwrap();
    first.advance().unwrap();
    assert!(first.is_complete());
    assert_eq!(first.score(), 13);

    let outcome = service.finish_session(&first).unwrap();
    assert_eq!(outcome, RoundOutcome::Waiting { pending: UserId::Two });

    // User 2: two correct, three passes.
    let mut second = service.start_session(UserId::Two).await.unwrap();
    second.answer("A0").unwrap();
    second.advance().unwrap();
    second.answer("A1").unwrap();
    skip_to_end(&mut second);
    assert_eq!(second.score(), 10);

    let RoundOutcome::Settled(result) = service.finish_session(&second).unwrap() else {
        panic!("second report should settle the round");
    };
    assert_eq!(result.winner(), Winner::User(UserId::One));
    assert_eq!(result.score_of(UserId::One), 13);
    assert_eq!(result.score_of(UserId::Two), 10);
}

#[tokio::test]
async fn settled_round_leaves_the_service_ready_for_another() {
    let mut service = build_service();

    // Round one: both users pass everything, which ties at zero.
    for user in UserId::ALL {
        let mut session = service.start_session(user).await.unwrap();
        skip_to_end(&mut session);
        let outcome = service.finish_session(&session).unwrap();
        if user == UserId::Two {
            let RoundOutcome::Settled(result) = outcome else {
                panic!("round should settle on the second report");
            };
            assert_eq!(result.winner(), Winner::Tie);
        }
    }

    // Round two starts from cleared slots and settles on its own scores.
    let mut first = service.start_session(UserId::One).await.unwrap();
    first.answer("A0").unwrap();
    skip_to_end(&mut first);
    service.finish_session(&first).unwrap();

    let mut second = service.start_session(UserId::Two).await.unwrap();
    skip_to_end(&mut second);
    let RoundOutcome::Settled(result) = service.finish_session(&second).unwrap() else {
        panic!("round should settle on the second report");
    };
    assert_eq!(result.winner(), Winner::User(UserId::One));
    assert_eq!(result.score_of(UserId::One), 5);
    assert_eq!(result.score_of(UserId::Two), 0);
}
