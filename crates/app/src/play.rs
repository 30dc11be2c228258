use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use services::{QuestionSource, RoundLoopService, RoundOutcome, Scorecard};
use trivia_core::model::{RoundResult, UserId};
use trivia_core::session::AnswerVerdict;

use crate::vm::QuizVm;

type InputLines = dyn Iterator<Item = io::Result<String>>;

/// Run quiz rounds over the terminal until the player stops.
///
/// Each round walks both users through their quiz in turn; once both are
/// done the round settles, the winner is announced, and a scorecard per
/// user lands in `out_dir`.
pub async fn run(source: Arc<dyn QuestionSource>, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut service = RoundLoopService::new(source);
    let mut lines = io::stdin().lines();

    loop {
        for user in UserId::ALL {
            let session = service.start_session(user).await?;
            println!();
            println!("=== {user} ===");

            let mut vm = QuizVm::new(session);
            drive_session(&mut vm, &mut lines)?;
            println!("Quiz ended for {user}.");

            if let RoundOutcome::Settled(result) = service.finish_session(vm.session())? {
                announce(&result);
                write_scorecards(&result, out_dir)?;
            }
        }

        if !prompt_replay(&mut lines)? {
            return Ok(());
        }
    }
}

fn drive_session(vm: &mut QuizVm, lines: &mut InputLines) -> Result<(), Box<dyn Error>> {
    while let Some(view) = vm.view().cloned() {
        println!();
        println!("{}", view.heading());
        for (n, option) in view.options().iter().enumerate() {
            println!("  {}) {option}", n + 1);
        }

        let verdict = loop {
            print!("answer 1-{} or p to pass: ", view.options().len());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Err("input closed".into());
            };
            let input = line?;
            let input = input.trim();

            if input.eq_ignore_ascii_case("p") {
                break None;
            }
            if let Some(index) = parse_choice(input, view.options().len())
                && let Some(text) = view.option(index)
            {
                break Some(vm.select(text)?);
            }
            println!("enter a number from 1 to {} or p", view.options().len());
        };

        match verdict {
            Some(AnswerVerdict::Correct) => println!("Correct! +5 (score: {})", vm.score()),
            Some(AnswerVerdict::Incorrect) => println!("Wrong! -2 (score: {})", vm.score()),
            None => println!("Passed. (score: {})", vm.score()),
        }

        vm.advance()?;
    }

    println!();
    println!("Final score: {}", vm.score());
    Ok(())
}

/// Map a 1-based menu entry to a 0-based option index.
fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let choice: usize = input.parse().ok()?;
    if (1..=option_count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

fn announce(result: &RoundResult) {
    println!();
    for user in UserId::ALL {
        println!("{user}: {}", result.score_of(user));
    }
    println!("{}", result.winner());
}

fn write_scorecards(result: &RoundResult, out_dir: &Path) -> io::Result<()> {
    for card in Scorecard::from_result(result) {
        let path = out_dir.join(card.file_name());
        fs::write(&path, card.to_html())?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn prompt_replay(lines: &mut InputLines) -> Result<bool, Box<dyn Error>> {
    print!("Play another round? [y/N] ");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(false);
    };
    Ok(matches!(line?.trim(), "y" | "Y"))
}

//
// ─── Tests ─────────────────────────────────────────────────────────────────────
//
