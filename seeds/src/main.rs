#[macro_use]
extern crate log;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{database_url, get_conn, models::Choice, models::Question, new_pool};
use errors::Error;

// question text, days from now it is published, choices
const POLLS: &[(&str, i64, &[&str])] = &[
    ("What's new?", -3, &["Not much", "The sky", "Just hacking again"]),
    (
        "Which race is the strongest?",
        -1,
        &["Terran", "Zerg", "Protoss"],
    ),
    ("Who wins the next season?", 7, &["The favourite", "An underdog"]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let pool = new_pool(&database_url())?;
    let conn = get_conn(&pool)?;
    let now = Utc::now();

    for (question_text, days, choices) in POLLS {
        let question = Question::create(&conn, question_text, now + Duration::days(*days))?;
        for choice_text in choices.iter() {
            Choice::create(&conn, question.id, choice_text)?;
        }

        info!("Seeded question {} - {}", question.id, question);
    }

    Ok(())
}
