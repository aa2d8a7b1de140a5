mod get_question_results;

pub use self::get_question_results::*;
