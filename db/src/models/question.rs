use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use diesel::{
    self, result::Error as DBError, Connection, ExpressionMethods, QueryDsl, RunQueryDsl,
    SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::publication::{self, QUESTION_NOT_FOUND};
use crate::schema::questions::{self, table};

// sqlite keeps timestamps without an offset, they are always written as UTC
#[derive(Queryable)]
struct QuestionRow {
    id: i32,
    question_text: String,
    pub_date: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
struct NewQuestion<'a> {
    question_text: &'a str,
    pub_date: NaiveDateTime,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question_text: row.question_text,
            pub_date: Utc.from_utc_datetime(&row.pub_date),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question_text)
    }
}

impl Question {
    pub fn create(
        conn: &SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, questions as questions_table};

        conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(table)
                .values(NewQuestion {
                    question_text,
                    pub_date: pub_date.naive_utc(),
                })
                .execute(conn)?;

            let row = questions_table.order(id.desc()).first::<QuestionRow>(conn)?;

            Ok(row.into())
        })
    }

    pub fn find_visible(
        conn: &SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let rows = questions_table
            .filter(pub_date.le(now.naive_utc()))
            .order((pub_date.desc(), id.desc()))
            .load::<QuestionRow>(conn)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    pub fn find_visible_by_id(
        conn: &SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        questions_table
            .find(question_id)
            .filter(pub_date.le(now.naive_utc()))
            .first::<QuestionRow>(conn)
            .map(Question::from)
            .map_err(|err| match err {
                // a question that is not published yet must look like a missing one
                DBError::NotFound => {
                    debug!("No visible question with id {}", question_id);
                    Error::NotFound(QUESTION_NOT_FOUND.into())
                }
                _ => err.into(),
            })
    }

    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        publication::is_published(self.pub_date, now)
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        publication::was_published_recently(self.pub_date, now)
    }
}
