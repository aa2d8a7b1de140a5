use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::choices::{self, table};

pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
struct NewChoice<'a> {
    question_id: i32,
    choice_text: &'a str,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct ChoiceDetails {
    pub id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &SqliteConnection,
        question_id: i32,
        choice_text: &str,
    ) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id};

        conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(table)
                .values(NewChoice {
                    question_id,
                    choice_text,
                })
                .execute(conn)?;

            let choice = choices_table.order(id.desc()).first::<Choice>(conn)?;

            Ok(choice)
        })
    }

    pub fn find_by_question_id(
        conn: &SqliteConnection,
        question_id: i32,
    ) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id)
            .load::<Choice>(conn)?;

        Ok(results)
    }

    pub fn find_details_by_question_id(
        conn: &SqliteConnection,
        question_id: i32,
    ) -> Result<Vec<ChoiceDetails>, Error> {
        use choices::dsl::{
            choice_text, choices as choices_table, id, question_id as question_id_field,
        };

        let results = choices_table
            .select((id, choice_text))
            .filter(question_id_field.eq(question_id))
            .order(id)
            .load::<ChoiceDetails>(conn)?;

        Ok(results)
    }

    /// Adds one vote to a choice of the given question. A choice belonging to
    /// another question is rejected as if nothing was selected.
    pub fn vote(conn: &SqliteConnection, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        conn.transaction::<_, Error, _>(|| {
            let updated = diesel::update(
                choices_table
                    .filter(id.eq(choice_id))
                    .filter(question_id_field.eq(question_id)),
            )
            .set(votes.eq(votes + 1))
            .execute(conn)?;

            if updated == 0 {
                return Err(Error::BadRequest(NO_CHOICE_SELECTED.into()));
            }

            let choice = choices_table.find(choice_id).first::<Choice>(conn)?;

            Ok(choice)
        })
    }
}
