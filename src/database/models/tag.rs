use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use crate::schema::tags;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct Tag {
    pub tag_id: i32,
    pub tname: String,
}

#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset, Serialize, Deserialize)]
#[table_name = "tags"]
pub struct TagForm {
    pub tname: String,
}

impl Tag {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<Tag>> {
        tags::table.order(tags::tag_id.asc()).load::<Tag>(conn)
    }

    pub fn create(conn: &PgConnection, form: &TagForm) -> QueryResult<Tag> {
        diesel::insert_into(tags::table)
            .values(form)
            .get_result(conn)
    }

    pub fn replace(conn: &PgConnection, tag_id: i32, form: &TagForm) -> QueryResult<Option<Tag>> {
        diesel::update(tags::table.find(tag_id))
            .set(form)
            .get_result(conn)
            .optional()
    }

    pub fn delete(conn: &PgConnection, tag_id: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(tags::table.find(tag_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
