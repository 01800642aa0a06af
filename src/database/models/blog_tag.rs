use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use super::status::BlogTagStatus;
use crate::schema::blog_tags;

/// Link between a tag and a blog, keyed by `(tag_id, bid)`.
#[derive(Debug, Clone, PartialEq, Queryable, Insertable, Serialize, Deserialize)]
#[table_name = "blog_tags"]
pub struct BlogTag {
    pub tag_id: i32,
    pub bid: i32,
    #[serde(default)]
    pub status: BlogTagStatus,
}

impl BlogTag {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<BlogTag>> {
        blog_tags::table
            .order((blog_tags::tag_id.asc(), blog_tags::bid.asc()))
            .load::<BlogTag>(conn)
    }

    pub fn create(conn: &PgConnection, link: &BlogTag) -> QueryResult<BlogTag> {
        diesel::insert_into(blog_tags::table)
            .values(link)
            .get_result(conn)
    }

    /** Only the status can change, the key comes from the path */
    pub fn set_status(conn: &PgConnection, tag_id: i32, bid: i32, status: BlogTagStatus) -> QueryResult<Option<BlogTag>> {
        diesel::update(blog_tags::table.find((tag_id, bid)))
            .set(blog_tags::status.eq(status))
            .get_result(conn)
            .optional()
    }

    pub fn delete(conn: &PgConnection, tag_id: i32, bid: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(blog_tags::table.find((tag_id, bid))).execute(conn)?;
        Ok(deleted > 0)
    }
}
