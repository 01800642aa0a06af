use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use super::status::BlogStatus;
use crate::schema::blogs;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct Blog {
    pub bid: i32,
    pub image: String,
    pub title: String,
    pub content: String,
    /// Not checked against `categories`
    pub category_id: Option<i32>,
    pub status: BlogStatus,
}

#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset, Serialize, Deserialize)]
#[table_name = "blogs"]
#[changeset_options(treat_none_as_null = "true")]
pub struct BlogForm {
    pub image: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    pub status: BlogStatus,
}

impl Blog {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<Blog>> {
        blogs::table.order(blogs::bid.asc()).load::<Blog>(conn)
    }

    pub fn exists(conn: &PgConnection, blog_id: i32) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(blogs::table.find(blog_id))).get_result(conn)
    }

    pub fn create(conn: &PgConnection, form: &BlogForm) -> QueryResult<Blog> {
        diesel::insert_into(blogs::table)
            .values(form)
            .get_result(conn)
    }

    pub fn replace(conn: &PgConnection, blog_id: i32, form: &BlogForm) -> QueryResult<Option<Blog>> {
        diesel::update(blogs::table.find(blog_id))
            .set(form)
            .get_result(conn)
            .optional()
    }

    /** Deletes only the blog row, comments and tag links keep their `bid` */
    pub fn delete(conn: &PgConnection, blog_id: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(blogs::table.find(blog_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
impl BlogForm {
    pub fn into_blog(self, bid: i32) -> Blog {
        Blog {
            bid,
            image: self.image,
            title: self.title,
            content: self.content,
            category_id: self.category_id,
            status: self.status,
        }
    }
}
