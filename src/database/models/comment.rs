use chrono::{NaiveDateTime, Utc};
use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use super::status::CommentStatus;
use crate::schema::comments;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct Comment {
    pub cid: i32,
    /// Not checked against `users`
    pub userid: i32,
    pub bid: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub status: CommentStatus,
}

/// Request body for creating or replacing a comment. There is no status
/// field, new comments are always active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentForm {
    pub userid: i32,
    pub bid: i32,
    pub comment: String,
}

#[derive(Insertable)]
#[table_name = "comments"]
pub struct CommentInsert {
    pub userid: i32,
    pub bid: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub status: CommentStatus,
}

impl CommentInsert {
    pub fn from_form(form: CommentForm, now: NaiveDateTime) -> Self {
        CommentInsert {
            userid: form.userid,
            bid: form.bid,
            comment: form.comment,
            created_at: now,
            updated_at: now,
            status: CommentStatus::Active,
        }
    }
}

impl Comment {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<Comment>> {
        comments::table
            .order(comments::cid.asc())
            .load::<Comment>(conn)
    }

    pub fn create(conn: &PgConnection, form: CommentForm) -> QueryResult<Comment> {
        let record = CommentInsert::from_form(form, Utc::now().naive_utc());
        diesel::insert_into(comments::table)
            .values(&record)
            .get_result(conn)
    }

    /** Replaces the author, blog and text and bumps `updated_at`, status is kept */
    pub fn replace(conn: &PgConnection, comment_id: i32, form: &CommentForm) -> QueryResult<Option<Comment>> {
        diesel::update(comments::table.find(comment_id))
            .set((
                comments::userid.eq(form.userid),
                comments::bid.eq(form.bid),
                comments::comment.eq(&form.comment),
                comments::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result(conn)
            .optional()
    }

    pub fn delete(conn: &PgConnection, comment_id: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(comments::table.find(comment_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
