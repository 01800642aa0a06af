use diesel::{
    pg::PgConnection,
    r2d2::{ConnectionManager, PooledConnection},
    Connection,
};

use super::{
    db_utils::PgPool,
    models::{
        blog::*, blog_tag::*, category::*, comment::*, status::BlogTagStatus, tag::*, user::*,
    },
};
use crate::app::AppError;

/// Every persistence operation the routes need. Each call is one unit of
/// work against the store: a single read, or a single mutation that is
/// committed on success and rolled back on any error.
///
/// Lookups by key report a missing row as [`AppError::NotFound`] with the
/// message the routes send back to the client.
pub trait Store: Send + Sync {
    fn list_users(&self) -> Result<Vec<User>, AppError>;
    fn create_user(&self, form: UserForm) -> Result<User, AppError>;
    fn update_user(&self, user_id: i32, form: UserForm) -> Result<User, AppError>;
    fn delete_user(&self, user_id: i32) -> Result<(), AppError>;

    fn list_blogs(&self) -> Result<Vec<Blog>, AppError>;
    fn create_blog(&self, form: BlogForm) -> Result<Blog, AppError>;
    fn update_blog(&self, blog_id: i32, form: BlogForm) -> Result<Blog, AppError>;
    fn delete_blog(&self, blog_id: i32) -> Result<(), AppError>;

    fn list_categories(&self) -> Result<Vec<Category>, AppError>;
    fn create_category(&self, form: CategoryForm) -> Result<Category, AppError>;
    fn update_category(&self, category_id: i32, form: CategoryForm) -> Result<Category, AppError>;
    fn delete_category(&self, category_id: i32) -> Result<(), AppError>;

    fn list_comments(&self) -> Result<Vec<Comment>, AppError>;
    /// Rejects the comment when its blog does not exist.
    fn create_comment(&self, form: CommentForm) -> Result<Comment, AppError>;
    fn update_comment(&self, comment_id: i32, form: CommentForm) -> Result<Comment, AppError>;
    fn delete_comment(&self, comment_id: i32) -> Result<(), AppError>;

    fn list_tags(&self) -> Result<Vec<Tag>, AppError>;
    fn create_tag(&self, form: TagForm) -> Result<Tag, AppError>;
    fn update_tag(&self, tag_id: i32, form: TagForm) -> Result<Tag, AppError>;
    fn delete_tag(&self, tag_id: i32) -> Result<(), AppError>;

    fn list_blog_tags(&self) -> Result<Vec<BlogTag>, AppError>;
    fn create_blog_tag(&self, link: BlogTag) -> Result<BlogTag, AppError>;
    fn update_blog_tag(&self, tag_id: i32, bid: i32, status: BlogTagStatus) -> Result<BlogTag, AppError>;
    fn delete_blog_tag(&self, tag_id: i32, bid: i32) -> Result<(), AppError>;
}

pub fn user_not_found() -> AppError {
    AppError::NotFound(String::from("User not found"))
}

pub fn blog_not_found() -> AppError {
    AppError::NotFound(String::from("Blog not found"))
}

pub fn category_not_found() -> AppError {
    AppError::NotFound(String::from("Category not found"))
}

pub fn comment_not_found(comment_id: i32) -> AppError {
    AppError::NotFound(format!("Comment with id {} not found", comment_id))
}

pub fn comment_blog_not_found(bid: i32) -> AppError {
    AppError::NotFound(format!("Blog with bid {} not found", bid))
}

pub fn tag_not_found() -> AppError {
    AppError::NotFound(String::from("Tag not found"))
}

pub fn blog_tag_not_found() -> AppError {
    AppError::NotFound(String::from("BlogTag not found"))
}

/** Postgres backed store, every call checks its own connection out of the pool */
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Connection for a single unit of work, returned to the pool on drop.
    fn handle(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, AppError> {
        Ok(self.pool.get()?)
    }

    /// Runs `work` in a transaction, an `Err` rolls everything back.
    fn transact<T, F>(&self, work: F) -> Result<T, AppError>
    where
        F: FnOnce(&PgConnection) -> Result<T, AppError>,
    {
        let conn = self.handle()?;
        conn.transaction::<T, AppError, _>(|| work(&conn))
    }
}

fn found<T>(row: Option<T>, missing: AppError) -> Result<T, AppError> {
    row.ok_or(missing)
}

fn removed(deleted: bool, missing: AppError) -> Result<(), AppError> {
    if deleted {
        Ok(())
    } else {
        Err(missing)
    }
}

impl Store for PgStore {
    fn list_users(&self) -> Result<Vec<User>, AppError> {
        let conn = self.handle()?;
        Ok(User::all(&conn)?)
    }

    fn create_user(&self, form: UserForm) -> Result<User, AppError> {
        self.transact(|conn| Ok(User::create(conn, &form)?))
    }

    fn update_user(&self, user_id: i32, form: UserForm) -> Result<User, AppError> {
        self.transact(|conn| found(User::replace(conn, user_id, &form)?, user_not_found()))
    }

    fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        self.transact(|conn| removed(User::delete(conn, user_id)?, user_not_found()))
    }

    fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        let conn = self.handle()?;
        Ok(Blog::all(&conn)?)
    }

    fn create_blog(&self, form: BlogForm) -> Result<Blog, AppError> {
        self.transact(|conn| Ok(Blog::create(conn, &form)?))
    }

    fn update_blog(&self, blog_id: i32, form: BlogForm) -> Result<Blog, AppError> {
        self.transact(|conn| found(Blog::replace(conn, blog_id, &form)?, blog_not_found()))
    }

    fn delete_blog(&self, blog_id: i32) -> Result<(), AppError> {
        self.transact(|conn| removed(Blog::delete(conn, blog_id)?, blog_not_found()))
    }

    fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let conn = self.handle()?;
        Ok(Category::all(&conn)?)
    }

    fn create_category(&self, form: CategoryForm) -> Result<Category, AppError> {
        self.transact(|conn| Ok(Category::create(conn, &form)?))
    }

    fn update_category(&self, category_id: i32, form: CategoryForm) -> Result<Category, AppError> {
        self.transact(|conn| {
            found(Category::replace(conn, category_id, &form)?, category_not_found())
        })
    }

    fn delete_category(&self, category_id: i32) -> Result<(), AppError> {
        self.transact(|conn| removed(Category::delete(conn, category_id)?, category_not_found()))
    }

    fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        let conn = self.handle()?;
        Ok(Comment::all(&conn)?)
    }

    fn create_comment(&self, form: CommentForm) -> Result<Comment, AppError> {
        self.transact(|conn| {
            if !Blog::exists(conn, form.bid)? {
                return Err(comment_blog_not_found(form.bid));
            }
            Ok(Comment::create(conn, form)?)
        })
    }

    fn update_comment(&self, comment_id: i32, form: CommentForm) -> Result<Comment, AppError> {
        self.transact(|conn| {
            found(Comment::replace(conn, comment_id, &form)?, comment_not_found(comment_id))
        })
    }

    fn delete_comment(&self, comment_id: i32) -> Result<(), AppError> {
        self.transact(|conn| {
            removed(Comment::delete(conn, comment_id)?, comment_not_found(comment_id))
        })
    }

    fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        let conn = self.handle()?;
        Ok(Tag::all(&conn)?)
    }

    fn create_tag(&self, form: TagForm) -> Result<Tag, AppError> {
        self.transact(|conn| Ok(Tag::create(conn, &form)?))
    }

    fn update_tag(&self, tag_id: i32, form: TagForm) -> Result<Tag, AppError> {
        self.transact(|conn| found(Tag::replace(conn, tag_id, &form)?, tag_not_found()))
    }

    fn delete_tag(&self, tag_id: i32) -> Result<(), AppError> {
        self.transact(|conn| removed(Tag::delete(conn, tag_id)?, tag_not_found()))
    }

    fn list_blog_tags(&self) -> Result<Vec<BlogTag>, AppError> {
        let conn = self.handle()?;
        Ok(BlogTag::all(&conn)?)
    }

    fn create_blog_tag(&self, link: BlogTag) -> Result<BlogTag, AppError> {
        self.transact(|conn| Ok(BlogTag::create(conn, &link)?))
    }

    fn update_blog_tag(&self, tag_id: i32, bid: i32, status: BlogTagStatus) -> Result<BlogTag, AppError> {
        self.transact(|conn| {
            found(BlogTag::set_status(conn, tag_id, bid, status)?, blog_tag_not_found())
        })
    }

    fn delete_blog_tag(&self, tag_id: i32, bid: i32) -> Result<(), AppError> {
        self.transact(|conn| removed(BlogTag::delete(conn, tag_id, bid)?, blog_tag_not_found()))
    }
}
