use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::{
    models::{
        blog::*, blog_tag::*, category::*, comment::*, status::BlogTagStatus, tag::*, user::*,
    },
    store::*,
};
use crate::app::AppError;

/// One table: rows ordered by key plus the next serial value.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        self.next_id += 1;
        let row = build(self.next_id);
        self.rows.insert(self.next_id, row.clone());
        row
    }

    fn replace_with(&mut self, id: i32, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    blogs: Table<Blog>,
    categories: Table<Category>,
    comments: Table<Comment>,
    tags: Table<Tag>,
    blog_tags: BTreeMap<(i32, i32), BlogTag>,
}

/// Store kept in process memory, same semantics as the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Store(String::from("memory store lock poisoned")))
    }
}

fn present(removed: bool, missing: AppError) -> Result<(), AppError> {
    if removed {
        Ok(())
    } else {
        Err(missing)
    }
}

impl Store for MemoryStore {
    fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables()?.users.list())
    }

    fn create_user(&self, form: UserForm) -> Result<User, AppError> {
        Ok(self.tables()?.users.insert_with(|id| form.into_user(id)))
    }

    fn update_user(&self, user_id: i32, form: UserForm) -> Result<User, AppError> {
        self.tables()?
            .users
            .replace_with(user_id, |row| *row = form.into_user(user_id))
            .ok_or_else(user_not_found)
    }

    fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        present(self.tables()?.users.rows.remove(&user_id).is_some(), user_not_found())
    }

    fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.tables()?.blogs.list())
    }

    fn create_blog(&self, form: BlogForm) -> Result<Blog, AppError> {
        Ok(self.tables()?.blogs.insert_with(|id| form.into_blog(id)))
    }

    fn update_blog(&self, blog_id: i32, form: BlogForm) -> Result<Blog, AppError> {
        self.tables()?
            .blogs
            .replace_with(blog_id, |row| *row = form.into_blog(blog_id))
            .ok_or_else(blog_not_found)
    }

    fn delete_blog(&self, blog_id: i32) -> Result<(), AppError> {
        present(self.tables()?.blogs.rows.remove(&blog_id).is_some(), blog_not_found())
    }

    fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.tables()?.categories.list())
    }

    fn create_category(&self, form: CategoryForm) -> Result<Category, AppError> {
        Ok(self
            .tables()?
            .categories
            .insert_with(|id| Category { id, name: form.name }))
    }

    fn update_category(&self, category_id: i32, form: CategoryForm) -> Result<Category, AppError> {
        self.tables()?
            .categories
            .replace_with(category_id, |row| row.name = form.name)
            .ok_or_else(category_not_found)
    }

    fn delete_category(&self, category_id: i32) -> Result<(), AppError> {
        present(
            self.tables()?.categories.rows.remove(&category_id).is_some(),
            category_not_found(),
        )
    }

    fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        Ok(self.tables()?.comments.list())
    }

    fn create_comment(&self, form: CommentForm) -> Result<Comment, AppError> {
        let mut tables = self.tables()?;
        if !tables.blogs.rows.contains_key(&form.bid) {
            return Err(comment_blog_not_found(form.bid));
        }

        let record = CommentInsert::from_form(form, Utc::now().naive_utc());
        Ok(tables.comments.insert_with(|cid| Comment {
            cid,
            userid: record.userid,
            bid: record.bid,
            comment: record.comment,
            created_at: record.created_at,
            updated_at: record.updated_at,
            status: record.status,
        }))
    }

    fn update_comment(&self, comment_id: i32, form: CommentForm) -> Result<Comment, AppError> {
        self.tables()?
            .comments
            .replace_with(comment_id, |row| {
                row.userid = form.userid;
                row.bid = form.bid;
                row.comment = form.comment;
                row.updated_at = Utc::now().naive_utc();
            })
            .ok_or_else(|| comment_not_found(comment_id))
    }

    fn delete_comment(&self, comment_id: i32) -> Result<(), AppError> {
        present(
            self.tables()?.comments.rows.remove(&comment_id).is_some(),
            comment_not_found(comment_id),
        )
    }

    fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        Ok(self.tables()?.tags.list())
    }

    fn create_tag(&self, form: TagForm) -> Result<Tag, AppError> {
        Ok(self
            .tables()?
            .tags
            .insert_with(|tag_id| Tag { tag_id, tname: form.tname }))
    }

    fn update_tag(&self, tag_id: i32, form: TagForm) -> Result<Tag, AppError> {
        self.tables()?
            .tags
            .replace_with(tag_id, |row| row.tname = form.tname)
            .ok_or_else(tag_not_found)
    }

    fn delete_tag(&self, tag_id: i32) -> Result<(), AppError> {
        present(self.tables()?.tags.rows.remove(&tag_id).is_some(), tag_not_found())
    }

    fn list_blog_tags(&self) -> Result<Vec<BlogTag>, AppError> {
        Ok(self.tables()?.blog_tags.values().cloned().collect())
    }

    fn create_blog_tag(&self, link: BlogTag) -> Result<BlogTag, AppError> {
        let mut tables = self.tables()?;
        let key = (link.tag_id, link.bid);
        if tables.blog_tags.contains_key(&key) {
            return Err(AppError::Store(String::from(
                "duplicate key value violates unique constraint \"blog_tags_pkey\"",
            )));
        }
        tables.blog_tags.insert(key, link.clone());
        Ok(link)
    }

    fn update_blog_tag(&self, tag_id: i32, bid: i32, status: BlogTagStatus) -> Result<BlogTag, AppError> {
        let mut tables = self.tables()?;
        let link = tables
            .blog_tags
            .get_mut(&(tag_id, bid))
            .ok_or_else(blog_tag_not_found)?;
        link.status = status;
        Ok(link.clone())
    }

    fn delete_blog_tag(&self, tag_id: i32, bid: i32) -> Result<(), AppError> {
        present(
            self.tables()?.blog_tags.remove(&(tag_id, bid)).is_some(),
            blog_tag_not_found(),
        )
    }
}
