use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use crate::schema::categories;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset, Serialize, Deserialize)]
#[table_name = "categories"]
pub struct CategoryForm {
    pub name: String,
}

impl Category {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<Category>> {
        categories::table
            .order(categories::id.asc())
            .load::<Category>(conn)
    }

    pub fn create(conn: &PgConnection, form: &CategoryForm) -> QueryResult<Category> {
        diesel::insert_into(categories::table)
            .values(form)
            .get_result(conn)
    }

    pub fn replace(conn: &PgConnection, category_id: i32, form: &CategoryForm) -> QueryResult<Option<Category>> {
        diesel::update(categories::table.find(category_id))
            .set(form)
            .get_result(conn)
            .optional()
    }

    /** Blogs pointing at the category keep their `category_id` */
    pub fn delete(conn: &PgConnection, category_id: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(categories::table.find(category_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
