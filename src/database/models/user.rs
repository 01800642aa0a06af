use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};

use super::status::UserStatus;
use crate::schema::users;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct User {
    pub userid: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub status: UserStatus,
}

/// Request body for creating or replacing a user.
///
/// Updates overwrite every column, so a missing optional field clears it.
#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset, Serialize, Deserialize)]
#[table_name = "users"]
#[changeset_options(treat_none_as_null = "true")]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn all(conn: &PgConnection) -> QueryResult<Vec<User>> {
        users::table.order(users::userid.asc()).load::<User>(conn)
    }

    pub fn create(conn: &PgConnection, form: &UserForm) -> QueryResult<User> {
        diesel::insert_into(users::table)
            .values(form)
            .get_result(conn)
    }

    /** Returns `None` when no user has the id */
    pub fn replace(conn: &PgConnection, user_id: i32, form: &UserForm) -> QueryResult<Option<User>> {
        diesel::update(users::table.find(user_id))
            .set(form)
            .get_result(conn)
            .optional()
    }

    /** Returns `false` when no user has the id */
    pub fn delete(conn: &PgConnection, user_id: i32) -> QueryResult<bool> {
        let deleted = diesel::delete(users::table.find(user_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
impl UserForm {
    pub fn into_user(self, userid: i32) -> User {
        User {
            userid,
            name: self.name,
            email: self.email,
            password: self.password,
            username: self.username,
            phone: self.phone,
            profile_image: self.profile_image,
            bio: self.bio,
            status: self.status,
        }
    }
}
