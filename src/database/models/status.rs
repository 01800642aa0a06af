use std::io::Write;

use diesel::{
    deserialize::{self, FromSql},
    pg::Pg,
    serialize::{self, IsNull, Output, ToSql},
    sql_types::Text,
};
use serde::{Deserialize, Serialize};

/// Declares a closed set of status values stored as lowercase text.
/// Variant names must lowercase to their column text.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
        #[serde(rename_all = "lowercase")]
        #[sql_type = "Text"]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("Unrecognized {} value: {}", stringify!($name), other)),
                }
            }
        }

        impl ToSql<Text, Pg> for $name {
            fn to_sql<W: Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
                out.write_all(self.as_str().as_bytes())?;
                Ok(IsNull::No)
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
                let bytes = bytes.ok_or("Unexpected null for non-null status column")?;
                let text = std::str::from_utf8(bytes)?;
                Ok(text.parse::<$name>()?)
            }
        }
    };
}

status_enum! {
    UserStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

status_enum! {
    BlogStatus {
        Draft => "draft",
        Published => "published",
    }
}

status_enum! {
    /// Always `Active` on creation, no handler changes it afterwards.
    CommentStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

status_enum! {
    BlogTagStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

impl Default for BlogTagStatus {
    fn default() -> Self {
        BlogTagStatus::Active
    }
}
