table! {
    users (userid) {
        userid -> Int4,
        name -> Varchar,
        email -> Varchar,
        password -> Varchar,
        username -> Varchar,
        phone -> Nullable<Varchar>,
        profile_image -> Nullable<Varchar>,
        bio -> Nullable<Text>,
        status -> Varchar,
    }
}

table! {
    blogs (bid) {
        bid -> Int4,
        image -> Varchar,
        title -> Varchar,
        content -> Text,
        category_id -> Nullable<Int4>,
        status -> Varchar,
    }
}

table! {
    categories (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    comments (cid) {
        cid -> Int4,
        userid -> Int4,
        bid -> Int4,
        comment -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        status -> Varchar,
    }
}

table! {
    tags (tag_id) {
        tag_id -> Int4,
        tname -> Varchar,
    }
}

table! {
    blog_tags (tag_id, bid) {
        tag_id -> Int4,
        bid -> Int4,
        status -> Varchar,
    }
}

joinable!(comments -> blogs (bid));
joinable!(comments -> users (userid));
joinable!(blog_tags -> blogs (bid));
joinable!(blog_tags -> tags (tag_id));

allow_tables_to_appear_in_same_query!(
    blogs,
    blog_tags,
    categories,
    comments,
    tags,
    users,
);
