//! Diesel table definitions matching `migrations/`.
//!
//! Internal to the persistence adapter; the domain never sees these.

diesel::table! {
    users (user_id) {
        user_id -> Int8,
        user_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    books (book_id) {
        book_id -> Int8,
        #[max_length = 200]
        title -> Varchar,
        #[max_length = 100]
        author -> Varchar,
        is_available -> Bool,
        checked_out_by -> Nullable<Int8>,
    }
}

diesel::joinable!(books -> users (checked_out_by));
diesel::allow_tables_to_appear_in_same_query!(books, users);
