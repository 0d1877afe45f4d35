//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Uuid,
        /// Unique, at most 50 characters.
        username -> Varchar,
        /// Unique, at most 100 characters.
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Every calculation variant, discriminated by `type`.
    calculations (id) {
        id -> Uuid,
        /// Owner; rows cascade when the user is deleted.
        user_id -> Uuid,
        /// Variant tag: `addition`, `subtraction`, `multiplication` or `division`.
        #[sql_name = "type"]
        kind -> Varchar,
        /// JSON array of numbers.
        inputs -> Jsonb,
        result -> Nullable<Float8>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(calculations -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(calculations, users);
