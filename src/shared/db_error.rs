use sea_orm::DbErr;

// Postgres reports constraint failures through SQLSTATE codes inside the driver message.

pub fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

pub fn is_foreign_key_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23503") || err_str.contains("foreign key constraint")
}
