use ulid::Ulid;

/// A fresh, unique resource id.
pub fn next_id() -> String {
    Ulid::new().to_string()
}
