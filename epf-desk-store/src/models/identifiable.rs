/// Trait for records that carry a server-assigned numeric identifier
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> i64;
}
