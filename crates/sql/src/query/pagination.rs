//! Query Builder pagination operations

use super::builder::QueryBuilder;

impl QueryBuilder {
    /// Set the LIMIT row count.
    ///
    /// A count of zero renders nothing, same as leaving the limit unset.
    pub fn limit(mut self, count: u64) -> Self {
        self.limit_count = Some(count);
        self
    }

    /// Set the OFFSET row count.
    ///
    /// A count of zero renders nothing, same as leaving the offset unset.
    pub fn offset(mut self, count: u64) -> Self {
        self.offset_value = Some(count);
        self
    }
}
