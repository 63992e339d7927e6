/// Errors that can occur when creating validated paging types.
#[derive(Debug, thiserror::Error)]
pub enum PageSizeError {
    /// The requested page size was zero
    #[error("Page size must be at least 1")]
    Zero,
}

/// A page size that is guaranteed to be at least 1.
///
/// This type wraps a `usize` and ensures pagination arithmetic never divides
/// by zero. Construct it once at configuration time and pass it into the
/// session; it cannot represent an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new `PageSize` from the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The number of records shown per page
    ///
    /// # Returns
    ///
    /// Returns `Ok(PageSize)` if the value is at least 1,
    /// or `Err(PageSizeError::Zero)` if it is zero.
    pub fn new(value: usize) -> Result<Self, PageSizeError> {
        if value == 0 {
            return Err(PageSizeError::Zero);
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> serde::Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = usize::deserialize(deserializer)?;
        PageSize::new(value).map_err(serde::de::Error::custom)
    }
}
