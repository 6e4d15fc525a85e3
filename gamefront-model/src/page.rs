/// Paged list envelope returned by the catalog's list endpoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiResponse<T> {
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ApiResponse<T> {
    pub fn from_results(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::from_results(Vec::new())
    }
}
