//! Validated scan parameters.

use std::path::PathBuf;

use derive_builder::{Builder, UninitializedFieldError};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::sort::SortOrder;

/// What to scan and how to order the result.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "RequestError")
)]
pub struct ScanRequest {
    /// Directory whose children are listed.
    pub root: PathBuf,

    /// Size ordering of the result.
    #[builder(default)]
    #[serde(default)]
    pub sort: SortOrder,
}

impl From<UninitializedFieldError> for RequestError {
    fn from(_: UninitializedFieldError) -> Self {
        // `root` is the only field without a default.
        RequestError::MissingRoot
    }
}

impl ScanRequestBuilder {
    fn validate(&self) -> Result<(), RequestError> {
        match self.root {
            Some(ref root) if !root.as_os_str().is_empty() => Ok(()),
            _ => Err(RequestError::MissingRoot),
        }
    }
}

impl ScanRequest {
    /// Create a new scan request builder.
    pub fn builder() -> ScanRequestBuilder {
        ScanRequestBuilder::default()
    }

    /// Create a request without validation.
    pub fn new(root: impl Into<PathBuf>, sort: SortOrder) -> Self {
        Self {
            root: root.into(),
            sort,
        }
    }

    /// Validate raw `root` and `sort` parameters.
    ///
    /// The root is checked first, and only for presence: nothing here
    /// touches the filesystem. The sort direction must be exactly `asc` or
    /// `desc`; a missing value is rejected like any other.
    pub fn parse(root: Option<&str>, sort: Option<&str>) -> Result<Self, RequestError> {
        let root = root
            .filter(|r| !r.is_empty())
            .ok_or(RequestError::MissingRoot)?;

        let raw_sort = sort.unwrap_or_default();
        let sort = raw_sort
            .parse::<SortOrder>()
            .map_err(|_| RequestError::InvalidSortDirection {
                value: raw_sort.to_string(),
            })?;

        Ok(Self::new(root, sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ScanRequest::builder()
            .root("/home/user")
            .sort(SortOrder::Asc)
            .build()
            .unwrap();

        assert_eq!(request.root, PathBuf::from("/home/user"));
        assert_eq!(request.sort, SortOrder::Asc);
    }

    #[test]
    fn test_builder_defaults_to_descending() {
        let request = ScanRequest::builder().root("/data").build().unwrap();
        assert_eq!(request.sort, SortOrder::Desc);
    }

    #[test]
    fn test_builder_requires_root() {
        assert_eq!(
            ScanRequest::builder().build().unwrap_err(),
            RequestError::MissingRoot
        );
        assert_eq!(
            ScanRequest::builder().root("").build().unwrap_err(),
            RequestError::MissingRoot
        );
    }

    #[test]
    fn test_parse_valid() {
        let request = ScanRequest::parse(Some("/var/log"), Some("asc")).unwrap();
        assert_eq!(request, ScanRequest::new("/var/log", SortOrder::Asc));
    }

    #[test]
    fn test_parse_missing_root() {
        assert_eq!(
            ScanRequest::parse(None, Some("asc")).unwrap_err(),
            RequestError::MissingRoot
        );
        assert_eq!(
            ScanRequest::parse(Some(""), Some("desc")).unwrap_err(),
            RequestError::MissingRoot
        );
    }

    #[test]
    fn test_parse_missing_root_wins_over_bad_sort() {
        assert_eq!(
            ScanRequest::parse(None, Some("sideways")).unwrap_err(),
            RequestError::MissingRoot
        );
    }

    #[test]
    fn test_parse_invalid_sort() {
        assert_eq!(
            ScanRequest::parse(Some("/tmp"), Some("size")).unwrap_err(),
            RequestError::InvalidSortDirection {
                value: "size".to_string()
            }
        );
        assert!(matches!(
            ScanRequest::parse(Some("/tmp"), None),
            Err(RequestError::InvalidSortDirection { .. })
        ));
    }

    #[test]
    fn test_parse_does_not_touch_filesystem() {
        // A path that cannot exist still validates.
        let request = ScanRequest::parse(Some("/definitely/not/here/\u{1}"), Some("desc"));
        assert!(request.is_ok());
    }
}
