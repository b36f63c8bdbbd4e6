pub mod create;
pub mod delete;
pub mod get;
pub mod list;

pub use create::create as project_create;
pub use delete::delete as project_delete;
pub use get::get as project_get;
pub use list::list as project_list;

use crate::error::ApiError;

/// Parse a path id. Only plain ASCII digits that fit in an i64 are accepted,
/// so signs, whitespace and overflow are rejected before the store is touched.
pub fn parse_project_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request("Invalid project ID"));
    }
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid project ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits() {
        assert_eq!(parse_project_id("0").unwrap(), 0);
        assert_eq!(parse_project_id("0042").unwrap(), 42);
        assert_eq!(parse_project_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn rejects_non_digits() {
        for raw in ["", "abc", "-1", "+1", " 1", "1.0", "12a", "9223372036854775808"] {
            let err = parse_project_id(raw).unwrap_err();
            assert_eq!(err, ApiError::bad_request("Invalid project ID"), "input {:?}", raw);
        }
    }
}
