//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape for the generated document.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "validation failed")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "6f1c2b9e-8d4a-4c1e-9f3b-2a7d5e6c8b01")]
    trace_id: Option<String>,
    /// Supplementary details such as `{"fields":[{"field":"name","message":"name is required"}]}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// `id`, `createdDate` and `updatedDate` are assigned by storage and ignored
/// on input.
#[derive(ToSchema)]
#[schema(as = User)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Storage-generated key.
    #[schema(example = 1)]
    id: i32,
    /// When the user was created.
    created_date: DateTime<Utc>,
    /// When the user was last updated.
    updated_date: DateTime<Utc>,
    /// Given name.
    #[schema(example = "Ana")]
    name: String,
    /// Family name.
    #[schema(example = "Diaz")]
    surname: String,
    /// Login handle.
    #[schema(example = "adiaz")]
    user_name: String,
    /// Contact address.
    email: Option<String>,
    /// National identity document number.
    document_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn schema_names_match_domain_types() {
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        assert_eq!(ErrorSchema::name(), "Error");
        assert_eq!(UserSchema::name(), "User");
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn error_code_schema_lists_variant(#[case] variant: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(variant));
    }

    #[rstest]
    #[case("userName")]
    #[case("documentId")]
    #[case("createdDate")]
    fn user_schema_uses_camel_case(#[case] field: &str) {
        assert!(schema_to_json::<UserSchema>().contains(field));
    }

    #[rstest]
    fn error_schema_uses_camel_case() {
        assert!(schema_to_json::<ErrorSchema>().contains("traceId"));
    }
}
