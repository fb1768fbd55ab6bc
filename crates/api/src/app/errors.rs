use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use diskus_core::DomainError;

/// Map a domain failure onto the wire envelope.
///
/// Internal failures are logged here and never echoed to the client.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Shape(code) => json_fail(StatusCode::BAD_REQUEST, translate(&code)),
        DomainError::Invariant(msg) => json_fail(StatusCode::BAD_REQUEST, msg),
        DomainError::Authentication(msg) => json_fail(StatusCode::UNAUTHORIZED, msg),
        DomainError::Authorization(msg) => json_fail(StatusCode::FORBIDDEN, msg),
        DomainError::NotFound(msg) => json_fail(StatusCode::NOT_FOUND, msg),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "internal failure");
            json_fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "terjadi kegagalan pada server kami",
            )
        }
    }
}

pub fn json_fail(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": "fail",
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Human-readable form of each entity shape code; unmapped codes pass
/// through verbatim.
fn translate(code: &str) -> String {
    match code {
        "REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
        }
        "REGISTER_USER.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat user baru karena tipe data tidak sesuai"
        }
        "REGISTER_USER.USERNAME_LIMIT_CHAR" => {
            "tidak dapat membuat user baru karena karakter username melebihi batas limit"
        }
        "REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER" => {
            "tidak dapat membuat user baru karena username mengandung karakter terlarang"
        }
        "USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY" => "harus mengirimkan username dan password",
        "USER_LOGIN.NOT_MEET_DATA_TYPE_SPECIFICATION" => "username dan password harus string",
        "REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN"
        | "DELETE_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN" => {
            "harus mengirimkan token refresh"
        }
        "REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
        | "DELETE_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "refresh token harus string"
        }
        "NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => "harus mengirimkan title, body dan owner",
        "NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => "title, body dan owner harus string",
        "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "harus mengirimkan thread id, content dan owner"
        }
        "NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "thread id, content dan owner harus string"
        }
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_become_human_messages() {
        assert_eq!(
            translate("USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY"),
            "harus mengirimkan username dan password"
        );
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(translate("SOMETHING.ELSE"), "SOMETHING.ELSE");
    }
}
