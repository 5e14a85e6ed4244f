use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum Rage4Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("received non-2xx response: {status} {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("domain not found: {0}")]
    DomainNotFound(String),

    #[error("record not found: {name} {record_type}")]
    RecordNotFound { name: String, record_type: String },

    #[error("Credential error: {0}")]
    Credential(String),
}

pub fn map_error(e: Rage4Error) -> Error {
    use Rage4Error::*;
    match e {
        err @ (Http(_) | Status { .. } | Decode(_) | Api(_)) => {
            Error::Provider(err.to_string())
        }
        err @ (DomainNotFound(_) | RecordNotFound { .. }) => Error::NotFound(err.to_string()),
        Credential(msg) => Error::Credential(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_map_error_variants() {
        use Rage4Error::*;

        let err = map_error(Status {
            status: 500,
            body: "oops".into(),
        });
        assert!(matches!(err, Error::Provider(ref m) if m.contains("500 oops")));
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = map_error(Decode(decode));
        assert!(matches!(err, Error::Provider(_)));
        let err = map_error(Api("Invalid content".into()));
        assert!(matches!(err, Error::Provider(ref m) if m.contains("Invalid content")));
        let err = map_error(DomainNotFound("example.com".into()));
        assert!(matches!(err, Error::NotFound(_)));
        let err = map_error(RecordNotFound {
            name: "www".into(),
            record_type: "A".into(),
        });
        assert!(matches!(err, Error::NotFound(ref m) if m == "record not found: www A"));
        let err = map_error(Credential("missing".into()));
        assert!(matches!(err, Error::Credential(_)));
    }
}
