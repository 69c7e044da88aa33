//! MongoDB access layer: connection handling, identifier helpers,
//! document models, and repositories.

pub mod models;
pub mod repositories;

use fauna_core::error::CoreError;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};

/// Connect to MongoDB and select the named database.
///
/// The driver connects lazily; use [`health_check`] to verify the server
/// is actually reachable.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    tracing::debug!(database = db_name, "MongoDB database handle created");
    Ok(client.database(db_name))
}

/// Verify the database is reachable with a `ping` command.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Generate a new document identifier (24 lowercase hex characters).
pub fn new_id() -> String {
    ObjectId::new().to_hex()
}

/// Validate a client-supplied identifier, normalizing it to lowercase hex.
///
/// Anything that is not a well-formed object id is rejected here, before
/// it can reach a query filter.
pub fn parse_id(raw: &str) -> Result<String, CoreError> {
    ObjectId::parse_str(raw)
        .map(|oid| oid.to_hex())
        .map_err(|_| CoreError::InvalidId)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- parse_id ------------------------------------------------------------

    #[test]
    fn parse_id_accepts_valid_hex() {
        let id = parse_id("65f0a1b2c3d4e5f601234567").unwrap();
        assert_eq!(id, "65f0a1b2c3d4e5f601234567");
    }

    #[test]
    fn parse_id_normalizes_to_lowercase() {
        let id = parse_id("65F0A1B2C3D4E5F601234567").unwrap();
        assert_eq!(id, "65f0a1b2c3d4e5f601234567");
    }

    #[test]
    fn parse_id_rejects_non_hex() {
        assert_matches!(parse_id("zzzzzzzzzzzzzzzzzzzzzzzz"), Err(CoreError::InvalidId));
    }

    #[test]
    fn parse_id_rejects_wrong_length() {
        assert_matches!(parse_id("abc123"), Err(CoreError::InvalidId));
        assert_matches!(parse_id(""), Err(CoreError::InvalidId));
        assert_matches!(
            parse_id("65f0a1b2c3d4e5f6012345678"),
            Err(CoreError::InvalidId)
        );
    }

    // -- new_id --------------------------------------------------------------

    #[test]
    fn new_id_is_valid_and_unique() {
        let a = new_id();
        let b = new_id();

        assert_eq!(a.len(), 24);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        assert_ne!(a, b);

        // A generated id must round-trip through validation unchanged.
        assert_eq!(parse_id(&a).unwrap(), a);
    }
}
