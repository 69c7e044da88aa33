/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: `mongodb::Database` is a handle over a pooled
/// client, so cloning it does not open new connections.
#[derive(Clone)]
pub struct AppState {
    /// Database handle used by all repositories.
    pub db: mongodb::Database,
}
