#![allow(missing_docs)]

use axum_test::TestServer;
use tempfile::{TempDir, tempdir};

use crate::{AppState, Database, build_router};

/// Create app state backed by a fresh database file in a temporary directory.
///
/// The directory is deleted when the returned [TempDir] is dropped, so keep it
/// alive for as long as the state is used.
pub(crate) fn get_test_state() -> (TempDir, AppState) {
    let dir = tempdir().expect("Could not create temporary directory.");
    let database =
        Database::open(dir.path().join("expenses.db")).expect("Could not open test database.");
    let state = AppState::new(database, "Etc/UTC").expect("Could not create app state.");

    (dir, state)
}

/// Create a test server for the full router.
pub(crate) fn get_test_server() -> (TempDir, AppState, TestServer) {
    let (dir, state) = get_test_state();
    let server = TestServer::new(build_router(state.clone(), dir.path()));

    (dir, state, server)
}
