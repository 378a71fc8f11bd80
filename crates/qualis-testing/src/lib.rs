//! Testing infrastructure for qualis integration tests.
//!
//! - `TestWorld`: isolated temp directory with a config file and report files
//! - `fixtures`: report and dashboard documents in wire format
//! - `stub_server`: a canned-response HTTP endpoint
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod stub_server;
pub mod world;

pub use stub_server::StubServer;
pub use world::TestWorld;
