//! Client core for the task list widget.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps a view model of the
//! task list consistent with the remote collection by re-fetching after every
//! write.
//!
//! # Design
//! - `TaskClient` is stateless; it holds only the collection URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O boundary
//!   is explicit. `Transport` is the seam where a host plugs in real HTTP.
//! - `TaskListView` is the only mutable state. `TaskSync` drives it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sync;
pub mod types;
pub mod view;

pub use client::TaskClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use sync::{Intent, TaskSync};
pub use types::{NewTask, Task};
pub use view::{EditState, Status, TaskListView};
