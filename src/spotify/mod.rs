//! # Spotify Integration Module
//!
//! This module implements the Spotify Web API surface the launcher needs:
//! refresh-token authentication, track search, playback-device listing,
//! queueing, playback transfer and cover-art caching. It abstracts away HTTP
//! requests, authorization headers and API quirks behind a small client
//! facade.
//!
//! ## Architecture
//!
//! ```text
//! CLI / launcher host
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh-token exchange)
//!     ├── Search (tracks)
//!     ├── Player (devices, queue, play)
//!     └── Cover Cache (album art downloads)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Raw refresh-token exchange against the token endpoint using
//!   HTTP Basic credentials built from the client id and secret.
//! - [`client`] - [`SpotifyClient`], the facade composing the token manager
//!   and the HTTP transport into the public operations.
//! - [`covers`] - [`CoverCache`], an idempotent on-disk cache of album cover
//!   images with atomic writes.
//!
//! ## Execution Model
//!
//! Every operation is `async` and awaited to completion before the caller
//! proceeds; within one invocation there is no overlap of independent
//! requests. Overlapping invocations are safe: the token manager sits behind
//! a mutex so refreshes are serialized, and cover downloads take a single
//! coarse write lock. Each request carries a fixed 10-second timeout; a
//! timed-out request is a failure and is not retried, with the sole
//! exception of the bounded device-wait poll.
//!
//! ## Error Handling Philosophy
//!
//! - **Connectivity failure** - the reachability probe and the CLI surface
//!   it as an informational message, never as a panic or raw error.
//! - **Authentication failure** - the server-provided `error_description`
//!   (or `error`) text is kept on the token manager for the caller to show.
//! - **Partial data** - missing optional fields such as a third cover image
//!   degrade to empty values; a parse never aborts the whole result list.
//! - **Fire-and-forget actions** - queue and play report failures through
//!   the `warning!` hook and never break the surrounding flow.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - refresh-token exchange (accounts host)
//! - `GET /v1/search?type=track` - track search
//! - `GET /v1/me/player/devices` - playback devices
//! - `POST /v1/me/player/queue` - add a track to the queue
//! - `PUT /v1/me/player/play` - start playback on a device

use std::time::Duration;

pub mod auth;
pub mod client;
pub mod covers;

pub use client::SpotifyClient;
pub use covers::CoverCache;

/// Fixed per-request transfer timeout applied to every outgoing request.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
