//! # Core Application Logic
//!
//! This module contains SkyWord's reader logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐           ┌──────────────┐
//!             │    TUI     │           │ fetch::run   │
//!             │  Adapter   │──spawns──►│ (provider)   │
//!             │ (ratatui)  │◄─Action───│              │
//!             └────────────┘           └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all reader state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`selection`]: The version → testament → book → chapter → verse path
//! - [`resolver`]: Book names, chapter/verse labels and references to ids
//! - [`fetch`]: Runs an `Effect::Fetch` against a provider

pub mod action;
pub mod config;
pub mod error;
pub mod fetch;
pub mod resolver;
pub mod selection;
pub mod share;
pub mod state;
pub mod testament;
