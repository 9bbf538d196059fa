//! # TUI Components
//!
//! All UI components for the terminal reader.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: app name, current version, status message
//! - `ErrorBanner`: dismissable error or notice
//! - `Loader`: spinner glyphs
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Persistent state lives in `TuiState`; a wrapper borrowing it is built
//! every frame with the props it needs from `App`:
//! - `NavList` / `NavListState`: one navigation column
//! - `SearchResults`: the results pane (a `NavList` underneath)
//! - `PassageView`: passage text, scroll offset borrowed from `TuiState`
//! - `VersionPicker` / `VersionPickerState`: filterable overlay
//! - `SearchBox`: owns its buffer, emits `SearchEvent`
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ErrorBanner { error: app.error.as_ref(), notice: app.notice.as_deref() }.render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── error_banner.rs
//! ├── loader.rs
//! ├── nav_list.rs
//! ├── passage_view.rs
//! ├── search_box.rs
//! ├── search_results.rs
//! └── version_picker.rs
//! ```

pub mod error_banner;
pub mod loader;
pub mod nav_list;
pub mod passage_view;
pub mod search_box;
pub mod search_results;
mod title_bar;
pub mod version_picker;

pub use error_banner::ErrorBanner;
pub use nav_list::{NavList, NavListState};
pub use passage_view::PassageView;
pub use search_box::{SearchBox, SearchEvent};
pub use search_results::SearchResults;
pub use title_bar::TitleBar;
pub use version_picker::{VersionPicker, VersionPickerEvent, VersionPickerState};
