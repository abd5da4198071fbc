//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, trace playback
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (bar chart, algorithm info, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SortResult`] and call [`App::run`] to start the event loop. Playback
//! only moves a cursor through the finished trace; it never touches the
//! engines.
//!
//! [`SortResult`]: crate::trace::SortResult
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
