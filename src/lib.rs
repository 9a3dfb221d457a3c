//! proctab - sort/filter core for a live process-table view.
//!
//! This library sits between a continuously refreshing process list and a
//! tabular view. It decides which rows a user-typed search pattern keeps
//! visible and how rows order under each column, with locale-aware string
//! collation and (in Chinese locales) pinyin-assisted search.
//!
//! Process data acquisition and widget rendering are external collaborators:
//! the core only reads rows through the [`source::TableSource`] interface.

pub mod source;
pub mod text;
pub mod view;
