//! Leptos components mounted into server-rendered markup.

pub mod compare_fields;
