//! HTTP-level integration tests for the admin session flow.

mod auth_test;
mod guard_test;
mod helpers;
