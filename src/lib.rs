//! tally: a counter driven by three activation controls.
//!
//! The [`controller::CounterController`] owns the value and mirrors it to a
//! display surface. Two hosts embed it: the terminal UI in [`ui`] and the
//! HTTP page in [`server`].

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod server;
pub mod shutdown;
pub mod ui;
