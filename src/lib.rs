//! Converts Serenity BDD JSON outcome files into an aggregated JUnit XML
//! report, a console summary and a `KEY=VALUE` metrics file for CI.

pub mod cli;
pub mod error;
pub mod junit;
pub mod logging;
pub mod report;
pub mod serenity;
