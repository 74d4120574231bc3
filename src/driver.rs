//! Runs demo cases and renders what the parsers produced.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::{DemoCase, OutputFormat};
use crate::grammar::Value;
use crate::parser::prelude::apply;
use crate::InternalResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub outcome: Outcome<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<'a> {
    Matched { value: Value<'a>, remaining: &'a str },
    Failed,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Matched { value, remaining } => {
                write!(f, "{}: output: ({}, {:?})", self.name, value, remaining)
            }
            Outcome::Failed => write!(f, "{}: failed!", self.name),
        }
    }
}

/// Compiles the case's grammar and runs it once over its source.
///
/// A parse failure is a normal outcome and is reported as
/// [`Outcome::Failed`]; only an invalid grammar is an error.
#[instrument(level = "debug", skip(case), fields(name = %case.name))]
pub fn run_case(case: &DemoCase) -> InternalResult<Report<'_>> {
    let parser = case.grammar.compile()?;
    debug!(grammar = %case.grammar, "running");

    let outcome = match apply(&parser, case.source.as_str()) {
        Ok((rest, value)) => Outcome::Matched {
            value,
            remaining: rest.rest(),
        },
        Err(_) => Outcome::Failed,
    };
    Ok(Report {
        name: &case.name,
        outcome,
    })
}

pub fn render(report: &Report<'_>, format: OutputFormat) -> InternalResult<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

/// Runs every case in order and returns the rendered lines.
pub fn run_all(cases: &[DemoCase], format: OutputFormat) -> InternalResult<Vec<String>> {
    let mut lines = Vec::with_capacity(cases.len());
    for case in cases {
        let report = run_case(case)?;
        lines.push(render(&report, format)?);
    }
    info!(count = lines.len(), "cases finished");
    Ok(lines)
}
