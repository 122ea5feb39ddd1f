/*
 * report.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Report emission for classified captures.

use std::io::Write;

use crate::buffer::SourceBuffer;
use crate::error::{TreescopeError, TreescopeResult};
use crate::query::Capture;
use crate::scope::{ScopeClassifier, ScopeVerdict};

/// Emits one line per capture: `<span text>: global:<True|False>`.
///
/// The capitalized booleans are part of the output contract. Output is
/// at-least-once: a failure mid-pass aborts it, but lines already written
/// stay written.
pub struct Reporter<'a> {
    buffer: &'a SourceBuffer,
    classifier: &'a ScopeClassifier,
}

impl<'a> Reporter<'a> {
    pub fn new(buffer: &'a SourceBuffer, classifier: &'a ScopeClassifier) -> Self {
        Self { buffer, classifier }
    }

    /// Report every capture, in capture order, to `out`.
    pub fn report<W: Write>(&self, captures: &[Capture<'_>], out: &mut W) -> TreescopeResult<()> {
        for capture in captures {
            let text = self.buffer.node_text(&capture.node)?;
            let verdict = self.classifier.classify(capture.node);
            writeln!(out, "{}: global:{}", text, verdict_label(verdict))
                .map_err(TreescopeError::Report)?;
        }
        Ok(())
    }
}

fn verdict_label(verdict: ScopeVerdict) -> &'static str {
    match verdict {
        ScopeVerdict::Global => "True",
        ScopeVerdict::Local => "False",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;
    use crate::query::CaptureQueryRunner;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_lines_follow_the_fixed_format() {
        let buffer = SourceBuffer::from("int x;\nint main() { int y; return 0; }\n");
        let language: tree_sitter::Language = tree_sitter_c::LANGUAGE.into();
        let tree = parse_source(&language, &buffer).unwrap();

        let runner = CaptureQueryRunner::new(&language, "(declaration (identifier) @id)").unwrap();
        let captures = runner.run(tree.root_node(), buffer.as_bytes());

        let classifier = ScopeClassifier::default();
        let reporter = Reporter::new(&buffer, &classifier);
        let mut out = Vec::new();
        reporter.report(&captures, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x: global:True\ny: global:False\n"
        );
    }

    #[test]
    fn empty_capture_sets_produce_no_output() {
        let buffer = SourceBuffer::from("int main() { return 0; }");
        let classifier = ScopeClassifier::default();
        let reporter = Reporter::new(&buffer, &classifier);
        let mut out = Vec::new();
        reporter.report(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
