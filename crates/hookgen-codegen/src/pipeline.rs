//! Batch pipeline.
//!
//! One call processes a whole declaration index: per root declaration,
//! discover containers, validate their candidates, synthesize, format, and
//! emit. Containers are independent; no failure of one ever fails the
//! batch, and processing always continues with the next container.

use hookgen_decl::{
    DeclarationIndex, Diagnostics, MarkerVocabulary, SourceLoc, SourceUnit, Validated,
};

use crate::discover::{discover_containers, DiscoveredContainer};
use crate::emit::{ArtifactSink, CommittedArtifact};
use crate::format::{CanonicalFormatter, Formatter};
use crate::synth::synthesize;
use crate::validate::{validate_container, HookRule};

/// Outcome summary of one pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Committed artifact handles, in emission order.
    pub artifacts: Vec<CommittedArtifact>,
    /// Containers discovered across all roots.
    pub containers_seen: usize,
    /// Containers with zero hook candidates; no artifact, no diagnostic.
    pub skipped_empty: usize,
    /// Containers abandoned because at least one candidate failed its
    /// shape contract.
    pub failed_validation: usize,
    /// Containers whose assembled text was rejected by the formatter or
    /// whose artifact could not be written.
    pub failed_synthesis: usize,
}

impl BatchReport {
    /// Whether every discovered container either generated an artifact or
    /// had nothing to generate.
    pub fn is_clean(&self) -> bool {
        self.failed_validation == 0 && self.failed_synthesis == 0
    }
}

/// The hook generation pipeline.
///
/// Holds the batch-independent configuration: the marker vocabulary, the
/// injected shape rule, and the formatter.
///
/// # Example
/// ```
/// use hookgen_codegen::{MemoryArtifactSink, Pipeline, ValidatedHook};
/// use hookgen_decl::{
///     CollectingDiagnostics, DeclarationIndex, MarkerVocabulary, Property, SourceLoc, Violation,
/// };
///
/// let vocab = MarkerVocabulary::default();
/// let rule = |p: &Property, _: &SourceLoc| -> Result<ValidatedHook, Violation> {
///     Ok(ValidatedHook {
///         name: p.name.clone(),
///         class_fragment: format!("inner class {}Impl", p.name),
///         accessor_fragment: format!("override val {} = {}Impl()", p.name, p.name),
///         imports: vec![],
///     })
/// };
/// let pipeline = Pipeline::new(&vocab, &rule);
///
/// let mut sink = MemoryArtifactSink::new();
/// let mut diag = CollectingDiagnostics::new();
/// let report = pipeline.run(&DeclarationIndex::new(), &mut sink, &mut diag);
/// assert!(report.is_clean());
/// ```
pub struct Pipeline<'a> {
    vocab: &'a MarkerVocabulary,
    rule: &'a dyn HookRule,
    formatter: &'a dyn Formatter,
}

const DEFAULT_FORMATTER: CanonicalFormatter = CanonicalFormatter;

impl<'a> Pipeline<'a> {
    /// Creates a pipeline with the canonical formatter.
    pub fn new(vocab: &'a MarkerVocabulary, rule: &'a dyn HookRule) -> Self {
        Self {
            vocab,
            rule,
            formatter: &DEFAULT_FORMATTER,
        }
    }

    /// Replaces the formatter.
    pub fn with_formatter(mut self, formatter: &'a dyn Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Runs the pipeline over one batch of source units.
    pub fn run(
        &self,
        index: &DeclarationIndex,
        sink: &mut dyn ArtifactSink,
        diag: &mut dyn Diagnostics,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for unit in &index.units {
            self.process_unit(unit, sink, diag, &mut report);
        }
        log::debug!(
            "batch done: {} artifact(s), {} container(s) seen",
            report.artifacts.len(),
            report.containers_seen
        );
        report
    }

    fn process_unit(
        &self,
        unit: &SourceUnit,
        sink: &mut dyn ArtifactSink,
        diag: &mut dyn Diagnostics,
        report: &mut BatchReport,
    ) {
        for root in &unit.declarations {
            for discovered in discover_containers(root, self.vocab) {
                report.containers_seen += 1;
                self.process_container(&discovered, unit, sink, diag, report);
            }
        }
    }

    fn process_container(
        &self,
        discovered: &DiscoveredContainer<'_>,
        unit: &SourceUnit,
        sink: &mut dyn ArtifactSink,
        diag: &mut dyn Diagnostics,
        report: &mut BatchReport,
    ) {
        let hooks = match validate_container(discovered, &unit.id, self.vocab, self.rule) {
            Validated::Invalid(violations) => {
                report.failed_validation += 1;
                for violation in &violations {
                    diag.report_violation(violation);
                }
                return;
            }
            Validated::Valid(hooks) => hooks,
        };

        if hooks.is_empty() {
            // Nothing to generate; not a diagnostic.
            report.skipped_empty += 1;
            return;
        }

        let generated = synthesize(discovered, &hooks, self.vocab, &unit.id);
        let text = match self.formatter.format(&generated.assemble()) {
            Ok(text) => text,
            Err(err) => {
                report.failed_synthesis += 1;
                diag.report(
                    &format!("synthesis of '{}' failed: {}", generated.name, err),
                    &SourceLoc::new(unit.id.clone(), 0),
                );
                return;
            }
        };

        match sink.write(
            &generated.package,
            &generated.name,
            text.as_bytes(),
            &generated.source_unit,
        ) {
            Ok(committed) => {
                log::debug!("generated {}", committed.identity());
                report.artifacts.push(committed);
            }
            Err(err) => {
                report.failed_synthesis += 1;
                diag.report(
                    &format!("emission of '{}' failed: {}", generated.name, err),
                    &SourceLoc::new(unit.id.clone(), 0),
                );
            }
        }
    }
}
