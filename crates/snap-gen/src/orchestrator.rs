//! Generation orchestration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use snap_config::GeneratorConfig;
use snap_core::{GeneratedArgument, GeneratedTestFile, InvocationValue};
use snap_parser::{ParserError, SourceKind, detect_source_kind};
use snap_runtime::{LoadedModule, ModuleLoader};

use crate::error::GenError;
use crate::layout::OutputLayout;
use crate::render::render;
use crate::store::FileStore;
use crate::synth::ArgumentSynthesizer;

/// Per-run switches that are not part of the persistent configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Render and resolve paths but create and write nothing.
    pub dry_run: bool,
    /// Overrides `generator.seed` for this run.
    pub seed: Option<u64>,
}

/// Outcome of one successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub source_path: PathBuf,
    pub source_kind: SourceKind,
    pub test_file_path: PathBuf,
    pub test_file_name: String,
    pub import_specifier: String,
    /// Tested functions in extraction order.
    pub functions: Vec<String>,
    /// Seed the arguments were synthesized from; pass it back to reproduce.
    pub seed: u64,
    pub written: bool,
    /// Rendered content, only kept for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GenerationReport {
    /// The human-facing completion line.
    #[must_use]
    pub fn success_message(&self) -> String {
        format!("✅ {} created successfully!", self.test_file_name)
    }
}

/// Runs the generation pipeline for one source file at a time.
///
/// Two concurrent runs whose sources resolve to the same test file race on
/// the final write; whichever writes last wins. Nothing serializes them.
pub struct Generator<L, S> {
    config: GeneratorConfig,
    loader: L,
    store: S,
}

impl<L, S> Generator<L, S>
where
    L: ModuleLoader,
    S: FileStore,
{
    pub const fn new(config: GeneratorConfig, loader: L, store: S) -> Self {
        Self {
            config,
            loader,
            store,
        }
    }

    /// Generate the test file for `source_path`.
    ///
    /// The file is only written after every export has been invoked and the
    /// content rendered; any earlier failure leaves the file system untouched.
    ///
    /// # Errors
    /// Returns the first `GenError` raised by any stage.
    pub async fn generate(
        &self,
        source_path: &Path,
        options: &GenerateOptions,
    ) -> Result<GenerationReport, GenError> {
        let Some(source_kind) = detect_source_kind(source_path) else {
            return Err(ParserError::UnsupportedSource(source_path.display().to_string()).into());
        };
        tracing::debug!(path = %source_path.display(), %source_kind, "generating tests");

        if self.config.read_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.read_delay_ms)).await;
        }
        let source = self
            .store
            .read_text(source_path)
            .await
            .map_err(|source| GenError::SourceRead {
                path: source_path.to_path_buf(),
                source,
            })?;

        let metadata = snap_parser::extract(&source)?;
        if metadata.is_empty() {
            return Err(ParserError::NoExportedFunctions.into());
        }
        tracing::debug!(functions = metadata.len(), "extracted module metadata");

        let layout = OutputLayout::resolve(
            source_path,
            &self.config.test_folder_name,
            &self.config.test_file_extension,
        )?;
        let module = self.loader.load(&layout.module_path)?;

        let seed = options
            .seed
            .or(self.config.seed)
            .unwrap_or_else(rand::random);
        let mut synthesizer = ArgumentSynthesizer::seeded(seed);

        let mut arguments: HashMap<String, Vec<GeneratedArgument>> = HashMap::new();
        let mut results: HashMap<String, InvocationValue> = HashMap::new();
        for function in &metadata {
            let args = synthesizer.synthesize(function.parameters());
            let value = module
                .invoke(function.name(), &args)
                .map_err(|source| GenError::Invocation {
                    function: function.name().to_string(),
                    source,
                })?;
            tracing::debug!(function = function.name(), ?args, ?value, "captured result");
            arguments.insert(function.name().to_string(), args);
            results.insert(function.name().to_string(), value);
        }

        let content = render(&metadata, &arguments, &results, &layout.import_specifier)?;
        let file = GeneratedTestFile::new(layout.test_file.clone(), content);

        let written = !options.dry_run;
        if written {
            self.persist(&layout.test_directory, &file)?;
            tracing::info!(path = %file.path.display(), "wrote generated test file");
        }

        Ok(GenerationReport {
            source_path: layout.source_path,
            source_kind,
            test_file_name: file.file_name(),
            test_file_path: file.path,
            import_specifier: layout.import_specifier,
            functions: metadata.names().into_iter().map(str::to_string).collect(),
            seed,
            written,
            content: (!written).then_some(file.content),
        })
    }

    fn persist(&self, test_directory: &Path, file: &GeneratedTestFile) -> Result<(), GenError> {
        self.store
            .ensure_directory(test_directory)
            .map_err(|source| GenError::DirectoryCreation {
                path: test_directory.to_path_buf(),
                source,
            })?;
        self.store
            .write_text(&file.path, &file.content)
            .map_err(|source| GenError::Write {
                path: file.path.clone(),
                source,
            })
    }
}
