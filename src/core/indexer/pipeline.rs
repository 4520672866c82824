//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Walk directory tree (applying ignore patterns and policy)
//! 2. Read file metadata and contents
//! 3. Build one document per file
//! 4. Submit the batch and wait for the engine task

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::core::document::Document;
use crate::core::engine::{EngineClient, IndexSettings, TaskInfo};
use crate::core::error::{MemexError, Result};
use crate::core::indexer::walker::{absolute_path, extension_of};
use crate::core::indexer::{FileWalker, PathFilter};
use crate::core::policy;

/// Statistics from a directory indexing run
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    /// Root that was walked, absolute and cleaned
    pub root: String,

    /// Documents sent to the engine
    pub documents_submitted: usize,

    /// Files accepted by the filter but unreadable
    pub files_skipped: usize,

    /// Wall time in milliseconds, submission included
    pub duration_ms: u64,
}

/// Orchestrates indexing against the shared engine client
pub struct IndexingPipeline {
    engine: Arc<EngineClient>,
}

impl IndexingPipeline {
    pub fn new(engine: Arc<EngineClient>) -> Self {
        Self { engine }
    }

    /// Create the collection if needed and apply its settings
    ///
    /// An existing collection is not an error, whether the engine
    /// reports it inline or through the creation task.
    pub async fn initialize_index(&self) -> Result<()> {
        let name = self.engine.index_name().to_string();

        let created = match self.engine.create_index(&name).await {
            Ok(task) => self.await_task(&task).await,
            Err(e) => Err(e),
        };
        match created {
            Ok(()) => tracing::info!("Created index '{}'", name),
            Err(e) if e.is_already_exists() => {
                tracing::info!("Index '{}' already exists", name)
            }
            Err(e) => return Err(e),
        }

        let task = self
            .engine
            .index()
            .update_settings(&IndexSettings::for_files())
            .await?;
        self.await_task(&task).await
    }

    /// Index a single file, content always included
    ///
    /// Unlike directory indexing this reads the body even for
    /// metadata-only extensions. The path is made absolute but links
    /// are not resolved.
    pub async fn index_file(&self, path: &Path) -> Result<Document> {
        // Same form the walk records: a link keeps its own name and id
        let path = absolute_path(path)?;
        let ext = ext_of_path(&path);
        if !policy::is_allowed_extension(&ext) {
            return Err(MemexError::InvalidExtension(ext));
        }

        let document = document_for_file(&path, true)?;

        self.submit(std::slice::from_ref(&document)).await?;
        tracing::info!("Indexed {}", document.path);

        Ok(document)
    }

    /// Index every eligible file below `root` in one batch
    pub async fn index_directory(
        &self,
        root: &Path,
        ignore_patterns: &[String],
    ) -> Result<IndexReport> {
        let start = Instant::now();

        let (documents, mut report) = collect_documents(root, ignore_patterns)?;

        if documents.is_empty() {
            tracing::info!("No eligible files under {}", report.root);
        } else {
            tracing::info!("Submitting {} documents", documents.len());
            self.submit(&documents).await?;
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Indexing complete: {} documents submitted, {} skipped in {}ms",
            report.documents_submitted,
            report.files_skipped,
            report.duration_ms
        );

        Ok(report)
    }

    /// Delete every document in the collection
    pub async fn clear_index(&self) -> Result<()> {
        let task = self.engine.index().delete_all_documents().await?;
        self.await_task(&task).await
    }

    async fn submit(&self, documents: &[Document]) -> Result<()> {
        let task = self.engine.index().add_documents(documents).await?;
        self.await_task(&task).await
    }

    async fn await_task(&self, task: &TaskInfo) -> Result<()> {
        tracing::debug!("Waiting for {} task {}", task.kind, task.task_uid);
        self.engine
            .wait_for_task(task.task_uid)
            .await?
            .into_result()
            .map(|_| ())
    }
}

/// Walk `root` and build documents for every included file
///
/// Metadata-only extensions get empty content. Unreadable files are
/// logged and counted, never fatal; only an invalid root or ignore
/// pattern fails the call. The batch is unbounded.
pub fn collect_documents(
    root: &Path,
    ignore_patterns: &[String],
) -> Result<(Vec<Document>, IndexReport)> {
    let invalid = |e: std::io::Error| MemexError::InvalidPath(format!("{}: {e}", root.display()));
    let root = absolute_path(root).map_err(invalid)?;
    if !fs::metadata(&root).map_err(invalid)?.is_dir() {
        return Err(MemexError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let walker = FileWalker::new(PathFilter::new(ignore_patterns)?);

    tracing::info!("Starting file collection from {:?}", root);
    let files = walker.collect_files(&root);
    tracing::info!("Found {} files to index", files.len());

    let mut documents = Vec::with_capacity(files.len());
    let mut files_skipped = 0;

    for (idx, path) in files.iter().enumerate() {
        if idx % 100 == 0 && idx > 0 {
            tracing::info!("Progress: {}/{} files processed", idx, files.len());
        }

        let read_content = !policy::should_ignore_content(&ext_of_path(path));
        match document_for_file(path, read_content) {
            Ok(document) => {
                tracing::debug!("[{}] {}", documents.len() + 1, document.path);
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
                files_skipped += 1;
            }
        }
    }

    let report = IndexReport {
        root: root.to_string_lossy().into_owned(),
        documents_submitted: documents.len(),
        files_skipped,
        duration_ms: 0,
    };

    Ok((documents, report))
}

/// Build the document for one file from its metadata and, optionally, its body
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn document_for_file(path: &Path, read_content: bool) -> Result<Document> {
    let metadata = fs::metadata(path)?;
    let mod_time = metadata
        .modified()
        .map(|t| chrono::DateTime::<chrono::Utc>::from(t).timestamp())
        .unwrap_or_default();

    let content = if read_content {
        String::from_utf8_lossy(&fs::read(path)?).into_owned()
    } else {
        String::new()
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document::new(
        path.to_string_lossy(),
        name.clone(),
        dir,
        extension_of(&name),
        metadata.len() as i64,
        mod_time,
        content,
    ))
}

fn ext_of_path(path: &Path) -> String {
    path.file_name()
        .map(|n| extension_of(&n.to_string_lossy()))
        .unwrap_or_default()
}
