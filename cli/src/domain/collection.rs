//! The fixed Solr collection set and command-line construction.
//!
//! Pure data only. Nothing here touches the filesystem or spawns processes.

use std::fmt;
use std::path::{Path, PathBuf};

/// Solr sub-command passed as a single argument element before the
/// collection name.
pub const CREATE_VERB: &str = "create -c";

/// Name of the Solr control script looked up on `PATH`.
pub const SOLR_BINARY: &str = "solr";

/// Default log file tag; output lands in `<log_dir>/solr.out` and `solr.err`.
pub const DEFAULT_LOG_TAG: &str = "solr";

/// A collection the graph store indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Vertex property index.
    Vertex,
    /// Edge property index.
    Edge,
    /// Full-text search index.
    FullText,
}

impl Collection {
    /// Every collection, in the order they are created.
    pub const ALL: [Collection; 3] = [Collection::Vertex, Collection::Edge, Collection::FullText];

    /// The collection name as Solr knows it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Collection::Vertex => "vertex_index",
            Collection::Edge => "edge_index",
            Collection::FullText => "fulltext_index",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `solr create` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCommand {
    pub collection: Collection,
    pub program: PathBuf,
}

impl CollectionCommand {
    #[must_use]
    pub fn new(program: &Path, collection: Collection) -> Self {
        Self {
            collection,
            program: program.to_path_buf(),
        }
    }

    /// Full argument vector, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        vec![
            self.program.to_string_lossy().into_owned(),
            CREATE_VERB.to_string(),
            self.collection.name().to_string(),
        ]
    }

    /// Render the command for display, quoting elements that contain whitespace.
    #[must_use]
    pub fn display_line(&self) -> String {
        self.argv()
            .iter()
            .map(|arg| quote_arg(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the command for every collection, in creation order.
#[must_use]
pub fn plan(program: &Path) -> Vec<CollectionCommand> {
    Collection::ALL
        .iter()
        .map(|c| CollectionCommand::new(program, *c))
        .collect()
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
