//! Declaration emitter.
//!
//! Renders a [`ParseResult`] into C# source files for the downstream
//! standard-library package and writes them to the output directory:
//!
//! - `Emoji.Declarations.cs`: one `SingleEmoji` per fully-qualified or
//!   component record
//! - `Emoji.<Group>.cs`: one list per taxonomy group
//! - `Emoji.All.cs`: every declared emoji
//! - `Emoji.Basic.cs`: fully-qualified emoji the reference font composes
//! - `Emoji.Subgroups.cs`: one list per subgroup
//!
//! Rendering is pure; only [`write_files`] touches the filesystem.

pub mod csharp;
pub mod naming;

use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use emoji_forge_registry::{EmojiRecord, Group, ParseResult, Status};

use naming::{IdentifierAllocator, emoji_identifier, subgroup_identifier};

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub name: String,
    pub contents: String,
}

/// Whether a record gets its own `SingleEmoji` declaration.
///
/// Unqualified and minimally-qualified forms are alternate spellings of a
/// fully-qualified entry and would only produce duplicate names.
pub fn is_declared(record: &EmojiRecord) -> bool {
    matches!(record.status, Status::FullyQualified | Status::Component)
}

/// Renders declarations for one parse result.
pub struct Emitter<'a> {
    result: &'a ParseResult,
    namespace: &'a str,
    header: String,
    /// Identifier per declared record, keyed by record index
    identifiers: HashMap<u32, String>,
}

impl<'a> Emitter<'a> {
    pub fn new(result: &'a ParseResult, namespace: &'a str) -> Self {
        let mut allocator = IdentifierAllocator::default();
        let identifiers = result
            .records()
            .iter()
            .filter(|record| is_declared(record))
            .map(|record| (record.index, allocator.allocate(emoji_identifier(record))))
            .collect();

        Self {
            result,
            namespace,
            header: csharp::header(result),
            identifiers,
        }
    }

    /// Identifier assigned to `record`, if it is declared.
    pub fn identifier(&self, record: &EmojiRecord) -> Option<&str> {
        self.identifiers.get(&record.index).map(String::as_str)
    }

    fn declared<'r>(
        &'r self,
        records: impl Iterator<Item = &'r EmojiRecord> + 'r,
    ) -> impl Iterator<Item = (&'r EmojiRecord, &'r str)> + 'r {
        records.filter_map(move |record| self.identifier(record).map(|id| (record, id)))
    }

    fn file(&self, name: String, body: &str) -> GeneratedFile {
        GeneratedFile {
            name,
            contents: csharp::wrap_in_class(&self.header, self.namespace, body),
        }
    }

    /// `Emoji.Declarations.cs`
    pub fn declarations(&self) -> GeneratedFile {
        let body: String = self
            .declared(self.result.records().iter())
            .map(|(record, id)| csharp::single_emoji(id, record))
            .collect();
        self.file("Emoji.Declarations.cs".to_string(), &body)
    }

    /// `Emoji.<Group>.cs` for one group.
    pub fn group(&self, group: Group) -> GeneratedFile {
        let members: Vec<&str> = self
            .declared(self.result.group(group))
            .map(|(_, id)| id)
            .collect();
        let list = csharp::emoji_list(3, group.identifier(), &members);
        let body = csharp::nested_class("Groups", &[list]);
        self.file(format!("Emoji.{}.cs", group.identifier()), &body)
    }

    /// `Emoji.All.cs`
    pub fn all(&self) -> GeneratedFile {
        let members: Vec<&str> = self
            .declared(self.result.records().iter())
            .map(|(_, id)| id)
            .collect();
        let body = csharp::emoji_list(2, "All", &members);
        self.file("Emoji.All.cs".to_string(), &body)
    }

    /// `Emoji.Basic.cs`: fully-qualified records whose index is in `supported`.
    pub fn basic(&self, supported: &BTreeSet<u32>) -> GeneratedFile {
        let members: Vec<&str> = self
            .declared(self.result.records().iter())
            .filter(|(record, _)| {
                record.status == Status::FullyQualified && supported.contains(&record.index)
            })
            .map(|(_, id)| id)
            .collect();
        let body = csharp::emoji_list(2, "Basic", &members);
        self.file("Emoji.Basic.cs".to_string(), &body)
    }

    /// `Emoji.Subgroups.cs`, subgroups in order of first appearance.
    pub fn subgroups(&self) -> GeneratedFile {
        let mut order: Vec<&str> = Vec::new();
        let mut members: HashMap<&str, Vec<&str>> = HashMap::new();
        for (record, id) in self.declared(self.result.records().iter()) {
            let subgroup = record.subgroup.as_str();
            members
                .entry(subgroup)
                .or_insert_with(|| {
                    order.push(subgroup);
                    Vec::new()
                })
                .push(id);
        }

        let mut allocator = IdentifierAllocator::default();
        let lists: Vec<String> = order
            .iter()
            .map(|subgroup| {
                let name = allocator.allocate(subgroup_identifier(subgroup));
                csharp::emoji_list(3, &name, &members[subgroup])
            })
            .collect();
        let body = csharp::nested_class("Subgroups", &lists);
        self.file("Emoji.Subgroups.cs".to_string(), &body)
    }

    /// Every file. `Emoji.Basic.cs` is included only when `supported` is known.
    pub fn render(&self, supported: Option<&BTreeSet<u32>>) -> Vec<GeneratedFile> {
        let mut files = vec![self.declarations()];
        files.extend(Group::ALL.iter().map(|&group| self.group(group)));
        files.push(self.all());
        if let Some(supported) = supported {
            files.push(self.basic(supported));
        }
        files.push(self.subgroups());
        files
    }
}

/// Write `files` into `dir`, creating it if needed.
///
/// Returns the written paths in order.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    files
        .iter()
        .map(|file| {
            let path = dir.join(&file.name);
            fs::write(&path, &file.contents)
                .with_context(|| format!("Failed to write {:?}", path))?;
            log::info!("Wrote {:?} ({} bytes)", path, file.contents.len());
            Ok(path)
        })
        .collect()
}
