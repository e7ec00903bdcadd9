//! Reading and rewriting `.resx` documents.
//!
//! A resx file is an XML document whose root contains `data` elements with a
//! `name` attribute and a `value` child. Renames rewrite the `name`
//! attribute in place through an event roundtrip, leaving the rest of the
//! document untouched. Malformed XML is a hard error: silently skipping a
//! table would desynchronize code and data.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use quick_xml::{
    Reader, Writer,
    events::{BytesStart, Event},
};

use crate::core::data::LineIndex;

/// One `data` entry of a resx document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResxEntry {
    pub key: String,
    pub value: String,
    /// 1-based line of the `data` element.
    pub line: usize,
}

/// A parsed resx document that can be edited and written back.
#[derive(Debug, Clone)]
pub struct ResxDocument {
    path: PathBuf,
    content: String,
    entries: Vec<ResxEntry>,
}

impl ResxDocument {
    /// Read and parse a resx file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::parse(path.to_path_buf(), content)
    }

    /// Parse resx text. Fails on malformed XML.
    pub fn parse(path: PathBuf, content: String) -> Result<Self> {
        let entries = parse_entries(&content)
            .with_context(|| format!("Failed to parse resx file: {}", path.display()))?;
        Ok(Self {
            path,
            content,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[ResxEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&ResxEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Rewrite the `name` attribute of the entry `old` to `new`.
    ///
    /// Returns false (and leaves the document unchanged) when no entry
    /// matches.
    pub fn rename_key(&mut self, old: &str, new: &str) -> Result<bool> {
        if !self.has_key(old) {
            return Ok(false);
        }

        let mut reader = Reader::from_reader(self.content.as_bytes());
        let mut writer = Writer::new(Vec::new());
        let mut buf = Vec::new();
        loop {
            match reader
                .read_event_into(&mut buf)
                .with_context(|| format!("Failed to parse resx file: {}", self.path.display()))?
            {
                Event::Start(e) if e.name().as_ref() == b"data" => {
                    writer.write_event(Event::Start(with_renamed_key(&e, old, new)?))?;
                }
                Event::Empty(e) if e.name().as_ref() == b"data" => {
                    writer.write_event(Event::Empty(with_renamed_key(&e, old, new)?))?;
                }
                Event::Eof => break,
                event => writer.write_event(event)?,
            }
            buf.clear();
        }

        self.content = String::from_utf8(writer.into_inner())
            .context("resx rewrite produced invalid UTF-8")?;
        self.entries = parse_entries(&self.content)?;
        Ok(true)
    }

    /// Write the document back to its file.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        Ok(())
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Copy a `data` start tag, renaming its `name` attribute when it matches.
fn with_renamed_key(
    element: &BytesStart<'_>,
    old: &str,
    new: &str,
) -> Result<BytesStart<'static>> {
    let mut rewritten = BytesStart::new("data");
    for attr in element.attributes() {
        let attr = attr.context("malformed attribute in resx data element")?;
        if attr.key.as_ref() == b"name" && attr.unescape_value()? == old {
            rewritten.push_attribute(("name", new));
        } else {
            rewritten.push_attribute(attr);
        }
    }
    Ok(rewritten)
}

fn parse_entries(content: &str) -> Result<Vec<ResxEntry>> {
    let line_index = LineIndex::new(content);
    let mut reader = Reader::from_reader(content.as_bytes());
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<(String, usize)> = None;
    let mut in_value = false;
    let mut value = String::new();

    loop {
        buf.clear();
        let position = reader.buffer_position() as usize;
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"data" => {
                let (line, _) = line_index.location(content, position.min(content.len()));
                let mut key = None;
                for attr in e.attributes() {
                    let attr = attr.context("malformed attribute in resx data element")?;
                    if attr.key.as_ref() == b"name" {
                        key = Some(attr.unescape_value()?.into_owned());
                    }
                }
                if let Some(key) = key {
                    current = Some((key, line));
                }
                value.clear();
            }
            Event::Start(e) if e.name().as_ref() == b"value" && current.is_some() => {
                in_value = true;
                value.clear();
            }
            Event::Text(e) if in_value => {
                value.push_str(&e.unescape()?);
            }
            Event::End(e) if e.name().as_ref() == b"value" => {
                in_value = false;
            }
            Event::End(e) if e.name().as_ref() == b"data" => {
                if let Some((key, line)) = current.take() {
                    entries.push(ResxEntry {
                        key,
                        value: value.clone(),
                        line,
                    });
                }
                value.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}
