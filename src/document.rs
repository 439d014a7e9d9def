//! Fusion 360 thread-library XML documents
//!
//! Renders one thread profile into the ThreadType XML schema Fusion 360
//! loads from its ThreadData directory. Fusion is picky about element
//! order, so fields are emitted in the order the stock library files use.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::config::ProfileConfig;
use crate::format::{designator, format_sig};
use crate::profile::ThreadProfile;

/// Fixed sort position within Fusion's thread-type list.
const SORT_ORDER: &str = "3";

/// Significant digits for diameter values.
pub const DIA_SIG_DIGITS: usize = 4;

/// Errors from rendering a thread-profile document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to write XML: {0}")]
    Xml(String),
}

/// Render the complete ThreadType document for one profile.
pub fn render(entry: &ProfileConfig, profile: &dyn ThreadProfile) -> Result<String, DocumentError> {
    let mut buffer = Vec::new();
    let mut doc = XmlDoc::new(&mut buffer)?;

    doc.open("ThreadType")?;
    doc.leaf("Name", entry.display_name())?;
    doc.leaf("CustomName", entry.display_name())?;
    doc.leaf("Unit", &entry.unit)?;
    doc.leaf("Angle", &designator(entry.angle))?;
    doc.leaf("SortOrder", SORT_ORDER)?;

    for &size in profile.sizes() {
        doc.open("ThreadSize")?;
        doc.leaf("Size", &designator(size))?;
        for designation in profile.designations(size) {
            doc.open("Designation")?;
            doc.leaf("ThreadDesignation", &designation.name)?;
            doc.leaf("CTD", &designation.name)?;
            doc.leaf("Pitch", &designator(designation.pitch))?;
            for thread in profile.threads(&designation) {
                doc.open("Thread")?;
                doc.leaf("Gender", &thread.gender.to_string())?;
                doc.leaf("Class", &thread.class)?;
                doc.leaf("MajorDia", &format_sig(thread.major_dia, DIA_SIG_DIGITS))?;
                doc.leaf("PitchDia", &format_sig(thread.pitch_dia, DIA_SIG_DIGITS))?;
                doc.leaf("MinorDia", &format_sig(thread.minor_dia, DIA_SIG_DIGITS))?;
                if let Some(tap_drill) = thread.tap_drill {
                    doc.leaf("TapDrill", &format_sig(tap_drill, DIA_SIG_DIGITS))?;
                }
                doc.close("Thread")?;
            }
            doc.close("Designation")?;
        }
        doc.close("ThreadSize")?;
    }
    doc.close("ThreadType")?;

    String::from_utf8(buffer).map_err(|e| DocumentError::Xml(format!("document is not UTF-8: {e}")))
}

/// Thin wrapper over the XML writer: two-space indentation, UTF-8
/// declaration up front, and event errors mapped once instead of at
/// every call site.
struct XmlDoc<'a> {
    writer: Writer<Cursor<&'a mut Vec<u8>>>,
}

impl<'a> XmlDoc<'a> {
    fn new(buffer: &'a mut Vec<u8>) -> Result<Self, DocumentError> {
        let mut writer = Writer::new_with_indent(Cursor::new(buffer), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| DocumentError::Xml(format!("failed to write XML declaration: {e}")))?;
        Ok(Self { writer })
    }

    fn open(&mut self, name: &str) -> Result<(), DocumentError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(|e| DocumentError::Xml(format!("failed to open <{name}>: {e}")))
    }

    fn close(&mut self, name: &str) -> Result<(), DocumentError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| DocumentError::Xml(format!("failed to close <{name}>: {e}")))
    }

    /// Write `<name>text</name>` on one line.
    fn leaf(&mut self, name: &str, text: &str) -> Result<(), DocumentError> {
        self.open(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| DocumentError::Xml(format!("failed to write <{name}> text: {e}")))?;
        self.close(name)
    }
}
