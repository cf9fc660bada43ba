//! PDF output writer.
//!
//! Builds a PDF 1.4 document from laid-out [`Page`]s with `lopdf`. Text is
//! set in the built-in Courier font with WinAnsi encoding, so no font is
//! embedded. Characters outside that encoding are replaced by `?` before
//! layout, so wrapping measures exactly the glyphs that get printed.

use std::fs::File;
use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use super::layout::{Page, PageLayout};
use crate::core::models::Transcript;
use crate::error::{ChatcleanError, Result};

/// MIME type of the paginated sink.
pub const PDF_MIME: &str = "application/pdf";

const POINTS_PER_MM: f32 = 72.0 / 25.4;

const FONT_NAME: &str = "F1";

/// Writes the transcript as a paginated PDF with the default A4 layout.
pub fn write_pdf(transcript: &Transcript, output_path: &str) -> Result<()> {
    let bytes = to_pdf(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(&bytes)?;
    Ok(())
}

/// Renders the transcript as PDF bytes with the default A4 layout.
pub fn to_pdf(transcript: &Transcript) -> Result<Vec<u8>> {
    render_pdf(&transcript.full_text, &PageLayout::default())
}

/// Renders arbitrary text as PDF bytes with the given layout.
pub fn render_pdf(text: &str, layout: &PageLayout) -> Result<Vec<u8>> {
    let pages = layout.paginate(&printable_text(text))?;
    tracing::debug!(pages = pages.len(), "paginated transcript");

    let mut doc = build_document(&pages, layout)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|err| ChatcleanError::pdf(err.to_string()))?;
    Ok(bytes)
}

fn build_document(pages: &[Page], layout: &PageLayout) -> Result<Document> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_NAME => font_id,
        },
    });

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        pt(layout.page_width).into(),
        pt(layout.page_height).into(),
    ];

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, layout);
        let encoded = content
            .encode()
            .map_err(|err| ChatcleanError::pdf(err.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        }),
    );

    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal("chatclean"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// One text object per page; each non-empty line gets its own text matrix.
fn page_content(page: &Page, layout: &PageLayout) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![FONT_NAME.into(), layout.font_size.into()]),
    ];

    for line in page.lines.iter().filter(|line| !line.text.is_empty()) {
        let x = pt(line.x);
        let y = pt(layout.page_height - line.y);
        operations.push(Operation::new(
            "Tm",
            vec![1.into(), 0.into(), 0.into(), 1.into(), x.into(), y.into()],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_line(&line.text))],
        ));
    }

    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

fn pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Replaces characters Courier/WinAnsi cannot print with `?`.
///
/// Tabs become spaces. Line breaks are kept for the layout to split on.
fn printable_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' => c,
            '\t' => ' ',
            _ if win_ansi_byte(c).is_some() => c,
            _ => '?',
        })
        .collect()
}

fn encode_line(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => return None,
    };
    Some(byte)
}
