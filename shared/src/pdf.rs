//! PDF encoding of rendered documents.
//!
//! Turns a [`Document`](crate::render::Document) of positioned text draws
//! into PDF bytes: catalog, page tree, one page object and content stream
//! per rendered page, base-14 Helvetica. No font embedding; characters
//! outside Latin-1 are replaced since the standard encoding cannot carry
//! them.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::render::{Document, PAGE_HEIGHT, PAGE_WIDTH};

const FONT_NAME: Name<'static> = Name(b"F1");

/// Encode a rendered document as PDF bytes.
pub fn to_bytes(document: &Document) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();
    let page_ids: Vec<Ref> = document.pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = document.pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    for (i, page) in document.pages.iter().enumerate() {
        let mut content = Content::new();
        for draw in &page.draws {
            content
                .begin_text()
                .set_font(FONT_NAME, draw.size)
                .set_fill_rgb(draw.color.r, draw.color.g, draw.color.b)
                .next_line(draw.x, draw.y)
                .show(Str(&to_latin1_bytes(&draw.text)))
                .end_text();
        }
        let stream = content.finish();
        pdf.stream(content_ids[i], &stream);

        let mut page_writer = pdf.page(page_ids[i]);
        page_writer
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_ids[i]);
        page_writer
            .resources()
            .fonts()
            .pair(FONT_NAME, font_id);
    }

    pdf.finish()
}

fn to_latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
