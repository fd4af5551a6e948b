//! Integration tests for the text pipeline, driven by in-memory pages.

use sezi::error::{Error, Result};
use sezi::model::reading_minutes;
use sezi::render::{report_to_json, JsonFormat};
use sezi::{
    DocumentProcessor, ErrorMode, PageSelection, PageTextSource, ProcessOptions, TextPages,
};

const PAGE_ONE: &str =
    "Dr. Smith met Mr. Jones on Main St. today.\nThey talked about exam-\n  ple texts! Was it fun?";

fn sample_source() -> TextPages {
    TextPages::new([PAGE_ONE, "   \n\t ", "The end"])
}

/// A source that cannot read one of its pages.
struct BrokenPage {
    inner: TextPages,
    broken: u32,
}

impl PageTextSource for BrokenPage {
    fn page_count(&self) -> u32 {
        self.inner.page_count()
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        if page_number == self.broken {
            return Err(Error::TextExtract(format!("Page {}: bad stream", page_number)));
        }
        self.inner.page_text(page_number)
    }
}

#[test]
fn test_pages_are_cleaned_and_tokenized() {
    let doc = DocumentProcessor::new()
        .process_source("/library/books/sample.pdf", &sample_source())
        .unwrap();

    assert_eq!(doc.file_name(), "sample.pdf");
    assert_eq!(doc.total_pages(), 3);

    let page = doc.get_page(1).unwrap();
    assert_eq!(
        page.text(),
        "Dr. Smith met Mr. Jones on Main St. today. They talked about example texts! Was it fun?"
    );
    assert_eq!(page.word_count(), 17);
    assert_eq!(
        page.sentences(),
        &[
            "Dr. Smith met Mr. Jones on Main St. today",
            "They talked about example texts",
            "Was it fun",
        ]
    );
    assert_eq!(page.words()[13], "texts!");
}

#[test]
fn test_blank_page_is_kept_empty() {
    let doc = DocumentProcessor::new()
        .process_source("sample.pdf", &sample_source())
        .unwrap();

    let blank = doc.get_page(2).unwrap();
    assert!(blank.is_empty());
    assert!(blank.words().is_empty());
    assert!(blank.sentences().is_empty());
}

#[test]
fn test_document_stats() {
    let doc = DocumentProcessor::new()
        .process_source("sample.pdf", &sample_source())
        .unwrap();
    let stats = doc.stats();

    assert_eq!(stats.total_pages, 3);
    assert_eq!(stats.total_words, 19);
    assert_eq!(stats.total_sentences, 4);
    assert_eq!(stats.total_characters, 94);
    assert_eq!(stats.estimated_reading_time_minutes, 0.1);
}

#[test]
fn test_stats_are_sums_over_pages() {
    let pages: Vec<String> = (1..=40)
        .map(|n| format!("Page {} has words. Some more follow here! ", n).repeat(n))
        .collect();
    let doc = DocumentProcessor::new()
        .process_source("long.pdf", &TextPages::new(pages))
        .unwrap();
    let stats = doc.stats();

    let words: usize = doc.pages().iter().map(|p| p.word_count()).sum();
    let sentences: usize = doc.pages().iter().map(|p| p.sentence_count()).sum();
    let chars: usize = doc.pages().iter().map(|p| p.text().chars().count()).sum();
    assert_eq!(stats.total_words, words);
    assert_eq!(stats.total_sentences, sentences);
    assert_eq!(stats.total_characters, chars);
    assert_eq!(stats.estimated_reading_time_minutes, reading_minutes(words));
}

#[test]
fn test_parallel_matches_sequential() {
    let pages: Vec<String> = (0..64)
        .map(|n| format!("Section {}. Prof. Lee wrote e.g. this line-\nbreak. Done?", n))
        .collect();
    let source = TextPages::new(pages);

    let parallel = DocumentProcessor::new()
        .process_source("a.pdf", &source)
        .unwrap();
    let sequential = DocumentProcessor::with_options(ProcessOptions::new().sequential())
        .process_source("a.pdf", &source)
        .unwrap();

    assert_eq!(parallel, sequential);
    let numbers: Vec<u32> = parallel.pages().iter().map(|p| p.page_number()).collect();
    assert_eq!(numbers, (1..=64).collect::<Vec<_>>());
}

#[test]
fn test_lenient_mode_blanks_unreadable_page() {
    let source = BrokenPage {
        inner: sample_source(),
        broken: 1,
    };
    let options = ProcessOptions::new().with_error_mode(ErrorMode::Lenient);
    let doc = DocumentProcessor::with_options(options)
        .process_source("broken.pdf", &source)
        .unwrap();

    assert_eq!(doc.total_pages(), 3);
    assert!(doc.get_page(1).unwrap().is_empty());
    assert_eq!(doc.get_page(3).unwrap().text(), "The end");
}

#[test]
fn test_default_mode_fails_whole_document() {
    let source = BrokenPage {
        inner: sample_source(),
        broken: 3,
    };
    let err = DocumentProcessor::new()
        .process_source("broken.pdf", &source)
        .unwrap_err();

    assert!(err.is_document_read());
    assert!(err.to_string().contains("broken.pdf"));
}

#[test]
fn test_page_selection_keeps_page_numbers() {
    let options = ProcessOptions::new().with_pages(PageSelection::parse("1,3").unwrap());
    let doc = DocumentProcessor::with_options(options)
        .process_source("sample.pdf", &sample_source())
        .unwrap();

    assert_eq!(doc.total_pages(), 2);
    assert!(doc.get_page(2).is_none());
    assert_eq!(doc.get_page(3).unwrap().words(), &["The", "end"]);
}

#[test]
fn test_empty_source() {
    let doc = DocumentProcessor::new()
        .process_source("empty.pdf", &TextPages::default())
        .unwrap();

    assert!(doc.is_empty());
    let stats = doc.stats();
    assert_eq!(stats.total_pages, 0);
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.estimated_reading_time_minutes, 0.0);
}

#[test]
fn test_report_json_shape() {
    let doc = DocumentProcessor::new()
        .process_source("C:\\books\\sample.pdf", &sample_source())
        .unwrap();
    let json = report_to_json(&doc, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let document = &value["document"];
    assert_eq!(document["file_path"], "C:\\books\\sample.pdf");
    assert_eq!(document["file_name"], "sample.pdf");
    assert_eq!(document["total_pages"], 3);

    let first = &document["pages"][0];
    assert_eq!(first["page_number"], 1);
    assert_eq!(first["word_count"], 17);
    assert_eq!(first["sentence_count"], 3);
    assert_eq!(document["pages"][1]["text"], "");

    assert_eq!(value["stats"]["total_words"], 19);
    assert_eq!(value["stats"]["estimated_reading_time_minutes"], 0.1);
}
