//! `pulldown-cmark` backed renderer.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::render::{BlockKind, MarkdownRenderer, RenderedBlock, RenderedDocument};

/// CommonMark renderer with GFM tables and strikethrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> RenderedDocument {
        let mut blocks = Vec::new();
        let mut current: Vec<Event<'_>> = Vec::new();
        let mut depth = 0usize;

        for event in Parser::new_ext(markdown, Self::options()) {
            match &event {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth = depth.saturating_sub(1),
                _ => {}
            }
            current.push(event);
            if depth == 0 {
                blocks.push(finish_block(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            blocks.push(finish_block(current));
        }

        RenderedDocument { blocks }
    }
}

fn block_kind(first: Option<&Event<'_>>) -> BlockKind {
    match first {
        Some(Event::Start(tag)) => match tag {
            Tag::Heading { level, .. } => BlockKind::Heading {
                level: *level as u8,
            },
            Tag::Paragraph => BlockKind::Paragraph,
            Tag::List(start) => BlockKind::List {
                ordered: start.is_some(),
            },
            Tag::BlockQuote(_) => BlockKind::Quote,
            Tag::CodeBlock(_) => BlockKind::Code,
            Tag::Table(_) => BlockKind::Table,
            Tag::HtmlBlock => BlockKind::Html,
            _ => BlockKind::Other,
        },
        Some(Event::Rule) => BlockKind::Rule,
        Some(Event::Html(_)) | Some(Event::InlineHtml(_)) => BlockKind::Html,
        _ => BlockKind::Other,
    }
}

fn flush(run: &mut String, runs: &mut Vec<String>) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        runs.push(trimmed.to_string());
    }
    run.clear();
}

fn text_runs(events: &[Event<'_>]) -> Vec<String> {
    let mut runs = Vec::new();
    let mut run = String::new();

    for event in events {
        match event {
            Event::Text(text) | Event::Code(text) => run.push_str(text),
            Event::SoftBreak => run.push(' '),
            Event::HardBreak => flush(&mut run, &mut runs),
            Event::End(TagEnd::Item)
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::TableRow)
            | Event::End(TagEnd::TableHead)
            | Event::End(TagEnd::Heading(_)) => flush(&mut run, &mut runs),
            Event::End(TagEnd::CodeBlock) => {
                for line in run.lines() {
                    runs.push(line.to_string());
                }
                run.clear();
            }
            Event::Start(Tag::Item) => flush(&mut run, &mut runs),
            _ => {}
        }
    }
    flush(&mut run, &mut runs);
    runs
}

fn finish_block(events: Vec<Event<'_>>) -> RenderedBlock {
    let kind = block_kind(events.first());
    let text_runs = text_runs(&events);
    let mut fragment = String::new();
    html::push_html(&mut fragment, events.into_iter());
    RenderedBlock {
        kind,
        html: fragment,
        text_runs,
    }
}
