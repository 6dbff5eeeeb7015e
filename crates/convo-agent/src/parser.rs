//! Reply extraction from a streamed exchange body.
//!
//! The engine streams newline-delimited JSON events. Only the tail line
//! matters: it carries the final assembled message. Its text is either
//! prose for the transcript or a JSON navigation command, optionally
//! wrapped in a ```` ```json ```` fence. Anything that does not decode as a
//! complete command is shown as prose.

use std::sync::LazyLock;

use convo_common::PageId;
use regex::Regex;
use serde_json::Value;

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(?:json)?\s*").unwrap());
static FENCE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\s*$").unwrap());

/// Field names the notice has been sent under, in lookup order.
const NOTICE_FIELDS: [(&str, NoticeField); 2] = [
    ("messaggio", NoticeField::Messaggio),
    ("risposta", NoticeField::Risposta),
];

/// Result of parsing one exchange body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// No decodable reply text: an empty turn, not an error.
    NoReply,
    Reply(ParsedReply),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    PlainText { text: String },
    Navigation(NavigationCommand),
}

/// Instruction to switch the displayed page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationCommand {
    pub target: PageId,
    /// User-facing text for the transcript and the banner.
    pub notice: String,
    /// Which wire field the notice came from.
    pub notice_field: NoticeField,
    pub page: PageData,
}

/// Wire names of the notice field across protocol revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeField {
    Messaggio,
    Risposta,
}

impl NoticeField {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeField::Messaggio => "messaggio",
            NoticeField::Risposta => "risposta",
        }
    }
}

/// Opaque page payload travelling with a navigation command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageData {
    pub content: Option<Value>,
    pub title: Option<String>,
}

/// Parse a raw exchange body. Total: never panics, never errors.
pub fn parse(raw_body: &str) -> ParseOutcome {
    match tail_line(raw_body).and_then(candidate_text) {
        Some(text) => ParseOutcome::Reply(interpret(text)),
        None => ParseOutcome::NoReply,
    }
}

/// Last non-empty line of the body, without an SSE `data:` prefix.
pub fn tail_line(raw_body: &str) -> Option<&str> {
    let line = raw_body.lines().map(str::trim).rfind(|l| !l.is_empty())?;
    let line = line
        .strip_prefix("data:")
        .map(str::trim_start)
        .unwrap_or(line);
    (!line.is_empty()).then_some(line)
}

/// `content.parts[0].text` of one event line, if present and non-empty.
pub fn candidate_text(line: &str) -> Option<String> {
    let event: Value = serde_json::from_str(line).ok()?;
    event
        .pointer("/content/parts/0/text")?
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Classify reply text as a navigation command or prose.
pub fn interpret(text: String) -> ParsedReply {
    match decode_command(&text) {
        Some(command) => ParsedReply::Navigation(command),
        None => ParsedReply::PlainText { text },
    }
}

/// Decode `text` as a navigation command. `None` when it is not JSON, not
/// an object, or lacks a non-empty target or notice.
pub fn decode_command(text: &str) -> Option<NavigationCommand> {
    let value: Value = serde_json::from_str(strip_code_fence(text)).ok()?;
    let object = value.as_object()?;

    let target = object
        .get("navigate_to")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())?;

    let (notice, notice_field) = NOTICE_FIELDS.iter().find_map(|(name, field)| {
        object
            .get(*name)
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(|n| (n.to_string(), *field))
    })?;

    Some(NavigationCommand {
        target: PageId::new(target),
        notice,
        notice_field,
        page: PageData {
            content: object.get("content").filter(|c| !c.is_null()).cloned(),
            title: object
                .get("titolo")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
    })
}

/// Remove a surrounding Markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let start = FENCE_OPEN_RE.find(text).map_or(0, |m| m.end());
    let rest = &text[start..];
    let end = FENCE_CLOSE_RE.find(rest).map_or(rest.len(), |m| m.start());
    &rest[..end]
}
