use egmlog_types::LogEntry;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Header shape of a terminal log line: `DATE TIME TYPE SENDER| MESSAGE`
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2},\d{3}) (\w+)\s+([^|]+)\|\s+(.*)").unwrap()
});

/// Result of tokenizing a whole file.
#[derive(Debug, Clone, Default)]
pub struct Tokenized {
    pub entries: Vec<LogEntry>,
    /// Lines that did not match the header shape
    pub skipped: usize,
}

/// Parse one raw line into a `LogEntry`.
///
/// Returns `None` when the line does not have the fixed header shape.
pub fn tokenize_line(line: &str) -> Option<LogEntry> {
    let caps = HEADER_REGEX.captures(line)?;

    let raw_message = caps[5].trim().to_string();
    let (action_type, attributes) = extract_attributes(&raw_message);

    Some(LogEntry {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        message_type: caps[3].to_string(),
        sender: caps[4].trim().to_string(),
        raw_message,
        action_type,
        attributes,
    })
}

/// Split a message into its action type and `key=value` attributes.
///
/// The action type is the text before the first `:`. The remainder is split
/// on runs of `;` and spaces; tokens without `=` are ignored and a repeated
/// key keeps its last value. A message without `:` is all action type.
pub fn extract_attributes(message: &str) -> (String, BTreeMap<String, String>) {
    let mut attributes = BTreeMap::new();

    let Some((action, rest)) = message.split_once(':') else {
        return (message.trim().to_string(), attributes);
    };

    for token in rest.trim().split([';', ' ']) {
        if let Some((key, value)) = token.split_once('=') {
            attributes.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    (action.trim().to_string(), attributes)
}

/// Tokenize every line of a file, dropping lines without the header shape.
pub fn tokenize_lines<I, S>(lines: I) -> Tokenized
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokenized = Tokenized::default();

    for line in lines {
        match tokenize_line(line.as_ref()) {
            Some(entry) => tokenized.entries.push(entry),
            None => tokenized.skipped += 1,
        }
    }

    tracing::debug!(
        entries = tokenized.entries.len(),
        skipped = tokenized.skipped,
        "tokenized log lines"
    );

    tokenized
}
