//! Append-only console output log.

use chrono::{Local, NaiveTime};

use crate::models::{LineKind, LogLine, OutputLine};
use crate::utils::format::format_clock;

/// Ordered, time-stamped console output.
///
/// Lines are never dropped implicitly; only [`LineLog::clear`] empties the
/// log. IDs keep counting across clears so rendered rows stay uniquely keyed.
#[derive(Clone, Debug, Default)]
pub struct LineLog {
    lines: Vec<LogLine>,
    next_id: usize,
}

impl LineLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line stamped with the current local time.
    pub fn append(&mut self, text: impl Into<String>, kind: LineKind) {
        self.append_at(text, kind, Local::now().time());
    }

    /// Append a line stamped with `time`.
    pub fn append_at(&mut self, text: impl Into<String>, kind: LineKind, time: NaiveTime) {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(LogLine {
            id,
            kind,
            text: text.into(),
            timestamp: format_clock(time),
        });
    }

    /// Append a handler's output line.
    pub fn push(&mut self, line: OutputLine) {
        self.append(line.text, line.kind);
    }

    /// Append several output lines, in order.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines in append order.
    pub fn snapshot(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut log = LineLog::new();
        log.append("first", LineKind::Info);
        log.append("second", LineKind::Error);

        let texts: Vec<_> = log.snapshot().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(log.snapshot()[1].kind, LineKind::Error);
    }

    #[test]
    fn test_append_at_stamps_time() {
        let mut log = LineLog::new();
        let time = NaiveTime::from_hms_opt(21, 5, 9).unwrap();
        log.append_at("late", LineKind::Success, time);
        assert_eq!(log.snapshot()[0].timestamp, "21:05:09");
    }

    #[test]
    fn test_append_uses_clock_format() {
        let mut log = LineLog::new();
        log.push(OutputLine::info("now"));
        let stamp = &log.snapshot()[0].timestamp;
        assert_eq!(stamp.len(), 8);
        assert!(NaiveTime::parse_from_str(stamp, "%H:%M:%S").is_ok());
    }

    #[test]
    fn test_clear_empties_but_ids_stay_unique() {
        let mut log = LineLog::new();
        log.extend([OutputLine::info("a"), OutputLine::info("b")]);
        let last_id = log.last().unwrap().id;

        log.clear();
        assert!(log.is_empty());

        log.push(OutputLine::info("c"));
        assert_eq!(log.len(), 1);
        assert!(log.snapshot()[0].id > last_id);
    }
}
