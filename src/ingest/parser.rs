// src/ingest/parser.rs

use chrono::NaiveDateTime;
use regex::Regex;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// The whole log line; templated by the writer.
    Message(String),
    Value(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub time: Option<NaiveDateTime>,
    pub event: String,
    pub payload: EventPayload,
}

enum VariableMatcher {
    /// Only the configured names, one regex each.
    Tracked(Vec<(String, Regex)>),
    /// Any `key=<digits>` pair.
    KeyValue(Regex),
}

pub struct LogParser {
    variables: VariableMatcher,
}

impl LogParser {
    /// With no tracked variables every `key=<digits>` pair becomes a value event.
    pub fn new(track_variables: &[String]) -> Result<Self, regex::Error> {
        let variables = if track_variables.is_empty() {
            VariableMatcher::KeyValue(Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)=(\d+)\b")?)
        } else {
            let tracked = track_variables
                .iter()
                .map(|name| {
                    let rx = Regex::new(&format!(r"\b{}=(\d+)\b", regex::escape(name)))?;
                    Ok((name.clone(), rx))
                })
                .collect::<Result<Vec<_>, regex::Error>>()?;
            VariableMatcher::Tracked(tracked)
        };

        Ok(Self { variables })
    }

    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ParsedEvent> {
        let mut events = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let time = extract_timestamp(line);
            self.parse_severity(line, time, &mut events);
            self.parse_variables(line, time, &mut events);
        }

        events
    }

    fn parse_severity(&self, line: &str, time: Option<NaiveDateTime>, out: &mut Vec<ParsedEvent>) {
        for (marker, event) in [("ERROR", "error"), ("WARNING", "warning")] {
            if line.contains(marker) {
                out.push(ParsedEvent {
                    time,
                    event: event.to_string(),
                    payload: EventPayload::Message(line.to_string()),
                });
            }
        }
    }

    fn parse_variables(&self, line: &str, time: Option<NaiveDateTime>, out: &mut Vec<ParsedEvent>) {
        match &self.variables {
            VariableMatcher::Tracked(tracked) => {
                for (name, rx) in tracked {
                    let Some(value) = rx.captures(line).and_then(|c| c[1].parse().ok()) else {
                        continue;
                    };
                    out.push(ParsedEvent {
                        time,
                        event: name.clone(),
                        payload: EventPayload::Value(value),
                    });
                }
            }
            VariableMatcher::KeyValue(rx) => {
                for caps in rx.captures_iter(line) {
                    let key = &caps[1];
                    if key.eq_ignore_ascii_case("ERROR") || key.eq_ignore_ascii_case("WARNING") {
                        continue;
                    }
                    // Digits too long for i64 are dropped
                    let Ok(value) = caps[2].parse() else { continue };
                    out.push(ParsedEvent {
                        time,
                        event: key.to_string(),
                        payload: EventPayload::Value(value),
                    });
                }
            }
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` taken from the first two space-separated tokens.
pub fn extract_timestamp(line: &str) -> Option<NaiveDateTime> {
    let mut tokens = line.splitn(3, ' ');
    let date = tokens.next()?;
    let time = tokens.next()?;
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_parser() -> LogParser {
        LogParser::new(&[]).unwrap()
    }

    #[test]
    fn timestamp_from_leading_tokens() {
        let ts = extract_timestamp("2025-11-23 12:34:56 INFO something happened").unwrap();
        assert_eq!(ts.to_string(), "2025-11-23 12:34:56");
    }

    #[test]
    fn missing_or_malformed_timestamp_is_none() {
        assert!(extract_timestamp("INFO no time here").is_none());
        assert!(extract_timestamp("2025-13-01 99:00:00 bad").is_none());
        assert!(extract_timestamp("single").is_none());
    }

    #[test]
    fn errors_and_warnings_become_message_events() {
        let lines = [
            "2025-11-23 12:00:00 ERROR Database connection failed",
            "2025-11-23 12:01:00 WARNING Memory usage high",
            "   ",
        ];
        let events = default_parser().parse_lines(&lines);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, "error");
        assert_eq!(
            events[0].payload,
            EventPayload::Message("2025-11-23 12:00:00 ERROR Database connection failed".to_string())
        );
        assert_eq!(events[1].event, "warning");
        assert!(events[1].time.is_some());
    }

    #[test]
    fn key_value_pairs_become_value_events() {
        let events = default_parser().parse_lines(&["2025-11-23 12:10:00 INFO processed=7 size=123"]);

        let values: Vec<(&str, &EventPayload)> =
            events.iter().map(|e| (e.event.as_str(), &e.payload)).collect();
        assert_eq!(
            values,
            vec![("processed", &EventPayload::Value(7)), ("size", &EventPayload::Value(123))]
        );
    }

    #[test]
    fn severity_keys_are_not_metrics() {
        let events = default_parser().parse_lines(&["2025-11-23 12:10:00 INFO error=3 Warning=2 ok=1"]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "ok");
    }

    #[test]
    fn values_beyond_i64_are_dropped() {
        let events = default_parser().parse_lines(&["INFO huge=99999999999999999999 small=3"]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload, EventPayload::Value(3));
    }

    #[test]
    fn tracked_variables_limit_what_is_captured() {
        let parser = LogParser::new(&["latency".to_string()]).unwrap();
        let events = parser.parse_lines(&[
            "2025-11-23 12:11:00 INFO latency=250 size=9",
            "2025-11-23 12:12:00 INFO latency=120",
        ]);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.event == "latency"));
        assert_eq!(events[0].payload, EventPayload::Value(250));
        assert_eq!(events[1].payload, EventPayload::Value(120));
    }

    #[test]
    fn error_line_with_metric_yields_both_events() {
        let parser = LogParser::new(&["latency".to_string()]).unwrap();
        let events = parser.parse_lines(&["2025-11-23 12:11:00 ERROR slow call latency=900"]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, "error");
        assert_eq!(events[1].payload, EventPayload::Value(900));
    }
}
