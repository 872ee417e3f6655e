//! Recognize response value objects and their text rendering

use std::fmt::{self, Write};

/// Endpointer events reported alongside results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointerEvent {
    #[default]
    Unspecified,
    StartOfSpeech,
    EndOfSpeech,
    EndOfAudio,
    EndOfUtterance,
}

impl EndpointerEvent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "ENDPOINTER_EVENT_UNSPECIFIED",
            Self::StartOfSpeech => "START_OF_SPEECH",
            Self::EndOfSpeech => "END_OF_SPEECH",
            Self::EndOfAudio => "END_OF_AUDIO",
            Self::EndOfUtterance => "END_OF_UTTERANCE",
        }
    }
}

/// Error carried inside an otherwise successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    pub code: i32,
    pub message: String,
}

/// One hypothesis for a recognized segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
}

/// A recognized segment; alternatives are ordered best first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
    pub is_final: bool,
    pub stability: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResponse {
    pub error: Option<ResponseError>,
    pub results: Vec<RecognitionResult>,
    pub result_index: i32,
    pub endpoint: EndpointerEvent,
}

/// Full result of a non-streaming recognize call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognizeResponse {
    pub responses: Vec<RecognitionResponse>,
}

impl RecognizeResponse {
    /// Best transcript of every final result, in order
    pub fn transcripts(&self) -> Vec<&str> {
        self.responses
            .iter()
            .flat_map(|r| r.results.iter())
            .filter(|r| r.is_final)
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.as_str())
            .collect()
    }

    /// Errors reported inside the response body
    pub fn errors(&self) -> impl Iterator<Item = &ResponseError> {
        self.responses.iter().filter_map(|r| r.error.as_ref())
    }

    /// Render in protobuf text format. Fields holding default values are
    /// omitted; strings are quoted and escaped but keep their UTF-8 text.
    pub fn to_text_format(&self) -> String {
        let mut out = TextFormat::default();
        for response in &self.responses {
            out.open("responses");
            if let Some(error) = &response.error {
                out.open("error");
                out.int("code", error.code);
                out.string("message", &error.message);
                out.close();
            }
            for result in &response.results {
                out.open("results");
                for alternative in &result.alternatives {
                    out.open("alternatives");
                    out.string("transcript", &alternative.transcript);
                    out.float("confidence", alternative.confidence);
                    out.close();
                }
                if result.is_final {
                    out.raw("is_final", "true");
                }
                out.float("stability", result.stability);
                out.close();
            }
            out.int("result_index", response.result_index);
            if response.endpoint != EndpointerEvent::Unspecified {
                out.raw("endpoint", response.endpoint.as_str());
            }
            out.close();
        }
        out.finish()
    }
}

impl fmt::Display for RecognizeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_format())
    }
}

#[derive(Default)]
struct TextFormat {
    buf: String,
    depth: usize,
}

impl TextFormat {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn open(&mut self, name: &str) {
        self.indent();
        let _ = writeln!(self.buf, "{} {{", name);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.indent();
        self.buf.push_str("}\n");
    }

    fn raw(&mut self, name: &str, value: &str) {
        self.indent();
        let _ = writeln!(self.buf, "{}: {}", name, value);
    }

    fn int(&mut self, name: &str, value: i32) {
        if value != 0 {
            self.raw(name, &value.to_string());
        }
    }

    fn float(&mut self, name: &str, value: f32) {
        if value != 0.0 {
            self.raw(name, &value.to_string());
        }
    }

    fn string(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.raw(name, &quote(value));
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\{:03o}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
