//! Recognize request value objects

use super::audio::AudioRequest;
use super::encoding::AudioEncoding;

/// Language tag sent with every request
pub const LANGUAGE_CODE: &str = "ja-JP";

/// Parameters sent ahead of the audio in a recognize request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionParams {
    pub encoding: AudioEncoding,
    pub sample_rate: i32,
    pub language_code: String,
}

impl RecognitionParams {
    /// FLAC audio at `sample_rate`, Japanese speech
    pub fn new(sample_rate: i32) -> Self {
        Self {
            encoding: AudioEncoding::Flac,
            sample_rate,
            language_code: LANGUAGE_CODE.to_string(),
        }
    }
}

/// A complete non-streaming recognize request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizeRequest {
    pub params: RecognitionParams,
    pub audio: AudioRequest,
}

impl RecognizeRequest {
    pub fn new(params: RecognitionParams, audio: AudioRequest) -> Self {
        Self { params, audio }
    }
}
