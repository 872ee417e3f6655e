//! Protobuf messages of the `google.cloud.speech.v1` non-streaming API.
//!
//! Field numbers and enum values match the service schema; fields this
//! client never reads are left out and skipped by the decoder.

/// Top-level request: the recognition parameters plus the audio.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecognizeRequest {
    #[prost(message, optional, tag = "1")]
    pub initial_request: ::core::option::Option<InitialRecognizeRequest>,
    #[prost(message, optional, tag = "2")]
    pub audio_request: ::core::option::Option<AudioRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InitialRecognizeRequest {
    #[prost(enumeration = "initial_recognize_request::AudioEncoding", tag = "1")]
    pub encoding: i32,
    #[prost(int32, tag = "2")]
    pub sample_rate: i32,
    #[prost(string, tag = "3")]
    pub language_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub max_alternatives: i32,
    #[prost(bool, tag = "5")]
    pub profanity_filter: bool,
    #[prost(bool, tag = "6")]
    pub continuous: bool,
    #[prost(bool, tag = "7")]
    pub interim_results: bool,
    #[prost(bool, tag = "8")]
    pub enable_endpointer_events: bool,
}

pub mod initial_recognize_request {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum AudioEncoding {
        EncodingUnspecified = 0,
        Linear16 = 1,
        Flac = 2,
        Mulaw = 3,
        Amr = 4,
        AmrWb = 5,
    }
}

/// Audio either inline (`content`) or by reference (`uri`); exactly one is set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AudioRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub content: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "2")]
    pub uri: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NonStreamingRecognizeResponse {
    #[prost(message, repeated, tag = "1")]
    pub responses: ::prost::alloc::vec::Vec<RecognizeResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecognizeResponse {
    #[prost(message, optional, tag = "1")]
    pub error: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<SpeechRecognitionResult>,
    #[prost(int32, tag = "3")]
    pub result_index: i32,
    #[prost(enumeration = "recognize_response::EndpointerEvent", tag = "4")]
    pub endpoint: i32,
}

pub mod recognize_response {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum EndpointerEvent {
        EndpointerEventUnspecified = 0,
        StartOfSpeech = 1,
        EndOfSpeech = 2,
        EndOfAudio = 3,
        EndOfUtterance = 4,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpeechRecognitionResult {
    #[prost(message, repeated, tag = "1")]
    pub alternatives: ::prost::alloc::vec::Vec<SpeechRecognitionAlternative>,
    #[prost(bool, tag = "2")]
    pub is_final: bool,
    #[prost(float, tag = "3")]
    pub stability: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpeechRecognitionAlternative {
    #[prost(string, tag = "1")]
    pub transcript: ::prost::alloc::string::String,
    #[prost(float, tag = "2")]
    pub confidence: f32,
}

/// `google.rpc.Status` without its `details` payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
