//! Conversions between domain values and wire messages

use crate::application::ports::RpcStatus;
use crate::domain::recognition::{
    Alternative, AudioSource, EndpointerEvent, RecognitionResponse, RecognitionResult,
    RecognizeRequest, RecognizeResponse, ResponseError,
};

use super::proto;
use super::proto::recognize_response::EndpointerEvent as WireEndpointerEvent;

impl From<&RecognizeRequest> for proto::RecognizeRequest {
    fn from(request: &RecognizeRequest) -> Self {
        let initial = proto::InitialRecognizeRequest {
            encoding: request.params.encoding.wire_value(),
            sample_rate: request.params.sample_rate,
            language_code: request.params.language_code.clone(),
            ..Default::default()
        };

        let audio = match request.audio.source() {
            AudioSource::Content(data) => proto::AudioRequest {
                content: data.clone(),
                ..Default::default()
            },
            AudioSource::Uri(uri) => proto::AudioRequest {
                uri: uri.clone(),
                ..Default::default()
            },
        };

        Self {
            initial_request: Some(initial),
            audio_request: Some(audio),
        }
    }
}

impl From<proto::NonStreamingRecognizeResponse> for RecognizeResponse {
    fn from(message: proto::NonStreamingRecognizeResponse) -> Self {
        Self {
            responses: message.responses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::RecognizeResponse> for RecognitionResponse {
    fn from(message: proto::RecognizeResponse) -> Self {
        // Unknown enum values decode as unspecified
        let endpoint = match message.endpoint() {
            WireEndpointerEvent::EndpointerEventUnspecified => EndpointerEvent::Unspecified,
            WireEndpointerEvent::StartOfSpeech => EndpointerEvent::StartOfSpeech,
            WireEndpointerEvent::EndOfSpeech => EndpointerEvent::EndOfSpeech,
            WireEndpointerEvent::EndOfAudio => EndpointerEvent::EndOfAudio,
            WireEndpointerEvent::EndOfUtterance => EndpointerEvent::EndOfUtterance,
        };

        Self {
            error: message.error.map(|status| ResponseError {
                code: status.code,
                message: status.message,
            }),
            results: message
                .results
                .into_iter()
                .map(|result| RecognitionResult {
                    alternatives: result
                        .alternatives
                        .into_iter()
                        .map(|alt| Alternative {
                            transcript: alt.transcript,
                            confidence: alt.confidence,
                        })
                        .collect(),
                    is_final: result.is_final,
                    stability: result.stability,
                })
                .collect(),
            result_index: message.result_index,
            endpoint,
        }
    }
}

impl From<tonic::Status> for RpcStatus {
    fn from(status: tonic::Status) -> Self {
        RpcStatus::new(format!("{:?}", status.code()), status.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recognition::{AudioRequest, RecognitionParams};
    use prost::Message;

    #[test]
    fn initial_request_wire_layout() {
        let request = RecognizeRequest::new(
            RecognitionParams::new(16000),
            AudioRequest::from_content("a.flac", vec![]),
        );
        let message = proto::RecognizeRequest::from(&request);
        let initial = message.initial_request.unwrap();

        // encoding=FLAC(2), sample_rate=16000, language_code="ja-JP"
        let mut expected = vec![0x08, 0x02, 0x10, 0x80, 0x7D, 0x1A, 0x05];
        expected.extend_from_slice(b"ja-JP");
        assert_eq!(initial.encode_to_vec(), expected);
    }

    #[test]
    fn inline_audio_sets_content_only() {
        let request = RecognizeRequest::new(
            RecognitionParams::new(8000),
            AudioRequest::from_content("a.raw", vec![1, 2, 3]),
        );
        let audio = proto::RecognizeRequest::from(&request)
            .audio_request
            .unwrap();

        assert_eq!(audio.content, vec![1, 2, 3]);
        assert!(audio.uri.is_empty());
    }

    #[test]
    fn storage_audio_sets_uri_only() {
        let request = RecognizeRequest::new(
            RecognitionParams::new(16000),
            AudioRequest::from_storage_uri("gs://bucket/a.flac"),
        );
        let audio = proto::RecognizeRequest::from(&request)
            .audio_request
            .unwrap();

        assert!(audio.content.is_empty());
        assert_eq!(audio.uri, "gs://bucket/a.flac");
    }

    #[test]
    fn response_converts_results_and_errors() {
        let wire = proto::NonStreamingRecognizeResponse {
            responses: vec![proto::RecognizeResponse {
                error: Some(proto::Status {
                    code: 11,
                    message: "audio too long".to_string(),
                }),
                results: vec![proto::SpeechRecognitionResult {
                    alternatives: vec![proto::SpeechRecognitionAlternative {
                        transcript: "おはよう".to_string(),
                        confidence: 0.75,
                    }],
                    is_final: true,
                    stability: 0.0,
                }],
                result_index: 0,
                endpoint: WireEndpointerEvent::EndOfUtterance as i32,
            }],
        };

        let bytes = wire.encode_to_vec();
        let decoded = proto::NonStreamingRecognizeResponse::decode(bytes.as_slice()).unwrap();
        let response = RecognizeResponse::from(decoded);

        assert_eq!(response.transcripts(), vec!["おはよう"]);
        assert_eq!(response.responses[0].endpoint, EndpointerEvent::EndOfUtterance);
        let error = response.errors().next().unwrap();
        assert_eq!(error.code, 11);
        assert_eq!(error.message, "audio too long");
    }

    #[test]
    fn unknown_endpointer_value_is_unspecified() {
        let wire = proto::RecognizeResponse {
            endpoint: 42,
            ..Default::default()
        };
        let response = RecognitionResponse::from(wire);
        assert_eq!(response.endpoint, EndpointerEvent::Unspecified);
    }

    #[test]
    fn tonic_status_keeps_code_name() {
        let status = RpcStatus::from(tonic::Status::unavailable("connection refused"));
        assert_eq!(status.code, "Unavailable");
        assert_eq!(status.message, "connection refused");
    }
}
