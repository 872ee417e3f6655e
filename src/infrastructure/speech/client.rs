//! Client stub for the `google.cloud.speech.v1.Speech` service

use tonic::codegen::{http, Body, Bytes, GrpcMethod, StdError};

use super::proto::{NonStreamingRecognizeResponse, RecognizeRequest};

const SERVICE_NAME: &str = "google.cloud.speech.v1.Speech";

/// Typed stub over any gRPC transport service
#[derive(Debug, Clone)]
pub struct SpeechClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl<T> SpeechClient<T>
where
    T: tonic::client::GrpcService<tonic::body::BoxBody>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
{
    pub fn new(inner: T) -> Self {
        Self {
            inner: tonic::client::Grpc::new(inner),
        }
    }

    /// Recognize a complete audio payload in one unary call
    pub async fn non_streaming_recognize(
        &mut self,
        request: impl tonic::IntoRequest<RecognizeRequest>,
    ) -> Result<tonic::Response<NonStreamingRecognizeResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;

        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/google.cloud.speech.v1.Speech/NonStreamingRecognize",
        );
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, "NonStreamingRecognize"));
        self.inner.unary(req, path, codec).await
    }
}
