//! Recognition domain module

mod audio;
mod encoding;
mod request;
mod response;

pub use audio::{AudioRequest, AudioSource};
pub use encoding::AudioEncoding;
pub use request::{RecognitionParams, RecognizeRequest, LANGUAGE_CODE};
pub use response::{
    Alternative, EndpointerEvent, RecognitionResponse, RecognitionResult, RecognizeResponse,
    ResponseError,
};
