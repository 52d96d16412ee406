use epf_desk_api::{ApiError, ApiResult};
use epf_desk_store::models::requests::MutationAck;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Maps a reqwest failure (connect, timeout, body read) onto the transport
/// error kind.
pub fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::TransportError(err.to_string())
}

/// Reads a mutating call's response.
///
/// Any 2xx is success; everything else becomes `Rejected` carrying the
/// body's `message`, if it had one.
pub async fn read_ack(response: Response) -> ApiResult<MutationAck> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    let ack = MutationAck::from_body(&body);

    if status.is_success() {
        Ok(ack)
    } else {
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: ack.message,
        })
    }
}

/// Reads a JSON body, treating non-2xx as `Rejected` and a malformed body as
/// `DecodeError`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message: MutationAck::from_body(&body).message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::DecodeError(e.to_string()))
}
