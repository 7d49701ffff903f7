use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::translate::{DispatchError, ValidationError};

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Body the JSON extractor refused; `status` is 400, 413 or 415
    #[error("Corpo da requisição inválido: {message}")]
    InvalidBody { status: StatusCode, message: String },
    #[error("Método não permitido. Use POST.")]
    MethodNotAllowed,
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("Erro interno do servidor.")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody { status, .. } => *status,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Dispatch(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client. Provider failures get a fixed text
    /// per kind; only upstream errors carry the provider's own message.
    pub fn client_message(&self) -> String {
        match self {
            Self::Dispatch(DispatchError::Unconfigured) => {
                "Serviço de tradução não configurado. Contate o administrador.".to_string()
            }
            Self::Dispatch(DispatchError::AuthFailed(_)) => {
                "Chave da API inválida. Verifique a credencial do provedor.".to_string()
            }
            Self::Dispatch(DispatchError::QuotaExceeded(_)) => {
                "Cota da API excedida. Verifique seu plano no provedor.".to_string()
            }
            Self::Dispatch(DispatchError::ModelNotFound(_)) => {
                "O modelo de tradução configurado não está disponível.".to_string()
            }
            Self::Dispatch(DispatchError::Upstream(message)) => {
                format!("Erro na tradução: {}", message)
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.client_message() }))).into_response()
    }
}
