//! User-facing text for API failures.

use api::ApiError;

/// The message shown for `error`. The server's own text wins when it sent one.
pub fn describe_error(error: &ApiError) -> String {
    match error {
        ApiError::Auth(message) if !message.trim().is_empty() => message.clone(),
        ApiError::Auth(_) => "Usuario o contraseña incorrectos.".to_string(),
        ApiError::Transport(_) => {
            "No se pudo conectar con el servidor. Verifique su conexión e intente nuevamente."
                .to_string()
        }
        ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
        ApiError::Status { status, .. } => match status {
            401 | 403 => "Su sesión no es válida o no tiene permisos.".to_string(),
            404 => "El recurso solicitado no existe.".to_string(),
            500..=599 => format!("Error del servidor ({status}). Intente más tarde."),
            _ => format!("Error inesperado ({status})."),
        },
        ApiError::Decode(_) => "La respuesta del servidor no es válida.".to_string(),
        ApiError::InvalidUrl(_) => "La dirección del servidor no es válida.".to_string(),
        ApiError::MissingToken => "Su sesión expiró. Inicie sesión nuevamente.".to_string(),
    }
}
