use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config::RelayConfig;
use crate::error::ContactError;

#[wasm_bindgen]
extern "C" {
    /// `emailjs.send` from the EmailJS browser SDK loaded in `index.html`.
    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    async fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: JsValue,
        options: JsValue,
    ) -> Result<JsValue, JsValue>;
}

// -- Relay payloads --

#[derive(Serialize)]
struct RelayOptions {
    #[serde(rename = "publicKey")]
    public_key: String,
}

/// Response object the relay resolves (and rejects) with.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    status: u16,
    #[serde(default)]
    text: String,
}

/// The four fields of the contact form; also the relay template parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// All fields required, and the email must look like `local@domain.tld`.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContactError::Validation(format!(
                    "Please fill in your {}.",
                    field
                )));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        Ok(())
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Where the contact form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }

    /// Banners auto-dismiss; `Sending` never does.
    pub fn is_transient(&self) -> bool {
        matches!(self, FormStatus::Sent | FormStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Validate and forward a message to the relay.
pub async fn send_message(relay: &RelayConfig, message: &ContactMessage) -> Result<(), ContactError> {
    message.validate()?;

    let params = serde_wasm_bindgen::to_value(&message.trimmed())
        .map_err(|e| ContactError::Encode(e.to_string()))?;
    let options = serde_wasm_bindgen::to_value(&RelayOptions {
        public_key: relay.public_key.clone(),
    })
    .map_err(|e| ContactError::Encode(e.to_string()))?;

    tracing::info!(service = %relay.service_id, "Sending contact message");

    let result = emailjs_send(&relay.service_id, &relay.template_id, params, options)
        .await
        .map_err(|e| ContactError::Relay(relay_error_text(e)))?;

    let response: RelayResponse = serde_wasm_bindgen::from_value(result)
        .map_err(|e| ContactError::Relay(e.to_string()))?;

    if response.status == 200 {
        tracing::info!("Contact message accepted by relay");
        Ok(())
    } else {
        tracing::warn!(status = response.status, text = %response.text, "Relay refused message");
        Err(ContactError::Status(response.status))
    }
}

fn relay_error_text(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(response) = serde_wasm_bindgen::from_value::<RelayResponse>(err) {
        return format!("{} ({})", response.text, response.status);
    }
    "Unknown error".to_string()
}
