//! Azure OpenAI completion provider.
//!
//! Implements [`CompletionProvider`] using [`async_openai`] with its Azure
//! configuration: the deployment id is part of the request URL and the api
//! version is pinned. Non-streaming only.

use async_openai::config::AzureConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use async_openai::Client;

use chatrelay_core::completion::CompletionProvider;
use chatrelay_types::completion::{CompletionRequest, CompletionResponse, MessageRole};
use chatrelay_types::error::CompletionError;

use crate::config::AzureOpenAiConfig;

/// Azure REST api version used for all requests.
const API_VERSION: &str = "2024-02-01";

/// Azure OpenAI provider.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct AzureOpenAiProvider {
    client: Client<AzureConfig>,
    deployment_id: String,
}

impl AzureOpenAiProvider {
    /// Create a provider from the relay's Azure configuration.
    pub fn new(config: &AzureOpenAiConfig) -> Self {
        use secrecy::ExposeSecret;

        let azure_config = AzureConfig::new()
            .with_api_base(&config.endpoint)
            .with_api_key(config.api_key.expose_secret())
            .with_deployment_id(&config.deployment_id)
            .with_api_version(API_VERSION);

        Self {
            client: Client::with_config(azure_config),
            deployment_id: config.deployment_id.clone(),
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    },
                ),
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            })
            .collect();

        CreateChatCompletionRequest {
            // Azure routes by deployment id in the URL; the model field is
            // still required by the request type.
            model: self.deployment_id.clone(),
            messages,
            ..Default::default()
        }
    }
}

impl CompletionProvider for AzureOpenAiProvider {
    fn name(&self) -> &str {
        "azure-openai"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        // First choice's content, kept optional: an absent choice and a
        // choice without content both surface as None.
        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone());

        Ok(CompletionResponse { content })
    }
}

/// Map an `async_openai::error::OpenAIError` to a [`CompletionError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> CompletionError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                CompletionError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                CompletionError::RateLimited
            } else {
                CompletionError::Provider(err.to_string())
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => CompletionError::AuthenticationFailed,
            Some(429) => CompletionError::RateLimited,
            _ => CompletionError::Provider(err.to_string()),
        },
        OpenAIError::JSONDeserialize(_, content) => {
            CompletionError::Deserialization(format!("failed to parse response: {content}"))
        }
        _ => CompletionError::Provider(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_types::completion::Message;
    use secrecy::SecretString;

    fn test_provider() -> AzureOpenAiProvider {
        AzureOpenAiProvider::new(&AzureOpenAiConfig {
            endpoint: "https://example.openai.azure.com".to_string(),
            api_key: SecretString::from("test-key".to_string()),
            deployment_id: "gpt-35-turbo".to_string(),
        })
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(test_provider().name(), "azure-openai");
    }

    #[test]
    fn test_build_request_two_message_context() {
        let provider = test_provider();
        let request = CompletionRequest {
            messages: vec![
                Message::system("You are a helpful assistant."),
                Message::user("hello"),
            ],
        };

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "gpt-35-turbo");
        assert_eq!(oai_req.messages.len(), 2);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            oai_req.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_map_openai_error_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("authentication_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, CompletionError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, CompletionError::RateLimited));
    }

    #[test]
    fn test_map_openai_error_generic() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "deployment is busy".to_string(),
            r#type: Some("server_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, CompletionError::Provider(_)));
    }
}
