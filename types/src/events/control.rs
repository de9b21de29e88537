pub const AUDIO_PLAYER_NAMESPACE: &str = "AudioPlayer";

/// The JSON part the service interleaves with its audio parts.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_body: Option<MessageBody>,
}

impl ControlMessage {
    pub fn message_body(&self) -> Option<&MessageBody> {
        self.message_body.as_ref()
    }

    pub fn with_message_body(mut self, body: MessageBody) -> Self {
        self.message_body = Some(body);
        self
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    navigation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    directives: Option<Vec<Directive>>,
}

impl MessageBody {
    pub fn navigation_token(&self) -> Option<&str> {
        self.navigation_token.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_deref().unwrap_or_default()
    }

    pub fn with_navigation_token(mut self, token: &str) -> Self {
        self.navigation_token = Some(token.to_string());
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.get_or_insert_with(Vec::new).push(directive);
        self
    }
}

/// An instruction scoped to a namespace such as `AudioPlayer`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Directive {
    #[serde(default)]
    namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    payload: serde_json::Value,
}

impl Directive {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn navigation_token(&self) -> Option<&str> {
        self.payload
            .get("navigationToken")
            .and_then(serde_json::Value::as_str)
    }
}
