use agenda_core::{
    models::message::{ChatMessage, OutboundMessage},
    ports::{CompletionProvider, MessagingGateway},
};
use async_trait::async_trait;
use mockall::mock;

// Mock collaborators for testing
mock! {
    pub CompletionProvider {}

    #[async_trait]
    impl CompletionProvider for CompletionProvider {
        async fn complete(&self, messages: &[ChatMessage]) -> eyre::Result<Option<String>>;
    }
}

mock! {
    pub MessagingGateway {}

    #[async_trait]
    impl MessagingGateway for MessagingGateway {
        async fn send_message(&self, message: &OutboundMessage) -> eyre::Result<()>;
    }
}
