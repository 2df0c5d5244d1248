use shared_types::TokenPair;
use std::sync::{PoisonError, RwLock};

/// Where the client keeps the current access/refresh tokens.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<TokenPair>;
    fn set(&self, tokens: TokenPair);
    fn clear(&self);

    fn access_token(&self) -> Option<String> {
        self.get().map(|t| t.access_token)
    }

    fn refresh_token(&self) -> Option<String> {
        self.get().map(|t| t.refresh_token)
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<TokenPair> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, tokens: TokenPair) {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = Some(tokens);
    }

    fn clear(&self) {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
