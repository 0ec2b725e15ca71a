use crate::admin::AdminManager;
use crate::events;
use crate::storage;
use crate::types::SavingsError;
use soroban_sdk::{Address, Env, Vec};

/// Admin-controlled allow-list of tokens goals may be created against.
pub struct TokenRegistry;

impl TokenRegistry {
    /// Allow-list a token. Adding a token twice is a no-op.
    pub fn add_token(env: &Env, caller: &Address, token: Address) -> Result<(), SavingsError> {
        AdminManager::require_admin(env, caller)?;

        let mut tokens = storage::get_allowed_tokens(env);
        if !tokens.contains(&token) {
            tokens.push_back(token.clone());
            storage::set_allowed_tokens(env, &tokens);
            events::token_added(env, &token);
        }
        storage::bump_instance(env);

        Ok(())
    }

    /// Remove a token from the allow-list. Goals already created against it keep working.
    pub fn remove_token(env: &Env, caller: &Address, token: Address) -> Result<(), SavingsError> {
        AdminManager::require_admin(env, caller)?;

        let mut tokens = storage::get_allowed_tokens(env);
        if let Some(index) = tokens.first_index_of(&token) {
            tokens.remove(index);
            storage::set_allowed_tokens(env, &tokens);
            events::token_removed(env, &token);
        }
        storage::bump_instance(env);

        Ok(())
    }

    pub fn is_token_allowed(env: &Env, token: &Address) -> bool {
        storage::get_allowed_tokens(env).contains(token)
    }

    pub fn get_allowed_tokens(env: &Env) -> Vec<Address> {
        storage::get_allowed_tokens(env)
    }
}
