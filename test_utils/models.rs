pub mod scripted_address_verifier;
pub use scripted_address_verifier::ScriptedAddressVerifier;

pub mod scripted_suggestion_provider;
pub use scripted_suggestion_provider::{
    ScriptedOutcome, ScriptedResponse, ScriptedSuggestionProvider,
};
