/// Reply relayed to the customer when the completion provider returns nothing usable.
pub const FALLBACK_REPLY: &str = "I didn't understand, could you repeat?";

/// Builds the instruction sent to the completion provider.
///
/// The customer's message is embedded verbatim; `slots` are joined with `", "`.
pub fn compose_prompt(message: &str, slots: &[String]) -> String {
    format!(
        "The customer said: \"{}\". These are the **available** times today between 9h and 17h: {}. \
         Which time would you like to book?",
        message,
        slots.join(", ")
    )
}

/// Picks the text to relay: the provider's reply, or [`FALLBACK_REPLY`] when it is
/// missing or blank.
pub fn reply_text(completion: Option<String>) -> String {
    completion
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}
