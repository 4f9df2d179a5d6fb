//! Assistant gateway: formats bounded context from the derived
//! aggregates and forwards questions to the completion service. Every
//! failure degrades to a fixed placeholder string; nothing here returns
//! an error to the caller.

use log::error;

use crate::domain::app_data::AppData;
use crate::gemini::CompletionClient;
use crate::services::reports;

pub const MISSING_KEY_INVITE: &str = "API Key missing. Please configure.";
pub const MISSING_KEY_ANALYZE: &str = "API Key missing.";
pub const MISSING_KEY_CHAT: &str = "Please set your API Key.";
pub const INVITE_FAILED: &str = "Error generating invite.";
pub const ANALYZE_FAILED: &str = "Error analyzing budget.";
pub const CHAT_FAILED: &str = "Sorry, I'm having trouble connecting right now.";

/// Short WhatsApp-ready invitation for one guest and one event.
pub async fn generate_invite<C>(
    client: &C,
    guest_name: &str,
    event_name: &str,
    language: &str,
) -> String
where
    C: CompletionClient,
{
    if !client.is_configured() {
        return MISSING_KEY_INVITE.to_string();
    }

    let language = if language == "ur" {
        "Urdu (in Urdu script)"
    } else {
        "English"
    };
    let prompt = format!(
        "Write a short, warm wedding invitation message for {event_name} specifically for a guest named {guest_name}. \
        Language: {language}. \
        Keep it under 50 words. Format it for WhatsApp."
    );

    match client.generate(&prompt, None).await {
        Ok(text) => text,
        Err(e) => {
            error!("Invite generation failed: {e}");
            INVITE_FAILED.to_string()
        }
    }
}

/// Three-bullet budget analysis over the current aggregate.
pub async fn analyze_budget<C>(client: &C, data: &AppData) -> String
where
    C: CompletionClient,
{
    if !client.is_configured() {
        return MISSING_KEY_ANALYZE.to_string();
    }

    let total_budget = reports::total_event_budget(&data.events);
    let vendor_totals = reports::vendor_totals(&data.vendors);
    let (pending, _) = reports::partition_tasks(&data.tasks);

    let context = format!(
        "Total Event Budget: {total_budget}\n\
         Total Vendor Contracts: {}\n\
         Total Paid to Vendors: {}\n\
         Number of Guests: {}\n\
         Pending Tasks: {}",
        vendor_totals.total_cost,
        vendor_totals.total_paid,
        data.guests.len(),
        pending.len(),
    );
    let prompt = format!(
        "Analyze this wedding budget and status. Give 3 short, bullet-point insights or warnings. \
        If over budget, suggest cuts. \
        Context: {context}"
    );

    match client.generate(&prompt, None).await {
        Ok(text) => text,
        Err(e) => {
            error!("Budget analysis failed: {e}");
            ANALYZE_FAILED.to_string()
        }
    }
}

/// Free-text question answered against a JSON snapshot of the data.
pub async fn chat<C>(client: &C, message: &str, context_data: &str) -> String
where
    C: CompletionClient,
{
    if !client.is_configured() {
        return MISSING_KEY_CHAT.to_string();
    }

    let system_instruction = format!(
        "You are a helpful Wedding Planner Assistant. \
        You have access to the following current wedding data summary: {context_data}. \
        Answer questions based on this data. Be concise and helpful."
    );

    match client.generate(message, Some(&system_instruction)).await {
        Ok(text) => text,
        Err(e) => {
            error!("Assistant chat failed: {e}");
            CHAT_FAILED.to_string()
        }
    }
}

/// JSON-serialized context snapshot of counts and names supplied to the
/// chat system instruction.
pub fn build_context(data: &AppData) -> String {
    let summary = reports::dashboard_summary(data);
    let snapshot = serde_json::json!({
        "guestCount": summary.guest_count,
        "guestNames": data.guests.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
        "events": data.events.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        "totalSalami": summary.total_salami,
        "totalEventBudget": summary.total_event_budget,
        "vendorOutstanding": summary.vendor_totals.outstanding,
        "pendingTasks": summary.pending_task_count,
    });
    snapshot.to_string()
}

// The stub-client tests need an async runtime; actix ships one with the
// server feature, which is on by default.
#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use crate::gemini::CompletionError;

    /// Client with no credential configured.
    struct Unconfigured;

    impl CompletionClient for Unconfigured {
        fn is_configured(&self) -> bool {
            false
        }

        async fn generate(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<String, CompletionError> {
            unreachable!("must not be called without a credential")
        }
    }

    /// Client whose every request fails.
    struct Failing;

    impl CompletionClient for Failing {
        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<String, CompletionError> {
            Err(CompletionError::Empty)
        }
    }

    /// Client echoing the prompt back, for asserting prompt contents.
    struct Echo;

    impl CompletionClient for Echo {
        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            prompt: &str,
            system_instruction: Option<&str>,
        ) -> Result<String, CompletionError> {
            Ok(format!(
                "{}|{prompt}",
                system_instruction.unwrap_or_default()
            ))
        }
    }

    #[actix_web::test]
    async fn missing_credential_returns_fixed_placeholders() {
        let data = AppData::seed();
        assert_eq!(
            generate_invite(&Unconfigured, "Chacha Bashir", "Barat", "en").await,
            MISSING_KEY_INVITE
        );
        assert_eq!(analyze_budget(&Unconfigured, &data).await, MISSING_KEY_ANALYZE);
        assert_eq!(chat(&Unconfigured, "hello", "{}").await, MISSING_KEY_CHAT);
    }

    #[actix_web::test]
    async fn failures_degrade_to_apology_strings() {
        let data = AppData::seed();
        assert_eq!(
            generate_invite(&Failing, "Chacha Bashir", "Barat", "ur").await,
            INVITE_FAILED
        );
        assert_eq!(analyze_budget(&Failing, &data).await, ANALYZE_FAILED);
        assert_eq!(chat(&Failing, "hello", "{}").await, CHAT_FAILED);
    }

    #[actix_web::test]
    async fn prompts_carry_the_request_details() {
        let invite = generate_invite(&Echo, "Phupho Nasreen", "Mehndi Night", "ur").await;
        assert!(invite.contains("Phupho Nasreen"));
        assert!(invite.contains("Mehndi Night"));
        assert!(invite.contains("Urdu"));

        let reply = chat(&Echo, "How many guests?", "{\"guestCount\":3}").await;
        assert!(reply.contains("guestCount"));
        assert!(reply.ends_with("How many guests?"));

        let data = AppData::seed();
        let analysis = analyze_budget(&Echo, &data).await;
        assert!(analysis.contains("Total Event Budget: 3100000"));
        assert!(analysis.contains("Pending Tasks: 2"));
    }

    #[test]
    fn context_snapshot_is_valid_json() {
        let data = AppData::seed();
        let context = build_context(&data);
        let value: serde_json::Value = serde_json::from_str(&context).unwrap();
        assert_eq!(value["guestCount"], 3);
        assert_eq!(value["pendingTasks"], 2);
    }
}
