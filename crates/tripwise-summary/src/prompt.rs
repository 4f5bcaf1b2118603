//! Prompt construction and the canned summary used when no model is available.

use tripwise_core::{Activity, Hotel};

pub const SYSTEM_PROMPT: &str = "You are an expert travel planner AI assistant.";

/// Hotels and activities listed in the prompt, each.
const PROMPT_ITEMS: usize = 3;

/// Hotels and activities named in the default summary, each.
const DEFAULT_SUMMARY_ITEMS: usize = 2;

const ITINERARY: &str = "\n\n3-Day Itinerary:\n\
• Day 1: Arrival, check-in, and explore local markets\n\
• Day 2: Visit top attractions and enjoy water activities\n\
• Day 3: Cultural experiences and departure\n";

const TRAVEL_TIP: &str =
    "\nTravel Tip: Book accommodations in advance during peak season for better rates!";

/// User message for the chat completion.
#[must_use]
pub fn build_user_prompt(
    destination: &str,
    budget: u64,
    hotels: &[Hotel],
    activities: &[Activity],
) -> String {
    let hotels_text = hotels
        .iter()
        .take(PROMPT_ITEMS)
        .map(|h| format!("- {} (Rating: {}/5, Price: {})", h.name, h.rating, h.price))
        .collect::<Vec<_>>()
        .join("\n");
    let activities_text = activities
        .iter()
        .take(PROMPT_ITEMS)
        .map(|a| format!("- {} (Rating: {}/5, Category: {})", a.name, a.rating, a.category))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful travel planner AI.\n\
         Based on this data, create a short travel summary for {destination} under a budget of ₹{budget}.\n\
         Mention 2-3 top hotels and 2-3 interesting activities.\n\
         Then suggest a 3-day itinerary in bullet points.\n\
         Keep the response under 150 words.\n\
         \n\
         Hotels:\n\
         {hotels_text}\n\
         \n\
         Activities:\n\
         {activities_text}\n\
         \n\
         Provide a concise, engaging summary with a 3-day itinerary."
    )
}

/// Deterministic summary naming the top one or two hotels and activities.
#[must_use]
pub fn default_summary(
    destination: &str,
    budget: u64,
    hotels: &[Hotel],
    activities: &[Activity],
) -> String {
    let mut summary = format!(
        "Welcome to {destination}! With a budget of ₹{budget}, you can enjoy a wonderful trip. "
    );

    let hotel_names: Vec<&str> = hotels
        .iter()
        .take(DEFAULT_SUMMARY_ITEMS)
        .map(|h| h.name.as_str())
        .collect();
    if !hotel_names.is_empty() {
        summary.push_str("Top hotel recommendations include ");
        summary.push_str(&hotel_names.join(" and "));
        summary.push_str(". ");
    }

    let activity_names: Vec<&str> = activities
        .iter()
        .take(DEFAULT_SUMMARY_ITEMS)
        .map(|a| a.name.as_str())
        .collect();
    if !activity_names.is_empty() {
        summary.push_str("Don't miss exciting activities like ");
        summary.push_str(&activity_names.join(" and "));
        summary.push_str(". ");
    }

    summary.push_str(ITINERARY);
    summary.push_str(TRAVEL_TIP);
    summary
}
