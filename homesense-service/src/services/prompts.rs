//! Prompt construction for each endpoint.
//!
//! Every builder is a pure function of its inputs. The wording steers the
//! model; callers only rely on which inputs are included.

use crate::models::{PropertyRecord, ValuationInput};

/// Risk summary prompt for a catalogued property, aimed at a UK homebuyer.
pub fn health_check_prompt(record: &PropertyRecord) -> String {
    let risks = record.simulated_risks.join("\n");
    let documents: String = record
        .simulated_documents
        .iter()
        .map(|(label, snippet)| format!("\n{}: {}", title_case(&label.replace('_', " ")), snippet))
        .collect();

    format!(
        "Analyze the following UK property details and simulated risks for {address}. \
         Provide a concise summary of potential concerns for a homebuyer, what they mean, \
         and what to ask about.\n\n\
         Property Type: {property_type}\n\
         Price Guide: {price_guide}\n\
         Simulated Risks & Details:\n{risks}\n\n\
         Simulated Document Snippets:\n{documents}\n\n\
         Focus on key implications for a buyer in the UK property context. \
         Keep it under 200 words.",
        address = record.address,
        property_type = record.property_type,
        price_guide = record.price_guide,
    )
}

/// Open question prompt with a property-expert persona and a topic guard.
pub fn ask_ai_prompt(question: &str) -> String {
    format!(
        "You are HomeSense AI, an expert on UK residential property. \
         Answer the following question about UK property, conveyancing, or market trends. \
         Be concise, informative, and provide practical advice where relevant. \
         If the question is beyond typical property scope, state that you focus on property. \
         Question: {question}"
    )
}

/// Valuation prompt. The worked example fixes the `<estimate>. Justification: <reason>`
/// shape that [`crate::services::parse_valuation`] depends on.
pub fn valuation_prompt(input: &ValuationInput) -> String {
    format!(
        "You are HomeSense AI, an expert UK property valuer. Based on the following simulated \
         details, provide a highly realistic property valuation estimate (e.g., '£XYZ,000') and \
         a brief justification (max 50 words) for a property with these characteristics:\n\n\
         Address/Postcode: {address}\n\
         Property Type: {property_type}\n\
         Number of Bedrooms: {beds}\n\
         Condition: {condition}\n\n\
         Provide the estimate first, then the reasoning. Example: '£450,000. Justification: \
         Recent sales of similar terraced homes in SW1A 1AA support this, accounting for good \
         condition.'",
        address = input.address,
        property_type = input.property_type,
        beds = input.beds,
        condition = input.condition,
    )
}

/// Upper-case the first letter of every ASCII letter run and lower-case the
/// rest, so `"local amenity note"` becomes `"Local Amenity Note"`.
///
/// Document labels are ASCII snake_case; non-ASCII characters pass through
/// unchanged and end the current word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push(if in_word {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            });
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
