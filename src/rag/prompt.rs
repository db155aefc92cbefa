/// Fill the bartender prompt with retrieved documents and the user query.
///
/// Documents are separated by a blank line. The result ends with
/// `Answer: ` so the model continues from there.
pub fn build_prompt(documents: &[&str], query: &str) -> String {
    let context = documents.join("\n\n");
    format!(
        "You are a helpful bartender assistant. Answer the query based *only* on the provided context.\n\
         Context:\n\
         ---------------------\n\
         {context}\n\
         ---------------------\n\
         Query: {query}\n\
         Answer: "
    )
}
