// Keyword analysis engine: tokenization, stop-word filtering, frequency
// ranking, and substring-containment matching.
// All computation is pure and synchronous; handlers recompute per request
// and store nothing.

pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod stop_words;
pub mod tokenizer;
