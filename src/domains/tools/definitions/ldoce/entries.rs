//! Dictionary entries tool - the richer multi-entry shape.
//!
//! Scrapes the same LDOCE page as the lookup tool but keeps every
//! `dictentry` block (homographs), splits pronunciation into British and
//! American variants, and additionally collects the "Examples from the
//! Corpus" groups and the word origin section.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::common::{
    element_text, error_result, fetch_page, first_text, first_text_opt, json_result, selector,
    split_pronunciation,
};
use crate::core::config::Config;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the dictionary entries tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DictionaryEntriesParams {
    /// The word to look up.
    #[schemars(description = "The English word to look up")]
    pub word: String,
}

// ============================================================================
// Output Shapes
// ============================================================================

/// The document returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct EntriesDocument {
    pub word: String,
    pub entries: Vec<EntryDetail>,
    pub corpus_examples: Vec<CorpusExampleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<WordOrigin>,
}

/// One homograph entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    pub headword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homograph: Option<String>,
    pub part_of_speech: String,
    pub pronunciations: PronunciationPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflections: Option<String>,
    pub senses: Vec<RichSense>,
}

/// Pronunciation split on the site's `$` separator.
#[derive(Debug, Clone, Serialize)]
pub struct PronunciationPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub british: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub american: Option<String>,
}

/// One sense in the rich shape.
#[derive(Debug, Clone, Serialize)]
pub struct RichSense {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signpost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    pub examples: Vec<String>,
}

/// One "Examples from the Corpus" group.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusExampleGroup {
    pub heading: String,
    pub examples: Vec<String>,
}

/// The word origin (etymology) section.
#[derive(Debug, Clone, Serialize)]
pub struct WordOrigin {
    pub headword: String,
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Dictionary entries tool - fetches and scrapes one LDOCE page into the
/// rich multi-entry shape.
pub struct DictionaryEntriesTool;

impl DictionaryEntriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_dictionary_entries";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up an English word in the Longman Dictionary of Contemporary English and return every entry for it. Returns a JSON document with an entries array (headword, homograph number, part of speech, British and American pronunciation, senses with signposts and examples), corpus example groups, and word origin.";

    /// Execute the tool logic: fetch the page, scrape it, serialize.
    pub fn execute(params: &DictionaryEntriesParams, config: &Config) -> CallToolResult {
        info!("Dictionary entries lookup for: {}", params.word);

        let page = match fetch_page(&config.dictionary, &params.word) {
            Ok(page) => page,
            Err(e) => return error_result(&e.to_string()),
        };

        let document = Html::parse_document(&page);
        json_result(&parse_entries_document(&document, params.word.trim()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DictionaryEntriesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: DictionaryEntriesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // The page fetch uses a blocking HTTP client; keep it off
                // the async executor.
                let result =
                    tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Build the full document. Missing sections become empty collections.
fn parse_entries_document(document: &Html, word: &str) -> EntriesDocument {
    EntriesDocument {
        word: word.to_string(),
        entries: extract_entries(document, word),
        corpus_examples: extract_corpus_examples(document),
        origin: extract_origin(document),
    }
}

/// Extract every `dictentry` block as a homograph entry.
fn extract_entries(document: &Html, word: &str) -> Vec<EntryDetail> {
    let entry_sel = selector("span.dictentry");
    document
        .select(&entry_sel)
        .map(|entry| parse_entry(entry, word))
        .collect()
}

fn parse_entry(entry: ElementRef<'_>, word: &str) -> EntryDetail {
    let headword = first_text(entry, "span.HWD");
    let (british, american) = split_pronunciation(&first_text(entry, "span.PronCodes"));

    EntryDetail {
        headword: if headword.is_empty() {
            word.to_string()
        } else {
            headword
        },
        homograph: first_text_opt(entry, "span.HOMNUM"),
        part_of_speech: first_text(entry, "span.POS"),
        pronunciations: PronunciationPair { british, american },
        inflections: first_text_opt(entry, "span.Inflections"),
        senses: entry
            .select(&selector("span.Sense"))
            .map(parse_rich_sense)
            .collect(),
    }
}

fn parse_rich_sense(sense: ElementRef<'_>) -> RichSense {
    RichSense {
        number: first_text(sense, "span.sensenum"),
        signpost: first_text_opt(sense, "span.SIGNPOST"),
        grammar: first_text_opt(sense, "span.GRAM"),
        definition: first_text(sense, "span.DEF"),
        cross_reference: first_text_opt(sense, "span.Crossref"),
        examples: sense
            .select(&selector("span.EXAMPLE"))
            .map(element_text)
            .collect(),
    }
}

/// Collect the "Examples from the Corpus" groups.
fn extract_corpus_examples(document: &Html) -> Vec<CorpusExampleGroup> {
    let group_sel = selector(".exaGroup");
    let example_sel = selector("span.exa");

    document
        .select(&group_sel)
        .map(|group| CorpusExampleGroup {
            heading: first_text(group, ".title"),
            examples: group.select(&example_sel).map(element_text).collect(),
        })
        .filter(|group| !group.examples.is_empty() || !group.heading.is_empty())
        .collect()
}

/// Extract the word origin section, if the page carries one.
fn extract_origin(document: &Html) -> Option<WordOrigin> {
    let etym_sel = selector("span.etym");
    let block = document.select(&etym_sel).next()?;

    let headword = first_text(block, "span.HWD");
    let mut text = first_text(block, "span.Sense");
    if text.is_empty() {
        text = element_text(block);
    }

    if headword.is_empty() && text.is_empty() {
        None
    } else {
        Some(WordOrigin { headword, text })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RICH_FIXTURE: &str = r#"
        <html><body>
          <span class="dictentry">
            <span class="Head">
              <span class="HWD">record</span>
              <span class="HOMNUM">1</span>
              <span class="PronCodes">/ˈrekɔːd $ -ərd/</span>
              <span class="POS">noun</span>
            </span>
            <span class="Sense">
              <span class="sensenum">1</span>
              <span class="SIGNPOST">information</span>
              <span class="GRAM">[countable]</span>
              <span class="DEF">information about something that is kept</span>
              <span class="EXAMPLE">medical records</span>
            </span>
          </span>
          <span class="dictentry">
            <span class="Head">
              <span class="HWD">record</span>
              <span class="HOMNUM">2</span>
              <span class="PronCodes">/rɪˈkɔːd/</span>
              <span class="POS">verb</span>
              <span class="Inflections">recorded, recording</span>
            </span>
            <span class="Sense">
              <span class="sensenum">1</span>
              <span class="DEF">to write information down</span>
            </span>
          </span>
          <span class="exaGroup">
            <span class="title">record</span>
            <span class="exa">The records show a steady decline.</span>
            <span class="exa">She kept a record of every payment.</span>
          </span>
          <span class="etym">
            <span class="Head"><span class="HWD">record</span></span>
            <span class="Sense">1200-1300 Old French recorder</span>
          </span>
        </body></html>
    "#;

    #[test]
    fn test_entries_array_keeps_homographs_in_order() {
        let html = Html::parse_document(RICH_FIXTURE);
        let doc = parse_entries_document(&html, "record");

        assert_eq!(doc.word, "record");
        assert_eq!(doc.entries.len(), 2);

        let noun = &doc.entries[0];
        assert_eq!(noun.headword, "record");
        assert_eq!(noun.homograph.as_deref(), Some("1"));
        assert_eq!(noun.part_of_speech, "noun");
        assert_eq!(noun.inflections, None);

        let verb = &doc.entries[1];
        assert_eq!(verb.homograph.as_deref(), Some("2"));
        assert_eq!(verb.part_of_speech, "verb");
        assert_eq!(verb.inflections.as_deref(), Some("recorded, recording"));
    }

    #[test]
    fn test_pronunciation_split_per_entry() {
        let html = Html::parse_document(RICH_FIXTURE);
        let doc = parse_entries_document(&html, "record");

        let noun = &doc.entries[0].pronunciations;
        assert_eq!(noun.british.as_deref(), Some("/ˈrekɔːd/"));
        assert_eq!(noun.american.as_deref(), Some("/-ərd/"));

        let verb = &doc.entries[1].pronunciations;
        assert_eq!(verb.british.as_deref(), Some("/rɪˈkɔːd/"));
        assert_eq!(verb.american, None);
    }

    #[test]
    fn test_rich_sense_fields() {
        let html = Html::parse_document(RICH_FIXTURE);
        let doc = parse_entries_document(&html, "record");

        let sense = &doc.entries[0].senses[0];
        assert_eq!(sense.number, "1");
        assert_eq!(sense.signpost.as_deref(), Some("information"));
        assert_eq!(sense.grammar.as_deref(), Some("[countable]"));
        assert_eq!(sense.definition, "information about something that is kept");
        assert_eq!(sense.examples, vec!["medical records"]);
        assert_eq!(sense.cross_reference, None);
    }

    #[test]
    fn test_corpus_example_groups() {
        let html = Html::parse_document(RICH_FIXTURE);
        let groups = extract_corpus_examples(&html);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading, "record");
        assert_eq!(groups[0].examples.len(), 2);
        assert_eq!(groups[0].examples[0], "The records show a steady decline.");
    }

    #[test]
    fn test_origin_section() {
        let html = Html::parse_document(RICH_FIXTURE);
        let origin = extract_origin(&html).expect("origin present");
        assert_eq!(origin.headword, "record");
        assert_eq!(origin.text, "1200-1300 Old French recorder");
    }

    #[test]
    fn test_empty_page_yields_empty_document() {
        let html = Html::parse_document("<html><body></body></html>");
        let doc = parse_entries_document(&html, "ghost");
        assert_eq!(doc.word, "ghost");
        assert!(doc.entries.is_empty());
        assert!(doc.corpus_examples.is_empty());
        assert!(doc.origin.is_none());
    }

    #[test]
    fn test_partial_entry_degrades_to_empty_fields() {
        let html = Html::parse_document(r#"<span class="dictentry"></span>"#);
        let doc = parse_entries_document(&html, "stub");
        assert_eq!(doc.entries.len(), 1);
        let entry = &doc.entries[0];
        assert_eq!(entry.headword, "stub");
        assert_eq!(entry.part_of_speech, "");
        assert!(entry.pronunciations.british.is_none());
        assert!(entry.senses.is_empty());
    }

    #[test]
    fn test_serialized_document_omits_absent_options() {
        let html = Html::parse_document("<html><body></body></html>");
        let doc = parse_entries_document(&html, "ghost");
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("origin").is_none());
        assert_eq!(value["entries"], serde_json::json!([]));
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_entries_live() {
        let params = DictionaryEntriesParams {
            word: "record".to_string(),
        };
        let config = Config::default();
        let result = DictionaryEntriesTool::execute(&params, &config);
        assert!(
            !result.is_error.unwrap_or(false),
            "Expected success but got error"
        );
    }
}
